use i18nrs::yew::use_translation;
use yew::{Callback, Html, function_component, html};
use yewdux::prelude::use_store;

use crate::models::app_state::{AppState, set_chat_open};

/// Floating button opening the support chat.
#[function_component(ChatButton)]
pub fn chat_button() -> Html {
    let (i18n, ..) = use_translation();
    let (state, dispatch) = use_store::<AppState>();

    if state.chat_open {
        return Html::default();
    }

    let onclick = Callback::from(move |_| set_chat_open(&dispatch, true));

    html! {
        <button
            class="btn btn-primary btn-circle btn-lg fixed bottom-6 right-6 z-40 shadow-lg animate-pulse"
            type="button"
            aria-label={i18n.t("chat.open")}
            {onclick}
        >
            <i class="fa-solid fa-comment-dots text-xl"></i>
        </button>
    }
}

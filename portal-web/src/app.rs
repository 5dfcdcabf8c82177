use crate::components::{ChatButton, ChatWidget};
use crate::models::app_state::AppState;
use crate::routes::{MainRoute, switch};
use crate::storage;
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_dispatch;

/// Root component: routed pages plus the chat launcher, which stays mounted
/// across navigation.
#[function_component(App)]
pub fn app() -> Html {
    let dispatch = use_dispatch::<AppState>();

    use_effect_with((), move |()| {
        dispatch.set(AppState::from_session(&storage::session()));
    });

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
            <ChatButton />
            <ChatWidget />
        </BrowserRouter>
    }
}

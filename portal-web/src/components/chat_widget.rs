use i18nrs::yew::use_translation;
use shared::models::{ChatMessage, Timestamp};
use shared::workflow::chat::{ChatTranscript, ask};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::ToHtml;
use yew::prelude::*;
use yewdux::prelude::use_store;

use crate::api::PortalClient;
use crate::models::app_state::{AppState, set_chat_open};
use crate::storage::BrowserStorage;

#[derive(Properties, PartialEq)]
struct ChatBubbleProps {
    message: ChatMessage,
}

#[function_component(ChatBubble)]
fn chat_bubble(props: &ChatBubbleProps) -> Html {
    let message = &props.message;
    let (align, bubble) = if message.is_user {
        ("chat-end", "chat-bubble-primary")
    } else {
        ("chat-start", "")
    };

    html! {
        <div class={classes!("chat", align)}>
            <div class={classes!("chat-bubble", bubble)}>
                <p class="text-sm whitespace-pre-wrap">{ &message.text }</p>
            </div>
            <div class="chat-footer text-xs opacity-70">{ message.timestamp.to_html() }</div>
        </div>
    }
}

/// Support chat window.
///
/// Stays mounted while closed so an answer arriving after the window is
/// dismissed still lands in the transcript.
#[function_component(ChatWidget)]
pub fn chat_widget() -> Html {
    let (i18n, ..) = use_translation();
    let (state, dispatch) = use_store::<AppState>();
    let transcript = use_state(|| ChatTranscript::load(&BrowserStorage));
    let input = use_state(String::new);
    let bottom = use_node_ref();

    {
        use_effect_with((*transcript).clone(), |transcript| {
            transcript.persist(&BrowserStorage);
        });
    }

    {
        let bottom = bottom.clone();
        use_effect_with(
            (transcript.messages().len(), state.chat_open),
            move |_| {
                if let Some(element) = bottom.cast::<web_sys::Element>() {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    element.scroll_into_view_with_scroll_into_view_options(&options);
                }
            },
        );
    }

    if !state.chat_open {
        return Html::default();
    }

    let send = {
        let transcript = transcript.clone();
        let input = input.clone();
        Callback::from(move |()| {
            let mut next = (*transcript).clone();
            let Some(turn) = next.begin(&input, Timestamp::now()) else {
                return;
            };
            transcript.set(next.clone());
            input.set(String::new());

            let transcript = transcript.clone();
            spawn_local(async move {
                let resolution = ask(&PortalClient::shared(), &turn).await;
                next.resolve(resolution, Timestamp::now());
                transcript.set(next);
            });
        })
    };

    let on_input = {
        let input = input.clone();
        Callback::from(move |event: InputEvent| {
            let target: HtmlInputElement = event.target_unchecked_into();
            input.set(target.value());
        })
    };

    let on_keydown = {
        let send = send.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" && !event.shift_key() {
                event.prevent_default();
                send.emit(());
            }
        })
    };

    let on_click_send = {
        let send = send.clone();
        Callback::from(move |_| send.emit(()))
    };

    let on_close = Callback::from(move |_| set_chat_open(&dispatch, false));

    let pending = transcript.is_pending();
    let can_send = !pending && !input.trim().is_empty();

    html! {
        <div class="fixed inset-0 bg-black/50 flex items-end justify-end p-4 z-50">
            <div class="bg-base-100 rounded-lg shadow-xl w-full max-w-md h-96 flex flex-col animate-fadeIn">
                <div class="flex items-center justify-between p-4 bg-primary text-primary-content rounded-t-lg">
                    <h3 class="font-semibold">{ i18n.t("chat.title") }</h3>
                    <button class="btn btn-ghost btn-sm btn-square" type="button" aria-label={i18n.t("chat.close")} onclick={on_close}>
                        <i class="fa-solid fa-xmark"></i>
                    </button>
                </div>

                <div class="flex-1 overflow-y-auto p-4 space-y-2">
                    if transcript.is_empty() {
                        <div class="text-center text-base-content/60 mt-8">
                            <p>{ i18n.t("chat.greeting") }</p>
                            <p>{ i18n.t("chat.prompt") }</p>
                        </div>
                    }
                    { for transcript.messages().iter().map(|message| html! {
                        <ChatBubble key={message.id.clone()} message={message.clone()} />
                    }) }
                    if pending {
                        <div class="chat chat-start">
                            <div class="chat-bubble">
                                <span class="loading loading-dots loading-sm"></span>
                            </div>
                        </div>
                    }
                    <div ref={bottom}></div>
                </div>

                <div class="p-4 border-t border-base-300 flex gap-2">
                    <input
                        class="input input-bordered flex-1"
                        type="text"
                        placeholder={i18n.t("chat.placeholder")}
                        value={(*input).clone()}
                        oninput={on_input}
                        onkeydown={on_keydown}
                        disabled={pending}
                    />
                    <button class="btn btn-primary" type="button" aria-label={i18n.t("chat.send")} disabled={!can_send} onclick={on_click_send}>
                        <i class="fa-solid fa-paper-plane"></i>
                    </button>
                </div>
            </div>
        </div>
    }
}

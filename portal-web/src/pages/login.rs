use shared::workflow::login::{LoginOutcome, login};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::{use_location, use_navigator};
use yewdux::prelude::use_store;

use crate::api::PortalClient;
use crate::components::{Alert, AlertKind};
use crate::models::app_state::{AppState, refresh_session, sign_out};
use crate::routes::{LoginReturn, MainRoute};
use crate::storage;

const TOKEN_SOURCES: [&str; 3] = [
    "Contactez votre conseiller BCB",
    "Rendez-vous en agence avec vos documents",
    "Appelez le service client BCB",
];

/// `LoginPage` page component
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let return_hint = use_location()
        .and_then(|location| location.state::<LoginReturn>())
        .map(|hint| (*hint).clone());
    let token = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    // Arriving with a hint while already logged in goes straight back.
    {
        let navigator = navigator.clone();
        let hint = return_hint.clone();
        use_effect_with(state.session.is_authenticated(), move |authenticated| {
            if let (true, Some(hint), Some(nav)) = (*authenticated, hint, navigator) {
                nav.replace(&hint.from);
            }
        });
    }

    let onsubmit = {
        let token = token.clone();
        let error = error.clone();
        let loading = loading.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let candidate = (*token).clone();
            loading.set(true);
            error.set(None);

            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            let return_hint = return_hint.clone();
            spawn_local(async move {
                let outcome = login(&PortalClient::shared(), &storage::session(), &candidate).await;
                loading.set(false);
                match outcome {
                    LoginOutcome::Authenticated => {
                        if let Some(nav) = &navigator {
                            nav.push(&LoginReturn::destination(return_hint.as_ref()));
                        }
                        refresh_session(&dispatch);
                    }
                    LoginOutcome::Rejected { message } => error.set(Some(message)),
                }
            });
        })
    };

    let on_token_change = {
        let token = token.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                token.set(input.value());
            }
        })
    };

    let on_continue = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if let Some(nav) = &navigator {
                nav.push(&MainRoute::Services);
            }
        })
    };

    let on_logout = {
        let token = token.clone();
        let error = error.clone();
        Callback::from(move |_| {
            sign_out(&dispatch);
            token.set(String::new());
            error.set(None);
        })
    };

    let body = if let Some(preview) = state.session.token_preview() {
        html! {
            <div class="text-center">
                <div class="alert alert-success mb-6 flex-col">
                    <p>{"Vous êtes déjà connecté"}</p>
                    <p class="text-sm">{ format!("Token: {preview}") }</p>
                </div>
                <div class="space-y-3">
                    <button class="btn btn-primary w-full" type="button" onclick={on_continue}>
                        {"Continuer vers les services"}
                    </button>
                    <button class="btn btn-outline w-full" type="button" onclick={on_logout}>
                        {"Se déconnecter"}
                    </button>
                </div>
            </div>
        }
    } else {
        html! {
            <form class="space-y-6" {onsubmit}>
                if let Some(message) = &*error {
                    <Alert kind={AlertKind::Error} message={message.clone()} />
                }
                <fieldset class="fieldset">
                    <label class="label" for="token">{"Token d'authentification"}</label>
                    <input
                        id="token"
                        type="text"
                        class="input w-full"
                        placeholder="Collez votre token ici..."
                        value={(*token).clone()}
                        oninput={on_token_change}
                        disabled={*loading}
                    />
                </fieldset>
                <button
                    class="btn btn-primary w-full"
                    type="submit"
                    disabled={*loading || token.trim().is_empty()}
                >
                    if *loading {
                        <span class="loading loading-spinner loading-sm"></span>
                        {"Vérification..."}
                    } else {
                        {"Se connecter"}
                    }
                </button>
            </form>
        }
    };

    html! {
        <div class="min-h-[80vh] flex items-center justify-center py-12 px-4">
            <div class="card bg-base-100 shadow-md max-w-md w-full">
                <div class="card-body">
                    <div class="text-center mb-8">
                        <div class="mx-auto w-16 h-16 rounded-full bg-primary/10 flex items-center justify-center mb-4">
                            <i class="fa-solid fa-key text-2xl text-primary"></i>
                        </div>
                        <h1 class="text-2xl font-bold">{"Authentification"}</h1>
                        <p class="text-base-content/70 mt-2">
                            {"Saisissez votre token pour accéder aux services sécurisés"}
                        </p>
                    </div>

                    { body }

                    <div class="mt-8 pt-6 border-t border-base-300">
                        <div class="bg-info/10 rounded-lg p-4">
                            <h3 class="font-medium mb-2">{"Comment obtenir votre token ?"}</h3>
                            <ul class="text-sm space-y-1">
                                { for TOKEN_SOURCES.iter().map(|source| html! { <li>{ format!("• {source}") }</li> }) }
                            </ul>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

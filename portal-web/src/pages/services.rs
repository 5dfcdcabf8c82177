use shared::api::PortalApi;
use shared::models::Service;
use tracing::warn;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_dispatch;

use crate::api::PortalClient;
use crate::components::{Loading, ServiceCard};
use crate::models::app_state::{AppState, set_chat_open};
use crate::pages::Listing;
use crate::routes::{MainRoute, OnboardingState};

/// Shown when the catalog cannot be fetched.
pub const SERVICES_LOAD_ERROR: &str = "Erreur lors du chargement des services";

/// `ServicesPage` page component
#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    let listing = use_state(|| Listing::<Service>::Loading);
    let attempt = use_state(|| 0_u32);
    let navigator = use_navigator();
    let dispatch = use_dispatch::<AppState>();

    {
        let listing = listing.clone();
        use_effect_with(*attempt, move |_| {
            listing.set(Listing::Loading);
            spawn_local(async move {
                match PortalClient::shared().list_services().await {
                    Ok(services) => listing.set(Listing::Loaded(services)),
                    Err(err) => {
                        warn!(error = %err, "service catalog fetch failed");
                        listing.set(Listing::Failed);
                    }
                }
            });
        });
    }

    let on_retry = {
        let attempt = attempt.clone();
        Callback::from(move |_| attempt.set(*attempt + 1))
    };

    let on_apply = Callback::from(move |service: String| {
        if let Some(nav) = &navigator {
            nav.push_with_state(
                &MainRoute::Onboarding,
                OnboardingState {
                    service: Some(service),
                    notice: None,
                },
            );
        }
    });

    let open_chat = Callback::from(move |_| set_chat_open(&dispatch, true));

    let body = match &*listing {
        Listing::Loading => html! { <Loading message="Chargement des services..." /> },
        Listing::Failed => html! {
            <div class="text-center py-12">
                <p class="text-error mb-4">{ SERVICES_LOAD_ERROR }</p>
                <button class="btn btn-primary" type="button" onclick={on_retry}>{"Réessayer"}</button>
            </div>
        },
        Listing::Loaded(services) if services.is_empty() => html! {
            <div class="text-center py-12">
                <i class="fa-solid fa-file-lines text-5xl text-base-content/40 mb-4"></i>
                <p class="text-base-content/70 mb-4">{"Aucun service disponible pour le moment"}</p>
            </div>
        },
        Listing::Loaded(services) => html! {
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                { for services.iter().map(|service| html! {
                    <ServiceCard key={service.name.clone()} service={service.clone()} on_apply={on_apply.clone()} />
                }) }
            </div>
        },
    };

    html! {
        <div class="py-12 px-4">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-12">
                    <h1 class="text-3xl md:text-4xl font-bold mb-4">{"Nos Services"}</h1>
                    <p class="text-xl text-base-content/70 max-w-3xl mx-auto">
                        {"Découvrez notre gamme complète de services bancaires. Téléchargez les \
                          formulaires et faites votre demande en ligne."}
                    </p>
                </div>

                { body }

                <div class="card bg-base-100 shadow-sm mt-16">
                    <div class="card-body items-center text-center">
                        <h2 class="card-title text-2xl">{"Besoin d'aide pour choisir ?"}</h2>
                        <p class="text-base-content/70">
                            {"Nos conseillers sont là pour vous accompagner dans le choix du service \
                              le plus adapté à vos besoins."}
                        </p>
                        <button class="btn btn-outline btn-primary" type="button" onclick={open_chat}>
                            {"Parler à un conseiller"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

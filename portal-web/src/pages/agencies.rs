use shared::api::PortalApi;
use shared::models::{Agency, Appointment};
use shared::workflow::booking::{BookingOutcome, book};
use tracing::{info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::api::PortalClient;
use crate::components::{Alert, AlertKind, AppointmentModal, Loading};
use crate::pages::Listing;
use crate::routes::{LoginReturn, MainRoute, OnboardingState};
use crate::storage;

/// Shown when the agency list cannot be fetched.
pub const AGENCIES_LOAD_ERROR: &str = "Erreur lors du chargement des agences";

/// Rendering of the agency map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapView {
    Standard,
    Satellite,
}

impl MapView {
    const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Satellite => "Satellite",
        }
    }

    const fn caption(self) -> &'static str {
        match self {
            Self::Standard => "Vue standard",
            Self::Satellite => "Vue satellite",
        }
    }
}

/// `AgenciesPage` page component
#[function_component(AgenciesPage)]
pub fn agencies_page() -> Html {
    let listing = use_state(|| Listing::<Agency>::Loading);
    let attempt = use_state(|| 0_u32);
    let selected = use_state(|| None::<i64>);
    let map_view = use_state(|| MapView::Standard);
    let busy = use_state(|| false);
    let failure = use_state(|| None::<String>);
    let appointment = use_state(|| None::<Appointment>);
    let navigator = use_navigator();

    {
        let listing = listing.clone();
        use_effect_with(*attempt, move |_| {
            listing.set(Listing::Loading);
            spawn_local(async move {
                match PortalClient::shared().list_agencies(None).await {
                    Ok(agencies) => listing.set(Listing::Loaded(agencies)),
                    Err(err) => {
                        warn!(error = %err, "agency list fetch failed");
                        listing.set(Listing::Failed);
                    }
                }
            });
        });
    }

    let on_book = {
        let busy = busy.clone();
        let failure = failure.clone();
        let appointment = appointment.clone();
        Callback::from(move |agency: Agency| {
            if *busy {
                return;
            }
            busy.set(true);
            failure.set(None);

            let busy = busy.clone();
            let failure = failure.clone();
            let appointment = appointment.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let outcome = book(&PortalClient::shared(), &storage::session(), &agency).await;
                busy.set(false);
                match outcome {
                    BookingOutcome::LoginRequired => {
                        if let Some(nav) = &navigator {
                            nav.push_with_state(
                                &MainRoute::Login,
                                LoginReturn {
                                    from: MainRoute::Agencies,
                                },
                            );
                        }
                    }
                    BookingOutcome::SubmissionRequired { message } => {
                        if let Some(nav) = &navigator {
                            nav.push_with_state(
                                &MainRoute::Onboarding,
                                OnboardingState {
                                    service: None,
                                    notice: Some(message),
                                },
                            );
                        }
                    }
                    BookingOutcome::Booked(booked) => {
                        info!(agency_id = agency.id, "appointment booked");
                        appointment.set(Some(booked));
                    }
                    BookingOutcome::Failed { message } => failure.set(Some(message)),
                }
            });
        })
    };

    let on_close = {
        let appointment = appointment.clone();
        Callback::from(move |()| appointment.set(None))
    };

    let agencies = match &*listing {
        Listing::Loading => return html! { <Loading message="Chargement des agences..." /> },
        Listing::Failed => {
            let attempt = attempt.clone();
            let on_retry = Callback::from(move |_| attempt.set(*attempt + 1));
            return html! {
                <div class="min-h-[50vh] flex flex-col items-center justify-center text-center">
                    <p class="text-error mb-4">{ AGENCIES_LOAD_ERROR }</p>
                    <button class="btn btn-primary" type="button" onclick={on_retry}>{"Réessayer"}</button>
                </div>
            };
        }
        Listing::Loaded(agencies) => agencies,
    };

    let view_toggle = [MapView::Standard, MapView::Satellite].map(|view| {
        let map_view = map_view.clone();
        let active = *map_view == view;
        let onclick = Callback::from(move |_| map_view.set(view));
        html! {
            <button
                type="button"
                class={classes!("btn", "btn-sm", if active { "btn-primary" } else { "btn-ghost" })}
                {onclick}
            >
                { view.label() }
            </button>
        }
    });

    let agency_cards = agencies.iter().map(|agency| {
        let is_selected = *selected == Some(agency.id);
        let on_select = {
            let selected = selected.clone();
            let id = agency.id;
            Callback::from(move |_| selected.set(Some(id)))
        };
        let on_book = {
            let on_book = on_book.clone();
            let agency = agency.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                on_book.emit(agency.clone());
            })
        };
        html! {
            <div
                key={agency.id}
                class={classes!(
                    "card", "bg-base-100", "cursor-pointer", "transition-all",
                    if is_selected { "ring-2 ring-primary bg-primary/5" } else { "hover:shadow-md" }
                )}
                onclick={on_select}
            >
                <div class="card-body p-4">
                    <h3 class="font-semibold">{ &agency.name }</h3>
                    <div class="flex items-start gap-2 text-sm text-base-content/70 mb-3">
                        <i class="fa-solid fa-location-dot mt-0.5"></i>
                        <p>{ &agency.address }</p>
                    </div>
                    <button class="btn btn-primary btn-sm w-full gap-2" type="button" disabled={*busy} onclick={on_book}>
                        if *busy {
                            <span class="loading loading-spinner loading-xs"></span>
                            {"Réservation..."}
                        } else {
                            <i class="fa-solid fa-calendar-days"></i>
                            {"Réserver un rendez-vous"}
                        }
                    </button>
                </div>
            </div>
        }
    });

    html! {
        <div class="py-12 px-4">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-8">
                    <h1 class="text-3xl md:text-4xl font-bold mb-4">{"Nos Agences"}</h1>
                    <p class="text-base-content/70">{"Trouvez l'agence la plus proche et réservez votre rendez-vous"}</p>
                </div>

                if let Some(message) = &*failure {
                    <div class="mb-6">
                        <Alert kind={AlertKind::Error} message={message.clone()} />
                    </div>
                }

                <div class="grid lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-2">
                        <div class="card bg-base-100 overflow-hidden">
                            <div class="p-4 border-b border-base-300 flex justify-between items-center">
                                <h2 class="font-semibold">{"Carte des agences"}</h2>
                                <div class="flex gap-2">{ for view_toggle }</div>
                            </div>
                            <div class="h-96 bg-base-200 flex items-center justify-center">
                                <div class="text-center">
                                    <i class="fa-solid fa-map-location-dot text-5xl text-base-content/40 mb-2"></i>
                                    <p class="text-base-content/70">{"Carte interactive des agences BCB"}</p>
                                    <p class="text-sm text-base-content/50">{ map_view.caption() }</p>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="space-y-4">
                        <h2 class="font-semibold mb-4">{ format!("Liste des agences ({})", agencies.len()) }</h2>
                        { for agency_cards }
                        if agencies.is_empty() {
                            <div class="text-center py-8">
                                <i class="fa-solid fa-location-dot text-5xl text-base-content/40 mb-4"></i>
                                <p class="text-base-content/70">{"Aucune agence disponible"}</p>
                            </div>
                        }
                    </div>
                </div>

                if let Some(booked) = &*appointment {
                    <AppointmentModal appointment={booked.clone()} {on_close} />
                }
            </div>
        </div>
    }
}

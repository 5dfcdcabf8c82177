use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shared::api::PortalApi;
use shared::models::{Service, UploadFile};
use shared::workflow::onboarding::{REDIRECT_DELAY_MS, SubmissionForm, SubmitOutcome, submit};
use tracing::{debug, error, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::{use_location, use_navigator};
use yewdux::prelude::use_dispatch;

use crate::api::PortalClient;
use crate::components::{Alert, AlertKind, Loading};
use crate::files::{first_selected, read_file};
use crate::models::app_state::{AppState, refresh_session};
use crate::pages::Listing;
use crate::routes::{LoginReturn, MainRoute, OnboardingState};
use crate::storage;

const TIPS: [&str; 4] = [
    "Assurez-vous que vos documents sont clairs et lisibles",
    "Votre selfie doit montrer clairement votre visage",
    "Les documents doivent être récents et valides",
    "Évitez les reflets et les ombres sur vos photos",
];

/// Edits applied to the onboarding form.
enum FormAction {
    Service(String),
    IdentityDocument(UploadFile),
    Selfie(UploadFile),
    Reset,
}

#[derive(Debug, Default, PartialEq)]
struct FormState(SubmissionForm);

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.0.clone();
        match action {
            FormAction::Service(service) => form.service = service,
            FormAction::IdentityDocument(file) => form.set_identity_document(file),
            FormAction::Selfie(file) => form.set_selfie(file),
            FormAction::Reset => form.reset(),
        }
        Rc::new(Self(form))
    }
}

/// Which file input changed.
#[derive(Clone, Copy)]
enum Upload {
    IdentityDocument,
    Selfie,
}

/// Latest read issued per file input. A read finishing after a newer
/// selection on the same input is dropped.
#[derive(Debug, Default)]
struct ReadTickets {
    identity_document: u64,
    selfie: u64,
}

impl ReadTickets {
    fn slot(&mut self, upload: Upload) -> &mut u64 {
        match upload {
            Upload::IdentityDocument => &mut self.identity_document,
            Upload::Selfie => &mut self.selfie,
        }
    }

    fn issue(&mut self, upload: Upload) -> u64 {
        let slot = self.slot(upload);
        *slot += 1;
        *slot
    }

    fn is_current(&self, upload: Upload, ticket: u64) -> bool {
        match upload {
            Upload::IdentityDocument => self.identity_document == ticket,
            Upload::Selfie => self.selfie == ticket,
        }
    }
}

/// `OnboardingPage` page component
#[function_component(OnboardingPage)]
pub fn onboarding_page() -> Html {
    let location = use_location();
    let arrival = location
        .and_then(|location| location.state::<OnboardingState>())
        .map(|state| (*state).clone())
        .unwrap_or_default();

    let OnboardingState { service, notice } = arrival;

    let form = use_reducer(move || {
        FormState(service.map(SubmissionForm::with_service).unwrap_or_default())
    });
    let services = use_state(|| Listing::<Service>::Loading);
    let message = use_state(move || notice.map(|notice| (AlertKind::Info, notice)));
    let busy = use_state(|| false);
    let navigator = use_navigator();
    let dispatch = use_dispatch::<AppState>();

    {
        let services = services.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match PortalClient::shared().list_services().await {
                    Ok(list) => services.set(Listing::Loaded(list)),
                    Err(err) => {
                        warn!(error = %err, "service list for onboarding failed");
                        services.set(Listing::Failed);
                    }
                }
            });
        });
    }

    let on_service = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(FormAction::Service(select.value()));
        })
    };

    let tickets = use_mut_ref(ReadTickets::default);

    let on_file = |upload: Upload| {
        let form = form.dispatcher();
        let tickets = tickets.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = first_selected(&input) else {
                return;
            };
            let ticket = tickets.borrow_mut().issue(upload);
            let form = form.clone();
            let tickets = tickets.clone();
            spawn_local(async move {
                let read = read_file(&file).await;
                if !tickets.borrow().is_current(upload, ticket) {
                    debug!(ticket, "newer file selected, dropping earlier read");
                    return;
                }
                match read {
                    Ok(file) => form.dispatch(match upload {
                        Upload::IdentityDocument => FormAction::IdentityDocument(file),
                        Upload::Selfie => FormAction::Selfie(file),
                    }),
                    Err(err) => error!(error = ?err, "could not read selected file"),
                }
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let message = message.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            busy.set(true);
            message.set(None);

            let snapshot = form.0.clone();
            let form = form.dispatcher();
            let message = message.clone();
            let busy = busy.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let outcome = submit(&PortalClient::shared(), &storage::session(), &snapshot).await;
                busy.set(false);
                refresh_session(&dispatch);

                if outcome.requires_login() {
                    if let Some(nav) = &navigator {
                        nav.push_with_state(
                            &MainRoute::Login,
                            LoginReturn {
                                from: MainRoute::Onboarding,
                            },
                        );
                    }
                    return;
                }

                let kind = match &outcome {
                    SubmitOutcome::Submitted { submission_id, .. } => {
                        info!(?submission_id, "documents submitted");
                        let navigator = navigator.clone();
                        let form = form.clone();
                        Timeout::new(REDIRECT_DELAY_MS, move || {
                            form.dispatch(FormAction::Reset);
                            if let Some(nav) = &navigator {
                                nav.push(&MainRoute::Agencies);
                            }
                        })
                        .forget();
                        AlertKind::Success
                    }
                    _ => AlertKind::Error,
                };
                message.set(outcome.message().map(|text| (kind, text.to_string())));
            });
        })
    };

    if matches!(*services, Listing::Loading) {
        return html! { <Loading /> };
    }

    let current = &form.0;
    let service_options = match &*services {
        Listing::Loaded(list) => list.clone(),
        Listing::Loading | Listing::Failed => Vec::new(),
    };

    html! {
        <div class="py-12 px-4">
            <div class="max-w-2xl mx-auto">
                <div class="text-center mb-8">
                    <h1 class="text-3xl md:text-4xl font-bold mb-4">{"Demande de Service"}</h1>
                    <p class="text-base-content/70">
                        {"Sélectionnez votre service et téléversez vos documents pour commencer"}
                    </p>
                </div>

                <div class="card bg-base-100 shadow-md">
                    <div class="card-body">
                        if let Some((kind, text)) = &*message {
                            <div class="mb-4">
                                <Alert kind={*kind} message={text.clone()} />
                            </div>
                        }

                        <form class="space-y-6" onsubmit={on_submit}>
                            <fieldset class="fieldset">
                                <label class="label" for="service">{"Sélectionnez votre service *"}</label>
                                <select id="service" class="select w-full" required=true onchange={on_service}>
                                    <option value="" selected={current.service.is_empty()}>{"Choisissez un service..."}</option>
                                    { for service_options.iter().map(|service| html! {
                                        <option
                                            key={service.name.clone()}
                                            value={service.name.clone()}
                                            selected={service.name == current.service}
                                        >
                                            { &service.name }
                                        </option>
                                    }) }
                                </select>
                            </fieldset>

                            <fieldset class="fieldset">
                                <label class="label">{"Document d'identité * (CNI, Passeport, etc.)"}</label>
                                <div class="border-2 border-dashed border-base-300 rounded-lg p-6 text-center hover:border-primary">
                                    <input
                                        id="identity-upload"
                                        type="file"
                                        accept=".pdf,.jpg,.jpeg,.png"
                                        class="hidden"
                                        onchange={on_file(Upload::IdentityDocument)}
                                    />
                                    <label for="identity-upload" class="cursor-pointer">
                                        <i class="fa-solid fa-file-lines text-4xl text-base-content/40 mb-2"></i>
                                        <p class="text-base-content/70">
                                            { current.identity_document.as_ref().map_or("Cliquez pour téléverser votre document", |file| file.name.as_str()) }
                                        </p>
                                        <p class="text-sm text-base-content/50 mt-1">{"PDF, JPG, JPEG, PNG (max 5MB)"}</p>
                                    </label>
                                </div>
                            </fieldset>

                            <fieldset class="fieldset">
                                <label class="label">{"Photo selfie *"}</label>
                                <div class="border-2 border-dashed border-base-300 rounded-lg p-6 text-center hover:border-primary">
                                    <input
                                        id="selfie-upload"
                                        type="file"
                                        accept="image/*"
                                        class="hidden"
                                        onchange={on_file(Upload::Selfie)}
                                    />
                                    <label for="selfie-upload" class="cursor-pointer">
                                        <i class="fa-solid fa-camera text-4xl text-base-content/40 mb-2"></i>
                                        <p class="text-base-content/70">
                                            { current.selfie.as_ref().map_or("Cliquez pour téléverser votre selfie", |file| file.name.as_str()) }
                                        </p>
                                        <p class="text-sm text-base-content/50 mt-1">{"JPG, JPEG, PNG (sera compressé automatiquement)"}</p>
                                    </label>
                                </div>
                            </fieldset>

                            if current.identity_document.is_some() || current.selfie.is_some() {
                                <div class="bg-base-200 rounded-lg p-4 text-sm space-y-2">
                                    <h3 class="font-medium">{"Fichiers sélectionnés :"}</h3>
                                    if let Some(file) = &current.identity_document {
                                        <p><i class="fa-solid fa-file-lines mr-2"></i>{ format!("Document: {}", file.name) }</p>
                                    }
                                    if let Some(file) = &current.selfie {
                                        <p><i class="fa-solid fa-camera mr-2"></i>{ format!("Selfie: {}", file.name) }</p>
                                    }
                                </div>
                            }

                            <button
                                type="submit"
                                class="btn btn-primary w-full gap-2"
                                disabled={*busy || !current.is_complete()}
                            >
                                if *busy {
                                    <span class="loading loading-spinner loading-sm"></span>
                                    {"Soumission en cours..."}
                                } else {
                                    <i class="fa-solid fa-upload"></i>
                                    {"Soumettre ma demande"}
                                }
                            </button>
                        </form>

                        <div class="mt-8 pt-6 border-t border-base-300">
                            <div class="bg-info/10 rounded-lg p-4">
                                <h3 class="font-medium mb-2">{"Conseils pour vos documents"}</h3>
                                <ul class="text-sm space-y-1">
                                    { for TIPS.iter().map(|tip| html! { <li>{ format!("• {tip}") }</li> }) }
                                </ul>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

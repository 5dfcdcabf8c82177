use shared::models::Appointment;
use yew::{Callback, Html, Properties, function_component, html};

use crate::config::PortalConfig;
use crate::download::download;

#[derive(Properties, PartialEq)]
pub struct AppointmentModalProps {
    pub appointment: Appointment,
    pub on_close: Callback<()>,
}

/// Booking confirmation with the QR code to present at the agency.
#[function_component(AppointmentModal)]
pub fn appointment_modal(props: &AppointmentModalProps) -> Html {
    let appointment = &props.appointment;
    let qr_url = appointment
        .has_qr_image()
        .then(|| PortalConfig::new().media_url(&appointment.qr_code_file_url));

    let on_download = {
        let qr_url = qr_url.clone();
        Callback::from(move |_| {
            if let Some(url) = &qr_url {
                download(url, Appointment::QR_DOWNLOAD_NAME);
            }
        })
    };
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="modal modal-open" role="dialog">
            <div class="modal-box">
                <div class="text-center mb-6">
                    <div class="w-16 h-16 rounded-full bg-success/20 flex items-center justify-center mx-auto mb-4">
                        <i class="fa-solid fa-calendar-check text-3xl text-success"></i>
                    </div>
                    <h2 class="text-2xl font-bold">{"Rendez-vous confirmé !"}</h2>
                    <p class="text-base-content/70">{"Votre rendez-vous a été réservé avec succès"}</p>
                </div>

                <div class="bg-base-200 rounded-lg p-4 mb-6 text-sm space-y-1">
                    <h3 class="font-medium mb-2">{"Détails du rendez-vous"}</h3>
                    <p>
                        <span class="font-medium">{"Agence: "}</span>
                        { appointment.agency_name.clone().unwrap_or_default() }
                    </p>
                    if let Some(time) = &appointment.appointment_time {
                        <p><span class="font-medium">{"Heure: "}</span>{ time }</p>
                    }
                </div>

                if let Some(url) = &qr_url {
                    <div class="text-center mb-6">
                        <img src={url.clone()} alt="QR Code du rendez-vous" class="w-32 h-32 mx-auto border rounded-lg p-2" />
                        <p class="text-sm text-base-content/70 mt-2">{"Présentez ce QR code lors de votre visite"}</p>
                    </div>
                }

                <div class="modal-action flex-col sm:flex-row gap-3">
                    if qr_url.is_some() {
                        <button class="btn btn-outline flex-1 gap-2" type="button" onclick={on_download}>
                            <i class="fa-solid fa-download"></i>
                            {"Télécharger QR"}
                        </button>
                    }
                    <button class="btn btn-primary flex-1" type="button" onclick={on_close}>{"Fermer"}</button>
                </div>
            </div>
        </div>
    }
}

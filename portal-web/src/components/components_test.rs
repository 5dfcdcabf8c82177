//! Rendering tests for the presentational components

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use crate::components::alert::AlertProps;
    use crate::components::appointment_modal::AppointmentModalProps;
    use crate::components::service_card::ServiceCardProps;
    use crate::components::{Alert, AlertKind, AppointmentModal, ServiceCard};
    use shared::models::{Appointment, Service};
    use wasm_bindgen_test::*;
    use yew::{Callback, ServerRenderer};

    wasm_bindgen_test_configure!(run_in_browser);

    fn service(name: &str) -> Service {
        Service {
            name: name.to_string(),
            description: "Carte de débit pour vos achats quotidiens".to_string(),
        }
    }

    #[wasm_bindgen_test]
    async fn service_card_links_matching_form() {
        let rendered = ServerRenderer::<ServiceCard>::with_props(|| ServiceCardProps {
            service: service("Carte SESAME"),
            on_apply: Callback::noop(),
        })
        .render()
        .await;

        assert!(rendered.contains("Carte SESAME"));
        assert!(rendered.contains("href=\"/media/pdfs/sesame.pdf\""));
        assert!(rendered.contains("download=\"Formulaire_Carte_SESAME.pdf\""));
        assert!(rendered.contains("Faire une demande"));
    }

    #[wasm_bindgen_test]
    async fn service_card_falls_back_to_general_form() {
        let rendered = ServerRenderer::<ServiceCard>::with_props(|| ServiceCardProps {
            service: service("Compte courant"),
            on_apply: Callback::noop(),
        })
        .render()
        .await;

        assert!(rendered.contains("href=\"/media/pdfs/general.pdf\""));
    }

    #[wasm_bindgen_test]
    async fn appointment_modal_shows_details() {
        let rendered = ServerRenderer::<AppointmentModal>::with_props(|| AppointmentModalProps {
            appointment: Appointment {
                qr_code: "APT-7".into(),
                qr_code_file_url: "/media/qr/apt-7.png".into(),
                agency_name: Some("Agence Centrale".into()),
                appointment_time: Some("10/03/2025 09:30".into()),
            },
            on_close: Callback::noop(),
        })
        .render()
        .await;

        assert!(rendered.contains("Rendez-vous confirmé !"));
        assert!(rendered.contains("Agence Centrale"));
        assert!(rendered.contains("10/03/2025 09:30"));
        assert!(rendered.contains("src=\"/media/qr/apt-7.png\""));
        assert!(rendered.contains("Télécharger QR"));
    }

    #[wasm_bindgen_test]
    async fn appointment_modal_without_qr_image() {
        let rendered = ServerRenderer::<AppointmentModal>::with_props(|| AppointmentModalProps {
            appointment: Appointment {
                qr_code: "APT-8".into(),
                qr_code_file_url: String::new(),
                agency_name: Some("Agence Ngozi".into()),
                appointment_time: None,
            },
            on_close: Callback::noop(),
        })
        .render()
        .await;

        assert!(rendered.contains("Agence Ngozi"));
        assert!(!rendered.contains("Télécharger QR"));
        assert!(!rendered.contains("Heure"));
    }

    #[wasm_bindgen_test]
    async fn alert_renders_message() {
        let rendered = ServerRenderer::<Alert>::with_props(|| AlertProps {
            kind: AlertKind::Error,
            message: "Veuillez remplir tous les champs requis".into(),
        })
        .render()
        .await;

        assert!(rendered.contains("alert-error"));
        assert!(rendered.contains("Veuillez remplir tous les champs requis"));
    }
}

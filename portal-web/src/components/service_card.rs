use shared::catalog::{form_download_name, form_url};
use shared::models::Service;
use yew::{Callback, Html, Properties, function_component, html};

use crate::config::PortalConfig;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
    /// Emits the service name when the visitor asks to apply.
    #[prop_or_default]
    pub on_apply: Callback<String>,
}

/// Catalog entry with its form download and apply action.
#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;
    let href = PortalConfig::new().media_url(&form_url(&service.name));
    let download_name = form_download_name(&service.name);

    let on_apply = {
        let on_apply = props.on_apply.clone();
        let name = service.name.clone();
        Callback::from(move |_| on_apply.emit(name.clone()))
    };

    html! {
        <div class="card bg-base-100 shadow-md h-full">
            <div class="card-body flex flex-col">
                <div class="flex-1">
                    <h3 class="card-title text-primary">{ &service.name }</h3>
                    <p class="text-base-content/70 leading-relaxed">{ &service.description }</p>
                </div>
                <div class="card-actions flex-col gap-3 mt-4">
                    <a class="btn btn-soft btn-primary w-full gap-2" {href} download={download_name}>
                        <i class="fa-solid fa-download"></i>
                        {"Télécharger le formulaire"}
                    </a>
                    <button class="btn btn-primary w-full gap-2" type="button" onclick={on_apply}>
                        {"Faire une demande"}
                        <i class="fa-solid fa-arrow-right"></i>
                    </button>
                </div>
            </div>
        </div>
    }
}

use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

/// `ErrorPage` page component
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="min-h-[60vh] flex flex-col items-center justify-center text-center px-4 space-y-6">
            <i class="fa-solid fa-triangle-exclamation text-6xl text-warning"></i>
            <h1 class="text-3xl font-bold">{ i18n.t("routes.404.title") }</h1>
            <p class="text-base-content/70">{"La page que vous recherchez n'existe pas ou a été déplacée."}</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                {"Retour à l'accueil"}
            </Link<MainRoute>>
        </div>
    }
}

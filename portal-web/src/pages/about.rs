use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

const STATS: [(&str, &str); 4] = [
    ("50+", "Agences dans tout le pays"),
    ("500K+", "Clients satisfaits"),
    ("30+", "Années d'expérience"),
    ("24/7", "Support client"),
];

const VALUES: [(&str, &str, &str); 4] = [
    (
        "fa-shield-halved",
        "Sécurité",
        "Vos données et vos fonds sont protégés par les technologies les plus avancées.",
    ),
    (
        "fa-users",
        "Proximité",
        "Nous sommes présents partout au Burundi pour vous accompagner.",
    ),
    (
        "fa-bolt",
        "Innovation",
        "Nous révolutionnons les services bancaires avec la technologie moderne.",
    ),
    (
        "fa-heart",
        "Engagement",
        "Nous nous engageons pour le développement économique du Burundi.",
    ),
];

const HERITAGE: [(&str, &str); 3] = [
    (
        "Une histoire de confiance",
        "Depuis sa création, la Banque de Crédit de Bujumbura accompagne le développement \
         économique du Burundi. Membre du réseau Bank of Africa, nous combinons expertise \
         locale et standards internationaux.",
    ),
    (
        "Innovation continue",
        "BCB EasyBank représente notre engagement vers l'innovation digitale. Nous adaptons \
         continuellement nos services aux besoins évolutifs de nos clients, en gardant toujours \
         la simplicité et la sécurité comme priorités.",
    ),
    (
        "Engagement social",
        "Au-delà des services bancaires, nous contribuons activement au développement social et \
         économique du Burundi, en soutenant l'entrepreneuriat local et l'inclusion financière.",
    ),
];

/// `AboutPage` page component
#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div>
            <section class="bg-gradient-to-br from-primary to-secondary text-primary-content py-20 px-4 text-center">
                <h1 class="text-4xl md:text-5xl font-bold mb-6">{"À propos de BCB EasyBank"}</h1>
                <p class="text-xl opacity-90 max-w-4xl mx-auto">
                    {"La Banque de Crédit de Bujumbura révolutionne les services bancaires au Burundi \
                      avec une plateforme moderne, accessible et sécurisée."}
                </p>
            </section>

            <section class="py-20 px-4 bg-base-100">
                <div class="max-w-6xl mx-auto grid md:grid-cols-2 gap-12 items-center">
                    <div>
                        <h2 class="text-3xl font-bold mb-6">{"Notre Mission"}</h2>
                        <p class="text-lg text-base-content/70 mb-6">
                            {"Démocratiser l'accès aux services bancaires au Burundi en proposant une \
                              plateforme digitale simple, rapide et sécurisée. Nous croyons que chaque \
                              Burundais mérite un accès facile aux services financiers modernes."}
                        </p>
                        <p class="text-lg text-base-content/70">
                            {"BCB EasyBank simplifie vos démarches bancaires : ouverture de compte, \
                              demande de cartes, transferts internationaux, tout devient accessible en \
                              quelques clics."}
                        </p>
                    </div>
                    <div class="bg-base-200 rounded-lg p-8 text-center">
                        <i class="fa-solid fa-earth-africa text-7xl text-primary mb-4"></i>
                        <h3 class="text-2xl font-bold mb-2">{"Accessible partout"}</h3>
                        <p class="text-base-content/70">{"Optimisé pour toutes les connexions, même les plus lentes"}</p>
                    </div>
                </div>
            </section>

            <section class="py-20 px-4">
                <div class="text-center mb-16">
                    <h2 class="text-3xl font-bold mb-4">{"BCB en chiffres"}</h2>
                    <p class="text-lg text-base-content/70">{"Des décennies d'excellence au service du Burundi"}</p>
                </div>
                <div class="stats stats-vertical md:stats-horizontal shadow w-full max-w-6xl mx-auto flex">
                    { for STATS.iter().map(|(number, label)| html! {
                        <div class="stat place-items-center">
                            <div class="stat-value text-primary">{ *number }</div>
                            <div class="stat-desc">{ *label }</div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="py-20 px-4 bg-base-100">
                <div class="text-center mb-16">
                    <h2 class="text-3xl font-bold mb-4">{"Nos Valeurs"}</h2>
                    <p class="text-lg text-base-content/70">{"Les principes qui guident notre action quotidienne"}</p>
                </div>
                <div class="max-w-6xl mx-auto grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    { for VALUES.iter().map(|(icon, title, description)| html! {
                        <div class="card bg-base-200 text-center">
                            <div class="card-body items-center">
                                <i class={format!("fa-solid {icon} text-3xl text-primary mb-2")}></i>
                                <h3 class="card-title">{ *title }</h3>
                                <p class="text-base-content/70">{ *description }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="py-20 px-4">
                <div class="max-w-4xl mx-auto">
                    <div class="text-center mb-12">
                        <i class="fa-solid fa-award text-6xl text-primary mb-6"></i>
                        <h2 class="text-3xl font-bold">{"L'héritage de la BCB"}</h2>
                    </div>
                    <div class="space-y-8">
                        { for HERITAGE.iter().map(|(title, text)| html! {
                            <div class="card bg-base-100 shadow-sm">
                                <div class="card-body">
                                    <h3 class="card-title">{ *title }</h3>
                                    <p class="text-base-content/70 leading-relaxed">{ *text }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="py-20 px-4 bg-primary text-primary-content text-center">
                <h2 class="text-3xl font-bold mb-6">{"Rejoignez la révolution bancaire"}</h2>
                <p class="text-xl opacity-90 mb-8">
                    {"Découvrez une nouvelle façon de gérer vos finances avec BCB EasyBank"}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <Link<MainRoute> to={MainRoute::Services} classes="btn bg-base-100 text-primary">
                        {"Découvrir nos services"}
                    </Link<MainRoute>>
                    <Link<MainRoute> to={MainRoute::Onboarding} classes="btn btn-outline text-primary-content">
                        {"Commencer maintenant"}
                    </Link<MainRoute>>
                </div>
            </section>
        </div>
    }
}

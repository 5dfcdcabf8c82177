use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "fa-clock",
        title: "Rapide et Simple",
        description: "Ouvrez votre compte ou demandez vos services en quelques minutes seulement.",
    },
    Feature {
        icon: "fa-shield-halved",
        title: "Sécurisé",
        description: "Vos données sont protégées par les dernières technologies de sécurité.",
    },
    Feature {
        icon: "fa-globe",
        title: "Accessible",
        description: "Disponible 24h/24, 7j/7 depuis n'importe où au Burundi.",
    },
];

const POPULAR_SERVICES: [(&str, &str); 4] = [
    ("Carte SESAME", "Carte de débit pour vos achats quotidiens"),
    ("Carte VISA", "Carte internationale pour voyager"),
    ("Compte Muhira", "Compte d'épargne avantageux"),
    ("Transfert International", "Envoyez de l'argent à l'étranger"),
];

/// `HomePage` page component
#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div>
            <section class="hero bg-gradient-to-br from-primary to-secondary text-primary-content py-20 px-4">
                <div class="hero-content text-center max-w-4xl flex-col">
                    <h1 class="text-4xl md:text-6xl font-bold mb-6">{"BCB EasyBank"}</h1>
                    <p class="text-xl md:text-2xl mb-8 opacity-90">
                        {"Simplifiez vos services bancaires au Burundi. Ouvrez votre compte, \
                          demandez vos cartes et services en ligne, rapidement et en toute sécurité."}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <Link<MainRoute> to={MainRoute::Onboarding} classes="btn btn-lg bg-base-100 text-primary gap-2">
                            {"Commencer maintenant"}
                            <i class="fa-solid fa-arrow-right"></i>
                        </Link<MainRoute>>
                        <Link<MainRoute> to={MainRoute::Services} classes="btn btn-lg btn-outline text-primary-content">
                            {"Découvrir nos services"}
                        </Link<MainRoute>>
                    </div>
                </div>
            </section>

            <section class="py-20 px-4 bg-base-100">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold mb-4">{"Pourquoi choisir BCB EasyBank ?"}</h2>
                        <p class="text-xl text-base-content/70">
                            {"Une plateforme moderne conçue pour répondre à tous vos besoins bancaires"}
                        </p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        { for FEATURES.iter().map(|feature| html! {
                            <div class="card bg-base-200 text-center">
                                <div class="card-body items-center">
                                    <i class={format!("fa-solid {} text-3xl text-primary mb-2", feature.icon)}></i>
                                    <h3 class="card-title">{ feature.title }</h3>
                                    <p class="text-base-content/70">{ feature.description }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="py-20 px-4">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold mb-4">{"Nos Services Populaires"}</h2>
                        <p class="text-xl text-base-content/70">{"Découvrez nos services les plus demandés"}</p>
                    </div>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                        { for POPULAR_SERVICES.iter().map(|(name, description)| html! {
                            <div class="card bg-base-100 shadow-sm">
                                <div class="card-body">
                                    <h3 class="font-semibold text-primary">{ *name }</h3>
                                    <p class="text-sm text-base-content/70">{ *description }</p>
                                    <Link<MainRoute> to={MainRoute::Services} classes="link link-primary text-sm font-medium">
                                        {"En savoir plus →"}
                                    </Link<MainRoute>>
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class="text-center mt-12">
                        <Link<MainRoute> to={MainRoute::Services} classes="btn btn-primary">
                            {"Voir tous les services"}
                        </Link<MainRoute>>
                    </div>
                </div>
            </section>

            <section class="py-20 px-4 bg-primary text-primary-content text-center">
                <h2 class="text-3xl md:text-4xl font-bold mb-6">{"Prêt à commencer ?"}</h2>
                <p class="text-xl mb-8 opacity-90">
                    {"Rejoignez des milliers de Burundais qui font confiance à BCB EasyBank"}
                </p>
                <Link<MainRoute> to={MainRoute::Onboarding} classes="btn btn-lg bg-base-100 text-primary gap-2">
                    {"Ouvrir mon compte"}
                    <i class="fa-solid fa-arrow-right"></i>
                </Link<MainRoute>>
            </section>
        </div>
    }
}

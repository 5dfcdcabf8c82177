use shared::catalog::{PDF_ROOT, guide_download_name};
use yew::prelude::*;
use yewdux::prelude::use_dispatch;

use crate::config::PortalConfig;
use crate::download::download;
use crate::models::app_state::{AppState, set_chat_open};

const FAQS: [(&str, &str); 6] = [
    (
        "Quels documents sont nécessaires pour ouvrir un compte ?",
        "Pour ouvrir un compte BCB, vous avez besoin d'une pièce d'identité valide (CNI, passeport), \
         d'un justificatif de domicile récent, et d'un dépôt minimum selon le type de compte choisi.",
    ),
    (
        "Comment puis-je obtenir une carte SESAME ?",
        "La carte SESAME peut être demandée en ligne via notre plateforme. Vous devez d'abord ouvrir \
         un compte, puis faire une demande de carte. Téléchargez le formulaire, remplissez-le, et \
         soumettez vos documents.",
    ),
    (
        "Qu'est-ce que le compte Muhira ?",
        "Le compte Muhira est un compte d'épargne spécialement conçu pour vous aider à économiser avec \
         des taux d'intérêt attractifs et des conditions avantageuses.",
    ),
    (
        "Comment fonctionne la vérification biométrique ?",
        "La vérification biométrique compare votre selfie avec la photo de votre document d'identité \
         pour confirmer votre identité. Assurez-vous que votre visage est clairement visible et bien éclairé.",
    ),
    (
        "Combien de temps prend le traitement d'une demande ?",
        "Le traitement varie selon le service : 24-48h pour les cartes de débit, 3-5 jours pour les \
         cartes VISA, et 1-3 jours pour l'ouverture de compte.",
    ),
    (
        "Que faire si ma demande est rejetée ?",
        "Si votre demande est rejetée, vous recevrez une notification avec les raisons. Vous pouvez \
         corriger les problèmes identifiés et soumettre une nouvelle demande.",
    ),
];

/// Downloadable guide: title, description and file slug under the PDF folder.
const GUIDES: [(&str, &str, &str); 3] = [
    (
        "Guide d'ouverture de compte",
        "Instructions détaillées pour ouvrir votre compte BCB",
        "guide-ouverture-compte",
    ),
    (
        "Guide des cartes bancaires",
        "Tout savoir sur nos cartes SESAME et VISA",
        "guide-cartes",
    ),
    (
        "Guide des transferts internationaux",
        "Comment effectuer des transferts vers l'étranger",
        "guide-transferts",
    ),
];

const STEPS: [(&str, &str); 3] = [
    (
        "Choisissez votre service",
        "Parcourez nos services et téléchargez les formulaires nécessaires",
    ),
    (
        "Soumettez vos documents",
        "Téléversez vos documents d'identité et votre selfie pour vérification",
    ),
    (
        "Réservez votre rendez-vous",
        "Choisissez une agence et réservez votre créneau de rendez-vous",
    ),
];

/// `HelpPage` page component
#[function_component(HelpPage)]
pub fn help_page() -> Html {
    let open_faq = use_state(|| None::<usize>);
    let dispatch = use_dispatch::<AppState>();

    let open_chat = Callback::from(move |_| set_chat_open(&dispatch, true));

    let faq_items = FAQS.iter().enumerate().map(|(index, (question, answer))| {
        let is_open = *open_faq == Some(index);
        let toggle = {
            let open_faq = open_faq.clone();
            Callback::from(move |_| {
                open_faq.set(if *open_faq == Some(index) { None } else { Some(index) });
            })
        };
        html! {
            <div class="card bg-base-100 shadow-sm">
                <div class="card-body p-4">
                    <button class="w-full flex items-center justify-between text-left" type="button" onclick={toggle}>
                        <h3 class="font-medium pr-4">{ *question }</h3>
                        <i class={classes!("fa-solid", if is_open { "fa-chevron-down" } else { "fa-chevron-right" })}></i>
                    </button>
                    if is_open {
                        <p class="mt-4 pt-4 border-t border-base-300 text-base-content/70 leading-relaxed">{ *answer }</p>
                    }
                </div>
            </div>
        }
    });

    let guide_items = GUIDES.iter().map(|&(title, description, slug)| {
        let on_download = Callback::from(move |_| {
            let url = PortalConfig::new().media_url(&format!("{PDF_ROOT}/{slug}.pdf"));
            download(&url, &guide_download_name(title));
        });
        html! {
            <div class="card bg-base-100 shadow-sm">
                <div class="card-body p-4">
                    <h3 class="font-semibold">{ title }</h3>
                    <p class="text-base-content/70">{ description }</p>
                    <button class="btn btn-outline w-full gap-2" type="button" onclick={on_download}>
                        <i class="fa-solid fa-download"></i>
                        {"Télécharger le guide"}
                    </button>
                </div>
            </div>
        }
    });

    html! {
        <div class="py-12 px-4">
            <div class="max-w-4xl mx-auto">
                <div class="text-center mb-12">
                    <h1 class="text-3xl md:text-4xl font-bold mb-4">{"Centre d'Aide"}</h1>
                    <p class="text-xl text-base-content/70">{"Trouvez des réponses à vos questions et obtenez de l'aide"}</p>
                </div>

                <div class="card bg-info/10 border border-info/30 mb-12">
                    <div class="card-body items-center text-center">
                        <i class="fa-solid fa-circle-question text-5xl text-primary"></i>
                        <h2 class="card-title">{"Besoin d'aide immédiate ?"}</h2>
                        <p class="text-base-content/70">{"Notre assistant virtuel est disponible 24h/24 pour répondre à vos questions"}</p>
                        <button class="btn btn-primary" type="button" onclick={open_chat}>{"Parler à notre assistant"}</button>
                    </div>
                </div>

                <div class="grid md:grid-cols-2 gap-8">
                    <div>
                        <h2 class="text-2xl font-bold mb-6">{"Questions Fréquentes"}</h2>
                        <div class="space-y-4">{ for faq_items }</div>
                    </div>
                    <div>
                        <h2 class="text-2xl font-bold mb-6">{"Guides et Documents"}</h2>
                        <div class="space-y-4">{ for guide_items }</div>
                        <div class="card bg-base-300 mt-8">
                            <div class="card-body p-4 text-sm space-y-3">
                                <h3 class="font-semibold">{"Autres moyens de contact"}</h3>
                                <div><span class="font-medium">{"Téléphone:"}</span><p>{"+257 22 201 000"}</p></div>
                                <div><span class="font-medium">{"Email:"}</span><p>{"info@bcb.bi"}</p></div>
                                <div><span class="font-medium">{"Horaires:"}</span><p>{"Lun-Ven: 8h-17h, Sam: 8h-12h"}</p></div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="mt-16">
                    <h2 class="text-2xl font-bold mb-8 text-center">{"Comment utiliser BCB EasyBank"}</h2>
                    <div class="grid md:grid-cols-3 gap-8">
                        { for STEPS.iter().enumerate().map(|(index, (title, description))| html! {
                            <div class="text-center">
                                <div class="w-12 h-12 rounded-full bg-primary text-primary-content flex items-center justify-center text-xl font-bold mx-auto mb-4">
                                    { index + 1 }
                                </div>
                                <h3 class="font-semibold mb-2">{ *title }</h3>
                                <p class="text-base-content/70">{ *description }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </div>
    }
}

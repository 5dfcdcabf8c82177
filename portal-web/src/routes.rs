use crate::{containers::layout::Layout, pages::*};
use shared::workflow::login::DEFAULT_RETURN_PATH;
use strum::{EnumIter, IntoEnumIterator};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/onboarding")]
    Onboarding,
    #[at("/agencies")]
    Agencies,
    #[at("/help")]
    Help,
    #[at("/about")]
    About,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Routes listed in the navigation bar, in display order.
    pub fn nav_routes() -> Vec<Self> {
        Self::iter()
            .filter(|route| !matches!(route, Self::Login | Self::NotFound))
            .collect()
    }

    /// Translation key prefix of the route, e.g. `routes.services`.
    pub fn i18n_key(&self) -> String {
        let path = self.to_path();
        let name = path.trim_matches('/');
        if name.is_empty() {
            "routes.home".to_string()
        } else {
            format!("routes.{name}")
        }
    }
}

/// History state carried to the login page: where to go once logged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginReturn {
    /// Route that asked for a login.
    pub from: MainRoute,
}

impl LoginReturn {
    /// Where a successful login leads: the requesting route, else the services page.
    pub fn destination(hint: Option<&Self>) -> MainRoute {
        hint.map_or_else(
            || MainRoute::recognize(DEFAULT_RETURN_PATH).unwrap_or(MainRoute::Services),
            |hint| hint.from.clone(),
        )
    }
}

/// History state carried to the onboarding page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingState {
    /// Service chosen on the services page.
    pub service: Option<String>,
    /// Notice to display on arrival.
    pub notice: Option<String>,
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let page = match props.route {
        MainRoute::Home => html! { <HomePage /> },
        MainRoute::Services => html! { <ServicesPage /> },
        MainRoute::Onboarding => html! { <OnboardingPage /> },
        MainRoute::Agencies => html! { <AgenciesPage /> },
        MainRoute::Help => html! { <HelpPage /> },
        MainRoute::About => html! { <AboutPage /> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::NotFound => html! { <ErrorPage /> },
    };

    html! {
        <Layout current_route={props.route.clone()}>
            { page }
        </Layout>
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to main route: {route:?}").as_str());
    html! { <MainRouteView {route} /> }
}

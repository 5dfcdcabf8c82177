use crate::{
    components::header_nav_item::HeaderNavItem,
    models::app_state::{AppState, sign_out},
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let (state, dispatch) = use_store::<AppState>();
    let navigator = use_navigator();
    let is_authenticated = state.session.is_authenticated();

    let on_logout = Callback::from(move |_| {
        sign_out(&dispatch);
        if let Some(nav) = &navigator {
            nav.push(&MainRoute::Home);
        }
    });

    let render_routes = || -> Html {
        html! {
            { for MainRoute::nav_routes().into_iter().map(|route| html! {
                <HeaderNavItem current_route={props.current_route.clone()} {route} />
            }) }
        }
    };

    let session_action = if is_authenticated {
        html! {
            <button class="btn btn-ghost btn-sm gap-2" type="button" onclick={on_logout}>
                <i class="fa-solid fa-right-from-bracket"></i>
                <span class="hidden sm:inline">{i18n.t("header.logout")}</span>
            </button>
        }
    } else {
        html! {
            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm gap-2">
                <i class="fa-solid fa-right-to-bracket"></i>
                <span class="hidden sm:inline">{i18n.t("header.login")}</span>
            </Link<MainRoute>>
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-100 shadow-sm fixed top-0 z-30">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg font-bold text-primary">
                {i18n.t("app.title")}
            </Link<MainRoute>>
            <div class="dropdown dropdown-end lg:hidden">
                <button class="btn btn-soft" aria-label={i18n.t("header.menu")}>
                    <i class="fa-solid fa-bars text-lg"></i>
                </button>
                <ul
                    tabindex="0"
                    class="dropdown-content menu z-[1] bg-base-200 p-6 rounded-box shadow w-56 gap-2"
                >
                    { render_routes() }
                </ul>
            </div>
            <ul class="hidden menu lg:menu-horizontal">
                { render_routes() }
            </ul>
            <div class="flex items-center gap-2">
                { session_action }
            </div>
        </nav>
    }
}

use crate::containers::header::Header;
use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use web_sys::window;
use yew::{Children, Html, Properties, classes, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, ..) = use_translation();

    // New pages start at the top, like a full page load.
    use_effect_with(props.current_route.clone(), |_| {
        if let Some(window) = window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    html! {
    <>
        <Header current_route={props.current_route.clone()} />
        <div class="min-h-screen bg-base-200 flex flex-col">
            <main class={classes!("flex-grow", "pt-16")}>
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{i18n.t("app.footer")}</p>
                </div>
            </footer>
        </div>
    </>
    }
}

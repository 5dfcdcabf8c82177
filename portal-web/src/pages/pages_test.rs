//! Rendering tests for the static pages

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use crate::pages::{AboutPage, HelpPage, HomePage};
    use wasm_bindgen_test::*;
    use yew::{Html, Properties, ServerRenderer, function_component, html};
    use yew_router::history::{AnyHistory, MemoryHistory};
    use yew_router::Router;
    use yewdux::YewduxRoot;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, PartialEq)]
    struct RoutedProps {
        page: Html,
    }

    #[function_component(Routed)]
    fn routed(props: &RoutedProps) -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        html! {
            <YewduxRoot>
                <Router {history}>
                    { props.page.clone() }
                </Router>
            </YewduxRoot>
        }
    }

    async fn render_page(page: fn() -> Html) -> String {
        ServerRenderer::<Routed>::with_props(move || RoutedProps { page: page() })
            .render()
            .await
    }

    #[wasm_bindgen_test]
    async fn home_links_to_onboarding() {
        let rendered = render_page(|| html! { <HomePage /> }).await;

        assert!(rendered.contains("BCB EasyBank"));
        assert!(rendered.contains("href=\"/onboarding\""));
        assert!(rendered.contains("Carte SESAME"));
    }

    #[wasm_bindgen_test]
    async fn help_lists_questions_collapsed() {
        let rendered = render_page(|| html! { <HelpPage /> }).await;

        assert!(rendered.contains("Comment puis-je obtenir une carte SESAME ?"));
        assert!(!rendered.contains("La carte SESAME peut être demandée en ligne"));
        assert!(rendered.contains("Guide des cartes bancaires"));
        assert!(rendered.contains("Parler à notre assistant"));
    }

    #[wasm_bindgen_test]
    async fn about_shows_values() {
        let rendered = render_page(|| html! { <AboutPage /> }).await;

        assert!(rendered.contains("Notre Mission"));
        assert!(rendered.contains("Proximité"));
        assert!(rendered.contains("href=\"/services\""));
    }
}

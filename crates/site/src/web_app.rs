use leptos::*;
use leptos_meta::*;
use mw_showcase::ComponentShowcase;
use mw_ui::ThemeStyle;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="MW Components" />
        <Meta name="description" content="MW design-system component showcase." />
        <ThemeStyle />

        <main class="site-root font-body">
            <ComponentShowcase />
        </main>
    }
}

use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Hania Seifeldeen | Web Developer" />
        <Meta
            name="description"
            content="Portfolio of Hania Seifeldeen, web developer. Explore projects, experience and skills on an interactive desktop."
        />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
        </DesktopProvider>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();
    let path = move || location.pathname.get();

    create_effect(move |_| {
        logging::warn!("404: no page at `{}`", path());
    });

    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <p>"Oops! Page not found"</p>
            <A href="/">"Return to Home"</A>
        </section>
    }
}

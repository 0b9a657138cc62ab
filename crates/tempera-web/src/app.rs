use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use tempera::RangeConfig;

use crate::components::Temperature;

const THRESHOLDS_JSON: &str = include_str!("../thresholds.json");

/// Load the threshold table shipped with the app, falling back to the
/// standard table if it does not parse or validate.
pub fn load_config() -> RangeConfig {
    RangeConfig::from_json(THRESHOLDS_JSON).unwrap_or_else(|e| {
        log::error!("failed to load thresholds.json, using defaults: {e}");
        RangeConfig::default()
    })
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/tempera-web.css"/>

        <Title text="Temperature"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Renders the home page with a single temperature widget.
#[component]
fn HomePage() -> impl IntoView {
    let config = load_config();

    view! {
        <h1>"Temperature"</h1>
        <Temperature config=config/>
    }
}

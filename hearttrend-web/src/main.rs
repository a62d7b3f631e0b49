//! HeartTrend -- presentational dashboard over pipeline-produced artifacts.
//!
//! The heavy lifting (Apple Health ETL, ECG filtering and classification,
//! anomaly detection, LLM nudge generation) happens in an offline pipeline;
//! this app fetches its static CSV exports and imagery and renders them.
//!
//! Four routes under a shared shell: Home (static), Dashboards (Tableau
//! embeds), Nudges (weekly LLM nudge cards), Ecg (HRV metrics + charts).
//! Each page fetches its own resource on mount; nothing is shared or
//! cached across pages.

use dioxus::prelude::*;

mod pages;

use pages::{Dashboards, Ecg, Home, Nudges};

#[derive(Routable, Clone, Debug, PartialEq)]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/dashboards")]
    Dashboards {},
    #[route("/nudges")]
    Nudges {},
    #[route("/ecg")]
    Ecg {},
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("hearttrend-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Top navigation bar plus the outlet for the active page.
#[component]
fn Shell() -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; background: #FAFAFA; \
                    font-family: system-ui, -apple-system, sans-serif;",
            header {
                style: "background: #fff; border-bottom: 1px solid #e0e0e0; \
                        box-shadow: 0 1px 2px rgba(0,0,0,0.04); margin-bottom: 24px;",
                div {
                    style: "max-width: 1100px; margin: 0 auto; padding: 12px 16px; \
                            display: flex; justify-content: space-between; align-items: center;",
                    h1 {
                        style: "margin: 0; font-size: 18px; color: #212121;",
                        "HeartTrend"
                    }
                    nav {
                        style: "display: flex; gap: 24px; font-size: 14px;",
                        Link { to: Route::Home {}, "Home" }
                        Link { to: Route::Dashboards {}, "Dashboards" }
                        Link { to: Route::Nudges {}, "Nudges" }
                        Link { to: Route::Ecg {}, "ECG" }
                    }
                }
            }
            main {
                style: "max-width: 1100px; margin: 0 auto; padding: 0 16px 48px 16px;",
                Outlet::<Route> {}
            }
        }
    }
}

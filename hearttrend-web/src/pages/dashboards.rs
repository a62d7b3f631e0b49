//! Tableau Public dashboards page.
//!
//! The embed bootstrap script is loaded through the process-wide
//! script-loading guard, so remounting this page never appends a second
//! copy or duplicates a dashboard instance.

use dioxus::prelude::*;
use ht_chart_ui::components::{PageHeader, TableauViz};
use ht_chart_ui::js_bridge;
use ht_data::dashboards::{DASHBOARDS, TABLEAU_API_URL};

#[component]
pub fn Dashboards() -> Element {
    use_effect(|| {
        js_bridge::ensure_script_loaded(TABLEAU_API_URL);
    });

    rsx! {
        PageHeader {
            title: "Tableau Dashboards",
            subtitle: "Visualize health trends and detect anomalies across multiple domains.",
        }

        for d in DASHBOARDS.iter() {
            section {
                key: "{d.container_id}",
                style: "margin-bottom: 48px;",
                h2 {
                    style: "margin: 0 0 4px 0; font-size: 22px; color: {d.accent_color};",
                    "{d.title}"
                }
                p {
                    style: "margin: 0 0 16px 0; color: #424242; line-height: 1.6;",
                    "{d.description}"
                }
                TableauViz {
                    container_id: d.container_id.to_string(),
                    title: d.title.to_string(),
                    preview_img: d.preview_img.to_string(),
                    viz_name: d.viz_name.to_string(),
                }
            }
        }
    }
}

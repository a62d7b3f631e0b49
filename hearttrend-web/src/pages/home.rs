//! Static informational landing page. No data dependency, no state.

use dioxus::prelude::*;
use ht_chart_ui::components::{InfoCard, PageHeader};

#[component]
pub fn Home() -> Element {
    rsx! {
        PageHeader {
            title: "HeartTrend: Data-Driven Health Trends and Lifestyle Nudges",
            subtitle: "Objective: analyze Apple Health and ECG data to generate visual insights, \
                       detect anomalies, and offer personalized lifestyle nudges.",
        }

        InfoCard {
            title: "What the pipeline does",
            ul {
                style: "margin: 0; padding-left: 20px; color: #424242; line-height: 1.7;",
                li { "Parses and cleans 46+ Apple Health CSV exports" }
                li { "Extracts features and visualizes metrics (VO2 Max, HRV, RHR)" }
                li { "Performs anomaly detection using One-Class SVM and DBSCAN" }
                li { "Trains an LSTM for ECG rhythm classification" }
                li { "Generates LLM-based weekly nudges from trend data with a local LLaMA model (Ollama)" }
                li { "Publishes interactive dashboards via Tableau Public" }
            }
        }

        InfoCard {
            title: "Tech stack",
            ul {
                style: "margin: 0; padding-left: 20px; color: #424242; line-height: 1.7;",
                li { "Frontend: Dioxus (Rust/WASM) with D3.js charts" }
                li { "Data processing: Python, pandas (offline)" }
                li { "Machine learning: scikit-learn, TensorFlow LSTM (offline)" }
                li { "LLM integration: LLaMA via Ollama for local inference (offline)" }
                li { "Visualization: Tableau Public embeds" }
            }
        }

        InfoCard {
            title: "Skills demonstrated",
            ul {
                style: "margin: 0; padding-left: 20px; color: #424242; line-height: 1.7;",
                li { "Time-series data preprocessing and feature engineering" }
                li { "Machine learning for classification and anomaly detection" }
                li { "Frontend development with a typed component model" }
                li { "LLM-driven behavior insight generation with local models" }
                li { "Data storytelling and dashboard embedding" }
            }
        }
    }
}

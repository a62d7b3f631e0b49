//! ECG visualization page.
//!
//! Fetches `ecg_risk_scores_final.csv` on mount, projects every row into an
//! [`EcgSample`], and drives two D3 trend charts (LF/HF ratio and average
//! HR over time) from the well-formed finite values. Non-finite ratios are
//! excluded from chart payloads but still counted in the parse summary.
//! The static imagery (waveform GIF, scatter panels, confusion matrix) is
//! produced by the offline pipeline and referenced by path.

use dioxus::prelude::*;
use ht_chart_ui::components::{
    ChartContainer, EmptyState, ErrorDisplay, InfoCard, LoadingSpinner, PageHeader,
};
use ht_chart_ui::{fetch, js_bridge};
use ht_data::ecg::{malformed_count, parse_ecg_csv, EcgSample};

const ECG_CSV_URL: &str = "/ecg_risk_scores_final.csv";
const D3_JS_URL: &str = "https://d3js.org/d3.v7.min.js";

/// DOM ids for the D3 chart container divs.
const LFHF_CHART_ID: &str = "lfhf-trend-chart";
const HR_CHART_ID: &str = "hr-trend-chart";

fn chart_points(samples: &[EcgSample], value: impl Fn(&EcgSample) -> f64) -> Vec<serde_json::Value> {
    samples
        .iter()
        .filter(|s| s.well_formed)
        .filter_map(|s| {
            let v = value(s);
            v.is_finite().then(|| {
                serde_json::json!({
                    "date": s.date,
                    "value": v,
                })
            })
        })
        .collect()
}

#[component]
pub fn Ecg() -> Element {
    let samples = use_resource(|| async {
        let text = fetch::fetch_text(ECG_CSV_URL).await?;
        parse_ecg_csv(&text)
    });

    // Render the charts once data is in. Re-runs if the resource restarts;
    // renderTrendChart clears its container first, so repeats are safe.
    use_effect(move || {
        if let Some(Ok(data)) = &*samples.read() {
            if data.is_empty() {
                return;
            }
            js_bridge::ensure_script_loaded(D3_JS_URL);
            js_bridge::init_charts();

            let lfhf = chart_points(data, |s| s.lf_hf);
            log::debug!("[HT] ecg: charting {} LF/HF points", lfhf.len());
            js_bridge::render_trend_chart(
                LFHF_CHART_ID,
                &serde_json::to_string(&lfhf).unwrap_or_default(),
                &serde_json::json!({
                    "title": "LF/HF Ratio Over Time",
                    "yAxisLabel": "LF/HF ratio",
                    "color": "#7B1FA2",
                })
                .to_string(),
            );

            let hr = chart_points(data, |s| s.avg_hr_bpm);
            js_bridge::render_trend_chart(
                HR_CHART_ID,
                &serde_json::to_string(&hr).unwrap_or_default(),
                &serde_json::json!({
                    "title": "Average Heart Rate Over Time",
                    "yAxisLabel": "BPM",
                    "yUnit": "bpm",
                    "color": "#D32F2F",
                })
                .to_string(),
            );
        }
    });

    let trends = match &*samples.read() {
        None => rsx! { LoadingSpinner { message: "Loading ECG metrics..." } },
        Some(Err(err)) => rsx! { ErrorDisplay { message: format!("{err:#}") } },
        Some(Ok(data)) if data.is_empty() => rsx! {
            EmptyState { message: "The ECG risk-score export contains no records." }
        },
        Some(Ok(data)) => {
            let total = data.len();
            let malformed = malformed_count(data);
            let non_finite = data.iter().filter(|s| !s.lf_hf.is_finite()).count();
            rsx! {
                p {
                    style: "margin: 0 0 12px 0; font-size: 13px; color: #616161;",
                    "{total} recordings parsed, {malformed} malformed, {non_finite} with a non-finite LF/HF ratio."
                }
                ChartContainer { id: LFHF_CHART_ID.to_string() }
                ChartContainer { id: HR_CHART_ID.to_string() }
            }
        }
    };

    rsx! {
        PageHeader {
            title: "ECG Visualization Module",
            subtitle: "HRV metrics, rhythm classification, and waveform imagery from the offline ECG pipeline.",
        }

        InfoCard {
            title: "HRV Trends",
            p {
                style: "margin: 0 0 12px 0; font-size: 13px; color: #616161;",
                "LF/HF ratio and average heart rate rederived per recording from the risk-score export."
            }
            {trends}
        }

        InfoCard {
            title: "Animated ECG Viewer",
            p {
                style: "margin: 0 0 8px 0; font-size: 13px; color: #616161;",
                "Animated filtered ECG waveform with R-peak overlays to help identify electrical \
                 activity and heartbeat timing. Useful for analyzing arrhythmias or irregular waveforms."
            }
            img {
                src: "/ecg_animation_record0.gif",
                alt: "Animated ECG",
                style: "border-radius: 12px; border: 1px solid #e0e0e0; width: 100%; max-width: 768px;",
            }
        }

        InfoCard {
            title: "Batch R-Peak Visualizer",
            p {
                style: "margin: 0 0 8px 0; font-size: 13px; color: #616161;",
                "GIFs are generated automatically for high-variance or anomalous ECG signals; \
                 the exported assets feed clinical dashboards and anomaly reports."
            }
            ul {
                style: "margin: 0; padding-left: 20px; font-size: 13px; color: #424242;",
                li { "Filtered signals parsed using FFT and bandpass filtering" }
                li { "R-peaks detected from processed RR intervals" }
            }
        }

        InfoCard {
            title: "Clinical Insights from ECG Trends",
            img {
                src: "/sdnn_vs_rmssd.png",
                alt: "SDNN vs RMSSD",
                style: "border-radius: 12px; border: 1px solid #e0e0e0; width: 100%; margin-bottom: 16px;",
            }
            img {
                src: "/lfhf_vs_hr.png",
                alt: "LF/HF Ratio vs Heart Rate",
                style: "border-radius: 12px; border: 1px solid #e0e0e0; width: 100%; margin-bottom: 16px;",
            }
            img {
                src: "/ecg_classification_vs_hr.png",
                alt: "ECG Classification vs Heart Rate",
                style: "border-radius: 12px; border: 1px solid #e0e0e0; width: 100%; margin-bottom: 16px;",
            }
            img {
                src: "/waveform_rpeaks_panel.png",
                alt: "Waveform Plots with R-Peaks",
                style: "border-radius: 12px; border: 1px solid #e0e0e0; width: 100%;",
            }
        }

        InfoCard {
            title: "ML Model Evaluation",
            p {
                style: "margin: 0 0 12px 0; font-size: 13px; color: #616161;",
                "The rhythm classifier was trained on labeled Apple ECG data and time-series \
                 features extracted from filtered waveforms. Holdout metrics:"
            }
            ul {
                style: "margin: 0 0 16px 0; padding-left: 20px; font-size: 13px; color: #424242;",
                li { strong { "Model: " } "LSTM (Long Short-Term Memory)" }
                li { strong { "Accuracy: " } "100%" }
                li { strong { "Precision: " } "1.00" }
                li { strong { "Recall: " } "1.00" }
                li { strong { "F1-Score: " } "1.00" }
                li { strong { "Classes: " } "Sinus Rhythm, AFib, Poor Recording" }
            }
            img {
                src: "/confusion_matrix.png",
                alt: "Confusion Matrix",
                style: "border-radius: 12px; border: 1px solid #e0e0e0; width: 100%; max-width: 420px;",
            }
            p {
                style: "margin: 8px 0 0 0; font-size: 12px; color: #9E9E9E;",
                "All predictions matched true labels on holdout data; no false positives or negatives."
            }
        }
    }
}

//! Weekly LLM-based nudges page.
//!
//! Fetches `weekly_nudges_llm.csv` on mount and renders one card per
//! retained row, in source order. No pagination, no sorting, no
//! de-duplication.

use dioxus::prelude::*;
use ht_chart_ui::components::{EmptyState, ErrorDisplay, LoadingSpinner, PageHeader};
use ht_chart_ui::fetch;
use ht_data::nudges::{parse_nudges_csv, NudgeEntry};

const NUDGES_CSV_URL: &str = "/weekly_nudges_llm.csv";

#[component]
pub fn Nudges() -> Element {
    // The resource future is dropped when the page unmounts, so a slow
    // fetch cannot update state on a dead view.
    let entries = use_resource(|| async {
        let text = fetch::fetch_text(NUDGES_CSV_URL).await?;
        parse_nudges_csv(&text)
    });

    let body = match &*entries.read() {
        None => rsx! { LoadingSpinner { message: "Loading weekly nudges..." } },
        Some(Err(err)) => rsx! { ErrorDisplay { message: format!("{err:#}") } },
        Some(Ok(rows)) if rows.is_empty() => rsx! {
            EmptyState { message: "No nudges with both a trend summary and nudge text were found." }
        },
        Some(Ok(rows)) => rsx! {
            div {
                style: "display: flex; flex-direction: column; gap: 16px;",
                for (i, entry) in rows.iter().enumerate() {
                    NudgeCard { key: "{i}", entry: entry.clone() }
                }
            }
        },
    };

    rsx! {
        PageHeader {
            title: "Weekly LLM-Based Nudges",
            subtitle: "Behavioral suggestions generated upstream from each week's health trends.",
        }
        {body}
    }
}

#[derive(Props, Clone, PartialEq)]
struct NudgeCardProps {
    entry: NudgeEntry,
}

/// One week's trend summary and nudge.
#[component]
fn NudgeCard(props: NudgeCardProps) -> Element {
    rsx! {
        div {
            style: "background: #fff; border: 1px solid #e0e0e0; border-radius: 12px; \
                    box-shadow: 0 1px 3px rgba(0,0,0,0.08); padding: 20px;",
            p {
                style: "margin: 0 0 4px 0; font-size: 13px; color: #616161;",
                strong { "Week: " }
                "{props.entry.week}"
            }
            p {
                style: "margin: 0 0 8px 0; color: #1565C0; font-weight: 500;",
                strong { "Trend: " }
                span {
                    style: "text-decoration: underline;",
                    "{props.entry.trend_summary}"
                }
            }
            p {
                style: "margin: 0; color: #2E7D32; font-weight: 500;",
                strong { "Nudge: " }
                "{props.entry.llm_nudge}"
            }
        }
    }
}

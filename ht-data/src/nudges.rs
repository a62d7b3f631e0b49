//! Weekly LLM-generated lifestyle nudges.
//!
//! Source: `weekly_nudges_llm.csv`, columns `week`, `TrendSummary`,
//! `LLM_Nudge`. The nudge generator sometimes emits partial rows; only
//! rows with both the trend summary and the nudge text populated are
//! shown.

use crate::table::CsvTable;
use serde::Serialize;

/// One week of trend summary plus the nudge generated from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NudgeEntry {
    pub week: String,
    pub trend_summary: String,
    pub llm_nudge: String,
}

/// Parse the weekly nudges CSV into display entries.
///
/// A row is retained iff both `TrendSummary` and `LLM_Nudge` are non-empty
/// after trimming. The displayed set is therefore a subset of the parsed
/// rows, in source order.
pub fn parse_nudges_csv(text: &str) -> anyhow::Result<Vec<NudgeEntry>> {
    let table = CsvTable::parse(text)?;
    let total = table.len();

    let entries: Vec<NudgeEntry> = table
        .rows()
        .iter()
        .filter_map(|row| {
            let trend = row.get("TrendSummary").unwrap_or("").trim();
            let nudge = row.get("LLM_Nudge").unwrap_or("").trim();
            if trend.is_empty() || nudge.is_empty() {
                return None;
            }
            Some(NudgeEntry {
                week: row.get("week").unwrap_or("").trim().to_string(),
                trend_summary: trend.to_string(),
                llm_nudge: nudge.to_string(),
            })
        })
        .collect();

    log::info!(
        "[HT] nudges: kept {} of {} rows",
        entries.len(),
        total
    );
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::parse_nudges_csv;

    #[test]
    fn keeps_only_rows_with_both_fields() {
        let csv = "\
week,TrendSummary,LLM_Nudge
1,Up,Walk more
2,,Hydrate
";
        let entries = parse_nudges_csv(csv).unwrap();
        assert_eq!(entries.len(), 1, "week 2 lacks a trend summary");
        assert_eq!(entries[0].week, "1");
        assert_eq!(entries[0].trend_summary, "Up");
        assert_eq!(entries[0].llm_nudge, "Walk more");
    }

    #[test]
    fn whitespace_only_fields_are_treated_as_empty() {
        let csv = "\
week,TrendSummary,LLM_Nudge
1,Up,Walk more
2,HRV declining,
3,  ,Go outside
";
        let entries = parse_nudges_csv(csv).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].week, "1");
    }

    #[test]
    fn source_order_is_preserved() {
        let csv = "\
week,TrendSummary,LLM_Nudge
4,Late nights,Wind down earlier
1,Up,Walk more
3,Flat,Stretch daily
";
        let entries = parse_nudges_csv(csv).unwrap();
        let weeks: Vec<&str> = entries.iter().map(|e| e.week.as_str()).collect();
        assert_eq!(weeks, ["4", "1", "3"], "no sorting beyond file order");
    }

    #[test]
    fn tolerates_trailing_blank_line() {
        let csv = "week,TrendSummary,LLM_Nudge\n1,Up,Walk more\n\n";
        let entries = parse_nudges_csv(csv).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn all_rows_filtered_yields_empty_not_error() {
        let csv = "week,TrendSummary,LLM_Nudge\n1,,\n2,,\n";
        let entries = parse_nudges_csv(csv).unwrap();
        assert!(entries.is_empty());
    }
}

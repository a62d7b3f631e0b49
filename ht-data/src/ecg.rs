//! ECG risk-score samples.
//!
//! Source: `ecg_risk_scores_final.csv` with columns `recorded_date`,
//! `sdnn`, `rmssd`, `lf_power`, `hf_power`, `avg_hr_bpm`,
//! `classification`, `risk_flag`. Each row is projected independently;
//! there is no cross-row aggregation. The LF/HF ratio is rederived here
//! for display: `lf_power / hf_power`, which is `NaN` when either side is
//! missing or non-numeric and infinite when `hf_power` is zero.
//!
//! Rather than letting missing columns silently become `NaN` all the way
//! into the UI, every sample carries a `well_formed` flag. Malformed rows
//! are retained (counts stay faithful to the source file) but excluded
//! from chart payloads by the caller.

use crate::table::{CsvRow, CsvTable};
use chrono::NaiveDate;
use serde::Serialize;

/// One ECG recording's HRV metrics and classifier output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EcgSample {
    /// `recorded_date` as it appears in the file, YYYY-MM-DD.
    pub date: String,
    pub sdnn: f64,
    pub rmssd: f64,
    /// Derived: `lf_power / hf_power`. May be `NaN` or infinite.
    pub lf_hf: f64,
    pub avg_hr_bpm: f64,
    /// Rhythm label from the upstream LSTM classifier.
    pub classification: String,
    pub risk_flag: String,
    /// True when all numeric columns parsed and the date is a real date.
    /// An infinite `lf_hf` (zero `hf_power`) still counts as well-formed.
    pub well_formed: bool,
}

fn numeric_field(row: &CsvRow, column: &str) -> f64 {
    row.get(column)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse().ok())
        .unwrap_or(f64::NAN)
}

fn text_field(row: &CsvRow, column: &str) -> String {
    row.get(column).unwrap_or("").trim().to_string()
}

impl EcgSample {
    fn from_row(row: &CsvRow) -> EcgSample {
        let sdnn = numeric_field(row, "sdnn");
        let rmssd = numeric_field(row, "rmssd");
        let lf_power = numeric_field(row, "lf_power");
        let hf_power = numeric_field(row, "hf_power");
        let avg_hr_bpm = numeric_field(row, "avg_hr_bpm");
        let date = text_field(row, "recorded_date");

        let date_ok = NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok();
        let lf_hf = lf_power / hf_power;
        let well_formed = date_ok
            && sdnn.is_finite()
            && rmssd.is_finite()
            && avg_hr_bpm.is_finite()
            && !lf_hf.is_nan();

        EcgSample {
            date,
            sdnn,
            rmssd,
            lf_hf,
            avg_hr_bpm,
            classification: text_field(row, "classification"),
            risk_flag: text_field(row, "risk_flag"),
            well_formed,
        }
    }
}

/// Parse the ECG risk-score CSV into samples, one per data row.
pub fn parse_ecg_csv(text: &str) -> anyhow::Result<Vec<EcgSample>> {
    let table = CsvTable::parse(text)?;
    let samples: Vec<EcgSample> = table.rows().iter().map(EcgSample::from_row).collect();

    let malformed = malformed_count(&samples);
    if malformed > 0 {
        log::warn!(
            "[HT] ecg: {} of {} rows are malformed",
            malformed,
            samples.len()
        );
    } else {
        log::info!("[HT] ecg: parsed {} rows", samples.len());
    }
    Ok(samples)
}

/// Number of samples that failed numeric or date validation.
pub fn malformed_count(samples: &[EcgSample]) -> usize {
    samples.iter().filter(|s| !s.well_formed).count()
}

#[cfg(test)]
mod tests {
    use super::{malformed_count, parse_ecg_csv};

    const HEADER: &str =
        "recorded_date,sdnn,rmssd,lf_power,hf_power,avg_hr_bpm,classification,risk_flag";

    #[test]
    fn lf_hf_is_ratio_of_powers() {
        let csv = format!("{HEADER}\n2024-03-01,45.2,38.1,10,5,62,Sinus Rhythm,low\n");
        let samples = parse_ecg_csv(&csv).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].lf_hf, 2.0);
        assert!(samples[0].well_formed);
    }

    #[test]
    fn zero_hf_power_yields_infinite_ratio() {
        let csv = format!("{HEADER}\n2024-03-01,45.2,38.1,10,0,62,Sinus Rhythm,low\n");
        let samples = parse_ecg_csv(&csv).unwrap();
        assert!(samples[0].lf_hf.is_infinite());
        // Zero HF power is a real pipeline output, not a malformed row.
        assert!(samples[0].well_formed);
    }

    #[test]
    fn missing_power_column_yields_nan_and_malformed() {
        let csv = "recorded_date,sdnn,rmssd,hf_power,avg_hr_bpm,classification,risk_flag\n\
                   2024-03-01,45.2,38.1,5,62,AFib,high\n";
        let samples = parse_ecg_csv(csv).unwrap();
        assert!(samples[0].lf_hf.is_nan());
        assert!(!samples[0].well_formed);
        assert_eq!(malformed_count(&samples), 1);
    }

    #[test]
    fn non_numeric_value_becomes_nan() {
        let csv = format!("{HEADER}\n2024-03-01,n/a,38.1,10,5,62,Sinus Rhythm,low\n");
        let samples = parse_ecg_csv(&csv).unwrap();
        assert!(samples[0].sdnn.is_nan());
        assert!(!samples[0].well_formed);
    }

    #[test]
    fn bad_date_is_malformed_but_retained() {
        let csv = format!("{HEADER}\nnot-a-date,45.2,38.1,10,5,62,Poor Recording,low\n");
        let samples = parse_ecg_csv(&csv).unwrap();
        assert_eq!(samples.len(), 1, "malformed rows are kept");
        assert!(!samples[0].well_formed);
        assert_eq!(samples[0].classification, "Poor Recording");
    }

    #[test]
    fn every_row_projects_independently() {
        let csv = format!(
            "{HEADER}\n\
             2024-03-01,45.2,38.1,10,5,62,Sinus Rhythm,low\n\
             2024-03-02,12.0,9.5,8,4,88,AFib,high\n"
        );
        let samples = parse_ecg_csv(&csv).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].lf_hf, 2.0);
        assert_eq!(samples[1].lf_hf, 2.0);
        assert_eq!(samples[1].risk_flag, "high");
        assert_eq!(samples[0].date, "2024-03-01");
    }
}

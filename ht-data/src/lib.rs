//! Data layer for the HeartTrend dashboard.
//!
//! Every artifact this crate reads is produced by the offline health
//! pipeline (Apple Health ETL, ECG analysis, LLM nudge generation) and
//! served as a static file. This crate parses those CSV exports into
//! typed rows and holds the static descriptors for the embedded Tableau
//! dashboards. It has no browser dependencies and is tested natively.

pub mod dashboards;
pub mod ecg;
pub mod nudges;
pub mod table;

//! Shared Dioxus components and browser glue for the HeartTrend dashboard.
//!
//! This crate provides:
//! - `fetch`: async text fetch over the browser Fetch API
//! - `js_bridge`: idempotent external-script loading and D3.js chart
//!   wrappers via `js_sys::eval()`
//! - `components`: reusable RSX components (cards, headers, status
//!   displays, Tableau embeds)

pub mod components;
pub mod fetch;
pub mod js_bridge;

//! One module per route.

mod dashboards;
mod ecg;
mod home;
mod nudges;

pub use dashboards::Dashboards;
pub use ecg::Ecg;
pub use home::Home;
pub use nudges::Nudges;

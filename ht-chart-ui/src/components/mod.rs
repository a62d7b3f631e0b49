//! Reusable Dioxus RSX components for the HeartTrend pages.

mod chart_container;
mod empty_state;
mod error_display;
mod info_card;
mod loading_spinner;
mod page_header;
mod tableau_embed;

pub use chart_container::ChartContainer;
pub use empty_state::EmptyState;
pub use error_display::ErrorDisplay;
pub use info_card::InfoCard;
pub use loading_spinner::LoadingSpinner;
pub use page_header::PageHeader;
pub use tableau_embed::{TableauEmbed, TableauViz};

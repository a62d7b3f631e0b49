//! Empty-result display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct EmptyStateProps {
    pub message: String,
}

/// Shown when a resource fetched and parsed fine but produced no rows.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            style: "padding: 24px; margin: 8px 0; background: #FAFAFA; color: #757575; \
                    border-radius: 4px; border: 1px dashed #BDBDBD; text-align: center;",
            "{props.message}"
        }
    }
}

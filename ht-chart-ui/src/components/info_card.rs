//! Titled card container.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct InfoCardProps {
    /// Card heading
    pub title: String,
    pub children: Element,
}

/// A white card with a heading, wrapping arbitrary content.
#[component]
pub fn InfoCard(props: InfoCardProps) -> Element {
    rsx! {
        div {
            style: "background: #fff; border: 1px solid #e0e0e0; border-radius: 12px; \
                    box-shadow: 0 1px 3px rgba(0,0,0,0.08); padding: 20px; margin-bottom: 20px;",
            h3 {
                style: "margin: 0 0 8px 0; font-size: 17px; color: #212121;",
                "{props.title}"
            }
            {props.children}
        }
    }
}

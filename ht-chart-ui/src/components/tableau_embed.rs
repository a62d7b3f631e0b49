//! Tableau Public embed components.
//!
//! `TableauEmbed` is a plain iframe for a published dashboard URL.
//! `TableauViz` is the bootstrap-script flavor: a `tableauPlaceholder`
//! container holding a noscript preview image and the `tableauViz` object
//! that the `viz_v1.js` script activates. The object/param markup is not
//! part of the HTML namespace Dioxus knows, so it is injected as raw HTML.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TableauEmbedProps {
    pub url: String,
    #[props(default = 850)]
    pub height: u32,
}

/// Full-width borderless iframe for a dashboard URL, fullscreen allowed.
/// No state, no side effects beyond DOM insertion.
#[component]
pub fn TableauEmbed(props: TableauEmbedProps) -> Element {
    rsx! {
        iframe {
            src: "{props.url}",
            width: "100%",
            height: "{props.height}",
            style: "border: none; margin-bottom: 2rem;",
            title: "Tableau Dashboard",
            allowfullscreen: true,
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TableauVizProps {
    /// DOM id of the embed container; the bootstrap script scans for it.
    pub container_id: String,
    pub title: String,
    /// Static preview shown in no-script environments.
    pub preview_img: String,
    /// Tableau workbook/view identifier, e.g. `MyWorkbook/Dashboard1`.
    pub viz_name: String,
}

/// Script-activated Tableau embed with the fixed display parameter set:
/// no tabs, toolbar on, animated transitions, static image + spinner +
/// overlay + count enabled, en-US locale, published-only filter.
#[component]
pub fn TableauViz(props: TableauVizProps) -> Element {
    let embed_html = format!(
        concat!(
            r##"<noscript><a href="#"><img alt="{title}" src="{img}" style="border: none" /></a></noscript>"##,
            r#"<object class="tableauViz" style="width: 100%; height: 100%; display: block;">"#,
            r#"<param name="host_url" value="https%3A%2F%2Fpublic.tableau.com%2F" />"#,
            r#"<param name="embed_code_version" value="3" />"#,
            r#"<param name="site_root" value="" />"#,
            r#"<param name="name" value="{name}" />"#,
            r#"<param name="tabs" value="no" />"#,
            r#"<param name="toolbar" value="yes" />"#,
            r#"<param name="animate_transition" value="yes" />"#,
            r#"<param name="display_static_image" value="yes" />"#,
            r#"<param name="display_spinner" value="yes" />"#,
            r#"<param name="display_overlay" value="yes" />"#,
            r#"<param name="display_count" value="yes" />"#,
            r#"<param name="language" value="en-US" />"#,
            r#"<param name="filter" value="publish=yes" />"#,
            r#"</object>"#,
        ),
        title = props.title,
        img = props.preview_img,
        name = props.viz_name,
    );

    rsx! {
        div {
            id: "{props.container_id}",
            class: "tableauPlaceholder",
            style: "height: 900px; position: relative; overflow: hidden; border-radius: 12px; \
                    border: 1px solid #e0e0e0; box-shadow: 0 1px 3px rgba(0,0,0,0.08); background: #fff;",
            dangerous_inner_html: "{embed_html}",
        }
    }
}

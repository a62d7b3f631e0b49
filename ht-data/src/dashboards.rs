//! Static configuration for the embedded Tableau Public dashboards.
//!
//! Created once at compile time; never mutated or persisted.

/// URL of the Tableau Public embed bootstrap script.
pub const TABLEAU_API_URL: &str = "https://public.tableau.com/javascripts/api/viz_v1.js";

/// One embedded dashboard: where it mounts, what it shows, and how the
/// Tableau viz object is parameterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardDescriptor {
    /// DOM id of the embed container.
    pub container_id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Static preview shown when the embed script cannot run.
    pub preview_img: &'static str,
    /// Tableau workbook/view identifier for the `name` embed parameter.
    pub viz_name: &'static str,
    /// Accent color for the section heading.
    pub accent_color: &'static str,
}

/// The three dashboards published from the offline pipeline.
pub const DASHBOARDS: [DashboardDescriptor; 3] = [
    DashboardDescriptor {
        container_id: "viz-cardio",
        title: "Cardiovascular Health",
        description: "Visualizes metrics like VO2 Max, HRV, RHR, and HR Recovery to \
                      monitor aerobic fitness, autonomic balance, and recovery patterns. \
                      Z-score thresholds flag anomalies, enabling early detection of \
                      physiological disruptions.",
        preview_img: "https://public.tableau.com/static/images/Ca/Cardinovascularhealthdashboard/Dashboard1/1_rss.png",
        viz_name: "Cardinovascularhealthdashboard/Dashboard1",
        accent_color: "#C62828",
    },
    DashboardDescriptor {
        container_id: "viz-sleep",
        title: "Sleep, Activity & Lifestyle",
        description: "Combines sleep consistency, noise exposure, daylight, and activity \
                      patterns to provide a holistic overview of wellness. Color-coded \
                      insights indicate when environmental and behavioral stressors align.",
        preview_img: "https://public.tableau.com/static/images/Sl/SleepActivityandLifestyleDashboard/Dashboard1/1_rss.png",
        viz_name: "SleepActivityandLifestyleDashboard/Dashboard1",
        accent_color: "#3949AB",
    },
    DashboardDescriptor {
        container_id: "viz-anomaly",
        title: "Multi-Metric Anomaly Detection",
        description: "Detects outliers across diverse metrics like body weight, hydration, \
                      HR, and oxygen saturation. Highlights abrupt changes or chronic issues \
                      using statistical z-score thresholds and contextual annotations.",
        preview_img: "https://public.tableau.com/static/images/Mu/Multi-metricanomalydetectionsystem/Dashboard1/1_rss.png",
        viz_name: "Multi-metricanomalydetectionsystem/Dashboard1",
        accent_color: "#EF6C00",
    },
];

#[cfg(test)]
mod tests {
    use super::{DASHBOARDS, TABLEAU_API_URL};
    use std::collections::HashSet;

    #[test]
    fn exactly_three_dashboards() {
        assert_eq!(DASHBOARDS.len(), 3);
    }

    #[test]
    fn container_ids_are_unique() {
        let ids: HashSet<&str> = DASHBOARDS.iter().map(|d| d.container_id).collect();
        assert_eq!(ids.len(), DASHBOARDS.len(), "duplicate embed container id");
    }

    #[test]
    fn viz_names_and_previews_are_populated() {
        for d in &DASHBOARDS {
            assert!(!d.viz_name.is_empty(), "{} has no viz name", d.container_id);
            assert!(
                d.preview_img.starts_with("https://"),
                "{} preview is not an absolute URL",
                d.container_id
            );
        }
    }

    #[test]
    fn bootstrap_script_is_served_from_tableau_public() {
        assert!(TABLEAU_API_URL.starts_with("https://public.tableau.com/"));
    }
}

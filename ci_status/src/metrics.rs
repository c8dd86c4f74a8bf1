//! Metrics emitted while classifying projects.

use metrics::counter;

use crate::classifier::Color;

/// Record one project classification.
pub fn project_classified(color: Color) {
    counter!("ci_project_status_total", "color" => color.as_str()).increment(1);
}

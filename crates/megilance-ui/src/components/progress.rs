//! Numeric gauges drawn with SVG.
//!
//! Both take a raw score and clamp it; geometry is passed to the drawing
//! primitives as numbers, never as templated style strings.

use dioxus::prelude::*;
use megilance_core::{Component, GaugeGeometry, Percent};

use crate::context::use_class_set;

/// Horizontal bar filled to `value` percent.
#[component]
pub fn ProgressBar(
    value: f64,
    #[props(default)] label: Option<String>,
    #[props(default = true)] show_value: bool,
    #[props(default)] class: Option<String>,
) -> Element {
    let percent = Percent::clamped(value);
    let Some(classes) = use_class_set(Component::ProgressBar) else {
        return rsx! {};
    };
    let classes = classes.with_override(class.as_deref());

    rsx! {
        div {
            class: "{classes}",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{percent}",
            if label.is_some() || show_value {
                div { class: "progress-bar__header",
                    if let Some(label) = &label {
                        span { class: "progress-bar__label", "{label}" }
                    }
                    if show_value {
                        span { class: "progress-bar__value", "{percent}%" }
                    }
                }
            }
            svg {
                class: "progress-bar__track",
                view_box: "0 0 100 4",
                "preserveAspectRatio": "none",
                rect { class: "progress-bar__rail", x: "0", y: "0", width: "100", height: "4", rx: "2" }
                rect {
                    class: "progress-bar__fill",
                    x: "0",
                    y: "0",
                    width: "{percent.value()}",
                    height: "4",
                    rx: "2",
                }
            }
        }
    }
}

/// Semicircular rank gauge with a needle.
#[component]
pub fn RankGauge(
    score: f64,
    #[props(default = "Rank score".to_string())] label: String,
    #[props(default)] class: Option<String>,
) -> Element {
    let gauge = GaugeGeometry::new(score);
    let Some(classes) = use_class_set(Component::RankGauge) else {
        return rsx! {};
    };
    let classes = classes.with_override(class.as_deref());
    let (cx, cy) = (GaugeGeometry::CENTER_X, GaugeGeometry::CENTER_Y);
    let needle_tip = cx - GaugeGeometry::RADIUS + 6.0;
    let track = gauge.track_path();
    let fill = gauge.fill_path();
    let needle = format!(
        "rotate({:.2} {} {})",
        gauge.rotation_deg(),
        cx,
        cy
    );

    rsx! {
        figure { class: "{classes}",
            svg {
                view_box: "0 0 100 55",
                "role": "img",
                "aria-label": "{label}: {gauge.score}",
                path { class: "rank-gauge__track", d: "{track}" }
                path { class: "rank-gauge__fill", d: "{fill}" }
                line {
                    class: "rank-gauge__needle",
                    x1: "{cx}",
                    y1: "{cy}",
                    x2: "{needle_tip}",
                    y2: "{cy}",
                    "transform": "{needle}",
                }
                circle {
                    class: "rank-gauge__hub",
                    cx: "{cx}",
                    cy: "{cy}",
                    r: "3",
                }
            }
            figcaption { class: "rank-gauge__caption",
                span { class: "rank-gauge__score", "{gauge.score}" }
                span { class: "rank-gauge__label", "{label}" }
            }
        }
    }
}

//! Public pages: home and how-it-works.

use dioxus::prelude::*;
use megilance_core::{BadgeVariant, PortalRole, Section, TooltipPosition};
use megilance_ui::{Accordion, Badge, Tabs, Tooltip};

use crate::app::Route;

const FEATURES: [(&str, &str); 3] = [
    ("AI matching", "Proposals ranked by fit, price and delivery history."),
    ("Secure payments", "Milestone escrow with transparent fees."),
    ("Fraud checks", "Every new account and payout is screened."),
];

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "page",
            section { class: "hero",
                Badge { variant: BadgeVariant::Primary, "AI-assisted freelancing" }
                h1 { class: "hero__title", "Hire faster. Get paid sooner." }
                p { class: "page__subtitle",
                    "MegiLance connects clients with vetted freelancers and keeps every milestone on track."
                }
                div { class: "hero__actions",
                    Link {
                        class: "btn btn--primary",
                        to: Route::RoleSection { role: PortalRole::Client, section: Section::PostJob },
                        "Post a job"
                    }
                    Link {
                        class: "btn",
                        to: Route::RoleSection { role: PortalRole::Freelancer, section: Section::Dashboard },
                        "Find work"
                    }
                }
            }
            div { class: "card-grid",
                for (title, text) in FEATURES {
                    div { key: "{title}", class: "card",
                        h3 { "{title}" }
                        p { class: "page__subtitle", "{text}" }
                    }
                }
            }
        }
    }
}

const FAQ: [(&str, &str); 3] = [
    (
        "How are freelancers ranked?",
        "A rank score from 0 to 100 combines delivery, reviews and response time.",
    ),
    (
        "When am I charged?",
        "Funds are held per milestone and released when you approve the work.",
    ),
    (
        "What does the fraud check do?",
        "It flags unusual payment patterns and duplicate accounts before money moves.",
    ),
];

fn role_summary(role: PortalRole) -> &'static str {
    match role {
        PortalRole::Client => "Post jobs, compare proposals and pay per milestone.",
        PortalRole::Freelancer => "Send proposals, track invoices and grow your rank.",
        PortalRole::Admin => "Review users, audit payments and monitor AI checks.",
    }
}

#[component]
pub fn HowItWorks() -> Element {
    let mut role_index = use_signal(|| 0usize);
    let labels: Vec<String> = PortalRole::ALL.iter().map(|r| r.label().to_string()).collect();
    let role = PortalRole::ALL[role_index().min(PortalRole::ALL.len() - 1)];

    rsx! {
        div { class: "page",
            h1 { class: "page__title", "How it works" }
            Tabs {
                labels,
                on_change: move |index| role_index.set(index),
                p { "{role_summary(role)}" }
                Link {
                    class: "btn",
                    to: Route::RoleSection { role, section: Section::Dashboard },
                    "Open the {role.label()} portal"
                }
            }
            h2 { "Questions" }
            for (index, (question, answer)) in FAQ.iter().enumerate() {
                Accordion { key: "{index}", title: question.to_string(), default_open: index == 0,
                    p { "{answer}" }
                }
            }
            p { class: "page__subtitle",
                "Rank scores are explained on the "
                Tooltip {
                    text: "Available to freelancers".to_string(),
                    position: TooltipPosition::Right,
                    Link {
                        to: Route::RoleSection { role: PortalRole::Freelancer, section: Section::Rank },
                        "rank page"
                    }
                }
                "."
            }
        }
    }
}

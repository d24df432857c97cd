use std::time::Duration;

use dioxus::prelude::*;
use megilance_core::fixtures::{dashboard_metrics, Metric};
use megilance_core::{LoaderSize, PortalRole};
use megilance_ui::{Loader, ProgressBar};

/// Simulated fetch latency before the metrics appear.
const LOAD_DELAY: Duration = Duration::from_millis(400);

/// Metrics loaded for `role`, or `None` while that role's load is pending.
fn metrics_for(
    loaded: Option<(PortalRole, Vec<Metric>)>,
    role: PortalRole,
) -> Option<Vec<Metric>> {
    loaded.and_then(|(owner, metrics)| (owner == role).then_some(metrics))
}

#[component]
pub fn Dashboard(role: PortalRole) -> Element {
    let mut loaded = use_signal(|| None::<(PortalRole, Vec<Metric>)>);
    let mut pending = use_signal(|| None::<Task>);

    use_effect(use_reactive((&role,), move |(role,)| {
        if let Some(previous) = pending.write().take() {
            previous.cancel();
        }
        let task = spawn(async move {
            tokio::time::sleep(LOAD_DELAY).await;
            loaded.set(Some((role, dashboard_metrics(role))));
        });
        pending.set(Some(task));
    }));

    let metrics = metrics_for(loaded(), role);

    rsx! {
        div { class: "page",
            h1 { class: "page__title", "{role.label()} dashboard" }
            {match metrics {
                None => rsx! {
                    Loader { size: LoaderSize::Lg, label: "Loading dashboard".to_string() }
                },
                Some(metrics) => rsx! {
                    div { class: "card-grid",
                        for metric in metrics {
                            div { key: "{metric.label}", class: "card metric",
                                span { class: "metric__label", "{metric.label}" }
                                span { class: "metric__value", "{metric.value}" }
                                if let Some(progress) = metric.progress {
                                    ProgressBar { value: progress, show_value: false }
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_role_metrics_are_not_shown() {
        let client = Some((PortalRole::Client, dashboard_metrics(PortalRole::Client)));
        assert!(metrics_for(client.clone(), PortalRole::Admin).is_none());
        assert_eq!(
            metrics_for(client, PortalRole::Client),
            Some(dashboard_metrics(PortalRole::Client))
        );
        assert!(metrics_for(None, PortalRole::Freelancer).is_none());
    }
}

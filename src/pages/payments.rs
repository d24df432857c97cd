use dioxus::prelude::*;
use megilance_core::fixtures::transactions;
use megilance_core::{AlertSeverity, PaymentStatus, PortalRole};
use megilance_ui::{Alert, PaymentBadge};

#[component]
pub fn Payments(role: PortalRole) -> Element {
    let rows = transactions();
    let failed = rows.iter().filter(|tx| tx.status == PaymentStatus::Failed).count();
    let mut alert_open = use_signal(|| true);

    rsx! {
        div { class: "page",
            h1 { class: "page__title", "Payments" }
            if failed > 0 && alert_open() {
                Alert {
                    severity: AlertSeverity::Danger,
                    title: "Payment failed".to_string(),
                    on_close: move |_| alert_open.set(false),
                    if role == PortalRole::Admin {
                        "{failed} transaction(s) need review."
                    } else {
                        "{failed} transaction(s) could not be completed. Update your payment method."
                    }
                }
            }
            table { class: "table",
                thead {
                    tr {
                        th { "Transaction" }
                        th { "Description" }
                        th { "Amount" }
                        th { "Date" }
                        th { "Status" }
                    }
                }
                tbody {
                    for tx in rows {
                        tr { key: "{tx.id}",
                            td { "{tx.id}" }
                            td { "{tx.description}" }
                            td { "{tx.amount}" }
                            td { "{tx.date}" }
                            td { PaymentBadge { status: tx.status } }
                        }
                    }
                }
            }
        }
    }
}

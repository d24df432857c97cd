//! Invoice table: search, status filter, persisted selection, pagination
//! and CSV export with column picking.

use std::path::{Path, PathBuf};

use dioxus::prelude::*;
use megilance_core::export::{csv_file_name, select_columns, to_csv};
use megilance_core::fixtures::{filter_invoices, invoices, Invoice, InvoiceStatus, INVOICE_HEADERS};
use megilance_core::toast::{ToastRequest, ToastVariant};
use megilance_core::widgets::{DropdownOption, Selection};
use megilance_core::{BadgeVariant, UiError};
use megilance_ui::{use_storage, use_toaster, Badge, Dropdown, Modal, Pagination};

use crate::context::use_export_dir;

const SELECTION_KEY: &str = "invoices_selection";
const PAGE_SIZE: usize = 2;
const ALL_STATUSES: &str = "all";

fn status_options() -> Vec<DropdownOption> {
    std::iter::once(DropdownOption::new(ALL_STATUSES, "All statuses"))
        .chain(InvoiceStatus::ALL.iter().map(|s| DropdownOption::new(s.label(), s.label())))
        .collect()
}

fn parse_status(value: &str) -> Option<InvoiceStatus> {
    InvoiceStatus::ALL.into_iter().find(|s| s.label() == value)
}

fn status_badge(status: InvoiceStatus) -> BadgeVariant {
    match status {
        InvoiceStatus::Paid => BadgeVariant::Success,
        InvoiceStatus::Pending => BadgeVariant::Warning,
        InvoiceStatus::Overdue => BadgeVariant::Danger,
    }
}

/// Indices of the ticked export columns.
fn chosen_columns(flags: &[bool]) -> Vec<usize> {
    flags.iter().enumerate().filter_map(|(i, on)| on.then_some(i)).collect()
}

/// Header checkbox state: only a non-empty page can be fully selected.
fn page_fully_selected(selection: &Selection<String>, visible_ids: &[String]) -> bool {
    !visible_ids.is_empty() && selection.all_selected(visible_ids)
}

fn page_count(rows: usize) -> u32 {
    rows.div_ceil(PAGE_SIZE).max(1) as u32
}

/// Write `rows` with the chosen columns to `<dir>/invoices.csv`.
fn export_invoices(dir: &Path, rows: &[Invoice], columns: &[usize]) -> Result<PathBuf, UiError> {
    let headers: Vec<String> = INVOICE_HEADERS.iter().map(|h| h.to_string()).collect();
    let cells: Vec<Vec<String>> = rows.iter().map(Invoice::cells).collect();
    let (headers, cells) = select_columns(&headers, &cells, columns);

    std::fs::create_dir_all(dir)?;
    let path = dir.join(csv_file_name("invoices"));
    std::fs::write(&path, to_csv(&headers, &cells))?;
    Ok(path)
}

#[component]
pub fn Invoices() -> Element {
    let storage = use_storage();
    let export_dir = use_export_dir();
    let mut toaster = use_toaster();

    let all = use_hook(invoices);
    let all_ids: Vec<String> = all.iter().map(|inv| inv.id.clone()).collect();

    let mut query = use_signal(String::new);
    let mut status = use_signal(|| None::<InvoiceStatus>);
    let mut page = use_signal(|| 1u32);
    let load_storage = storage.clone();
    let mut selection = use_signal(move || {
        Selection::<String>::load(load_storage.as_ref(), SELECTION_KEY, &all_ids)
    });
    let mut export_open = use_signal(|| false);
    let mut columns = use_signal(|| vec![true; INVOICE_HEADERS.len()]);

    let filtered: Vec<Invoice> = filter_invoices(&all, &query.read(), status())
        .into_iter()
        .cloned()
        .collect();
    let total_pages = page_count(filtered.len());
    let current = page().min(total_pages);
    let visible: Vec<Invoice> = filtered
        .iter()
        .skip((current as usize - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .cloned()
        .collect();
    let visible_ids: Vec<String> = visible.iter().map(|inv| inv.id.clone()).collect();
    let all_on_page = page_fully_selected(&selection.read(), &visible_ids);
    let selected_count = selection.read().count();

    let persist = move |selection: &Selection<String>| {
        selection.persist(storage.as_ref(), SELECTION_KEY)
    };
    let persist_all = persist.clone();

    let preview = {
        let chosen = chosen_columns(&columns.read());
        let headers: Vec<String> = INVOICE_HEADERS.iter().map(|h| h.to_string()).collect();
        let cells: Vec<Vec<String>> = filtered.iter().take(PAGE_SIZE).map(Invoice::cells).collect();
        if chosen.is_empty() {
            String::new()
        } else {
            let (headers, cells) = select_columns(&headers, &cells, &chosen);
            to_csv(&headers, &cells)
        }
    };

    let export_rows = filtered.clone();
    let run_export = move |_| {
        let chosen = chosen_columns(&columns.read());
        if chosen.is_empty() {
            toaster.notify(
                ToastRequest::new("Nothing to export")
                    .description("Pick at least one column.")
                    .variant(ToastVariant::Warning),
            );
            return;
        }
        let picked: Vec<Invoice> = {
            let sel = selection.read();
            let marked: Vec<Invoice> =
                export_rows.iter().filter(|inv| sel.is_selected(&inv.id)).cloned().collect();
            if marked.is_empty() { export_rows.clone() } else { marked }
        };
        match export_invoices(&export_dir, &picked, &chosen) {
            Ok(path) => {
                tracing::info!(path = %path.display(), rows = picked.len(), "invoices exported");
                toaster.notify(
                    ToastRequest::new("Export complete")
                        .description(format!("Saved to {}", path.display()))
                        .variant(ToastVariant::Success),
                );
                export_open.set(false);
            }
            Err(e) => {
                tracing::error!("invoice export failed: {}", e);
                toaster.notify(
                    ToastRequest::new("Export failed")
                        .description(e.to_string())
                        .variant(ToastVariant::Error),
                );
            }
        }
    };

    rsx! {
        div { class: "page",
            h1 { class: "page__title", "Invoices" }
            div { class: "toolbar",
                input {
                    class: "input",
                    r#type: "search",
                    placeholder: "Search by invoice or client",
                    value: "{query}",
                    oninput: move |evt| {
                        query.set(evt.value());
                        page.set(1);
                    },
                }
                Dropdown {
                    options: status_options(),
                    selected: Some(ALL_STATUSES.to_string()),
                    on_select: move |option: DropdownOption| {
                        status.set(parse_status(&option.value));
                        page.set(1);
                    },
                }
                button {
                    class: "btn",
                    onclick: move |_| export_open.set(true),
                    if selected_count > 0 { "Export {selected_count} selected" } else { "Export CSV" }
                }
            }
            table { class: "table",
                thead {
                    tr {
                        th {
                            input {
                                r#type: "checkbox",
                                "aria-label": "Select page",
                                checked: all_on_page,
                                onchange: {
                                    let ids = visible_ids.clone();
                                    move |_| {
                                        let mut sel = selection.write();
                                        if page_fully_selected(&sel, &ids) {
                                            sel.deselect_many(&ids);
                                        } else {
                                            sel.select_many(ids.iter().cloned());
                                        }
                                        persist_all(&*sel);
                                    }
                                },
                            }
                        }
                        for header in INVOICE_HEADERS {
                            th { key: "{header}", "{header}" }
                        }
                    }
                }
                tbody {
                    if visible.is_empty() {
                        tr {
                            td { colspan: "6", class: "table__empty", "No invoices match." }
                        }
                    }
                    for invoice in visible {
                        tr {
                            key: "{invoice.id}",
                            class: if selection.read().is_selected(&invoice.id) { "selected" } else { "" },
                            td {
                                input {
                                    r#type: "checkbox",
                                    checked: selection.read().is_selected(&invoice.id),
                                    onchange: {
                                        let id = invoice.id.clone();
                                        let persist = persist.clone();
                                        move |_| {
                                            let mut sel = selection.write();
                                            sel.toggle(id.clone());
                                            persist(&*sel);
                                        }
                                    },
                                }
                            }
                            td { "{invoice.id}" }
                            td { "{invoice.client}" }
                            td { "{invoice.amount}" }
                            td {
                                Badge { variant: status_badge(invoice.status), "{invoice.status.label()}" }
                            }
                            td { "{invoice.date}" }
                        }
                    }
                }
            }
            Pagination {
                current,
                total: total_pages,
                on_change: move |next| page.set(next),
            }
            Modal {
                open: export_open(),
                on_close: move |_| export_open.set(false),
                title: "Export invoices".to_string(),
                p { "Columns to include:" }
                div { class: "export-columns",
                    for (index, header) in INVOICE_HEADERS.iter().enumerate() {
                        label { key: "{header}",
                            input {
                                r#type: "checkbox",
                                checked: columns.read()[index],
                                onchange: move |_| {
                                    let mut cols = columns.write();
                                    cols[index] = !cols[index];
                                },
                            }
                            " {header}"
                        }
                    }
                }
                pre { class: "csv-preview", "{preview}" }
                div { class: "modal__actions",
                    button { class: "btn", onclick: move |_| export_open.set(false), "Cancel" }
                    button { class: "btn btn--primary", onclick: run_export, "Download" }
                }
            }
        }
    }
}

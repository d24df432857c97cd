use dioxus::prelude::*;
use megilance_core::fixtures::skill_options;
use megilance_core::toast::{ToastRequest, ToastVariant};
use megilance_core::widgets::DropdownOption;
use megilance_core::AlertSeverity;
use megilance_ui::{use_toaster, Alert, Dropdown, TagInput};

fn budget_options() -> Vec<DropdownOption> {
    vec![
        DropdownOption::new("fixed", "Fixed price"),
        DropdownOption::new("hourly", "Hourly"),
    ]
}

/// What is still missing before the job can be posted.
fn missing_fields(
    title: &str,
    category: Option<&DropdownOption>,
    skills: &[String],
) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if title.trim().is_empty() {
        missing.push("title");
    }
    if category.is_none() {
        missing.push("category");
    }
    if skills.is_empty() {
        missing.push("at least one skill");
    }
    missing
}

#[component]
pub fn PostJob() -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut category = use_signal(|| None::<DropdownOption>);
    let mut budget = use_signal(|| None::<DropdownOption>);
    let mut skills = use_signal(Vec::<String>::new);
    let mut errors = use_signal(Vec::<&'static str>::new);
    let mut toaster = use_toaster();

    let categories: Vec<DropdownOption> = skill_options()
        .into_iter()
        .map(|(value, label)| DropdownOption::new(value, label))
        .collect();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let chosen = category.read().clone();
        let missing = missing_fields(&title.read(), chosen.as_ref(), &skills.read());
        if !missing.is_empty() {
            errors.set(missing);
            return;
        }
        errors.set(Vec::new());
        tracing::info!(
            title = %title.read(),
            skills = skills.read().len(),
            budget = ?budget.read().clone().map(|b| b.value),
            "job posted"
        );
        toaster.notify(
            ToastRequest::new("Job posted")
                .description(format!("\"{}\" is now visible to freelancers.", title.read().trim()))
                .variant(ToastVariant::Success),
        );
        title.set(String::new());
        description.set(String::new());
    };

    let missing_text = errors.read().join(", ");

    rsx! {
        div { class: "page",
            h1 { class: "page__title", "Post a Job" }
            if !errors.read().is_empty() {
                Alert {
                    severity: AlertSeverity::Warning,
                    title: "Almost there".to_string(),
                    on_close: move |_| errors.set(Vec::new()),
                    "Missing: {missing_text}"
                }
            }
            form { class: "card form", onsubmit: submit,
                div { class: "field",
                    label { class: "field__label", "Title" }
                    input {
                        class: "input",
                        value: "{title}",
                        placeholder: "e.g. Build a landing page",
                        oninput: move |evt| title.set(evt.value()),
                    }
                }
                div { class: "field",
                    label { class: "field__label", "Description" }
                    textarea {
                        class: "textarea",
                        value: "{description}",
                        oninput: move |evt| description.set(evt.value()),
                    }
                }
                div { class: "form__row",
                    Dropdown {
                        options: categories,
                        placeholder: "Category".to_string(),
                        on_select: move |option| category.set(Some(option)),
                    }
                    Dropdown {
                        options: budget_options(),
                        placeholder: "Budget type".to_string(),
                        on_select: move |option| budget.set(Some(option)),
                    }
                }
                div { class: "field",
                    label { class: "field__label", "Skills" }
                    TagInput { on_change: move |tags| skills.set(tags) }
                }
                button { class: "btn btn--primary", r#type: "submit", "Post job" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_lists_everything() {
        assert_eq!(missing_fields("  ", None, &[]), ["title", "category", "at least one skill"]);
    }

    #[test]
    fn complete_form_passes() {
        let category = DropdownOption::new("web", "Web development");
        assert!(missing_fields("Landing page", Some(&category), &["rust".to_string()]).is_empty());
    }
}

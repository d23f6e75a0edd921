//! Three-step order wizard page.

pub mod draft;
pub mod validation;
pub mod wizard;

use dioxus::prelude::*;

use crate::config::RuntimeConfig;
use crate::date::{self, earliest_deadline, format_iso, format_long, parse_iso};
use crate::navigation::scroll_to_section;
use crate::notifications::use_toaster;
use crate::reveal::AnimatedText;
use crate::submission::deliver;

use draft::{file_name_from_input, ContactMethod, Service, BUDGET_MAX, BUDGET_MIN, BUDGET_STEP};
use validation::OrderField;
use wizard::{OrderRules, OrderWizard, SubmissionStatus, WizardStep};

const FORM_ANCHOR: &str = "order-form";

#[component]
pub fn OrderPage() -> Element {
    let config = use_context::<RuntimeConfig>();
    let toaster = use_toaster();
    let mut wizard = use_signal(|| OrderWizard::new(OrderRules::from(&config), date::today()));

    let step = wizard.read().step();
    let mut shown_step = use_signal(|| step);
    use_effect(use_reactive((&step,), move |(step,)| {
        if *shown_step.peek() == step {
            return;
        }
        shown_step.set(step);
        tracing::debug!("order: showing step {}", step.number());
        scroll_to_section(FORM_ANCHOR);
    }));

    let state = wizard.read().clone();
    let submitting = state.is_submitting();
    let progress = state.progress_percent();
    let primary_label = match (step, submitting) {
        (WizardStep::Logistics, true) => "Processing...",
        (WizardStep::Logistics, false) => "Submit Order",
        _ => "Next",
    };

    let mut submit = move || {
        let Some(payload) = wizard.write().begin_submission(date::today()) else {
            return;
        };
        let endpoint = config.order_api_url.clone();
        let delay_ms = config.simulated_delay_ms;
        spawn(async move {
            let outcome = deliver(endpoint.as_deref(), delay_ms, &payload).await;
            match wizard.write().finish_submission(outcome, date::today()) {
                Ok(()) => toaster.success(
                    "Order Submitted Successfully!",
                    "We'll contact you shortly to discuss your project.",
                ),
                Err(err) => toaster.error("Order not sent", &err.to_string()),
            }
        });
    };

    rsx! {
        section { class: "section order-page",
            div { class: "section-container narrow",
                div { class: "section-heading",
                    span { class: "eyebrow", "Start a Project" }
                    AnimatedText { text: "Place your order".to_string(), once: true, class: "section-title".to_string() }
                    p { class: "muted", "Tell me what you need and I'll get back to you with a plan." }
                }
                div { id: FORM_ANCHOR, class: "glass order-card",
                    div { class: "order-progress",
                        div { class: "order-progress-meta",
                            span { "Step {step.number()} of {WizardStep::COUNT}" }
                            span { "{progress:.0}%" }
                        }
                        div { class: "progress-track",
                            div { class: "progress-fill", style: "width: {progress}%" }
                        }
                    }
                    h2 { class: "order-step-title", "{step.title()}" }
                    p { class: "muted", "{step.description()}" }

                    if let SubmissionStatus::Failed(message) = state.status() {
                        div { class: "form-error banner", role: "alert",
                            p { "We couldn't send your order: {message}" }
                            p { class: "muted", "Your answers are still here. Fix anything highlighted and submit again." }
                        }
                    }

                    form {
                        class: "order-form",
                        novalidate: true,
                        onsubmit: move |event| {
                            event.prevent_default();
                            if wizard.read().step() == WizardStep::Logistics {
                                submit();
                            } else {
                                wizard.write().advance(date::today());
                            }
                        },
                        {match step {
                            WizardStep::Service => rsx! { ServiceStep { wizard } },
                            WizardStep::Project => rsx! { ProjectStep { wizard } },
                            WizardStep::Logistics => rsx! { LogisticsStep { wizard } },
                        }}
                        div { class: "order-actions",
                            if step != WizardStep::Service {
                                button {
                                    r#type: "button",
                                    class: "btn-outline",
                                    disabled: submitting,
                                    onclick: move |_| {
                                        wizard.write().back();
                                    },
                                    "Previous"
                                }
                            } else {
                                span {}
                            }
                            button {
                                r#type: "submit",
                                class: "btn-primary",
                                disabled: submitting,
                                "{primary_label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FieldError(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            p { class: "field-error", role: "alert", "{message}" }
        }
    }
}

fn error_of(wizard: Signal<OrderWizard>, field: OrderField) -> Option<String> {
    wizard.read().error(field).map(str::to_string)
}

#[component]
fn ServiceStep(mut wizard: Signal<OrderWizard>) -> Element {
    let selected = wizard.read().draft().service.map(Service::value).unwrap_or("");
    rsx! {
        div { class: "field",
            label { r#for: "order-service", "Service" }
            select {
                id: "order-service",
                value: "{selected}",
                onchange: move |event| {
                    let service = Service::from_value(&event.value());
                    wizard.write().edit(OrderField::Service, |draft| draft.service = service);
                },
                option { value: "", disabled: true, selected: selected.is_empty(), "Select a service" }
                for service in Service::ALL {
                    option {
                        key: "{service.value()}",
                        value: service.value(),
                        selected: selected == service.value(),
                        "{service.label()}"
                    }
                }
            }
            FieldError { message: error_of(wizard, OrderField::Service) }
        }
    }
}

#[component]
fn ProjectStep(mut wizard: Signal<OrderWizard>) -> Element {
    let state = wizard.read();
    let draft = state.draft();
    let name = draft.name.clone();
    let email = draft.email.clone();
    let details = draft.project_details.clone();
    let attachment = draft.attachment.clone();
    let min_len = state.rules().details_min_len;
    drop(state);
    let details_len = details.trim().chars().count();

    rsx! {
        div { class: "field",
            label { r#for: "order-name", "Full Name" }
            input {
                id: "order-name",
                r#type: "text",
                placeholder: "John Doe",
                value: "{name}",
                oninput: move |event| {
                    wizard.write().edit(OrderField::Name, |draft| draft.name = event.value());
                },
            }
            FieldError { message: error_of(wizard, OrderField::Name) }
        }
        div { class: "field",
            label { r#for: "order-email", "Email Address" }
            input {
                id: "order-email",
                r#type: "email",
                placeholder: "john@example.com",
                value: "{email}",
                oninput: move |event| {
                    wizard.write().edit(OrderField::Email, |draft| draft.email = event.value());
                },
            }
            FieldError { message: error_of(wizard, OrderField::Email) }
        }
        div { class: "field",
            label { r#for: "order-details", "Project Details" }
            textarea {
                id: "order-details",
                rows: "5",
                placeholder: "Describe your project, goals and any specific requirements...",
                value: "{details}",
                oninput: move |event| {
                    wizard.write().edit(OrderField::ProjectDetails, |draft| draft.project_details = event.value());
                },
            }
            p { class: "field-hint", "{details_len} / {min_len} characters minimum" }
            FieldError { message: error_of(wizard, OrderField::ProjectDetails) }
        }
        div { class: "field",
            label { r#for: "order-attachment", "Reference File (optional)" }
            input {
                id: "order-attachment",
                r#type: "file",
                onchange: move |event| {
                    let name = file_name_from_input(&event.value());
                    if let Some(name) = &name {
                        tracing::debug!("order: attached reference {name}");
                    }
                    wizard.write().set_attachment(name);
                },
            }
            if let Some(name) = attachment {
                p { class: "field-hint", "Attached: {name}" }
            }
        }
    }
}

#[component]
fn LogisticsStep(mut wizard: Signal<OrderWizard>) -> Element {
    let state = wizard.read();
    let draft = state.draft();
    let budget = draft.budget;
    let deadline = draft.deadline;
    let method = draft.contact_method;
    let contact_detail = draft.contact_detail.clone();
    let terms_accepted = draft.terms_accepted;
    let require_terms = state.rules().require_terms;
    drop(state);

    let today = date::today();
    let min_deadline = format_iso(earliest_deadline(today));
    let deadline_value = deadline.map(format_iso).unwrap_or_default();
    let selected_method = method.map(ContactMethod::value).unwrap_or("");
    let detail_type = match method {
        Some(ContactMethod::Email) => "email",
        _ => "text",
    };

    rsx! {
        div { class: "field",
            label { r#for: "order-budget", "Budget: ${budget}" }
            input {
                id: "order-budget",
                r#type: "range",
                min: "{BUDGET_MIN}",
                max: "{BUDGET_MAX}",
                step: "{BUDGET_STEP}",
                value: "{budget}",
                oninput: move |event| {
                    if let Ok(raw) = event.value().parse::<u32>() {
                        wizard.write().edit(OrderField::Budget, |draft| draft.set_budget(raw));
                    }
                },
            }
            div { class: "range-labels",
                span { "${BUDGET_MIN}" }
                span { "${BUDGET_MAX}" }
            }
            FieldError { message: error_of(wizard, OrderField::Budget) }
        }
        div { class: "field",
            label { r#for: "order-deadline", "Deadline" }
            input {
                id: "order-deadline",
                r#type: "date",
                min: "{min_deadline}",
                value: "{deadline_value}",
                onchange: move |event| {
                    let deadline = parse_iso(&event.value());
                    wizard.write().edit(OrderField::Deadline, |draft| draft.deadline = deadline);
                },
            }
            if let Some(deadline) = deadline {
                p { class: "field-hint", "{format_long(deadline)}" }
            }
            FieldError { message: error_of(wizard, OrderField::Deadline) }
        }
        div { class: "field",
            label { r#for: "order-contact-method", "Preferred Contact Method" }
            select {
                id: "order-contact-method",
                value: "{selected_method}",
                onchange: move |event| {
                    let method = ContactMethod::from_value(&event.value());
                    wizard.write().edit(OrderField::ContactMethod, |draft| draft.contact_method = method);
                },
                option { value: "", disabled: true, selected: selected_method.is_empty(), "Select a contact method" }
                for option_method in ContactMethod::ALL {
                    option {
                        key: "{option_method.value()}",
                        value: option_method.value(),
                        selected: selected_method == option_method.value(),
                        "{option_method.label()}"
                    }
                }
            }
            FieldError { message: error_of(wizard, OrderField::ContactMethod) }
        }
        if let Some(method) = method {
            div { class: "field",
                label { r#for: "order-contact-detail", "Contact Details" }
                input {
                    id: "order-contact-detail",
                    r#type: detail_type,
                    placeholder: method.placeholder(),
                    value: "{contact_detail}",
                    oninput: move |event| {
                        wizard.write().edit(OrderField::ContactDetail, |draft| draft.contact_detail = event.value());
                    },
                }
                if let Some(hint) = method.hint() {
                    p { class: "field-hint", "{hint}" }
                }
                FieldError { message: error_of(wizard, OrderField::ContactDetail) }
            }
        } else {
            FieldError { message: error_of(wizard, OrderField::ContactDetail) }
        }
        if require_terms {
            div { class: "field checkbox",
                label {
                    input {
                        r#type: "checkbox",
                        checked: terms_accepted,
                        onchange: move |event| {
                            let accepted = event.checked();
                            wizard.write().edit(OrderField::Terms, |draft| draft.terms_accepted = accepted);
                        },
                    }
                    " I accept the terms and conditions"
                }
                FieldError { message: error_of(wizard, OrderField::Terms) }
            }
        }
    }
}

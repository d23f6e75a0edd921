use dioxus::prelude::*;
use serde::Serialize;

use crate::config::RuntimeConfig;
use crate::notifications::use_toaster;
use crate::reveal::AnimatedText;
use crate::submission::{deliver, SubmitError};
use crate::visibility::{reveal_class, use_visibility, VisibilityOptions};

pub const MAX_MESSAGE_CHARS: usize = 2000;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Labels of required fields that are still blank.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }

    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// Contact form plus its send lifecycle. `begin_send` flips into the sending
/// state synchronously so a second submit cannot race the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactState {
    fields: ContactForm,
    sending: bool,
    error: Option<String>,
}

impl ContactState {
    pub fn fields(&self) -> &ContactForm {
        &self.fields
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn edit(&mut self, apply: impl FnOnce(&mut ContactForm)) {
        apply(&mut self.fields);
    }

    pub fn begin_send(&mut self) -> Option<ContactPayload> {
        if self.sending {
            return None;
        }
        let missing = self.fields.missing_required();
        if !missing.is_empty() {
            self.error = Some(format!("Please fill in your {}.", missing.join(", ")));
            return None;
        }
        self.error = None;
        self.sending = true;
        Some(self.fields.payload())
    }

    /// Success clears the form; failure keeps it for another attempt.
    pub fn finish_send(&mut self, outcome: Result<(), SubmitError>) -> Result<(), SubmitError> {
        self.sending = false;
        match &outcome {
            Ok(()) => self.fields = ContactForm::default(),
            Err(err) => {
                tracing::error!("contact: submission failed: {err}");
                self.error = Some(format!("{err}. Your message was kept, please try again."));
            }
        }
        outcome
    }
}

struct SocialLink {
    name: &'static str,
    url: &'static str,
}

const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "GitHub", url: "https://github.com/username" },
    SocialLink { name: "LinkedIn", url: "https://linkedin.com/in/username" },
    SocialLink { name: "Twitter", url: "https://twitter.com/username" },
];

#[component]
pub fn ContactSection() -> Element {
    let config = use_context::<RuntimeConfig>();
    let toaster = use_toaster();
    let visibility = use_visibility(VisibilityOptions::once());
    let mut contact = use_signal(ContactState::default);

    let visible = visibility.visible();
    let state = contact.read().clone();
    let loading = state.is_sending();
    let fields = state.fields();
    let char_count = fields.message.chars().count();

    rsx! {
        section { id: "contact", class: "section contact",
            onmounted: move |event| visibility.attach(event),
            div { class: "section-container narrow",
                div { class: "section-heading",
                    span { class: "eyebrow", "Let's Connect" }
                    AnimatedText { text: "Get in touch with me".to_string(), once: true, class: "section-title".to_string() }
                    p { class: "{reveal_class(visible)}",
                        "Have a project in mind or want to discuss a potential collaboration? I'd love to hear from you! Fill out the form below, and I'll get back to you as soon as possible."
                    }
                }
                div { class: "contact-grid",
                    div { class: "{reveal_class(visible)}", style: "transition-delay: 200ms",
                        form {
                            class: "contact-form",
                            onsubmit: move |event| {
                                event.prevent_default();
                                let Some(payload) = contact.write().begin_send() else {
                                    return;
                                };
                                let endpoint = config.contact_api_url.clone();
                                let delay_ms = config.simulated_delay_ms;
                                spawn(async move {
                                    let outcome = deliver(endpoint.as_deref(), delay_ms, &payload).await;
                                    if contact.write().finish_send(outcome).is_ok() {
                                        toaster.success(
                                            "Message sent!",
                                            "Thanks for reaching out. I'll get back to you soon.",
                                        );
                                    }
                                });
                            },
                            div { class: "field",
                                label { r#for: "contact-name", "Your Name" }
                                input {
                                    id: "contact-name",
                                    name: "name",
                                    r#type: "text",
                                    required: true,
                                    placeholder: "John Doe",
                                    value: "{fields.name}",
                                    disabled: loading,
                                    oninput: move |event| contact.write().edit(|fields| fields.name = event.value()),
                                }
                            }
                            div { class: "field",
                                label { r#for: "contact-email", "Email Address" }
                                input {
                                    id: "contact-email",
                                    name: "email",
                                    r#type: "email",
                                    required: true,
                                    placeholder: "john@example.com",
                                    value: "{fields.email}",
                                    disabled: loading,
                                    oninput: move |event| contact.write().edit(|fields| fields.email = event.value()),
                                }
                            }
                            div { class: "field",
                                label { r#for: "contact-message", "Your Message" }
                                textarea {
                                    id: "contact-message",
                                    name: "message",
                                    rows: "5",
                                    required: true,
                                    maxlength: "{MAX_MESSAGE_CHARS}",
                                    placeholder: "I'd like to discuss a project...",
                                    value: "{fields.message}",
                                    disabled: loading,
                                    oninput: move |event| contact.write().edit(|fields| fields.message = event.value()),
                                }
                                p { class: "field-hint", "{char_count} / {MAX_MESSAGE_CHARS} characters" }
                            }
                            if let Some(message) = state.error() {
                                div { class: "form-error", role: "alert", "{message}" }
                            }
                            button {
                                r#type: "submit",
                                class: "btn-primary wide",
                                disabled: loading,
                                if loading { "Sending..." } else { "Send Message" }
                            }
                        }
                    }
                    div { class: "{reveal_class(visible)}", style: "transition-delay: 400ms",
                        div { class: "glass contact-info",
                            h3 { "Contact Information" }
                            div { class: "contact-detail",
                                p { class: "muted", "Email" }
                                a { href: "mailto:contact@example.com", class: "link-underline", "contact@example.com" }
                            }
                            div { class: "contact-detail",
                                p { class: "muted", "Based in" }
                                p { "San Francisco, CA" }
                            }
                            div { class: "social",
                                p { class: "muted", "Follow me on" }
                                div { class: "social-links",
                                    for link in SOCIAL_LINKS {
                                        a {
                                            key: "{link.name}",
                                            href: link.url,
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            aria_label: link.name,
                                            class: "social-link",
                                            "{link.name}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_fields_are_reported_as_missing() {
        let form = ContactForm {
            name: "Jane".to_string(),
            email: "   ".to_string(),
            message: String::new(),
        };
        assert_eq!(form.missing_required(), vec!["email", "message"]);
        assert!(!form.is_complete());
    }

    #[test]
    fn payload_is_trimmed() {
        let form = ContactForm {
            name: " Jane ".to_string(),
            email: "jane@example.com ".to_string(),
            message: "\nHello there\n".to_string(),
        };
        assert!(form.is_complete());
        assert_eq!(
            form.payload(),
            ContactPayload {
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
                message: "Hello there".to_string(),
            }
        );
    }

    fn filled() -> ContactState {
        let mut state = ContactState::default();
        state.edit(|fields| {
            fields.name = "Jane".to_string();
            fields.email = "jane@example.com".to_string();
            fields.message = "Hello there".to_string();
        });
        state
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut state = filled();
        assert!(state.begin_send().is_some());
        assert!(state.is_sending());
        assert_eq!(state.begin_send(), None);
    }

    #[test]
    fn whitespace_only_fields_report_an_error() {
        let mut state = filled();
        state.edit(|fields| fields.message = "   ".to_string());
        assert_eq!(state.begin_send(), None);
        assert!(!state.is_sending());
        assert_eq!(state.error(), Some("Please fill in your message."));

        state.edit(|fields| fields.message = "Real text".to_string());
        assert!(state.begin_send().is_some());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn failed_send_keeps_the_message() {
        let mut state = filled();
        state.begin_send();
        let err = SubmitError::Transport("offline".to_string());
        assert!(state.finish_send(Err(err)).is_err());
        assert!(!state.is_sending());
        assert_eq!(state.fields().message, "Hello there");
        assert!(state.error().is_some());

        state.begin_send();
        assert_eq!(state.finish_send(Ok(())), Ok(()));
        assert_eq!(state.fields(), &ContactForm::default());
    }

    #[test]
    fn reset_form_is_empty() {
        let form = ContactForm::default();
        assert_eq!(form.missing_required().len(), 3);
    }
}

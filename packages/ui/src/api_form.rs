//! Forms bound to a backend endpoint.
//!
//! [`ApiForm`] keeps its field values in a [`FormSubmission`] signal. On submit
//! it posts the values, reports the outcome into the status banner and, on
//! success only, clears every field. While a request is pending the submit
//! button is disabled and further submits are ignored.

use api::{ApiClient, Endpoint, FormSubmission, Transport};
use dioxus::prelude::*;

use crate::status::{show_status, use_status, StatusMessage};
use crate::use_api_client;

/// One input of an [`ApiForm`].
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSpec {
    /// Key in the JSON body.
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub required: bool,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            input_type: "text",
            required: true,
        }
    }

    pub const fn password(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            input_type: "password",
            required: true,
        }
    }
}

/// What a finished submit does to the page.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitOutcome {
    pub status: StatusMessage,
    /// Clear the form. Only set on success so the user can correct and resubmit.
    pub reset: bool,
}

impl SubmitOutcome {
    pub fn apply(&self, values: &mut FormSubmission) {
        if self.reset {
            values.clear_values();
        }
    }
}

/// Claim the form's in-flight slot. Returns `false` if a request is already pending.
pub fn try_begin_submit(pending: &mut bool) -> bool {
    if *pending {
        return false;
    }
    *pending = true;
    true
}

/// Release the slot taken by [`try_begin_submit`].
pub fn finish_submit(pending: &mut bool) {
    *pending = false;
}

/// Submit `submission` and translate the result into a [`SubmitOutcome`].
pub async fn submit_form<T: Transport>(
    client: &ApiClient<T>,
    endpoint: Endpoint,
    submission: &FormSubmission,
) -> SubmitOutcome {
    match client.submit(endpoint, submission).await {
        Ok(message) => SubmitOutcome {
            status: StatusMessage::success(message),
            reset: true,
        },
        Err(err) => SubmitOutcome {
            status: StatusMessage::from(&err),
            reset: false,
        },
    }
}

#[component]
pub fn ApiForm(
    /// DOM id of the `<form>`, e.g. `"login-form"`.
    id: String,
    endpoint: Endpoint,
    fields: Vec<FieldSpec>,
    #[props(default = "Submit".to_string())] submit_label: String,
) -> Element {
    let client = use_api_client();
    let mut status = use_status();
    let names: Vec<&'static str> = fields.iter().map(|f| f.name).collect();
    let mut values = use_signal(move || FormSubmission::with_fields(names));
    let mut pending = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if !try_begin_submit(&mut pending.write()) {
            tracing::debug!(%endpoint, "submit ignored, request in flight");
            return;
        }

        let client = client.clone();
        let submission = values();
        spawn(async move {
            let outcome = submit_form(&client, endpoint, &submission).await;
            outcome.apply(&mut values.write());
            show_status(&mut status, outcome.status);
            finish_submit(&mut pending.write());
        });
    };

    rsx! {
        form {
            id: "{id}",
            class: "api-form",
            onsubmit: onsubmit,

            for field in fields.iter() {
                FormField {
                    key: "{field.name}",
                    field: field.clone(),
                    values: values,
                }
            }

            button {
                class: "api-form-submit",
                r#type: "submit",
                disabled: pending(),
                if pending() { "Sending..." } else { "{submit_label}" }
            }
        }
    }
}

#[component]
fn FormField(field: FieldSpec, values: Signal<FormSubmission>) -> Element {
    let mut values = values;
    let name = field.name;
    let value = values.read().get(name).unwrap_or_default().to_string();

    rsx! {
        label {
            class: "api-form-field",
            span { class: "api-form-label", "{field.label}" }
            input {
                name: "{name}",
                r#type: "{field.input_type}",
                required: field.required,
                value: "{value}",
                oninput: move |evt: FormEvent| values.write().set(name, evt.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ClientConfig, MemoryTransport};

    fn client(transport: &MemoryTransport) -> ApiClient<MemoryTransport> {
        ApiClient::new(transport.clone(), ClientConfig::default())
    }

    fn register_form() -> FormSubmission {
        let mut values = FormSubmission::with_fields(["username", "password"]);
        values.set("username", "alice");
        values.set("password", "secret");
        values
    }

    #[tokio::test]
    async fn test_register_success_clears_form() {
        let transport = MemoryTransport::new();
        transport.respond(200, r#"{"message":"Registered"}"#);
        let mut values = register_form();

        let outcome = submit_form(&client(&transport), Endpoint::Register, &values).await;
        outcome.apply(&mut values);

        assert_eq!(outcome.status, StatusMessage::success("Registered"));
        assert_eq!(outcome.status.class(), "message success");
        assert!(values.is_blank());
        assert_eq!(values.len(), 2);
    }

    #[tokio::test]
    async fn test_login_failure_keeps_values() {
        let transport = MemoryTransport::new();
        transport.respond(401, r#"{"error":"Invalid credentials"}"#);
        let mut values = register_form();
        let before = values.clone();

        let outcome = submit_form(&client(&transport), Endpoint::Login, &values).await;
        outcome.apply(&mut values);

        assert_eq!(outcome.status, StatusMessage::error("Invalid credentials"));
        assert_eq!(outcome.status.class(), "message error");
        assert_eq!(values, before);
    }

    #[tokio::test]
    async fn test_reset_with_malformed_body_reports_error() {
        let transport = MemoryTransport::new();
        transport.respond(200, "not json");
        let mut values = FormSubmission::from_pairs([
            ("username", "alice"),
            ("old_password", "secret"),
            ("new_password", "better"),
        ]);
        let before = values.clone();

        let outcome = submit_form(&client(&transport), Endpoint::Reset, &values).await;
        outcome.apply(&mut values);

        assert_eq!(outcome.status.severity, crate::Severity::Error);
        assert!(!outcome.reset);
        assert_eq!(values, before);
    }

    #[tokio::test]
    async fn test_second_submit_refused_while_pending() {
        let transport = MemoryTransport::new();
        transport.respond(200, r#"{"message":"Registered"}"#);
        transport.respond(200, r#"{"message":"Registered again"}"#);
        let client = client(&transport);
        let values = register_form();
        let mut pending = false;

        assert!(try_begin_submit(&mut pending));
        assert!(!try_begin_submit(&mut pending));
        let outcome = submit_form(&client, Endpoint::Register, &values).await;
        assert_eq!(outcome.status, StatusMessage::success("Registered"));
        assert_eq!(transport.requests().len(), 1);

        finish_submit(&mut pending);
        assert!(!pending);
        assert!(try_begin_submit(&mut pending));
        submit_form(&client, Endpoint::Register, &values).await;
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn test_field_constructors() {
        let field = FieldSpec::password("new_password", "New password");
        assert_eq!(field.input_type, "password");
        assert!(field.required);
        assert_eq!(FieldSpec::text("username", "Username").input_type, "text");
    }
}

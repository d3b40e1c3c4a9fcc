//! The shared status banner.
//!
//! Every handled action reports into a single `Signal<Option<StatusMessage>>`.
//! Writing a new message replaces both the text and the severity class; there
//! is no history.

use api::ApiError;
use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }

    /// `"message"` plus exactly one severity class.
    pub fn class(&self) -> &'static str {
        match self.severity {
            Severity::Success => "message success",
            Severity::Error => "message error",
        }
    }
}

impl From<&ApiError> for StatusMessage {
    fn from(err: &ApiError) -> Self {
        StatusMessage::error(err.to_string())
    }
}

pub type StatusSignal = Signal<Option<StatusMessage>>;

/// Get the shared status slot.
pub fn use_status() -> StatusSignal {
    use_context::<StatusSignal>()
}

pub fn show_status(status: &mut StatusSignal, message: StatusMessage) {
    status.set(Some(message));
}

/// Provides the status slot to its children.
#[component]
pub fn StatusProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Option::<StatusMessage>::None));

    rsx! {
        {children}
    }
}

/// Renders the current status message into `#message`.
#[component]
pub fn StatusBanner() -> Element {
    let status = use_status();

    match status() {
        Some(message) => rsx! {
            div {
                id: "message",
                class: message.class(),
                role: "status",
                "{message.text}"
            }
        },
        None => rsx! {
            div { id: "message", class: "message", role: "status" }
        },
    }
}

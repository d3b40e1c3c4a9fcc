use api::Endpoint;
use dioxus::prelude::*;
use ui::{ApiForm, FieldSpec};

use super::PageCard;

#[component]
pub fn Reset() -> Element {
    rsx! {
        PageCard {
            title: "Reset Password",
            ApiForm {
                id: "reset-form",
                endpoint: Endpoint::Reset,
                fields: vec![
                    FieldSpec::text("username", "Username"),
                    FieldSpec::password("old_password", "Current password"),
                    FieldSpec::password("new_password", "New password"),
                ],
                submit_label: "Reset password",
            }
        }
    }
}

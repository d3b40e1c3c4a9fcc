//! Registration page.

use api::Endpoint;
use dioxus::prelude::*;
use ui::{ApiForm, FieldSpec};

use super::PageCard;

#[component]
pub fn Register() -> Element {
    rsx! {
        PageCard {
            title: "Create Account",
            ApiForm {
                id: "register-form",
                endpoint: Endpoint::Register,
                fields: vec![
                    FieldSpec::text("username", "Username"),
                    FieldSpec::password("password", "Password"),
                ],
                submit_label: "Register",
            }
            p {
                class: "page-footer",
                "Already have an account? "
                Link { to: "/login", "Sign in" }
            }
        }
    }
}

//! Login page.

use api::Endpoint;
use dioxus::prelude::*;
use ui::{ApiForm, FieldSpec};

use super::PageCard;

#[component]
pub fn Login() -> Element {
    rsx! {
        PageCard {
            title: "Sign In",
            ApiForm {
                id: "login-form",
                endpoint: Endpoint::Login,
                fields: vec![
                    FieldSpec::text("username", "Username"),
                    FieldSpec::password("password", "Password"),
                ],
                submit_label: "Login",
            }
            p {
                class: "page-footer",
                Link { to: "/reset", "Forgot your password?" }
                " · "
                Link { to: "/register", "Create an account" }
            }
        }
    }
}

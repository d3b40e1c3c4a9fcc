use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "page-card",
            h1 { class: "page-title", "Welcome" }
            p {
                class: "page-lead",
                "Create an account, sign in, or change your password."
            }
            div {
                class: "home-links",
                Link { class: "home-link", to: "/register", "Register" }
                Link { class: "home-link", to: "/login", "Login" }
                Link { class: "home-link", to: "/reset", "Reset password" }
                Link { class: "home-link", to: "/users", "View users" }
            }
        }
    }
}

use dioxus::prelude::*;
use ui::{StatusBanner, StatusProvider};

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod reset;
pub use reset::Reset;

mod users;
pub use users::Users;

/// Card layout shared by the pages, with the page's own status banner.
#[component]
fn PageCard(title: String, children: Element) -> Element {
    rsx! {
        StatusProvider {
            div {
                class: "page-card",
                h1 { class: "page-title", "{title}" }
                StatusBanner {}
                {children}
            }
        }
    }
}

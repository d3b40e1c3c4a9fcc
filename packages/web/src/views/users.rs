use dioxus::prelude::*;
use ui::UsersTable;

use super::PageCard;

/// Admin listing of every account and its lockout state.
#[component]
pub fn Users() -> Element {
    rsx! {
        PageCard {
            title: "Registered Users",
            div {
                class: "users-table-wrapper",
                UsersTable {}
            }
        }
    }
}

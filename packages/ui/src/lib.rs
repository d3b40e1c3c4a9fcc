//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

use api::{ApiClient, HttpTransport};

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod status;
pub use status::{show_status, use_status, Severity, StatusBanner, StatusMessage, StatusProvider, StatusSignal};

mod api_form;
pub use api_form::{
    finish_submit, submit_form, try_begin_submit, ApiForm, FieldSpec, SubmitOutcome,
};

mod users_table;
pub use users_table::{load_users, user_rows, UserRow, UsersTable};

mod menu;
pub use menu::{MenuVisibility, MobileMenu};

mod navbar;
pub use navbar::{NavLink, Navbar};

/// The client every view shares, provided once by the app root.
pub type WebClient = ApiClient<HttpTransport>;

/// Get the shared API client from context.
pub fn use_api_client() -> WebClient {
    use_context::<WebClient>()
}

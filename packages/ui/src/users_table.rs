//! Read-only table of registered users.
//!
//! The table fetches `/api/users` once when it mounts. A successful fetch
//! replaces every row with the server's array, in server order; a failed fetch
//! reports into the status banner and leaves the rows alone.

use api::{ApiClient, Transport, UserRecord};
use dioxus::prelude::*;

use crate::status::{show_status, use_status, StatusMessage};
use crate::use_api_client;

const ROW_CLASS: &str = "hover:bg-gray-700 transition duration-150";
const CELL_CLASS: &str = "py-4 px-6 text-sm text-gray-100";
const LOCKED_CELL_CLASS: &str = "py-4 px-6 text-sm text-red-400 font-medium";

/// Display strings for one table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRow {
    pub id: String,
    pub username: String,
    pub failed_attempts: String,
    pub locked_out: &'static str,
    pub locked_class: &'static str,
}

impl From<&UserRecord> for UserRow {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            failed_attempts: user.failed_attempts.to_string(),
            locked_out: if user.locked_out { "Yes" } else { "No" },
            locked_class: if user.locked_out {
                LOCKED_CELL_CLASS
            } else {
                CELL_CLASS
            },
        }
    }
}

impl UserRow {
    pub fn cells(&self) -> [&str; 4] {
        [
            self.id.as_str(),
            self.username.as_str(),
            self.failed_attempts.as_str(),
            self.locked_out,
        ]
    }
}

pub fn user_rows(users: &[UserRecord]) -> Vec<UserRow> {
    users.iter().map(UserRow::from).collect()
}

/// Fetch users, turning any failure into the message to show.
pub async fn load_users<T: Transport>(
    client: &ApiClient<T>,
) -> Result<Vec<UserRecord>, StatusMessage> {
    client
        .fetch_users()
        .await
        .map_err(|err| StatusMessage::from(&err))
}

#[component]
pub fn UsersTable() -> Element {
    let client = use_api_client();
    let mut status = use_status();
    let mut users = use_signal(Vec::<UserRecord>::new);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            match load_users(&client).await {
                Ok(records) => users.set(records),
                Err(message) => show_status(&mut status, message),
            }
        }
    });

    let rows = user_rows(&users.read());

    rsx! {
        table {
            class: "users-table",
            thead {
                tr {
                    th { "ID" }
                    th { "Username" }
                    th { "Failed attempts" }
                    th { "Locked out" }
                }
            }
            tbody {
                id: "users-tbody",
                for row in rows {
                    tr {
                        key: "{row.id}",
                        class: ROW_CLASS,
                        td { class: CELL_CLASS, "{row.id}" }
                        td { class: CELL_CLASS, "{row.username}" }
                        td { class: CELL_CLASS, "{row.failed_attempts}" }
                        td { class: row.locked_class, "{row.locked_out}" }
                    }
                }
            }
        }
    }
}

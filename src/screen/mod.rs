//! The home screen: connection status, the user list and the one dialog
//! that can be open on top of it.
//!
//! Every action awaits its network call before returning, and takes
//! `&mut self`, so at most one request is ever in flight. Failures never
//! escape: they become the status message.

mod view;

pub use view::{render_dialog, render_home};

use tracing::{info, warn};

use crate::client::UserClient;
use crate::error::UserError;
use crate::output::mask_email;
use crate::types::{NewUser, User};

pub const INITIAL_STATUS: &str = "Not connected";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Detail view for one record, offering DELETE or CLOSE.
    UserDetails(User),
    /// Add form (Full Name, Email Address), offering CANCEL or ADD.
    AddUser,
}

/// One rendered row of the user list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub text: String,
    pub secondary_text: String,
}

pub struct HomeScreen {
    client: UserClient,
    mask_emails: bool,
    status: String,
    connection: ConnectionState,
    users: Vec<User>,
    dialog: Option<Dialog>,
}

impl HomeScreen {
    pub fn new(client: UserClient, mask_emails: bool) -> Self {
        Self {
            client,
            mask_emails,
            status: INITIAL_STATUS.to_string(),
            connection: ConnectionState::Disconnected,
            users: Vec::new(),
            dialog: None,
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn connection(&self) -> ConnectionState {
        self.connection
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn server_url(&self) -> &str {
        self.client.base_url()
    }

    /// Entering the screen always re-checks the connection.
    pub async fn on_enter(&mut self) {
        self.check_connection().await;
    }

    pub async fn check_connection(&mut self) {
        match self.client.check_health().await {
            Ok(()) => {
                info!(server = %self.client.base_url(), "connected");
                self.connection = ConnectionState::Connected;
                self.status = "Connected to server".to_string();
                self.load_users().await;
            }
            Err(err) => {
                warn!(error = %err, "health check failed");
                self.connection = ConnectionState::Disconnected;
                self.status = failure_status("Server error", "Connection failed", &err);
            }
        }
    }

    /// Replaces the collection wholesale on success; keeps it on failure.
    pub async fn load_users(&mut self) {
        match self.client.list_users().await {
            Ok(users) => {
                self.users = users;
                self.status = format!("Loaded {} users", self.users.len());
            }
            Err(err) => {
                warn!(error = %err, "loading users failed");
                self.status = failure_status("Failed to load users", "Error loading users", &err);
            }
        }
    }

    /// Rebuilds the visible list from the current collection.
    pub fn items(&self) -> Vec<ListItem> {
        self.users
            .iter()
            .map(|user| ListItem {
                text: user.name.clone(),
                secondary_text: format!("Email: {}", self.display_email(&user.email)),
            })
            .collect()
    }

    fn display_email(&self, email: &str) -> String {
        if self.mask_emails {
            mask_email(email)
        } else {
            email.to_string()
        }
    }

    /// Opens the detail dialog for the item at `index`. Returns `false` when
    /// there is no such item.
    pub fn show_user_details(&mut self, index: usize) -> bool {
        match self.users.get(index) {
            Some(user) => {
                self.dialog = Some(Dialog::UserDetails(user.clone()));
                true
            }
            None => false,
        }
    }

    pub async fn delete_user(&mut self, id: i64) {
        match self.client.delete_user(id).await {
            Ok(()) => {
                info!(id, "user deleted");
                self.status = "User deleted successfully".to_string();
                if matches!(&self.dialog, Some(Dialog::UserDetails(user)) if user.id == id) {
                    self.dialog = None;
                }
                self.load_users().await;
            }
            Err(err) => {
                warn!(id, error = %err, "delete failed");
                self.status = failure_status("Failed to delete user", "Error deleting user", &err);
            }
        }
    }

    pub fn show_add_user_dialog(&mut self) {
        self.dialog = Some(Dialog::AddUser);
    }

    /// Submits the add form. Empty fields never reach the network and keep
    /// the form open, as does any failed request.
    pub async fn add_user(&mut self, name: &str, email: &str) {
        let Some(new_user) = NewUser::new(name, email) else {
            self.status = "Please fill in all fields".to_string();
            return;
        };

        match self.client.create_user(&new_user).await {
            Ok(()) => {
                info!(name = %new_user.name, "user added");
                self.status = "User added successfully".to_string();
                self.dialog = None;
                self.load_users().await;
            }
            Err(err) => {
                warn!(error = %err, "add failed");
                self.status = failure_status("Failed to add user", "Error adding user", &err);
            }
        }
    }

    /// CLOSE on the detail view, CANCEL on the add form.
    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }
}

/// `"{server_prefix}: {status}"` for a non-success response, otherwise
/// `"{transport_prefix}: {reason}"`.
fn failure_status(server_prefix: &str, transport_prefix: &str, err: &UserError) -> String {
    match err {
        UserError::Server { status } => format!("{server_prefix}: {status}"),
        other => format!("{transport_prefix}: {}", other.reason()),
    }
}

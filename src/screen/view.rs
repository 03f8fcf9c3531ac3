use colored::Colorize;

use super::{ConnectionState, Dialog, HomeScreen};

const TITLE: &str = "User Management App";

const MENU: &[(&str, &str)] = &[
    ("r", "Refresh Users"),
    ("a", "Add New User"),
    ("c", "Check Connection"),
    ("q", "Quit"),
];

/// Full text rendering of the home screen. Rebuilt from scratch each call.
pub fn render_home(screen: &HomeScreen) -> String {
    let status = match screen.connection() {
        ConnectionState::Connected => screen.status().green(),
        ConnectionState::Disconnected => screen.status().bright_black(),
    };

    let mut out = format!("{}\n{status}\n", TITLE.bold());
    out.push_str(&format!("Server: {}\n\n", screen.server_url().bright_black()));

    for (i, item) in screen.items().iter().enumerate() {
        out.push_str(&format!("{:>3}. {}\n", i + 1, item.text));
        out.push_str(&format!("     {}\n", item.secondary_text.bright_black()));
    }
    if !screen.users().is_empty() {
        out.push('\n');
    }

    let menu: Vec<String> = MENU
        .iter()
        .map(|(key, label)| format!("[{}] {label}", key.bold()))
        .collect();
    out.push_str(&menu.join("  "));
    out.push('\n');
    if !screen.users().is_empty() {
        out.push_str("Enter a number to view a user.\n");
    }

    out
}

pub fn render_dialog(dialog: &Dialog) -> String {
    match dialog {
        Dialog::UserDetails(user) => format!(
            "{}\nID: {}\nName: {}\nEmail: {}\n[{}] DELETE  [{}] CLOSE\n",
            "User Details".bold(),
            user.id,
            user.name,
            user.email,
            "d".bold(),
            "c".bold(),
        ),
        Dialog::AddUser => format!("{}\n", "Add New User".bold()),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::client::UserClient;
    use crate::types::User;

    fn plain() {
        colored::control::set_override(false);
    }

    fn user(id: i64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    fn screen() -> HomeScreen {
        let client = UserClient::new("http://127.0.0.1:5000", Duration::from_secs(5)).unwrap();
        HomeScreen::new(client, false)
    }

    #[test]
    fn empty_screen_shows_title_status_and_menu() {
        plain();
        let text = render_home(&screen());
        assert!(text.starts_with(
            "User Management App\nNot connected\nServer: http://127.0.0.1:5000\n\n"
        ));
        assert!(text.contains("[r] Refresh Users"));
        assert!(text.contains("[a] Add New User"));
        assert!(text.contains("[c] Check Connection"));
        assert!(!text.contains("Enter a number"));
    }

    #[test]
    fn users_are_numbered_from_one() {
        plain();
        let mut screen = screen();
        screen.users = vec![user(10, "Ada"), user(11, "Grace")];
        let text = render_home(&screen);
        assert!(text.contains("  1. Ada\n     Email: ada@example.com\n"));
        assert!(text.contains("  2. Grace\n     Email: grace@example.com\n"));
        assert!(text.contains("Enter a number to view a user."));
    }

    #[test]
    fn details_dialog_shows_full_record() {
        plain();
        let text = render_dialog(&Dialog::UserDetails(user(3, "Ada")));
        assert_eq!(
            text,
            "User Details\nID: 3\nName: Ada\nEmail: ada@example.com\n[d] DELETE  [c] CLOSE\n"
        );
    }
}

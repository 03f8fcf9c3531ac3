//! Line-driven loop over the home screen.
//!
//! Reads from any `BufRead` and writes to any `Write` so the whole screen can
//! be driven from a script. End of input quits, and also cancels whatever
//! dialog is open.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::screen::{render_dialog, render_home, Dialog, HomeScreen};

pub async fn run<R: BufRead, W: Write>(
    screen: &mut HomeScreen,
    mut input: R,
    mut out: W,
) -> Result<()> {
    screen.on_enter().await;

    loop {
        write!(out, "\n{}", render_home(screen))?;
        let Some(line) = prompt(&mut input, &mut out, "> ")? else {
            break;
        };

        match line.trim() {
            "q" => break,
            "r" => screen.load_users().await,
            "c" => screen.check_connection().await,
            "a" => add_user_dialog(screen, &mut input, &mut out).await?,
            "" => {}
            choice => match choice.parse::<usize>() {
                Ok(n) if n >= 1 && screen.show_user_details(n - 1) => {
                    user_details_dialog(screen, &mut input, &mut out).await?;
                }
                _ => writeln!(out, "Unknown choice: {choice}")?,
            },
        }
    }

    Ok(())
}

async fn add_user_dialog<R: BufRead, W: Write>(
    screen: &mut HomeScreen,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    screen.show_add_user_dialog();

    while screen.dialog() == Some(&Dialog::AddUser) {
        write!(out, "\n{}", render_dialog(&Dialog::AddUser))?;

        let Some(name) = prompt(input, out, "Full Name: ")? else {
            screen.dismiss_dialog();
            break;
        };
        let Some(email) = prompt(input, out, "Email Address: ")? else {
            screen.dismiss_dialog();
            break;
        };

        match prompt(input, out, "[a] ADD  [c] CANCEL: ")?.as_deref().map(str::trim) {
            Some("a") => {
                screen.add_user(&name, &email).await;
                if screen.dialog().is_some() {
                    writeln!(out, "{}", screen.status())?;
                }
            }
            _ => screen.dismiss_dialog(),
        }
    }

    Ok(())
}

async fn user_details_dialog<R: BufRead, W: Write>(
    screen: &mut HomeScreen,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    while let Some(dialog) = screen.dialog().cloned() {
        let Dialog::UserDetails(user) = &dialog else {
            break;
        };
        write!(out, "\n{}", render_dialog(&dialog))?;

        match prompt(input, out, "> ")?.as_deref().map(str::trim) {
            Some("d") => {
                screen.delete_user(user.id).await;
                if screen.dialog().is_some() {
                    writeln!(out, "{}", screen.status())?;
                }
            }
            Some("c") | None => screen.dismiss_dialog(),
            Some(other) => writeln!(out, "Unknown choice: {other}")?,
        }
    }

    Ok(())
}

/// Writes `label`, then reads one line without its line ending. `None` at
/// end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_strips_line_ending_only() {
        let mut input = " Ada Lovelace \r\n".as_bytes();
        let mut out = Vec::new();
        let line = prompt(&mut input, &mut out, "Full Name: ").unwrap();
        assert_eq!(line.as_deref(), Some(" Ada Lovelace "));
        assert_eq!(out, b"Full Name: ");
    }

    #[test]
    fn prompt_returns_none_at_eof() {
        let mut input = "".as_bytes();
        let mut out = Vec::new();
        assert!(prompt(&mut input, &mut out, "> ").unwrap().is_none());
    }
}

//! One-shot subcommands. Unlike the interactive screen these propagate
//! errors, so scripts get a non-zero exit code.

use tabled::Tabled;

use crate::cli::AddArgs;
use crate::client::UserClient;
use crate::error::{Result, UserError};
use crate::output::{self, mask_email};
use crate::types::{NewUser, User};

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
}

impl UserRow {
    fn new(user: &User, mask_emails: bool) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: if mask_emails {
                mask_email(&user.email)
            } else {
                user.email.clone()
            },
        }
    }
}

pub async fn check(client: &UserClient) -> Result<()> {
    client.check_health().await?;
    output::print_message(&format!("Connected to server at {}", client.base_url()));
    Ok(())
}

pub async fn list(client: &UserClient, mask_emails: bool) -> Result<()> {
    let users = client.list_users().await?;

    if users.is_empty() && !output::is_json_output() {
        output::print_message("No users found");
        return Ok(());
    }

    output::print_table(&users, |u| UserRow::new(u, mask_emails));

    Ok(())
}

pub async fn show(client: &UserClient, id: i64) -> Result<()> {
    let user = find_user(client.list_users().await?, id)?;

    output::print_item(&user, |u| {
        println!("ID: {}", u.id);
        println!("Name: {}", u.name);
        println!("Email: {}", u.email);
    });

    Ok(())
}

/// The API has no get-by-id endpoint, so lookups go through the list.
fn find_user(users: Vec<User>, id: i64) -> Result<User> {
    users
        .into_iter()
        .find(|u| u.id == id)
        .ok_or(UserError::UserNotFound(id))
}

pub async fn add(client: &UserClient, args: AddArgs) -> Result<()> {
    let new_user = NewUser::new(&args.name, &args.email).ok_or(UserError::MissingFields)?;
    client.create_user(&new_user).await?;
    output::print_message(&format!("Added user {}", new_user.name));
    Ok(())
}

pub async fn delete(client: &UserClient, id: i64) -> Result<()> {
    client.delete_user(id).await?;
    output::print_message(&format!("Deleted user {id}"));
    Ok(())
}

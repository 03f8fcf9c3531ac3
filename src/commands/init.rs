use std::io::{self, BufRead, Write};
use std::path::Path;

use url::Url;

use crate::config::{Config, DEFAULT_SERVER_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::{Result, UserError};

pub fn run() -> Result<()> {
    let config_path = Config::config_path()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    if config_path.exists() {
        print!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        );
        io::stdout().flush()?;

        if !read_line(&mut input)?.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("User Manager Configuration");
    println!("==========================\n");

    print!("Server URL [{DEFAULT_SERVER_URL}]: ");
    io::stdout().flush()?;
    let server_url = read_line(&mut input)?;

    print!("Request timeout in seconds [{DEFAULT_TIMEOUT_SECS}]: ");
    io::stdout().flush()?;
    let timeout = read_line(&mut input)?;

    print!("Mask emails in lists? [y/N] ");
    io::stdout().flush()?;
    let mask_emails = read_line(&mut input)?.eq_ignore_ascii_case("y");

    let contents = render_config(&server_url, &timeout, mask_emails)?;

    write_config(&config_path, &contents)?;

    println!("\nConfig saved to {}", config_path.display());

    Ok(())
}

fn write_config(config_path: &Path, contents: &str) -> Result<()> {
    // Create config directory if it doesn't exist
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| UserError::ConfigWrite {
            path: config_path.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(config_path, contents).map_err(|e| UserError::ConfigWrite {
        path: config_path.to_path_buf(),
        source: e,
    })
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Blank answers fall back to the defaults.
fn render_config(server_url: &str, timeout: &str, mask_emails: bool) -> Result<String> {
    let server_url = if server_url.is_empty() {
        DEFAULT_SERVER_URL
    } else {
        server_url
    };
    Url::parse(server_url).map_err(|_| UserError::InvalidUrl(server_url.to_string()))?;

    let timeout_secs = if timeout.is_empty() {
        DEFAULT_TIMEOUT_SECS
    } else {
        match timeout.parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => return Err(UserError::InvalidTimeout(timeout.to_string())),
        }
    };

    Ok(format!(
        "server_url = {}\ntimeout_secs = {timeout_secs}\nmask_emails = {mask_emails}\n",
        toml::Value::String(server_url.to_string())
    ))
}

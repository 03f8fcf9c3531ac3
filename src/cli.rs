use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "users")]
#[command(about = "Browse, add and delete users on a users API server", version)]
#[command(after_help = "EXAMPLES:
    users                                   Open the interactive screen
    users list                              List users
    users add -n \"Ada\" -e ada@example.com   Add a user
    users delete 3                          Delete a user
    users --server http://host:5000 check   Check another server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Server base URL (overrides USER_MANAGER_SERVER and the config file)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress success messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show debug logs and detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Show only the first character of each email's local part in lists
    #[arg(long, global = true)]
    pub mask_emails: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive screen (default)
    App,
    /// Check that the server is reachable
    Check,
    /// List users
    #[command(after_help = "EXAMPLES:
    users list
    users list --json")]
    List,
    /// Show one user
    #[command(after_help = "EXAMPLES:
    users show 3")]
    Show {
        /// User id
        id: i64,
    },
    /// Add a user
    #[command(after_help = "EXAMPLES:
    users add --name \"Ada Lovelace\" --email ada@example.com")]
    Add(AddArgs),
    /// Delete a user
    #[command(after_help = "EXAMPLES:
    users delete 3")]
    Delete {
        /// User id
        id: i64,
    },
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    users completions bash > ~/.bash_completion.d/users
    users completions zsh > ~/.zfunc/_users")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    Init,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Full name
    #[arg(long, short)]
    pub name: String,

    /// Email address
    #[arg(long, short)]
    pub email: String,
}

//! GreenMind CLI - Terminal shell for the GreenMind client.
//!
//! # Usage
//!
//! ```bash
//! # Create an account, then confirm the emailed code
//! gm-cli signup -n "Ada Lovelace" -e ada@example.com -p 'abc12345'
//! gm-cli verify -e ada@example.com -c 483920
//!
//! # Log in / inspect / log out
//! gm-cli login -e ada@example.com -p 'abc12345'
//! gm-cli whoami
//! gm-cli logout
//!
//! # Admin content management
//! gm-cli admin content list tips
//! gm-cli admin content create tip --title "Shorter showers" \
//!     --content "Five minutes saves water" --category water --impact high
//! gm-cli admin content delete tips 3 --yes
//!
//! # Admin user management
//! gm-cli admin users list
//! gm-cli admin users delete 5 --yes
//! ```
//!
//! # Environment Variables
//!
//! - `GREENMIND_API_BASE_URL` - Backend base URL (default
//!   `http://localhost:8080/api`)
//! - `GREENMIND_SESSION_FILE` - Session token location (default
//!   `$HOME/.greenmind/session`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use greenmind_core::ContentKind;

mod commands;

use commands::CliError;
use commands::content::ContentFields;
use commands::users::UserFields;

#[derive(Parser)]
#[command(name = "gm-cli")]
#[command(author, version, about = "GreenMind client CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with email and password
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Create a new account
    Signup {
        /// Full name
        #[arg(short, long)]
        name: String,

        /// Surname (optional)
        #[arg(long)]
        surname: Option<String>,

        /// Postal address (optional)
        #[arg(long)]
        address: Option<String>,

        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password (letters and digits, 8+ characters)
        #[arg(short, long)]
        password: String,
    },
    /// Confirm an email address with the verification code
    Verify {
        /// Email address awaiting verification
        #[arg(short, long)]
        email: String,

        /// 6-digit code from the verification email
        #[arg(short, long)]
        code: String,
    },
    /// Clear the stored session
    Logout,
    /// Show the current session and profile
    Whoami,
    /// Admin management commands
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Manage missions, quizzes, and eco tips
    Content {
        #[command(subcommand)]
        action: ContentAction,
    },
    /// Manage user records
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
}

#[derive(Subcommand)]
enum ContentAction {
    /// List all items of one kind
    List {
        /// Content kind: missions, quizzes, or tips
        kind: ContentKind,
    },
    /// Create a new item
    Create {
        #[command(subcommand)]
        item: ContentFields,
    },
    /// Update an existing item
    Update {
        /// Content kind: missions, quizzes, or tips
        kind: ContentKind,

        /// Server-assigned item id
        id: i64,

        #[command(subcommand)]
        item: ContentFields,
    },
    /// Delete an item (requires --yes to confirm)
    Delete {
        /// Content kind: missions, quizzes, or tips
        kind: ContentKind,

        /// Server-assigned item id
        id: i64,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum UsersAction {
    /// List all users
    List,
    /// Create a user record
    Create {
        #[command(flatten)]
        fields: UserFields,
    },
    /// Update a user record
    Update {
        /// Server-assigned user id
        id: i64,

        #[command(flatten)]
        fields: UserFields,
    },
    /// Delete a user record (requires --yes to confirm)
    Delete {
        /// Server-assigned user id
        id: i64,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Login { email, password } => commands::auth::login(&email, &password).await?,
        Commands::Signup {
            name,
            surname,
            address,
            email,
            password,
        } => {
            commands::auth::signup(
                &name,
                surname.as_deref(),
                address.as_deref(),
                &email,
                &password,
            )
            .await?;
        }
        Commands::Verify { email, code } => commands::auth::verify(&email, &code).await?,
        Commands::Logout => commands::auth::logout()?,
        Commands::Whoami => commands::auth::whoami().await?,
        Commands::Admin { action } => match action {
            AdminAction::Content { action } => match action {
                ContentAction::List { kind } => commands::content::list(kind).await?,
                ContentAction::Create { item } => commands::content::create(item).await?,
                ContentAction::Update { kind, id, item } => {
                    commands::content::update(kind, id, item).await?;
                }
                ContentAction::Delete { kind, id, yes } => {
                    commands::content::delete(kind, id, yes).await?;
                }
            },
            AdminAction::Users { action } => match action {
                UsersAction::List => commands::users::list().await?,
                UsersAction::Create { fields } => commands::users::create(fields).await?,
                UsersAction::Update { id, fields } => commands::users::update(id, fields).await?,
                UsersAction::Delete { id, yes } => commands::users::delete(id, yes).await?,
            },
        },
    }
    Ok(())
}

//! CLI administration tool for maple-blog.
//!
//! Manages accounts and sessions, and shows blog statistics, without going
//! through the HTTP surface.
//!
//! # Usage
//!
//! ```bash
//! # Register an account and confirm it
//! cargo run --bin admin -- user create --username alice --email alice@example.com
//! cargo run --bin admin -- user confirm alice
//!
//! # Open a session and print the cookie value
//! cargo run --bin admin -- session create alice
//!
//! # Revoke every session of a user
//! cargo run --bin admin -- session revoke alice
//!
//! # Most viewed articles
//! cargo run --bin admin -- views top --limit 10
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `SESSION_SIGNING_SECRET` (required for `session`): must match the server
//! - `REDIS_URL` (required for `views`): the view store

use maple_blog::application::services::AuthService;
use maple_blog::domain::entities::User;
use maple_blog::domain::repositories::UserRepository;
use maple_blog::infrastructure::persistence::{PgSessionRepository, PgUserRepository};
use maple_blog::infrastructure::redis_connection;
use maple_blog::infrastructure::views::{RedisViewCounter, ViewCounter};
use maple_blog::web::middleware::session::SESSION_COOKIE;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing maple-blog.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage login sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Inspect article view counts
    Views {
        #[command(subcommand)]
        action: ViewsAction,
    },

    /// Show content statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Register a new account
    Create {
        #[arg(short, long)]
        username: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        /// Confirm the account immediately
        #[arg(long)]
        confirmed: bool,
    },

    /// Confirm an account, allowing it to comment
    Confirm { username: String },

    /// List all accounts
    List,
}

#[derive(Subcommand)]
enum SessionAction {
    /// Open a session and print its token
    Create { username: String },

    /// Revoke every session of a user
    Revoke {
        username: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ViewsAction {
    /// Show most viewed articles
    Top {
        /// Number of articles to show
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::User { action } => handle_user_action(action, &connect_db().await?).await,
        Commands::Session { action } => {
            handle_session_action(action, &connect_db().await?).await
        }
        Commands::Views {
            action: ViewsAction::Top { limit },
        } => show_top_views(limit).await,
        Commands::Stats => handle_stats(&connect_db().await?).await,
        Commands::Db { action } => handle_db_action(action, &connect_db().await?).await,
    }
}

async fn connect_db() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));

    match action {
        UserAction::Create {
            username,
            email,
            confirmed,
        } => create_user(&repo, username, email, confirmed).await,
        UserAction::Confirm { username } => {
            let user = repo
                .confirm(&username)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to confirm {}: {}", username, e))?;
            println!(
                "{} {} can now comment",
                "✅".green(),
                user.username.cyan().bold()
            );
            Ok(())
        }
        UserAction::List => list_users(&repo).await,
    }
}

/// Registers an account, prompting for missing fields.
async fn create_user(
    repo: &PgUserRepository,
    username: Option<String>,
    email: Option<String>,
    confirmed: bool,
) -> Result<()> {
    println!("{}", "👤 Create Account".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let user = repo
        .create_user(username.trim(), email.trim(), confirmed)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create account: {}", e))?;

    println!("{}", "✅ Account created".green().bold());
    print_user(&user);
    if !user.confirmed {
        println!();
        println!(
            "  Confirm it with: {} admin user confirm {}",
            "cargo run --bin".bright_cyan(),
            user.username
        );
    }
    println!();

    Ok(())
}

async fn list_users(repo: &PgUserRepository) -> Result<()> {
    println!("{}", "📋 Accounts".bright_blue().bold());
    println!();

    let users = repo
        .list_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list accounts: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No accounts found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<20} {:<30} {:<20} {:<12}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Email".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(90).bright_black());

    for user in &users {
        let status = if user.confirmed {
            "CONFIRMED".green()
        } else {
            "PENDING".yellow()
        };

        println!(
            "  {:<5} {:<20} {:<30} {:<20} {}",
            user.id.to_string().bright_black(),
            user.username.cyan(),
            user.email,
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

fn print_user(user: &User) {
    println!("  ID:        {}", user.id.to_string().bright_black());
    println!("  Username:  {}", user.username.cyan());
    println!("  Email:     {}", user.email);
    println!(
        "  Confirmed: {}",
        if user.confirmed {
            "yes".green()
        } else {
            "no".yellow()
        }
    );
}

async fn handle_session_action(action: SessionAction, pool: &PgPool) -> Result<()> {
    let secret =
        std::env::var("SESSION_SIGNING_SECRET").context("SESSION_SIGNING_SECRET must be set")?;

    let pool = Arc::new(pool.clone());
    let users = PgUserRepository::new(pool.clone());
    let auth = AuthService::new(Arc::new(PgSessionRepository::new(pool)), secret);

    match action {
        SessionAction::Create { username } => {
            let user = find_user(&users, &username).await?;
            let (token, session) = auth
                .open_session(user.id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to open session: {}", e))?;

            println!("{}", "🔑 Session opened".bright_blue().bold());
            println!();
            println!("  User:    {}", user.username.cyan());
            println!("  Session: {}", session.id.to_string().bright_black());
            println!(
                "  Cookie:  {}={}",
                SESSION_COOKIE.bright_cyan(),
                token.bright_yellow().bold()
            );
            println!();
            println!(
                "{}",
                "⚠️  Save this token now! It cannot be shown again."
                    .red()
                    .bold()
            );
            println!();
        }
        SessionAction::Revoke { username, yes } => {
            let user = find_user(&users, &username).await?;

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Revoke all sessions of {}?", user.username))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            let revoked = auth
                .revoke_sessions(user.id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to revoke sessions: {}", e))?;

            println!(
                "{} Revoked {} session(s)",
                "✅".green(),
                revoked.to_string().bright_white().bold()
            );
        }
    }

    Ok(())
}

async fn find_user(repo: &PgUserRepository, username: &str) -> Result<User> {
    repo.find_by_username(username)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .with_context(|| format!("User {} not found", username))
}

/// Prints the most viewed articles from the Redis view store.
async fn show_top_views(limit: usize) -> Result<()> {
    let redis_url = std::env::var("REDIS_URL").context("REDIS_URL must be set")?;
    let conn = redis_connection::connect(&redis_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to Redis: {}", e))?;
    let counter = RedisViewCounter::new(conn);

    println!("{}", "👀 Most Viewed Articles".bright_blue().bold());
    println!();

    let top = counter
        .top(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read view counts: {}", e))?;

    if top.is_empty() {
        println!("{}", "  No views recorded yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<10} {:<10}",
        "Article".bright_white().bold(),
        "Views".bright_white().bold()
    );
    println!("  {}", "─".repeat(22).bright_black());
    for (article_id, views) in top {
        println!(
            "  {:<10} {}",
            format!("/view/{}", article_id).cyan(),
            views.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let counts = [
        ("Articles", "SELECT COUNT(*) FROM articles"),
        ("Tags", "SELECT COUNT(DISTINCT name) FROM tags"),
        ("Comments", "SELECT COUNT(*) FROM comments"),
        ("Replies", "SELECT COUNT(*) FROM replies"),
        ("Accounts", "SELECT COUNT(*) FROM users"),
        (
            "Active sessions",
            "SELECT COUNT(*) FROM sessions WHERE revoked_at IS NULL",
        ),
    ];

    for (label, query) in counts {
        let count: i64 = sqlx::query_scalar(query).fetch_one(pool).await?;
        println!(
            "  {:<16} {}",
            format!("{}:", label),
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

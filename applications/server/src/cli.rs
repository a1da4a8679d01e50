//! Command-line interface
//!
//! Argument parsing and the text rendered by `list-users` and `check`. The
//! binary only wires these to stdout and the server.

use crate::error::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use user_table_core::{UserDirectory, UserRecord};

#[derive(Debug, Parser)]
#[command(name = "user-table-server")]
#[command(about = "User activity dashboard API server", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "USER_TABLE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Print the user records
    ListUsers {
        /// Print the exact JSON body served at /api/users
        #[arg(long)]
        json: bool,
        /// Reference date for the day counts (defaults to today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        today: Option<NaiveDate>,
    },
    /// Check that every record holds well-formed dates
    Check,
}

impl Cli {
    /// Subcommand to run, `serve` when none was given
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }
}

/// The `/api/users` body as a string
pub fn render_json(directory: &UserDirectory) -> Result<String> {
    Ok(serde_json::to_string(directory.list_users())?)
}

/// One report line with the dashboard's computed day counts
pub fn describe(user: &UserRecord, today: NaiveDate) -> user_table_core::Result<String> {
    let stale = if user.is_password_stale(today)? {
        " STALE"
    } else {
        ""
    };

    Ok(format!(
        "{:<10} created {}  password {} ({} days{})  last access {} ({} days)  mfa {}",
        user.name,
        user.create_date,
        user.password_changed_date,
        user.days_since_password_change(today)?,
        stale,
        user.last_access_date,
        user.days_since_last_access(today)?,
        if user.mfa_enabled { "on" } else { "off" },
    ))
}

/// Full `list-users` report
pub fn render_report(directory: &UserDirectory, today: NaiveDate) -> user_table_core::Result<String> {
    let mut report = format!("Users (as of {}):\n", today);
    for user in directory.list_users() {
        report.push_str("  ");
        report.push_str(&describe(user, today)?);
        report.push('\n');
    }
    Ok(report)
}

/// Validate every record; the summary line on success
pub fn check(directory: &UserDirectory) -> user_table_core::Result<String> {
    directory.validate_dates()?;
    Ok(format!("{} user records OK", directory.len()))
}

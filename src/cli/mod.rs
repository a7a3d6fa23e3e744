//! CLI module for the User Dashboard API
//!
//! Subcommands:
//! - `serve`: run the API server (default workflow)
//! - `seed`: replace the user collection with sample data

pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};

/// User Dashboard API - user management with regional analytics
#[derive(Parser)]
#[command(name = "user-dashboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,

    /// Wipe the user collection and load sample users
    Seed,
}

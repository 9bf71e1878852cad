//! CLI module for Convergence
//!
//! - `serve`: run the HTTP front end
//! - `spaces`: fetch the space list once and print it as JSON

pub mod serve;
pub mod spaces;

use clap::{Parser, Subcommand};

/// Convergence - read-through caching front end for a Confluence wiki
#[derive(Parser)]
#[command(name = "convergence")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Print the wiki's spaces as JSON and exit
    Spaces(spaces::SpacesArgs),
}

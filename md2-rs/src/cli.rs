//! Root CLI structure for md2-rs

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "md2-rs")]
#[command(about = "Command-line tools for Quake II MD2 models", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Operations on an MD2 model file
    #[command(flatten)]
    Model(crate::commands::md2::Md2Commands),

    /// List the fixed animation sequences
    Animations,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

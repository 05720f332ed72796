use crate::export::OutputFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rTicketline
/// Renders helpdesk ticket timelines from a provider snapshot
#[derive(Parser)]
#[command(
    name = "rticketline",
    version = env!("CARGO_PKG_VERSION"),
    about = "Ticket-workload timelines for a helpdesk team: per-agent shifts, HQ coverage and filters",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Override the display (reference) timezone, e.g. Europe/Rome
    #[arg(global = true, long = "tz")]
    pub tz: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    #[arg(long = "exclude-cat", help = "Hide context tickets in this category (repeatable)")]
    pub exclude_cat: Vec<String>,

    #[arg(long = "exclude-kw", help = "Hide context tickets whose subject matches any of a|b|c")]
    pub exclude_kw: Option<String>,

    #[arg(long = "include-cat", help = "Only show tickets in this category (repeatable)")]
    pub include_cat: Vec<String>,

    #[arg(long = "include-kw", help = "Only show tickets whose subject matches any of a|b|c")]
    pub include_kw: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,
    },

    /// Build and print the timeline for a period
    Render {
        /// Provider snapshot (JSON)
        snapshot: String,

        #[arg(
            long,
            short,
            help = "YYYY-MM-DD (single day), week:YYYY-MM-DD, YYYY-MM or FROM..TO (default: covers the snapshot)"
        )]
        period: Option<String>,

        #[arg(
            long,
            value_delimiter = ',',
            help = "Agent ids in display order (default: all agents)"
        )]
        agents: Vec<String>,

        #[arg(long, conflicts_with = "combined", help = "Per-day view with day headers")]
        rolling: bool,

        #[arg(long, help = "All days projected onto one time-of-day axis")]
        combined: bool,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long = "no-collapse", help = "Keep consecutive markers as separate rows")]
        no_collapse: bool,

        #[arg(long = "no-color", help = "Disable ANSI colors")]
        no_color: bool,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        #[arg(long, value_name = "FILE", help = "Write output to FILE instead of stdout")]
        out: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite FILE without asking")]
        force: bool,
    },

    /// List the ticket categories present in a snapshot
    Categories {
        /// Provider snapshot (JSON)
        snapshot: String,

        #[arg(long, short)]
        period: Option<String>,

        #[arg(long, value_delimiter = ',')]
        agents: Vec<String>,
    },
}

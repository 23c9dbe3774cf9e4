use clap::{Args, Subcommand};

use crate::cli::subcommands::{BidCommands, EmployeeCommands, OrgCommands, TenderCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Tenders.
    Tender {
        #[command(subcommand)]
        action: TenderCommands,
    },
    /// Bids.
    Bid {
        #[command(subcommand)]
        action: BidCommands,
    },
    /// Employee directory.
    Employee {
        #[command(subcommand)]
        action: EmployeeCommands,
    },
    /// Organizations and their responsible members.
    Org {
        #[command(subcommand)]
        action: OrgCommands,
    },
    /// Print the JSON schema of an entity.
    Schema(SchemaArgs),
    /// Check that the database answers.
    Ping,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// One of: tender, bid, employee, organization
    pub type_name: String,
}

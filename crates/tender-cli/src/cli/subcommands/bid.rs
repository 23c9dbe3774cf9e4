use clap::Subcommand;

/// Bid commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BidCommands {
    /// Submit a bid against a tender.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        tender_id: String,
        /// Organization or User
        #[arg(long)]
        author_type: String,
        #[arg(long)]
        author_id: String,
    },
    /// List bids you authored.
    My {
        #[arg(long)]
        username: String,
        #[arg(long, allow_negative_numbers = true)]
        offset: Option<i64>,
    },
    /// List published bids on a tender of your organization.
    List {
        tender_id: String,
        #[arg(long)]
        username: String,
        #[arg(long, allow_negative_numbers = true)]
        offset: Option<i64>,
    },
    /// Show a bid's status.
    Status {
        id: String,
        #[arg(long)]
        username: String,
    },
    /// Set a bid's status.
    SetStatus {
        id: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        status: String,
    },
    /// Edit name or description.
    Edit {
        id: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Approve or reject a bid and close it.
    Decide {
        id: String,
        #[arg(long)]
        username: String,
        /// Approved or Rejected
        #[arg(long)]
        decision: String,
    },
}

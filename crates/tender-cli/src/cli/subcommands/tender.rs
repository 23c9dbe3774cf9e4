use clap::Subcommand;

/// Tender commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TenderCommands {
    /// List published tenders, optionally by service type.
    List {
        /// Construction, Delivery or Manufacture (repeatable)
        #[arg(long)]
        service_type: Vec<String>,
        #[arg(long, allow_negative_numbers = true)]
        offset: Option<i64>,
    },
    /// Create a tender for an organization you are responsible for.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        service_type: String,
        #[arg(long)]
        organization_id: String,
        #[arg(long)]
        creator_username: String,
    },
    /// List tenders you created, in any status.
    My {
        #[arg(long)]
        username: String,
        #[arg(long, allow_negative_numbers = true)]
        offset: Option<i64>,
    },
    /// Show a tender's status.
    Status {
        id: String,
        #[arg(long)]
        username: String,
    },
    /// Set a tender's status.
    SetStatus {
        id: String,
        #[arg(long)]
        username: String,
        /// Created, Published or Closed
        #[arg(long)]
        status: String,
    },
    /// Edit name, description or service type.
    Edit {
        id: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        service_type: Option<String>,
    },
}

use clap::Subcommand;

/// Employee directory commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EmployeeCommands {
    /// Register an employee.
    Create {
        username: String,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
    },
}

/// Organization commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OrgCommands {
    /// Register an organization.
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Make an employee responsible for an organization.
    AddResponsible {
        organization_id: String,
        #[arg(long)]
        username: String,
    },
}

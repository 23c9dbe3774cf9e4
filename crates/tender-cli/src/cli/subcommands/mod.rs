pub mod bid;
pub mod directory;
pub mod tender;

pub use bid::BidCommands;
pub use directory::{EmployeeCommands, OrgCommands};
pub use tender::TenderCommands;

pub mod bid;
pub mod directory;
pub mod dispatch;
pub mod ping;
pub mod schema;
pub mod shared;
pub mod tender;

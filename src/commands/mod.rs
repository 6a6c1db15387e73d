//! Command implementations

mod init;
mod limit;
mod resolve;

pub use init::init;
pub use limit::limit;
pub use resolve::resolve;

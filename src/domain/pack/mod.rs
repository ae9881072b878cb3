//! MemberPack aggregate
//!
//! Prepaid credit allotment belonging to one client. Credits are mutated
//! only through the ledger operations on the repository, never by direct
//! field writes.

pub mod model;
pub mod repository;

pub use model::{MemberPack, PackStatus};
pub use repository::PackRepository;

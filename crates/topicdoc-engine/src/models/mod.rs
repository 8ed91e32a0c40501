pub mod document;
pub mod topic;

pub use document::*;
pub use topic::*;

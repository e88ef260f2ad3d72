//! HTTP handlers, one module per resource.

pub mod contact;
pub mod import_requests;
pub mod listings;
pub mod status;

pub use contact::*;
pub use import_requests::*;
pub use listings::*;
pub use status::*;

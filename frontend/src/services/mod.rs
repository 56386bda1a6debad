//! Backend services.
//!
//! # Services
//!
//! - [`upload`] - Excel upload to the ticket update backend

pub mod upload;

pub use upload::*;

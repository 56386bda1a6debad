//! UI Components for the ticket updater.
//!
//! # Layout Components
//! - [`Header`] - Static title bar
//!
//! # Feature Components
//! - [`UploadSection`] - The whole form, owner of the controller signal
//! - [`UserSelect`] - Username dropdown
//! - [`UserWarning`] - Floating "select a username" toast
//! - [`DropZone`] - Drag & drop area and file picker
//! - [`UploadDetails`] - Selected file summary with submit/cancel
//! - [`UploadResultPanel`] - Backend response summary
//! - [`UploadProgress`] - In-flight indicator

use leptos::RwSignal;
use web_sys::File;

use crate::UploadForm;

mod header;
mod upload;
mod user_select;
mod warning;
mod drop_zone;
mod details;
mod result;
mod progress;

pub use header::*;
pub use upload::*;
pub use user_select::*;
pub use warning::*;
pub use drop_zone::*;
pub use details::*;
pub use result::*;
pub use progress::*;

/// Reactive handle on the form controller shared by all components.
pub type FormSignal = RwSignal<UploadForm<File>>;

//! Ticket Updater - Frontend Rust/Leptos Application
//!
//! A WebAssembly form for uploading Excel ticket sheets to the
//! R1xchange ticket update service on behalf of a selected user.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (static title)                                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadSection                                               │
//! │  ├── UserWarning (timed toast)                              │
//! │  ├── UserSelect                                             │
//! │  ├── DropZone + sample file link                            │
//! │  ├── error message                                          │
//! │  ├── UploadDetails (when a file is selected)                │
//! │  ├── UploadResultPanel (after success)                      │
//! │  └── UploadProgress (while uploading)                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Endpoints, limits and the user list
//! - [`types`] - Common types (FileInfo, UploadResponse, errors)
//! - [`controller`] - Form state and its transitions
//! - [`components`] - UI components
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod controller;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    FileInfo,
    // Users
    User,
    // API
    UploadResponse,
    // Errors
    AppResult, FileRejection, UploadError,
};

// Controller
pub use controller::{
    validate_file, FileSelection, SelectedFile, SubmissionStatus, SubmissionTicket,
    SubmitAction, UploadForm, UploadRequest, UploadState, WarningTicket,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Installs the panic hook and console logger, then mounts [`App`].
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Ticket Updater - Starting Leptos App (backend: {})", BACKEND_URL);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <Header/>

        <div class="container">
            <UploadSection/>
        </div>
    }
}

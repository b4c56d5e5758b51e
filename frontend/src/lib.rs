//! ClauseEase - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for the ClauseEase legal document analyzer:
//! pick a PDF or DOCX by drag & drop or file picker, pass it through the
//! client-side upload gate, and post it to the analysis backend with a
//! conventional form submission.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (brand, theme toggle)                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  NoticeStack (transient notices, auto-dismiss)               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                               │
//! │  └── UploadSection (drop zone, file info, gated submit)      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The gate itself lives in `clauseease-core`; every component here is
//! a presentation adapter over it.
//!
//! # Modules
//!
//! - [`config`] - Hard constants (endpoint, delays, storage keys)
//! - [`types`] - Frontend types (ActiveNotice, Theme)
//! - [`components`] - UI components (Header, Upload, NoticeStack, etc.)
//! - [`services`] - Browser seams (form submit, theme persistence)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{ActiveNotice, Theme};

// Components
pub use components::*;

// Services
pub use services::*;

// Gate logic
pub use clauseease_core::{
    format_file_size, truncate_text, CandidateFile, DocumentKind, Notice, NoticeLevel,
    RejectionReason, SubmitBlocked, UploadGate, MAX_FILE_SIZE,
};

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by the module loader.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook so uncaught errors land in the console
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("📄 ClauseEase - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=format!("{APP_NAME} - Legal Document Analyzer")/>
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
    // Global state for the application
    let (gate, set_gate) = create_signal(UploadGate::new());
    let (notices, set_notices) = create_signal(Vec::<ActiveNotice>::new());
    let (theme, set_theme) = create_signal(load_theme());

    // Mirror the theme choice onto <body> whenever it changes
    create_effect(move |_| {
        apply_theme(theme.get());
    });

    view! {
        <Header theme=theme set_theme=set_theme/>

        <NoticeStack notices=notices set_notices=set_notices/>

        <div class="container">
            <Hero/>
            <UploadSection gate=gate set_gate=set_gate set_notices=set_notices/>
        </div>

        <Footer/>
    }
}

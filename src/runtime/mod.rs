//! Runtime module - winit/platform integration
//!
//! This module contains platform-specific code for running the overlay:
//! - `app` - ApplicationHandler and window management
//! - `chat` - Stdin chat command reader
//! - `mouse` - Double click detection

pub mod app;
pub mod chat;
pub mod mouse;

pub use app::App;

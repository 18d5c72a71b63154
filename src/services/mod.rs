//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own loading and snapshot construction so route handlers
//! can stay focused on protocol translation.

pub mod loader;

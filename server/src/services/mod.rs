//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own credential checks and persistence concerns so route
//! handlers can stay focused on protocol translation and cookie plumbing.

pub mod auth;
pub mod session;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates guarding and
//! chrome to `components`.

pub mod dashboard;
pub mod login;
pub mod module;

//! Reusable UI components shared across pages.

pub mod app_header;
pub mod protected_route;

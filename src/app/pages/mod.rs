//! Page components, grouped by console.

pub mod admin;
pub mod auth;
pub mod not_found;
pub mod user;

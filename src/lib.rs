//! sPanel dashboard
//!
//! User and admin consoles for a proxy subscription service, rendered with
//! Dioxus from local mock data.
//!
//! This library provides:
//! - The web UI (Dioxus + Tailwind CSS): user console, admin console, auth pages
//! - Form validation and display formatting shared by the pages
//! - A service trait with a latency-simulating mock behind every action
//! - A small liveness API for the server build

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Page-level behaviour (toasts, validation, service calls)
pub mod actions;
// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;
pub mod format;
pub mod forms;
// Demo data every page renders from
pub mod mock;
pub mod nav;
pub mod service;
pub mod timer;
pub mod toast;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;

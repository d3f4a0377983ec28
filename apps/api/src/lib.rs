//! Bookmarks API Library
//!
//! This library provides the core functionality for the Bookmarks API:
//! domain entities, repository ports and adapters, authentication
//! primitives, and the axum HTTP layer.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod state;

//! Watch-state tracking and friend-based movie recommendations.
//!
//! The [`services`] module holds the pure operations over a [`models::UserData`]
//! snapshot. [`routes`] exposes them over a stateless JSON API.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

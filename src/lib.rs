//! betterauth - authentication storage backend
//!
//! This crate owns the at-rest shape of authentication data:
//! - the `users` and `oauth_accounts` tables (schema managed by the
//!   `migration` workspace crate)
//! - typed entity definitions for both tables
//! - the serving skeleton: configuration, database pool, health endpoint
//!
//! Authentication flows (login, token exchange, sessions) are out of scope;
//! they belong to a service layer that consumes these records.

pub mod config;
pub mod db;
pub mod entities;
pub mod routes;
pub mod state;

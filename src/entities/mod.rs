//! Typed at-rest record shapes for the tables owned by the `migration` crate.

pub mod oauth_account;
pub mod user;

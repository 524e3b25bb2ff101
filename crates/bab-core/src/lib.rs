//! Framework-agnostic core of the build-a-bot client.
//!
//! Holds the store (state, mutations, getters and actions), the API
//! contract, the route table, the robot selection model and the client
//! configuration. The browser app and the terminal client are thin view
//! layers over this crate.

pub mod actions;
pub mod api;
pub mod builder;
pub mod config;
pub mod format;
pub mod routes;
pub mod store;

pub use bab_api_types as types;

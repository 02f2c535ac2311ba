//! Employee Manager - client library
//!
//! Everything the GUI needs that does not touch GPUI: the REST client, the
//! session gate, routing, per-screen models and configuration.

pub mod api;
pub mod config;
pub mod models;
pub mod routes;
pub mod session;

//! # BCB EasyBank shared library
//!
//! Everything in the portal that does not need a browser: backend models, the
//! session store, selfie compression, catalog asset conventions and the
//! workflows behind the gated pages. The web crate supplies a
//! [`PortalApi`](api::PortalApi) implementation over `reqwest` and a
//! [`KeyValueStore`](session::KeyValueStore) over `localStorage`.
#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod catalog;
pub mod compression;
pub mod errors;
pub mod models;
pub mod session;
pub mod workflow;

#[cfg(test)]
mod testing;

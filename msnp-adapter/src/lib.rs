//! MSNP Adapter
//!
//! The boundary between an MSNP server's session layer and the store that
//! holds users, contacts and their settings. Backends implement
//! [`Adapter`](adapter::Adapter); every operation answers with an
//! [`AdapterResult`](result::AdapterResult).

#![forbid(unsafe_code)]

pub mod adapter;
pub mod config;
pub mod data;
pub mod error;
pub mod memory;
pub mod observability;
pub mod prelude;
pub mod result;
pub mod token;

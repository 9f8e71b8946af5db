//! MSNP Adapter Protocol
//!
//! JSON-RPC messages for calling an adapter that lives in another process,
//! so a server written in any language can use a Rust backend.
//!
//! # Protocol Overview
//!
//! Requests and responses are single-line JSON-RPC 2.0 objects exchanged over
//! stdio. There is one method per adapter operation (see [`methods`]). The
//! `result` of a call is always the operation's result envelope,
//! `{"success": true, "value": ..}` or `{"success": false, "error": <code>}`;
//! RPC errors are reserved for requests that could not be dispatched.

mod rpc;
mod types;

pub use rpc::*;
pub use types::*;

/// Protocol version
pub const PROTOCOL_VERSION: &str = "1.0.0";

/// JSON-RPC version
pub const JSONRPC_VERSION: &str = "2.0";

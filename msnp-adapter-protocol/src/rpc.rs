//! JSON-RPC message types

use serde::{Deserialize, Serialize};

use crate::JSONRPC_VERSION;

/// JSON-RPC Request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: u64,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>, params: serde_json::Value, id: u64) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
            id,
        }
    }
}

/// JSON-RPC Response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
    pub id: u64,
}

impl RpcResponse {
    /// Create a success response
    pub fn success(result: serde_json::Value, id: u64) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create an error response
    pub fn error(error: RpcError, id: u64) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: None,
            error: Some(error),
            id,
        }
    }
}

/// JSON-RPC Error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl RpcError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Attach a detail payload, e.g. the decoder's message.
    pub fn with_data(mut self, data: impl Into<serde_json::Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Standard error: Parse error
    pub fn parse_error() -> Self {
        Self::new(-32700, "Parse error")
    }

    /// Standard error: Invalid request
    pub fn invalid_request() -> Self {
        Self::new(-32600, "Invalid Request")
    }

    /// Standard error: Method not found
    pub fn method_not_found() -> Self {
        Self::new(-32601, "Method not found")
    }

    /// Standard error: Invalid params
    pub fn invalid_params() -> Self {
        Self::new(-32602, "Invalid params")
    }

    /// Standard error: Internal error
    pub fn internal_error() -> Self {
        Self::new(-32603, "Internal error")
    }
}

/// RPC method names, one per adapter operation.
pub mod methods {
    pub const ADD_CONTACT_TO_GROUP: &str = "addContactToGroup";
    pub const ADD_CONTACT_TO_LISTS: &str = "addContactToLists";
    pub const AUTHENTICATE: &str = "authenticate";
    pub const GET_CONTACTS: &str = "getContacts";
    pub const GET_GROUPS: &str = "getGroups";
    pub const REMOVE_CONTACT_FROM_GROUP: &str = "removeContactFromGroup";
    pub const REMOVE_CONTACT_FROM_LISTS: &str = "removeContactFromLists";
    pub const UPDATE_CONTACT_FRIENDLY_NAME: &str = "updateContactFriendlyName";
    pub const UPDATE_PHONE_NUMBERS: &str = "updatePhoneNumbers";
    pub const UPDATE_PROFILE: &str = "updateProfile";
    pub const UPDATE_SETTINGS: &str = "updateSettings";

    /// Every method, in declaration order.
    pub const ALL: [&str; 11] = [
        ADD_CONTACT_TO_GROUP,
        ADD_CONTACT_TO_LISTS,
        AUTHENTICATE,
        GET_CONTACTS,
        GET_GROUPS,
        REMOVE_CONTACT_FROM_GROUP,
        REMOVE_CONTACT_FROM_LISTS,
        UPDATE_CONTACT_FRIENDLY_NAME,
        UPDATE_PHONE_NUMBERS,
        UPDATE_PROFILE,
        UPDATE_SETTINGS,
    ];
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_without_params_defaults_to_null() {
        let request: RpcRequest =
            serde_json::from_value(json!({ "jsonrpc": "2.0", "method": "getGroups", "id": 3 }))
                .unwrap();
        assert_eq!(request.method, methods::GET_GROUPS);
        assert!(request.params.is_null());
    }

    #[test]
    fn responses_omit_the_unused_half() {
        let envelope = json!({ "success": true, "value": [] });
        let ok = serde_json::to_value(RpcResponse::success(envelope, 1)).unwrap();
        assert_eq!(
            ok,
            json!({ "jsonrpc": "2.0", "result": { "success": true, "value": [] }, "id": 1 })
        );

        let err =
            serde_json::to_value(RpcResponse::error(RpcError::method_not_found(), 2)).unwrap();
        assert_eq!(
            err,
            json!({
                "jsonrpc": "2.0",
                "error": { "code": -32601, "message": "Method not found" },
                "id": 2,
            })
        );
    }
}

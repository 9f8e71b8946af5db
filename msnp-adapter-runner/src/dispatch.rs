//! Routes JSON-RPC requests to adapter operations

use msnp_adapter::{
    adapter::Adapter,
    data::{ContactListTypes, PhoneNumbersPatch, ProfilePatch, SettingsPatch, User},
    result::{AdapterResult, ResultEnvelope},
    token::Token,
};
use msnp_adapter_protocol::{
    methods, AuthenticateParams, ContactGroupParams, ContactListsParams, FriendlyNameParams,
    RpcError, RpcRequest, RpcResponse, UpdateParams, UserParams, JSONRPC_VERSION,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Answers requests against one adapter.
pub struct Dispatcher<A> {
    adapter: A,
}

impl<A: Adapter> Dispatcher<A> {
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    /// Handle one request.
    ///
    /// Adapter failures still produce a successful response whose result is
    /// an error envelope.
    pub async fn dispatch(&self, request: RpcRequest) -> RpcResponse {
        let id = request.id;
        if request.jsonrpc != JSONRPC_VERSION {
            warn!("Rejecting request {} with jsonrpc '{}'", id, request.jsonrpc);
            return RpcResponse::error(RpcError::invalid_request(), id);
        }

        debug!("Dispatching {} (id {})", request.method, id);

        match self.call(&request.method, request.params).await {
            Ok(result) => RpcResponse::success(result, id),
            Err(error) => {
                warn!("RPC {} failed: {}", request.method, error.message);
                RpcResponse::error(error, id)
            }
        }
    }

    async fn call(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        let adapter = &self.adapter;

        match method {
            methods::ADD_CONTACT_TO_GROUP => {
                let p: ContactGroupParams<User> = decode(params)?;
                envelope(
                    adapter
                        .add_contact_to_group(&p.user, &p.contact_id, &p.group_id)
                        .await,
                )
            }
            methods::ADD_CONTACT_TO_LISTS => {
                let p: ContactListsParams<User, ContactListTypes> = decode(params)?;
                envelope(
                    adapter
                        .add_contact_to_lists(&p.user, &p.contact_id, p.lists)
                        .await,
                )
            }
            methods::AUTHENTICATE => {
                let p: AuthenticateParams<Token> = decode(params)?;
                envelope(adapter.authenticate(&p.token).await)
            }
            methods::GET_CONTACTS => {
                let p: UserParams<User> = decode(params)?;
                envelope(adapter.get_contacts(&p.user).await)
            }
            methods::GET_GROUPS => {
                let p: UserParams<User> = decode(params)?;
                envelope(adapter.get_groups(&p.user).await)
            }
            methods::REMOVE_CONTACT_FROM_GROUP => {
                let p: ContactGroupParams<User> = decode(params)?;
                envelope(
                    adapter
                        .remove_contact_from_group(&p.user, &p.contact_id, &p.group_id)
                        .await,
                )
            }
            methods::REMOVE_CONTACT_FROM_LISTS => {
                let p: ContactListsParams<User, ContactListTypes> = decode(params)?;
                envelope(
                    adapter
                        .remove_contact_from_lists(&p.user, &p.contact_id, p.lists)
                        .await,
                )
            }
            methods::UPDATE_CONTACT_FRIENDLY_NAME => {
                let p: FriendlyNameParams<User> = decode(params)?;
                envelope(
                    adapter
                        .update_contact_friendly_name(&p.user, &p.contact_id, &p.friendly_name)
                        .await,
                )
            }
            methods::UPDATE_PHONE_NUMBERS => {
                let p: UpdateParams<User, PhoneNumbersPatch> = decode(params)?;
                envelope(adapter.update_phone_numbers(&p.user, p.fields).await)
            }
            methods::UPDATE_PROFILE => {
                let p: UpdateParams<User, ProfilePatch> = decode(params)?;
                envelope(adapter.update_profile(&p.user, p.fields).await)
            }
            methods::UPDATE_SETTINGS => {
                let p: UpdateParams<User, SettingsPatch> = decode(params)?;
                envelope(adapter.update_settings(&p.user, p.fields).await)
            }
            other => Err(RpcError::method_not_found().with_data(other)),
        }
    }
}

fn decode<P: DeserializeOwned>(params: Value) -> Result<P, RpcError> {
    serde_json::from_value(params).map_err(|e| RpcError::invalid_params().with_data(e.to_string()))
}

fn envelope<T: Serialize>(result: AdapterResult<T>) -> Result<Value, RpcError> {
    serde_json::to_value(ResultEnvelope(result))
        .map_err(|e| RpcError::internal_error().with_data(e.to_string()))
}

#[cfg(test)]
mod tests {
    use msnp_adapter::memory::MemoryAdapter;
    use serde_json::json;

    use super::*;

    fn dispatcher() -> Dispatcher<MemoryAdapter> {
        let adapter = MemoryAdapter::new();
        adapter
            .insert_user(User::new("1", "alice@hotmail.com", "Alice"), "secret")
            .unwrap();
        adapter
            .insert_user(User::new("2", "bob@hotmail.com", "Bob"), "hunter2")
            .unwrap();
        Dispatcher::new(adapter)
    }

    fn alice_json() -> Value {
        json!({ "id": "1", "username": "alice@hotmail.com", "friendlyName": "Alice" })
    }

    #[tokio::test]
    async fn authenticate_returns_success_envelope() {
        let response = dispatcher()
            .dispatch(RpcRequest::new(
                methods::AUTHENTICATE,
                json!({
                    "token": {
                        "type": "password",
                        "username": "alice@hotmail.com",
                        "password": "secret",
                    }
                }),
                1,
            ))
            .await;

        assert!(response.error.is_none());
        assert_eq!(
            response.result,
            Some(json!({ "success": true, "value": alice_json() }))
        );
    }

    #[tokio::test]
    async fn adapter_failure_is_still_a_successful_rpc() {
        let response = dispatcher()
            .dispatch(RpcRequest::new(
                methods::AUTHENTICATE,
                json!({
                    "token": { "type": "password", "username": "alice", "password": "wrong" }
                }),
                2,
            ))
            .await;

        assert_eq!(response.id, 2);
        assert_eq!(
            response.result,
            Some(json!({ "success": false, "error": 1 }))
        );
    }

    #[tokio::test]
    async fn list_then_profile_calls() {
        let dispatcher = dispatcher();

        let response = dispatcher
            .dispatch(RpcRequest::new(
                methods::ADD_CONTACT_TO_LISTS,
                json!({ "user": alice_json(), "contactId": "2", "lists": { "forward": true } }),
                3,
            ))
            .await;
        let result = response.result.unwrap();
        assert_eq!(result["success"], true);
        assert_eq!(result["value"]["lists"]["forward"], true);
        assert_eq!(result["value"]["friendlyName"], "Bob");

        let response = dispatcher
            .dispatch(RpcRequest::new(
                methods::UPDATE_PROFILE,
                json!({ "user": alice_json(), "profile": { "country": "US" } }),
                4,
            ))
            .await;
        assert_eq!(
            response.result.unwrap()["value"],
            json!({ "country": "US", "region": "", "postalCode": "", "language": "" })
        );
    }

    #[tokio::test]
    async fn unknown_method_is_an_rpc_error() {
        let response = dispatcher()
            .dispatch(RpcRequest::new("deleteEverything", Value::Null, 5))
            .await;
        assert!(response.result.is_none());
        assert_eq!(response.error.unwrap().code, -32601);
    }

    #[tokio::test]
    async fn malformed_params_are_invalid_params() {
        let response = dispatcher()
            .dispatch(RpcRequest::new(
                methods::GET_CONTACTS,
                json!({ "user": "alice" }),
                6,
            ))
            .await;
        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn wrong_jsonrpc_version_is_rejected() {
        let mut request = RpcRequest::new(methods::GET_GROUPS, json!({ "user": alice_json() }), 7);
        request.jsonrpc = "1.0".to_string();
        let response = dispatcher().dispatch(request).await;
        assert_eq!(response.error.unwrap().code, -32600);
    }
}

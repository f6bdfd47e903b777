//! Browser Fetch Transport

use async_trait::async_trait;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::{GraphqlTransport, Operation};
use crate::error::GraphqlError;
use crate::session::SessionStore;

/// POSTs operations to a GraphQL endpoint with `window.fetch`, attaching the
/// session token as a bearer credential when one is stored.
#[derive(Clone, Debug)]
pub struct FetchTransport {
    endpoint: String,
    session: SessionStore,
}

impl FetchTransport {
    pub fn new(endpoint: impl Into<String>, session: SessionStore) -> Self {
        Self {
            endpoint: endpoint.into(),
            session,
        }
    }
}

fn js_error(value: JsValue) -> GraphqlError {
    GraphqlError::Transport(format!("{:?}", value))
}

#[async_trait(?Send)]
impl GraphqlTransport for FetchTransport {
    async fn execute(&self, operation: &Operation) -> Result<Value, GraphqlError> {
        log::debug!("[GRAPHQL] {} -> {}", operation.operation_name, self.endpoint);

        let body = serde_json::to_string(operation)?;
        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&self.endpoint, &init).map_err(js_error)?;
        let headers = request.headers();
        headers.set("Content-Type", "application/json").map_err(js_error)?;
        if let Some(token) = self.session.token() {
            headers
                .set("Authorization", &format!("Bearer {}", token))
                .map_err(js_error)?;
        }

        let window = web_sys::window().ok_or_else(|| GraphqlError::Transport("no window".into()))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        if !response.ok() {
            return Err(GraphqlError::Http {
                status: response.status(),
            });
        }

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .ok_or_else(|| GraphqlError::Transport("response body is not text".into()))?;
        Ok(serde_json::from_str(&text)?)
    }
}

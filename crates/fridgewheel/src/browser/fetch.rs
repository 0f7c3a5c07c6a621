//! Sending chat completions with `fetch`.

use crate::chat::{parse_chat_response, ApiError, ChatConfig, ChatRequest, Prompt};
use crate::credentials::{ApiKey, CredentialStore};
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

/// POST `request` to the configured endpoint and return the answer text.
pub async fn send_chat_request(
    config: &ChatConfig,
    key: &ApiKey,
    request: &ChatRequest,
) -> Result<String, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let body = serde_json::to_string(request)?;

    let headers = Headers::new().map_err(network_error)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(network_error)?;
    headers
        .set("Authorization", &key.bearer())
        .map_err(network_error)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body));
    let req = Request::new_with_str_and_init(&config.endpoint, &init).map_err(network_error)?;

    debug!(model = %request.model, max_tokens = request.max_tokens, "sending completion");
    let resp: Response = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(network_error)?
        .dyn_into()
        .map_err(network_error)?;
    let status = resp.status();
    let text = JsFuture::from(resp.text().map_err(network_error)?)
        .await
        .map_err(network_error)?
        .as_string()
        .unwrap_or_default();

    let result = parse_chat_response(status, &text);
    if let Err(err) = &result {
        warn!(status, %err, "completion failed");
    }
    result
}

/// Send `prompt` with the saved key.
pub async fn complete(
    config: &ChatConfig,
    store: &CredentialStore,
    prompt: Prompt,
) -> Result<String, ApiError> {
    let key = store.stored_key().ok_or(ApiError::MissingKey)?;
    send_chat_request(config, &key, &config.request(prompt)).await
}

fn network_error(err: JsValue) -> ApiError {
    ApiError::Network(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

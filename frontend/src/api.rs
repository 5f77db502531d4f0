use gloo_net::http::{Request, RequestBuilder, Response};
use log::error;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::api::{decode_response, ApiError};
use shared::constants::{CSRF_FIELD_NAME, CSRF_HEADER, CSRF_META_NAME};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument, HtmlInputElement, RequestCredentials};

use crate::config::api_url;

/// Token from `<meta name="csrf-token">`, then the hidden form field, then the cookie.
pub fn csrf_token() -> Option<String> {
    let document = window()?.document()?;

    let from_meta = document
        .query_selector(&format!("meta[name=\"{}\"]", CSRF_META_NAME))
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"));

    let from_input = || {
        document
            .query_selector(&format!("input[name=\"{}\"]", CSRF_FIELD_NAME))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
    };

    let from_cookie = || {
        let cookies = document.dyn_ref::<HtmlDocument>()?.cookie().ok()?;
        cookies.split(';').find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == CSRF_FIELD_NAME).then(|| value.to_string())
        })
    };

    from_meta
        .or_else(from_input)
        .or_else(from_cookie)
        .filter(|token| !token.is_empty())
}

async fn read(response: Response) -> Result<String, ApiError> {
    response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn send<T: DeserializeOwned>(path: &str, request: Result<Request, gloo_net::Error>) -> Result<T, ApiError> {
    let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
    let response = request.send().await.map_err(|e| {
        error!("request to {} failed: {}", path, e);
        ApiError::Network(e.to_string())
    })?;
    let status = response.status();
    let body = read(response).await?;
    decode_response(status, &body).map_err(|e| {
        error!("{} answered {}: {}", path, status, e);
        e
    })
}

fn builder(builder: RequestBuilder) -> RequestBuilder {
    builder.credentials(RequestCredentials::Include)
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    send(path, builder(Request::get(&api_url(path))).build()).await
}

/// POSTs a JSON body. With `require_csrf` a missing token aborts before any
/// request goes out; otherwise the token is attached when one exists.
pub async fn post_json<B, T>(path: &str, body: &B, require_csrf: bool) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let token = csrf_token();
    if require_csrf && token.is_none() {
        return Err(ApiError::MissingCsrf);
    }

    let mut request = builder(Request::post(&api_url(path))).header("Content-Type", "application/json");
    if let Some(token) = token {
        request = request.header(CSRF_HEADER, &token);
    }
    send(path, request.json(body)).await
}

pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let mut request = builder(Request::post(&api_url(path)));
    if let Some(token) = csrf_token() {
        request = request.header(CSRF_HEADER, &token);
    }
    send(path, request.build()).await
}

/// Full page navigation, for targets the server renders.
pub fn navigate_to(href: &str) {
    if let Some(window) = window() {
        if window.location().set_href(href).is_err() {
            error!("could not navigate to {}", href);
        }
    }
}

pub fn open_in_new_tab(href: &str) {
    if let Some(window) = window() {
        if window.open_with_url_and_target(href, "_blank").is_err() {
            error!("could not open {}", href);
        }
    }
}

use async_trait::async_trait;
use bab_core::api::{ApiError, RobotApi, CART_PATH, PARTS_PATH, SIGN_IN_PATH};
use bab_core::config::ApiConfig;
use bab_core::types::{PartsCatalog, Robot, User};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

// ── Generic fetch helpers ──

fn js_err(e: JsValue) -> ApiError {
    ApiError::Transport(format!("{:?}", e))
}

async fn send(request: &Request) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no global window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(js_err)?;
    let resp: Response = resp_value.dyn_into().map_err(js_err)?;
    if !resp.ok() {
        return Err(ApiError::Status {
            status: resp.status(),
            url: resp.url(),
        });
    }
    Ok(resp)
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let json = JsFuture::from(resp.json().map_err(js_err)?)
        .await
        .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_err)?;

    read_json(send(&request).await?).await
}

/// POST a JSON body (or none) and hand back the raw response.
async fn post(url: &str, body: Option<&impl Serialize>) -> Result<Response, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    if let Some(body) = body {
        let body_str = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        opts.set_body(&JsValue::from_str(&body_str));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_err)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_err)?;

    send(&request).await
}

// ── Client ──

/// Browser `fetch` implementation of the parts/cart API.
#[derive(Debug, Clone, Default)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn url(&self, path: &str) -> String {
        self.config.url(path)
    }
}

#[async_trait(?Send)]
impl RobotApi for HttpApi {
    async fn fetch_parts(&self) -> Result<PartsCatalog, ApiError> {
        fetch_json(&self.url(PARTS_PATH)).await
    }

    async fn post_cart(&self, cart: &[Robot]) -> Result<(), ApiError> {
        // The acknowledgment body is not interpreted.
        post(&self.url(CART_PATH), Some(&cart)).await.map(|_| ())
    }

    async fn sign_in(&self) -> Result<User, ApiError> {
        let resp = post(&self.url(SIGN_IN_PATH), None::<&()>).await?;
        read_json(resp).await
    }
}

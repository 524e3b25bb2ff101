use async_trait::async_trait;
use bab_core::api::{ApiError, RobotApi, CART_PATH, PARTS_PATH, SIGN_IN_PATH};
use bab_core::config::ApiConfig;
use bab_core::types::{PartsCatalog, Robot, User};

/// `reqwest`-backed implementation of the parts/cart API.
#[derive(Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        })
    }
}

/// Map transport errors to messages a terminal user can act on.
fn transport(err: reqwest::Error) -> ApiError {
    if err.is_connect() {
        ApiError::Transport(
            "could not connect to the parts service. Is it running? \
             (hint: check --api-url or api.base_url in the config file)"
                .into(),
        )
    } else if err.is_timeout() {
        ApiError::Transport("request timed out".into())
    } else {
        ApiError::Transport(err.to_string())
    }
}

fn decode(err: reqwest::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

#[async_trait(?Send)]
impl RobotApi for HttpApi {
    async fn fetch_parts(&self) -> Result<PartsCatalog, ApiError> {
        let url = self.config.url(PARTS_PATH);
        tracing::debug!(%url, "GET");
        let resp = self.client.get(&url).send().await.map_err(transport)?;
        let resp = check(resp)?;
        resp.json().await.map_err(decode)
    }

    async fn post_cart(&self, cart: &[Robot]) -> Result<(), ApiError> {
        let url = self.config.url(CART_PATH);
        tracing::debug!(%url, robots = cart.len(), "POST");
        let resp = self
            .client
            .post(&url)
            .json(cart)
            .send()
            .await
            .map_err(transport)?;
        check(resp)?;
        Ok(())
    }

    async fn sign_in(&self) -> Result<User, ApiError> {
        let url = self.config.url(SIGN_IN_PATH);
        tracing::debug!(%url, "POST");
        let resp = self.client.post(&url).send().await.map_err(transport)?;
        let resp = check(resp)?;
        resp.json().await.map_err(decode)
    }
}

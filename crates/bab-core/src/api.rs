use async_trait::async_trait;

use crate::types::{PartsCatalog, Robot, User};

pub const PARTS_PATH: &str = "/api/parts";
pub const CART_PATH: &str = "/api/cart";
pub const SIGN_IN_PATH: &str = "/api/sign-in";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("transport: {0}")]
    Transport(String),
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    #[error("decode: {0}")]
    Decode(String),
}

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

/// The three calls the client makes against the parts/cart service.
///
/// Futures are not required to be `Send`: the browser implementation holds
/// JS values across awaits.
#[async_trait(?Send)]
pub trait RobotApi {
    /// `GET /api/parts`
    async fn fetch_parts(&self) -> Result<PartsCatalog, ApiError>;

    /// `POST /api/cart` with the complete cart as the body.
    async fn post_cart(&self, cart: &[Robot]) -> Result<(), ApiError>;

    /// `POST /api/sign-in`
    async fn sign_in(&self) -> Result<User, ApiError>;
}

#[async_trait(?Send)]
impl<A: RobotApi + ?Sized> RobotApi for &A {
    async fn fetch_parts(&self) -> Result<PartsCatalog, ApiError> {
        (**self).fetch_parts().await
    }

    async fn post_cart(&self, cart: &[Robot]) -> Result<(), ApiError> {
        (**self).post_cart(cart).await
    }

    async fn sign_in(&self) -> Result<User, ApiError> {
        (**self).sign_in().await
    }
}

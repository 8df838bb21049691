//! The REST backend as the client sees it.
//!
//! Every page talks to the backend through this trait so that the controller
//! and submitter can be exercised without a server.

use async_trait::async_trait;

use balcao_auth::Session;
use balcao_core::{ProductId, UserId};
use balcao_products::{NewProduct, Product};
use balcao_sales::SalePayload;

use crate::error::ClientError;
use crate::types::{Ack, LoginRequest, NewUser, SaleCreated, User};

#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET /produtos`
    async fn list_products(&self) -> Result<Vec<Product>, ClientError>;

    /// `POST /produtos`; the created row when the backend echoes it.
    async fn create_product(&self, product: &NewProduct) -> Result<Option<Product>, ClientError>;

    /// `DELETE /produtos/{id}`
    async fn delete_product(&self, id: ProductId) -> Result<Ack, ClientError>;

    /// `GET /usuarios`
    async fn list_users(&self) -> Result<Vec<User>, ClientError>;

    /// `POST /usuarios`
    async fn create_user(&self, user: &NewUser) -> Result<Ack, ClientError>;

    /// `DELETE /usuarios/{id}`
    async fn delete_user(&self, id: UserId) -> Result<Ack, ClientError>;

    /// `POST /login`
    async fn login(&self, request: &LoginRequest) -> Result<Session, ClientError>;

    /// `POST /vendas`, sent exactly once per call (no retry).
    async fn create_sale(&self, payload: &SalePayload) -> Result<SaleCreated, ClientError>;
}

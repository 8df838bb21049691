//! In-memory [`Backend`] for unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use balcao_auth::Session;
use balcao_core::{ProductId, UserId};
use balcao_products::{NewProduct, Product};
use balcao_sales::SalePayload;

use crate::backend::Backend;
use crate::error::ClientError;
use crate::types::{Ack, LoginRequest, NewUser, SaleCreated, User};

/// Scripted failure, re-created as a fresh [`ClientError`] on every call.
#[derive(Debug, Clone)]
pub enum Failure {
    Api(u16, String),
    Network(String),
}

impl Failure {
    fn to_error(&self) -> ClientError {
        match self {
            Failure::Api(status, detail) => ClientError::Api {
                status: *status,
                detail: detail.clone(),
            },
            Failure::Network(msg) => ClientError::Network(msg.clone()),
        }
    }
}

/// Pauses `create_sale` until released, to observe the in-flight window.
#[derive(Debug, Clone, Default)]
pub struct SaleGate {
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

#[derive(Debug, Default)]
pub struct FakeBackend {
    products: Mutex<Vec<Product>>,
    products_failure: Mutex<Option<Failure>>,
    users: Mutex<Vec<User>>,
    sale_failure: Mutex<Option<Failure>>,
    sale_gate: Mutex<Option<SaleGate>>,
    sales: Mutex<Vec<SalePayload>>,
    login_result: Mutex<Option<Result<Session, ClientError>>>,
    login_requests: Mutex<Vec<String>>,
    created_products: Mutex<Vec<NewProduct>>,
    deleted_products: Mutex<Vec<ProductId>>,
    created_users: Mutex<Vec<NewUser>>,
    deleted_users: Mutex<Vec<UserId>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        let backend = Self::new();
        backend.set_products(products);
        backend
    }

    pub fn set_products(&self, products: Vec<Product>) {
        *self.products.lock().unwrap() = products;
        *self.products_failure.lock().unwrap() = None;
    }

    pub fn fail_products(&self, failure: Failure) {
        *self.products_failure.lock().unwrap() = Some(failure);
    }

    pub fn set_users(&self, users: Vec<User>) {
        *self.users.lock().unwrap() = users;
    }

    pub fn fail_sales(&self, failure: Failure) {
        *self.sale_failure.lock().unwrap() = Some(failure);
    }

    pub fn accept_sales(&self) {
        *self.sale_failure.lock().unwrap() = None;
    }

    pub fn gate_sales(&self) -> SaleGate {
        let gate = SaleGate::default();
        *self.sale_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn set_login(&self, result: Result<Session, ClientError>) {
        *self.login_result.lock().unwrap() = Some(result);
    }

    /// Every payload `create_sale` received, accepted or not.
    pub fn sales(&self) -> Vec<SalePayload> {
        self.sales.lock().unwrap().clone()
    }

    pub fn login_requests(&self) -> Vec<String> {
        self.login_requests.lock().unwrap().clone()
    }

    pub fn created_products(&self) -> Vec<NewProduct> {
        self.created_products.lock().unwrap().clone()
    }

    pub fn deleted_products(&self) -> Vec<ProductId> {
        self.deleted_products.lock().unwrap().clone()
    }

    pub fn created_users(&self) -> Vec<NewUser> {
        self.created_users.lock().unwrap().clone()
    }

    pub fn deleted_users(&self) -> Vec<UserId> {
        self.deleted_users.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        if let Some(failure) = self.products_failure.lock().unwrap().as_ref() {
            return Err(failure.to_error());
        }
        Ok(self.products.lock().unwrap().clone())
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Option<Product>, ClientError> {
        self.created_products.lock().unwrap().push(product.clone());
        Ok(None)
    }

    async fn delete_product(&self, id: ProductId) -> Result<Ack, ClientError> {
        self.deleted_products.lock().unwrap().push(id);
        Ok(Ack::default())
    }

    async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn create_user(&self, user: &NewUser) -> Result<Ack, ClientError> {
        self.created_users.lock().unwrap().push(user.clone());
        Ok(Ack::default())
    }

    async fn delete_user(&self, id: UserId) -> Result<Ack, ClientError> {
        self.deleted_users.lock().unwrap().push(id);
        Ok(Ack::default())
    }

    async fn login(&self, request: &LoginRequest) -> Result<Session, ClientError> {
        self.login_requests.lock().unwrap().push(request.email.clone());
        self.login_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(ClientError::Network("no scripted login".to_string())))
    }

    async fn create_sale(&self, payload: &SalePayload) -> Result<SaleCreated, ClientError> {
        self.sales.lock().unwrap().push(payload.clone());

        let gate = self.sale_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.started.notify_one();
            gate.release.notified().await;
        }

        if let Some(failure) = self.sale_failure.lock().unwrap().as_ref() {
            return Err(failure.to_error());
        }

        let id = self.sales.lock().unwrap().len() as i64;
        Ok(SaleCreated {
            message: Some("Venda registrada!".to_string()),
            sale_id: Some(id),
        })
    }
}

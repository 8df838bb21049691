//! `reqwest` implementation of [`Backend`].

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use balcao_auth::Session;
use balcao_core::{ProductId, UserId};
use balcao_products::{NewProduct, Product};
use balcao_sales::SalePayload;

use crate::backend::Backend;
use crate::error::ClientError;
use crate::types::{Ack, LoginRequest, LoginResponse, NewUser, SaleCreated, User};

const GENERIC_FAILURE: &str = "request failed";

/// HTTP client for the sales backend.
///
/// No timeout and no retry: a request either completes or the user gives up.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    fn request_json<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: &B) -> RequestBuilder {
        self.request(method, path).json(body)
    }

    /// Send and return the JSON body of a successful response.
    ///
    /// An unreadable body degrades to `Value::Null`. A non-success status
    /// becomes [`ClientError::Api`] carrying the body's `detail`, or a generic
    /// message when there is none.
    async fn execute(&self, request: RequestBuilder) -> Result<Value, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        if !status.is_success() {
            let detail = detail_of(&body);
            tracing::warn!(status = status.as_u16(), %detail, "backend rejected request");
            return Err(ClientError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(body)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let body = self.execute(request).await?;
        serde_json::from_value(body)
            .map_err(|e| ClientError::Network(format!("unexpected response body: {e}")))
    }

    /// Like [`Self::fetch`], but a body of the wrong shape is tolerated.
    async fn fetch_lenient<T: DeserializeOwned + Default>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let body = self.execute(request).await?;
        Ok(serde_json::from_value(body).unwrap_or_default())
    }
}

fn detail_of(body: &Value) -> String {
    match body.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        Some(Value::String(_)) | Some(Value::Null) | None => GENERIC_FAILURE.to_string(),
        // FastAPI reports validation failures as a list of objects.
        Some(other) => other.to_string(),
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        self.fetch(self.request(Method::GET, "/produtos")).await
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Option<Product>, ClientError> {
        let body = self
            .execute(self.request_json(Method::POST, "/produtos", product))
            .await?;

        // Either the row itself or `{"message": ..., "produto": {...}}`.
        let row = body.get("produto").cloned().unwrap_or(body);
        Ok(serde_json::from_value(row).ok())
    }

    async fn delete_product(&self, id: ProductId) -> Result<Ack, ClientError> {
        self.fetch_lenient(self.request(Method::DELETE, &format!("/produtos/{id}")))
            .await
    }

    async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        self.fetch(self.request(Method::GET, "/usuarios")).await
    }

    async fn create_user(&self, user: &NewUser) -> Result<Ack, ClientError> {
        self.fetch_lenient(self.request_json(Method::POST, "/usuarios", user))
            .await
    }

    async fn delete_user(&self, id: UserId) -> Result<Ack, ClientError> {
        self.fetch_lenient(self.request(Method::DELETE, &format!("/usuarios/{id}")))
            .await
    }

    async fn login(&self, request: &LoginRequest) -> Result<Session, ClientError> {
        let response: LoginResponse = self
            .fetch(self.request_json(Method::POST, "/login", request))
            .await?;
        Ok(response.session)
    }

    async fn create_sale(&self, payload: &SalePayload) -> Result<SaleCreated, ClientError> {
        self.fetch_lenient(self.request_json(Method::POST, "/vendas", payload))
            .await
    }
}

//! Product and user management.
//!
//! Permission checks here only decide what the client offers; the backend
//! still rejects whatever it does not allow.

use balcao_auth::{Permission, Session, require_session};
use balcao_core::{ProductId, UserId};
use balcao_products::{NewProduct, Product};

use crate::backend::Backend;
use crate::error::ClientError;
use crate::types::{Ack, NewUser, User};

pub async fn list_products(backend: &dyn Backend, session: Option<&Session>) -> Result<Vec<Product>, ClientError> {
    require_session(session, &Permission::PRODUCTS_READ)?;
    backend.list_products().await
}

/// Validate raw form fields and create a product.
pub async fn create_product(
    backend: &dyn Backend,
    session: Option<&Session>,
    name: &str,
    category: &str,
    price: &str,
) -> Result<Option<Product>, ClientError> {
    require_session(session, &Permission::PRODUCTS_MANAGE)?;
    let product = NewProduct::parse(name, category, price)?;

    let created = backend.create_product(&product).await?;
    tracing::info!(name = %product.name, price = %product.unit_price, "product created");
    Ok(created)
}

pub async fn delete_product(backend: &dyn Backend, session: Option<&Session>, id: ProductId) -> Result<Ack, ClientError> {
    require_session(session, &Permission::PRODUCTS_MANAGE)?;
    let ack = backend.delete_product(id).await?;
    tracing::info!(product_id = %id, "product deleted");
    Ok(ack)
}

pub async fn list_users(backend: &dyn Backend, session: Option<&Session>) -> Result<Vec<User>, ClientError> {
    require_session(session, &Permission::USERS_MANAGE)?;
    backend.list_users().await
}

pub async fn create_user(
    backend: &dyn Backend,
    session: Option<&Session>,
    name: &str,
    email: &str,
    password: &str,
    group: &str,
) -> Result<Ack, ClientError> {
    require_session(session, &Permission::USERS_MANAGE)?;
    let user = NewUser::parse(name, email, password, group)?;

    let ack = backend.create_user(&user).await?;
    tracing::info!(email = %user.email, group_id = %user.group_id, "user created");
    Ok(ack)
}

pub async fn delete_user(backend: &dyn Backend, session: Option<&Session>, id: UserId) -> Result<Ack, ClientError> {
    require_session(session, &Permission::USERS_MANAGE)?;
    let ack = backend.delete_user(id).await?;
    tracing::info!(user_id = %id, "user deleted");
    Ok(ack)
}

use balcao_client::admin;
use balcao_client::view::{products_table_html, products_table_text};
use balcao_core::ProductId;

use super::Context;

pub async fn list(ctx: &Context, html: bool) -> anyhow::Result<()> {
    let session = ctx.session().await?;
    let products = admin::list_products(ctx.backend.as_ref(), session.as_ref()).await?;

    if html {
        println!("{}", products_table_html(&products));
    } else {
        print!("{}", products_table_text(&products));
    }
    Ok(())
}

pub async fn add(ctx: &Context, name: &str, category: &str, price: &str) -> anyhow::Result<()> {
    let session = ctx.session().await?;
    let created = admin::create_product(ctx.backend.as_ref(), session.as_ref(), name, category, price).await?;

    match created {
        Some(product) => println!("Product {} created (id {}).", product.name, product.id),
        None => println!("Product created."),
    }
    Ok(())
}

pub async fn delete(ctx: &Context, id: i64) -> anyhow::Result<()> {
    let session = ctx.session().await?;
    let ack = admin::delete_product(ctx.backend.as_ref(), session.as_ref(), ProductId::new(id)).await?;

    println!("{}", ack.message.unwrap_or_else(|| format!("Product {id} deleted.")));
    Ok(())
}

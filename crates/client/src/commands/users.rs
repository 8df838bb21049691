use balcao_client::admin;
use balcao_client::view::{users_table_html, users_table_text};
use balcao_core::UserId;

use super::Context;

pub async fn list(ctx: &Context, html: bool) -> anyhow::Result<()> {
    let session = ctx.session().await?;
    let users = admin::list_users(ctx.backend.as_ref(), session.as_ref()).await?;

    if html {
        println!("{}", users_table_html(&users));
    } else {
        print!("{}", users_table_text(&users));
    }
    Ok(())
}

pub async fn add(ctx: &Context, name: &str, email: &str, group: &str, password: Option<String>) -> anyhow::Result<()> {
    let session = ctx.session().await?;
    let password = ctx.console.password_or_prompt(password).await?;

    let ack = admin::create_user(ctx.backend.as_ref(), session.as_ref(), name, email, &password, group).await?;

    println!("{}", ack.message.unwrap_or_else(|| "User created.".to_string()));
    Ok(())
}

pub async fn delete(ctx: &Context, id: i64) -> anyhow::Result<()> {
    let session = ctx.session().await?;
    let ack = admin::delete_user(ctx.backend.as_ref(), session.as_ref(), UserId::new(id)).await?;

    println!("{}", ack.message.unwrap_or_else(|| format!("User {id} deleted.")));
    Ok(())
}

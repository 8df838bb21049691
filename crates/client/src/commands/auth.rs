use anyhow::Context as _;

use balcao_client::session;

use super::Context;

pub async fn login(ctx: &Context, email: &str, password: Option<String>) -> anyhow::Result<()> {
    let password = ctx.console.password_or_prompt(password).await?;

    let session = session::login(ctx.backend.as_ref(), &ctx.sessions, email, &password)
        .await
        .context("login failed")?;

    println!("Logged in as {} ({}).", session.display_name(), session.role);
    Ok(())
}

pub async fn logout(ctx: &Context) -> anyhow::Result<()> {
    session::logout(&ctx.sessions).await?;
    println!("Logged out.");
    Ok(())
}

pub async fn whoami(ctx: &Context) -> anyhow::Result<()> {
    match ctx.session().await? {
        Some(session) => {
            println!("{} (id {}, {})", session.display_name(), session.user_id, session.role);
            if let Some(email) = &session.email {
                println!("{email}");
            }
        }
        None => println!("Not logged in."),
    }
    println!("Backend: {}", ctx.config.api_url);
    Ok(())
}

//! Session commands: login, logout, whoami.

use velasona_client::{ApiResult, StoreClient};
use velasona_core::localize;

pub async fn login(client: &StoreClient, email: &str, password: &str) -> ApiResult<()> {
    let payload = client.login(email, password).await?;
    println!(
        "{} ({})",
        localize("auth.login_ok", client.language()),
        payload.user.email
    );
    Ok(())
}

pub async fn logout(client: &StoreClient) -> ApiResult<()> {
    client.logout().await?;
    println!("{}", localize("auth.logout_ok", client.language()));
    Ok(())
}

pub async fn whoami(client: &StoreClient) -> ApiResult<()> {
    if !client.session().has_token() {
        println!("{}", localize("auth.not_logged_in", client.language()));
        return Ok(());
    }
    let user = client.current_user().await?;
    println!("{}  [{}]", user.email, user.role);
    if let Some(profile) = &user.profile {
        println!("{} {}", profile.first_name, profile.last_name);
    }
    Ok(())
}

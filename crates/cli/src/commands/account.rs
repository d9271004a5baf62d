//! Audio library, subscription, and language commands.

use velasona_client::{ApiResult, StoreClient};
use velasona_core::{Language, localize};

use super::shop::print_page_footer;

pub async fn list_audio(
    client: &StoreClient,
    page: Option<u32>,
    limit: Option<u32>,
) -> ApiResult<()> {
    let lang = client.language();
    let page = client.audio_library(page, limit).await?;
    if page.items.is_empty() {
        println!("{}", localize("audio.empty", lang));
        return Ok(());
    }
    for content in &page.items {
        let minutes = content.duration_seconds / 60;
        let seconds = content.duration_seconds % 60;
        let locked = if content.requires_subscription { "  [suscripción]" } else { "" };
        println!("{}  {}  {minutes}:{seconds:02}{locked}", content.id, content.title);
    }
    print_page_footer(&page.pagination);
    Ok(())
}

pub async fn audio_url(client: &StoreClient, id: &str) -> ApiResult<()> {
    let content = client.audio_content(&id.into()).await?;
    println!("{}", client.stream_url(&content));
    Ok(())
}

pub async fn show_subscription(client: &StoreClient) -> ApiResult<()> {
    let lang = client.language();
    match client.subscription().await {
        Ok(subscription) => {
            println!(
                "{}  {}  hasta {}",
                subscription.plan,
                subscription.status,
                subscription.current_period_end.format("%Y-%m-%d")
            );
            Ok(())
        }
        Err(e) if e.code() == "NOT_FOUND" => {
            println!("{}", localize("subscription.none", lang));
            Ok(())
        }
        Err(e) => Err(e),
    }
}

pub async fn subscribe(client: &StoreClient, plan: &str) -> ApiResult<()> {
    let subscription = client.subscribe(plan).await?;
    println!(
        "{}: {}",
        localize("subscription.created", client.language()),
        subscription.plan
    );
    Ok(())
}

pub async fn cancel_subscription(client: &StoreClient) -> ApiResult<()> {
    client.cancel_subscription().await?;
    println!("{}", localize("subscription.cancelled", client.language()));
    Ok(())
}

pub fn show_language(client: &StoreClient) {
    println!("{}", client.language());
}

pub async fn set_language(client: &StoreClient, code: &str) -> ApiResult<()> {
    let lang = Language::from_code(code);
    client.set_language(lang).await?;
    println!("{} ({lang})", localize("lang.updated", lang));
    Ok(())
}

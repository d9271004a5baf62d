//! Catalog, cart, wishlist, and review commands.

use velasona_client::{ApiResult, ProductFilter, StoreClient, resolve_image};
use velasona_core::localize;

use super::parse_category;

pub async fn list_products(
    client: &StoreClient,
    category: Option<&str>,
    search: Option<String>,
    page: Option<u32>,
    limit: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let category = category.map(parse_category).transpose()?;
    let filter = ProductFilter {
        category,
        search,
        page,
        limit,
        ..ProductFilter::default()
    };

    let lang = client.language();
    let page = client.products(&filter).await?;
    if page.items.is_empty() {
        println!("{}", localize("products.empty", lang));
        return Ok(());
    }

    for product in &page.items {
        let stock = if product.in_stock { "" } else { "  (agotado)" };
        println!(
            "{}  {}  {} EUR{stock}",
            product.id,
            product.name(lang),
            product.price
        );
    }
    print_page_footer(&page.pagination);
    Ok(())
}

pub async fn show_product(client: &StoreClient, id: &str) -> ApiResult<()> {
    let lang = client.language();
    let product = client.product(&id.into()).await?;

    println!("{}", product.name(lang));
    println!("{}  {} EUR", product.category, product.price);
    println!();
    println!("{}", product.translations.description.get(lang));

    for feature in product.translations.features.get(lang) {
        println!("  - {feature}");
    }

    if let Some(image) = product.primary_image() {
        println!();
        println!("{}", resolve_image(image, client.media_url()));
    }
    Ok(())
}

pub async fn show_cart(client: &StoreClient) -> ApiResult<()> {
    let lang = client.language();
    let cart = client.cart().await?;
    if cart.items.is_empty() {
        println!("{}", localize("cart.empty", lang));
        return Ok(());
    }

    for item in &cart.items {
        println!(
            "{}  {}  {} x {} EUR",
            item.id, item.name, item.quantity, item.unit_price
        );
    }
    println!("Total: {} EUR", cart.total);
    Ok(())
}

pub async fn add_to_cart(client: &StoreClient, product_id: &str, quantity: u32) -> ApiResult<()> {
    let cart = client.add_to_cart(&product_id.into(), quantity).await?;
    println!(
        "{} ({} -> {} EUR)",
        localize("cart.added", client.language()),
        cart.items.len(),
        cart.total
    );
    Ok(())
}

pub async fn remove_from_cart(client: &StoreClient, item_id: &str) -> ApiResult<()> {
    client.remove_from_cart(&item_id.into()).await?;
    println!("{}", localize("cart.removed", client.language()));
    Ok(())
}

pub async fn clear_cart(client: &StoreClient) -> ApiResult<()> {
    client.clear_cart().await?;
    println!("{}", localize("cart.cleared", client.language()));
    Ok(())
}

pub async fn show_wishlist(client: &StoreClient) -> ApiResult<()> {
    let lang = client.language();
    let items = client.wishlist().await?;
    if items.is_empty() {
        println!("{}", localize("wishlist.empty", lang));
        return Ok(());
    }
    for item in &items {
        println!("{}  {}", item.product_id, item.added_at.format("%Y-%m-%d"));
    }
    Ok(())
}

pub async fn add_to_wishlist(client: &StoreClient, product_id: &str) -> ApiResult<()> {
    client.add_to_wishlist(&product_id.into()).await?;
    println!("{}", localize("wishlist.added", client.language()));
    Ok(())
}

pub async fn remove_from_wishlist(client: &StoreClient, product_id: &str) -> ApiResult<()> {
    client.remove_from_wishlist(&product_id.into()).await?;
    println!("{}", localize("wishlist.removed", client.language()));
    Ok(())
}

pub async fn list_reviews(client: &StoreClient, product_id: &str) -> ApiResult<()> {
    let lang = client.language();
    let page = client.product_reviews(&product_id.into(), None, None).await?;
    if page.items.is_empty() {
        println!("{}", localize("reviews.empty", lang));
        return Ok(());
    }
    for review in &page.items {
        let stars = "*".repeat(usize::from(review.rating));
        println!("[{stars}] {}", review.comment);
    }
    print_page_footer(&page.pagination);
    Ok(())
}

pub async fn add_review(
    client: &StoreClient,
    product_id: &str,
    rating: u8,
    comment: &str,
) -> ApiResult<()> {
    client
        .submit_review(&product_id.into(), rating, comment)
        .await?;
    println!("{}", localize("reviews.submitted", client.language()));
    Ok(())
}

pub(super) fn print_page_footer(info: &velasona_core::PageInfo) {
    if info.total_pages > 1 {
        println!("-- {}/{} ({} en total)", info.page, info.total_pages, info.total);
    }
}

//! Back-office commands: user management and analytics.

use chrono::NaiveDate;

use velasona_client::{AnalyticsRange, StoreClient, UserFilter};

use super::parse_role;
use super::shop::print_page_footer;

pub async fn list_users(
    client: &StoreClient,
    role: Option<&str>,
    search: Option<String>,
    page: Option<u32>,
    limit: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let role = role.map(parse_role).transpose()?;
    let filter = UserFilter {
        role,
        search,
        page,
        limit,
    };

    let page = client.admin_users(&filter).await?;
    for user in &page.items {
        println!(
            "{}  {}  [{}]  {}",
            user.id,
            user.email,
            user.role,
            user.created_at.format("%Y-%m-%d")
        );
    }
    print_page_footer(&page.pagination);
    Ok(())
}

pub async fn set_role(
    client: &StoreClient,
    user_id: &str,
    role: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let role = parse_role(role)?;
    let user = client.set_user_role(&user_id.into(), role).await?;
    println!("{}  [{}]", user.email, user.role);
    Ok(())
}

pub async fn analytics(
    client: &StoreClient,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<(), Box<dyn std::error::Error>> {
    let summary = client.analytics(AnalyticsRange { from, to }).await?;

    println!("Ingresos:       {} EUR", summary.total_revenue);
    println!("Pedidos:        {}", summary.total_orders);
    println!("Clientes nuevos: {}", summary.new_customers);
    println!("Suscripciones:  {}", summary.active_subscriptions);

    if !summary.top_products.is_empty() {
        println!();
        for product in &summary.top_products {
            println!(
                "{}  {}  {} uds  {} EUR",
                product.product_id, product.name, product.units_sold, product.revenue
            );
        }
    }
    Ok(())
}

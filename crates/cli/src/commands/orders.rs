//! Order and invoice commands.

use std::path::Path;

use velasona_client::{ApiResult, CheckoutInput, StoreClient};
use velasona_core::localize;

use super::shop::print_page_footer;

pub async fn list_orders(
    client: &StoreClient,
    page: Option<u32>,
    limit: Option<u32>,
) -> ApiResult<()> {
    let lang = client.language();
    let page = client.orders(page, limit).await?;
    if page.items.is_empty() {
        println!("{}", localize("orders.empty", lang));
        return Ok(());
    }
    for order in &page.items {
        println!(
            "{}  {}  {}  {} EUR",
            order.id,
            order.created_at.format("%Y-%m-%d"),
            order.status,
            order.total
        );
    }
    print_page_footer(&page.pagination);
    Ok(())
}

pub async fn show_order(client: &StoreClient, id: &str) -> ApiResult<()> {
    let order = client.order(&id.into()).await?;
    println!("{}  {}", order.id, order.status);
    for item in &order.items {
        println!("  {}  {} x {} EUR", item.name, item.quantity, item.unit_price);
    }
    println!("Total: {} EUR", order.total);
    if let Some(address) = &order.shipping_address {
        println!("{}, {} {}", address.street, address.postal_code, address.city);
    }
    Ok(())
}

pub async fn checkout(
    client: &StoreClient,
    address_id: &str,
    payment_method: &str,
    notes: Option<String>,
) -> ApiResult<()> {
    let input = CheckoutInput {
        shipping_address_id: address_id.into(),
        payment_method: payment_method.to_owned(),
        notes,
    };
    let order = client.checkout(&input).await?;
    println!(
        "{}: {} ({} EUR)",
        localize("orders.placed", client.language()),
        order.id,
        order.total
    );
    Ok(())
}

pub async fn list_invoices(
    client: &StoreClient,
    page: Option<u32>,
    limit: Option<u32>,
) -> ApiResult<()> {
    let lang = client.language();
    let page = client.invoices(page, limit).await?;
    if page.items.is_empty() {
        println!("{}", localize("invoices.empty", lang));
        return Ok(());
    }
    for invoice in &page.items {
        println!(
            "{}  {}  {}  {} EUR",
            invoice.id,
            invoice.invoice_number,
            invoice.issued_at.format("%Y-%m-%d"),
            invoice.total
        );
    }
    print_page_footer(&page.pagination);
    Ok(())
}

pub async fn download_invoice(client: &StoreClient, id: &str, dir: &Path) -> ApiResult<()> {
    let saved = client.download_invoice_pdf(&id.into(), dir).await?;
    println!(
        "{}: {}",
        localize("invoices.saved", client.language()),
        saved.display()
    );
    Ok(())
}

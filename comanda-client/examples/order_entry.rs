//! Order entry walkthrough
//!
//! Builds an order's item list locally with the line-item helpers, shows
//! the recomputed totals, then optionally persists the result through the
//! API when an order id is given:
//!
//! ```sh
//! COMANDA_TOKEN=... cargo run --example order_entry -- http://localhost:3000 <order-id>
//! ```

use anyhow::Result;

use comanda_client::ClientConfig;
use shared::order::{
    Discount, add_item_to_order, calculate_order_totals, decrease_item_quantity,
    increase_item_quantity,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let base_url = args
        .next()
        .unwrap_or_else(|| "http://localhost:3000".to_string());
    let order_id = args.next();

    // Compose the working set offline first.
    let items = add_item_to_order(&[], "burger", 2, 180.0, Some("no onions"))?;
    let items = add_item_to_order(&items, "tea", 3, 20.0, None)?;
    let items = increase_item_quantity(&items, "tea", 2)?;
    let items = decrease_item_quantity(&items, "burger", 1)?;

    let totals = calculate_order_totals(&items, Some(&Discount::percentage(10.0)), &[]);
    println!(
        "local    subtotal {:>8.2}  discount {:>7.2}  total {:>8.2}",
        totals.subtotal, totals.discount_amount, totals.total_price
    );

    // Persist when an order id was given; the server's totals win.
    if let Some(order_id) = order_id {
        let mut config = ClientConfig::new(&base_url);
        if let Ok(token) = std::env::var("COMANDA_TOKEN") {
            config = config.with_token(token);
        }
        let client = config.build_http_client()?;

        let order = client.update_order_items(&order_id, items).await?;
        println!(
            "server   subtotal {:>8.2}  discount {:>7.2}  total {:>8.2}",
            order.subtotal, order.discount_amount, order.total_price
        );
    }

    Ok(())
}

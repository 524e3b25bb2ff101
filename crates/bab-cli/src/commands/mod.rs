pub mod build;
pub mod part;
pub mod parts;
pub mod sign_in;

use bab_core::format::currency;
use bab_core::types::Part;

pub const CURRENCY_SYMBOL: &str = "$";

/// One catalog line: id, title, price and a sale marker.
pub fn part_line(part: &Part) -> String {
    let sale = if part.on_sale { "  [SALE]" } else { "" };
    format!(
        "  #{:<4} {:<28} {:>12}{sale}",
        part.id,
        part.title,
        currency(part.cost, CURRENCY_SYMBOL)
    )
}

#[cfg(test)]
pub(crate) mod test_server {
    use axum::Router;

    /// Serve `app` on an ephemeral loopback port and return its base URL.
    pub async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    pub fn catalog_json() -> serde_json::Value {
        serde_json::json!({
            "heads": [
                {"id": 1, "type": "heads", "title": "Large Cyclops", "cost": 1219.5, "onSale": false},
                {"id": 2, "type": "heads", "title": "Friendly Bot", "cost": 945.0, "onSale": true}
            ],
            "arms": [
                {"id": 3, "type": "arms", "title": "Articulated", "cost": 275.0}
            ],
            "torsos": [
                {"id": 4, "type": "torsos", "title": "Gauged", "cost": 5.0}
            ],
            "bases": [
                {"id": 5, "type": "bases", "title": "Double Wheel", "cost": 895.0}
            ]
        })
    }
}

use std::path::Path;

use serde::Deserialize;

use crate::entities::order::Order;
use crate::errors::RepoErr;
use crate::repositories::in_memory::InMemoryOrderRepository;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("reading seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing seed file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("seed order {id}: {reason}")]
    Invalid { id: String, reason: String },
    #[error("seed orders: {0}")]
    Store(#[from] RepoErr),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SeedFile {
    Bare(Vec<Order>),
    Wrapped { data: Vec<Order> },
}

fn check(order: &Order) -> Result<(), SeedError> {
    let invalid = |reason: String| SeedError::Invalid {
        id: order.id.clone(),
        reason,
    };
    if order.id.is_empty() {
        return Err(invalid("empty id".into()));
    }
    if order.deliver_to.is_empty() || order.mobile_number.is_empty() {
        return Err(invalid("missing contact details".into()));
    }
    if order.dishes.is_empty() {
        return Err(invalid("no dishes".into()));
    }
    if let Some(i) = order.dishes.iter().position(|d| d.quantity == 0) {
        return Err(invalid(format!("dish {i} has quantity 0")));
    }
    Ok(())
}

pub fn parse(raw: &str) -> Result<Vec<Order>, SeedError> {
    let orders = match serde_json::from_str(raw)? {
        SeedFile::Bare(orders) | SeedFile::Wrapped { data: orders } => orders,
    };
    for o in &orders {
        check(o)?;
    }
    Ok(orders)
}

/// Builds a store pre-populated from a JSON seed file.
pub fn load(path: impl AsRef<Path>) -> Result<InMemoryOrderRepository, SeedError> {
    let raw = std::fs::read_to_string(path)?;
    let orders = parse(&raw)?;
    tracing::info!(count = orders.len(), "loaded seed orders");
    Ok(InMemoryOrderRepository::with_orders(orders)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::order::OrderStatus;
    use crate::repositories::OrderRepository;

    const SEED: &str = r#"[
        {
            "id": "f6069a542257054114138301947672ba",
            "deliverTo": "1600 Pennsylvania Avenue NW, Washington, DC 20500",
            "mobileNumber": "(202) 456-1111",
            "status": "out-for-delivery",
            "dishes": [
                { "id": "90c3d873684bf381dfab29034b5bba73", "name": "Breakfast Burrito", "price": 1, "quantity": 1 }
            ]
        },
        {
            "id": "5a887d326e83d3c5bdcbee398ea32aff",
            "deliverTo": "308 Negra Arroyo Lane, Albuquerque, NM",
            "mobileNumber": "(505) 143-3369",
            "status": "delivered",
            "dishes": [
                { "name": "Falafel and tahini bagel", "price": 6, "quantity": 2 }
            ]
        }
    ]"#;

    #[test]
    fn parses_bare_array() {
        let orders = parse(SEED).unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].status, OrderStatus::OutForDelivery);
        assert_eq!(orders[1].dishes[0].details["price"], 6);
    }

    #[test]
    fn parses_data_envelope() {
        let wrapped = format!(r#"{{ "data": {SEED} }}"#);
        assert_eq!(parse(&wrapped).unwrap().len(), 2);
    }

    #[test]
    fn rejects_zero_quantity() {
        let raw = r#"[{ "id": "a", "deliverTo": "x", "mobileNumber": "1",
                       "status": "pending", "dishes": [{ "quantity": 0 }] }]"#;
        let err = parse(raw).unwrap_err();
        assert!(matches!(err, SeedError::Invalid { ref id, .. } if id == "a"));
    }

    #[test]
    fn rejects_unknown_status() {
        let raw = r#"[{ "id": "a", "deliverTo": "x", "mobileNumber": "1",
                       "status": "lost", "dishes": [{ "quantity": 1 }] }]"#;
        assert!(matches!(parse(raw), Err(SeedError::Json(_))));
    }

    #[tokio::test]
    async fn load_populates_store_in_file_order() {
        let path = std::env::temp_dir().join(format!("food-orders-seed-{}.json", std::process::id()));
        std::fs::write(&path, SEED).unwrap();

        let repo = load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let ids: Vec<String> = repo.list().await.into_iter().map(|o| o.id).collect();
        assert_eq!(
            ids,
            [
                "f6069a542257054114138301947672ba",
                "5a887d326e83d3c5bdcbee398ea32aff"
            ]
        );
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SeedError::Io(_)));
    }
}

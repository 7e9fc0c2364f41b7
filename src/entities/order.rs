use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, Default, Display, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    #[display("pending")]
    Pending,
    #[display("preparing")]
    Preparing,
    #[display("out-for-delivery")]
    OutForDelivery,
    #[display("delivered")]
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.to_string() == raw)
    }
}

/// A line of an order. Only `quantity` is interpreted; everything else the
/// client sent (name, price, description, ...) is carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dish {
    pub quantity: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<Dish>,
}

/// The validated, typed form of a create/update body.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<Dish>,
}

impl Order {
    pub fn new(id: String, draft: OrderDraft, status: OrderStatus) -> Self {
        Self {
            id,
            deliver_to: draft.deliver_to,
            mobile_number: draft.mobile_number,
            status,
            dishes: draft.dishes,
        }
    }

    /// Overwrites every mutable field. The id is left alone.
    pub fn apply(&mut self, draft: OrderDraft, status: OrderStatus) {
        self.deliver_to = draft.deliver_to;
        self.mobile_number = draft.mobile_number;
        self.dishes = draft.dishes;
        self.status = status;
    }
}

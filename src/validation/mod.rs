//! Request validation for order bodies and lifecycle rules.
//!
//! Every check returns `Result`; a chain is a sequence of `?` so the first
//! failing check decides the response. The body checks run in this order:
//! `deliverTo` present, `mobileNumber` present, `dishes` present, dishes is a
//! non-empty list, every dish has a positive integer quantity.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::entities::order::{Dish, Order, OrderDraft, OrderStatus};
use crate::errors::OrderError;

/// The raw `data` object of a request body. Nothing is trusted yet.
///
/// Only a JSON object yields fields; any other `data` (array, string, null,
/// ...) reads as an empty payload so the presence checks reject it.
#[derive(Debug, Clone, Default)]
pub struct OrderPayload {
    pub id: Option<Value>,
    pub deliver_to: Option<Value>,
    pub mobile_number: Option<Value>,
    pub status: Option<Value>,
    pub dishes: Option<Value>,
}

impl OrderPayload {
    pub fn from_value(data: Value) -> Self {
        let Value::Object(mut fields) = data else {
            return Self::default();
        };
        let mut take = |key: &str| take_field(&mut fields, key);
        Self {
            id: take("id"),
            deliver_to: take(DELIVER_TO),
            mobile_number: take(MOBILE_NUMBER),
            status: take("status"),
            dishes: take(DISHES),
        }
    }
}

fn take_field(fields: &mut Map<String, Value>, key: &str) -> Option<Value> {
    fields.remove(key).filter(|v| !v.is_null())
}

impl<'de> Deserialize<'de> for OrderPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

pub const DELIVER_TO: &str = "deliverTo";
pub const MOBILE_NUMBER: &str = "mobileNumber";
pub const DISHES: &str = "dishes";

fn is_blank(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Present, not null and not `""`.
pub fn field_present<'a>(
    value: Option<&'a Value>,
    field: &'static str,
) -> Result<&'a Value, OrderError> {
    match value {
        Some(v) if !is_blank(v) => Ok(v),
        _ => Err(OrderError::MissingField(field)),
    }
}

/// Like [`field_present`] but the value must also be a string.
pub fn text_field(value: Option<&Value>, field: &'static str) -> Result<String, OrderError> {
    match field_present(value, field)? {
        Value::String(s) => Ok(s.clone()),
        _ => Err(OrderError::MissingField(field)),
    }
}

pub fn dishes_shape(dishes: &Value) -> Result<&[Value], OrderError> {
    match dishes {
        Value::Array(items) if !items.is_empty() => Ok(items),
        _ => Err(OrderError::NoDishes),
    }
}

/// Whole numbers from 1 up to `u64::MAX`; larger values are rejected.
fn positive_integer(v: &Value) -> Option<u64> {
    if let Some(n) = v.as_u64() {
        return (n > 0).then_some(n);
    }
    let f = v.as_f64()?;
    (f.fract() == 0.0 && f >= 1.0 && f <= u64::MAX as f64).then_some(f as u64)
}

/// Scans dishes in order and stops at the first one without a usable quantity.
pub fn dish_quantities(dishes: &[Value]) -> Result<Vec<Dish>, OrderError> {
    dishes
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let Value::Object(fields) = raw else {
                return Err(OrderError::InvalidDishQuantity(index));
            };
            let quantity = fields
                .get("quantity")
                .and_then(positive_integer)
                .ok_or(OrderError::InvalidDishQuantity(index))?;
            let mut details = fields.clone();
            details.remove("quantity");
            Ok(Dish { quantity, details })
        })
        .collect()
}

/// Optional status as sent on create. Blank means "use the default".
pub fn optional_status(value: Option<&Value>) -> Result<Option<OrderStatus>, OrderError> {
    match value {
        None => Ok(None),
        Some(v) if is_blank(v) => Ok(None),
        Some(Value::String(s)) => OrderStatus::parse(s)
            .map(Some)
            .ok_or(OrderError::InvalidStatus),
        Some(_) => Err(OrderError::InvalidStatus),
    }
}

/// Body chain shared by create and update. Status is left to the caller
/// since create and update treat it differently.
pub fn order_body(data: &OrderPayload) -> Result<OrderDraft, OrderError> {
    let deliver_to = text_field(data.deliver_to.as_ref(), DELIVER_TO)?;
    let mobile_number = text_field(data.mobile_number.as_ref(), MOBILE_NUMBER)?;
    let dishes = field_present(data.dishes.as_ref(), DISHES)?;
    let dishes = dish_quantities(dishes_shape(dishes)?)?;
    Ok(OrderDraft {
        deliver_to,
        mobile_number,
        dishes,
    })
}

/// Create-only: a blank status falls back to `pending`.
pub fn create_status(data: &OrderPayload) -> Result<OrderStatus, OrderError> {
    Ok(optional_status(data.status.as_ref())?.unwrap_or_default())
}

/// Falsy ids (`null`, `""`, `false`, `0`) count as absent.
fn id_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Null | Value::String(_) | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Update-only rules. Returns the status the order will move to.
///
/// Precedence: mismatched body id, then a missing or unknown status, then the
/// delivered lock (either side of the transition being `delivered`).
pub fn status_change(
    route_id: &str,
    data: &OrderPayload,
    current: &Order,
) -> Result<OrderStatus, OrderError> {
    if let Some(order) = data.id.as_ref().and_then(id_text) {
        if order != route_id {
            return Err(OrderError::IdMismatch {
                order,
                route: route_id.to_string(),
            });
        }
    }

    let next = optional_status(data.status.as_ref())?.ok_or(OrderError::InvalidStatus)?;

    if next == OrderStatus::Delivered || current.status == OrderStatus::Delivered {
        return Err(OrderError::DeliveredLocked);
    }
    Ok(next)
}

pub fn deletable(order: &Order) -> Result<(), OrderError> {
    if order.status == OrderStatus::Pending {
        Ok(())
    } else {
        Err(OrderError::NotPending)
    }
}

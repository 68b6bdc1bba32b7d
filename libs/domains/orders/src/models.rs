use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::Validate;

/// Collection holding order documents
pub const ORDER_COLLECTION: &str = "order";

/// Order lifecycle status
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Shipped,
    Completed,
    Cancelled,
}

/// One purchased line, snapshotting the product as shown at checkout.
///
/// `product_id` is not checked against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i64,

    pub image: Option<String>,
    pub storage: Option<String>,
    pub color: Option<String>,
}

/// Postal address, carried flat inside [`Customer`] on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct Customer {
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    #[schema(example = "jane@example.com")]
    pub email: String,

    pub phone: Option<String>,

    #[serde(flatten)]
    pub address: Address,
}

/// A checkout submission.
///
/// Amounts are not cross-checked: `subtotal + shipping` need not equal
/// `total`, and `items` may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct Order {
    #[validate(nested)]
    pub items: Vec<OrderItem>,

    #[validate(range(min = 0.0, message = "Subtotal cannot be negative"))]
    pub subtotal: f64,

    #[validate(range(min = 0.0, message = "Shipping cannot be negative"))]
    pub shipping: f64,

    #[validate(range(min = 0.0, message = "Total cannot be negative"))]
    pub total: f64,

    #[validate(nested)]
    pub customer: Customer,

    #[serde(default)]
    pub status: OrderStatus,

    pub notes: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Acknowledgement returned for an accepted order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderCreated {
    #[schema(example = "65f1a2b3c4d5e6f7a8b9c0d1")]
    pub id: String,

    #[schema(example = "received")]
    pub status: String,
}

impl OrderCreated {
    pub fn received(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: "received".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn order_json() -> serde_json::Value {
        json!({
            "items": [{
                "product_id": "65f1a2b3c4d5e6f7a8b9c0d1",
                "name": "iPhone 15",
                "price": 799.0,
                "quantity": 1
            }],
            "subtotal": 799.0,
            "shipping": 0.0,
            "total": 799.0,
            "customer": {
                "name": "Jane Doe",
                "email": "jane@example.com",
                "address_line1": "1 Infinite Loop",
                "city": "Cupertino",
                "state": "CA",
                "postal_code": "95014",
                "country": "US"
            }
        })
    }

    #[test]
    fn status_defaults_to_pending() {
        let order: Order = serde_json::from_value(order_json()).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.validate().is_ok());
    }

    #[test]
    fn status_string_forms() {
        assert_eq!(OrderStatus::Cancelled.to_string(), "cancelled");
        assert_eq!(OrderStatus::from_str("shipped").unwrap(), OrderStatus::Shipped);
        assert_eq!(serde_json::to_value(OrderStatus::Paid).unwrap(), json!("paid"));
        assert!(serde_json::from_value::<OrderStatus>(json!("refunded")).is_err());
    }

    #[test]
    fn address_is_flat_on_the_wire() {
        let order: Order = serde_json::from_value(order_json()).unwrap();
        assert_eq!(order.customer.address.city, "Cupertino");
        assert_eq!(order.customer.address.address_line2, None);

        let value = serde_json::to_value(&order.customer).unwrap();
        assert_eq!(value["postal_code"], "95014");
        assert!(value.get("address").is_none());
    }

    #[test]
    fn missing_address_line1_is_a_type_error() {
        let mut value = order_json();
        value["customer"]
            .as_object_mut()
            .unwrap()
            .remove("address_line1");
        assert!(serde_json::from_value::<Order>(value).is_err());
    }

    #[test]
    fn nested_violations_are_reported() {
        let mut order: Order = serde_json::from_value(order_json()).unwrap();
        order.customer.email = "not-an-email".into();
        order.items[0].quantity = 0;
        order.total = -1.0;

        let errors = order.validate().unwrap_err();
        let details = axum_helpers::errors::validation_details(&errors);
        assert!(details["customer.email"].is_array());
        assert!(details["items[0].quantity"].is_array());
        assert!(details["total"].is_array());
    }

    #[test]
    fn inconsistent_totals_and_empty_items_are_accepted() {
        let mut order: Order = serde_json::from_value(order_json()).unwrap();
        order.items.clear();
        order.total = 5.0;
        assert!(order.validate().is_ok());
    }

    #[test]
    fn order_created_shape() {
        assert_eq!(
            serde_json::to_value(OrderCreated::received("abc")).unwrap(),
            json!({ "id": "abc", "status": "received" })
        );
    }
}

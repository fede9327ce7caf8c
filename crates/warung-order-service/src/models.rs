//! Order models: storage row, external camelCase shape, request payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use warung_core::error::ServiceError;

/// Order lifecycle status, stored as snake_case TEXT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    OnDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Parse an external status string.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] for anything outside the
    /// enumerated set.
    pub fn parse(raw: &str) -> Result<Self, ServiceError> {
        match raw {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "on_delivery" => Ok(Self::OnDelivery),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(ServiceError::Validation(format!(
                "unknown status '{other}'"
            ))),
        }
    }
}

/// Storage shape: `items` is a JSON array serialized into one TEXT column.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrderRow {
    pub id: i64,
    pub user_id: i64,
    pub restaurant_name: String,
    pub items: String,
    pub total_price: i64,
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
}

impl OrderRow {
    /// Re-shape into the external form, decoding the items column.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Internal`] when the stored items text is
    /// not a JSON array of strings.
    pub fn into_order(self) -> Result<Order, ServiceError> {
        let items: Vec<String> = serde_json::from_str(&self.items)
            .map_err(|e| ServiceError::Internal(format!("corrupt items column: {e}")))?;
        Ok(Order {
            id: self.id,
            user_id: self.user_id,
            restaurant_name: self.restaurant_name,
            items,
            total_price: self.total_price,
            status: self.status,
            created_at: self.created_at,
        })
    }
}

/// External shape served to clients (`userId`, `restaurantName`, …).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    /// Weak reference; never enforced against the users table.
    pub user_id: i64,
    pub restaurant_name: String,
    pub items: Vec<String>,
    /// Monetary units, non-negative.
    pub total_price: i64,
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
}

/// `POST /orders` body. All fields required; any supplied status is
/// ignored and the row is created `pending`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub user_id: Option<i64>,
    pub restaurant_name: Option<String>,
    pub items: Option<Vec<String>>,
    pub total_price: Option<i64>,
}

impl NewOrder {
    /// Validate presence of every field and the price range.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] naming the first offending
    /// field.
    pub fn into_validated(self) -> Result<ValidNewOrder, ServiceError> {
        let user_id = self
            .user_id
            .ok_or_else(|| missing("userId"))?;
        let restaurant_name = match self.restaurant_name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(missing("restaurantName")),
        };
        let items = self.items.ok_or_else(|| missing("items"))?;
        let total_price = self.total_price.ok_or_else(|| missing("totalPrice"))?;
        if total_price < 0 {
            return Err(ServiceError::Validation(
                "totalPrice must be non-negative".into(),
            ));
        }
        Ok(ValidNewOrder {
            user_id,
            restaurant_name,
            items,
            total_price,
        })
    }
}

/// A `NewOrder` whose fields have all been checked.
#[derive(Debug)]
pub struct ValidNewOrder {
    pub user_id: i64,
    pub restaurant_name: String,
    pub items: Vec<String>,
    pub total_price: i64,
}

/// `PUT /orders/{id}` body. The update is composed from whichever
/// fields are present; status arrives as a string so an unknown value
/// is a 400, not a deserialization failure.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrder {
    pub status: Option<String>,
    pub restaurant_name: Option<String>,
    pub items: Option<Vec<String>>,
    pub total_price: Option<i64>,
}

impl UpdateOrder {
    /// True when the body supplies no recognized field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.restaurant_name.is_none()
            && self.items.is_none()
            && self.total_price.is_none()
    }

    /// Check the status value, restaurant name, and price range.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] on an empty body, unknown
    /// status, empty restaurant name, or negative price.
    pub fn into_validated(self) -> Result<ValidUpdateOrder, ServiceError> {
        if self.is_empty() {
            return Err(ServiceError::Validation(
                "no updatable field supplied".into(),
            ));
        }
        if matches!(self.restaurant_name.as_deref(), Some("")) {
            return Err(ServiceError::Validation(
                "field 'restaurantName' must be non-empty".into(),
            ));
        }
        let status = self.status.as_deref().map(OrderStatus::parse).transpose()?;
        if matches!(self.total_price, Some(p) if p < 0) {
            return Err(ServiceError::Validation(
                "totalPrice must be non-negative".into(),
            ));
        }
        Ok(ValidUpdateOrder {
            status,
            restaurant_name: self.restaurant_name,
            items: self.items,
            total_price: self.total_price,
        })
    }
}

/// An `UpdateOrder` whose fields have all been checked.
#[derive(Debug)]
pub struct ValidUpdateOrder {
    pub status: Option<OrderStatus>,
    pub restaurant_name: Option<String>,
    pub items: Option<Vec<String>>,
    pub total_price: Option<i64>,
}

fn missing(field: &str) -> ServiceError {
    ServiceError::Validation(format!("field '{field}' is required"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_snake_case() {
        for raw in ["pending", "processing", "on_delivery", "delivered", "cancelled"] {
            let status = OrderStatus::parse(raw).unwrap();
            assert_eq!(serde_json::to_value(status).unwrap(), raw);
        }
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert!(OrderStatus::parse("shipped").is_err());
    }

    #[test]
    fn test_new_order_requires_every_field() {
        let payload = NewOrder {
            user_id: Some(1),
            restaurant_name: Some("Warung Bu Tini".into()),
            items: None,
            total_price: Some(25000),
        };
        let err = payload.into_validated().unwrap_err();
        assert!(err.to_string().contains("items"));
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let payload = NewOrder {
            user_id: Some(1),
            restaurant_name: Some("Warung Bu Tini".into()),
            items: Some(vec!["Soto Ayam".into()]),
            total_price: Some(-1),
        };
        assert!(payload.into_validated().is_err());
    }

    #[test]
    fn test_update_with_empty_restaurant_name_is_rejected() {
        let payload = UpdateOrder {
            status: None,
            restaurant_name: Some(String::new()),
            items: None,
            total_price: None,
        };
        let err = payload.into_validated().unwrap_err();
        assert!(err.to_string().contains("restaurantName"));
    }

    #[test]
    fn test_empty_update_is_rejected() {
        let payload = UpdateOrder {
            status: None,
            restaurant_name: None,
            items: None,
            total_price: None,
        };
        assert!(payload.into_validated().is_err());
    }

    #[test]
    fn test_row_with_corrupt_items_fails_reshaping() {
        let row = OrderRow {
            id: 1,
            user_id: 1,
            restaurant_name: "Warung Bu Tini".into(),
            items: "not json".into(),
            total_price: 10000,
            status: OrderStatus::Pending,
            created_at: chrono::NaiveDateTime::default(),
        };
        assert!(row.into_order().is_err());
    }
}

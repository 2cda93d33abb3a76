//! Product domain events

use super::domain_event::{DomainEvent, NamedEvent};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Payload of [`ProductCreatedEvent`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreatedData {
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price
    pub price: f64,
}

/// Raised after a product has been created
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreatedEvent {
    /// Instant the product was created
    pub occurred_at: DateTime<Utc>,
    /// Created product
    pub data: ProductCreatedData,
}

impl ProductCreatedEvent {
    /// Create the event, stamped with the current time
    pub fn new(data: ProductCreatedData) -> Self {
        Self {
            occurred_at: Utc::now(),
            data,
        }
    }
}

impl NamedEvent for ProductCreatedEvent {
    const NAME: &'static str = "ProductCreatedEvent";
}

impl DomainEvent for ProductCreatedEvent {
    fn event_name(&self) -> &str {
        Self::NAME
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_data(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(&self.data)?)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

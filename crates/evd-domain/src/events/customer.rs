//! Customer domain events

use super::domain_event::{DomainEvent, NamedEvent};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::any::Any;
use uuid::Uuid;

/// Payload of [`CustomerCreatedEvent`]
///
/// Both fields are optional: the event may be raised before the customer
/// has an identity worth reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCreatedData {
    /// Customer identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Customer name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Raised after a customer has been created
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerCreatedEvent {
    /// Instant the customer was created
    pub occurred_at: DateTime<Utc>,
    /// Created customer
    pub data: CustomerCreatedData,
}

impl CustomerCreatedEvent {
    /// Create the event, stamped with the current time
    pub fn new(data: CustomerCreatedData) -> Self {
        Self {
            occurred_at: Utc::now(),
            data,
        }
    }
}

impl NamedEvent for CustomerCreatedEvent {
    const NAME: &'static str = "CustomerCreatedEvent";
}

impl DomainEvent for CustomerCreatedEvent {
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

/// Payload of [`CustomerAddressChangedEvent`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAddressChangedData {
    /// Customer identifier
    pub id: Uuid,
    /// Customer name
    pub name: String,
    /// New address, already formatted
    pub address: String,
}

/// Raised after a customer's address has changed
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerAddressChangedEvent {
    /// Instant the address changed
    pub occurred_at: DateTime<Utc>,
    /// Customer and new address
    pub data: CustomerAddressChangedData,
}

impl CustomerAddressChangedEvent {
    /// Create the event, stamped with the current time
    pub fn new(data: CustomerAddressChangedData) -> Self {
        Self {
            occurred_at: Utc::now(),
            data,
        }
    }
}

impl NamedEvent for CustomerAddressChangedEvent {
    const NAME: &'static str = "CustomerAddressChangedEvent";
}

impl DomainEvent for CustomerAddressChangedEvent {
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

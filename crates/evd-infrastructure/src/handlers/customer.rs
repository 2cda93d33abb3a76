//! Reactions to customer events

use evd_domain::error::Result;
use evd_domain::events::{
    CustomerAddressChangedEvent, CustomerCreatedEvent, DomainEvent, EventHandler, downcast_event,
};
use tracing::info;

/// First of the two log lines written when a customer is created
#[derive(Debug, Default)]
pub struct FirstCustomerCreatedLogHandler;

impl EventHandler for FirstCustomerCreatedLogHandler {
    fn handle(&self, event: &dyn DomainEvent) -> Result<()> {
        downcast_event::<CustomerCreatedEvent>(event)?;
        info!("This is the first log line of the event: CustomerCreated");
        Ok(())
    }

    fn name(&self) -> &str {
        "first_customer_created_log"
    }
}

/// Second of the two log lines written when a customer is created
#[derive(Debug, Default)]
pub struct SecondCustomerCreatedLogHandler;

impl EventHandler for SecondCustomerCreatedLogHandler {
    fn handle(&self, event: &dyn DomainEvent) -> Result<()> {
        downcast_event::<CustomerCreatedEvent>(event)?;
        info!("This is the second log line of the event: CustomerCreated");
        Ok(())
    }

    fn name(&self) -> &str {
        "second_customer_created_log"
    }
}

/// Logs the customer's new address
#[derive(Debug, Default)]
pub struct CustomerAddressChangedLogHandler;

impl CustomerAddressChangedLogHandler {
    /// Line written for an address change
    pub fn message(event: &CustomerAddressChangedEvent) -> String {
        format!(
            "Customer address: {}, {} changed to: {}",
            event.data.id, event.data.name, event.data.address
        )
    }
}

impl EventHandler for CustomerAddressChangedLogHandler {
    fn handle(&self, event: &dyn DomainEvent) -> Result<()> {
        let changed = downcast_event::<CustomerAddressChangedEvent>(event)?;
        info!(customer = %changed.data.id, "{}", Self::message(changed));
        Ok(())
    }

    fn name(&self) -> &str {
        "customer_address_changed_log"
    }
}

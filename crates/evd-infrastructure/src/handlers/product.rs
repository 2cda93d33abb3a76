//! Reactions to product events

use evd_domain::error::Result;
use evd_domain::events::{DomainEvent, EventHandler, ProductCreatedEvent, downcast_event};
use tracing::info;

/// Notifies by email that a product was created
///
/// Emits the notification through `tracing`; no mail is actually sent.
#[derive(Debug, Default)]
pub struct SendEmailWhenProductIsCreatedHandler;

impl EventHandler for SendEmailWhenProductIsCreatedHandler {
    fn handle(&self, event: &dyn DomainEvent) -> Result<()> {
        let product = downcast_event::<ProductCreatedEvent>(event)?;
        info!(
            product = %product.data.name,
            price = product.data.price,
            "Sending email: product {} created",
            product.data.name
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "send_email_when_product_is_created"
    }
}

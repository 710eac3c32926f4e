use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// NoopPublisher drops every event, used when events are turned off
#[derive(Debug, Default)]
pub struct NoopPublisher {}

impl EventPublisher for NoopPublisher {
    fn publish(&self, _event: &DomainEvent) -> Result<(), LibraryError> {
        Ok(())
    }
}

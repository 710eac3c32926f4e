use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogsPublisher writes domain events to the tracing log stream
#[derive(Debug)]
pub struct LogsPublisher {
    topic: String,
}

impl LogsPublisher {
    pub fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
        }
    }
}

impl EventPublisher for LogsPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let metadata = serde_json::to_string(&event.metadata)?;
        info!(target: "events",
            topic = self.topic.as_str(),
            event_id = event.event_id.as_str(),
            name = event.name.as_str(),
            group = event.group.as_str(),
            key = event.key.as_str(),
            kind = ?event.kind,
            metadata = metadata.as_str(),
            data = event.json_data.as_str(),
            "published event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::LogsPublisher;

    #[test]
    fn test_should_publish_to_logs() {
        let data = HashMap::from([("a", 1), ("b", 2)]);
        let event = DomainEvent::added("test-name", "group", "key", &HashMap::from([("k".to_string(), "v".to_string())]), &data).expect("build event");
        let publisher = LogsPublisher::new("events");
        let _ = publisher.publish(&event).expect("should publish");
    }
}

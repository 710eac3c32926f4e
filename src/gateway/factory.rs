use crate::gateway::events::EventPublisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::logs::LogsPublisher;
use crate::gateway::noop::NoopPublisher;

pub fn create_publisher(via: GatewayPublisherVia) -> Box<dyn EventPublisher> {
    match via {
        GatewayPublisherVia::Logs => {
            Box::new(LogsPublisher::new("events"))
        }
        GatewayPublisherVia::Noop => {
            Box::new(NoopPublisher::default())
        }
    }
}

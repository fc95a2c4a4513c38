mod retrying_routing_service;

pub use retrying_routing_service::RetryingRoutingService;

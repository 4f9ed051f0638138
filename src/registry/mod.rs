mod handler_registry;

pub use handler_registry::HandlerRegistry;

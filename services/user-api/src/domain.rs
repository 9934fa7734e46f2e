// Domain layer modules
pub mod inbound_request;
pub mod outbound_response;
pub mod user_record;

// Re-exports
pub use inbound_request::{InboundRequest, RequestMethod};
pub use outbound_response::OutboundResponse;
pub use user_record::{UserPayload, UserRecord};

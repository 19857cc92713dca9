pub mod error;
pub mod gateway;
pub mod http;
pub mod wire;

pub use error::{GatewayError, Result};
pub use gateway::RecommendationGateway;
pub use http::HttpGateway;
pub use wire::{DEFAULT_RESULT_LIMIT, ErrorBody, RecommendRequest, RecommendResponse};

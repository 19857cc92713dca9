use crate::error::Result;
use crate::wire::RecommendRequest;
use async_trait::async_trait;
use florarec_types::RawPlantRecord;

/// Contract between the orchestrator and the recommendation service.
///
/// One operation: exchange a criteria payload for an ordered candidate
/// list. An empty list is a valid answer and distinct from an error. The
/// service is the sole authority on ranking order.
#[async_trait]
pub trait RecommendationGateway: Send + Sync {
    async fn recommend(&self, request: &RecommendRequest) -> Result<Vec<RawPlantRecord>>;
}

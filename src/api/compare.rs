//! Price Comparison Endpoint

use super::ApiError;
use crate::models::{CompareRequest, CompareResponse};

/// Run a comparison for the given stores and items. A 402 here means
/// the free-tier limit was reached; callers check `is_paywall()`.
pub async fn run(request: &CompareRequest) -> Result<CompareResponse, ApiError> {
    super::post("/compare", request).await
}

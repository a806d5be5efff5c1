//! Billing Endpoints

use super::ApiError;
use crate::models::{BillingStatus, SessionUrl};

pub async fn status() -> Result<BillingStatus, ApiError> {
    super::get("/billing/status").await
}

/// Stripe checkout redirect target
pub async fn checkout_session() -> Result<SessionUrl, ApiError> {
    super::post_empty("/billing/checkout-session").await
}

/// Subscription-management portal redirect target
pub async fn portal_session() -> Result<SessionUrl, ApiError> {
    super::post_empty("/billing/portal-session").await
}

//! SMS provider capability

use async_trait::async_trait;

use crate::domain::value_objects::SendOutcome;

/// Outbound SMS capability, implemented once per delivery provider.
///
/// Implementations canonicalize the recipient, perform exactly one send
/// attempt against their backing service, and translate that service's own
/// delivery signal into a [`SendOutcome`]. Transport errors are caught
/// inside the implementation and reported through the outcome; the method
/// itself never fails.
#[async_trait]
pub trait SmsProvider: Send + Sync {
    /// Send one message to one recipient.
    ///
    /// `to_raw` may arrive in any format callers supply; implementations
    /// normalize it before dialing. `company_id` is an opaque tenant tag
    /// carried through to audit logs only.
    async fn send(&self, to_raw: &str, message: &str, company_id: Option<&str>) -> SendOutcome;

    /// Name of the backing delivery service, for logs
    fn provider_name(&self) -> &str;
}

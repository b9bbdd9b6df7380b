use crate::types::{UsageInput, VendorId, VendorPricing};

/// Usage converted into the units vendors meter by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedUsage {
    pub billable_invocations: u64,
    pub compute_seconds: f64,
    pub gb_seconds: f64,
    pub billable_gb_seconds: f64,
}

/// Convert raw usage into billable GB-seconds under one vendor's rules.
///
/// Compute seconds are re-clamped to zero even though the inputs are
/// non-negative, to absorb floating-point drift.
pub fn normalize(usage: &UsageInput, pricing: &VendorPricing, vendor: VendorId) -> NormalizedUsage {
    let billable_invocations = if vendor.bills_compute_on_gross_invocations() {
        usage.invocation_count
    } else {
        usage.invocation_count.saturating_sub(pricing.free_requests)
    };

    let compute_seconds =
        (billable_invocations as f64 * (usage.execution_time_ms / 1000.0)).max(0.0);
    let gb_seconds = compute_seconds * (usage.memory_mb as f64 / 1024.0);
    let billable_gb_seconds = (gb_seconds - pricing.free_gb_seconds).max(0.0);

    NormalizedUsage {
        billable_invocations,
        compute_seconds,
        gb_seconds,
        billable_gb_seconds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PricingCatalog;

    #[test]
    fn test_normalize_pipeline() {
        // 2M invocations at 100ms and 128MB against a 1M-request free tier:
        // 1M billable invocations, 100,000 compute seconds, 12,500
        // GB-seconds, all of it inside the 400,000 GB-second allowance.
        let catalog = PricingCatalog::default();
        let usage = UsageInput::new(2_000_000, 100.0, 128);

        let normalized = normalize(&usage, catalog.pricing(VendorId::Aws), VendorId::Aws);
        assert_eq!(normalized.billable_invocations, 1_000_000);
        assert!((normalized.compute_seconds - 100_000.0).abs() < 1e-6);
        assert!((normalized.gb_seconds - 12_500.0).abs() < 1e-6);
        assert_eq!(normalized.billable_gb_seconds, 0.0);
    }

    #[test]
    fn test_normalize_past_compute_allowance() {
        let catalog = PricingCatalog::default();
        let usage = UsageInput::new(5_000_000, 1_000.0, 1024);

        let normalized = normalize(&usage, catalog.pricing(VendorId::Aws), VendorId::Aws);
        assert_eq!(normalized.billable_invocations, 4_000_000);
        assert!((normalized.compute_seconds - 4_000_000.0).abs() < 1e-6);
        assert!((normalized.gb_seconds - 4_000_000.0).abs() < 1e-6);
        assert!((normalized.billable_gb_seconds - 3_600_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_google_meters_gross_invocations() {
        // Google's request free tier does not shrink the compute basis.
        let catalog = PricingCatalog::default();
        let usage = UsageInput::new(2_000_000, 100.0, 128);

        let normalized = normalize(&usage, catalog.pricing(VendorId::GCloud), VendorId::GCloud);
        assert_eq!(normalized.billable_invocations, 2_000_000);
        assert!((normalized.compute_seconds - 200_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_invocations_below_free_tier_saturate() {
        let catalog = PricingCatalog::default();
        let usage = UsageInput::new(500_000, 100.0, 128);

        let normalized = normalize(&usage, catalog.pricing(VendorId::Aws), VendorId::Aws);
        assert_eq!(normalized.billable_invocations, 0);
        assert_eq!(normalized.compute_seconds, 0.0);
        assert_eq!(normalized.gb_seconds, 0.0);
        assert_eq!(normalized.billable_gb_seconds, 0.0);
    }
}

// Module declarations
pub mod constants;
pub mod engine;
pub mod error;
pub mod formatting;
pub mod pricing;
pub mod types;

// Re-export commonly used items
pub use engine::{CostEngine, NormalizedUsage, normalize};
pub use error::{CostError, Result};
pub use pricing::PricingCatalog;
pub use types::{Cost, CostBreakdown, CpuPricing, Projection, UsageInput, VendorId, VendorPricing};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_through_public_api() {
        let engine = CostEngine::default();
        let usage = UsageInput::new(2_000_000, 100.0, 128);

        let total = engine
            .estimate_cost(&usage, VendorId::Aws, Projection::Total)
            .unwrap();
        assert!((total - 0.20).abs() < 1e-9);
    }

    #[test]
    fn test_usage_document_round_trip() {
        // The same document shape the front-end reads from stdin.
        let json_str = r#"{
            "invocationCount": 20000000,
            "executionTimeMs": 200,
            "memoryMb": 512
        }"#;

        let usage: UsageInput = serde_json::from_str(json_str).unwrap();
        let engine = CostEngine::default();

        let breakdown = engine.estimate(&usage, VendorId::GCloud).unwrap();
        assert_eq!(breakdown.total.to_formatted_string(), "$25.20");
    }

    #[test]
    fn test_unknown_vendor_string_is_rejected() {
        let err = "oracle".parse::<VendorId>().unwrap_err();
        assert!(matches!(err, CostError::UnknownVendor { .. }));
    }

    #[test]
    fn test_vendor_comparison_totals_are_independent() {
        // One usage document priced under every vendor, the way the
        // comparison table consumes the engine.
        let engine = CostEngine::default();
        let usage = UsageInput::new(5_000_000, 1_000.0, 1024);

        for vendor in VendorId::ALL {
            let breakdown = engine.estimate(&usage, vendor).unwrap();
            let request = breakdown.request_charge.value();
            let compute = breakdown.compute_charge.value();
            assert!(request >= 0.0 && compute >= 0.0);
            assert!((breakdown.total.value() - (request + compute)).abs() <= 0.01);
        }
    }
}

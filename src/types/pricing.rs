use serde::Deserialize;
use std::collections::BTreeMap;

/// Billing constants for one vendor. Contractual rates, never mutated at
/// runtime; the compiled-in defaults live in `constants.rs` and a full
/// catalog can be injected instead when rates change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorPricing {
    /// Invocations per billing period that are not charged.
    pub free_requests: u64,
    /// Compute allowance, in GB-seconds, before charges apply.
    pub free_gb_seconds: f64,
    pub charge_per_gb_second: f64,
    pub charge_per_million_requests: f64,
    /// CPU metering charged on top of memory. Google only.
    #[serde(default)]
    pub cpu: Option<CpuPricing>,
}

/// CPU-clock metering for vendors that bill GHz-seconds alongside
/// GB-seconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuPricing {
    pub free_ghz_seconds: f64,
    pub charge_per_ghz_second: f64,
    /// Allotted CPU clock in MHz per memory tier. Memory sizes without an
    /// entry bill memory-only.
    pub mhz_by_memory_mb: BTreeMap<u32, u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_json_parsing() {
        let json_str = r#"{
            "freeRequests": 1000000,
            "freeGbSeconds": 400000,
            "chargePerGbSecond": 0.0000166667,
            "chargePerMillionRequests": 0.20
        }"#;

        let pricing: VendorPricing = serde_json::from_str(json_str).unwrap();
        assert_eq!(pricing.free_requests, 1_000_000);
        assert_eq!(pricing.free_gb_seconds, 400_000.0);
        assert_eq!(pricing.charge_per_gb_second, 0.0000166667);
        assert_eq!(pricing.charge_per_million_requests, 0.20);
        assert!(pricing.cpu.is_none());
    }

    #[test]
    fn test_pricing_with_cpu_json_parsing() {
        let json_str = r#"{
            "freeRequests": 2000000,
            "freeGbSeconds": 400000,
            "chargePerGbSecond": 0.0000025,
            "chargePerMillionRequests": 0.40,
            "cpu": {
                "freeGhzSeconds": 200000,
                "chargePerGhzSecond": 0.00001,
                "mhzByMemoryMb": { "128": 200, "256": 400 }
            }
        }"#;

        let pricing: VendorPricing = serde_json::from_str(json_str).unwrap();
        let cpu = pricing.cpu.unwrap();
        assert_eq!(cpu.free_ghz_seconds, 200_000.0);
        assert_eq!(cpu.mhz_by_memory_mb.get(&128), Some(&200));
        assert_eq!(cpu.mhz_by_memory_mb.get(&512), None);
    }
}

mod normalizer;

pub use normalizer::{NormalizedUsage, normalize};

use crate::error::Result;
use crate::pricing::PricingCatalog;
use crate::types::{CostBreakdown, Projection, UsageInput, VendorId, VendorPricing};

/// Produces a `CostBreakdown` for one `(UsageInput, vendor)` pair.
///
/// Pure computation over a read-only catalog; an `&CostEngine` can be shared
/// across threads freely.
pub struct CostEngine {
    catalog: PricingCatalog,
}

impl CostEngine {
    /// Build an engine over an injected catalog.
    pub fn new(catalog: PricingCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &PricingCatalog {
        &self.catalog
    }

    /// Estimate the full breakdown for one vendor.
    ///
    /// A function whose invocation count does not clear the vendor's request
    /// free tier is reported as entirely free, compute included. Deliberate:
    /// real vendor bills meter compute independently of the request tier, so
    /// confirm against billing documentation before these figures feed
    /// anything beyond estimates.
    pub fn estimate(&self, usage: &UsageInput, vendor: VendorId) -> Result<CostBreakdown> {
        usage.validate()?;

        let pricing = self.catalog.pricing(vendor);
        if usage.invocation_count <= pricing.free_requests {
            return Ok(CostBreakdown::ZERO);
        }

        let normalized = normalize(usage, pricing, vendor);
        let compute_charge = compute_charge(&normalized, usage, pricing);
        let request_charge = (usage.invocation_count - pricing.free_requests) as f64
            * (pricing.charge_per_million_requests / 1_000_000.0);

        Ok(CostBreakdown::from_raw_charges(request_charge, compute_charge))
    }

    /// Estimate a single projected figure for one vendor.
    pub fn estimate_cost(
        &self,
        usage: &UsageInput,
        vendor: VendorId,
        projection: Projection,
    ) -> Result<f64> {
        Ok(self.estimate(usage, vendor)?.project(projection).value())
    }
}

impl Default for CostEngine {
    fn default() -> Self {
        Self::new(PricingCatalog::default())
    }
}

fn compute_charge(
    normalized: &NormalizedUsage,
    usage: &UsageInput,
    pricing: &VendorPricing,
) -> f64 {
    let memory_charge = normalized.billable_gb_seconds * pricing.charge_per_gb_second;

    let cpu = match &pricing.cpu {
        Some(cpu) => cpu,
        None => return memory_charge,
    };
    // Memory sizes outside the tier map bill memory-only.
    let Some(&mhz) = cpu.mhz_by_memory_mb.get(&usage.memory_mb) else {
        return memory_charge;
    };

    let ghz_seconds = normalized.gb_seconds * (mhz as f64 / 1000.0);
    let billable_ghz_seconds = (ghz_seconds - cpu.free_ghz_seconds).max(0.0);
    memory_charge + billable_ghz_seconds * cpu.charge_per_ghz_second
}

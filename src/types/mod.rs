pub mod cost;
pub mod ids;
pub mod pricing;
pub mod usage;

pub use cost::{Cost, CostBreakdown, Projection};
pub use ids::VendorId;
pub use pricing::{CpuPricing, VendorPricing};
pub use usage::UsageInput;

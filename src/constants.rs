/// AWS Lambda: requests per billing period inside the free tier.
pub const AWS_FREE_REQUESTS: u64 = 1_000_000;
/// AWS Lambda: GB-seconds per billing period inside the free tier.
pub const AWS_FREE_GB_SECONDS: f64 = 400_000.0;
pub const AWS_CHARGE_PER_GB_SECOND: f64 = 0.0000166667;
pub const AWS_CHARGE_PER_MILLION_REQUESTS: f64 = 0.20;

pub const AZURE_FREE_REQUESTS: u64 = 1_000_000;
pub const AZURE_FREE_GB_SECONDS: f64 = 400_000.0;
pub const AZURE_CHARGE_PER_GB_SECOND: f64 = 0.000016;
pub const AZURE_CHARGE_PER_MILLION_REQUESTS: f64 = 0.20;

pub const GCLOUD_FREE_REQUESTS: u64 = 2_000_000;
pub const GCLOUD_FREE_GB_SECONDS: f64 = 400_000.0;
pub const GCLOUD_CHARGE_PER_GB_SECOND: f64 = 0.0000025;
pub const GCLOUD_CHARGE_PER_MILLION_REQUESTS: f64 = 0.40;
/// Google also meters CPU time, in GHz-seconds, on top of GB-seconds.
pub const GCLOUD_FREE_GHZ_SECONDS: f64 = 200_000.0;
pub const GCLOUD_CHARGE_PER_GHZ_SECOND: f64 = 0.00001;
/// CPU clock in MHz that Google allots to each memory tier.
/// Memory sizes without an entry bill memory-only.
pub const GCLOUD_MHZ_BY_MEMORY_MB: [(u32, u32); 5] = [
    (128, 200),
    (256, 400),
    (512, 800),
    (1024, 1400),
    (2048, 2400),
];

/// IBM publishes no request free tier and bills no per-invocation fee;
/// its charges are compute-only.
pub const IBM_FREE_REQUESTS: u64 = 0;
pub const IBM_FREE_GB_SECONDS: f64 = 400_000.0;
pub const IBM_CHARGE_PER_GB_SECOND: f64 = 0.000017;
pub const IBM_CHARGE_PER_MILLION_REQUESTS: f64 = 0.0;

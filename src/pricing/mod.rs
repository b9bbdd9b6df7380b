use crate::constants::{
    AWS_CHARGE_PER_GB_SECOND, AWS_CHARGE_PER_MILLION_REQUESTS, AWS_FREE_GB_SECONDS,
    AWS_FREE_REQUESTS, AZURE_CHARGE_PER_GB_SECOND, AZURE_CHARGE_PER_MILLION_REQUESTS,
    AZURE_FREE_GB_SECONDS, AZURE_FREE_REQUESTS, GCLOUD_CHARGE_PER_GB_SECOND,
    GCLOUD_CHARGE_PER_GHZ_SECOND, GCLOUD_CHARGE_PER_MILLION_REQUESTS, GCLOUD_FREE_GB_SECONDS,
    GCLOUD_FREE_GHZ_SECONDS, GCLOUD_FREE_REQUESTS, GCLOUD_MHZ_BY_MEMORY_MB,
    IBM_CHARGE_PER_GB_SECOND, IBM_CHARGE_PER_MILLION_REQUESTS, IBM_FREE_GB_SECONDS,
    IBM_FREE_REQUESTS,
};
use crate::error::{CostError, Result};
use crate::types::{CpuPricing, VendorId, VendorPricing};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One `VendorPricing` record per supported vendor. Read-only once built;
/// lookups by `VendorId` cannot fail.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingCatalog {
    pub aws: VendorPricing,
    pub azure: VendorPricing,
    pub g_cloud: VendorPricing,
    pub ibm: VendorPricing,
}

impl PricingCatalog {
    /// Look up the pricing record for a vendor.
    pub fn pricing(&self, vendor: VendorId) -> &VendorPricing {
        match vendor {
            VendorId::Aws => &self.aws,
            VendorId::Azure => &self.azure,
            VendorId::GCloud => &self.g_cloud,
            VendorId::Ibm => &self.ibm,
        }
    }

    /// Load a full catalog from a JSON file, so rate updates need no rebuild.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| CostError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| CostError::CatalogParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for PricingCatalog {
    fn default() -> Self {
        PricingCatalog {
            aws: VendorPricing {
                free_requests: AWS_FREE_REQUESTS,
                free_gb_seconds: AWS_FREE_GB_SECONDS,
                charge_per_gb_second: AWS_CHARGE_PER_GB_SECOND,
                charge_per_million_requests: AWS_CHARGE_PER_MILLION_REQUESTS,
                cpu: None,
            },
            azure: VendorPricing {
                free_requests: AZURE_FREE_REQUESTS,
                free_gb_seconds: AZURE_FREE_GB_SECONDS,
                charge_per_gb_second: AZURE_CHARGE_PER_GB_SECOND,
                charge_per_million_requests: AZURE_CHARGE_PER_MILLION_REQUESTS,
                cpu: None,
            },
            g_cloud: VendorPricing {
                free_requests: GCLOUD_FREE_REQUESTS,
                free_gb_seconds: GCLOUD_FREE_GB_SECONDS,
                charge_per_gb_second: GCLOUD_CHARGE_PER_GB_SECOND,
                charge_per_million_requests: GCLOUD_CHARGE_PER_MILLION_REQUESTS,
                cpu: Some(CpuPricing {
                    free_ghz_seconds: GCLOUD_FREE_GHZ_SECONDS,
                    charge_per_ghz_second: GCLOUD_CHARGE_PER_GHZ_SECOND,
                    mhz_by_memory_mb: GCLOUD_MHZ_BY_MEMORY_MB.iter().copied().collect(),
                }),
            },
            ibm: VendorPricing {
                free_requests: IBM_FREE_REQUESTS,
                free_gb_seconds: IBM_FREE_GB_SECONDS,
                charge_per_gb_second: IBM_CHARGE_PER_GB_SECOND,
                charge_per_million_requests: IBM_CHARGE_PER_MILLION_REQUESTS,
                cpu: None,
            },
        }
    }
}

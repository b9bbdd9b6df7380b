use crate::error::CostError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Identifier for a supported serverless vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VendorId {
    Aws,
    Azure,
    GCloud,
    Ibm,
}

impl VendorId {
    /// Every supported vendor, in display order.
    pub const ALL: [VendorId; 4] = [
        VendorId::Aws,
        VendorId::Azure,
        VendorId::GCloud,
        VendorId::Ibm,
    ];

    /// The wire identifier, as used in catalog files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorId::Aws => "aws",
            VendorId::Azure => "azure",
            VendorId::GCloud => "gCloud",
            VendorId::Ibm => "ibm",
        }
    }

    /// Product name for table output.
    pub fn display_name(&self) -> &'static str {
        match self {
            VendorId::Aws => "AWS Lambda",
            VendorId::Azure => "Azure Functions",
            VendorId::GCloud => "Google Cloud Functions",
            VendorId::Ibm => "IBM Cloud Functions",
        }
    }

    /// Google meters compute over the gross invocation count; its request
    /// free tier offsets only the request charge. Everyone else subtracts
    /// free requests before compute-seconds are accumulated.
    pub fn bills_compute_on_gross_invocations(&self) -> bool {
        matches!(self, VendorId::GCloud)
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VendorId {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aws" => Ok(VendorId::Aws),
            "azure" => Ok(VendorId::Azure),
            "gCloud" => Ok(VendorId::GCloud),
            "ibm" => Ok(VendorId::Ibm),
            other => Err(CostError::UnknownVendor {
                vendor: other.to_string(),
            }),
        }
    }
}

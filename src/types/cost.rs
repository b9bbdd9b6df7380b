use crate::error::CostError;
use crate::formatting::format_currency;
use std::fmt;
use std::str::FromStr;

/// A newtype wrapper for cost values in USD
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Cost(f64);

impl Cost {
    /// Create a new Cost from a raw value
    #[inline]
    pub const fn new(value: f64) -> Self {
        Cost(value)
    }

    /// Round a raw value to whole cents, half away from zero.
    ///
    /// `f64::round` rounds half away from zero, so 0.125 becomes 0.13 and
    /// -0.125 becomes -0.13.
    pub fn rounded_to_cents(value: f64) -> Self {
        Cost((value * 100.0).round() / 100.0)
    }

    /// Get the raw value
    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Format as currency string (e.g., "$1.23")
    pub fn to_formatted_string(&self) -> String {
        format_currency(self.0)
    }

    /// Check if the cost is positive (greater than tolerance)
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > 0.005
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_formatted_string())
    }
}

impl From<f64> for Cost {
    fn from(value: f64) -> Self {
        Cost(value)
    }
}

impl From<Cost> for f64 {
    fn from(cost: Cost) -> Self {
        cost.0
    }
}

/// Per-vendor result of one estimate.
///
/// Each reported field is rounded once, independently; the total is rounded
/// from the unrounded sum rather than from the two rounded parts, so the
/// reported figures never compound rounding error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBreakdown {
    pub request_charge: Cost,
    pub compute_charge: Cost,
    pub total: Cost,
}

impl CostBreakdown {
    /// The all-zero breakdown reported below the request free tier.
    pub const ZERO: CostBreakdown = CostBreakdown {
        request_charge: Cost::new(0.0),
        compute_charge: Cost::new(0.0),
        total: Cost::new(0.0),
    };

    /// Build a breakdown from unrounded charges.
    pub fn from_raw_charges(request_charge: f64, compute_charge: f64) -> Self {
        CostBreakdown {
            request_charge: Cost::rounded_to_cents(request_charge),
            compute_charge: Cost::rounded_to_cents(compute_charge),
            total: Cost::rounded_to_cents(request_charge + compute_charge),
        }
    }

    /// Select one reported field.
    pub fn project(&self, projection: Projection) -> Cost {
        match projection {
            Projection::RequestCharge => self.request_charge,
            Projection::ComputeCharge => self.compute_charge,
            Projection::Total => self.total,
        }
    }
}

/// Selects one field of a `CostBreakdown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Projection {
    RequestCharge,
    ComputeCharge,
    Total,
}

impl Projection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Projection::RequestCharge => "requestCharge",
            Projection::ComputeCharge => "computeCharge",
            Projection::Total => "total",
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Projection {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "requestCharge" => Ok(Projection::RequestCharge),
            "computeCharge" => Ok(Projection::ComputeCharge),
            "total" => Ok(Projection::Total),
            other => Err(CostError::UnknownProjection {
                projection: other.to_string(),
            }),
        }
    }
}

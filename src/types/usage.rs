use crate::error::{CostError, Result};
use serde::Deserialize;

// Raw usage figures for one estimate, as supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageInput {
    /// How many times the function is invoked over the billing period.
    pub invocation_count: u64,
    /// Estimated execution time per invocation, in milliseconds.
    pub execution_time_ms: f64,
    /// Memory allocated per invocation, in megabytes.
    pub memory_mb: u32,
}

impl UsageInput {
    pub fn new(invocation_count: u64, execution_time_ms: f64, memory_mb: u32) -> Self {
        Self {
            invocation_count,
            execution_time_ms,
            memory_mb,
        }
    }

    /// Check the field invariants. Violations are reported, never clamped.
    pub fn validate(&self) -> Result<()> {
        if !self.execution_time_ms.is_finite() {
            return Err(CostError::InvalidUsage {
                message: format!(
                    "executionTimeMs must be finite, got {}",
                    self.execution_time_ms
                ),
            });
        }
        if self.execution_time_ms < 0.0 {
            return Err(CostError::InvalidUsage {
                message: format!(
                    "executionTimeMs must be non-negative, got {}",
                    self.execution_time_ms
                ),
            });
        }
        if self.memory_mb == 0 {
            return Err(CostError::InvalidUsage {
                message: "memoryMb must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

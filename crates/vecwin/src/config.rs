//! Window configuration parameters.

/// How a window asks its backing array for more capacity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReservePolicy {
    /// Request exactly the missing headroom (`reserve_exact`).
    #[default]
    Exact,
    /// Let the array over-allocate to amortise later growth (`reserve`).
    Amortized,
}

/// Configuration for a [`MutableWindow`](crate::MutableWindow).
///
/// Fixed at window construction; all values are immutable afterwards.
#[derive(Clone, Debug)]
pub struct WindowConfig {
    /// Policy used by `reserve()` and by the growing branch of `resize()`.
    ///
    /// Default: [`ReservePolicy::Exact`].
    pub reserve_policy: ReservePolicy,
}

impl WindowConfig {
    /// Default reserve policy.
    pub const DEFAULT_RESERVE_POLICY: ReservePolicy = ReservePolicy::Exact;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            reserve_policy: Self::DEFAULT_RESERVE_POLICY,
        }
    }

    /// Replace the reserve policy.
    pub fn with_reserve_policy(mut self, reserve_policy: ReservePolicy) -> Self {
        self.reserve_policy = reserve_policy;
        self
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new()
    }
}

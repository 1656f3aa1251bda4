//! Dispatcher configuration.

use crate::dp::DpConfig;
use crate::error::KnapsackError;
use crate::greedy::GreedyConfig;

/// DP table size above which [`Strategy::Auto`] switches to greedy by
/// default.
pub const DEFAULT_MAX_TABLE_CELLS: usize = 100_000_000;

/// Which solver handles a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Exact DP, or greedy above the size limits.
    #[default]
    Auto,

    /// Exhaustive search. Exponential; small inputs only.
    BruteForce,

    /// Memoized dynamic programming.
    Exact,

    /// Value-density greedy approximation.
    Greedy,
}

/// Configuration for [`Dispatcher`](super::Dispatcher).
///
/// # Examples
///
/// ```
/// use u_knapsack::dispatch::{DispatchConfig, Strategy};
/// use u_knapsack::dp::DpConfig;
///
/// let config = DispatchConfig::default()
///     .with_greedy_threshold(5_000)
///     .with_dp(DpConfig::default().with_max_table_cells(50_000_000));
/// assert_eq!(config.strategy, Strategy::Auto);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchConfig {
    /// Solver selection policy.
    pub strategy: Strategy,

    /// Under [`Strategy::Auto`], inputs with more orders than this are
    /// solved greedily.
    pub greedy_threshold: usize,

    /// Exact solver settings. Its `max_table_cells` also acts as a second
    /// `Auto` threshold: a table above the limit routes to greedy instead
    /// of failing. Defaults to [`DEFAULT_MAX_TABLE_CELLS`].
    pub dp: DpConfig,

    /// Greedy solver settings.
    pub greedy: GreedyConfig,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            greedy_threshold: 1000,
            dp: DpConfig::default().with_max_table_cells(DEFAULT_MAX_TABLE_CELLS),
            greedy: GreedyConfig::default(),
        }
    }
}

impl DispatchConfig {
    /// Sets the solver selection policy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the order count above which `Auto` solves greedily.
    pub fn with_greedy_threshold(mut self, n: usize) -> Self {
        self.greedy_threshold = n;
        self
    }

    /// Sets the exact solver settings.
    pub fn with_dp(mut self, dp: DpConfig) -> Self {
        self.dp = dp;
        self
    }

    /// Sets the greedy solver settings.
    pub fn with_greedy(mut self, greedy: GreedyConfig) -> Self {
        self.greedy = greedy;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), KnapsackError> {
        self.dp.validate()
    }
}

//! Greedy solver configuration.

/// Ordering among orders of identical value density.
///
/// Ranking uses a stable sort, so whatever this rule leaves tied stays in
/// input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreaker {
    /// Keep the input order.
    #[default]
    PreserveOrder,

    /// Lighter orders first.
    LighterFirst,

    /// Heavier orders first.
    HeavierFirst,
}

/// Configuration for [`GreedySolver`](super::GreedySolver).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyConfig {
    /// Rule for equal-density orders.
    pub tie_breaker: TieBreaker,
}

impl GreedyConfig {
    /// Sets the rule for equal-density orders.
    pub fn with_tie_breaker(mut self, tb: TieBreaker) -> Self {
        self.tie_breaker = tb;
        self
    }
}

//! Seeded random problem instances.
//!
//! Weights are drawn uniformly from `1..=max_weight` and values from
//! `1..=max_value`; the capacity is a fixed fraction of the total weight.
//! The same configuration always yields the same instance.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::KnapsackError;
use crate::order::Order;

/// Parameters for [`generate`].
///
/// # Examples
///
/// ```
/// use u_knapsack::generate::{generate, InstanceConfig};
///
/// let config = InstanceConfig::new(50).with_seed(7);
/// let a = generate(&config).unwrap();
/// let b = generate(&config).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.orders.len(), 50);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceConfig {
    /// Number of orders.
    pub num_orders: usize,
    /// Largest order weight (inclusive, at least 1).
    pub max_weight: usize,
    /// Largest order value (inclusive, at least 1).
    pub max_value: u32,
    /// Capacity as a fraction of the total weight, in `[0, 1]`.
    pub capacity_fraction: f64,
    /// Random seed.
    pub seed: u64,
}

impl InstanceConfig {
    /// Creates a configuration for `num_orders` orders with default ranges.
    pub fn new(num_orders: usize) -> Self {
        Self {
            num_orders,
            max_weight: 50,
            max_value: 100,
            capacity_fraction: 0.5,
            seed: 42,
        }
    }

    /// Sets the largest order weight.
    pub fn with_max_weight(mut self, w: usize) -> Self {
        self.max_weight = w;
        self
    }

    /// Sets the largest order value.
    pub fn with_max_value(mut self, v: u32) -> Self {
        self.max_value = v;
        self
    }

    /// Sets the capacity as a fraction of the total weight.
    pub fn with_capacity_fraction(mut self, f: f64) -> Self {
        self.capacity_fraction = f;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    ///
    /// `num_orders * max_weight` must fit in `usize` so the total weight
    /// cannot overflow.
    pub fn validate(&self) -> Result<(), KnapsackError> {
        if self.max_weight == 0 {
            return Err(KnapsackError::InvalidConfig(
                "max_weight must be at least 1".into(),
            ));
        }
        if self.num_orders.checked_mul(self.max_weight).is_none() {
            return Err(KnapsackError::InvalidConfig(format!(
                "total weight of {} orders up to {} overflows usize",
                self.num_orders, self.max_weight
            )));
        }
        if self.max_value == 0 {
            return Err(KnapsackError::InvalidConfig(
                "max_value must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.capacity_fraction) {
            return Err(KnapsackError::InvalidConfig(format!(
                "capacity_fraction must be in [0, 1], got {}",
                self.capacity_fraction
            )));
        }
        Ok(())
    }
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self::new(100)
    }
}

/// A generated problem: orders plus a capacity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    pub orders: Vec<Order<u32>>,
    pub capacity: usize,
}

/// Generates an instance from `config`.
pub fn generate(config: &InstanceConfig) -> Result<Instance, KnapsackError> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let orders: Vec<Order<u32>> = (0..config.num_orders)
        .map(|_| {
            let weight = rng.random_range(1..=config.max_weight);
            let value = rng.random_range(1..=config.max_value);
            Order::new(value, weight)
        })
        .collect();

    let total_weight: usize = orders.iter().map(|o| o.weight).sum();
    let capacity = (total_weight as f64 * config.capacity_fraction).floor() as usize;

    Ok(Instance { orders, capacity })
}

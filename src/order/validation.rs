//! Input validation and adaptation of raw numeric records.

use super::types::{Order, Value};
use crate::error::KnapsackError;

/// An unvalidated order as it arrives from an external source, with both
/// fields as plain floating-point numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawOrder {
    pub value: f64,
    pub weight: f64,
}

impl RawOrder {
    pub fn new(value: f64, weight: f64) -> Self {
        Self { value, weight }
    }

    /// Validates this record as the order at position `index`.
    pub fn into_order(self, index: usize) -> Result<Order<f64>, KnapsackError> {
        if !self.value.is_admissible() {
            return Err(KnapsackError::InvalidValue {
                index,
                value: format!("{:?}", self.value),
            });
        }
        let weight = to_integral(self.weight).ok_or(KnapsackError::InvalidWeight {
            index,
            weight: self.weight,
        })?;
        Ok(Order::new(self.value, weight))
    }
}

/// Converts raw records into orders, failing on the first invalid one.
///
/// # Examples
///
/// ```
/// use u_knapsack::order::{parse_orders, RawOrder};
///
/// let orders = parse_orders(&[RawOrder::new(10.0, 5.0)]).unwrap();
/// assert_eq!(orders[0].weight, 5);
///
/// assert!(parse_orders(&[RawOrder::new(10.0, 2.5)]).is_err());
/// ```
pub fn parse_orders(raw: &[RawOrder]) -> Result<Vec<Order<f64>>, KnapsackError> {
    raw.iter()
        .enumerate()
        .map(|(i, r)| r.into_order(i))
        .collect()
}

/// Converts a raw capacity into an integral weight budget.
pub fn parse_capacity(raw: f64) -> Result<usize, KnapsackError> {
    to_integral(raw).ok_or(KnapsackError::InvalidCapacity(raw))
}

/// Checks every order value for admissibility.
///
/// Weights are `usize` and therefore already valid.
pub fn validate_orders<V: Value>(orders: &[Order<V>]) -> Result<(), KnapsackError> {
    match orders.iter().position(|o| !o.value.is_admissible()) {
        Some(index) => Err(KnapsackError::InvalidValue {
            index,
            value: format!("{:?}", orders[index].value),
        }),
        None => Ok(()),
    }
}

fn to_integral(x: f64) -> Option<usize> {
    if !x.is_finite() || x < 0.0 || x.fract() != 0.0 || x >= usize::MAX as f64 {
        return None;
    }
    Some(x as usize)
}

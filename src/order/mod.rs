//! Orders, values, and selections.
//!
//! An [`Order`] pairs a value with an integral weight. The value type is
//! generic over [`Value`], so callers can solve with `f64` prices or with
//! integer cents and get the result back in the same type.
//!
//! Raw numeric input (e.g. deserialized records with `f64` fields) is
//! adapted via [`parse_orders`] and [`parse_capacity`], which reject
//! negative, non-finite, and non-integral weights before any solver runs.

mod types;
mod validation;

pub use types::{Candidates, Order, Selection, Value};
pub use validation::{parse_capacity, parse_orders, validate_orders, RawOrder};

//! Core order and value types.

use crate::error::KnapsackError;

/// Numeric type usable as an order value.
///
/// Values must be comparable and cheaply copyable. Results are reported
/// in the same type as the inputs.
///
/// Built-in implementations exist for `f32`, `f64`, `u32`, `u64`,
/// `usize`, `i32` and `i64`.
pub trait Value: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// The additive identity.
    fn zero() -> Self;

    /// Adds `rhs` to `self`, or `None` if the sum is not representable.
    fn accumulate(self, rhs: Self) -> Option<Self>;

    /// Returns `true` if the value is a legal order value
    /// (non-negative, and finite for floating-point types).
    fn is_admissible(self) -> bool;

    /// Converts the value to `f64` for density ratios and logging.
    fn to_f64(self) -> f64;

    /// Returns the larger of `self` and `other`, preferring `self` on ties.
    fn max_of(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }
}

impl Value for f64 {
    fn zero() -> Self {
        0.0
    }

    fn accumulate(self, rhs: Self) -> Option<Self> {
        let sum = self + rhs;
        sum.is_finite().then_some(sum)
    }

    fn is_admissible(self) -> bool {
        self.is_finite() && self >= 0.0
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl Value for f32 {
    fn zero() -> Self {
        0.0
    }

    fn accumulate(self, rhs: Self) -> Option<Self> {
        let sum = self + rhs;
        sum.is_finite().then_some(sum)
    }

    fn is_admissible(self) -> bool {
        self.is_finite() && self >= 0.0
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

macro_rules! impl_unsigned_value {
    ($($t:ty),*) => {$(
        impl Value for $t {
            fn zero() -> Self {
                0
            }

            fn accumulate(self, rhs: Self) -> Option<Self> {
                self.checked_add(rhs)
            }

            fn is_admissible(self) -> bool {
                true
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

macro_rules! impl_signed_value {
    ($($t:ty),*) => {$(
        impl Value for $t {
            fn zero() -> Self {
                0
            }

            fn accumulate(self, rhs: Self) -> Option<Self> {
                self.checked_add(rhs)
            }

            fn is_admissible(self) -> bool {
                self >= 0
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_unsigned_value!(u32, u64, usize);
impl_signed_value!(i32, i64);

/// A candidate order: a value and an integral weight.
///
/// # Examples
///
/// ```
/// use u_knapsack::order::Order;
///
/// let order = Order::new(40.0, 4);
/// assert_eq!(order.weight, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order<V = f64> {
    /// Value gained by including the order.
    pub value: V,
    /// Weight consumed by including the order.
    pub weight: usize,
}

impl<V: Value> Order<V> {
    /// Creates an order.
    pub fn new(value: V, weight: usize) -> Self {
        Self { value, weight }
    }

    /// Value per unit of weight. Zero-weight orders have infinite density.
    pub fn density(&self) -> f64 {
        if self.weight == 0 {
            f64::INFINITY
        } else {
            self.value.to_f64() / self.weight as f64
        }
    }
}

/// A feasible subset of orders chosen by a solver.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection<V> {
    /// Total value of the chosen orders.
    pub value: V,
    /// Total weight of the chosen orders.
    pub weight: usize,
    /// Indices into the input slice, ascending.
    pub indices: Vec<usize>,
}

impl<V: Value> Selection<V> {
    /// The empty selection.
    pub fn empty() -> Self {
        Self {
            value: V::zero(),
            weight: 0,
            indices: Vec::new(),
        }
    }

    /// Builds a selection from indices into `orders`, summing value and
    /// weight. Indices are sorted.
    ///
    /// Fails with [`KnapsackError::ValueOverflow`] if the total value is not
    /// representable in `V`.
    pub fn from_indices(
        orders: &[Order<V>],
        mut indices: Vec<usize>,
    ) -> Result<Self, KnapsackError> {
        indices.sort_unstable();
        let mut value = V::zero();
        let mut weight = 0usize;
        for &i in &indices {
            value = value
                .accumulate(orders[i].value)
                .ok_or(KnapsackError::ValueOverflow)?;
            weight = weight.saturating_add(orders[i].weight);
        }
        Ok(Self {
            value,
            weight,
            indices,
        })
    }

    /// Number of chosen orders.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if nothing was chosen.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Orders split by how they relate to a capacity.
///
/// Zero-weight orders cost nothing and are always worth including; orders
/// heavier than the capacity can never be part of a feasible subset. Only
/// the remaining `fitting` orders need to be searched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    /// Indices of orders with weight 0.
    pub free: Vec<usize>,
    /// Indices of orders with `0 < weight <= capacity`, in input order.
    pub fitting: Vec<usize>,
}

impl Candidates {
    /// Partitions `orders` against `capacity`.
    pub fn new<V: Value>(orders: &[Order<V>], capacity: usize) -> Self {
        let mut candidates = Self::default();
        for (i, order) in orders.iter().enumerate() {
            if order.weight == 0 {
                candidates.free.push(i);
            } else if order.weight <= capacity {
                candidates.fitting.push(i);
            }
        }
        candidates
    }
}

use crate::math::{Point, Real};

/// The result of [`classify`](crate::query::classify): the input points split in two
/// disjoint, order-preserving sequences.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Classification {
    /// Points lying inside of at least one of the validation regions.
    pub accepted: Vec<Point<Real>>,
    /// Points lying outside of every validation region.
    pub rejected: Vec<Point<Real>>,
}

impl Classification {
    /// The total number of classified points.
    #[inline]
    pub fn total(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }

    /// `true` if no point was classified.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty() && self.rejected.is_empty()
    }

    /// The percentage of accepted points, truncated toward zero.
    ///
    /// This is zero if no point was classified.
    pub fn accepted_percent(&self) -> usize {
        Self::percent(self.accepted.len(), self.total())
    }

    /// The percentage of rejected points, truncated toward zero.
    ///
    /// This is zero if no point was classified.
    pub fn rejected_percent(&self) -> usize {
        Self::percent(self.rejected.len(), self.total())
    }

    fn percent(count: usize, total: usize) -> usize {
        if total == 0 {
            0
        } else {
            count * 100 / total
        }
    }
}

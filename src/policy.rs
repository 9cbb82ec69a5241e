//! Capacity tunables for elastic storage.
//!
//! Elastic deques double their buffer when a push finds it full and halve it
//! when pops leave it underfull. The three knobs governing that behaviour
//! live here as a validated [`CapacityPolicy`] rather than being scattered
//! through the growth code, and invalid combinations are rejected up front
//! with a [`PolicyError`].

use thiserror::Error;

/// Slot count elastic deques allocate up front, and the capacity
/// [`clear`](crate::RingDeque::clear) restores.
pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

/// Capacity floor below which shrinking never fires.
pub const DEFAULT_MIN_CAPACITY: usize = 8;

/// Percentage of free slots a buffer must strictly exceed before it halves.
pub const DEFAULT_MAX_FREE_PERCENT: usize = 75;

/// A [`CapacityPolicy`] that cannot work.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PolicyError {
    /// The shrink threshold must lie strictly between 50 and 100 percent.
    ///
    /// At 50 or below, a deque hovering around half full would grow on a
    /// push and halve again on the next pop, reallocating on every
    /// alternation. At 100, no amount of free space could ever exceed the
    /// threshold and shrinking would be unreachable.
    #[error("shrink threshold must be strictly between 50 and 100 percent, got {percent}")]
    ThresholdOutOfRange { percent: usize },
    /// The capacity floor must hold at least one slot.
    #[error("minimum capacity must be at least 1 slot")]
    ZeroMinCapacity,
    /// The initial capacity may not start below the shrink floor.
    #[error("initial capacity {initial} is below the minimum capacity {min}")]
    InitialBelowMinimum { initial: usize, min: usize },
}

/// Tunables for elastic (self-managed) storage.
///
/// | Knob | Default | Meaning |
/// |------|---------|---------|
/// | `initial_capacity` | 8 | slots allocated up front and restored by `clear` |
/// | `min_capacity` | 8 | floor below which shrink never fires |
/// | `max_free_percent` | 75 | shrink once free slots strictly exceed this percentage |
///
/// # Examples
///
/// ```
/// use ring_deque::{CapacityPolicy, PolicyError};
///
/// let policy = CapacityPolicy::new(32, 16, 80)?;
/// assert_eq!(policy.initial_capacity(), 32);
///
/// assert_eq!(
///     CapacityPolicy::new(32, 16, 50),
///     Err(PolicyError::ThresholdOutOfRange { percent: 50 }),
/// );
/// # Ok::<(), PolicyError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityPolicy {
    initial_capacity: usize,
    min_capacity: usize,
    max_free_percent: usize,
}

impl CapacityPolicy {
    /// Builds a policy, rejecting combinations that cannot work.
    ///
    /// `max_free_percent` must be strictly between 50 and 100,
    /// `min_capacity` must be at least 1, and `initial_capacity` must not
    /// start below `min_capacity`.
    pub fn new(
        initial_capacity: usize,
        min_capacity: usize,
        max_free_percent: usize,
    ) -> Result<Self, PolicyError> {
        if !(51..=99).contains(&max_free_percent) {
            return Err(PolicyError::ThresholdOutOfRange {
                percent: max_free_percent,
            });
        }
        if min_capacity == 0 {
            return Err(PolicyError::ZeroMinCapacity);
        }
        if initial_capacity < min_capacity {
            return Err(PolicyError::InitialBelowMinimum {
                initial: initial_capacity,
                min: min_capacity,
            });
        }
        Ok(Self {
            initial_capacity,
            min_capacity,
            max_free_percent,
        })
    }

    /// Slot count allocated up front and restored by `clear`.
    #[inline(always)]
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Floor below which shrinking never fires.
    #[inline(always)]
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// Free-slot percentage a buffer must strictly exceed before halving.
    #[inline(always)]
    pub fn max_free_percent(&self) -> usize {
        self.max_free_percent
    }

    /// True when a buffer holding `len` of `capacity` slots is underfull
    /// enough to halve: above the floor, with free slots strictly over the
    /// threshold.
    ///
    /// The threshold sitting strictly above 50 percent is what guarantees
    /// `len` fits below the halved capacity whenever this returns true.
    #[inline(always)]
    pub(crate) fn should_shrink(&self, len: usize, capacity: usize) -> bool {
        capacity > self.min_capacity
            && (capacity - len) as u128 * 100 / capacity as u128 > self.max_free_percent as u128
    }
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            min_capacity: DEFAULT_MIN_CAPACITY,
            max_free_percent: DEFAULT_MAX_FREE_PERCENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_matches_constants() {
        let policy = CapacityPolicy::default();
        assert_eq!(policy.initial_capacity(), DEFAULT_INITIAL_CAPACITY);
        assert_eq!(policy.min_capacity(), DEFAULT_MIN_CAPACITY);
        assert_eq!(policy.max_free_percent(), DEFAULT_MAX_FREE_PERCENT);
        assert_eq!(CapacityPolicy::new(8, 8, 75), Ok(CapacityPolicy::default()));
    }

    #[test]
    fn test_threshold_must_sit_strictly_between_50_and_100() {
        for percent in [0, 49, 50, 100, 101, 400] {
            assert_eq!(
                CapacityPolicy::new(8, 8, percent),
                Err(PolicyError::ThresholdOutOfRange { percent }),
            );
        }
        assert!(CapacityPolicy::new(8, 8, 51).is_ok());
        assert!(CapacityPolicy::new(8, 8, 99).is_ok());
    }

    #[test]
    fn test_floor_must_hold_at_least_one_slot() {
        assert_eq!(CapacityPolicy::new(8, 0, 75), Err(PolicyError::ZeroMinCapacity));
        assert!(CapacityPolicy::new(8, 1, 75).is_ok());
    }

    #[test]
    fn test_initial_capacity_may_not_undercut_the_floor() {
        assert_eq!(
            CapacityPolicy::new(4, 8, 75),
            Err(PolicyError::InitialBelowMinimum { initial: 4, min: 8 }),
        );
        assert!(CapacityPolicy::new(8, 8, 75).is_ok());
        assert!(CapacityPolicy::new(64, 8, 75).is_ok());
    }

    #[test]
    fn test_should_shrink_requires_strictly_exceeding_the_threshold() {
        let policy = CapacityPolicy::default();
        // 13 of 16 slots free is 81%, over the default 75.
        assert!(policy.should_shrink(3, 16));
        // 12 of 16 free is exactly 75%: not strictly over.
        assert!(!policy.should_shrink(4, 16));
        assert!(!policy.should_shrink(8, 16));
        assert!(!policy.should_shrink(16, 16));
    }

    #[test]
    fn test_should_shrink_respects_the_floor() {
        let policy = CapacityPolicy::default();
        // Empty but already at the floor.
        assert!(!policy.should_shrink(0, 8));
        assert!(policy.should_shrink(0, 16));

        let tall_floor = CapacityPolicy::new(64, 64, 75).unwrap();
        assert!(!tall_floor.should_shrink(0, 64));
        assert!(tall_floor.should_shrink(0, 128));
    }

    #[test]
    fn test_should_shrink_handles_extreme_capacities() {
        let policy = CapacityPolicy::default();
        // Free counts this large cannot be scaled by 100 in usize.
        assert!(policy.should_shrink(0, usize::MAX));
        assert!(policy.should_shrink(usize::MAX / 100, usize::MAX));
        assert!(!policy.should_shrink(usize::MAX, usize::MAX));
    }

    #[test]
    fn test_error_messages_name_the_offending_values() {
        let error = CapacityPolicy::new(8, 8, 50).unwrap_err();
        assert_eq!(
            error.to_string(),
            "shrink threshold must be strictly between 50 and 100 percent, got 50"
        );
        let error = CapacityPolicy::new(2, 8, 75).unwrap_err();
        assert_eq!(
            error.to_string(),
            "initial capacity 2 is below the minimum capacity 8"
        );
    }
}

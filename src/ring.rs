//! Circular slot arithmetic.
//!
//! Every translation between logical positions and physical slots in this
//! crate funnels through [`SlotRing`]. The ring resolves arbitrary signed
//! offsets with Euclidean modulo, so negative offsets and offsets past the
//! end both land back inside the buffer; the stepping and distance helpers
//! are thin layers over that single operation.

/// Index arithmetic over a ring of storage slots.
///
/// A `SlotRing` is just a slot count; it is `Copy` and rebuilt from the
/// current capacity wherever it is needed, so it can never go stale across
/// a reallocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SlotRing {
    slots: usize,
}

impl SlotRing {
    /// A ring over `slots` positions.
    ///
    /// `slots` must be non-zero; degenerate capacity-0 deques never perform
    /// slot arithmetic.
    #[inline(always)]
    pub(crate) fn new(slots: usize) -> Self {
        debug_assert!(slots > 0, "slot ring over zero slots");
        Self { slots }
    }

    /// Resolves a signed slot offset to a physical slot in `[0, slots)`.
    ///
    /// Euclidean modulo: `wrap(-1)` is the last slot, `wrap(slots)` is the
    /// first, and any multiple of `slots` added to an offset resolves to the
    /// same slot.
    #[inline(always)]
    pub(crate) fn wrap(self, offset: isize) -> usize {
        offset.rem_euclid(self.slots as isize) as usize
    }

    /// Number of slots walked moving forward from `from` to `to`.
    #[inline(always)]
    pub(crate) fn forward_distance(self, from: usize, to: usize) -> usize {
        self.wrap(to as isize - from as isize)
    }

    /// The slot after `slot`, wrapping at the ring boundary.
    #[inline(always)]
    pub(crate) fn step_forward(self, slot: usize) -> usize {
        self.advance(slot, 1)
    }

    /// The slot before `slot`, wrapping at the ring boundary.
    #[inline(always)]
    pub(crate) fn step_back(self, slot: usize) -> usize {
        self.retreat(slot, 1)
    }

    /// `slot` moved `by` positions forward.
    #[inline(always)]
    pub(crate) fn advance(self, slot: usize, by: usize) -> usize {
        debug_assert!(slot < self.slots);
        self.wrap(slot as isize + by as isize)
    }

    /// `slot` moved `by` positions backward.
    #[inline(always)]
    pub(crate) fn retreat(self, slot: usize, by: usize) -> usize {
        debug_assert!(slot < self.slots);
        self.wrap(slot as isize - by as isize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_resolves_negative_and_overflowing_offsets() {
        let ring = SlotRing::new(8);
        assert_eq!(ring.wrap(0), 0);
        assert_eq!(ring.wrap(7), 7);
        assert_eq!(ring.wrap(8), 0);
        assert_eq!(ring.wrap(23), 7);
        assert_eq!(ring.wrap(-1), 7);
        assert_eq!(ring.wrap(-8), 0);
        assert_eq!(ring.wrap(-9), 7);
        assert_eq!(ring.wrap(-23), 1);
    }

    #[test]
    fn test_wrap_handles_non_power_of_two_rings() {
        let ring = SlotRing::new(5);
        assert_eq!(ring.wrap(5), 0);
        assert_eq!(ring.wrap(12), 2);
        assert_eq!(ring.wrap(-2), 3);
        assert_eq!(ring.wrap(-234_233), ((-234_233i64).rem_euclid(5)) as usize);
    }

    #[test]
    fn test_stepping_wraps_both_boundaries() {
        let ring = SlotRing::new(4);
        assert_eq!(ring.step_forward(2), 3);
        assert_eq!(ring.step_forward(3), 0);
        assert_eq!(ring.step_back(1), 0);
        assert_eq!(ring.step_back(0), 3);
    }

    #[test]
    fn test_forward_distance_counts_through_the_seam() {
        let ring = SlotRing::new(8);
        assert_eq!(ring.forward_distance(0, 0), 0);
        assert_eq!(ring.forward_distance(0, 7), 7);
        assert_eq!(ring.forward_distance(6, 2), 4);
        assert_eq!(ring.forward_distance(2, 6), 4);
        assert_eq!(ring.forward_distance(7, 0), 1);
    }

    #[test]
    fn test_advance_and_retreat_are_inverse() {
        let ring = SlotRing::new(8);
        for slot in 0..8 {
            for by in 0..20 {
                assert_eq!(ring.retreat(ring.advance(slot, by), by), slot);
            }
        }
    }

    #[test]
    fn test_advance_by_forward_distance_reaches_target() {
        let ring = SlotRing::new(6);
        for from in 0..6 {
            for to in 0..6 {
                assert_eq!(ring.advance(from, ring.forward_distance(from, to)), to);
            }
        }
    }
}

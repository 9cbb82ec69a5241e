//! Backing storage for the deque.
//!
//! A deque runs over one of two slot buffers: a caller-supplied region it
//! merely borrows, or an owned allocation it may double and halve. Both are
//! plain `[MaybeUninit<T>]` slot arrays; which slots hold live items is the
//! deque's bookkeeping, never the buffer's, so capacity changes move raw
//! slots without constructing or dropping any item.

use core::mem::{self, MaybeUninit};
use core::ptr;

use crate::policy::CapacityPolicy;

/// Allocates `count` uninitialized slots.
///
/// Zero-size items cannot partition a buffer into slots; such a buffer stays
/// at capacity 0 and the deque built over it reads as permanently empty.
fn alloc_slots<T>(count: usize) -> Vec<MaybeUninit<T>> {
    if mem::size_of::<T>() == 0 {
        return Vec::new();
    }
    let mut slots = Vec::with_capacity(count);
    // SAFETY: `MaybeUninit` slots require no initialization, and
    // `with_capacity` reserved room for all of them.
    unsafe { slots.set_len(count) };
    slots
}

/// Moves `len` slots from `src` to `dst` inside `slots`. The ranges may
/// overlap; the copy is memmove-like.
///
/// Only raw slot contents move. The caller owns the liveness bookkeeping for
/// both ranges.
pub(crate) fn move_slots<T>(slots: &mut [MaybeUninit<T>], src: usize, dst: usize, len: usize) {
    assert!(src + len <= slots.len());
    assert!(dst + len <= slots.len());
    // SAFETY: both ranges were just bounds-checked against the slice.
    unsafe {
        let base = slots.as_mut_ptr();
        ptr::copy(base.add(src), base.add(dst), len);
    }
}

/// Owned, reallocatable slot buffer for elastic deques.
///
/// The `Vec` serves purely as an allocation: its length always equals the
/// slot capacity, so growing and shrinking are length adjustments plus a
/// reallocation, and reallocation preserves every slot at its old offset.
pub(crate) struct ElasticBuf<T> {
    slots: Vec<MaybeUninit<T>>,
    policy: CapacityPolicy,
}

impl<T> ElasticBuf<T> {
    pub(crate) fn new(policy: CapacityPolicy, capacity: usize) -> Self {
        Self {
            slots: alloc_slots(capacity),
            policy,
        }
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline(always)]
    pub(crate) fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    #[inline(always)]
    pub(crate) fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        &mut self.slots
    }

    /// Doubles the slot count. Existing slots keep their offsets.
    pub(crate) fn grow_double(&mut self) {
        let old_capacity = self.slots.len();
        self.slots.reserve_exact(old_capacity);
        // SAFETY: the reserve above guarantees room; the tail slots are
        // uninitialized, which `MaybeUninit` permits.
        unsafe { self.slots.set_len(old_capacity * 2) };
    }

    /// Cuts the buffer down to `new_capacity` slots and returns the excess
    /// to the allocator.
    ///
    /// Callers must already have relocated every live slot below the new
    /// boundary.
    pub(crate) fn shrink_to(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity <= self.slots.len());
        self.slots.truncate(new_capacity);
        self.slots.shrink_to_fit();
    }

    /// Drops the current allocation and starts over at the policy's initial
    /// capacity, skipping the round trip when already there.
    pub(crate) fn reset(&mut self) {
        if self.slots.len() != self.policy.initial_capacity() {
            self.slots = alloc_slots(self.policy.initial_capacity());
        }
    }
}

/// The two storage modes of a deque.
pub(crate) enum Storage<'buf, T> {
    /// A borrowed caller-supplied region. Its capacity is a hard ceiling;
    /// the deque never reallocates or frees it.
    Fixed(&'buf mut [MaybeUninit<T>]),
    /// An owned buffer the deque doubles and halves as it sees fit.
    Elastic(ElasticBuf<T>),
}

impl<'buf, T> Storage<'buf, T> {
    /// Adopts a caller-supplied region.
    ///
    /// Regions of zero-size items are normalized to empty up front, so every
    /// degenerate deque reads as capacity 0 regardless of how long a slice
    /// the caller handed over.
    pub(crate) fn fixed(region: &'buf mut [MaybeUninit<T>]) -> Self {
        if mem::size_of::<T>() == 0 {
            Storage::Fixed(&mut [])
        } else {
            Storage::Fixed(region)
        }
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        match self {
            Storage::Fixed(slots) => slots.len(),
            Storage::Elastic(buf) => buf.capacity(),
        }
    }

    #[inline(always)]
    pub(crate) fn is_elastic(&self) -> bool {
        matches!(self, Storage::Elastic(_))
    }

    #[inline(always)]
    pub(crate) fn slots(&self) -> &[MaybeUninit<T>] {
        match self {
            Storage::Fixed(slots) => slots,
            Storage::Elastic(buf) => &buf.slots,
        }
    }

    #[inline(always)]
    pub(crate) fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        match self {
            Storage::Fixed(slots) => slots,
            Storage::Elastic(buf) => &mut buf.slots,
        }
    }

    /// The elastic buffer, or `None` for fixed storage. Capacity changes go
    /// through here so fixed regions can never be touched by them.
    #[inline(always)]
    pub(crate) fn elastic_mut(&mut self) -> Option<&mut ElasticBuf<T>> {
        match self {
            Storage::Fixed(_) => None,
            Storage::Elastic(buf) => Some(buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_items_get_no_slots() {
        let buf: ElasticBuf<()> = ElasticBuf::new(CapacityPolicy::default(), 8);
        assert_eq!(buf.capacity(), 0);

        let mut region = [MaybeUninit::<()>::uninit(); 16];
        let storage = Storage::fixed(&mut region);
        assert_eq!(storage.capacity(), 0);
    }

    #[test]
    fn test_grow_doubles_and_shrink_halves() {
        let mut buf: ElasticBuf<u32> = ElasticBuf::new(CapacityPolicy::default(), 8);
        assert_eq!(buf.capacity(), 8);
        buf.grow_double();
        assert_eq!(buf.capacity(), 16);
        buf.grow_double();
        assert_eq!(buf.capacity(), 32);
        buf.shrink_to(16);
        assert_eq!(buf.capacity(), 16);
        buf.reset();
        assert_eq!(buf.capacity(), 8);
    }

    #[test]
    fn test_grow_preserves_slot_contents_at_their_offsets() {
        let mut buf: ElasticBuf<u32> = ElasticBuf::new(CapacityPolicy::default(), 8);
        for (i, slot) in buf.slots_mut().iter_mut().enumerate() {
            *slot = MaybeUninit::new(i as u32 * 10);
        }
        buf.grow_double();
        for (i, slot) in buf.slots_mut()[..8].iter_mut().enumerate() {
            // SAFETY: the first eight slots were written above.
            assert_eq!(unsafe { slot.assume_init_read() }, i as u32 * 10);
        }
    }

    #[test]
    fn test_move_slots_handles_overlapping_ranges() {
        let mut slots: Vec<MaybeUninit<u32>> = (0..8).map(MaybeUninit::new).collect();
        // Source [2, 6) and destination [0, 4) share [2, 4).
        move_slots(&mut slots, 2, 0, 4);
        for (i, slot) in slots[..4].iter().enumerate() {
            // SAFETY: every slot started initialized.
            assert_eq!(unsafe { slot.assume_init_read() }, i as u32 + 2);
        }
    }
}

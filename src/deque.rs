//! A double-ended queue over a circular slot buffer.
//!
//! Items live in a contiguous run of fixed-size slots that wraps at the
//! buffer boundary. The run is described entirely by the physical slots of
//! its two ends; length is derived as the forward circular distance between
//! them, so every query is O(1) and an empty deque is the absence of ends
//! rather than a sentinel encoding.
//!
//! Storage comes in two modes. An *elastic* deque owns its buffer and keeps
//! capacity proportional to load: a push into a full buffer doubles it, and
//! pops that leave it underfull past the policy threshold halve it, down to
//! a floor. A *fixed* deque borrows a caller-supplied region instead; its
//! capacity is a hard ceiling and a push into a full buffer hands the value
//! back rather than reallocating.
//!
//! Reallocation preserves slots at their old offsets, so only a wrapped run
//! needs mending afterward: growth moves the tail segment to the top of the
//! doubled buffer, and shrink slides it down flush with the halved boundary.
//! The shrink threshold sitting strictly above 50 percent guarantees the
//! surviving run always fits below that boundary.

use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem::{self, MaybeUninit};
use core::ops::{Index, IndexMut};

use crate::policy::CapacityPolicy;
use crate::ring::SlotRing;
use crate::storage::{move_slots, ElasticBuf, Storage};

/// Physical slots of the logical first and last items.
///
/// The pair only exists while the deque holds items; [`RingDeque`] carries it
/// as `Option<Ends>`, so emptiness can never fall out of sync with the end
/// positions.
#[derive(Clone, Copy, Debug)]
struct Ends {
    first: usize,
    last: usize,
}

/// A double-ended queue over a circular slot buffer.
///
/// # Overview
/// Pushes and pops at both ends, plus read and write access anywhere in
/// between, all O(1). Indexes are signed and wrap by Euclidean modulo over
/// the current length: `-1` is the back item, and adding any multiple of
/// `len()` to an index resolves to the same item. Out of range therefore
/// does not exist; indexed access only fails on an empty deque.
///
/// [`new`], [`with_capacity`] and [`with_policy`] build *elastic* deques
/// that own their buffer and resize it per [`CapacityPolicy`].
/// [`with_buffer`] builds a *fixed* deque over a borrowed region: nothing is
/// ever allocated, and pushing into a full buffer fails with the value
/// handed back.
///
/// # Invariants
/// * `ends` is `Some` exactly when the deque is non-empty.
/// * The run between `first` and `last` (inclusive, wrapping) holds
///   initialized items; every other slot is free.
/// * Zero-size item types degenerate to a permanently empty capacity-0
///   deque, whichever storage mode was requested.
///
/// # Examples
/// ```
/// use ring_deque::RingDeque;
///
/// let mut recent: RingDeque<u32> = RingDeque::new();
/// recent.push_back(1);
/// recent.push_back(2);
/// recent.push_front(0); // [0, 1, 2]
/// assert_eq!(recent.len(), 3);
/// assert_eq!(recent[0], 0);
/// assert_eq!(recent[-1], 2);
/// assert_eq!(recent.pop_front(), Some(0));
/// assert_eq!(recent.pop_back(), Some(2));
/// ```
///
/// [`new`]: RingDeque::new
/// [`with_capacity`]: RingDeque::with_capacity
/// [`with_policy`]: RingDeque::with_policy
/// [`with_buffer`]: RingDeque::with_buffer
pub struct RingDeque<'buf, T> {
    storage: Storage<'buf, T>,
    ends: Option<Ends>,
}

impl<'buf, T> RingDeque<'buf, T> {
    /// Creates an elastic deque with the default [`CapacityPolicy`].
    pub fn new() -> Self {
        Self::with_policy(CapacityPolicy::default())
    }

    /// Creates an elastic deque starting at `capacity` slots, raised to the
    /// default floor if below it.
    pub fn with_capacity(capacity: usize) -> Self {
        let policy = CapacityPolicy::default();
        let capacity = capacity.max(policy.min_capacity());
        Self {
            storage: Storage::Elastic(ElasticBuf::new(policy, capacity)),
            ends: None,
        }
    }

    /// Creates an elastic deque governed by `policy`, starting at its
    /// initial capacity.
    pub fn with_policy(policy: CapacityPolicy) -> Self {
        let capacity = policy.initial_capacity();
        Self {
            storage: Storage::Elastic(ElasticBuf::new(policy, capacity)),
            ends: None,
        }
    }

    /// Creates a fixed deque over a caller-supplied region.
    ///
    /// The deque borrows the region for its whole lifetime and never
    /// reallocates or frees it; the region's length is the capacity ceiling.
    /// Items still held when the deque drops are dropped in place, but the
    /// region itself stays with the caller.
    ///
    /// # Examples
    /// ```
    /// use core::mem::MaybeUninit;
    /// use ring_deque::RingDeque;
    ///
    /// let mut region = [MaybeUninit::<u32>::uninit(); 4];
    /// let mut latest = RingDeque::with_buffer(&mut region);
    /// for reading in [270, 280, 290, 300] {
    ///     latest.push_back(reading);
    /// }
    /// assert_eq!(latest.try_push_back(310), Err(310));
    /// assert_eq!(latest.pop_front(), Some(270));
    /// assert!(latest.try_push_back(310).is_ok());
    /// ```
    pub fn with_buffer(region: &'buf mut [MaybeUninit<T>]) -> Self {
        Self {
            storage: Storage::fixed(region),
            ends: None,
        }
    }

    // --- Inspection ---

    /// Number of items currently held.
    #[inline(always)]
    pub fn len(&self) -> usize {
        match self.ends {
            None => 0,
            Some(Ends { first, last }) => self.ring().forward_distance(first, last) + 1,
        }
    }

    /// True when the deque holds no items.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.ends.is_none()
    }

    /// Total slot count of the backing storage.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// True when every slot holds an item.
    ///
    /// A degenerate capacity-0 deque is both empty and full.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Width of one slot in bytes.
    #[inline(always)]
    pub const fn item_size(&self) -> usize {
        mem::size_of::<T>()
    }

    /// True when the deque owns its storage and may resize it.
    #[inline(always)]
    pub fn is_elastic(&self) -> bool {
        self.storage.is_elastic()
    }

    /// True when the next push can succeed.
    ///
    /// Elastic deques grow on demand, so this only reports `false` for a
    /// full fixed deque or a degenerate capacity-0 one. [`try_push_front`]
    /// and [`try_push_back`] fail exactly when this is `false`.
    ///
    /// [`try_push_front`]: RingDeque::try_push_front
    /// [`try_push_back`]: RingDeque::try_push_back
    #[inline(always)]
    pub fn can_push(&self) -> bool {
        self.capacity() > 0 && (!self.is_full() || self.is_elastic())
    }

    /// True when the deque has an item to pop.
    #[inline(always)]
    pub fn can_pop(&self) -> bool {
        !self.is_empty()
    }

    // --- Pushes ---

    /// Inserts `value` before the first item.
    ///
    /// Fails with `Err(value)` when the deque cannot take another item (a
    /// full fixed deque, or a degenerate capacity-0 one), leaving the deque
    /// untouched. A full elastic deque grows instead.
    pub fn try_push_front(&mut self, value: T) -> Result<(), T> {
        if !self.can_push() {
            return Err(value);
        }
        if self.is_full() {
            // `can_push` held, so the deque is elastic.
            self.grow_for_push();
        }
        match self.ends {
            None => {
                self.put_slot(0, value);
                self.ends = Some(Ends { first: 0, last: 0 });
            }
            Some(ends) => {
                let slot = self.ring().step_back(ends.first);
                self.put_slot(slot, value);
                self.ends = Some(Ends { first: slot, ..ends });
            }
        }
        Ok(())
    }

    /// Inserts `value` after the last item.
    ///
    /// Fails with `Err(value)` when the deque cannot take another item (a
    /// full fixed deque, or a degenerate capacity-0 one), leaving the deque
    /// untouched. A full elastic deque grows instead.
    ///
    /// # Examples
    /// ```
    /// use ring_deque::RingDeque;
    ///
    /// let mut window: RingDeque<i32> = RingDeque::with_capacity(8);
    /// for i in 0..9 {
    ///     assert_eq!(window.try_push_back(i), Ok(()));
    /// }
    /// // The ninth push doubled the owned buffer.
    /// assert_eq!(window.capacity(), 16);
    /// ```
    pub fn try_push_back(&mut self, value: T) -> Result<(), T> {
        if !self.can_push() {
            return Err(value);
        }
        if self.is_full() {
            // `can_push` held, so the deque is elastic.
            self.grow_for_push();
        }
        match self.ends {
            None => {
                self.put_slot(0, value);
                self.ends = Some(Ends { first: 0, last: 0 });
            }
            Some(ends) => {
                let slot = self.ring().step_forward(ends.last);
                self.put_slot(slot, value);
                self.ends = Some(Ends { last: slot, ..ends });
            }
        }
        Ok(())
    }

    /// Inserts `value` before the first item.
    ///
    /// # Panics
    /// Panics when the deque cannot take another item; see
    /// [`try_push_front`](RingDeque::try_push_front). Never panics on an
    /// elastic deque.
    pub fn push_front(&mut self, value: T) {
        if self.try_push_front(value).is_err() {
            panic!("deque is full");
        }
    }

    /// Inserts `value` after the last item.
    ///
    /// # Panics
    /// Panics when the deque cannot take another item; see
    /// [`try_push_back`](RingDeque::try_push_back). Never panics on an
    /// elastic deque.
    pub fn push_back(&mut self, value: T) {
        if self.try_push_back(value).is_err() {
            panic!("deque is full");
        }
    }

    // --- Pops ---

    /// Removes and returns the first item, or `None` when empty.
    ///
    /// On an elastic deque this may halve the buffer afterward; the value is
    /// read out before any relocation happens.
    pub fn pop_front(&mut self) -> Option<T> {
        let value = self.take_front()?;
        self.shrink_after_removal();
        Some(value)
    }

    /// Removes and returns the last item, or `None` when empty.
    ///
    /// On an elastic deque this may halve the buffer afterward; the value is
    /// read out before any relocation happens.
    pub fn pop_back(&mut self) -> Option<T> {
        let value = self.take_back()?;
        self.shrink_after_removal();
        Some(value)
    }

    /// `pop_front` without the shrink housekeeping. Drain paths use it so a
    /// buffer being torn down is not also reallocated along the way.
    fn take_front(&mut self) -> Option<T> {
        let Ends { first, last } = self.ends?;
        // SAFETY: `first` holds the front item; it leaves the run below.
        let value = unsafe { self.take_slot(first) };
        self.ends = if first == last {
            None
        } else {
            Some(Ends {
                first: self.ring().step_forward(first),
                last,
            })
        };
        Some(value)
    }

    /// `pop_back` without the shrink housekeeping.
    fn take_back(&mut self) -> Option<T> {
        let Ends { first, last } = self.ends?;
        // SAFETY: `last` holds the back item; it leaves the run below.
        let value = unsafe { self.take_slot(last) };
        self.ends = if first == last {
            None
        } else {
            Some(Ends {
                first,
                last: self.ring().step_back(last),
            })
        };
        Some(value)
    }

    // --- Indexed access ---

    /// Borrows the item `index` positions from the front.
    ///
    /// Indexes wrap by Euclidean modulo over the current length: `get(-1)`
    /// is the back item and `get(i + k * len)` is `get(i)` for any `k`.
    /// Returns `None` only when the deque is empty.
    ///
    /// # Examples
    /// ```
    /// use ring_deque::RingDeque;
    ///
    /// let window: RingDeque<char> = "abc".chars().collect();
    /// assert_eq!(window.get(0), Some(&'a'));
    /// assert_eq!(window.get(-1), Some(&'c'));
    /// assert_eq!(window.get(4), Some(&'b'));
    ///
    /// let empty: RingDeque<char> = RingDeque::new();
    /// assert_eq!(empty.get(0), None);
    /// ```
    pub fn get(&self, index: isize) -> Option<&T> {
        let slot = self.locate(index)?;
        // SAFETY: `locate` only yields slots inside the run.
        Some(unsafe { self.slot_ref(slot) })
    }

    /// Mutably borrows the item `index` positions from the front; same
    /// wrapping as [`get`](RingDeque::get).
    pub fn get_mut(&mut self, index: isize) -> Option<&mut T> {
        let slot = self.locate(index)?;
        // SAFETY: `locate` only yields slots inside the run.
        Some(unsafe { self.slot_mut(slot) })
    }

    /// Copies the item out without removing it; same wrapping as
    /// [`get`](RingDeque::get).
    pub fn get_copied(&self, index: isize) -> Option<T>
    where
        T: Copy,
    {
        self.get(index).copied()
    }

    /// Overwrites the item `index` positions from the front and returns the
    /// item it displaced, or `Err(value)` when the deque is empty. Never
    /// changes length or capacity.
    ///
    /// # Examples
    /// ```
    /// use ring_deque::RingDeque;
    ///
    /// let mut scores: RingDeque<u32> = [10, 20, 30].into_iter().collect();
    /// assert_eq!(scores.replace(-1, 35), Ok(30));
    /// assert_eq!(scores.replace(3, 15), Ok(10)); // wraps to the front
    /// assert_eq!(scores[0], 15);
    /// ```
    pub fn replace(&mut self, index: isize, value: T) -> Result<T, T> {
        match self.locate(index) {
            None => Err(value),
            // SAFETY: `locate` only yields slots inside the run.
            Some(slot) => Ok(mem::replace(unsafe { self.slot_mut(slot) }, value)),
        }
    }

    /// Borrows the first item, or `None` when empty.
    #[inline(always)]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Mutably borrows the first item, or `None` when empty.
    #[inline(always)]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Borrows the last item, or `None` when empty.
    #[inline(always)]
    pub fn back(&self) -> Option<&T> {
        self.get(-1)
    }

    /// Mutably borrows the last item, or `None` when empty.
    #[inline(always)]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(-1)
    }

    // --- Bulk removal ---

    /// Drops `count` items off the front, or every item when `count` meets
    /// or exceeds the length. Elastic storage may shrink afterward.
    ///
    /// # Examples
    /// ```
    /// use ring_deque::RingDeque;
    ///
    /// let mut log: RingDeque<u32> = (0..6).collect();
    /// log.discard_front(2);
    /// assert!(log.iter().eq(&[2, 3, 4, 5]));
    /// log.discard_front(10);
    /// assert!(log.is_empty());
    /// ```
    pub fn discard_front(&mut self, count: usize) {
        if count >= self.len() {
            self.clear();
            return;
        }
        if let Some(ends) = self.ends {
            let ring = self.ring();
            let mut slot = ends.first;
            for _ in 0..count {
                // SAFETY: still inside the run; the slot leaves the run when
                // `first` moves past it below.
                unsafe { self.drop_slot(slot) };
                slot = ring.step_forward(slot);
            }
            self.ends = Some(Ends {
                first: slot,
                ..ends
            });
            self.shrink_after_removal();
        }
    }

    /// Drops `count` items off the back, or every item when `count` meets
    /// or exceeds the length. Elastic storage may shrink afterward.
    pub fn discard_back(&mut self, count: usize) {
        if count >= self.len() {
            self.clear();
            return;
        }
        if let Some(ends) = self.ends {
            let ring = self.ring();
            let mut slot = ends.last;
            for _ in 0..count {
                // SAFETY: still inside the run; the slot leaves the run when
                // `last` moves past it below.
                unsafe { self.drop_slot(slot) };
                slot = ring.step_back(slot);
            }
            self.ends = Some(Ends { last: slot, ..ends });
            self.shrink_after_removal();
        }
    }

    /// Removes every item.
    ///
    /// Elastic storage returns to its initial capacity, so an emptied deque
    /// does not pin its high-water allocation; fixed storage is untouched.
    ///
    /// # Examples
    /// ```
    /// use ring_deque::RingDeque;
    ///
    /// let mut deque: RingDeque<u32> = (0..100).collect();
    /// assert_eq!(deque.capacity(), 128);
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), 8);
    /// ```
    pub fn clear(&mut self) {
        self.drop_items();
        self.ends = None;
        if let Some(buf) = self.storage.elastic_mut() {
            buf.reset();
        }
    }

    // --- Iteration ---

    /// Visits each item from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        let (front, back, remaining) = match self.ends {
            None => (0, 0, 0),
            Some(Ends { first, last }) => (first, last, self.len()),
        };
        Iter {
            slots: self.storage.slots(),
            ring: SlotRing::new(self.capacity().max(1)),
            front,
            back,
            remaining,
        }
    }

    /// Visits each item from front to back with mutable access.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (front, back, remaining) = match self.ends {
            None => (0, 0, 0),
            Some(Ends { first, last }) => (first, last, self.len()),
        };
        IterMut {
            slots: self.storage.slots_mut().as_mut_ptr(),
            ring: SlotRing::new(self.capacity().max(1)),
            front,
            back,
            remaining,
            _marker: PhantomData,
        }
    }

    // --- Slot plumbing ---

    /// Slot arithmetic over the current capacity. Only called while the
    /// deque is non-degenerate; holding `ends == Some(_)` implies that.
    #[inline(always)]
    fn ring(&self) -> SlotRing {
        SlotRing::new(self.capacity())
    }

    /// Resolves a signed logical index to a physical slot, or `None` when
    /// empty. All wrapping of user-facing indexes happens here.
    fn locate(&self, index: isize) -> Option<usize> {
        let Ends { first, .. } = self.ends?;
        let len = self.len();
        let logical = index.rem_euclid(len as isize) as usize;
        Some(self.ring().advance(first, logical))
    }

    /// # Safety
    /// `slot` must lie inside the current run.
    #[inline(always)]
    unsafe fn slot_ref(&self, slot: usize) -> &T {
        unsafe { self.storage.slots()[slot].assume_init_ref() }
    }

    /// # Safety
    /// `slot` must lie inside the current run.
    #[inline(always)]
    unsafe fn slot_mut(&mut self, slot: usize) -> &mut T {
        unsafe { self.storage.slots_mut()[slot].assume_init_mut() }
    }

    /// Moves the item out of `slot`.
    ///
    /// # Safety
    /// `slot` must hold a live item, and the caller must remove it from the
    /// run before anything else reads the slot.
    #[inline(always)]
    unsafe fn take_slot(&self, slot: usize) -> T {
        unsafe { self.storage.slots()[slot].assume_init_read() }
    }

    /// Drops the item in `slot` in place.
    ///
    /// # Safety
    /// Same contract as [`take_slot`](RingDeque::take_slot).
    #[inline(always)]
    unsafe fn drop_slot(&mut self, slot: usize) {
        unsafe { self.storage.slots_mut()[slot].assume_init_drop() }
    }

    /// Writes `value` into `slot`. The slot must be free; a live item there
    /// would leak.
    #[inline(always)]
    fn put_slot(&mut self, slot: usize, value: T) {
        self.storage.slots_mut()[slot] = MaybeUninit::new(value);
    }

    /// Drops every live item in run order. Callers reset `ends` afterward.
    fn drop_items(&mut self) {
        if let Some(Ends { first, last }) = self.ends {
            let ring = self.ring();
            let mut slot = first;
            loop {
                // SAFETY: the run is walked exactly once.
                unsafe { self.drop_slot(slot) };
                if slot == last {
                    break;
                }
                slot = ring.step_forward(slot);
            }
        }
    }

    // --- Capacity changes ---

    /// Doubles elastic storage and mends run contiguity.
    ///
    /// Reallocation keeps every slot at its old offset, so a run that did
    /// not wrap needs nothing. A wrapped run's tail segment, from `first` to
    /// the old boundary, moves to the top of the doubled buffer; the head
    /// segment stays put and the circular order is whole again.
    #[inline(never)]
    fn grow_for_push(&mut self) {
        let old_capacity = self.capacity();
        let Some(buf) = self.storage.elastic_mut() else {
            return;
        };
        buf.grow_double();
        if let Some(ends) = self.ends.as_mut() {
            if ends.first > ends.last {
                let tail_len = old_capacity - ends.first;
                let new_first = ends.first + old_capacity;
                move_slots(buf.slots_mut(), ends.first, new_first, tail_len);
                ends.first = new_first;
            }
        }
    }

    /// Halves elastic storage when a removal left it underfull past the
    /// policy threshold, relocating the run so nothing crosses the new
    /// boundary. No-op for fixed storage, at the capacity floor, or while
    /// the buffer is still full enough.
    #[inline(never)]
    fn shrink_after_removal(&mut self) {
        let len = self.len();
        let capacity = self.capacity();
        let Some(buf) = self.storage.elastic_mut() else {
            return;
        };
        if !buf.policy().should_shrink(len, capacity) {
            return;
        }
        let new_capacity = (capacity / 2).max(buf.policy().min_capacity());
        if let Some(ends) = self.ends.as_mut() {
            if ends.first > ends.last {
                // Wrapped run: slide the tail segment down so it ends flush
                // with the new boundary. The over-50% threshold keeps the
                // whole run shorter than the halved capacity, so the segment
                // lands clear of the head.
                let tail_len = capacity - ends.first;
                let new_first = new_capacity - tail_len;
                move_slots(buf.slots_mut(), ends.first, new_first, tail_len);
                ends.first = new_first;
            } else if ends.last >= new_capacity {
                // Contiguous run reaching past the new boundary, including
                // one ending exactly on it: move it to the origin. The
                // ranges may overlap.
                move_slots(buf.slots_mut(), ends.first, 0, len);
                ends.first = 0;
                ends.last = len - 1;
            }
        }
        buf.shrink_to(new_capacity);
    }
}

// --- Iterators ---

/// Immutable front-to-back iterator over a deque.
///
/// Double-ended: `next_back` walks from the back, and the two cursors meet
/// in the middle.
pub struct Iter<'a, T> {
    slots: &'a [MaybeUninit<T>],
    ring: SlotRing,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        // SAFETY: `front` stays inside the run while `remaining` is nonzero.
        let item = unsafe { self.slots[self.front].assume_init_ref() };
        self.front = self.ring.step_forward(self.front);
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        // SAFETY: `back` stays inside the run while `remaining` is nonzero.
        let item = unsafe { self.slots[self.back].assume_init_ref() };
        self.back = self.ring.step_back(self.back);
        self.remaining -= 1;
        Some(item)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable front-to-back iterator over a deque.
pub struct IterMut<'a, T> {
    slots: *mut MaybeUninit<T>,
    ring: SlotRing,
    front: usize,
    back: usize,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        // SAFETY: every slot in the run is yielded at most once, so no two
        // returned references alias, and the deque itself stays mutably
        // borrowed for the iterator's whole lifetime.
        let item = unsafe { (*self.slots.add(self.front)).assume_init_mut() };
        self.front = self.ring.step_forward(self.front);
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        // SAFETY: as in `next`; the back cursor never crosses the front one.
        let item = unsafe { (*self.slots.add(self.back)).assume_init_mut() };
        self.back = self.ring.step_back(self.back);
        self.remaining -= 1;
        Some(item)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// By-value draining iterator returned by [`RingDeque::into_iter`].
///
/// Items not consumed by the time it drops are dropped with it.
pub struct IntoIter<'buf, T> {
    deque: RingDeque<'buf, T>,
}

impl<T> Iterator for IntoIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.take_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.deque.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.take_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<'_, T> {}
impl<T> FusedIterator for IntoIter<'_, T> {}

impl<'buf, T> IntoIterator for RingDeque<'buf, T> {
    type Item = T;
    type IntoIter = IntoIter<'buf, T>;

    /// Drains the deque front to back.
    fn into_iter(self) -> IntoIter<'buf, T> {
        IntoIter { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a RingDeque<'_, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingDeque<'_, T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

// --- Traits ---

impl<T> Drop for RingDeque<'_, T> {
    fn drop(&mut self) {
        self.drop_items();
    }
}

impl<T> Default for RingDeque<'_, T> {
    /// Same as [`RingDeque::new`].
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RingDeque<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq<RingDeque<'_, T>> for RingDeque<'_, T> {
    /// Logical-sequence equality, blind to storage mode and physical layout.
    fn eq(&self, other: &RingDeque<'_, T>) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for RingDeque<'_, T> {}

impl<T: PartialOrd> PartialOrd<RingDeque<'_, T>> for RingDeque<'_, T> {
    fn partial_cmp(&self, other: &RingDeque<'_, T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for RingDeque<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T> Index<isize> for RingDeque<'_, T> {
    type Output = T;

    /// Wrapping index; see [`get`](RingDeque::get).
    ///
    /// # Panics
    /// Panics when the deque is empty.
    fn index(&self, index: isize) -> &T {
        self.get(index).expect("indexed into an empty deque")
    }
}

impl<T> IndexMut<isize> for RingDeque<'_, T> {
    fn index_mut(&mut self, index: isize) -> &mut T {
        self.get_mut(index).expect("indexed into an empty deque")
    }
}

impl<T> Extend<T> for RingDeque<'_, T> {
    /// Pushes each item to the back.
    ///
    /// # Panics
    /// Panics when a fixed deque runs out of slots partway through.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for RingDeque<'_, T> {
    /// Collects into an elastic deque with the default policy.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = RingDeque::new();
        deque.extend(iter);
        deque
    }
}

// --- Tests ---

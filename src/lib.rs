//! # Ring Deque
//!
//! A double-ended queue over a contiguous circular buffer of fixed-size
//! slots, usable with owned storage that tracks load or with a
//! caller-supplied buffer that never reallocates.
//!
//! This crate provides `RingDeque`. It is a `VecDeque`-style ring buffer
//! whose storage mode is chosen at construction: *elastic* deques own their
//! buffer and keep its capacity proportional to the number of items held,
//! while *fixed* deques run entirely inside a borrowed region and refuse
//! pushes instead of growing.
//!
//! ## Key Features
//!
//! * **Two storage modes:** self-managed elastic buffers that double when
//!   full and halve when underfull, or borrowed fixed-capacity regions for
//!   allocation-free operation.
//! * **Wraparound indexing:** indexes are signed and wrap by Euclidean
//!   modulo over the length, so `deque[-1]` is the back item and any index
//!   resolves while the deque is non-empty.
//! * **O(1) everywhere:** pushes, pops, indexed access and every query run
//!   in constant time; capacity changes are amortized across pushes and
//!   pops.
//! * **Tunable policy:** initial capacity, shrink floor and the free-space
//!   shrink threshold are grouped in a validated [`CapacityPolicy`].
//! * **Full iteration support:** borrowing, mutable and draining iterators,
//!   all double-ended and exact-size.
//!
//! ## Capacity Policy
//!
//! Elastic deques are governed by a [`CapacityPolicy`]:
//!
//! * `initial_capacity` (default 8) is allocated up front and restored by
//!   [`clear`](RingDeque::clear).
//! * `min_capacity` (default 8) is the floor below which shrinking never
//!   fires.
//! * `max_free_percent` (default 75) is the percentage of free slots that
//!   must be strictly exceeded before the buffer halves. It must sit
//!   strictly between 50 and 100: anything at 50 or below would let a
//!   half-full deque grow on one push and shrink on the next pop, and the
//!   margin above 50 is also what keeps the surviving run clear of the
//!   halved boundary during relocation.
//!
//! Fixed deques ignore the policy entirely; their capacity is the borrowed
//! region's length, forever.
//!
//! ## Examples
//!
//! ### Elastic storage
//!
//! ```rust
//! use ring_deque::RingDeque;
//!
//! let mut window: RingDeque<i32> = RingDeque::new();
//!
//! for i in 0..28 {
//!     window.push_back(i);
//! }
//! assert_eq!(window.capacity(), 32); // grew 8 -> 16 -> 32
//! assert_eq!(window[-1], 27);
//!
//! // Emptying hands the storage back.
//! window.clear();
//! assert!(window.is_empty());
//! assert_eq!(window.capacity(), 8);
//! ```
//!
//! ### Fixed storage
//!
//! ```rust
//! use core::mem::MaybeUninit;
//! use ring_deque::RingDeque;
//!
//! let mut region = [MaybeUninit::<u64>::uninit(); 16];
//! let mut scratch = RingDeque::with_buffer(&mut region);
//!
//! for sample in 0..16 {
//!     assert!(scratch.try_push_back(sample).is_ok());
//! }
//!
//! // Full: the push fails and hands the value back instead of growing.
//! assert_eq!(scratch.try_push_back(99), Err(99));
//! assert_eq!(scratch.len(), 16);
//! ```
//!
//! ### Wraparound indexing
//!
//! ```rust
//! use ring_deque::RingDeque;
//!
//! let mut lap_times: RingDeque<u32> = (600..=604).collect();
//!
//! assert_eq!(lap_times[5], 600);  // one full lap past the front
//! assert_eq!(lap_times[-6], 604); // one full lap behind the back
//! assert_eq!(lap_times.replace(-1, 555), Ok(604));
//! ```

// --- Module Declarations ---

pub mod deque;
pub mod policy;

mod ring;
mod storage;

// --- Re-exports ---

pub use deque::{IntoIter, Iter, IterMut, RingDeque};
pub use policy::{
    CapacityPolicy, PolicyError, DEFAULT_INITIAL_CAPACITY, DEFAULT_MAX_FREE_PERCENT,
    DEFAULT_MIN_CAPACITY,
};

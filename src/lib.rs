//! This crate provides a doubly-linked list with owned nodes, guarded by a
//! pair of sentinel endpoints.
//!
//! The [`List`] keeps its nodes on a closed ring between two payload-free
//! sentinels, so inserting or removing an element at a known position takes
//! constant time and needs no branches on the ends. In compromise, reaching
//! a position by index takes *O*(*n*) time.
//!
//! A quick tour:
//!
//! ```
//! use sentinel_list::List;
//!
//! let mut list = List::from_iter(["ab", "cd", "ef"]);
//!
//! let mut cursor = list.cursor_start_mut();
//! cursor.insert("xy"); // lands before "ab"; the cursor stays on "ab"
//! assert_eq!(cursor.current(), Some(&"ab"));
//! assert_eq!(cursor.view(), &List::from_iter(["xy", "ab", "cd", "ef"]));
//!
//! assert!(cursor.seek_to(2).is_ok());
//! assert_eq!(cursor.remove(), Some("cd")); // the cursor slides onto "ef"
//! assert_eq!(cursor.view(), &List::from_iter(["xy", "ab", "ef"]));
//!
//! cursor.push_front("uv"); // the far end stays reachable through the cursor
//! assert_eq!(cursor.view(), &List::from_iter(["uv", "xy", "ab", "ef"]));
//! ```
//!
//! # Memory Layout
//!
//! The list lays its nodes out like this:
//! ```text
//!          ┌────────────────────────── tail.next ─────────────────────────┐
//!          ↓                                                              │
//!    ┌───────────┐      ╔═══════════╗             ╔═══════════╗     ┌───────────┐
//!    │   next    │ ───→ ║   next    ║ ──→ ┄┄ ───→ ║   next    ║ ──→ │   next    │
//!    ├───────────┤      ╟───────────╢             ╟───────────╢     ├───────────┤
//! ┌─ │   prev    │ ←─── ║   prev    ║ ←── ┄┄ ←─── ║   prev    ║ ←── │   prev    │
//! │  ├───────────┤      ╟───────────╢             ╟───────────╢     ├───────────┤
//! │  ┊no payload ┊      ║ payload T ║             ║ payload T ║     ┊no payload ┊
//! │  └╌╌╌╌╌╌╌╌╌╌╌┘      ╚═══════════╝             ╚═══════════╝     └╌╌╌╌╌╌╌╌╌╌╌┘
//! │  head sentinel          Node 0                 Node n - 1       tail sentinel
//! │                                                                       ↑
//! └───────────────────────────── head.prev ───────────────────────────────┘
//!
//! ╔═══════════╗
//! ║   head    ║ ──→ (head sentinel)
//! ╟───────────╢
//! ║   tail    ║ ──→ (tail sentinel)
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` struct itself holds:
//! - a `head` box that owns the head sentinel node;
//! - a `tail` box that owns the tail sentinel node;
//! - a length field `len` that always tracks the number of elements, so
//!   [`len`](crate::List::len) is *O*(1).
//!
//! Every node lives in its own heap allocation and holds:
//! - `next`, pointing at the following node (the tail sentinel after the
//!   last element);
//! - `prev`, pointing at the preceding node (the head sentinel before the
//!   first element);
//! - the payload `T`, which the two sentinels do not carry.
//!
//! The ring is closed by the sentinels themselves: `tail.next` points to the
//! head sentinel and `head.prev` points to the tail sentinel, in an empty
//! list as well as in a full one. In an empty list, `head.next` points
//! directly to the tail sentinel.
//!
//! By convention, a list of length *n* indexes its elements 0 to *n* - 1,
//! and the tail sentinel always carries index *n* (in an empty list, index
//! 0). The head sentinel carries no index and is never a cursor position;
//! moves that would land on it jump across it instead.
//!
//! # Iteration
//!
//! [`Iter`] and [`IterMut`] walk the list the way slice iterators walk a
//! slice: double-ended, fused and never wrapping. [`IterMut`] hands out
//! mutable references to the elements, never to the links.
//!
//! ## Examples
//!
//! ```
//! use sentinel_list::List;
//!
//! let mut list = List::from_iter([3, 6, 9]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next_back(), Some(&9));
//! assert_eq!(iter.next(), Some(&6));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // fused
//!
//! list.iter_mut().for_each(|item| *item /= 3);
//! assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
//! ```
//!
//! # Cursor Views
//!
//! [`Cursor`] and [`CursorMut`] hold a position inside a list and step
//! forward or backward from it. A list of length *n* has *n* + 1 cursor
//! positions, indexed 0 to *n*, where *n* is the tail sentinel. Fallible
//! moves such as [`seek_to`](crate::list::cursor::CursorMut::seek_to)
//! report a [`SeekError`] describing how far the cursor got.
//!
//! A [`Cursor`] borrows its list immutably and a [`CursorMut`] exclusively,
//! so every operation that could invalidate a position is rejected at
//! compile time: the list cannot be edited while a [`Cursor`] is alive, and
//! two cursors into the same list cannot both mutate it.
//!
//! Cursors can also be used as iterators, but wrap around and are not fused.
//! When such an iterator crosses the boundary, it yields `None` once at the
//! tail sentinel and then jumps over the head sentinel to the front element.
//!
//! Note that `rev` on [`CursorIter`] and [`CursorBackIter`] is not the
//! double-ended `rev`; it turns the walk around at the cursor's current
//! position.
//!
//! ## Examples
//!
//! ```
//! use sentinel_list::List;
//!
//! let list = List::from_iter(['h', 'i']);
//!
//! let mut walk = list.cursor_start().into_iter();
//! assert_eq!(walk.next(), Some(&'h'));
//! assert_eq!(walk.next(), Some(&'i'));
//! assert_eq!(walk.next(), None); // the tail sentinel
//! assert_eq!(walk.next(), Some(&'h')); // wrapped around
//!
//! let mut walk = walk.rev(); // turn around; the cursor is on 'i' now
//! assert_eq!(walk.next(), Some(&'h'));
//! assert_eq!(walk.next(), None); // the boundary again
//! assert_eq!(walk.next(), Some(&'i')); // wrapped to the back
//! ```
//!
//! # Cursor Mutations
//!
//! [`CursorMut`] edits the list at the cursor position:
//! - [`insert`] places a new element before the position;
//! - [`remove`] takes out the element at the position;
//! - [`backspace`] takes out the element before it;
//! - [`split`] and [`split_before`] cut the list in two at it;
//! - [`splice`] stitches another list in before it.
//!
//! ## Examples
//!
//! ```
//! use sentinel_list::List;
//!
//! let mut list = List::from_iter([2, 4, 6, 8]);
//!
//! let mut cursor = list.cursor_mut(1); // on 4
//! cursor.insert(3); // [2, 3, 4, 6, 8], still on 4
//! assert_eq!(cursor.index(), 2);
//!
//! assert!(cursor.seek_forward(1).is_ok()); // on 6
//! assert_eq!(cursor.remove(), Some(6)); // [2, 3, 4, 8], on 8
//! assert_eq!(cursor.backspace(), Some(4)); // [2, 3, 8], still on 8
//! assert_eq!(cursor.current(), Some(&8));
//!
//! assert_eq!(Vec::from_iter(list), vec![2, 3, 8]);
//! ```
//!
//! The full set lives on [`CursorMut`].
//!
//! # Algorithms
//!
//! Whole-list operations relink nodes instead of moving elements, so they
//! never clone the payload and never reallocate.
//! - [`sort`] (with [`sort_by`] and [`sort_by_key`]): a stable, in-place
//!   merge sort over the links, with an insertion sort for short stretches;
//! - [`merge`] (with [`merge_by`]): consume another sorted list into this
//!   one, leaving the other empty;
//! - [`dedup`] (with [`dedup_by`] and [`dedup_by_key`]): drop consecutive
//!   repeated elements;
//! - [`reverse`]: flip the link pair of every node in a single pass;
//! - [`split_off`], [`splice_at`] and [`append`]: move whole chains between
//!   lists with a constant number of relinks, plus the walk to the position;
//! - [`drain`]: detach a range of elements up front and hand it back as an
//!   iterator.
//!
//! ## Examples
//!
//! ```
//! use sentinel_list::List;
//!
//! let mut list = List::from([3, 1, 2]);
//! let mut other = List::from([0, 4]);
//!
//! list.sort();
//! assert_eq!(list.to_vec(), vec![1, 2, 3]);
//!
//! list.merge(&mut other);
//! assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4]);
//! assert!(other.is_empty());
//! ```
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`SeekError`]: crate::SeekError
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`CursorIter`]: crate::list::cursor::CursorIter
//! [`CursorBackIter`]: crate::list::cursor::CursorBackIter
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`remove`]: crate::list::cursor::CursorMut::remove
//! [`backspace`]: crate::list::cursor::CursorMut::backspace
//! [`split`]: crate::list::cursor::CursorMut::split
//! [`split_before`]: crate::list::cursor::CursorMut::split_before
//! [`splice`]: crate::list::cursor::CursorMut::splice
//! [`sort`]: crate::List::sort
//! [`sort_by`]: crate::List::sort_by
//! [`sort_by_key`]: crate::List::sort_by_key
//! [`merge`]: crate::List::merge
//! [`merge_by`]: crate::List::merge_by
//! [`dedup`]: crate::List::dedup
//! [`dedup_by`]: crate::List::dedup_by
//! [`dedup_by_key`]: crate::List::dedup_by_key
//! [`reverse`]: crate::List::reverse
//! [`split_off`]: crate::List::split_off
//! [`splice_at`]: crate::List::splice_at
//! [`append`]: crate::List::append
//! [`drain`]: crate::List::drain

#[doc(inline)]
pub use list::cursor::SeekError;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;

mod experiments;

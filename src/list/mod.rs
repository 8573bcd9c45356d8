use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ops::{Bound, RangeBounds};
use std::ptr::NonNull;

use crate::list::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter, IterMut};

pub use algorithms::drain::{Drain, ExtractIf};

pub mod cursor;
pub mod iterator;

mod algorithms;

#[cfg(all(test, not(miri)))]
mod proptests;

/// The `List` is a doubly-linked sequence of owned nodes, bounded by a pair
/// of permanent sentinel nodes. It allows inserting and removing elements at
/// any given position in constant time. In compromise, accessing or mutating
/// elements at any position takes *O*(*n*) time.
///
/// A `List` owns:
/// - `head` and `tail`, the two sentinel nodes. Neither stores an element:
///   `head.next` is the first element, and `tail` itself is the
///   one-past-the-end position. Behind the scenes the sentinels are also
///   linked to each other, closing the chain into a ring so that every
///   `next`/`prev` link is always valid;
/// - a length field `len`, maintained by every structural edit, so that
///   [`List::len`] is *O*(1).
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (`end` is possibly the tail sentinel).
pub struct List<T> {
    head: Box<Node<Erased>>,
    tail: Box<Node<Erased>>,
    /// the number of live (non-sentinel) nodes
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

// `repr(C)` keeps the links at the front of the layout, so a sentinel
// (`Node<Erased>`) can be viewed as a `Node<T>` whose element is never
// touched.
#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

struct Erased;

/// A chain of nodes unlinked from any list, produced by splitting and
/// consumed by splicing.
///
/// While detached, `front.prev` and `back.next` must not be read.
pub(crate) struct DetachedNodes<T> {
    pub(crate) front: NonNull<Node<T>>,
    pub(crate) back: NonNull<Node<T>>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// Makes `prev` and `next` neighbors, in that order.
///
/// No check that the two nodes belong to the same ring; whatever was
/// linked between them is left dangling for the caller to relink or free.
pub(crate) unsafe fn connect<T>(mut prev: NonNull<Node<T>>, mut next: NonNull<Node<T>>) {
    prev.as_mut().next = next;
    next.as_mut().prev = prev;
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

// private methods
impl<T> List<T> {
    pub(crate) fn head_node(&self) -> NonNull<Node<T>> {
        NonNull::from(self.head.as_ref()).cast()
    }
    pub(crate) fn tail_node(&self) -> NonNull<Node<T>> {
        NonNull::from(self.tail.as_ref()).cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `head.next` is always valid (the first element, or the
        // tail sentinel when the list is empty).
        unsafe { self.head_node().as_ref().next }
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `tail.prev` is always valid (the last element, or the
        // head sentinel when the list is empty).
        unsafe { self.tail_node().as_ref().prev }
    }

    /// Unlinks `node` from the ring and takes back its box.
    ///
    /// The caller must guarantee that `node` is a live element node of
    /// this list; a foreign or sentinel node corrupts the ring.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        self.len -= 1;
        let node = Box::from_raw(node.as_ptr());
        connect(node.prev, node.next);
        node
    }

    /// Links `node` into the ring between `prev` and `next`.
    ///
    /// The caller must guarantee that `prev` and `next` are adjacent
    /// nodes of this list; the adjacency is checked when debug
    /// assertions are on.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }

    /// Unlinks the chain `front..=back` of exactly `len` nodes.
    ///
    /// The caller must guarantee that `back` is reachable from `front`
    /// by `next` links within this list and that `len` matches the node
    /// count of the chain.
    pub(crate) unsafe fn detach_nodes(
        &mut self,
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
        len: usize,
    ) -> DetachedNodes<T> {
        self.len -= len;
        connect(front.as_ref().prev, back.as_ref().next);
        DetachedNodes::new(front, back, len)
    }

    /// Links a detached chain into the ring between `prev` and `next`.
    ///
    /// The caller must guarantee that `prev` and `next` are adjacent
    /// nodes of this list; the adjacency is checked when debug
    /// assertions are on.
    pub(crate) unsafe fn attach_nodes(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        detached: DetachedNodes<T>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, detached.front);
        connect(detached.back, next);
        self.len += detached.len;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, detached.front);
            assert_adjacent(detached.back, next);
        }
    }

    /// Detaches every element node, or returns `None` on an empty list.
    ///
    /// Safe: `front_node..=back_node` with the tracked length is a valid
    /// chain whenever the list is non-empty.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        if self.is_empty() {
            return None;
        }
        unsafe { Some(self.detach_nodes(self.front_node(), self.back_node(), self.len)) }
    }

    /// Builds a fresh list around a detached chain.
    ///
    /// Safe: the two sentinels of a new list are adjacent, and a detached
    /// chain is a valid range by construction.
    pub(crate) fn from_detached(detached: DetachedNodes<T>) -> Self {
        let mut list = List::new();
        unsafe {
            list.attach_nodes(list.head_node(), list.tail_node(), detached);
        }
        list
    }

    /// Like [`List::detach_all_nodes`], but consumes the list.
    pub(crate) fn into_detached(mut self) -> Option<DetachedNodes<T>> {
        self.detach_all_nodes()
    }
}

impl<T> List<T> {
    /// Creates an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::<String>::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        let (head, tail) = new_sentinel_pair();
        Self {
            head,
            tail,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Creates a `List` of `len` default-constructed elements.
    ///
    /// # Examples
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list: List<u32> = List::with_len(3);
    /// assert_eq!(Vec::from_iter(list), vec![0, 0, 0]);
    /// ```
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        std::iter::repeat_with(T::default).take(len).collect()
    }

    /// Returns `true` if the list holds no elements.
    ///
    /// # Complexity
    ///
    /// Runs in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_back("alpha");
    /// assert!(!list.is_empty());
    ///
    /// list.pop_back();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of the list.
    ///
    /// # Complexity
    ///
    /// Runs in *O*(1) time; the length is maintained by every structural
    /// edit, never recounted.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter(["a", "b"]);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_front("c");
    /// assert_eq!(list.len(), 3);
    ///
    /// list.pop_back();
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes every element, front to back.
    ///
    /// Safe to call repeatedly and on an already-empty list.
    ///
    /// # Complexity
    ///
    /// Runs in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter(0..4);
    /// assert_eq!(list.len(), 4);
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.front(), None);
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Returns a reference to the first element, or `None` when the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([10, 20]);
    /// assert_eq!(list.front(), Some(&10));
    ///
    /// list.clear();
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.cursor_start().current()
    }

    /// Returns a mutable reference to the first element, or `None` when
    /// the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([10, 20]);
    ///
    /// if let Some(first) = list.front_mut() {
    ///     *first += 1;
    /// }
    /// assert_eq!(list.front(), Some(&11));
    ///
    /// assert_eq!(List::<i32>::new().front_mut(), None);
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is non-empty, so `head.next` is a live element
        // node, exclusively reachable through `self`.
        unsafe { Some(&mut (*self.front_node().as_ptr()).element) }
    }

    /// Returns a reference to the last element, or `None` when the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([10, 20]);
    /// assert_eq!(list.back(), Some(&20));
    ///
    /// list.clear();
    /// assert_eq!(list.back(), None);
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.cursor_end().previous()
    }

    /// Returns a mutable reference to the last element, or `None` when
    /// the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([10, 20]);
    ///
    /// if let Some(last) = list.back_mut() {
    ///     *last += 1;
    /// }
    /// assert_eq!(list.back(), Some(&21));
    ///
    /// assert_eq!(List::<i32>::new().back_mut(), None);
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is non-empty, so `tail.prev` is a live element
        // node, exclusively reachable through `self`.
        unsafe { Some(&mut (*self.back_node().as_ptr()).element) }
    }

    /// Inserts an element at the front of the list.
    ///
    /// # Complexity
    ///
    /// Runs in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([20, 30]);
    ///
    /// list.push_front(10);
    /// assert_eq!(list.front(), Some(&10));
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.cursor_start_mut().insert(elt);
    }

    /// Removes the first element and returns it, or `None` when the list
    /// is empty.
    ///
    /// # Complexity
    ///
    /// Runs in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter(["x", "y"]);
    ///
    /// assert_eq!(list.pop_front(), Some("x"));
    /// assert_eq!(list.pop_front(), Some("y"));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.cursor_start_mut().remove()
    }

    /// Inserts an element at the back of the list.
    ///
    /// # Complexity
    ///
    /// Runs in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([10, 20]);
    ///
    /// list.push_back(30);
    /// assert_eq!(list.back(), Some(&30));
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn push_back(&mut self, elt: T) {
        self.cursor_end_mut().insert(elt);
    }

    /// Removes the last element and returns it, or `None` when the list
    /// is empty.
    ///
    /// # Complexity
    ///
    /// Runs in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter(["x", "y"]);
    ///
    /// assert_eq!(list.pop_back(), Some("y"));
    /// assert_eq!(list.pop_back(), Some("x"));
    /// assert_eq!(list.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.cursor_end_mut().backspace()
    }

    /// Replaces the contents of the list with the elements of `source`, in
    /// source order.
    ///
    /// The source is consumed exactly once. Live nodes are reused by
    /// overwriting their elements in place; the list then grows or shrinks
    /// to match the source length.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4, 5]);
    ///
    /// list.assign([7, 8, 9]);
    /// assert_eq!(Vec::from_iter(&list), vec![&7, &8, &9]);
    ///
    /// list.assign(0..6);
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn assign<I>(&mut self, source: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut cursor = self.cursor_start_mut();
        for item in source {
            match cursor.current_mut() {
                Some(slot) => {
                    *slot = item;
                    // not at the end position, so this cannot fail
                    let _ = cursor.move_next();
                }
                None => cursor.insert(item),
            }
        }
        // drop whatever the source did not cover
        if let Some(rest) = cursor.split() {
            drop(rest);
        }
    }

    /// Provides a read-only cursor at the element with the given index.
    ///
    /// Index `len` addresses the tail sentinel, the one-past-the-end
    /// position.
    ///
    /// # Panics
    ///
    /// Panics when `at > len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor(1).current(), Some(&2));
    /// assert_eq!(list.cursor(3).current(), None);
    /// ```
    pub fn cursor(&self, at: usize) -> Cursor<'_, T> {
        assert!(at <= self.len, "Cannot create cursor at a nonexistent index");
        let mut cursor = self.cursor_start();
        cursor
            .seek_to(at)
            .expect("Cannot create cursor at a nonexistent index");
        cursor
    }

    /// Provides a read-only cursor at the first element.
    ///
    /// The cursor sits at the tail sentinel when the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_start();
    /// assert_eq!(cursor.current(), Some(&1));
    /// ```
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node(), 0)
    }

    /// Provides a read-only cursor at the tail sentinel, the
    /// one-past-the-end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.previous(), Some(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.tail_node(), self.len)
    }

    /// Provides an editing cursor at the element with the given index.
    ///
    /// Index `len` seats the cursor at the tail sentinel, the
    /// one-past-the-end position.
    ///
    /// # Panics
    ///
    /// Panics when `at > len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([4, 5, 6]);
    ///
    /// let mut cursor = list.cursor_mut(2);
    /// if let Some(elt) = cursor.current_mut() {
    ///     *elt = 60;
    /// }
    /// assert_eq!(cursor.current(), Some(&60));
    ///
    /// // index `len` addresses the tail sentinel, which holds no element
    /// assert_eq!(list.cursor_mut(3).current_mut(), None);
    /// ```
    pub fn cursor_mut(&mut self, at: usize) -> CursorMut<'_, T> {
        assert!(at <= self.len, "Cannot create cursor at a nonexistent index");
        let mut cursor = self.cursor_start_mut();
        cursor
            .seek_to(at)
            .expect("Cannot create cursor at a nonexistent index");
        cursor
    }

    /// Provides an editing cursor at the first element.
    ///
    /// The cursor sits at the tail sentinel when the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([4, 5, 6]);
    ///
    /// let mut cursor = list.cursor_start_mut();
    /// cursor.insert(3);
    /// assert_eq!(cursor.index(), 1);
    ///
    /// assert_eq!(list.front(), Some(&3));
    /// ```
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, self.front_node(), 0)
    }

    /// Provides an editing cursor at the tail sentinel, the
    /// one-past-the-end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([4, 5, 6]);
    ///
    /// let mut cursor = list.cursor_end_mut();
    /// assert_eq!(cursor.index(), 3);
    /// assert_eq!(cursor.backspace(), Some(6));
    ///
    /// assert_eq!(list.back(), Some(&5));
    /// ```
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, self.tail_node(), self.len)
    }

    /// Provides a forward iterator, from the first element to the last.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from_iter(["a", "b", "c"]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&"a"));
    /// assert_eq!(iter.next_back(), Some(&"c"));
    /// assert_eq!(iter.next(), Some(&"b"));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator yielding mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// for element in list.iter_mut() {
    ///     *element *= 10;
    /// }
    ///
    /// assert_eq!(Vec::from_iter(list), vec![10, 20, 30]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Moves every element of `other` to the end of this list.
    ///
    /// The nodes of `other` are relinked in one step without touching
    /// their elements; `other` is left empty.
    ///
    /// # Complexity
    ///
    /// Runs in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([1, 2]);
    /// let mut other = List::from_iter([3, 4]);
    ///
    /// list.append(&mut other);
    ///
    /// assert_eq!(Vec::from_iter(&list), vec![&1, &2, &3, &4]);
    /// assert!(other.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // SAFETY: the last node and the tail sentinel are adjacent
            // ring nodes of `self`.
            unsafe { self.attach_nodes(self.back_node(), self.tail_node(), detached) }
        }
    }

    /// Moves every element of `other` to the front of this list.
    ///
    /// The nodes of `other` are relinked in one step without touching
    /// their elements; `other` is left empty.
    ///
    /// # Complexity
    ///
    /// Runs in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([3, 4]);
    /// let mut other = List::from_iter([1, 2]);
    ///
    /// list.prepend(&mut other);
    ///
    /// assert_eq!(Vec::from_iter(&list), vec![&1, &2, &3, &4]);
    /// assert!(other.is_empty());
    /// ```
    pub fn prepend(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // SAFETY: the head sentinel and the first node are adjacent
            // ring nodes of `self`.
            unsafe { self.attach_nodes(self.head_node(), self.front_node(), detached) }
        }
    }

    /// Splits the list in two, returning everything from index `at` to the
    /// end. The list keeps the elements before `at`.
    ///
    /// # Complexity
    ///
    /// Runs in *O*(*n*) time.
    ///
    /// # Panics
    ///
    /// Panics when `at > len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([10, 20, 30, 40]);
    ///
    /// let tail = list.split_off(3);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![10, 20, 30]);
    /// assert_eq!(Vec::from_iter(tail), vec![40]);
    /// ```
    pub fn split_off(&mut self, at: usize) -> List<T> {
        assert!(at <= self.len, "Cannot split off at a nonexistent index");
        if at == self.len {
            return List::new();
        }
        self.cursor_mut(at).split().unwrap_or_default()
    }

    /// Removes and returns the element at index `at`.
    ///
    /// # Complexity
    ///
    /// Runs in *O*(*n*) time.
    ///
    /// # Panics
    ///
    /// Panics when `at >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter(['a', 'b', 'c']);
    ///
    /// assert_eq!(list.remove(1), 'b');
    /// assert_eq!(list.remove(1), 'c');
    /// assert_eq!(list.remove(0), 'a');
    /// assert!(list.is_empty());
    /// ```
    pub fn remove(&mut self, at: usize) -> T {
        assert!(at < self.len, "Cannot remove at a nonexistent index");

        self.cursor_mut(at)
            .remove()
            .expect("Cannot remove at a nonexistent index")
    }

    /// Inserts an element at the given index, shifting everything from
    /// that index towards the back.
    ///
    /// # Complexity
    ///
    /// Runs in *O*(*n*) time.
    ///
    /// # Panics
    ///
    /// Panics when `at > len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter(['a', 'c']);
    ///
    /// list.insert(1, 'b');
    /// list.insert(3, 'd');
    ///
    /// assert_eq!(Vec::from_iter(list), vec!['a', 'b', 'c', 'd']);
    /// ```
    pub fn insert(&mut self, at: usize, elm: T) {
        assert!(at <= self.len, "Cannot insert at a nonexistent index");
        self.cursor_mut(at).insert(elm);
    }

    /// Splices another list at the given index, preserving the order of
    /// `other`.
    ///
    /// The nodes of `other` are transferred as they are, without copying
    /// any element.
    ///
    /// # Complexity
    ///
    /// Runs in *O*(*n*) time for reaching the index, plus *O*(1) for the
    /// transfer itself.
    ///
    /// # Panics
    ///
    /// Panics when `at > len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([1, 5, 6]);
    ///
    /// list.splice_at(1, List::from_iter([2, 3, 4]));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn splice_at(&mut self, at: usize, other: Self) {
        assert!(at <= self.len, "Cannot splice at a nonexistent index");
        self.cursor_mut(at).splice(other);
    }

    /// Removes the nodes in the given index range and returns an iterator
    /// over the removed elements, front to back.
    ///
    /// The range is detached in a single relinking step; dropping the
    /// iterator drops any unyielded elements in forward order. An empty
    /// range removes nothing.
    ///
    /// # Complexity
    ///
    /// Runs in *O*(*n*) time for reaching the
    /// range, plus *O*(1) for the detachment itself.
    ///
    /// # Panics
    ///
    /// Panics if the range is decreasing or reaches beyond the end of
    /// the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4, 5]);
    ///
    /// let removed = Vec::from_iter(list.drain(1..4));
    /// assert_eq!(removed, vec![2, 3, 4]);
    /// assert_eq!(Vec::from_iter(list), vec![1, 5]);
    /// ```
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T>
    where
        R: RangeBounds<usize>,
    {
        // `checked_add` keeps a bound of `usize::MAX` from wrapping to 0
        // and slipping past the asserts below.
        let start = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n
                .checked_add(1)
                .expect("Cannot drain beyond the end of the list"),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&n) => n
                .checked_add(1)
                .expect("Cannot drain beyond the end of the list"),
            Bound::Excluded(&n) => n,
            Bound::Unbounded => self.len,
        };
        assert!(start <= end, "Cannot drain a decreasing range");
        assert!(end <= self.len, "Cannot drain beyond the end of the list");

        let removed = if start == end {
            List::new()
        } else {
            let mut front = self.front_node();
            // SAFETY: `start < end <= len`, so both walks stay on live
            // nodes, and `front..=back` is a valid range of `end - start`
            // nodes.
            unsafe {
                for _ in 0..start {
                    front = front.as_ref().next;
                }
                let mut back = front;
                for _ in 0..(end - start - 1) {
                    back = back.as_ref().next;
                }
                let detached = self.detach_nodes(front, back, end - start);
                List::from_detached(detached)
            }
        };
        Drain::new(removed)
    }

    /// Removes the elements selected by `filter` and returns an iterator
    /// over them, front to back.
    ///
    /// Elements for which `filter` returns `false` stay in the list.
    /// Dropping the iterator removes and drops the remaining selected
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4, 5, 6]);
    ///
    /// let evens = Vec::from_iter(list.extract_if(|x| *x % 2 == 0));
    /// assert_eq!(evens, vec![2, 4, 6]);
    /// assert_eq!(Vec::from_iter(list), vec![1, 3, 5]);
    /// ```
    pub fn extract_if<F>(&mut self, filter: F) -> ExtractIf<'_, T, F>
    where
        F: FnMut(&mut T) -> bool,
    {
        ExtractIf::new(self.cursor_start_mut(), filter)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Node<T> {
    /// Allocates a node for `element` that belongs to no ring yet.
    ///
    /// `node.prev` and `node.next` are dangling until the node is attached;
    /// they are never read before `connect` overwrites them.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        })))
    }

    pub(crate) fn into_element(node: Box<Node<T>>) -> T {
        node.element
    }
}

impl<T> DetachedNodes<T> {
    /// The caller must guarantee that `back` is reachable from `front` by
    /// `next` links and that the chain holds exactly `len` nodes.
    unsafe fn new(front: NonNull<Node<T>>, back: NonNull<Node<T>>, len: usize) -> Self {
        debug_assert!(len > 0, "Cannot detach nodes of length 0");
        Self {
            front,
            back,
            len,
            _marker: PhantomData,
        }
    }
}

/// Creates the head and tail sentinels of an empty list, linked into a ring.
fn new_sentinel_pair() -> (Box<Node<Erased>>, Box<Node<Erased>>) {
    let head_ptr = Node::new_detached(Erased);
    let tail_ptr = Node::new_detached(Erased);
    // SAFETY:
    // - both nodes were just leaked from fresh boxes, so reclaiming them is
    //   sound, and their links are initialized below before anything reads
    //   them;
    // - the sentinel elements are never read, so they are erased out.
    let (mut head, mut tail) = unsafe {
        (
            Box::from_raw(head_ptr.as_ptr()),
            Box::from_raw(tail_ptr.as_ptr()),
        )
    };
    head.next = tail_ptr;
    head.prev = tail_ptr;
    tail.next = head_ptr;
    tail.prev = head_ptr;
    (head, tail)
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

// Ensure that `List` and its read-only iterators are covariant in their type
// parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn list<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn iter<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn into_iter<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::cell::RefCell;
    use std::fmt::Debug;
    use std::ops::Bound;

    #[derive(Debug)]
    struct DropChecker<'a, T: Copy> {
        value: T,
        dropped: &'a RefCell<Vec<T>>,
    }
    impl<'a, T: Copy> DropChecker<'a, T> {
        fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
            Self { value, dropped }
        }
    }
    impl<'a, T: Copy> Drop for DropChecker<'a, T> {
        fn drop(&mut self) {
            self.dropped.borrow_mut().push(self.value);
        }
    }

    fn list_eq<T, I>(list: &List<T>, expected: I)
    where
        T: Debug + Clone + Eq,
        I: IntoIterator<Item = T>,
    {
        assert_eq!(
            Vec::from_iter(list.iter().cloned()),
            Vec::from_iter(expected)
        );
    }

    #[test]
    fn list_create() {
        let mut list = List::<&str>::new();
        assert!(list.is_empty());
        list.push_back("solo");
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some("solo"));
        assert!(list.is_empty());
    }

    #[test]
    fn list_with_len() {
        let list = List::<u32>::with_len(4);
        assert_eq!(list.len(), 4);
        list_eq(&list, [0, 0, 0, 0]);

        let list = List::<u32>::with_len(0);
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(20, &dropped));
        list.push_front(DropChecker::new(10, &dropped));
        list.push_back(DropChecker::new(30, &dropped));
        // elements drop front to back
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[10, 20, 30]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        // a single element is both the front and the back
        list.push_front(7);
        assert_eq!(list.front(), list.back());
        assert_eq!(list.pop_back(), Some(7));
        assert!(list.is_empty());

        list.push_back(2);
        list.push_front(1);
        list.push_back(3);
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));

        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_clear_idempotent() {
        let mut list = List::from_iter(0..5);

        list.clear();
        assert_eq!(list.len(), 0);
        assert!(list.iter().next().is_none());

        list.clear();
        assert_eq!(list.len(), 0);
        assert!(list.iter().next().is_none());

        list.push_back(1);
        list_eq(&list, Some(1));
    }

    #[test]
    fn list_insert_and_remove() {
        let mut list = List::from_iter(10..16);

        list.insert(3, 99);
        list_eq(&list, [10, 11, 12, 99, 13, 14, 15]);

        assert_eq!(list.remove(6), 15);
        assert_eq!(list.back(), Some(&14));
        list_eq(&list, [10, 11, 12, 99, 13, 14]);

        list.insert(0, 9);
        assert_eq!(list.front(), Some(&9));
        list_eq(&list, [9, 10, 11, 12, 99, 13, 14]);

        assert_eq!(list.remove(4), 99);
        list_eq(&list, [9, 10, 11, 12, 13, 14]);

        // index `len` appends
        list.insert(6, 15);
        assert_eq!(list.back(), Some(&15));
        list_eq(&list, [9, 10, 11, 12, 13, 14, 15]);

        assert_eq!(list.remove(0), 9);
        assert_eq!(list.front(), Some(&10));
        list_eq(&list, 10..16);
    }

    #[test]
    fn list_assign() {
        // shrink
        let mut list = List::from_iter(0..8);
        list.assign([20, 21, 22]);
        list_eq(&list, [20, 21, 22]);
        assert_eq!(list.len(), 3);

        // grow
        list.assign(0..6);
        list_eq(&list, 0..6);
        assert_eq!(list.len(), 6);

        // into empty
        let mut list = List::new();
        list.assign([1, 2]);
        list_eq(&list, [1, 2]);

        // from empty source
        list.assign(None);
        assert!(list.is_empty());
        list.assign(None);
        assert!(list.is_empty());
    }

    #[test]
    fn list_append_then_split_restores_parts() {
        fn check<I1, I2>(front: I1, back: I2)
        where
            I1: IntoIterator<Item = i32> + Clone,
            I2: IntoIterator<Item = i32> + Clone,
        {
            let mut list = List::from_iter(front.clone());
            let mut other = List::from_iter(back.clone());
            let cut = list.len();
            let moved = other.len();

            list.append(&mut other);
            assert!(other.is_empty());
            assert_eq!(list.len(), cut + moved);
            list_eq(&list, front.clone().into_iter().chain(back.clone()));

            let tail = list.split_off(cut);
            list_eq(&list, front);
            list_eq(&tail, back);
        }
        check(1..=4, 5..=6);
        check(1..=4, 5..=5);
        check(1..=1, 2..=4);
        check(1..=4, 1..=0);
        check(1..=0, 5..=6);
        check(1..=0, 1..=0);
    }

    #[test]
    fn list_prepend_then_split_restores_parts() {
        fn check<I1, I2>(front: I1, back: I2)
        where
            I1: IntoIterator<Item = i32> + Clone,
            I2: IntoIterator<Item = i32> + Clone,
        {
            let mut list = List::from_iter(back.clone());
            let mut other = List::from_iter(front.clone());
            let cut = other.len();

            list.prepend(&mut other);
            assert!(other.is_empty());
            list_eq(&list, front.clone().into_iter().chain(back.clone()));

            let tail = list.split_off(cut);
            list_eq(&list, front);
            list_eq(&tail, back);
        }
        check(1..=3, 4..=6);
        check(1..=1, 2..=2);
        check(1..=0, 4..=6);
        check(1..=3, 1..=0);
        check(1..=0, 1..=0);
    }

    #[test]
    fn list_splice() {
        fn check(base: &[i32], insert: &[i32], at: usize) {
            let mut list = List::from_iter(base.iter().copied());
            let other = List::from_iter(insert.iter().copied());

            let mut expected = base.to_vec();
            expected.splice(at..at, insert.iter().copied());

            list.splice_at(at, other);
            assert_eq!(list.len(), expected.len());
            list_eq(&list, expected);
        }
        let base = [3, 1, 4, 1];
        for at in 0..=base.len() {
            check(&base, &[5, 9, 2], at);
            check(&base, &[6], at);
            check(&base, &[], at);
        }
        check(&[], &[5, 9], 0);
        check(&[], &[], 0);
    }

    #[test]
    fn list_drain() {
        let mut list = List::from_iter(0..8);
        let removed = Vec::from_iter(list.drain(2..5));
        assert_eq!(removed, vec![2, 3, 4]);
        list_eq(&list, (0..2).chain(5..8));
        assert_eq!(list.len(), 5);

        // empty range is a no-op
        let removed = Vec::from_iter(list.drain(1..1));
        assert!(removed.is_empty());
        assert_eq!(list.len(), 5);

        // unbounded range drains everything
        let removed = Vec::from_iter(list.drain(..));
        assert_eq!(removed, vec![0, 1, 5, 6, 7]);
        assert!(list.is_empty());

        // draining an empty list with an empty range is fine
        assert!(list.drain(0..0).next().is_none());
    }

    #[test]
    fn list_drain_accepts_all_bound_forms() {
        let mut list = List::from_iter(0..6);

        let removed = Vec::from_iter(list.drain(..=1));
        assert_eq!(removed, vec![0, 1]);
        list_eq(&list, 2..6);

        // (Excluded(0), Included(3)) drains positions 1..=3
        let removed = Vec::from_iter(list.drain((Bound::Excluded(0), Bound::Included(3))));
        assert_eq!(removed, vec![3, 4, 5]);
        list_eq(&list, [2]);
    }

    #[test]
    fn list_drain_drops_in_order() {
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        for i in 1..=5 {
            list.push_back(DropChecker::new(i, &dropped));
        }

        let mut drain = list.drain(1..4);
        let taken = drain.next().unwrap();
        assert_eq!(taken.value, 2);
        drop(taken);
        // the unconsumed part of the range is dropped front to back
        drop(drain);
        assert_eq!(dropped.borrow().as_slice(), &[2, 3, 4]);

        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[2, 3, 4, 1, 5]);
    }

    #[test]
    #[should_panic(expected = "Cannot insert at a nonexistent index")]
    fn list_insert_beyond_the_end_panics() {
        let mut list = List::from_iter([1, 2]);
        list.insert(3, 0);
    }

    #[test]
    #[should_panic(expected = "Cannot remove at a nonexistent index")]
    fn list_remove_at_len_panics() {
        let mut list = List::from_iter([1, 2]);
        list.remove(2);
    }

    #[test]
    #[should_panic(expected = "Cannot split off at a nonexistent index")]
    fn list_split_off_beyond_the_end_panics() {
        let mut list = List::from_iter([1, 2]);
        let _ = list.split_off(3);
    }

    #[test]
    #[should_panic(expected = "Cannot splice at a nonexistent index")]
    fn list_splice_at_beyond_the_end_panics() {
        let mut list = List::from_iter([1, 2]);
        list.splice_at(3, List::from_iter([9]));
    }

    #[test]
    #[should_panic(expected = "Cannot create cursor at a nonexistent index")]
    fn list_cursor_beyond_the_end_panics() {
        let list = List::from_iter([1, 2]);
        let _ = list.cursor(3);
    }

    #[test]
    #[should_panic(expected = "Cannot create cursor at a nonexistent index")]
    fn list_cursor_mut_beyond_the_end_panics() {
        let mut list = List::from_iter([1, 2]);
        let _ = list.cursor_mut(3);
    }

    #[test]
    #[should_panic(expected = "Cannot drain a decreasing range")]
    fn list_drain_decreasing_range_panics() {
        let mut list = List::from_iter([1, 2, 3]);
        let _ = list.drain(2..1);
    }

    #[test]
    #[should_panic(expected = "Cannot drain beyond the end of the list")]
    fn list_drain_beyond_the_end_panics() {
        let mut list = List::from_iter([1, 2, 3]);
        let _ = list.drain(1..5);
    }

    #[test]
    #[should_panic(expected = "Cannot drain beyond the end of the list")]
    fn list_drain_inclusive_end_at_usize_max_panics() {
        let mut list = List::from_iter([1, 2, 3]);
        let _ = list.drain(0..=usize::MAX);
    }

    #[test]
    fn list_extract_if() {
        let mut list = List::from_iter(0..10);
        let odds = Vec::from_iter(list.extract_if(|x| *x % 2 == 1));
        assert_eq!(odds, vec![1, 3, 5, 7, 9]);
        list_eq(&list, [0, 2, 4, 6, 8]);
        assert_eq!(list.len(), 5);

        // dropping the iterator still removes the selected elements
        list.extract_if(|x| *x > 4);
        list_eq(&list, [0, 2, 4]);
    }

    #[test]
    fn list_len() {
        let mut list = List::new();
        assert_eq!(list.len(), 0);

        list.push_front('a');
        list.push_back('b');
        assert_eq!(list.len(), 2);

        list.insert(1, 'c');
        assert_eq!(list.len(), 3);

        assert_eq!(list.remove(0), 'a');
        assert_eq!(list.len(), 2);

        list.append(&mut List::from_iter(['d', 'e', 'f']));
        assert_eq!(list.len(), 5);

        let tail = list.split_off(2);
        assert_eq!(list.len(), 2);
        assert_eq!(tail.len(), 3);

        list.splice_at(1, tail);
        assert_eq!(list.len(), 5);

        list.prepend(&mut List::from_iter(['g']));
        assert_eq!(list.len(), 6);

        assert_eq!(list.pop_back(), Some('b'));
        assert_eq!(list.len(), 5);

        list.clear();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn list_traversal_matches_len() {
        let mut list = List::new();
        for i in 0..4 {
            list.push_back(i);
            list.push_front(i);
        }
        list.insert(3, 9);
        list.remove(0);
        list.pop_back();
        list.pop_front();

        assert_eq!(list.iter().count(), list.len());
        assert_eq!(list.iter().rev().count(), list.len());
    }
}

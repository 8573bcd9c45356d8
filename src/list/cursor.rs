use crate::list::{List, Node};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

/// Error produced when a cursor cannot reach a requested position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekError {
    /// The motion stopped at a sentinel boundary after completing `moved`
    /// steps.
    Boundary { moved: usize },
    /// The requested index exceeds the length of the list by `excess`.
    OutOfBounds { excess: usize },
}

impl fmt::Display for SeekError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SeekError::Boundary { moved } => write!(
                f,
                "cursor stopped at the sentinel boundary after {} steps",
                moved
            ),
            SeekError::OutOfBounds { excess } => write!(
                f,
                "cursor target is {} positions beyond the end of the list",
                excess
            ),
        }
    }
}

impl std::error::Error for SeekError {}

/// A read-only cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can freely seek
/// back-and-forth.
///
/// A list of length *n* has *n* + 1 cursor positions: one per element,
/// indexed 0 to *n* - 1, plus position *n* at the tail sentinel.
///
/// # Examples
///
/// The tail sentinel is written `#` below.
/// ```
/// use sentinel_list::List;
///
/// // [ w x y z #]
/// let list = List::from_iter(['w', 'x', 'y', 'z']);
///
/// // At the start: [|w x y z #] (index = 0)
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'w'));
///
/// // One step forward: [ w|x y z #] (index = 1)
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'x'));
///
/// // At the tail sentinel: [ w x y z|#] (index = 4)
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), None);
///
/// // One step back: [ w x y|z #] (index = 3)
/// assert!(cursor.move_prev().is_ok());
/// assert_eq!(cursor.current(), Some(&'z'));
///
/// // Plain moves stop at the boundary; wrapping moves go around.
/// let mut cursor = list.cursor_end();
/// assert!(cursor.move_next().is_err());
/// cursor.move_next_wrapping(); // [|w x y z #] (index = 0)
/// assert_eq!(cursor.current(), Some(&'w'));
/// ```
pub struct Cursor<'a, T: 'a> {
    index: usize,
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a List<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    /// Copies the position into a second, independent cursor; no element
    /// is cloned.
    fn clone(&self) -> Self {
        Cursor { ..*self }
    }
}

/// Cursors are equal when they belong to the same list and sit at the
/// same position.
///
/// # Examples
/// ```
/// use sentinel_list::List;
///
/// let list = List::from_iter(["a", "b"]);
/// let first = list.cursor_start();
/// let mut second = first.clone();
/// assert_eq!(first, second);
///
/// second.move_next_wrapping();
/// assert_ne!(first, second);
///
/// // A clone of the list is a different list.
/// let copy = list.clone();
/// assert_ne!(first, copy.cursor_start());
/// ```
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_list_with(other) && self.current == other.current
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

/// Orders cursors of one list by their positions.
///
/// Cursors of different lists do not compare, so this is `PartialOrd`
/// but not `Ord`.
///
/// # Examples
/// ```
/// use sentinel_list::List;
///
/// let list = List::from_iter([1, 2, 3]);
/// let front = list.cursor_start();
/// let back = list.cursor_end();
/// assert!(front < back);
///
/// let copy = list.clone();
/// assert_eq!(front.partial_cmp(&copy.cursor_start()), None);
/// ```
impl<'a, T: 'a> PartialOrd for Cursor<'a, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.same_list_with(other) {
            return None;
        }
        Some(self.index().cmp(&other.index()))
    }
}

/// An editing cursor over a `List`.
///
/// A `CursorMut` seeks back and forth like a [`Cursor`] and can edit the
/// list as it goes. Its mutable accessors borrow the cursor itself rather
/// than the underlying list, so at most one element is reachable at a
/// time and edits stay sound.
///
/// [`CursorMut::view`] borrows the whole list back read-only for as long
/// as the returned reference lives.
///
/// A list of length *n* has *n* + 1 cursor positions: one per element,
/// indexed 0 to *n* - 1, plus position *n* at the tail sentinel.
///
/// # Examples
///
/// The list stays mutably borrowed while the cursor lives:
/// ```compile_fail
/// use sentinel_list::List;
///
/// let mut list = List::from_iter(['x', 'y']);
/// let mut cursor = list.cursor_start_mut();
/// let back = list.back(); // the list is exclusively borrowed
/// cursor.insert('w');
/// ```
pub struct CursorMut<'a, T: 'a> {
    index: usize,
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // ring-navigation helpers
        impl<'a, T: 'a> $CURSOR<'a, T> {
            pub(crate) fn is_tail_node(&self) -> bool {
                self.current == self.list.tail_node()
            }
            pub(crate) fn is_front_node(&self) -> bool {
                self.prev_node() == self.list.head_node()
            }
            pub(crate) fn next_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.next` is always valid since the chain is
                // a closed ring.
                unsafe { self.current.as_ref().next }
            }
            pub(crate) fn prev_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.prev` is always valid since the chain is
                // a closed ring.
                unsafe { self.current.as_ref().prev }
            }

            /// Walks the cursor forward by `steps` without boundary checks.
            ///
            /// The caller must guarantee that the walk stays on live nodes;
            /// running onto a sentinel leaves the index out of sync.
            unsafe fn seek_forward_fast(&mut self, steps: usize) {
                self.index += steps;
                (0..steps).for_each(|_| self.current = self.next_node());
            }

            /// Walks the cursor backward by `steps` without boundary checks.
            ///
            /// The caller must guarantee that the walk stays on live nodes;
            /// running onto a sentinel leaves the index out of sync.
            unsafe fn seek_backward_fast(&mut self, steps: usize) {
                self.index -= steps;
                (0..steps).for_each(|_| self.current = self.prev_node());
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Returns the cursor position, in `0..=len`.
            pub fn index(&self) -> usize {
                self.index
            }

            /// Returns `true` if the underlying list holds no elements.
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Steps to the next position, wrapping from the
            /// one-past-the-end position back to the first element.
            ///
            /// Runs in *O*(1) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use sentinel_list::List;
            ///
            /// let list = List::from_iter(['p', 'q', 'r']);
            /// let mut cursor = list.cursor_end();
            ///
            /// // at the tail sentinel
            /// assert_eq!(cursor.previous(), Some(&'r'));
            /// cursor.move_next_wrapping();
            ///
            /// // around to the first element
            /// assert_eq!(cursor.current(), Some(&'p'));
            /// ```
            pub fn move_next_wrapping(&mut self) {
                if self.is_empty() {
                    return;
                }
                if self.is_tail_node() {
                    self.move_to_start();
                } else {
                    self.index += 1;
                    self.current = self.next_node();
                }
            }

            /// Steps to the previous position, wrapping from the
            /// first element to the one-past-the-end position.
            ///
            /// Runs in *O*(1) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use sentinel_list::List;
            ///
            /// let list = List::from_iter(['p', 'q', 'r']);
            /// let mut cursor = list.cursor_start();
            ///
            /// // at the first element
            /// assert_eq!(cursor.current(), Some(&'p'));
            /// cursor.move_prev_wrapping();
            ///
            /// // around to the tail sentinel
            /// assert_eq!(cursor.previous(), Some(&'r'));
            /// ```
            pub fn move_prev_wrapping(&mut self) {
                if self.is_empty() {
                    return;
                }
                if self.is_front_node() {
                    self.move_to_end();
                } else {
                    self.index -= 1;
                    self.current = self.prev_node();
                }
            }

            /// Steps to the next position, or fails when the cursor is
            /// already at the one-past-the-end position.
            ///
            /// Runs in *O*(1) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use sentinel_list::List;
            ///
            /// let list = List::from_iter([10, 20]);
            /// let mut cursor = list.cursor_end();
            ///
            /// // already at the tail sentinel
            /// assert!(cursor.move_next().is_err());
            ///
            /// // the failed move left the cursor in place
            /// assert_eq!(cursor.previous(), Some(&20));
            /// ```
            pub fn move_next(&mut self) -> Result<(), SeekError> {
                if !self.is_empty() && !self.is_tail_node() {
                    self.index += 1;
                    self.current = self.next_node();
                    return Ok(());
                }
                Err(SeekError::Boundary { moved: 0 })
            }

            /// Steps to the previous position, or fails when the cursor is
            /// already at the first element.
            ///
            /// Runs in *O*(1) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use sentinel_list::List;
            ///
            /// let list = List::from_iter([10, 20]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // already at the first element
            /// assert!(cursor.move_prev().is_err());
            ///
            /// // the failed move left the cursor in place
            /// assert_eq!(cursor.current(), Some(&10));
            /// ```
            pub fn move_prev(&mut self) -> Result<(), SeekError> {
                if !self.is_empty() && !self.is_front_node() {
                    self.index -= 1;
                    self.current = self.prev_node();
                    return Ok(());
                }
                Err(SeekError::Boundary { moved: 0 })
            }

            /// Walks forward by `steps` positions, or fails when the walk
            /// hits the tail sentinel early.
            ///
            /// If an error occurs, the cursor stays at the one-past-the-end
            /// position and the error reports the number of completed steps.
            ///
            /// Runs in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use sentinel_list::{List, SeekError};
            ///
            /// let list = List::from_iter([10, 20, 30]);
            /// let mut cursor = list.cursor_start();
            ///
            /// assert!(cursor.seek_forward(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&30));
            ///
            /// // one step remains; asking for four stops at the boundary
            /// assert_eq!(cursor.seek_forward(4), Err(SeekError::Boundary { moved: 1 }));
            /// assert_eq!(cursor.previous(), Some(&30));
            /// ```
            pub fn seek_forward(&mut self, steps: usize) -> Result<(), SeekError> {
                (0..steps)
                    .try_for_each(|i| self.move_next().map_err(|_| SeekError::Boundary { moved: i }))
            }

            /// Walks backward by `steps` positions, or fails when the walk
            /// hits the first element early.
            ///
            /// If an error occurs, the cursor stays at the first element and
            /// the error reports the number of completed steps.
            ///
            /// Runs in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use sentinel_list::{List, SeekError};
            ///
            /// let list = List::from_iter([10, 20, 30]);
            /// let mut cursor = list.cursor_end();
            ///
            /// assert!(cursor.seek_backward(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&20));
            ///
            /// // one step remains; asking for three stops at the first element
            /// assert_eq!(cursor.seek_backward(3), Err(SeekError::Boundary { moved: 1 }));
            /// assert_eq!(cursor.current(), Some(&10));
            /// ```
            pub fn seek_backward(&mut self, steps: usize) -> Result<(), SeekError> {
                (0..steps)
                    .try_for_each(|i| self.move_prev().map_err(|_| SeekError::Boundary { moved: i }))
            }

            /// Walks to the absolute position `target`, or fails when
            /// `target > len`.
            ///
            /// If an error occurs, the cursor stays put.
            ///
            /// The cursor walks forward or backward, whichever direction is
            /// shorter from its current position.
            ///
            /// Runs in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use sentinel_list::{List, SeekError};
            ///
            /// let list = List::from_iter([10, 20, 30]);
            /// let mut cursor = list.cursor_start();
            ///
            /// assert!(cursor.seek_to(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&30));
            ///
            /// // index 4 does not exist in a list of length 3
            /// assert_eq!(cursor.seek_to(4), Err(SeekError::OutOfBounds { excess: 1 }));
            /// assert_eq!(cursor.current(), Some(&30));
            /// ```
            pub fn seek_to(&mut self, target: usize) -> Result<(), SeekError> {
                if target == self.index {
                    return Ok(());
                }
                let len = self.list.len();
                match target {
                    target if target > len => {
                        return Err(SeekError::OutOfBounds {
                            excess: target - len,
                        })
                    }
                    0 => self.move_to_start(),
                    target if target == len => self.move_to_end(),
                    _ => unsafe {
                        // current=c, target=t, tail sentinel=#
                        if target > self.index {
                            // target is at the right side of current: [   c----->t   #]
                            if target - self.index <= len - target {
                                // target is near the right side of current: [    c-->t     #]
                                self.seek_forward_fast(target - self.index);
                            } else {
                                // target is far from the right side of current: [ c     t<--#]
                                self.move_to_end();
                                self.seek_backward_fast(len - target);
                            }
                        } else {
                            // target is at the left side of current: [   t<-----c   #]
                            if self.index - target <= target {
                                // target is near the left side of current: [    t<--c     #]
                                self.seek_backward_fast(self.index - target);
                            } else {
                                // target is far from the left side of current: [-->t      c #]
                                self.move_to_start();
                                self.seek_forward_fast(target);
                            }
                        }
                    },
                }
                Ok(())
            }

            /// Seats the cursor on the first element.
            ///
            /// Runs in *O*(1) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use sentinel_list::List;
            ///
            /// let list = List::from_iter([10, 20, 30]);
            /// let mut cursor = list.cursor_end();
            ///
            /// cursor.move_to_start();
            /// assert_eq!(cursor.index(), 0);
            /// assert_eq!(cursor.current(), Some(&10));
            /// ```
            #[inline]
            pub fn move_to_start(&mut self) {
                self.index = 0;
                self.current = self.list.front_node();
            }

            /// Seats the cursor on the tail sentinel, after the last
            /// element.
            ///
            /// Runs in *O*(1) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use sentinel_list::List;
            ///
            /// let list = List::from_iter([10, 20, 30]);
            /// let mut cursor = list.cursor_start();
            ///
            /// cursor.move_to_end();
            /// assert_eq!(cursor.index(), 3);
            /// assert_eq!(cursor.current(), None);
            /// assert_eq!(cursor.previous(), Some(&30));
            /// ```
            #[inline]
            pub fn move_to_end(&mut self) {
                self.index = self.list.len();
                self.current = self.list.tail_node();
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("current", &self.current())
                    .field("index", &self.index)
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: NonNull<Node<T>>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    fn same_list_with(&self, other: &Self) -> bool {
        self.list as *const _ == other.list as *const _
    }

    /// Returns a reference to the element at the cursor, or `None` at the
    /// tail sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from_iter(['a', 'b']);
    /// assert_eq!(list.cursor(0).current(), Some(&'a'));
    /// assert_eq!(list.cursor(1).current(), Some(&'b'));
    /// assert_eq!(list.cursor(2).current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        if self.is_tail_node() {
            return None;
        }
        // SAFETY: non-sentinel nodes always hold a valid element, and the
        // list is borrowed immutably for the whole of `'a`.
        unsafe { Some(&self.current.as_ref().element) }
    }

    /// Returns a reference to the element before the cursor, or `None` at
    /// the first element.
    ///
    /// Backward walks read through this accessor; see [`CursorBackIter`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from_iter(['a', 'b']);
    /// assert_eq!(list.cursor(0).previous(), None);
    /// assert_eq!(list.cursor(1).previous(), Some(&'a'));
    /// assert_eq!(list.cursor(2).previous(), Some(&'b'));
    /// ```
    pub fn previous(&self) -> Option<&'a T> {
        if self.is_front_node() {
            return None;
        }
        // SAFETY: the previous node of a non-first position is never a
        // sentinel, and non-sentinel nodes always hold a valid element.
        Some(unsafe { &self.prev_node().as_ref().element })
    }

    /// Returns the signed offset from this cursor to `other`: the number of
    /// forward steps that would move this cursor to `other`'s position
    /// (negative when `other` is closer to the front).
    ///
    /// Returns `None` when the cursors view different lists; positions in
    /// different lists have no distance. The offset is computed from the
    /// tracked positions, never from node addresses, so it is exact even
    /// though nodes are laid out arbitrarily in memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let first = list.cursor_start();
    /// let last = list.cursor_end();
    /// assert_eq!(first.offset_to(&last), Some(3));
    /// assert_eq!(last.offset_to(&first), Some(-3));
    ///
    /// let other_list = list.clone();
    /// assert_eq!(first.offset_to(&other_list.cursor_start()), None);
    /// ```
    pub fn offset_to(&self, other: &Self) -> Option<isize> {
        self.same_list_with(other)
            .then(|| other.index() as isize - self.index() as isize)
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, current: NonNull<Node<T>>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    /// Allocates a node for `item` and links it in before `next`.
    ///
    /// The caller must guarantee that `next` is a node of the list this
    /// cursor edits.
    unsafe fn insert_before(&mut self, next: NonNull<Node<T>>, item: T) -> NonNull<Node<T>> {
        let node = Node::new_detached(item);
        self.list.attach_node(next.as_ref().prev, next, node);
        node
    }
}

// Methods that do not change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Returns a reference to the element at the cursor, or `None` at the
    /// tail sentinel.
    ///
    /// The borrow is tied to the cursor, so the cursor cannot edit the list
    /// while the reference is alive.
    pub fn current(&self) -> Option<&T> {
        if self.is_tail_node() {
            return None;
        }
        // SAFETY: non-sentinel nodes always hold a valid element.
        unsafe { Some(&self.current.as_ref().element) }
    }

    /// Returns a reference to the element before the cursor, or `None` at
    /// the first element.
    pub fn previous(&self) -> Option<&T> {
        if self.is_front_node() {
            return None;
        }
        // SAFETY: the previous node of a non-first position is never a
        // sentinel, and non-sentinel nodes always hold a valid element.
        Some(unsafe { &self.prev_node().as_ref().element })
    }

    /// Returns a mutable reference to the element at the cursor, or `None`
    /// at the tail sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([2, 3, 5]);
    ///
    /// let mut cursor = list.cursor_mut(1);
    /// *cursor.current_mut().unwrap() += 30;
    /// assert_eq!(cursor.current(), Some(&33));
    ///
    /// // the tail sentinel holds no element
    /// assert!(list.cursor_mut(3).current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.is_tail_node() {
            return None;
        }
        // SAFETY: non-sentinel nodes always hold a valid element, and the
        // borrow is tied to `&mut self`, so no other access can overlap it.
        unsafe { Some(&mut self.current.as_mut().element) }
    }

    /// Returns a mutable reference to the element before the cursor, or
    /// `None` at the first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([2, 3, 5]);
    ///
    /// let mut cursor = list.cursor_mut(3);
    /// *cursor.previous_mut().unwrap() += 30;
    /// assert_eq!(cursor.previous(), Some(&35));
    ///
    /// // nothing sits before the first element
    /// assert!(list.cursor_mut(0).previous_mut().is_none());
    /// ```
    pub fn previous_mut(&mut self) -> Option<&mut T> {
        if self.is_front_node() {
            return None;
        }
        // SAFETY: the previous node of a non-first position is never a
        // sentinel, and the borrow is tied to `&mut self`.
        Some(unsafe { &mut self.prev_node().as_mut().element })
    }

    /// Borrows a read-only cursor at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.current, self.index)
    }

    /// Gives up editing and keeps the position as a read-only cursor.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.current, self.index)
    }

    /// Borrows the whole list back read-only.
    ///
    /// The cursor holds the only way to reach the list while it lives;
    /// `view` hands out a reference for whole-list reads in between edits.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// assert_eq!(cursor.view().back(), Some(&3));
    /// assert_eq!(cursor.view().len(), 3);
    ///
    /// cursor.insert(0);
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 3]);
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

// Methods that might change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Pushes an element onto the front of the list through the cursor.
    ///
    /// Does the same as [`List::push_front`] without releasing the
    /// cursor's borrow. The cursor keeps its node; its index grows by
    /// one.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([5, 6]);
    /// let mut cursor = list.cursor_start_mut();
    /// assert_eq!(cursor.index(), 0);
    ///
    /// cursor.push_front(4);
    /// assert_eq!(cursor.index(), 1);
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![4, 5, 6]);
    /// ```
    pub fn push_front(&mut self, item: T) {
        self.list.push_front(item);
        self.index += 1;
    }

    /// Removes and returns the first element, or `None` on an empty list.
    ///
    /// Does the same as [`List::pop_front`] without releasing the
    /// cursor's borrow. A cursor seated on the first node moves to the
    /// new first node; any other cursor keeps its node and its index
    /// drops by one.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([5, 6, 7]);
    /// let mut cursor = list.cursor_mut(1);
    /// assert_eq!(cursor.current(), Some(&6));
    ///
    /// assert_eq!(cursor.pop_front(), Some(5));
    /// assert_eq!(cursor.index(), 0);
    /// assert_eq!(cursor.current(), Some(&6));
    ///
    /// // popping the element under the cursor reseats it on the next one
    /// assert_eq!(cursor.pop_front(), Some(6));
    /// assert_eq!(cursor.current(), Some(&7));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![7]);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let is_front = self.is_front_node();
        let item = self.list.pop_front();
        if is_front {
            self.current = self.list.front_node();
        } else {
            self.index -= 1;
        }
        item
    }

    /// Appends an element through the cursor.
    ///
    /// Does the same as [`List::push_back`] without releasing the
    /// cursor's borrow. A cursor at the one-past-the-end position stays
    /// there, after the new element.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([5, 6]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// // `list` is unreachable while `cursor` lives; edits go through
    /// // the cursor instead.
    /// cursor.push_back(7);
    /// cursor.push_front(4);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![4, 5, 6, 7]);
    /// ```
    pub fn push_back(&mut self, item: T) {
        self.list.push_back(item);
        // a cursor seated on the tail sentinel is now one position later
        if self.is_tail_node() {
            self.index = self.list.len();
        }
    }

    /// Removes and returns the last element, or `None` on an empty list.
    ///
    /// Does the same as [`List::pop_back`] without releasing the
    /// cursor's borrow. A cursor seated on the removed node or on the
    /// tail sentinel ends up at the one-past-the-end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([5, 6, 7]);
    /// let mut cursor = list.cursor_mut(2);
    /// assert_eq!(cursor.current(), Some(&7));
    ///
    /// // the node under the cursor goes away; the cursor lands on the
    /// // tail sentinel
    /// assert_eq!(cursor.pop_back(), Some(7));
    /// assert_eq!(cursor.index(), 2);
    /// assert_eq!(cursor.current(), None);
    ///
    /// assert_eq!(cursor.pop_back(), Some(6));
    /// assert_eq!(cursor.index(), 1);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![5]);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // The cursor must not keep addressing the removed node, and its
        // index must stay within `0..=len`.
        let reseat = self.is_tail_node() || self.current == self.list.back_node();
        let item = self.list.pop_back();
        if reseat {
            self.move_to_end();
        }
        item
    }

    /// Inserts an element before the cursor position.
    ///
    /// The cursor keeps its node; its index grows by one and the new
    /// element shows up at `previous()`.
    ///
    /// Runs in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter([10, 30]);
    /// let mut cursor = list.cursor_mut(1);
    ///
    /// cursor.insert(20); // [10, 20, 30]
    /// assert_eq!(cursor.index(), 2);
    /// assert_eq!(cursor.previous(), Some(&20));
    /// assert_eq!(cursor.current(), Some(&30));
    ///
    /// cursor.move_to_end();
    /// cursor.insert(40); // [10, 20, 30, 40]
    /// assert_eq!(cursor.previous(), Some(&40));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![10, 20, 30, 40]);
    /// ```
    pub fn insert(&mut self, item: T) {
        // SAFETY: `self.current` is a node of the cursor's own list.
        unsafe { self.insert_before(self.current, item) };
        self.index += 1;
    }

    /// Removes and returns the element at the cursor, or `None` at the
    /// tail sentinel.
    ///
    /// After a removal the cursor sits on the node that followed the
    /// removed one, at the same index.
    ///
    /// Runs in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter(['a', 'b', 'c', 'd']);
    /// let mut cursor = list.cursor_mut(1);
    ///
    /// assert_eq!(cursor.remove(), Some('b')); // ['a', 'c', 'd']
    /// assert_eq!(cursor.index(), 1);
    /// assert_eq!(cursor.current(), Some(&'c'));
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.remove(), None);
    ///
    /// assert_eq!(Vec::from_iter(list), vec!['a', 'c', 'd']);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        if self.is_tail_node() {
            return None;
        }
        let next = self.next_node();
        // SAFETY: `self.current` is a live non-sentinel node of the
        // cursor's own list.
        let node = unsafe { self.list.detach_node(self.current) };
        self.current = next;
        Some(Node::into_element(node))
    }

    /// Removes and returns the element before the cursor, or `None` at
    /// the first element.
    ///
    /// The cursor keeps its node; its index drops by one.
    ///
    /// Runs in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter(['a', 'b', 'c', 'd']);
    /// let mut cursor = list.cursor_mut(2);
    ///
    /// assert_eq!(cursor.backspace(), Some('b')); // ['a', 'c', 'd']
    /// assert_eq!(cursor.index(), 1);
    /// assert_eq!(cursor.current(), Some(&'c'));
    ///
    /// cursor.move_to_start();
    /// assert_eq!(cursor.backspace(), None);
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.backspace(), Some('d')); // ['a', 'c']
    /// assert_eq!(cursor.current(), None);
    ///
    /// assert_eq!(Vec::from_iter(list), vec!['a', 'c']);
    /// ```
    pub fn backspace(&mut self) -> Option<T> {
        self.move_prev().ok().and_then(|_| self.remove())
    }

    /// Splits off everything from the cursor position to the back.
    ///
    /// The cursor's element leads the returned list; the original list
    /// keeps the part before it. The cursor itself ends up at the
    /// one-past-the-end position of the shortened list. At the tail
    /// sentinel there is nothing to split off and `None` is returned.
    ///
    /// Runs in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter(1..=6);
    /// let mut cursor = list.cursor_mut(4);
    ///
    /// let tail = cursor.split().unwrap();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.index(), 4);
    ///
    /// assert_eq!(Vec::from_iter(tail), vec![5, 6]);
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4]);
    /// ```
    pub fn split(&mut self) -> Option<List<T>> {
        if self.is_tail_node() {
            return None;
        }
        let len = self.list.len - self.index;
        // the cursor moves to the tail sentinel of the shortened list
        let current = std::mem::replace(&mut self.current, self.list.tail_node());
        // SAFETY: `current` is a live node, so `current..=back` is a valid
        // chain of exactly `len` nodes.
        unsafe {
            Some(List::from_detached(self.list.detach_nodes(
                current,
                self.list.back_node(),
                len,
            )))
        }
    }

    /// Splits off everything before the cursor position.
    ///
    /// The returned list holds the part in front of the cursor's
    /// element; the cursor keeps its node and becomes position 0 of the
    /// shortened list. At the first element there is nothing to split
    /// off and `None` is returned.
    ///
    /// Runs in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter(1..=6);
    /// let mut cursor = list.cursor_mut(4);
    ///
    /// let head = cursor.split_before().unwrap();
    /// assert_eq!(cursor.current(), Some(&5));
    /// assert_eq!(cursor.index(), 0);
    ///
    /// assert_eq!(Vec::from_iter(head), vec![1, 2, 3, 4]);
    /// assert_eq!(Vec::from_iter(list), vec![5, 6]);
    /// ```
    pub fn split_before(&mut self) -> Option<List<T>> {
        if self.is_front_node() {
            return None;
        }
        // the cursor's node becomes the new front, so its index drops to 0
        let len = std::mem::replace(&mut self.index, 0);
        // SAFETY: `current` is not the front, so `front..=current.prev` is
        // a valid chain of exactly `len` nodes.
        unsafe {
            Some(List::from_detached(self.list.detach_nodes(
                self.list.front_node(),
                self.prev_node(),
                len,
            )))
        }
    }

    /// Splices another list between the current node and its previous node,
    /// preserving the order of `other`.
    ///
    /// The nodes of `other` are transferred as they are, without copying
    /// any element; taking `other` by value is what guarantees it ends up
    /// empty. The cursor stays at the same node; its index grows by the
    /// length of `other`, so the first spliced element sits at the cursor's
    /// old index.
    ///
    /// Runs in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from_iter(['a', 'e', 'f']);
    /// let middle = List::from_iter(['b', 'c', 'd']);
    /// let mut cursor = list.cursor_mut(1);
    ///
    /// cursor.splice(middle);
    /// assert_eq!(cursor.current(), Some(&'e'));
    /// assert_eq!(cursor.index(), 4);
    ///
    /// assert_eq!(Vec::from_iter(list), vec!['a', 'b', 'c', 'd', 'e', 'f']);
    /// ```
    pub fn splice(&mut self, other: List<T>) {
        if let Some(detached) = other.into_detached() {
            self.index += detached.len;
            // SAFETY: `current.prev` and `current` are adjacent nodes of
            // the cursor's own list.
            unsafe {
                self.list
                    .attach_nodes(self.prev_node(), self.current, detached);
            }
        }
    }
}

/// An iterator over `&T` driven by a [`Cursor`].
///
/// Unlike [`Iter`] and [`IterMut`], it is not fused: stepping past the
/// boundary yields `None` once and then wraps around to the other end.
///
/// [`Iter`]: crate::Iter
/// [`IterMut`]: crate::IterMut
///
/// # Examples
///
/// ```
/// use sentinel_list::List;
///
/// let list = List::from_iter(['x', 'y']);
/// let mut steps = list.cursor_start().into_iter();
/// assert_eq!(steps.next(), Some(&'x'));
/// assert_eq!(steps.next(), Some(&'y'));
/// assert_eq!(steps.next(), None); // the boundary
/// assert_eq!(steps.next(), Some(&'x')); // wrapped around
///
/// let cursor = steps.into_cursor();
/// assert_eq!(cursor.current(), Some(&'y'));
/// ```
pub struct CursorIter<'a, T: 'a> {
    pub(crate) cursor: Cursor<'a, T>,
}

/// The backward counterpart of [`CursorIter`], reading elements through
/// [`Cursor::previous`].
///
/// # Examples
///
/// ```
/// use sentinel_list::List;
///
/// let list = List::from_iter(['x', 'y']);
/// let mut steps = list.cursor_end().into_iter().rev();
/// assert_eq!(steps.next(), Some(&'y'));
/// assert_eq!(steps.next(), Some(&'x'));
/// assert_eq!(steps.next(), None); // the boundary
/// assert_eq!(steps.next(), Some(&'y')); // wrapped around
///
/// let cursor = steps.into_cursor();
/// assert_eq!(cursor.previous(), Some(&'x'));
/// ```
pub struct CursorBackIter<'a, T: 'a> {
    pub(crate) cursor: Cursor<'a, T>,
}

impl<'a, T: 'a> CursorIter<'a, T> {
    /// Releases the iterator and hands back the cursor driving it.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        self.cursor
    }

    /// Turns the walk around without moving the cursor.
    pub fn rev(self) -> CursorBackIter<'a, T> {
        CursorBackIter {
            cursor: self.cursor,
        }
    }

    /// Reads the element the next `next` call would yield.
    pub fn peek(&self) -> Option<&'a T> {
        self.cursor.current()
    }
}

impl<'a, T: 'a> CursorBackIter<'a, T> {
    /// Releases the iterator and hands back the cursor driving it.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        self.cursor
    }

    /// Turns the walk around without moving the cursor.
    pub fn rev(self) -> CursorIter<'a, T> {
        CursorIter {
            cursor: self.cursor,
        }
    }

    /// Reads the element the next `next` call would yield.
    pub fn peek(&self) -> Option<&'a T> {
        self.cursor.previous()
    }
}

impl<'a, T: 'a> From<CursorIter<'a, T>> for Cursor<'a, T> {
    fn from(cursor_iter: CursorIter<'a, T>) -> Self {
        cursor_iter.into_cursor()
    }
}

impl<'a, T: 'a> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        cursor.into_cursor()
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

unsafe impl<T: Sync> Send for CursorIter<'_, T> {}

unsafe impl<T: Sync> Sync for CursorIter<'_, T> {}

unsafe impl<T: Sync> Send for CursorBackIter<'_, T> {}

unsafe impl<T: Sync> Sync for CursorBackIter<'_, T> {}

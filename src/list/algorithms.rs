use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

pub mod drain;
mod merge;
mod sort;

use sort::merge_sort;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        // Lengths are tracked, so unequal sizes never walk the chains.
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Clone into `self`, reusing as many existing nodes as possible.
    fn clone_from(&mut self, other: &Self) {
        self.assign(other.iter().cloned());
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> List<T> {
    /// Returns `true` if some element of the list equals `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from(["ash", "birch", "cedar"]);
    ///
    /// assert!(list.contains(&"birch"));
    /// assert!(!list.contains(&"oak"));
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Clones the elements into a new `Vec`, front to back.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Consumes the list into a `Vec`, front to back.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Reverses the order of the elements, in place.
    ///
    /// Every node keeps its allocation: the walk swaps the `next`/`prev`
    /// pair of each node of the ring (sentinels included) and then swaps
    /// the two sentinel boxes, so no element is moved or copied.
    ///
    /// Applying `reverse` twice restores the original order.
    ///
    /// # Complexity
    ///
    /// Runs in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1, 2, 3, 4]);
    /// list.reverse();
    /// assert_eq!(list.to_vec(), vec![4, 3, 2, 1]);
    ///
    /// list.reverse();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }
        let head = self.head_node();
        let mut node = head;
        loop {
            // SAFETY: every link of the ring points at a live node, and the
            // walk follows the saved `next` links, so it visits each node
            // exactly once before coming back to `head`.
            unsafe {
                let links = node.as_mut();
                std::mem::swap(&mut links.next, &mut links.prev);
                node = links.prev; // the original `next`
            }
            if node == head {
                break;
            }
        }
        // The old head sentinel now closes the ring after the last
        // element, so the two sentinels trade roles.
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Removes consecutive repeated elements.
    ///
    /// Only runs of equal neighbours collapse to their first element;
    /// equal elements separated by a different one are all kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1, 1, 2, 2, 2, 3, 1]);
    /// list.dedup();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 1]);
    /// ```
    pub fn dedup(&mut self)
    where
        T: PartialEq,
    {
        self.dedup_by(|a, b| a == b)
    }

    /// Removes all but the first of consecutive elements satisfying the
    /// given equality relation.
    ///
    /// The `same_bucket` function is passed the later element first, and
    /// the later element is the one removed when it returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from(["foo", "bar", "Bar", "baz", "bar"]);
    /// list.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
    /// assert_eq!(list.to_vec(), vec!["foo", "bar", "baz", "bar"]);
    /// ```
    pub fn dedup_by<F>(&mut self, mut same_bucket: F)
    where
        F: FnMut(&mut T, &mut T) -> bool,
    {
        let tail = self.tail_node();
        let mut current = self.front_node();
        while current != tail {
            // SAFETY: `current` is a live node, so its `next` link is valid.
            let mut next = unsafe { current.as_ref().next };
            if next == tail {
                break;
            }
            // SAFETY: both nodes are live and distinct, so the two mutable
            // borrows do not overlap.
            let same = unsafe {
                same_bucket(&mut next.as_mut().element, &mut current.as_mut().element)
            };
            if same {
                // SAFETY: `next` is a live non-sentinel node of this list.
                drop(unsafe { self.detach_node(next) });
            } else {
                current = next;
            }
        }
    }

    /// Removes all but the first of consecutive elements that resolve to
    /// the same key.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([10, 20, 21, 30, 20]);
    /// list.dedup_by_key(|i| *i / 10);
    /// assert_eq!(list.to_vec(), vec![10, 20, 30, 20]);
    /// ```
    pub fn dedup_by_key<K, F>(&mut self, mut key: F)
    where
        F: FnMut(&mut T) -> K,
        K: PartialEq,
    {
        self.dedup_by(|a, b| key(a) == key(b))
    }

    /// Sorts the list.
    ///
    /// The sort is stable: equal elements keep their original order.
    ///
    /// # Complexity
    ///
    /// Runs in *O*(*n* * log(*n*)) time and *O*(1) memory.
    ///
    /// # Current Implementation
    ///
    /// A merge sort over the links, falling back to an insertion sort
    /// below a small range length. Nodes are relinked in place, so no
    /// element is moved or copied and no side storage is allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([4, 1, 9, 2, 9]);
    /// list.sort();
    /// assert_eq!(list.into_vec(), vec![1, 2, 4, 9, 9]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        merge_sort(self, |a, b| a.lt(b));
    }

    /// Sorts the list with a comparator function.
    ///
    /// The sort is stable: elements that compare equal keep their
    /// original order.
    ///
    /// `compare` must define a total order over the elements. When it
    /// does not, the resulting order is unspecified, though the list
    /// still holds every element exactly once. A total order relates
    /// every pair of elements one way (`Less`, `Equal` or `Greater`)
    /// and is transitive.
    ///
    /// [`f64`] is the usual example of a type that is only partially
    /// ordered, because of `NaN`; a list known to hold no `NaN` can
    /// still be sorted through `partial_cmp`:
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut floats = List::from([2.5f64, 0.5, 1.5]);
    /// floats.sort_by(|a, b| a.partial_cmp(b).unwrap());
    /// assert_eq!(floats.into_vec(), vec![0.5, 1.5, 2.5]);
    /// ```
    ///
    /// # Complexity
    ///
    /// Runs in *O*(*n* * log(*n*)) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([6, 8, 3, 7]);
    /// list.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(list.to_vec(), vec![3, 6, 7, 8]);
    ///
    /// // descending
    /// list.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(list.to_vec(), vec![8, 7, 6, 3]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        merge_sort(self, |a, b| compare(a, b) == Ordering::Less)
    }

    /// Sorts the list with a key extraction function.
    ///
    /// The sort is stable: elements with equal keys keep their original
    /// order. The key function runs on both sides of every comparison,
    /// so keys should be cheap to compute.
    ///
    /// # Complexity
    ///
    /// Runs in *O*(*m* \* *n* \* log(*n*)) time and *O*(1) memory,
    /// where the key function is *O*(*m*).
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([-4i32, 6, 1, -2]);
    /// list.sort_by_key(|k| k.abs());
    /// assert_eq!(list.into_vec(), vec![1, -2, -4, 6]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        merge_sort(self, |a, b| f(a).lt(&f(b)));
    }

    /// Merges `other` into the list, preserving the sorted order of both.
    ///
    /// Both lists are assumed to be sorted in ascending order. This
    /// precondition is not checked; if it does not hold, the result is
    /// an unspecified interleaving of the two sequences, but the list
    /// stays a valid sequence holding every element of both inputs.
    ///
    /// The nodes of `other` are relinked into `self` without copying or
    /// reallocating any element, and `other` is left empty. Equal
    /// elements keep the ones already in `self` first, so the merge is
    /// stable.
    ///
    /// # Complexity
    ///
    /// Runs in *O*(*n* + *m*) time and *O*(1)
    /// memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([1, 3, 5]);
    /// let mut other = List::from([2, 4]);
    ///
    /// list.merge(&mut other);
    ///
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
    /// assert!(other.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self)
    where
        T: Ord,
    {
        merge::merge_lists(self, other, |a, b| a.lt(b));
    }

    /// Merges `other` into the list, using the comparator function to
    /// define the order.
    ///
    /// Both lists are assumed to be sorted with respect to `compare`;
    /// see [`merge`](List::merge) for what happens when they are not.
    /// After merging, `other` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let mut list = List::from([5, 3, 1]);
    /// let mut other = List::from([4, 2]);
    ///
    /// list.merge_by(&mut other, |a, b| b.cmp(a));
    ///
    /// assert_eq!(list.to_vec(), vec![5, 4, 3, 2, 1]);
    /// assert!(other.is_empty());
    /// ```
    pub fn merge_by<F>(&mut self, other: &mut Self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        merge::merge_lists(self, other, |a, b| compare(a, b) == Ordering::Less);
    }
}

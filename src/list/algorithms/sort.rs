use crate::list::{connect, Node};
use crate::List;
use std::ptr::NonNull;

const INSERTION_SORT_THRESHOLD: usize = 8;

/// Stable in-place merge sort over the node links.
///
/// Elements never move; runs of nodes are relinked instead. Short ranges
/// fall back to an insertion sort, which is faster there and gives the
/// recursion a cheap base case.
pub(crate) fn merge_sort<T, F>(list: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if list.len() < 2 {
        return;
    }
    let (start, end) = (list.front_node(), list.tail_node());
    if list.len() <= INSERTION_SORT_THRESHOLD {
        // SAFETY: `start..end` is the whole non-empty range of live nodes.
        unsafe { insertion_sort_range(start, end, &mut less) };
    } else {
        // SAFETY: as above, and `list.len()` is exactly the node count of
        // the range.
        unsafe { merge_sort_range(start, end, list.len(), &mut less) };
    }
}

/// Walk `n` nodes forward from `node`.
unsafe fn nth_node<T>(mut node: NonNull<Node<T>>, n: usize) -> NonNull<Node<T>> {
    for _ in 0..n {
        node = node.as_ref().next;
    }
    node
}

/// Sort the range `start..end` of exactly `len` nodes and return its new
/// first node. `end` is the node after the range and never moves.
unsafe fn merge_sort_range<T, F>(
    start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    len: usize,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    if len <= INSERTION_SORT_THRESHOLD {
        return insertion_sort_range(start, end, less);
    }
    // The node count is known, so the midpoint is reached by walking
    // `len / 2` links instead of scanning the whole range twice.
    let half = len / 2;
    let mid = nth_node(start, half);
    // Sorting a half relinks only its own nodes, so `mid` keeps being the
    // boundary between the two halves.
    let start = merge_sort_range(start, mid, half, less);
    let mid = merge_sort_range(mid, end, len - half, less);
    merge_range(start, mid, end, less)
}

/// Merge the sorted ranges `start..mid` and `mid..end` in place and
/// return the first node of the merged range.
unsafe fn merge_range<T, F>(
    mut start: NonNull<Node<T>>,
    mid: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    // `start..mid` plays the role of the merged range, `mid..end` the
    // role of the source range. Source nodes move over in maximal runs.
    let merged_back = mid.as_ref().prev;
    let (mut dst, mut src) = (start, mid);
    // Once the first source element no longer sorts before the last
    // merged element, the two ranges are already in order.
    while src != end && less(&src.as_ref().element, &merged_back.as_ref().element) {
        // Find the first merged node that the source element sorts before.
        while dst != src && !less(&src.as_ref().element, &dst.as_ref().element) {
            dst = dst.as_ref().next;
        }
        if dst == src {
            break;
        }
        // Extend the source run while it keeps sorting before `*dst`,
        // then relink the whole run at once.
        let mut run_end = src.as_ref().next;
        while run_end != end && less(&run_end.as_ref().element, &dst.as_ref().element) {
            run_end = run_end.as_ref().next;
        }
        if dst == start {
            start = src;
        }
        move_nodes(src, run_end.as_ref().prev, dst);
        src = run_end;
    }
    start
}

/// Insertion-sort the range `start..end` and return its new first node.
unsafe fn insertion_sort_range<T, F>(
    mut start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut last_sorted = start;
    let mut unsorted = start.as_ref().next;
    while unsorted != end {
        let next = unsorted.as_ref().next;
        if !less(&unsorted.as_ref().element, &last_sorted.as_ref().element) {
            // Already in order; the sorted range grows by one for free.
            last_sorted = unsorted;
        } else {
            // Find the first sorted node that the element sorts before.
            // The scan is bounded by `unsorted` in case an inconsistent
            // comparator contradicts the check above; the node is then
            // left in place rather than relinked onto itself.
            let mut position = start;
            while position != unsorted
                && !less(&unsorted.as_ref().element, &position.as_ref().element)
            {
                position = position.as_ref().next;
            }
            if position == unsorted {
                last_sorted = unsorted;
            } else {
                if position == start {
                    start = unsorted;
                }
                move_node(unsorted, position);
            }
        }
        unsorted = next;
    }
    start
}

/// Relink the single node `from` to the position before `to`.
unsafe fn move_node<T>(from: NonNull<Node<T>>, to: NonNull<Node<T>>) {
    move_nodes(from, from, to);
}

/// Relink the chain `front..=back` to the position before `to`.
///
/// The chain must be non-empty and contiguous, and must not contain `to`.
unsafe fn move_nodes<T>(front: NonNull<Node<T>>, back: NonNull<Node<T>>, to: NonNull<Node<T>>) {
    connect(front.as_ref().prev, back.as_ref().next);
    connect(to.as_ref().prev, front);
    connect(back, to);
}

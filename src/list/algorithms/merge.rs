use crate::list::{DetachedNodes, List};

/// Merge the nodes of `other` into `list`, assuming both are sorted by
/// `less`.
///
/// The walk advances through `list` once; whenever the front of `other`
/// sorts before the current element, the maximal such run of `other` is
/// detached and relinked in one step. Whatever remains of `other` when
/// the walk reaches the tail sentinel is appended as a whole, so `other`
/// always ends up empty.
///
/// Ties keep the element of `list` first, which makes the merge stable.
/// When the inputs are not sorted the runs come out in an unspecified
/// interleaving, but every step keeps both rings valid.
pub(crate) fn merge_lists<T, F>(list: &mut List<T>, other: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let tail = list.tail_node();
    let mut dst = list.front_node();
    while dst != tail {
        if other.is_empty() {
            return;
        }
        // SAFETY: `dst` is a live node until it reaches the tail sentinel.
        match unsafe { take_run_before(other, &dst.as_ref().element, &mut less) } {
            // SAFETY: `dst.prev` and `dst` are adjacent nodes of `list`.
            Some(run) => unsafe { list.attach_nodes(dst.as_ref().prev, dst, run) },
            // SAFETY: `dst` is live, so its `next` link is valid.
            None => dst = unsafe { dst.as_ref().next },
        }
    }
    list.append(other);
}

/// Detach the longest non-empty prefix of `other` whose elements all sort
/// before `bound`, or return `None` if the first element does not.
unsafe fn take_run_before<T, F>(
    other: &mut List<T>,
    bound: &T,
    less: &mut F,
) -> Option<DetachedNodes<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    let tail = other.tail_node();
    let front = other.front_node();
    if front == tail || !less(&front.as_ref().element, bound) {
        return None;
    }
    let (mut back, mut len) = (front, 1);
    loop {
        let next = back.as_ref().next;
        if next == tail || !less(&next.as_ref().element, bound) {
            break;
        }
        back = next;
        len += 1;
    }
    Some(other.detach_nodes(front, back, len))
}

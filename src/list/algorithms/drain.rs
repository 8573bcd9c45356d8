use crate::list::cursor::CursorMut;
use crate::List;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// An owning iterator over a removed range of a `List`, front to back.
///
/// The range is unlinked from the list in [`List::drain`] itself, before
/// this iterator is handed out. Dropping the iterator merely drops the
/// elements that were not consumed; leaking it leaks those elements, but
/// the list is already in its final state either way.
pub struct Drain<'a, T: 'a> {
    removed: List<T>,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a> Drain<'a, T> {
    pub(crate) fn new(removed: List<T>) -> Self {
        Self {
            removed,
            _marker: PhantomData,
        }
    }
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.removed.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.removed.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.removed.pop_back()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> FusedIterator for Drain<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Drain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&self.removed).finish()
    }
}

/// An iterator which removes the elements a filter accepts, yielding them
/// in order.
///
/// When the iterator is dropped, the remaining elements are still run
/// through the filter and the accepted ones removed. If the iterator is
/// leaked instead, the walk simply stops where it was; the list keeps all
/// elements not yet removed and stays fully usable.
pub struct ExtractIf<'a, T: 'a, F: 'a>
where
    F: FnMut(&mut T) -> bool,
{
    cursor: CursorMut<'a, T>,
    filter: F,
}

impl<'a, T, F> ExtractIf<'a, T, F>
where
    F: FnMut(&mut T) -> bool,
{
    pub(crate) fn new(cursor: CursorMut<'a, T>, filter: F) -> Self {
        Self { cursor, filter }
    }
}

impl<T, F> Iterator for ExtractIf<'_, T, F>
where
    F: FnMut(&mut T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // `current_mut` is `None` exactly at the tail sentinel, so the
            // walk ends before the wrapping move could start over.
            if (self.filter)(self.cursor.current_mut()?) {
                return self.cursor.remove();
            }
            self.cursor.move_next_wrapping();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Anything between the cursor and the tail sentinel may still pass.
        (0, Some(self.cursor.view().len() - self.cursor.index()))
    }
}

impl<T, F> Drop for ExtractIf<'_, T, F>
where
    F: FnMut(&mut T) -> bool,
{
    fn drop(&mut self) {
        self.for_each(drop);
    }
}

impl<T: fmt::Debug, F> fmt::Debug for ExtractIf<'_, T, F>
where
    F: FnMut(&mut T) -> bool,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ExtractIf")
            .field(self.cursor.view())
            .finish()
    }
}

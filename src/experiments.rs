//! A fully safe deque built on [`GhostCell`] and [`StaticRc`], kept as a
//! playground for a branded-token node representation. The supported API of
//! this crate remains [`List`](crate::List).

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;

const FRONT: usize = 0;
const BACK: usize = 1;

/// A doubly-linked deque whose node ownership is split into two
/// [`StaticRc`] halves, one per inbound link.
///
/// Dropping a non-empty `TokenList` leaks its nodes, as joining the halves
/// requires the token. Call [`clear`](TokenList::clear) first.
pub struct TokenList<'id, T> {
    ends: [Option<NodeRef<'id, T>>; 2],
    len: usize,
}

struct Node<'id, T> {
    neighbors: [Option<NodeRef<'id, T>>; 2],
    value: T,
}

type NodeRef<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

impl<'id, T> Node<'id, T> {
    fn new(value: T) -> Self {
        let neighbors = [None, None];
        Self { neighbors, value }
    }
}

impl<'id, T> Default for TokenList<'id, T> {
    fn default() -> Self {
        let ends = [None, None];
        Self { ends, len: 0 }
    }
}

impl<'id, T> TokenList<'id, T> {
    // A node is owned by its two inbound links: for a node in the middle
    // these are its neighbours, for an end node one of them is the list
    // itself, and for a singleton both list slots hold a half.
    fn push_at(&mut self, side: usize, value: T, token: &mut GhostToken<'id>) {
        let inward = 1 - side;
        let (a, b) = Full::split(Full::new(GhostCell::new(Node::new(value))));
        match self.ends[side].take() {
            Some(end) => {
                end.borrow_mut(token).neighbors[side] = Some(a);
                b.borrow_mut(token).neighbors[inward] = Some(end);
            }
            None => self.ends[inward] = Some(a),
        }
        self.ends[side] = Some(b);
        self.len += 1;
    }

    fn pop_at(&mut self, side: usize, token: &mut GhostToken<'id>) -> Option<T> {
        let inward = 1 - side;
        let outer = self.ends[side].take()?;
        let inner = match outer.borrow_mut(token).neighbors[inward].take() {
            Some(neighbor) => {
                let inner = neighbor.borrow_mut(token).neighbors[side].take().unwrap();
                self.ends[side] = Some(neighbor);
                inner
            }
            None => self.ends[inward].take().unwrap(),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(outer, inner)).into_inner().value)
    }
}

impl<'id, T> TokenList<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn front<'a>(&'a self, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.ends[FRONT].as_ref().map(|node| &node.borrow(token).value)
    }
    pub fn back<'a>(&'a self, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.ends[BACK].as_ref().map(|node| &node.borrow(token).value)
    }
    pub fn push_front(&mut self, value: T, token: &mut GhostToken<'id>) {
        self.push_at(FRONT, value, token);
    }
    pub fn push_back(&mut self, value: T, token: &mut GhostToken<'id>) {
        self.push_at(BACK, value, token);
    }
    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop_at(FRONT, token)
    }
    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop_at(BACK, token)
    }
    pub fn clear(&mut self, token: &mut GhostToken<'id>) {
        while self.pop_at(FRONT, token).is_some() {}
    }
    pub fn to_vec(&self, token: &GhostToken<'id>) -> Vec<T>
    where
        T: Clone,
    {
        let mut items = Vec::with_capacity(self.len);
        let mut next = self.ends[FRONT].as_ref();
        while let Some(node) = next {
            let node = node.borrow(token);
            items.push(node.value.clone());
            next = node.neighbors[BACK].as_ref();
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use crate::experiments::TokenList;
    use ghost_cell::GhostToken;

    #[test]
    fn token_list_push_pop() {
        GhostToken::new(|mut token| {
            let mut list = TokenList::new();
            assert!(list.is_empty());
            list.push_back(1, &mut token);
            list.push_front(2, &mut token);
            list.push_back(3, &mut token);
            assert_eq!(list.len(), 3);
            assert_eq!(list.front(&token), Some(&2));
            assert_eq!(list.back(&token), Some(&3));
            assert_eq!(list.pop_back(&mut token), Some(3));
            assert_eq!(list.pop_front(&mut token), Some(2));
            assert_eq!(list.pop_back(&mut token), Some(1));
            assert_eq!(list.pop_front(&mut token), None);
            assert!(list.is_empty());
        })
    }

    #[test]
    fn token_list_orders_front_to_back() {
        GhostToken::new(|mut token| {
            let mut list = TokenList::new();
            for value in [1, 2, 3, 4] {
                list.push_back(value, &mut token);
            }
            list.push_front(0, &mut token);
            assert_eq!(list.to_vec(&token), vec![0, 1, 2, 3, 4]);
            list.clear(&mut token);
            assert_eq!(list.len(), 0);
            assert_eq!(list.to_vec(&token), Vec::<i32>::new());
        })
    }

    #[test]
    fn token_list_singleton_edges() {
        GhostToken::new(|mut token| {
            let mut list = TokenList::new();
            assert_eq!(list.front(&token), None);
            list.push_front('a', &mut token);
            assert_eq!(list.front(&token), list.back(&token));
            assert_eq!(list.pop_back(&mut token), Some('a'));
            assert_eq!(list.pop_back(&mut token), None);
        })
    }
}

//! Circular singly-linked list
//!
//! Nodes live in an index arena owned by the list. Each node's `next` is an
//! index into that arena, and the tail always links back to the head, so a
//! non-empty list is one closed cycle with no dangling end.

use std::borrow::Borrow;
use std::fmt;
use std::iter::FusedIterator;

/// A single cell of a [`CircularList`]
///
/// Holds a value and the arena index of its successor. The link is only
/// ever written by the owning list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularNode<T> {
    value: T,
    next: usize,
}

impl<T> CircularNode<T> {
    const fn new(value: T, next: usize) -> Self {
        Self { value, next }
    }

    /// The payload stored in this cell
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }
}

/// A circular list with a single designated entry point (`head`)
///
/// Invariant: for a list of `n` elements, following `next` from the head
/// `n` times lands on the head again, and every node is visited on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularList<T> {
    nodes: Vec<CircularNode<T>>,
    head: Option<usize>,
}

impl<T> CircularList<T> {
    /// Create an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
        }
    }

    /// Number of appended elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if nothing has been appended yet
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Cursor at the entry point, or `None` for an empty list
    #[must_use]
    pub fn head(&self) -> Option<Cursor<'_, T>> {
        self.head.map(|index| self.cursor(index))
    }

    /// Append a value at the tail, keeping the cycle closed.
    ///
    /// An empty list gets a single node linked to itself. Otherwise the tail
    /// is located by walking from the head to the node whose `next` is the
    /// head, and the new node is spliced in between the two.
    pub fn append(&mut self, value: T) {
        let index = self.nodes.len();
        match self.head {
            None => {
                self.nodes.push(CircularNode::new(value, index));
                self.head = Some(index);
            }
            Some(head) => {
                let tail = self.tail_of(head);
                self.nodes.push(CircularNode::new(value, head));
                self.nodes[tail].next = index;
            }
        }
    }

    /// Find the first node holding `value`, in traversal order from the head.
    ///
    /// The scan tests every node whose `next` is not the head, then tests the
    /// tail once the loop stops on it. For a one-element list the head is the
    /// tail and is tested exactly once. Performs at most `len()` comparisons.
    #[must_use]
    pub fn find<Q>(&self, value: &Q) -> Option<Cursor<'_, T>>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let head = self.head?;
        let mut current = head;

        while self.nodes[current].next != head {
            if self.nodes[current].value.borrow() == value {
                return Some(self.cursor(current));
            }
            current = self.nodes[current].next;
        }

        (self.nodes[current].value.borrow() == value).then(|| self.cursor(current))
    }

    /// Iterate values once around the cycle, head first and tail last
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.nodes.len(),
        }
    }

    fn tail_of(&self, head: usize) -> usize {
        let mut current = head;
        while self.nodes[current].next != head {
            current = self.nodes[current].next;
        }
        current
    }

    const fn cursor(&self, index: usize) -> Cursor<'_, T> {
        Cursor { list: self, index }
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for CircularList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a CircularList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowed position inside a [`CircularList`]
///
/// Cursors never leave the cycle: [`Cursor::successor`] always yields another
/// node of the same list.
pub struct Cursor<'a, T> {
    list: &'a CircularList<T>,
    index: usize,
}

impl<'a, T> Cursor<'a, T> {
    /// The node under the cursor
    #[must_use]
    pub fn node(&self) -> &'a CircularNode<T> {
        &self.list.nodes[self.index]
    }

    /// The value under the cursor
    #[must_use]
    pub fn value(&self) -> &'a T {
        &self.node().value
    }

    /// Follow the node's link; the tail's successor is the head
    #[must_use]
    pub fn successor(&self) -> Self {
        self.list.cursor(self.node().next)
    }

    /// Returns true if the cursor sits on the list's entry point
    #[must_use]
    pub fn is_head(&self) -> bool {
        self.list.head == Some(self.index)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list) && self.index == other.index
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("value", self.value())
            .finish()
    }
}

/// Iterator over a [`CircularList`] that stops after one full lap
pub struct Iter<'a, T> {
    list: &'a CircularList<T>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.current?];
        self.remaining -= 1;
        self.current = Some(node.next);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

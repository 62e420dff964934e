use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use alloc::boxed::Box;
use alloc::vec::Vec;

use super::error::{IndexOutOfBounds, NoSuchElement};
use super::iter::{IntoIter, Iter};
use super::node::Node;

/// A generic singly linked list that owns its nodes.
///
/// The list tracks its head, its tail, and its length, so pushing at either
/// end is O(1). The chain is singly directed; operations that need the
/// predecessor of a node, such as [`pop_back`](LinkedList::pop_back), walk
/// from the head.
pub struct LinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    size: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        LinkedList {
            head: None,
            tail: None,
            size: 0,
            marker: PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns a reference to the first element, or `None` if the list is empty.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|node| unsafe { &(*node.as_ptr()).data })
    }

    /// Returns a reference to the last element, or `None` if the list is empty.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|node| unsafe { &(*node.as_ptr()).data })
    }

    /// Returns a reference to the element at `index`, or `None` if `index`
    /// is past the end of the list.
    ///
    /// Unlike the positional mutators, an out-of-bounds lookup is not an
    /// error here.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.node_at(index).map(|node| unsafe { &(*node.as_ptr()).data })
    }

    /// Inserts an element at the front of the list.
    pub fn push_front(&mut self, data: T) {
        let node = Node::alloc(data, self.head);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.size += 1;
    }

    /// Inserts an element at the back of the list.
    pub fn push_back(&mut self, data: T) {
        let node = Node::alloc(data, None);
        match self.tail {
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.size += 1;
    }

    /// Inserts an element at position `index`, shifting the element currently
    /// there (and everything after it) one position towards the back.
    ///
    /// `index == len` appends. Fails with [`IndexOutOfBounds`] if
    /// `index > len`, leaving the list unmodified.
    pub fn insert(&mut self, index: usize, data: T) -> Result<(), IndexOutOfBounds> {
        if index > self.size {
            return Err(IndexOutOfBounds {
                index,
                len: self.size,
            });
        }
        if index == 0 {
            self.push_front(data);
            return Ok(());
        }
        if index == self.size {
            self.push_back(data);
            return Ok(());
        }

        let mut predecessor = self
            .node_at(index - 1)
            .expect("interior index has a predecessor");
        unsafe {
            let predecessor = predecessor.as_mut();
            predecessor.next = Some(Node::alloc(data, predecessor.next));
        }
        self.size += 1;
        Ok(())
    }

    /// Inserts every element of `values` starting at position `index`,
    /// preserving their order, as a single splice.
    ///
    /// `index == len` appends. Fails with [`IndexOutOfBounds`] if
    /// `index > len`; on failure, and on a panicking `values` iterator, the
    /// list is left unmodified.
    pub fn insert_all<I>(&mut self, index: usize, values: I) -> Result<(), IndexOutOfBounds>
    where
        I: IntoIterator<Item = T>,
    {
        if index > self.size {
            return Err(IndexOutOfBounds {
                index,
                len: self.size,
            });
        }

        // Build the incoming run as a detached chain first, so the splice
        // below is a whole-step link update.
        let mut chain = LinkedList::new();
        for data in values {
            chain.push_back(data);
        }
        let (Some(first), Some(mut last)) = (chain.head, chain.tail) else {
            return Ok(());
        };
        let count = chain.size;
        mem::forget(chain);

        let (predecessor, successor) = if index == 0 {
            (None, self.head)
        } else if index == self.size {
            (self.tail, None)
        } else {
            let prev = self
                .node_at(index - 1)
                .expect("interior index has a predecessor");
            (Some(prev), unsafe { prev.as_ref().next })
        };

        unsafe {
            match predecessor {
                Some(mut prev) => prev.as_mut().next = Some(first),
                None => self.head = Some(first),
            }
            last.as_mut().next = successor;
        }
        if successor.is_none() {
            self.tail = Some(last);
        }
        self.size += count;
        Ok(())
    }

    /// Removes and returns the first element.
    ///
    /// Fails with [`NoSuchElement`] if the list is empty.
    pub fn pop_front(&mut self) -> Result<T, NoSuchElement> {
        let head = self.head.ok_or(NoSuchElement)?;
        self.head = unsafe { head.as_ref().next };
        if self.head.is_none() {
            self.tail = None;
        }
        self.size -= 1;
        Ok(unsafe { Node::into_data(head) })
    }

    /// Removes and returns the last element.
    ///
    /// Fails with [`NoSuchElement`] if the list is empty. The predecessor of
    /// the tail is only reachable from the head, so this is O(n).
    pub fn pop_back(&mut self) -> Result<T, NoSuchElement> {
        let tail = self.tail.ok_or(NoSuchElement)?;
        match self.size.checked_sub(2).and_then(|index| self.node_at(index)) {
            Some(mut new_tail) => {
                unsafe { new_tail.as_mut().next = None };
                self.tail = Some(new_tail);
            }
            None => {
                self.head = None;
                self.tail = None;
            }
        }
        self.size -= 1;
        Ok(unsafe { Node::into_data(tail) })
    }

    /// Removes and returns the element at position `index`, shifting
    /// everything after it one position towards the front.
    ///
    /// Fails with [`IndexOutOfBounds`] if `index >= len`, leaving the list
    /// unmodified.
    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let out_of_bounds = IndexOutOfBounds {
            index,
            len: self.size,
        };
        if index >= self.size {
            return Err(out_of_bounds);
        }
        if index == 0 {
            return self.pop_front().map_err(|_| out_of_bounds);
        }
        if index == self.size - 1 {
            return self.pop_back().map_err(|_| out_of_bounds);
        }

        let mut predecessor = self
            .node_at(index - 1)
            .expect("interior index has a predecessor");
        unsafe {
            let predecessor = predecessor.as_mut();
            let node = predecessor.next.expect("interior node has a successor");
            predecessor.next = node.as_ref().next;
            self.size -= 1;
            Ok(Node::into_data(node))
        }
    }

    /// Removes every element from the list.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        self.tail = None;
        self.size = 0;
        while let Some(node) = current {
            current = unsafe { Box::from_raw(node.as_ptr()) }.next;
        }
    }

    /// Returns a forward iterator over the elements of the list.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head, self.size)
    }

    /// Copies the elements into a freshly allocated `Vec`, in list order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Finds the node at `index`, short-circuiting to the head or the tail
    /// where possible. Any index outside `0..len` answers `None`.
    fn node_at(&self, index: usize) -> Option<NonNull<Node<T>>> {
        if index >= self.size {
            return None;
        }
        if index == 0 {
            return self.head;
        }
        if index == self.size - 1 {
            return self.tail;
        }

        let mut current = self.head;
        for _ in 0..index {
            current = unsafe { current?.as_ref().next };
        }
        current
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut list = LinkedList::new();
        // Index 0 is in bounds for every list, so this cannot fail.
        let _ = list.insert_all(0, values);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for data in values {
            self.push_back(data);
        }
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}

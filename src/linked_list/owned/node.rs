use core::ptr::NonNull;

use alloc::boxed::Box;

/// A node in an owned singly linked list.
///
/// Each node is a separate heap allocation holding one element and the link
/// to its successor. The allocation is created by [`Node::alloc`] and must be
/// released through [`Node::into_data`] or by reboxing the pointer.
pub(super) struct Node<T> {
    pub(super) next: Option<NonNull<Node<T>>>,
    pub(super) data: T,
}

impl<T> Node<T> {
    /// Boxes a new node and leaks it to the chain.
    pub(super) fn alloc(data: T, next: Option<NonNull<Node<T>>>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { next, data })))
    }

    /// Reboxes an unlinked node and moves its element out.
    ///
    /// # Safety
    ///
    /// `node` must have come from [`Node::alloc`] and must already be
    /// unlinked: no other node or list may still point at it.
    pub(super) unsafe fn into_data(node: NonNull<Node<T>>) -> T {
        unsafe { Box::from_raw(node.as_ptr()) }.data
    }
}

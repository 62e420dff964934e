//! # Owned Singly Linked List
//!
//! This module provides a singly linked list that owns its nodes.
//!
//! ## Core Components
//!
//! - [`list::LinkedList`]: the list itself, tracking head, tail, and length.
//! - [`iter::Iter`] and [`iter::IntoIter`]: borrowed and draining iterators.
//! - [`error::IndexOutOfBounds`] and [`error::NoSuchElement`]: the two
//!   failure conditions a positional operation can report.
//!
//! ## Safety
//!
//! The chain is singly directed: every node is reachable from the head, the
//! tail's next pointer is `None`, and the stored length always equals the
//! number of nodes in the chain. All `unsafe` code in this module relies on
//! those invariants and re-establishes them before returning.

pub mod error;
pub mod iter;
pub mod list;

mod node;

#[cfg(test)]
mod tests;

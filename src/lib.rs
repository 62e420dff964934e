//! Owned sequence collections.
//!
//! The crate currently provides a single family of structures: owned linked
//! lists, where the list allocates and owns its nodes and hands elements in
//! and out by value. See [`linked_list`] for details.
#![no_std]

extern crate alloc;

pub mod linked_list;

//! An owned linked list implementation.
//!
//! In an owned linked list, the list allocates one heap node per element and
//! the nodes belong to the list itself. Elements move into the list on
//! insertion and move back out on removal. This is in contrast to an intrusive
//! linked list, where the link lives inside the caller's own structure and the
//! list never allocates.
//!
//! # Examples
//!
//! ```
//! use alder_collections::linked_list::owned::list::LinkedList;
//!
//! let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
//!
//! list.push_front(0);
//! list.insert_all(4, [4, 5]).unwrap();
//!
//! assert_eq!(list.len(), 6);
//! assert_eq!(list.front(), Some(&0));
//! assert_eq!(list.back(), Some(&5));
//! assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4, 5]);
//!
//! assert_eq!(list.remove(2), Ok(2));
//! assert_eq!(list.to_vec(), vec![0, 1, 3, 4, 5]);
//! ```
pub mod owned;

//! Stack implementations
//!
//! This module provides two sequential stacks with value semantics. Both
//! keep their elements in a singly-linked chain with a head and a count.
//! `ListStack` owns each node through a `Box`, following
//! [this blog post](http://cglab.ca/~abeinges/blah/too-many-lists/book/).
//! `ArenaStack` keeps its nodes in a `Vec` of slots linked by index, with a
//! free-list for reuse.
//!
//! Copying either stack is a deep copy. Assignment goes through `assign`,
//! which copies first and then swaps, so the target is only touched once
//! the copy exists.

use tracing::trace;

use crate::error::EmptyStackError;

mod arena;
mod list;

pub use self::arena::ArenaStack;
pub use self::list::ListStack;

/// The `Stack<T>` abstract data type.
pub trait Stack<T> {
  /// Creates a new, empty `Stack<T>`.
  fn new() -> Self;

  /// Pushes an element onto the stack.
  fn push(&mut self, elem: T);

  /// Drops the top element. Returns false, leaving the stack untouched, if
  /// there is nothing to pop.
  fn pop(&mut self) -> bool;

  /// Returns the top element without removing it.
  fn peek(&self) -> Result<&T, EmptyStackError>;

  /// Removes the top element and hands it back.
  fn peek_pop(&mut self) -> Result<T, EmptyStackError>;

  /// Drops every element, top first.
  fn clear(&mut self);

  /// Predicate that tests if the stack is empty.
  fn is_empty(&self) -> bool;

  /// Returns the number of elements in the stack.
  fn size(&self) -> usize;

  /// Exchanges the contents of two stacks without touching any element.
  fn swap(&mut self, other: &mut Self);

  /// Makes `self` a deep copy of `source`.
  ///
  /// The copy is built before `self` changes. The old contents end up in
  /// the temporary and are dropped with it.
  fn assign(&mut self, source: &Self)
  where Self: Clone + Sized {
    let mut copy = source.clone();
    trace!(from = self.size(), to = copy.size(), "assigning stack");
    self.swap(&mut copy);
  }
}

/// Exchanges the contents of `a` and `b`.
pub fn swap<T, S: Stack<T>>(a: &mut S, b: &mut S) {
  a.swap(b);
}

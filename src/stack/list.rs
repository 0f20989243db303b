use std::fmt;
use std::iter;
use std::mem;

use tracing::trace;

use super::*;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
  elem: T,
  next: Link<T>,
}

/// A list-based `Stack<T>`. Each node is owned by the one above it, and the
/// top node by the stack.
pub struct ListStack<T> {
  head: Link<T>,
  count: usize,
}

impl<T> ListStack<T> {
  fn unlink_head(&mut self) -> Option<T> {
    self.head.take().map(|node| {
      let node = *node;
      self.head = node.next;
      self.count -= 1;
      node.elem
    })
  }

  fn elems(&self) -> impl Iterator<Item = &T> {
    iter::successors(self.head.as_deref(), |node| node.next.as_deref())
      .map(|node| &node.elem)
  }
}

impl<T> Stack<T> for ListStack<T> {
  fn new() -> Self {
    Self {
      head: None,
      count: 0,
    }
  }

  fn push(&mut self, elem: T) {
    let new_node = Box::new(Node {
      elem,
      next: self.head.take(),
    });

    self.head = Some(new_node);
    self.count += 1;
  }

  fn pop(&mut self) -> bool {
    self.unlink_head().is_some()
  }

  fn peek(&self) -> Result<&T, EmptyStackError> {
    self.head.as_ref().map(|node| &node.elem).ok_or(EmptyStackError)
  }

  fn peek_pop(&mut self) -> Result<T, EmptyStackError> {
    self.unlink_head().ok_or(EmptyStackError)
  }

  fn clear(&mut self) {
    let released = self.count;
    while self.unlink_head().is_some() {}
    trace!(released, "cleared list stack");
  }

  fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  fn size(&self) -> usize {
    self.count
  }

  fn swap(&mut self, other: &mut Self) {
    trace!(left = self.count, right = other.count, "swapping list stacks");
    mem::swap(&mut self.head, &mut other.head);
    mem::swap(&mut self.count, &mut other.count);
  }
}

impl<T> Default for ListStack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Drop for ListStack<T> {
  fn drop(&mut self) {
    // Unlink one node at a time so a long chain never drops recursively.
    let mut link = self.head.take();
    while let Some(mut node) = link {
      link = node.next.take();
    }
  }
}

impl<T: Clone> Clone for ListStack<T> {
  fn clone(&self) -> Self {
    let mut copy = Self::new();
    let mut tail = &mut copy.head;

    for elem in self.elems() {
      let node = tail.insert(Box::new(Node {
        elem: elem.clone(),
        next: None,
      }));
      tail = &mut node.next;
    }

    copy.count = self.count;
    copy
  }

  fn clone_from(&mut self, source: &Self) {
    self.assign(source);
  }
}

impl<T: PartialEq> PartialEq for ListStack<T> {
  fn eq(&self, other: &Self) -> bool {
    self.count == other.count && self.elems().eq(other.elems())
  }
}

impl<T: Eq> Eq for ListStack<T> {}

impl<T: fmt::Debug> fmt::Debug for ListStack<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.elems()).finish()
  }
}

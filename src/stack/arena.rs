use std::fmt;
use std::iter;
use std::mem;

use tracing::trace;

use super::*;

/// A node slot. Live slots hold an element and link to the slot below;
/// free slots hold nothing and link to the next free slot.
struct Slot<T> {
  elem: Option<T>,
  next: Option<usize>,
}

/// An index-based `Stack<T>`. Nodes live in a `Vec` and link to each other by
/// position; popped slots go on a free-list and are reused by later pushes.
pub struct ArenaStack<T> {
  slots: Vec<Slot<T>>,
  head: Option<usize>,
  free: Option<usize>,
  count: usize,
}

impl<T> ArenaStack<T> {
  fn unlink_head(&mut self) -> Option<T> {
    let i = self.head?;
    let slot = &mut self.slots[i];
    let elem = slot.elem.take();
    self.head = mem::replace(&mut slot.next, self.free);
    self.free = Some(i);
    self.count -= 1;
    elem
  }

  fn elems(&self) -> impl Iterator<Item = &T> {
    let slots = &self.slots;
    iter::successors(self.head, move |&i| slots[i].next)
      .filter_map(move |i| slots[i].elem.as_ref())
  }
}

impl<T> Stack<T> for ArenaStack<T> {
  fn new() -> Self {
    Self {
      slots: Vec::new(),
      head: None,
      free: None,
      count: 0,
    }
  }

  fn push(&mut self, elem: T) {
    let slot = Slot {
      elem: Some(elem),
      next: self.head,
    };

    let i = match self.free {
      Some(i) => {
        self.free = self.slots[i].next;
        self.slots[i] = slot;
        i
      }
      None => {
        self.slots.push(slot);
        self.slots.len() - 1
      }
    };

    self.head = Some(i);
    self.count += 1;
  }

  fn pop(&mut self) -> bool {
    self.unlink_head().is_some()
  }

  fn peek(&self) -> Result<&T, EmptyStackError> {
    self.head
      .and_then(|i| self.slots[i].elem.as_ref())
      .ok_or(EmptyStackError)
  }

  fn peek_pop(&mut self) -> Result<T, EmptyStackError> {
    self.unlink_head().ok_or(EmptyStackError)
  }

  fn clear(&mut self) {
    let released = self.count;
    while self.unlink_head().is_some() {}
    self.slots.clear();
    self.free = None;
    trace!(released, "cleared arena stack");
  }

  fn is_empty(&self) -> bool {
    self.count == 0
  }

  fn size(&self) -> usize {
    self.count
  }

  fn swap(&mut self, other: &mut Self) {
    trace!(left = self.count, right = other.count, "swapping arena stacks");
    mem::swap(self, other);
  }
}

impl<T> Default for ArenaStack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Drop for ArenaStack<T> {
  fn drop(&mut self) {
    // Release top to bottom rather than in slot order.
    while self.unlink_head().is_some() {}
  }
}

impl<T: Clone> Clone for ArenaStack<T> {
  /// Copies the live chain into fresh, contiguous slots: the top lands in
  /// slot 0 and the copy starts with an empty free-list.
  fn clone(&self) -> Self {
    let mut slots: Vec<Slot<T>> = Vec::with_capacity(self.count);

    for elem in self.elems() {
      let below = slots.len() + 1;
      slots.push(Slot {
        elem: Some(elem.clone()),
        next: Some(below),
      });
    }
    if let Some(bottom) = slots.last_mut() {
      bottom.next = None;
    }

    Self {
      head: if slots.is_empty() { None } else { Some(0) },
      free: None,
      count: slots.len(),
      slots,
    }
  }

  fn clone_from(&mut self, source: &Self) {
    self.assign(source);
  }
}

impl<T: PartialEq> PartialEq for ArenaStack<T> {
  fn eq(&self, other: &Self) -> bool {
    self.count == other.count && self.elems().eq(other.elems())
  }
}

impl<T: Eq> Eq for ArenaStack<T> {}

impl<T: fmt::Debug> fmt::Debug for ArenaStack<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.elems()).finish()
  }
}

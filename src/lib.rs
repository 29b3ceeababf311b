#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

/// The error returned by [`try_first`](List::try_first) and
/// [`try_last`](List::try_last) when the list is empty.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyError;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// A singly-linked list of owned nodes.
///
/// The list owns its whole node chain through its head reference. It caches
/// neither a length nor a tail pointer, so [`count`](Self::count),
/// [`last`](Self::last), and [`append`](Self::append) all walk the chain in
/// O(n); [`prepend`](Self::prepend) is O(1).
///
/// Search-based operations compare elements with the element type's own
/// [`PartialEq`], and treat "not found" as an ordinary outcome reported
/// through a `bool` or an `Option`, never as a failure.

pub struct List<T> {
  head: Link<T>,
}

/// An iterator over the items of a [`List`], from first to last.
///
/// Returned by [`List::items`]. Each call to `items` starts an independent
/// traversal at the current head.

pub struct Items<'a, T> {
  node: Option<&'a Node<T>>,
}

/// An iterator that moves items out of a [`List`], from first to last.

pub struct IntoItems<T> {
  head: Link<T>,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
  value: T,
  next: Link<T>,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// UTILITY FUNCTIONS                                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(never)]
#[cold]
fn empty_list_failure(what: &str) -> ! {
  panic!("forward-list: no {} item in an empty list!", what)
}

/// Returns the link pointing at the first node whose value equals `item`, or
/// `None` if no node between `link` and the end of the chain matches.
///
/// A link is a node's `next` slot, or the list's own head slot. Searching
/// over links instead of nodes means the caller always gets the slot it must
/// relink through, with the head slot standing in for the predecessor of the
/// first node. This takes the place of the textbook trick of prepending a
/// fictitious head node before searching.

fn find_link<'a, T>(mut link: &'a mut Link<T>, item: &T) -> Option<&'a mut Link<T>>
where
  T: PartialEq
{
  loop {
    if matches!(link, Some(node) if node.value == *item) {
      return Some(link);
    }

    match link {
      Some(node) => link = &mut node.next,
      None => return None,
    }
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Node                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> Node<T> {
  #[inline(always)]
  fn cons(value: T, next: Link<T>) -> Box<Self> {
    Box::new(Self { value, next })
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> List<T> {
  /// Returns a new, empty list.

  pub fn new() -> Self {
    Self { head: None }
  }

  /// Returns `true` if there are no items in the list.

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  /// Returns a reference to the first item in the list.
  ///
  /// # Panics
  ///
  /// Panics if the list is empty.

  pub fn first(&self) -> &T {
    match self.try_first() {
      Ok(item) => item,
      Err(EmptyError) => empty_list_failure("first"),
    }
  }

  /// Returns a reference to the first item in the list.
  ///
  /// # Errors
  ///
  /// An error is returned if the list is empty.

  pub fn try_first(&self) -> Result<&T, EmptyError> {
    match self.head.as_deref() {
      Some(node) => Ok(&node.value),
      None => Err(EmptyError),
    }
  }

  /// Returns a reference to the last item in the list. O(n).
  ///
  /// # Panics
  ///
  /// Panics if the list is empty.

  pub fn last(&self) -> &T {
    match self.try_last() {
      Ok(item) => item,
      Err(EmptyError) => empty_list_failure("last"),
    }
  }

  /// Returns a reference to the last item in the list. O(n).
  ///
  /// # Errors
  ///
  /// An error is returned if the list is empty.

  pub fn try_last(&self) -> Result<&T, EmptyError> {
    let mut node = self.head.as_deref().ok_or(EmptyError)?;

    while let Some(next) = node.next.as_deref() {
      node = next;
    }

    Ok(&node.value)
  }

  /// Returns the number of items in the list, by walking the whole chain.

  pub fn count(&self) -> usize {
    self.items().count()
  }

  /// Returns the number of items satisfying the given predicate.
  ///
  /// The predicate is called exactly once per item, in list order.

  pub fn count_if<F>(&self, predicate: F) -> usize
  where
    F: FnMut(&T) -> bool
  {
    let mut predicate = predicate;
    let mut count = 0;

    for item in self.items() {
      if predicate(item) {
        count += 1;
      }
    }

    count
  }

  /// Returns the number of items equal to the given item.

  pub fn count_item(&self, item: &T) -> usize
  where
    T: PartialEq
  {
    self.count_if(|other| *other == *item)
  }

  /// Returns an iterator over the items of the list, from first to last.
  ///
  /// The iterator borrows the list, so the list cannot be mutated while a
  /// traversal is in progress.

  pub fn items(&self) -> Items<'_, T> {
    Items { node: self.head.as_deref() }
  }

  /// Returns a vector holding a clone of every item, in list order.

  pub fn to_vec(&self) -> Vec<T>
  where
    T: Clone
  {
    self.items().cloned().collect()
  }

  /// Adds an item to the end of the list. O(n).

  pub fn append(&mut self, item: T) {
    let mut link = &mut self.head;

    while let Some(node) = link {
      link = &mut node.next;
    }

    *link = Some(Node::cons(item, None));
  }

  /// Adds an item to the beginning of the list. O(1).

  pub fn prepend(&mut self, item: T) {
    self.head = Some(Node::cons(item, self.head.take()));
  }

  /// Inserts an item immediately before the first item equal to the needle.
  ///
  /// Returns `true` if the needle was found and the item inserted. If the
  /// needle is not in the list, returns `false` and leaves the list
  /// unchanged.

  pub fn insert_before(&mut self, needle: &T, item: T) -> bool
  where
    T: PartialEq
  {
    let Some(found) = find_link(&mut self.head, needle) else { return false };

    *found = Some(Node::cons(item, found.take()));

    true
  }

  /// Inserts an item immediately after the first item equal to the needle.
  ///
  /// Inserting after the last item extends the list. Returns `true` if the
  /// needle was found and the item inserted. If the needle is not in the
  /// list, returns `false` and leaves the list unchanged.

  pub fn insert_after(&mut self, needle: &T, item: T) -> bool
  where
    T: PartialEq
  {
    let Some(found) = find_link(&mut self.head, needle) else { return false };

    // `find_link` never returns an empty link.
    let Some(node) = found.as_mut() else { return false };

    node.next = Some(Node::cons(item, node.next.take()));

    true
  }

  /// Removes the first item equal to the given item and returns it.
  ///
  /// If no item matches, returns `None` and leaves the list unchanged.

  pub fn remove_one(&mut self, item: &T) -> Option<T>
  where
    T: PartialEq
  {
    let found = find_link(&mut self.head, item)?;
    let node = *found.take()?;

    *found = node.next;

    Some(node.value)
  }

  /// Removes every item equal to the given item and returns how many were
  /// removed.
  ///
  /// The relative order of the remaining items is preserved.

  pub fn remove_all(&mut self, item: &T) -> usize
  where
    T: PartialEq
  {
    let mut removed = 0;
    let mut link = &mut self.head;

    while let Some(found) = find_link(link, item) {
      if let Some(node) = found.take() {
        *found = node.next;
        removed += 1;
      }

      // Resume from the link that pointed at the removed node, so that an
      // immediately adjacent match is seen on the next pass.
      link = found;
    }

    removed
  }
}

impl<T> Drop for List<T> {
  fn drop(&mut self) {
    // The default recursive drop of the chain would exhaust the call stack
    // on a long list, so unlink one node per step instead.

    let mut link = self.head.take();

    while let Some(mut node) = link {
      link = node.next.take();
    }
  }
}

impl<T> Default for List<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Clone for List<T>
where
  T: Clone
{
  fn clone(&self) -> Self {
    self.items().cloned().collect()
  }
}

impl<T> PartialEq for List<T>
where
  T: PartialEq
{
  fn eq(&self, other: &Self) -> bool {
    self.items().eq(other.items())
  }
}

impl<T> Eq for List<T> where T: Eq { }

impl<T> fmt::Debug for List<T>
where
  T: fmt::Debug
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.items()).finish()
  }
}

impl<T> FromIterator<T> for List<T> {
  fn from_iter<I>(iter: I) -> Self
  where
    I: IntoIterator<Item = T>
  {
    // Nodes are built from the tail end forward, each new node pointing at
    // the chain built so far, so iterating the list reproduces the input
    // order exactly.

    let items: Vec<T> = iter.into_iter().collect();
    let mut head = None;

    for value in items.into_iter().rev() {
      head = Some(Node::cons(value, head));
    }

    Self { head }
  }
}

impl<T> Extend<T> for List<T> {
  fn extend<I>(&mut self, iter: I)
  where
    I: IntoIterator<Item = T>
  {
    let mut link = &mut self.head;

    while let Some(node) = link {
      link = &mut node.next;
    }

    for value in iter {
      link = &mut link.insert(Node::cons(value, None)).next;
    }
  }
}

impl<T> IntoIterator for List<T> {
  type Item = T;
  type IntoIter = IntoItems<T>;

  fn into_iter(mut self) -> IntoItems<T> {
    IntoItems { head: self.head.take() }
  }
}

impl<'a, T> IntoIterator for &'a List<T> {
  type Item = &'a T;
  type IntoIter = Items<'a, T>;

  fn into_iter(self) -> Items<'a, T> {
    self.items()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Items                                                                      //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, T> Iterator for Items<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<&'a T> {
    let node = self.node?;
    self.node = node.next.as_deref();
    Some(&node.value)
  }
}

impl<'a, T> FusedIterator for Items<'a, T> { }

impl<'a, T> Clone for Items<'a, T> {
  fn clone(&self) -> Self {
    Self { node: self.node }
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// IntoItems                                                                  //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> Iterator for IntoItems<T> {
  type Item = T;

  fn next(&mut self) -> Option<T> {
    let node = *self.head.take()?;
    self.head = node.next;
    Some(node.value)
  }
}

impl<T> FusedIterator for IntoItems<T> { }

impl<T> Drop for IntoItems<T> {
  fn drop(&mut self) {
    // Same iterative teardown as `List`, for whatever is left undrained.

    let mut link = self.head.take();

    while let Some(mut node) = link {
      link = node.next.take();
    }
  }
}

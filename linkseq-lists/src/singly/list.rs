/*
   Linked Lists: a singly linked list and a sentinel bounded doubly
   linked list that push and pop elements at the ends of the list
   in constant time.

   Copyright 2021 "Rahul Singh <rsingh@arrsingh.com>"

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/

use crate::singly::{iter::IntoIter, iter::Iter, iter::IterMut, node::Node};
use core::marker::PhantomData;
use core::ptr;

/// A singly linked list that owns its nodes. Elements can be added
/// at the head or the tail and removed from the head in constant
/// time.
///
/// Nodes are allocated when an element is added and freed when it
/// is removed. The list keeps raw pointers to both the head and the
/// tail, so pushing at either end never walks the list.
///
/// There is no `remove_last()`: removing the tail would require
/// walking the list to find the node before it. Use the
/// [`DoublyLinkedList`](crate::doubly::list::DoublyLinkedList) when
/// elements must be popped from both ends.
///
/// # Getting Started
///
/// ```
/// use linkseq::lists::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::<u8>::new();
/// for i in 0..5 {
///     list.add_last(i);
/// }
///
/// assert_eq!(list.to_string(), "0 -> 1 -> 2 -> 3 -> 4");
/// for e in list.iter() {
///     println!("{}", e);
/// }
/// ```
pub struct SinglyLinkedList<T> {
    head: *mut Node<T>,
    tail: *mut Node<T>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        log::trace!("releasing singly linked list of {} nodes", self.len);
        while self.remove_first().is_some() {}
    }
}

impl_list_traits!(SinglyLinkedList, Iter, IterMut, IntoIter);

impl<T> SinglyLinkedList<T> {
    /// Creates an empty singly linked list.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkseq::lists::SinglyLinkedList;
    /// let list = SinglyLinkedList::<u8>::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            head: ptr::null_mut(),
            tail: ptr::null_mut(),
            len: 0,
            marker: PhantomData,
        }
    }

    /// Returns a forward iterator over the list that yields the
    /// elements from head to tail.
    ///
    /// # Examples
    /// ```
    /// use linkseq::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// list.add_last(10);
    /// list.add_last(20);
    /// list.add_last(30);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&20));
    /// assert_eq!(iter.next(), Some(&30));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head, self.len)
    }

    /// Returns a forward iterator over the list with mutable
    /// references that allows the elements to be modified.
    ///
    /// # Examples
    /// ```
    /// use linkseq::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// list.add_last(1);
    /// list.add_last(2);
    ///
    /// for e in list.iter_mut() {
    ///     *e += 100;
    /// }
    /// assert_eq!(list.to_string(), "101 -> 102");
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head, self.len)
    }

    /// Returns a reference to the first (head) element of the list
    /// or `None` if the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkseq::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// assert_eq!(list.first(), None);
    ///
    /// list.add_first(1);
    /// assert_eq!(list.first(), Some(&1));
    /// ```
    pub fn first(&self) -> Option<&T> {
        if self.head.is_null() {
            return None;
        }

        unsafe { Some(&(*self.head).val) }
    }

    /// Returns a mutable reference to the first (head) element of
    /// the list or `None` if the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn first_mut(&mut self) -> Option<&mut T> {
        if self.head.is_null() {
            return None;
        }

        unsafe { Some(&mut (*self.head).val) }
    }

    /// Returns a reference to the last (tail) element of the list or
    /// `None` if the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkseq::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// assert_eq!(list.last(), None);
    ///
    /// list.add_last(1);
    /// list.add_last(2);
    /// assert_eq!(list.last(), Some(&2));
    /// ```
    pub fn last(&self) -> Option<&T> {
        if self.tail.is_null() {
            return None;
        }

        unsafe { Some(&(*self.tail).val) }
    }

    /// Returns a mutable reference to the last (tail) element of the
    /// list or `None` if the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn last_mut(&mut self) -> Option<&mut T> {
        if self.tail.is_null() {
            return None;
        }

        unsafe { Some(&mut (*self.tail).val) }
    }

    /// Returns true if the list is empty and false otherwise.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements in the list
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkseq::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// assert_eq!(list.len(), 0);
    ///
    /// list.add_first(1);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Adds an element to the front (head) of the list. If the list
    /// was empty the new element is also the tail.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkseq::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// list.add_first(1);
    /// list.add_first(2);
    /// assert_eq!(list.first(), Some(&2));
    /// assert_eq!(list.last(), Some(&1));
    /// ```
    pub fn add_first(&mut self, elem: T) {
        let raw_n = Node::new(elem, self.head);
        if self.tail.is_null() {
            self.tail = raw_n;
        }
        self.head = raw_n;
        self.len += 1;
    }

    /// Adds an element to the back (tail) of the list.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkseq::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// list.add_last(1);
    /// list.add_last(2);
    /// assert_eq!(list.first(), Some(&1));
    /// assert_eq!(list.last(), Some(&2));
    /// ```
    pub fn add_last(&mut self, elem: T) {
        let raw_n = Node::last(elem);

        if self.tail.is_null() {
            self.head = raw_n;
        } else {
            unsafe {
                (*self.tail).next = raw_n;
            }
        }

        self.tail = raw_n;
        self.len += 1;
    }

    /// Removes and returns the element at the front (head) of the
    /// list or `None` if the list is empty. An empty list is left
    /// untouched.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkseq::lists::SinglyLinkedList;
    /// let mut list = SinglyLinkedList::<u8>::new();
    /// assert_eq!(list.remove_first(), None);
    ///
    /// list.add_last(1);
    /// list.add_last(2);
    /// assert_eq!(list.remove_first(), Some(1));
    /// assert_eq!(list.remove_first(), Some(2));
    /// assert_eq!(list.remove_first(), None);
    /// ```
    pub fn remove_first(&mut self) -> Option<T> {
        if self.head.is_null() {
            return None;
        }

        let node = unsafe { Box::from_raw(self.head) };
        self.head = node.next;
        if self.head.is_null() {
            self.tail = ptr::null_mut();
        }
        self.len -= 1;
        Some(node.val)
    }
}

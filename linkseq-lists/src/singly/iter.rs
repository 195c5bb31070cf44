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
use crate::singly::{list::SinglyLinkedList, node::Node};
use core::marker::PhantomData;

/// A forward iterator over the elements of the
/// [`SinglyLinkedList`](SinglyLinkedList).
///
/// This struct is created by the
/// [`.iter()`](SinglyLinkedList#method.iter) method of the
/// [`SinglyLinkedList`](SinglyLinkedList).
///
/// # Examples
/// ```
/// use linkseq::lists::SinglyLinkedList;
/// use linkseq::lists::singly::Iter;
/// use linkseq::lists::ListError;
///
/// let mut list = SinglyLinkedList::<u8>::new();
/// list.add_last(10);
/// list.add_last(20);
///
/// let mut iter: Iter<u8> = list.iter();
/// assert_eq!(iter.next(), Some(&10));
/// assert_eq!(iter.try_next(), Ok(&20));
/// assert_eq!(iter.try_next(), Err(ListError::Exhausted));
/// ```
#[derive(Debug)]
pub struct Iter<'a, T> {
    cursor: *mut Node<T>,
    len: usize,
    marker: PhantomData<&'a Node<T>>,
}

/// A forward iterator over the elements of the
/// [`SinglyLinkedList`](SinglyLinkedList) with mutable references
/// that allow the elements to be modified in place.
///
/// This struct is created by the
/// [`.iter_mut()`](SinglyLinkedList#method.iter_mut) method of the
/// [`SinglyLinkedList`](SinglyLinkedList).
#[derive(Debug)]
pub struct IterMut<'a, T> {
    cursor: *mut Node<T>,
    len: usize,
    marker: PhantomData<&'a mut Node<T>>,
}

/// An owning iterator that removes the elements from the front of
/// the [`SinglyLinkedList`](SinglyLinkedList).
///
/// This struct is created by `into_iter()` on the list.
#[derive(Debug)]
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(head: *mut Node<T>, len: usize) -> Iter<'a, T> {
        Iter {
            cursor: head,
            len,
            marker: PhantomData,
        }
    }

    iter_try_next!(&'a T);
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(head: *mut Node<T>, len: usize) -> IterMut<'a, T> {
        IterMut {
            cursor: head,
            len,
            marker: PhantomData,
        }
    }

    iter_try_next!(&'a mut T);
}

impl<T> IntoIter<T> {
    pub(super) fn new(list: SinglyLinkedList<T>) -> IntoIter<T> {
        IntoIter { list }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        if self.cursor.is_null() {
            return None;
        }
        unsafe {
            let node = self.cursor;
            self.cursor = (*node).next;
            self.len -= 1;
            Some(&(*node).val)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        if self.cursor.is_null() {
            return None;
        }
        unsafe {
            let node = self.cursor;
            self.cursor = (*node).next;
            self.len -= 1;
            Some(&mut (*node).val)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.list.remove_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

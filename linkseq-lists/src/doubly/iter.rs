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
use crate::doubly::{list::DoublyLinkedList, node::Node};
use core::marker::PhantomData;

/// A bidirectional iterator over the elements of the
/// [`DoublyLinkedList`](DoublyLinkedList).
///
/// The iterator walks from the node after the header towards the
/// trailer and never yields either sentinel. It can also be walked
/// from the back with `next_back()` or `rev()`.
///
/// This struct is created by the
/// [`.iter()`](DoublyLinkedList#method.iter) method of the
/// [`DoublyLinkedList`](DoublyLinkedList).
///
/// # Examples
/// ```
/// use linkseq::lists::DoublyLinkedList;
/// use linkseq::lists::doubly::Iter;
/// use linkseq::lists::ListError;
///
/// let mut list = DoublyLinkedList::<u8>::new();
/// list.add_last(1);
/// list.add_last(2);
/// list.add_last(3);
///
/// let mut iter: Iter<u8> = list.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.try_next(), Ok(&2));
/// assert_eq!(iter.try_next(), Err(ListError::Exhausted));
/// ```
#[derive(Debug)]
pub struct Iter<'a, T> {
    head: *mut Node<T>,
    tail: *mut Node<T>,
    len: usize,
    marker: PhantomData<&'a Node<T>>,
}

/// A bidirectional iterator over the elements of the
/// [`DoublyLinkedList`](DoublyLinkedList) with mutable references
/// that allow the elements to be modified in place.
///
/// This struct is created by the
/// [`.iter_mut()`](DoublyLinkedList#method.iter_mut) method of the
/// [`DoublyLinkedList`](DoublyLinkedList).
#[derive(Debug)]
pub struct IterMut<'a, T> {
    head: *mut Node<T>,
    tail: *mut Node<T>,
    len: usize,
    marker: PhantomData<&'a mut Node<T>>,
}

/// An owning iterator that removes the elements from the
/// [`DoublyLinkedList`](DoublyLinkedList), from the front with
/// `next()` and from the back with `next_back()`.
#[derive(Debug)]
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(head: *mut Node<T>, tail: *mut Node<T>, len: usize) -> Iter<'a, T> {
        Iter {
            head,
            tail,
            len,
            marker: PhantomData,
        }
    }

    iter_try_next!(&'a T);
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(head: *mut Node<T>, tail: *mut Node<T>, len: usize) -> IterMut<'a, T> {
        IterMut {
            head,
            tail,
            len,
            marker: PhantomData,
        }
    }

    iter_try_next!(&'a mut T);
}

impl<T> IntoIter<T> {
    pub(super) fn new(list: DoublyLinkedList<T>) -> IntoIter<T> {
        IntoIter { list }
    }
}

// `len` counts the real nodes left between `head` and `tail`, so
// neither end ever steps onto a sentinel.
impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        unsafe {
            let node = self.head;
            self.head = (*node).next;
            self.len -= 1;
            (*node).val.as_ref()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        unsafe {
            let node = self.tail;
            self.tail = (*node).prev;
            self.len -= 1;
            (*node).val.as_ref()
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        unsafe {
            let node = self.head;
            self.head = (*node).next;
            self.len -= 1;
            (*node).val.as_mut()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        unsafe {
            let node = self.tail;
            self.tail = (*node).prev;
            self.len -= 1;
            (*node).val.as_mut()
        }
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

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.remove_last()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

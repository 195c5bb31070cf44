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

use core::ptr;

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) val: T,
    pub(crate) next: *mut Node<T>,
}

impl<T> Node<T> {
    /// Allocates a node holding `val` that links to `next`. The
    /// caller owns the returned pointer and must release it with
    /// `Box::from_raw`.
    pub(crate) fn new(val: T, next: *mut Node<T>) -> *mut Node<T> {
        Box::into_raw(Box::new(Node { val, next }))
    }

    pub(crate) fn last(val: T) -> *mut Node<T> {
        Self::new(val, ptr::null_mut())
    }
}

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

/// The contract shared by every list in this crate: a length, an
/// emptiness check and a forward iterator that yields the elements
/// in insertion order.
///
/// Code written against this trait works with both the
/// [`SinglyLinkedList`](crate::singly::list::SinglyLinkedList) and
/// the [`DoublyLinkedList`](crate::doubly::list::DoublyLinkedList).
///
/// # Examples
/// ```
/// use linkseq::lists::{Collection, DoublyLinkedList, SinglyLinkedList};
///
/// fn total<C: Collection<Item = u32>>(c: &C) -> u32 {
///     c.iter().sum()
/// }
///
/// let mut sll = SinglyLinkedList::new();
/// sll.add_last(1);
/// sll.add_last(2);
///
/// let mut dll = DoublyLinkedList::new();
/// dll.add_first(3);
/// dll.add_last(4);
///
/// assert_eq!(total(&sll), 3);
/// assert_eq!(total(&dll), 7);
/// ```
pub trait Collection {
    /// The type of the elements held by the collection.
    type Item;

    /// The forward iterator returned by [`iter()`](#tymethod.iter).
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns true if the collection holds no elements. This is
    /// equivalent to checking that [`len()`](#tymethod.len) is 0.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements in insertion order.
    fn iter(&self) -> Self::Iter<'_>;
}

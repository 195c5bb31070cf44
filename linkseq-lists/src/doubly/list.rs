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

use crate::doubly::{iter::IntoIter, iter::Iter, iter::IterMut, node::Node};
use core::marker::PhantomData;

/// A doubly linked list bounded by two sentinel nodes. Elements can
/// be added and removed at either end in constant time.
///
/// The `header` sentinel sits before the first element and the
/// `trailer` sentinel after the last one. Both are allocated once in
/// [`new()`](#method.new) and are never removed, so an empty list is
/// simply a header whose next node is the trailer. Every insert goes
/// through [`insert_between()`](#method.insert_between) and every
/// removal through [`unlink()`](#method.unlink); neither needs to
/// check whether the list is empty because a real node always has a
/// node on both sides.
///
/// # Getting Started
///
/// ```
/// use linkseq::lists::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::<u8>::new();
/// list.add_first(2);
/// list.add_first(1);
/// list.add_last(3);
/// list.add_last(4);
///
/// assert_eq!(list.remove_first(), Some(1));
/// assert_eq!(list.remove_last(), Some(4));
/// assert_eq!(list.to_string(), "2 -> 3");
/// ```
pub struct DoublyLinkedList<T> {
    header: *mut Node<T>,
    trailer: *mut Node<T>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        log::trace!("releasing doubly linked list of {} nodes", self.len);
        while self.remove_first().is_some() {}
        unsafe {
            drop(Box::from_raw(self.header));
            drop(Box::from_raw(self.trailer));
        }
    }
}

impl_list_traits!(DoublyLinkedList, Iter, IterMut, IntoIter);

impl<T> DoublyLinkedList<T> {
    /// Creates an empty doubly linked list and allocates its header
    /// and trailer sentinels.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkseq::lists::DoublyLinkedList;
    /// let list = DoublyLinkedList::<u8>::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> DoublyLinkedList<T> {
        let header = Node::sentinel();
        let trailer = Node::sentinel();
        unsafe {
            (*header).next = trailer;
            (*trailer).prev = header;
        }

        DoublyLinkedList {
            header,
            trailer,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Returns a bidirectional iterator over the list. The iterator
    /// yields the elements from head to tail and can be reversed
    /// with `rev()`.
    ///
    /// # Examples
    /// ```
    /// use linkseq::lists::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::<u8>::new();
    /// list.add_last(10);
    /// list.add_last(20);
    /// list.add_last(30);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&20));
    /// assert_eq!(iter.next(), Some(&30));
    /// assert_eq!(iter.next(), None);
    ///
    /// let reversed: Vec<u8> = list.iter().rev().copied().collect();
    /// assert_eq!(reversed, vec![30, 20, 10]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        unsafe { Iter::new((*self.header).next, (*self.trailer).prev, self.len) }
    }

    /// Returns a bidirectional iterator over the list with mutable
    /// references that allows the elements to be modified.
    ///
    /// # Examples
    /// ```
    /// use linkseq::lists::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::<u8>::new();
    /// list.add_last(1);
    /// list.add_last(2);
    ///
    /// for e in list.iter_mut() {
    ///     *e += 100;
    /// }
    /// assert_eq!(list.to_string(), "101 -> 102");
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        unsafe { IterMut::new((*self.header).next, (*self.trailer).prev, self.len) }
    }

    /// Returns a reference to the first element of the list or `None`
    /// if the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkseq::lists::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::<u8>::new();
    /// assert_eq!(list.first(), None);
    ///
    /// list.add_first(1);
    /// assert_eq!(list.first(), Some(&1));
    /// ```
    pub fn first(&self) -> Option<&T> {
        // the trailer holds no value, so this is None on an empty list
        unsafe { (*(*self.header).next).val.as_ref() }
    }

    /// Returns a mutable reference to the first element of the list
    /// or `None` if the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn first_mut(&mut self) -> Option<&mut T> {
        unsafe { (*(*self.header).next).val.as_mut() }
    }

    /// Returns a reference to the last element of the list or `None`
    /// if the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkseq::lists::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::<u8>::new();
    /// assert_eq!(list.last(), None);
    ///
    /// list.add_last(1);
    /// list.add_last(2);
    /// assert_eq!(list.last(), Some(&2));
    /// ```
    pub fn last(&self) -> Option<&T> {
        unsafe { (*(*self.trailer).prev).val.as_ref() }
    }

    /// Returns a mutable reference to the last element of the list or
    /// `None` if the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn last_mut(&mut self) -> Option<&mut T> {
        unsafe { (*(*self.trailer).prev).val.as_mut() }
    }

    /// Returns true if the list is empty and false otherwise.
    ///
    /// This method should complete in *O*(*1*) time.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements in the list. The sentinels are
    /// not counted.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkseq::lists::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::<u8>::new();
    /// assert_eq!(list.len(), 0);
    ///
    /// list.add_last(1);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Adds an element to the front of the list, between the header
    /// and the current first node.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkseq::lists::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::<u8>::new();
    /// list.add_first(1);
    /// list.add_first(2);
    /// assert_eq!(list.first(), Some(&2));
    /// assert_eq!(list.last(), Some(&1));
    /// ```
    pub fn add_first(&mut self, elem: T) {
        unsafe { self.insert_between(elem, self.header, (*self.header).next) }
    }

    /// Adds an element to the back of the list, between the current
    /// last node and the trailer.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkseq::lists::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::<u8>::new();
    /// list.add_last(1);
    /// list.add_last(2);
    /// assert_eq!(list.first(), Some(&1));
    /// assert_eq!(list.last(), Some(&2));
    /// ```
    pub fn add_last(&mut self, elem: T) {
        unsafe { self.insert_between(elem, (*self.trailer).prev, self.trailer) }
    }

    /// Removes and returns the first element of the list or `None` if
    /// the list is empty. An empty list is left untouched.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use linkseq::lists::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::<u8>::new();
    /// assert_eq!(list.remove_first(), None);
    ///
    /// list.add_last(1);
    /// list.add_last(2);
    /// assert_eq!(list.remove_first(), Some(1));
    /// assert_eq!(list.remove_first(), Some(2));
    /// assert_eq!(list.remove_first(), None);
    /// ```
    pub fn remove_first(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        unsafe { Some(self.unlink((*self.header).next)) }
    }

    /// Removes and returns the last element of the list or `None` if
    /// the list is empty. An empty list is left untouched.
    ///
    /// This operation should complete in *O*(*1*) time since the node
    /// before the trailer is always known.
    ///
    /// # Examples
    /// ```
    /// use linkseq::lists::DoublyLinkedList;
    /// let mut list = DoublyLinkedList::<u8>::new();
    /// assert_eq!(list.remove_last(), None);
    ///
    /// list.add_last(1);
    /// list.add_last(2);
    /// assert_eq!(list.remove_last(), Some(2));
    /// assert_eq!(list.remove_last(), Some(1));
    /// assert_eq!(list.remove_last(), None);
    /// ```
    pub fn remove_last(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        unsafe { Some(self.unlink((*self.trailer).prev)) }
    }

    /// Links a new node holding `elem` between `pred` and `succ`,
    /// which must be non-null and adjacent. Anything else means the
    /// list is corrupt, so this method panics.
    fn insert_between(&mut self, elem: T, pred: *mut Node<T>, succ: *mut Node<T>) {
        if pred.is_null() || succ.is_null() {
            log::error!("insert_between called with a null node");
            panic!("cannot insert between a null node");
        }

        unsafe {
            if (*pred).next != succ || (*succ).prev != pred {
                log::error!("insert_between called with non-adjacent nodes");
                panic!("cannot insert between non-adjacent nodes");
            }

            let raw_n = Node::new(elem, pred, succ);
            (*pred).next = raw_n;
            (*succ).prev = raw_n;
        }

        self.len += 1;
        log::trace!("linked node, len: {}", self.len);
    }

    /// Splices `node` out of the list by linking its neighbours to
    /// each other, frees it and returns its value. The node must be a
    /// real node of this list; passing a sentinel panics.
    fn unlink(&mut self, node: *mut Node<T>) -> T {
        unsafe {
            if (*node).is_sentinel() {
                log::error!("unlink called with a sentinel node");
                panic!("cannot unlink a sentinel node");
            }

            let prev = (*node).prev;
            let next = (*node).next;
            (*prev).next = next;
            (*next).prev = prev;
            self.len -= 1;
            log::trace!("unlinked node, len: {}", self.len);

            let Some(val) = Box::from_raw(node).val else {
                unreachable!("sentinel checked before splicing");
            };
            val
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::collection::Collection;
    use crate::error::ListError;
    use core::ptr;
    use rand::Rng;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::{HashSet, VecDeque};
    use std::hash::{Hash, Hasher};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    // Walks the chain in both directions and checks every link
    // against the sentinels.
    macro_rules! assert_links {
        ($ll:ident) => {
            unsafe {
                assert!((*$ll.header).prev.is_null());
                assert!((*$ll.trailer).next.is_null());
                assert!((*$ll.header).is_sentinel());
                assert!((*$ll.trailer).is_sentinel());

                let mut count = 0;
                let mut cur = (*$ll.header).next;
                while cur != $ll.trailer {
                    assert!(!(*cur).is_sentinel());
                    assert_eq!((*(*cur).prev).next, cur);
                    assert_eq!((*(*cur).next).prev, cur);
                    count += 1;
                    cur = (*cur).next;
                }
                assert_eq!(count, $ll.len());

                let mut back = 0;
                let mut cur = (*$ll.trailer).prev;
                while cur != $ll.header {
                    back += 1;
                    cur = (*cur).prev;
                }
                assert_eq!(back, $ll.len());
            }
        };
    }

    macro_rules! assert_order {
        ($ll:ident, [$($val:expr),*]) => {
            assert_links!($ll);
            let expected: Vec<u8> = vec![$($val),*];
            let actual: Vec<u8> = $ll.iter().copied().collect();
            assert_eq!(actual, expected);
            let mut reversed: Vec<u8> = $ll.iter().rev().copied().collect();
            reversed.reverse();
            assert_eq!(reversed, expected);
            assert_eq!($ll.len(), expected.len());
            assert_eq!($ll.first(), expected.first());
            assert_eq!($ll.last(), expected.last());
        };
    }

    macro_rules! assert_empty {
        ($ll:ident) => {
            assert_links!($ll);
            unsafe {
                assert_eq!((*$ll.header).next, $ll.trailer);
                assert_eq!((*$ll.trailer).prev, $ll.header);
            }
            assert_eq!($ll.len(), 0);
            assert!($ll.is_empty());
            assert_eq!($ll.first(), None);
            assert_eq!($ll.last(), None);
            assert_eq!($ll.iter().next(), None);
        };
    }

    fn hash_of<T: Hash>(val: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        val.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_new() {
        let ll = DoublyLinkedList::<u8>::new();
        assert_empty!(ll);
        let ll: DoublyLinkedList<u8> = Default::default();
        assert_empty!(ll);
    }

    #[test]
    fn test_empty_access() {
        let mut ll = DoublyLinkedList::<u8>::new();
        assert_eq!(ll.remove_first(), None);
        assert_eq!(ll.remove_last(), None);
        assert_eq!(ll.first_mut(), None);
        assert_eq!(ll.last_mut(), None);
        assert_empty!(ll);
    }

    #[test]
    fn test_add_first() {
        let mut ll = DoublyLinkedList::<u8>::new();
        ll.add_first(10);
        assert_order!(ll, [10]);
        ll.add_first(11);
        assert_order!(ll, [11, 10]);
        ll.add_first(12);
        assert_order!(ll, [12, 11, 10]);
    }

    #[test]
    fn test_add_last() {
        let mut ll = DoublyLinkedList::<u8>::new();
        ll.add_last(20);
        assert_order!(ll, [20]);
        ll.add_last(21);
        assert_order!(ll, [20, 21]);
        ll.add_last(22);
        assert_order!(ll, [20, 21, 22]);
    }

    #[test]
    fn test_remove_first() {
        let mut ll = DoublyLinkedList::<u8>::new();
        ll.add_last(1);
        ll.add_last(2);
        assert_eq!(ll.remove_first(), Some(1));
        assert_order!(ll, [2]);
        assert_eq!(ll.remove_first(), Some(2));
        assert_empty!(ll);
    }

    #[test]
    fn test_remove_last() {
        let mut ll = DoublyLinkedList::<u8>::new();
        ll.add_last(1);
        ll.add_last(2);
        ll.add_last(3);

        assert_eq!(ll.remove_last(), Some(3));
        assert_order!(ll, [1, 2]);
        assert_eq!(ll.remove_last(), Some(2));
        assert_eq!(ll.remove_last(), Some(1));
        assert_empty!(ll);
        assert_eq!(ll.remove_last(), None);
        assert_empty!(ll);
    }

    #[test]
    fn test_remove_last_to_empty() {
        let mut ll = DoublyLinkedList::<u8>::new();
        ll.add_first(10);
        assert_eq!(ll.remove_last(), Some(10));
        assert_empty!(ll);

        ll.add_last(11);
        assert_order!(ll, [11]);
    }

    #[test]
    fn test_mixed_ops() {
        init_logger();
        let mut ll = DoublyLinkedList::<u8>::new();
        ll.add_first(2);
        ll.add_first(1);
        ll.add_last(3);
        ll.add_last(4);
        assert_order!(ll, [1, 2, 3, 4]);

        assert_eq!(ll.remove_first(), Some(1));
        assert_order!(ll, [2, 3, 4]);
        assert_eq!(ll.remove_last(), Some(4));
        assert_order!(ll, [2, 3]);
        assert_eq!(ll.to_string(), "2 -> 3");
    }

    #[test]
    fn test_first_last_mut() {
        let mut ll = DoublyLinkedList::<u8>::new();
        ll.add_last(1);
        ll.add_last(2);
        if let Some(x) = ll.first_mut() {
            *x = 5;
        }
        if let Some(x) = ll.last_mut() {
            *x = 6;
        }
        assert_order!(ll, [5, 6]);
    }

    #[test]
    fn test_iter() {
        let mut ll = DoublyLinkedList::<u8>::new();
        ll.add_last(10);
        ll.add_last(20);
        ll.add_last(30);

        let mut iter = ll.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&10));
        assert_eq!(iter.next(), Some(&20));
        assert_eq!(iter.next(), Some(&30));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.try_next(), Err(ListError::Exhausted));
    }

    #[test]
    fn test_iter_both_ends() {
        let ll: DoublyLinkedList<u8> = (1..=5).collect();
        let mut iter = ll.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_iter_mut() {
        let mut ll = DoublyLinkedList::<u8>::new();
        ll.add_last(1);
        ll.add_last(2);
        ll.add_last(3);
        for e in &mut ll {
            *e *= 10;
        }
        assert_order!(ll, [10, 20, 30]);

        let mut iter = ll.iter_mut();
        assert_eq!(iter.next_back(), Some(&mut 30));
        assert_eq!(iter.try_next(), Ok(&mut 10));
        assert_eq!(iter.try_next(), Ok(&mut 20));
        assert_eq!(iter.try_next(), Err(ListError::Exhausted));
    }

    #[test]
    fn test_into_iter() {
        let ll: DoublyLinkedList<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let mut iter = ll.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next().as_deref(), Some("a"));
        assert_eq!(iter.next_back().as_deref(), Some("c"));
        assert_eq!(iter.next().as_deref(), Some("b"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_display() {
        let mut ll = DoublyLinkedList::<u8>::new();
        assert_eq!(ll.to_string(), "");
        ll.add_last(1);
        assert_eq!(ll.to_string(), "1");
        ll.add_last(2);
        ll.add_last(3);
        assert_eq!(ll.to_string(), "1 -> 2 -> 3");
        assert_eq!(format!("{:?}", ll), "[1, 2, 3]");
    }

    #[test]
    fn test_eq() {
        let mut ll1 = DoublyLinkedList::<u8>::new();
        let mut ll2 = DoublyLinkedList::<u8>::new();
        assert_eq!(ll1, ll2);
        assert_eq!(ll1, ll1);

        ll1.add_last(1);
        ll1.add_last(2);
        ll2.add_last(1);
        ll2.add_last(2);
        assert_eq!(ll1, ll2);
        assert_eq!(hash_of(&ll1), hash_of(&ll2));

        ll2.add_last(3);
        assert_ne!(ll1, ll2);

        ll1.add_last(4);
        assert_ne!(ll1, ll2);
    }

    #[test]
    fn test_hash_set() {
        let mut set = HashSet::new();
        set.insert((1..4).collect::<DoublyLinkedList<u8>>());
        assert!(set.contains(&(1..4).collect::<DoublyLinkedList<u8>>()));
        assert!(!set.contains(&(1..5).collect::<DoublyLinkedList<u8>>()));
    }

    #[test]
    fn test_clone() {
        init_logger();
        let mut ll = DoublyLinkedList::<u8>::new();
        ll.add_last(1);
        ll.add_last(2);

        let mut copy = ll.clone();
        assert_eq!(copy, ll);
        assert_ne!(copy.header, ll.header);
        assert_ne!(copy.trailer, ll.trailer);

        ll.add_last(3);
        assert_ne!(copy, ll);
        assert_order!(copy, [1, 2]);

        assert_eq!(copy.remove_last(), Some(2));
        assert_order!(ll, [1, 2, 3]);
    }

    #[test]
    fn test_absent_elements() {
        let mut ll = DoublyLinkedList::<Option<u8>>::new();
        assert_eq!(ll.last(), None);
        ll.add_last(None);
        assert_eq!(ll.first(), Some(&None));
        assert_eq!(ll.last(), Some(&None));
        assert_eq!(ll.remove_last(), Some(None));
        assert_eq!(ll.remove_last(), None);
    }

    #[test]
    fn test_collection() {
        fn collect<C: Collection<Item = u8>>(c: &C) -> Vec<u8> {
            c.iter().copied().collect()
        }

        let mut ll = DoublyLinkedList::<u8>::new();
        assert!(Collection::is_empty(&ll));
        ll.extend([4, 5, 6]);
        assert_eq!(Collection::len(&ll), 3);
        assert_eq!(collect(&ll), vec![4, 5, 6]);
    }

    #[test]
    #[should_panic(expected = "cannot insert between non-adjacent nodes")]
    fn test_insert_between_non_adjacent() {
        init_logger();
        let mut ll = DoublyLinkedList::<u8>::new();
        ll.add_last(1);
        ll.add_last(2);
        let (header, trailer) = (ll.header, ll.trailer);
        ll.insert_between(3, header, trailer);
    }

    #[test]
    #[should_panic(expected = "cannot insert between a null node")]
    fn test_insert_between_null() {
        let mut ll = DoublyLinkedList::<u8>::new();
        let header = ll.header;
        ll.insert_between(1, header, ptr::null_mut());
    }

    #[test]
    #[should_panic(expected = "cannot unlink a sentinel node")]
    fn test_unlink_sentinel() {
        let mut ll = DoublyLinkedList::<u8>::new();
        let trailer = ll.trailer;
        ll.unlink(trailer);
    }

    #[test]
    fn test_insert_between_sentinels() {
        let mut ll = DoublyLinkedList::<u8>::new();
        let (header, trailer) = (ll.header, ll.trailer);
        ll.insert_between(7, header, trailer);
        assert_order!(ll, [7]);
    }

    #[test]
    fn test_drop_long_list() {
        let mut ll = DoublyLinkedList::<u32>::new();
        // long enough to overflow the stack if nodes were freed
        // recursively, short enough for an interpreted run
        let count: u32 = if cfg!(miri) { 1_000 } else { 200_000 };
        for i in 0..count {
            ll.add_first(i);
        }
        assert_eq!(ll.len(), count as usize);
        drop(ll);
    }

    #[test]
    fn test_random_ops() {
        let mut rng = rand::thread_rng();
        let mut ll = DoublyLinkedList::<u8>::new();
        let mut model = VecDeque::new();

        for _ in 0..1000 {
            let val: u8 = rng.gen();
            match rng.gen_range(0..4) {
                0 => {
                    ll.add_first(val);
                    model.push_front(val);
                }
                1 => {
                    ll.add_last(val);
                    model.push_back(val);
                }
                2 => {
                    assert_eq!(ll.remove_first(), model.pop_front());
                }
                _ => {
                    assert_eq!(ll.remove_last(), model.pop_back());
                }
            }
            assert_eq!(ll.len(), model.len());
            assert_eq!(ll.is_empty(), ll.len() == 0);
            assert_eq!(ll.first(), model.front());
            assert_eq!(ll.last(), model.back());
        }
        assert_links!(ll);
        assert!(ll.iter().eq(model.iter()));
        assert!(ll.iter().rev().eq(model.iter().rev()));
    }
}

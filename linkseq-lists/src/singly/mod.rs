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

//! A singly linked list that owns its nodes through a chain of boxed
//! forward links and keeps a raw pointer to the tail so that
//! elements can be pushed at either end in constant time.
//!
//! Elements can only be removed from the front: finding the new tail
//! after removing the last element would require walking the whole
//! list.
pub mod iter;
pub mod list;
pub(crate) mod node;

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

//! Linked lists that only offer operations that complete in constant
//! time: pushing and popping at the ends, querying the length and
//! stepping through the list. Both lists also support structural
//! equality, display rendering and deep copies via `Clone`.

#[macro_use]
mod macros;

pub mod collection;
pub mod doubly;
pub mod error;
pub mod singly;

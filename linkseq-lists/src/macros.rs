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

// Generates `try_next()` inside the impl block of a borrowing
// iterator.
macro_rules! iter_try_next {
    ($item:ty) => {
        /// Returns the next element or [`ListError::Exhausted`] if
        /// every element has already been yielded.
        ///
        /// [`ListError::Exhausted`]: crate::error::ListError::Exhausted
        pub fn try_next(&mut self) -> $crate::error::Result<$item> {
            self.next().ok_or($crate::error::ListError::Exhausted)
        }
    };
}

// Trait impls that are identical for both lists. The list must
// provide `new`, `len`, `add_last`, `iter` and `iter_mut`.
macro_rules! impl_list_traits {
    ($list:ident, $iter:ident, $iter_mut:ident, $into_iter:ident) => {
        impl<T> Default for $list<T> {
            fn default() -> Self {
                $list::new()
            }
        }

        impl<T: Clone> Clone for $list<T> {
            fn clone(&self) -> Self {
                let copy: $list<T> = self.iter().cloned().collect();
                log::debug!(
                    "copied {} with {} elements",
                    stringify!($list),
                    copy.len()
                );
                copy
            }
        }

        impl<T: PartialEq> PartialEq for $list<T> {
            fn eq(&self, other: &Self) -> bool {
                self.len() == other.len() && self.iter().eq(other.iter())
            }
        }

        impl<T: Eq> Eq for $list<T> {}

        impl<T: core::hash::Hash> core::hash::Hash for $list<T> {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                core::hash::Hash::hash(&self.len(), state);
                for elem in self.iter() {
                    core::hash::Hash::hash(elem, state);
                }
            }
        }

        impl<T: core::fmt::Display> core::fmt::Display for $list<T> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let mut iter = self.iter();
                if let Some(first) = iter.next() {
                    write!(f, "{}", first)?;
                    for elem in iter {
                        write!(f, " -> {}", elem)?;
                    }
                }
                Ok(())
            }
        }

        impl<T: core::fmt::Debug> core::fmt::Debug for $list<T> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_list().entries(self.iter()).finish()
            }
        }

        impl<T> FromIterator<T> for $list<T> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                let mut list = $list::new();
                list.extend(iter);
                list
            }
        }

        impl<T> Extend<T> for $list<T> {
            fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
                for elem in iter {
                    self.add_last(elem);
                }
            }
        }

        impl<'a, T> IntoIterator for &'a $list<T> {
            type Item = &'a T;
            type IntoIter = $iter<'a, T>;
            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }

        impl<'a, T> IntoIterator for &'a mut $list<T> {
            type Item = &'a mut T;
            type IntoIter = $iter_mut<'a, T>;
            fn into_iter(self) -> Self::IntoIter {
                self.iter_mut()
            }
        }

        impl<T> IntoIterator for $list<T> {
            type Item = T;
            type IntoIter = $into_iter<T>;
            fn into_iter(self) -> Self::IntoIter {
                $into_iter::new(self)
            }
        }

        impl<T> $crate::collection::Collection for $list<T> {
            type Item = T;
            type Iter<'a> = $iter<'a, T> where Self: 'a;

            fn len(&self) -> usize {
                $list::len(self)
            }

            fn iter(&self) -> Self::Iter<'_> {
                $list::iter(self)
            }
        }

        #[cfg(feature = "serde")]
        impl<T: serde::Serialize> serde::Serialize for $list<T> {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_seq(self.iter())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for $list<T> {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct SeqVisitor<T>(core::marker::PhantomData<T>);

                impl<'de, T: serde::Deserialize<'de>> serde::de::Visitor<'de> for SeqVisitor<T> {
                    type Value = $list<T>;

                    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                        f.write_str("a sequence")
                    }

                    fn visit_seq<A>(self, mut seq: A) -> core::result::Result<Self::Value, A::Error>
                    where
                        A: serde::de::SeqAccess<'de>,
                    {
                        let mut list = $list::new();
                        while let Some(elem) = seq.next_element()? {
                            list.add_last(elem);
                        }
                        Ok(list)
                    }
                }

                deserializer.deserialize_seq(SeqVisitor(core::marker::PhantomData))
            }
        }
    };
}

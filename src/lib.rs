//! Singly and doubly linked lists that only support operations that
//! complete in constant time.

/// A collection of linked lists: a [`SinglyLinkedList`] that pushes
/// at both ends and pops at the front, and a [`DoublyLinkedList`]
/// bounded by sentinel nodes that pushes and pops at both ends.
pub mod lists {
    pub use linkseq_lists::collection::Collection;
    pub use linkseq_lists::doubly::list::DoublyLinkedList;
    pub use linkseq_lists::error::ListError;
    pub use linkseq_lists::error::Result;
    pub use linkseq_lists::singly::list::SinglyLinkedList;

    /// This module contains the iterators of the [`SinglyLinkedList`]
    pub mod singly {
        pub use linkseq_lists::singly::iter::IntoIter;
        pub use linkseq_lists::singly::iter::Iter;
        pub use linkseq_lists::singly::iter::IterMut;
    }

    /// This module contains the iterators of the [`DoublyLinkedList`]
    pub mod doubly {
        pub use linkseq_lists::doubly::iter::IntoIter;
        pub use linkseq_lists::doubly::iter::Iter;
        pub use linkseq_lists::doubly::iter::IterMut;
    }
}

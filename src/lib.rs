//! Persistent vectors with cheap clones and zero-copy slicing.
//!
//! [`Vector`] is a persistent vector (also known as a "bitmapped vector
//! trie"): `push`, `pop` and `set` return a new version that shares almost
//! all of its structure with the old one, so arbitrarily many versions can
//! coexist without copying. A version, once built, is never mutated through;
//! this also means any number of threads may read the same version without
//! coordination. [`Slice`] is an O(1) window over a [`Vector`] that never
//! copies elements.
//!
//! Out-of-range `get` is not an error; it returns `None`. Operations that
//! reject their input (`set` past the end, `reduce` on an empty vector)
//! return [`Error`] and leave the receiver untouched.
//!
//! Iterators over a vector are fused: once exhausted they keep returning
//! `None`, and a fresh iterator is needed to traverse again. `for_each`,
//! `fold` and friends come from the standard [`Iterator`] adapters on
//! [`Vector::iter`].

// Not yet implemented (do we need them?)
// - deletion at arbitrary indices
// - concatenation of two vectors

/// Construct a [`Vector`] from a list of elements.
///
/// The resulting vector uses the canonical branching factor of 32. For a
/// different branching factor, collect from an iterator instead.
///
/// # Examples
///
/// ```rust
/// # use persistent_vector::{vector, Vector};
/// let vec = vector![1, 2, 3];
/// assert_eq!(vec, Vector::from(vec![1, 2, 3]));
///
/// let empty: Vector<i32> = vector![];
/// assert_eq!(empty, Vector::new());
/// ```
#[macro_export]
macro_rules! vector {
    () => { $crate::Vector::<_, 32>::new() };

    ( $($x:expr),+ $(,)? ) => {{
        let mut vec = $crate::Vector::<_, 32>::new();
        $( vec.push_mut($x); )+
        vec
    }};
}

pub mod error;
pub mod slice;
pub mod vector;

/// [`Vector`] takes a "branching factor" parameter, which must be a
/// reasonably-sized power of two. We use this trait to enforce that.
pub trait ValidBranchingConstant {}
pub struct Const<const N: usize> {}

impl ValidBranchingConstant for Const<2> {}
impl ValidBranchingConstant for Const<4> {}
impl ValidBranchingConstant for Const<8> {}
impl ValidBranchingConstant for Const<16> {}
impl ValidBranchingConstant for Const<32> {}
impl ValidBranchingConstant for Const<64> {}
impl ValidBranchingConstant for Const<128> {}

pub use error::Error;
pub use slice::Slice;
pub use vector::Vector;

//! Ordered type-level lists.
//!
//! A list is an inductive chain of [`Cons`] nodes ending in [`Nil`]. The
//! [`List!`](crate::List) macro spells it flat:
//!
//! ```
//! use tmppy::{Cons, List, Nil, assert_same_type};
//!
//! const _: () = assert_same_type::<List![u8, str], Cons<u8, Cons<str, Nil>>>();
//! ```
//!
//! Two lists are the same type iff they have the same elements in the same
//! order. Swapping elements yields a different type:
//!
//! ```compile_fail,E0277
//! use tmppy::{List, assert_same_type};
//!
//! const _: () = assert_same_type::<List![u8, i8], List![i8, u8]>();
//! ```

use core::convert::Infallible;
use core::marker::PhantomData;

use crate::sealed::Sealed;

/// The empty list.
pub enum Nil {}

/// Head `H` followed by the list `T`.
///
/// Uninhabited. Variance and auto traits do not depend on `H` or `T`.
pub struct Cons<H: ?Sized, T: TypeList>(Infallible, PhantomData<fn() -> (PhantomData<H>, T)>);

/// Marker implemented by [`Nil`] and [`Cons`] only.
pub trait TypeList: Sealed {
    /// Number of elements. A nested list counts as one element.
    const LEN: usize;
}

impl Sealed for Nil {}

impl TypeList for Nil {
    const LEN: usize = 0;
}

impl<H: ?Sized, T: TypeList> Sealed for Cons<H, T> {}

impl<H: ?Sized, T: TypeList> TypeList for Cons<H, T> {
    const LEN: usize = T::LEN + 1;
}

/// Spell a type list: `List![A, B, C]` is `Cons<A, Cons<B, Cons<C, Nil>>>`.
///
/// `List![]` is [`Nil`]. Any types are accepted, including unsized ones and
/// repeats.
#[macro_export]
macro_rules! List {
    () => { $crate::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::List![$($tail),*]>
    };
}

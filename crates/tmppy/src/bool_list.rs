//! Ordered lists of `bool` constants.
//!
//! Same shape as the type lists, with the head carried as a const generic.
//! Elements may be any const-evaluable `bool` expression; they are evaluated
//! when the list is named.
//!
//! ```
//! use tmppy::{BoolCons, BoolList, BoolNil, assert_same_type};
//!
//! const _: () = assert_same_type::<BoolList![true, 1 > 2], BoolCons<true, BoolCons<false, BoolNil>>>();
//! ```

use core::convert::Infallible;
use core::marker::PhantomData;

use crate::sealed::Sealed;

/// The empty bool list.
pub enum BoolNil {}

/// Head `B` followed by the bool list `T`. Uninhabited.
pub struct BoolCons<const B: bool, T: BoolList>(Infallible, PhantomData<fn() -> T>);

/// Marker implemented by [`BoolNil`] and [`BoolCons`] only.
pub trait BoolList: Sealed {
    /// Number of elements.
    const LEN: usize;
}

impl Sealed for BoolNil {}

impl BoolList for BoolNil {
    const LEN: usize = 0;
}

impl<const B: bool, T: BoolList> Sealed for BoolCons<B, T> {}

impl<const B: bool, T: BoolList> BoolList for BoolCons<B, T> {
    const LEN: usize = T::LEN + 1;
}

/// Spell a bool list: `BoolList![true, false]` is
/// `BoolCons<true, BoolCons<false, BoolNil>>`.
#[macro_export]
macro_rules! BoolList {
    () => { $crate::BoolNil };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::BoolCons<{ $head }, $crate::BoolList![$($tail),*]>
    };
}

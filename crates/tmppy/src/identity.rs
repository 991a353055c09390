//! Type identity witness.

/// Implemented for `T` itself and nothing else.
pub trait SameAs<T: ?Sized> {}

impl<T: ?Sized> SameAs<T> for T {}

/// Compiles only when `A` and `B` are the same type.
///
/// ```
/// use tmppy::{BoolList, assert_same_type};
///
/// const _: () = assert_same_type::<BoolList![true, false], BoolList![!false, false]>();
/// ```
pub const fn assert_same_type<A, B>()
where
    A: ?Sized + SameAs<B>,
    B: ?Sized,
{
}

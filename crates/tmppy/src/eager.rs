//! Eager evaluation guards.
//!
//! Associated constants and projections are evaluated lazily: a constant that
//! nothing in a used body mentions is never evaluated, and a type-level
//! combinator that picks an impl by a condition never normalizes the branch it
//! does not pick. An ill-formed operand can therefore hide behind a lazy
//! combinator, or fail far away from the construct that produced it.
//!
//! The guards pin evaluation to the place they are named. Their `VALUE` is
//! always `true`; it answers "did the expression evaluate", never "what did it
//! evaluate to".
//!
//! A lazy `Or` skips its right operand when the left one is `true`:
//!
//! ```
//! use tmppy::{Bool, BoolExpr};
//!
//! struct Broken;
//! impl BoolExpr for Broken {
//!     const VALUE: bool = panic!("ill-formed operand");
//! }
//!
//! struct Or<A, B>(A, B);
//! impl<B> BoolExpr for Or<Bool<true>, B> {
//!     const VALUE: bool = true;
//! }
//! impl<B: BoolExpr> BoolExpr for Or<Bool<false>, B> {
//!     const VALUE: bool = B::VALUE;
//! }
//!
//! const _: () = assert!(<Or<Bool<true>, Broken> as BoolExpr>::VALUE);
//! ```
//!
//! Guarding the operand surfaces the failure at the guard:
//!
//! ```compile_fail,E0080
//! use tmppy::{AlwaysTrueFromBool, BoolExpr};
//!
//! struct Broken;
//! impl BoolExpr for Broken {
//!     const VALUE: bool = panic!("ill-formed operand");
//! }
//!
//! const _: bool = AlwaysTrueFromBool::<Broken>::VALUE;
//! ```
//!
//! An ill-formed type expression fails the same way:
//!
//! ```compile_fail,E0277
//! use tmppy::AlwaysTrueFromType;
//!
//! trait Eval {
//!     type Output;
//! }
//! struct Thunk;
//!
//! const _: bool = AlwaysTrueFromType::<<Thunk as Eval>::Output>::VALUE;
//! ```

use core::convert::Infallible;
use core::marker::PhantomData;

/// A compile-time boolean expression.
///
/// Generic code cannot pass an arbitrary expression as a const argument, so
/// expressions are carried as types whose `VALUE` computes the result.
pub trait BoolExpr {
    const VALUE: bool;
}

/// Literal boolean expression.
pub struct Bool<const B: bool>(Infallible);

impl<const B: bool> BoolExpr for Bool<B> {
    const VALUE: bool = B;
}

/// Forces evaluation of the boolean expression `E`.
///
/// Only naming `VALUE` evaluates anything. A guard is therefore not a
/// [`BoolExpr`] itself: as an operand it would be skipped by a lazy
/// combinator like any other operand.
///
/// ```compile_fail,E0277
/// use tmppy::{AlwaysTrueFromBool, Bool, BoolExpr};
///
/// fn operand<E: BoolExpr>() {}
///
/// operand::<AlwaysTrueFromBool<Bool<true>>>();
/// ```
pub struct AlwaysTrueFromBool<E: BoolExpr>(Infallible, PhantomData<fn() -> E>);

impl<E: BoolExpr> AlwaysTrueFromBool<E> {
    /// Always `true`. Fails to evaluate iff `E::VALUE` fails to evaluate.
    pub const VALUE: bool = {
        let _evaluated: bool = E::VALUE;
        true
    };
}

/// Forces evaluation of the type expression `T`.
///
/// Like [`AlwaysTrueFromBool`], not a [`BoolExpr`]; name `VALUE` at the site.
pub struct AlwaysTrueFromType<T: ?Sized>(Infallible, PhantomData<fn() -> PhantomData<T>>);

impl<T: ?Sized> AlwaysTrueFromType<T> {
    /// Always `true`. Naming it requires `T` to be well-formed.
    pub const VALUE: bool = true;
}

/// Evaluate `AlwaysTrueFromBool::<E>::VALUE` right here.
///
/// Expands to an inline `const` block, so in a generic body the check runs
/// when the body is monomorphized. Yields `true`.
///
/// ```
/// use tmppy::{Bool, eager_bool};
///
/// const _: bool = eager_bool!(Bool<false>);
/// ```
///
/// A generic body fails once it is instantiated with an ill-formed expression:
///
/// ```compile_fail,E0080
/// use tmppy::{BoolExpr, eager_bool};
///
/// struct Broken;
/// impl BoolExpr for Broken {
///     const VALUE: bool = panic!("ill-formed operand");
/// }
///
/// fn check<E: BoolExpr>() -> bool {
///     eager_bool!(E)
/// }
///
/// fn main() {
///     check::<Broken>();
/// }
/// ```
///
/// An operand a lazy combinator skips still fails at the guard:
///
/// ```compile_fail,E0080
/// use tmppy::{Bool, BoolExpr, eager_bool};
///
/// struct Broken;
/// impl BoolExpr for Broken {
///     const VALUE: bool = panic!("ill-formed operand");
/// }
///
/// struct Or<A, B>(A, B);
/// impl<B> BoolExpr for Or<Bool<true>, B> {
///     const VALUE: bool = true;
/// }
/// impl<B: BoolExpr> BoolExpr for Or<Bool<false>, B> {
///     const VALUE: bool = B::VALUE;
/// }
///
/// const ELIDED: bool = <Or<Bool<true>, Broken> as BoolExpr>::VALUE;
/// const GUARDED: bool = eager_bool!(Broken);
/// ```
#[macro_export]
macro_rules! eager_bool {
    ($expr:ty) => {
        const { $crate::AlwaysTrueFromBool::<$expr>::VALUE }
    };
}

/// Evaluate `AlwaysTrueFromType::<T>::VALUE` right here. Yields `true`.
///
/// ```
/// use tmppy::{List, eager_type};
///
/// const _: bool = eager_type!(List![u8, str]);
/// ```
///
/// ```compile_fail,E0277
/// use tmppy::eager_type;
///
/// trait Eval {
///     type Output;
/// }
/// struct Thunk;
///
/// const _: bool = eager_type!(<Thunk as Eval>::Output);
/// ```
#[macro_export]
macro_rules! eager_type {
    ($ty:ty) => {
        const { $crate::AlwaysTrueFromType::<$ty>::VALUE }
    };
}

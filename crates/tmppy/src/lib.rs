#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(not(test), no_std)]

//! Compile-time support primitives for generated type-level code.
//!
//! Four independent pieces:
//! - **Type lists** (`List![..]`): ordered, possibly-empty lists of types
//! - **Bool lists** (`BoolList![..]`): ordered, possibly-empty lists of `bool` constants
//! - **`AlwaysTrueFromBool`**: forces evaluation of a boolean expression
//! - **`AlwaysTrueFromType`**: forces evaluation of a type expression
//!
//! Nothing here has a runtime representation. Every list node is uninhabited,
//! and every guard resolves to a `const`. Identity is Rust type identity:
//!
//! ```
//! use tmppy::{List, assert_same_type};
//!
//! const _: () = assert_same_type::<List![i32, char, List![i32]], List![i32, char, List![i32]]>();
//! ```

mod bool_list;
mod eager;
mod identity;
mod type_list;

#[cfg(test)]
mod type_list_tests;

pub use bool_list::{BoolCons, BoolList, BoolNil};
pub use eager::{AlwaysTrueFromBool, AlwaysTrueFromType, Bool, BoolExpr};
pub use identity::{SameAs, assert_same_type};
pub use type_list::{Cons, Nil, TypeList};

mod sealed {
    pub trait Sealed {}
}

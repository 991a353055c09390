use core::any::{TypeId, type_name};
use core::cell::Cell;
use core::fmt::Debug;
use core::marker::PhantomData;

use crate::{Cons, List, Nil, TypeList, assert_same_type};

fn id<T: ?Sized + 'static>() -> TypeId {
    TypeId::of::<T>()
}

fn assert_send_sync<T: ?Sized + Send + Sync>() {}

const _: () = {
    assert_same_type::<List![], Nil>();
    assert_same_type::<List![u8], Cons<u8, Nil>>();
    assert_same_type::<List![u8, u16,], Cons<u8, Cons<u16, Nil>>>();
    assert_same_type::<List![i32, char, List![i32]], List![i32, char, List![i32]]>();
};

#[test]
fn same_elements_same_order_are_identical() {
    type First = List![i32, char, List![i32]];
    type Second = List![i32, char, List![i32]];

    assert_eq!(id::<First>(), id::<Second>());
}

#[test]
fn nested_scenario_is_distinct_from_prefix_and_permutation() {
    type Nested = List![i32, char, List![i32]];

    assert_ne!(id::<Nested>(), id::<List![i32, char]>());
    assert_ne!(id::<Nested>(), id::<List![char, i32, List![i32]]>());
}

#[test]
fn order_matters() {
    assert_ne!(id::<List![u8, i8]>(), id::<List![i8, u8]>());
    assert_eq!(id::<List![u8, u8]>(), id::<List![u8, u8]>());
}

#[test]
fn empty_is_distinct_from_every_singleton() {
    assert_ne!(id::<List![]>(), id::<List![()]>());
    assert_ne!(id::<List![]>(), id::<List![Nil]>());
    assert_ne!(id::<List![]>(), id::<List![List![]]>());
}

#[test]
fn length_differs_on_extra_element() {
    assert_ne!(id::<List![u8]>(), id::<List![u8, u8]>());
}

#[test]
fn len_counts_top_level_elements() {
    assert_eq!(<List![] as TypeList>::LEN, 0);
    assert_eq!(<List![u8] as TypeList>::LEN, 1);
    assert_eq!(<List![i32, char, List![i32, i32, i32]] as TypeList>::LEN, 3);
    assert_eq!(<List![u8, u8, u8, u8] as TypeList>::LEN, 4);
}

#[test]
fn accepts_unsized_elements() {
    type Unsized = List![str, [u8], dyn Debug];

    assert_eq!(<Unsized as TypeList>::LEN, 3);
    assert_ne!(id::<Unsized>(), id::<List![[u8], str, dyn Debug]>());
}

#[test]
fn auto_traits_ignore_elements() {
    assert_send_sync::<List![*const u8, Cell<u8>]>();
    assert_send_sync::<List![dyn Debug]>();
}

#[test]
fn covariant_in_elements() {
    fn shorten<'a>(list: PhantomData<List![&'static str]>) -> PhantomData<List![&'a str]> {
        list
    }

    let _ = shorten(PhantomData);
}

#[test]
fn macro_expansion() {
    insta::assert_snapshot!(
        type_name::<List![i32, char]>(),
        @"tmppy::type_list::Cons<i32, tmppy::type_list::Cons<char, tmppy::type_list::Nil>>"
    );
    insta::assert_snapshot!(type_name::<List![]>(), @"tmppy::type_list::Nil");
}

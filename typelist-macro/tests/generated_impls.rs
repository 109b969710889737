#![allow(dead_code)]

use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

trait Tuple {
    type AsList;
}

trait List {
    type AsTuple;
}

typelist_macro::impl_tuples!(4);

assert_type_eq_all!(<() as Tuple>::AsList, ());
assert_type_eq_all!(<(u8,) as Tuple>::AsList, (u8, ()));
assert_type_eq_all!(<(u8, u16, u32) as Tuple>::AsList, (u8, (u16, (u32, ()))));
assert_type_eq_all!(<(u8, (u16, ())) as List>::AsTuple, (u8, u16));
assert_type_eq_all!(
    <(u8, (u16, (u32, (u64, ())))) as List>::AsTuple,
    (u8, u16, u32, u64)
);

// Nothing is generated past the requested arity.
assert_impl_all!((u8, u8, u8, u8): Tuple);
assert_not_impl_any!((u8, u8, u8, u8, u8): Tuple);

struct Z;
struct S<N>(N);
struct Number<const N: usize>;

trait ToUnary {
    type AsUnary;
}

trait ToConstant {
    type AsConstant;
}

typelist_macro::generate_unary_conversion_impls!(3);

assert_type_eq_all!(<Number<0> as ToUnary>::AsUnary, Z);
assert_type_eq_all!(<Number<3> as ToUnary>::AsUnary, S<S<S<Z>>>);
assert_type_eq_all!(<S<S<Z>> as ToConstant>::AsConstant, Number<2>);
assert_not_impl_any!(Number<4>: ToUnary);

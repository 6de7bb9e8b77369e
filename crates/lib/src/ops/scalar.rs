//! Scalar kinds for the generic typed accessors.

use super::TypeOps;

/// A scalar kind that can be read from and written to any representation.
///
/// Implemented for `bool`, `i8`, `i16`, `i32`, `i64`, `f32`, `f64` and `String`.
/// Numeric kinds read any number and narrow it; `bool` reads native booleans and
/// numbers; `String` reads only strings.
pub trait Scalar: Clone {
    /// Human-readable kind name
    const KIND: &'static str;

    fn read<O: TypeOps>(ops: &O, node: &O::Node) -> Option<Self>;

    fn create<O: TypeOps>(ops: &O, value: Self) -> O::Node;
}

macro_rules! impl_scalar {
    ($($ty:ty => $kind:literal, $get:ident, $create:ident;)*) => {
        $(
            impl Scalar for $ty {
                const KIND: &'static str = $kind;

                fn read<O: TypeOps>(ops: &O, node: &O::Node) -> Option<Self> {
                    ops.$get(node)
                }

                fn create<O: TypeOps>(ops: &O, value: Self) -> O::Node {
                    ops.$create(value)
                }
            }
        )*
    };
}

impl_scalar! {
    bool => "bool", get_boolean, create_boolean;
    i8 => "byte", get_byte, create_byte;
    i16 => "short", get_short, create_short;
    i32 => "int", get_int, create_int;
    i64 => "long", get_long, create_long;
    f32 => "float", get_float, create_float;
    f64 => "double", get_double, create_double;
}

impl Scalar for String {
    const KIND: &'static str = "string";

    fn read<O: TypeOps>(ops: &O, node: &O::Node) -> Option<Self> {
        ops.get_string(node)
    }

    fn create<O: TypeOps>(ops: &O, value: Self) -> O::Node {
        ops.create_string(&value)
    }
}

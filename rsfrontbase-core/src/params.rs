//! Sql parameter traits

use crate::{BlobRef, Value};

/// Implemented for types that can be sent as parameters
pub trait IntoParam {
    fn into_param(self) -> Value;
}

impl IntoParam for Value {
    fn into_param(self) -> Value {
        self
    }
}

/// Written as a new BLOB when bound
impl IntoParam for Vec<u8> {
    fn into_param(self) -> Value {
        Value::Binary(self)
    }
}

impl IntoParam for String {
    fn into_param(self) -> Value {
        Value::Text(self)
    }
}

impl IntoParam for i64 {
    fn into_param(self) -> Value {
        Value::Integer(self)
    }
}

impl IntoParam for bool {
    fn into_param(self) -> Value {
        Value::Boolean(self)
    }
}

/// Implements IntoParam for integers
macro_rules! impl_param_int {
    ( $( $t: ident ),+ ) => {
        $(
            impl IntoParam for $t {
                fn into_param(self) -> Value {
                    i64::from(self).into_param()
                }
            }
        )+
    };
}

impl_param_int!(i32, u32, i16, u16, i8, u8);

impl IntoParam for f64 {
    fn into_param(self) -> Value {
        Value::Float(self)
    }
}

impl IntoParam for f32 {
    fn into_param(self) -> Value {
        f64::from(self).into_param()
    }
}

/// Already stored BLOB, bound by its handle
impl IntoParam for BlobRef {
    fn into_param(self) -> Value {
        Value::Blob(self)
    }
}

/// Implements for all nullable variants
impl<T> IntoParam for Option<T>
where
    T: IntoParam,
{
    fn into_param(self) -> Value {
        if let Some(v) = self {
            v.into_param()
        } else {
            Value::Null
        }
    }
}

/// Implements for all borrowed variants (&str, Cow and etc)
impl<T, B> IntoParam for &B
where
    B: ToOwned<Owned = T> + ?Sized,
    T: core::borrow::Borrow<B> + IntoParam,
{
    fn into_param(self) -> Value {
        self.to_owned().into_param()
    }
}

/// Implemented for types that represents a list of parameters
pub trait IntoParams {
    fn to_params(self) -> Vec<Value>;
}

/// Allow use of a vector instead of tuples, for when the number of parameters are unknow at compile time
/// or more parameters are needed than what can be used with the tuples
impl IntoParams for Vec<Value> {
    fn to_params(self) -> Vec<Value> {
        self
    }
}

impl IntoParams for &[Value] {
    fn to_params(self) -> Vec<Value> {
        self.to_vec()
    }
}

/// Represents no parameters
impl IntoParams for () {
    fn to_params(self) -> Vec<Value> {
        vec![]
    }
}

/// Generates IntoParams implementations for a tuple
macro_rules! impl_into_params {
    ($([$t: ident, $v: ident]),+) => {
        impl<$($t),+> IntoParams for ($($t,)+)
        where
            $( $t: IntoParam, )+
        {
            fn to_params(self) -> Vec<Value> {
                let ( $($v,)+ ) = self;

                vec![ $(
                    $v.into_param(),
                )+ ]
            }
        }
    };
}

/// Generates IntoParams implementations for various tuples
macro_rules! impls_into_params {
    ([$t: ident, $v: ident]) => {
        impl_into_params!([$t, $v]);
    };

    ([$t: ident, $v: ident], $([$ts: ident, $vs: ident]),+ ) => {
        impls_into_params!($([$ts, $vs]),+);

        impl_into_params!([$t, $v], $([$ts, $vs]),+);
    };
}

impls_into_params!(
    [A, a],
    [B, b],
    [C, c],
    [D, d],
    [E, e],
    [F, f],
    [G, g],
    [H, h],
    [I, i],
    [J, j],
    [K, k],
    [L, l],
    [M, m],
    [N, n],
    [O, o]
);

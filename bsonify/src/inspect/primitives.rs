use crate::common::Value;
use crate::inspect::{Inspect, Kind};
use std::borrow::Cow;

macro_rules! impl_inspect_for_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                #[inline]
                fn kind(&self) -> Kind<'_> {
                    Kind::Scalar(Value::from(*self))
                }

                #[inline]
                fn is_zero(&self) -> bool {
                    *self == (0 as $ty)
                }
            }
        )*
    };
}

impl_inspect_for_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Only positive zero is the zero value; -0.0 carries a sign bit.
macro_rules! impl_inspect_for_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                #[inline]
                fn kind(&self) -> Kind<'_> {
                    Kind::Scalar(Value::from(*self))
                }

                #[inline]
                fn is_zero(&self) -> bool {
                    self.to_bits() == 0
                }
            }
        )*
    };
}

impl_inspect_for_float!(f32, f64);

impl Inspect for bool {
    fn kind(&self) -> Kind<'_> {
        Kind::Scalar(Value::Bool(*self))
    }

    fn is_zero(&self) -> bool {
        !*self
    }
}

impl Inspect for char {
    fn kind(&self) -> Kind<'_> {
        Kind::Scalar(Value::Char(*self))
    }

    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

impl Inspect for () {
    fn kind(&self) -> Kind<'_> {
        Kind::Scalar(Value::Null)
    }

    fn is_zero(&self) -> bool {
        true
    }
}

impl Inspect for str {
    fn kind(&self) -> Kind<'_> {
        Kind::Scalar(Value::from(self))
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn as_key(&self) -> Option<&str> {
        Some(self)
    }
}

impl Inspect for String {
    fn kind(&self) -> Kind<'_> {
        Kind::Scalar(Value::from(self))
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn as_key(&self) -> Option<&str> {
        Some(self)
    }
}

impl Inspect for Cow<'_, str> {
    fn kind(&self) -> Kind<'_> {
        Kind::Scalar(Value::from(self.as_ref()))
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn as_key(&self) -> Option<&str> {
        Some(self)
    }
}

use crate::common::Value;
use crate::inspect::{Inspect, Kind};
use std::rc::Rc;
use std::sync::Arc;

impl<T: Inspect> Inspect for Option<T> {
    fn kind(&self) -> Kind<'_> {
        Kind::Indirection(self.as_ref().map(|v| v as &dyn Inspect))
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn as_key(&self) -> Option<&str> {
        self.as_ref().and_then(|v| v.as_key())
    }
}

// Pointers are never unset; they report their target's kind, key and unset
// representation so that wrapping a value never changes its output.
macro_rules! impl_inspect_for_pointer {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: Inspect + ?Sized> Inspect for $ptr<T> {
                fn kind(&self) -> Kind<'_> {
                    (**self).kind()
                }

                fn is_zero(&self) -> bool {
                    false
                }

                fn as_key(&self) -> Option<&str> {
                    (**self).as_key()
                }

                fn unset(&self) -> Value {
                    (**self).unset()
                }
            }
        )*
    };
}

impl_inspect_for_pointer!(Box, Rc, Arc);

// A borrow stands in for the value it points at, zero value included.

impl<T: Inspect + ?Sized> Inspect for &T {
    fn kind(&self) -> Kind<'_> {
        (**self).kind()
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn as_key(&self) -> Option<&str> {
        (**self).as_key()
    }

    fn unset(&self) -> Value {
        (**self).unset()
    }
}

impl<T: Inspect + ?Sized> Inspect for &mut T {
    fn kind(&self) -> Kind<'_> {
        (**self).kind()
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn as_key(&self) -> Option<&str> {
        (**self).as_key()
    }

    fn unset(&self) -> Value {
        (**self).unset()
    }
}

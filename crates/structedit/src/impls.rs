//! `Inspect` for std types.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use crate::error::{EditError, Result};
use crate::inspect::{Inspect, Kind};
use crate::scalar;

// ── Scalars ───────────────────────────────────────────────────────────────

macro_rules! impl_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl Inspect for $ty {
            fn kind(&self) -> Kind {
                Kind::Int
            }

            fn static_label() -> Cow<'static, str> {
                Cow::Borrowed(stringify!($ty))
            }

            fn type_label(&self) -> Cow<'static, str> {
                Self::static_label()
            }

            fn scalar_text(&self) -> Option<String> {
                Some(self.to_string())
            }

            fn set_scalar(&mut self, text: &str) -> Result<()> {
                *self = scalar::parse_signed(text)
                    .and_then(scalar::narrow::<$ty, i64>)
                    .map_err(|reason| EditError::parse(Kind::Int, text, reason))?;
                Ok(())
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl Inspect for $ty {
            fn kind(&self) -> Kind {
                Kind::Uint
            }

            fn static_label() -> Cow<'static, str> {
                Cow::Borrowed(stringify!($ty))
            }

            fn type_label(&self) -> Cow<'static, str> {
                Self::static_label()
            }

            fn scalar_text(&self) -> Option<String> {
                Some(self.to_string())
            }

            fn set_scalar(&mut self, text: &str) -> Result<()> {
                *self = scalar::parse_unsigned(text)
                    .and_then(scalar::narrow::<$ty, u64>)
                    .map_err(|reason| EditError::parse(Kind::Uint, text, reason))?;
                Ok(())
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($ty:ty),* $(,)?) => {$(
        impl Inspect for $ty {
            fn kind(&self) -> Kind {
                Kind::Float
            }

            fn static_label() -> Cow<'static, str> {
                Cow::Borrowed(stringify!($ty))
            }

            fn type_label(&self) -> Cow<'static, str> {
                Self::static_label()
            }

            fn scalar_text(&self) -> Option<String> {
                Some(format!("{:.6}", self))
            }

            fn set_scalar(&mut self, text: &str) -> Result<()> {
                let value = scalar::parse_float(text)
                    .map_err(|reason| EditError::parse(Kind::Float, text, reason))?;
                *self = value as $ty;
                Ok(())
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);
impl_float!(f32, f64);

impl Inspect for bool {
    fn kind(&self) -> Kind {
        Kind::Bool
    }

    fn static_label() -> Cow<'static, str> {
        Cow::Borrowed("bool")
    }

    fn type_label(&self) -> Cow<'static, str> {
        Self::static_label()
    }

    fn scalar_text(&self) -> Option<String> {
        Some(self.to_string())
    }

    fn set_scalar(&mut self, text: &str) -> Result<()> {
        *self =
            scalar::parse_bool(text).map_err(|reason| EditError::parse(Kind::Bool, text, reason))?;
        Ok(())
    }
}

impl Inspect for String {
    fn kind(&self) -> Kind {
        Kind::String
    }

    fn static_label() -> Cow<'static, str> {
        Cow::Borrowed("String")
    }

    fn type_label(&self) -> Cow<'static, str> {
        Self::static_label()
    }

    fn scalar_text(&self) -> Option<String> {
        Some(self.clone())
    }

    fn set_scalar(&mut self, text: &str) -> Result<()> {
        text.clone_into(self);
        Ok(())
    }
}

impl Inspect for char {
    fn kind(&self) -> Kind {
        Kind::String
    }

    fn static_label() -> Cow<'static, str> {
        Cow::Borrowed("char")
    }

    fn type_label(&self) -> Cow<'static, str> {
        Self::static_label()
    }

    fn scalar_text(&self) -> Option<String> {
        Some(self.to_string())
    }

    fn set_scalar(&mut self, text: &str) -> Result<()> {
        *self = scalar::parse_char(text)
            .map_err(|reason| EditError::parse(Kind::String, text, reason))?;
        Ok(())
    }
}

// ── Sequences ─────────────────────────────────────────────────────────────

/// Growable. The `Default` bound covers the whole impl, so element types
/// without `Default` cannot be viewed in a `Vec` either.
impl<T: Inspect + Default> Inspect for Vec<T> {
    fn kind(&self) -> Kind {
        Kind::Sequence
    }

    fn static_label() -> Cow<'static, str> {
        Cow::Owned(format!("[]{}", T::static_label()))
    }

    fn type_label(&self) -> Cow<'static, str> {
        Self::static_label()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn element(&self, index: usize) -> Option<&dyn Inspect> {
        self.get(index).map(|v| v as &dyn Inspect)
    }

    fn element_mut(&mut self, index: usize) -> Option<&mut dyn Inspect> {
        self.get_mut(index).map(|v| v as &mut dyn Inspect)
    }

    fn is_growable(&self) -> bool {
        true
    }

    fn grow(&mut self) -> Result<()> {
        let cap = self.capacity();
        if Vec::len(self) == cap {
            self.reserve_exact(cap.max(1));
        }
        self.push(T::default());
        Ok(())
    }

    fn shrink(&mut self) -> Result<()> {
        self.pop();
        Ok(())
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn kind(&self) -> Kind {
        Kind::Sequence
    }

    fn static_label() -> Cow<'static, str> {
        Cow::Owned(format!("[{}]{}", N, T::static_label()))
    }

    fn type_label(&self) -> Cow<'static, str> {
        Self::static_label()
    }

    fn len(&self) -> usize {
        N
    }

    fn element(&self, index: usize) -> Option<&dyn Inspect> {
        self.get(index).map(|v| v as &dyn Inspect)
    }

    fn element_mut(&mut self, index: usize) -> Option<&mut dyn Inspect> {
        self.get_mut(index).map(|v| v as &mut dyn Inspect)
    }
}

// ── References ────────────────────────────────────────────────────────────

fn reference_label<T: Inspect>() -> Cow<'static, str> {
    Cow::Owned(format!("*{}", T::static_label()))
}

impl<T: Inspect> Inspect for Option<T> {
    fn kind(&self) -> Kind {
        Kind::Reference
    }

    fn static_label() -> Cow<'static, str> {
        reference_label::<T>()
    }

    fn type_label(&self) -> Cow<'static, str> {
        Self::static_label()
    }

    fn target(&self) -> Option<&dyn Inspect> {
        self.as_ref().map(|v| v as &dyn Inspect)
    }

    fn target_mut(&mut self) -> Option<&mut dyn Inspect> {
        self.as_mut().map(|v| v as &mut dyn Inspect)
    }
}

impl<T: Inspect> Inspect for Box<T> {
    fn kind(&self) -> Kind {
        Kind::Reference
    }

    fn static_label() -> Cow<'static, str> {
        reference_label::<T>()
    }

    fn type_label(&self) -> Cow<'static, str> {
        Self::static_label()
    }

    fn target(&self) -> Option<&dyn Inspect> {
        Some(&**self)
    }

    fn target_mut(&mut self) -> Option<&mut dyn Inspect> {
        Some(&mut **self)
    }
}

impl<T: Inspect> Inspect for &mut T {
    fn kind(&self) -> Kind {
        Kind::Reference
    }

    fn static_label() -> Cow<'static, str> {
        reference_label::<T>()
    }

    fn type_label(&self) -> Cow<'static, str> {
        Self::static_label()
    }

    fn target(&self) -> Option<&dyn Inspect> {
        Some(&**self)
    }

    fn target_mut(&mut self) -> Option<&mut dyn Inspect> {
        Some(&mut **self)
    }
}

// ── Opaque ────────────────────────────────────────────────────────────────

macro_rules! impl_opaque {
    ($label:literal => $($ty:ty),* $(,)?) => {$(
        impl<K, V> Inspect for $ty {
            fn kind(&self) -> Kind {
                Kind::Opaque
            }

            fn static_label() -> Cow<'static, str> {
                Cow::Borrowed($label)
            }

            fn type_label(&self) -> Cow<'static, str> {
                Self::static_label()
            }
        }
    )*};
}

impl_opaque!("map" => HashMap<K, V>, BTreeMap<K, V>);

impl Inspect for () {
    fn kind(&self) -> Kind {
        Kind::Opaque
    }

    fn static_label() -> Cow<'static, str> {
        Cow::Borrowed("()")
    }

    fn type_label(&self) -> Cow<'static, str> {
        Self::static_label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_set_and_text() {
        let mut n: i32 = 0;
        n.set_scalar("-0x10").unwrap();
        assert_eq!(n, -16);
        assert_eq!(n.scalar_text().as_deref(), Some("-16"));

        let mut small: i8 = 0;
        let err = small.set_scalar("300").unwrap_err();
        assert!(matches!(err, EditError::ParseError { kind: Kind::Int, .. }));
        assert_eq!(small, 0);
    }

    #[test]
    fn test_unsigned_rejects_sign() {
        let mut n: u16 = 5;
        assert!(n.set_scalar("-1").is_err());
        n.set_scalar("0b11").unwrap();
        assert_eq!(n, 3);
        assert_eq!(n.kind(), Kind::Uint);
    }

    #[test]
    fn test_float_text_six_decimals() {
        let mut f: f64 = 0.0;
        f.set_scalar("2.5").unwrap();
        assert_eq!(f.scalar_text().as_deref(), Some("2.500000"));
        let g: f32 = 1.0;
        assert_eq!(g.scalar_text().as_deref(), Some("1.000000"));
    }

    #[test]
    fn test_string_and_char() {
        let mut s = String::from("old");
        s.set_scalar("new value").unwrap();
        assert_eq!(s, "new value");

        let mut c = 'a';
        c.set_scalar("z").unwrap();
        assert_eq!(c, 'z');
        assert!(c.set_scalar("zz").is_err());
        assert_eq!(c.kind(), Kind::String);
    }

    #[test]
    fn test_vec_grow_doubles_capacity() {
        let mut v: Vec<i32> = Vec::with_capacity(2);
        v.push(1);
        v.push(2);
        Inspect::grow(&mut v).unwrap();
        assert_eq!(v, vec![1, 2, 0]);
        assert!(v.capacity() >= 4);

        let mut empty: Vec<i32> = Vec::new();
        Inspect::grow(&mut empty).unwrap();
        assert_eq!(empty, vec![0]);
    }

    #[test]
    fn test_vec_shrink_empty_is_noop() {
        let mut v: Vec<u8> = Vec::new();
        Inspect::shrink(&mut v).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn test_array_is_fixed() {
        let mut a = [1u8, 2, 3];
        assert_eq!(Inspect::len(&a), 3);
        assert!(!a.is_growable());
        assert_eq!(
            Inspect::grow(&mut a).unwrap_err(),
            EditError::unsupported("grow", Kind::Sequence)
        );
        assert_eq!(a.type_label(), "[3]u8");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Vec::<String>::new().type_label(), "[]String");
        assert_eq!(Some(3i64).type_label(), "*i64");
        assert_eq!(Box::new(vec![1.0f64]).type_label(), "*[]f64");
        assert_eq!(HashMap::<String, i32>::new().type_label(), "map");
    }

    #[test]
    fn test_references() {
        let mut none: Option<i32> = None;
        assert!(none.target().is_none());
        assert!(none.target_mut().is_none());

        let mut n = 4i32;
        let mut r = &mut n;
        assert_eq!(Inspect::kind(&r), Kind::Reference);
        Inspect::target_mut(&mut r)
            .unwrap()
            .set_scalar("9")
            .unwrap();
        assert_eq!(n, 9);
    }

    #[test]
    fn test_scalar_rejects_structure_ops() {
        let mut n = 1i32;
        assert_eq!(
            Inspect::grow(&mut n).unwrap_err(),
            EditError::unsupported("grow", Kind::Int)
        );
        let mut v = vec![1i32];
        assert_eq!(
            v.set_scalar("2").unwrap_err(),
            EditError::unsupported("set", Kind::Sequence)
        );
    }
}

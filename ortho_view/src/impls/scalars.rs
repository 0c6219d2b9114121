//! Primitive and string implementations.

use std::num::FpCategory;

use serde_json::Value;

use crate::{KeyKind, ProjectError, ProjectKey, ProjectResult, Projectable, Shape};

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl Projectable for $ty {
            fn shape(&self) -> Shape<'_> {
                Shape::Scalar(Value::from(*self))
            }

            fn is_empty_value(&self) -> bool {
                *self == 0
            }
        }

        impl ProjectKey for $ty {
            fn project_key(&self) -> ProjectResult<String> {
                Ok(self.to_string())
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// `serde_json::Value` has no 128-bit numbers, so wide integers only key maps.
macro_rules! impl_wide_key {
    ($($ty:ty),* $(,)?) => {$(
        impl ProjectKey for $ty {
            fn project_key(&self) -> ProjectResult<String> {
                Ok(self.to_string())
            }
        }
    )*};
}

impl_wide_key!(i128, u128);

macro_rules! impl_float {
    ($($ty:ty),* $(,)?) => {$(
        impl Projectable for $ty {
            /// Non-finite values become `null`, as `serde_json` renders them.
            fn shape(&self) -> Shape<'_> {
                Shape::Scalar(Value::from(*self))
            }

            fn is_empty_value(&self) -> bool {
                self.classify() == FpCategory::Zero
            }
        }

        impl ProjectKey for $ty {
            fn project_key(&self) -> ProjectResult<String> {
                Err(ProjectError::unsupported_key(KeyKind::Float, self.to_string()))
            }
        }
    )*};
}

impl_float!(f32, f64);

impl Projectable for bool {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Value::Bool(*self))
    }

    fn is_empty_value(&self) -> bool {
        !*self
    }
}

impl ProjectKey for bool {
    fn project_key(&self) -> ProjectResult<String> {
        Err(ProjectError::unsupported_key(KeyKind::Bool, self.to_string()))
    }
}

impl Projectable for () {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Value::Null)
    }

    fn is_empty_value(&self) -> bool {
        true
    }
}

impl ProjectKey for () {
    fn project_key(&self) -> ProjectResult<String> {
        Err(ProjectError::unsupported_key(KeyKind::Unit, "()"))
    }
}

impl Projectable for char {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Value::String(self.to_string()))
    }

    fn is_empty_value(&self) -> bool {
        *self == '\0'
    }
}

impl ProjectKey for char {
    fn project_key(&self) -> ProjectResult<String> {
        Ok(self.to_string())
    }
}

impl Projectable for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Scalar(Value::String(self.to_owned()))
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl ProjectKey for str {
    fn project_key(&self) -> ProjectResult<String> {
        Ok(self.to_owned())
    }
}

impl Projectable for String {
    fn shape(&self) -> Shape<'_> {
        self.as_str().shape()
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl ProjectKey for String {
    fn project_key(&self) -> ProjectResult<String> {
        Ok(self.clone())
    }
}

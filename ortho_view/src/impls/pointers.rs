//! References, smart pointers and `Option`.
//!
//! `Option` is the only nullable reference: `None` projects as `null` and is
//! empty. The other pointers cannot be null and resolve to their target
//! transparently, including its emptiness.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::{ProjectKey, ProjectResult, ProjectSelf, Projectable, Shape};

macro_rules! impl_transparent {
    ($(<$($lt:lifetime),*> $ty:ty),* $(,)?) => {$(
        impl<$($lt,)* T> Projectable for $ty
        where
            T: Projectable + ?Sized,
        {
            fn shape(&self) -> Shape<'_> {
                (**self).shape()
            }

            fn is_empty_value(&self) -> bool {
                (**self).is_empty_value()
            }

            fn as_custom(&self) -> Option<&dyn ProjectSelf> {
                (**self).as_custom()
            }
        }

        impl<$($lt,)* T> ProjectKey for $ty
        where
            T: ProjectKey + ?Sized,
        {
            fn project_key(&self) -> ProjectResult<String> {
                (**self).project_key()
            }
        }
    )*};
}

impl_transparent!(<'a> &'a T, <'a> &'a mut T, <> Box<T>, <> Rc<T>, <> Arc<T>);

impl<T> Projectable for Cow<'_, T>
where
    T: Projectable + ToOwned + ?Sized,
{
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }

    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }

    fn as_custom(&self) -> Option<&dyn ProjectSelf> {
        (**self).as_custom()
    }
}

impl<T> ProjectKey for Cow<'_, T>
where
    T: ProjectKey + ToOwned + ?Sized,
{
    fn project_key(&self) -> ProjectResult<String> {
        (**self).project_key()
    }
}

impl<T> Projectable for Option<T>
where
    T: Projectable,
{
    fn shape(&self) -> Shape<'_> {
        self.as_ref().map_or(Shape::Null, Projectable::shape)
    }

    fn is_empty_value(&self) -> bool {
        self.is_none()
    }

    fn as_custom(&self) -> Option<&dyn ProjectSelf> {
        self.as_ref().and_then(Projectable::as_custom)
    }
}

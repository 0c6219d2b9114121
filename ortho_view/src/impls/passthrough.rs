//! Values projected through their own serde representation.
//!
//! These types have a structural form that would be misleading if walked
//! (an IPv4 address is four bytes, a duration is a pair of integers), so the
//! projector hands them to `serde_json` unchanged.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std::num::FpCategory;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::{ProjectKey, ProjectResult, Projectable, Shape};

/// Opts any [`serde::Serialize`] value into pass-through projection.
///
/// The wrapped value is rendered exactly as `serde_json` renders it, without
/// any group filtering. Wrapped values are never considered empty.
///
/// # Examples
///
/// ```
/// use ortho_view::{Encoded, Options, Projectable, project};
/// use serde_json::json;
///
/// #[derive(serde::Serialize)]
/// struct Colour(u8, u8, u8);
///
/// #[derive(Projectable)]
/// struct Theme {
///     accent: Encoded<Colour>,
/// }
///
/// let theme = Theme { accent: Encoded(Colour(255, 128, 0)) };
/// assert_eq!(
///     project(&Options::default(), &theme)?,
///     json!({"accent": [255, 128, 0]}),
/// );
/// # Ok::<_, ortho_view::ProjectError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Encoded<T>(pub T);

impl<T> Projectable for Encoded<T>
where
    T: Serialize,
{
    fn shape(&self) -> Shape<'_> {
        Shape::Encoded(&self.0)
    }

    fn is_empty_value(&self) -> bool {
        false
    }
}

impl<T> Serialize for Encoded<T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl Projectable for Value {
    fn shape(&self) -> Shape<'_> {
        Shape::Encoded(self)
    }

    fn is_empty_value(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(flag) => !flag,
            Self::Number(number) => number
                .as_f64()
                .is_some_and(|n| n.classify() == FpCategory::Zero),
            Self::String(text) => text.is_empty(),
            Self::Array(items) => items.is_empty(),
            Self::Object(entries) => entries.is_empty(),
        }
    }
}

macro_rules! impl_text_passthrough {
    ($($ty:ty),* $(,)?) => {$(
        impl Projectable for $ty {
            fn shape(&self) -> Shape<'_> {
                Shape::Encoded(self)
            }

            fn is_empty_value(&self) -> bool {
                false
            }
        }

        impl ProjectKey for $ty {
            fn project_key(&self) -> ProjectResult<String> {
                Ok(self.to_string())
            }
        }
    )*};
}

impl_text_passthrough!(
    IpAddr,
    Ipv4Addr,
    Ipv6Addr,
    SocketAddr,
    SocketAddrV4,
    SocketAddrV6,
);

impl Projectable for PathBuf {
    fn shape(&self) -> Shape<'_> {
        Shape::Encoded(self)
    }

    fn is_empty_value(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

impl Projectable for Duration {
    fn shape(&self) -> Shape<'_> {
        Shape::Encoded(self)
    }

    fn is_empty_value(&self) -> bool {
        self.is_zero()
    }
}

//! Serde attribute parsing helpers.
//!
//! Projections default to the keys serde would emit, so the derive honours
//! `#[serde(rename = "...")]`, `#[serde(rename_all = "...")]`,
//! `#[serde(skip)]`/`#[serde(skip_serializing)]` and `#[serde(flatten)]` when
//! no `#[view(...)]` attribute says otherwise. Other serde keys are ignored.

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutyKebabCase, ToShoutySnakeCase, ToSnakeCase,
    ToUpperCamelCase,
};
use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr, Token};

/// Supported `rename_all` rules for struct fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RenameRule {
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

impl RenameRule {
    pub(crate) fn parse(value: &LitStr) -> syn::Result<Self> {
        match value.value().as_str() {
            "lowercase" => Ok(Self::Lower),
            "UPPERCASE" => Ok(Self::Upper),
            "PascalCase" => Ok(Self::Pascal),
            "camelCase" => Ok(Self::Camel),
            "snake_case" => Ok(Self::Snake),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            "kebab-case" => Ok(Self::Kebab),
            "SCREAMING-KEBAB-CASE" => Ok(Self::ScreamingKebab),
            other => Err(syn::Error::new(
                value.span(),
                format!(
                    "unsupported rename_all value '{other}'; expected one of \
\"lowercase\", \"UPPERCASE\", \"PascalCase\", \"camelCase\", \"snake_case\", \
\"SCREAMING_SNAKE_CASE\", \"kebab-case\", or \"SCREAMING-KEBAB-CASE\""
                ),
            )),
        }
    }

    pub(crate) fn apply(self, field_name: &str) -> String {
        match self {
            Self::Lower => field_name.to_ascii_lowercase(),
            Self::Upper => field_name.to_ascii_uppercase(),
            Self::Pascal => field_name.to_upper_camel_case(),
            Self::Camel => field_name.to_lower_camel_case(),
            Self::Snake => field_name.to_snake_case(),
            Self::ScreamingSnake => field_name.to_shouty_snake_case(),
            Self::Kebab => field_name.to_kebab_case(),
            Self::ScreamingKebab => field_name.to_shouty_kebab_case(),
        }
    }
}

/// Field flags recognised from `#[serde(...)]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct SerdeFieldFlags {
    pub skip: bool,
    pub flatten: bool,
}

/// Parse `#[serde(rename_all = "...")]` from struct attributes.
pub(crate) fn serde_rename_all(attrs: &[Attribute]) -> syn::Result<Option<RenameRule>> {
    let mut out = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                if meta.input.peek(Token![=]) {
                    let value = meta.value()?.parse::<LitStr>()?;
                    out = Some(RenameRule::parse(&value)?);
                } else {
                    meta.parse_nested_meta(|nested| parse_serialize_only(&nested, |value| {
                        out = Some(RenameRule::parse(&value)?);
                        Ok(())
                    }))?;
                }
            } else {
                super::discard_unknown(&meta)?;
            }
            Ok(())
        })?;
    }
    Ok(out)
}

/// Parse `#[serde(rename = "...")]` (and `rename(serialize = "...")`) from field attributes.
pub(crate) fn serde_field_rename(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut out = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("rename") {
                super::discard_unknown(&meta)?;
                return Ok(());
            }

            if meta.input.peek(Token![=]) {
                let value = meta.value()?.parse::<LitStr>()?;
                out = Some(value.value());
                return Ok(());
            }

            if !meta.input.peek(syn::token::Paren) {
                return Ok(());
            }

            meta.parse_nested_meta(|nested| {
                parse_serialize_only(&nested, |value| {
                    out = Some(value.value());
                    Ok(())
                })
            })?;
            Ok(())
        })?;
    }
    Ok(out)
}

/// Parse `skip`, `skip_serializing` and `flatten` from field attributes.
pub(crate) fn serde_field_flags(attrs: &[Attribute]) -> syn::Result<SerdeFieldFlags> {
    let mut flags = SerdeFieldFlags::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
                flags.skip = true;
                Ok(())
            } else if meta.path.is_ident("flatten") {
                flags.flatten = true;
                Ok(())
            } else {
                super::discard_unknown(&meta)
            }
        })?;
    }
    Ok(flags)
}

fn parse_serialize_only<F>(nested: &ParseNestedMeta, mut apply: F) -> syn::Result<()>
where
    F: FnMut(LitStr) -> syn::Result<()>,
{
    if !nested.path.is_ident("serialize") {
        super::discard_unknown(nested)?;
        return Ok(());
    }

    let value = nested.value()?.parse::<LitStr>()?;
    apply(value)
}

//! Tests for `#[view(...)]` and serde fallback parsing.

use super::*;
use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

fn parse(input: &DeriveInput) -> Result<ProjectableInput> {
    parse_input(input).map_err(|err| anyhow!(err))
}

fn field_attrs(input: &DeriveInput) -> Result<FieldAttrs> {
    let parsed = parse(input)?;
    parsed
        .fields
        .into_iter()
        .next()
        .map(|field| field.attrs)
        .ok_or_else(|| anyhow!("missing field"))
}

fn parse_error(input: &DeriveInput) -> String {
    parse_input(input).err().map(|err| err.to_string()).unwrap_or_default()
}

#[test]
fn parses_struct_and_field_attributes() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[view(rename_all = "camelCase", display_key, crate = "deps::views")]
        struct Demo {
            #[view(groups = "admin, api", rename = "id", omit_empty)]
            user_id: u64,
            #[view(flatten)]
            inner: Inner,
            #[view(skip)]
            cache: Cache,
        }
    };

    let parsed = parse(&input)?;
    ensure!(parsed.ident == "Demo", "expected Demo ident");
    ensure!(parsed.fields.len() == 3, "expected three fields");
    ensure!(
        parsed.attrs.rename_all == Some(RenameRule::Camel),
        "expected camelCase rule"
    );
    ensure!(parsed.attrs.display_key, "expected display_key");
    ensure!(parsed.attrs.crate_path.is_some(), "expected crate override");

    let [user_id, inner, cache] = parsed.fields.as_slice() else {
        return Err(anyhow!("expected three parsed fields"));
    };
    ensure!(user_id.attrs.groups == ["admin", "api"], "groups not trimmed");
    ensure!(user_id.attrs.rename.as_deref() == Some("id"), "rename missing");
    ensure!(user_id.attrs.omit_empty, "omit_empty missing");
    ensure!(inner.attrs.flatten, "flatten missing");
    ensure!(cache.attrs.skip, "skip missing");
    Ok(())
}

#[rstest]
#[case::absent(parse_quote!(struct S { #[view(rename = "x")] f: u8 }), Vec::new())]
#[case::single(parse_quote!(struct S { #[view(groups = "api")] f: u8 }), vec!["api"])]
#[case::blank(parse_quote!(struct S { #[view(groups = "")] f: u8 }), Vec::new())]
#[case::spaced(parse_quote!(struct S { #[view(groups = " a ,b ")] f: u8 }), vec!["a", "b"])]
fn groups_are_split_and_trimmed(
    #[case] input: DeriveInput,
    #[case] expected: Vec<&str>,
) -> Result<()> {
    let attrs = field_attrs(&input)?;
    ensure!(attrs.groups == expected, "unexpected groups {:?}", attrs.groups);
    Ok(())
}

#[rstest]
#[case::empty_segment(
    parse_quote!(struct S { #[view(groups = "a,,b")] f: u8 }),
    "groups must not contain empty names"
)]
#[case::unknown_field_key(
    parse_quote!(struct S { #[view(group = "a")] f: u8 }),
    "unknown view attribute `group`"
)]
#[case::unknown_struct_key(
    parse_quote!(#[view(rename_fields = "x")] struct S { f: u8 }),
    "unknown view attribute `rename_fields`"
)]
#[case::non_string_rename(
    parse_quote!(struct S { #[view(rename = 3)] f: u8 }),
    "rename must be a string"
)]
#[case::non_bool_flag(
    parse_quote!(struct S { #[view(skip = "yes")] f: u8 }),
    "skip must be a bool"
)]
#[case::bad_rule(
    parse_quote!(#[view(rename_all = "Title Case")] struct S { f: u8 }),
    "unsupported rename_all value 'Title Case'"
)]
#[case::tuple(parse_quote!(struct S(u8);), "Projectable requires named fields")]
#[case::enumeration(
    parse_quote!(enum E { A }),
    "Projectable can only be derived for structs"
)]
#[case::conflicting_modes(
    parse_quote!(#[view(custom, passthrough)] struct S { f: u8 }),
    "`custom` and `passthrough` cannot be combined"
)]
fn rejects_invalid_input(#[case] input: DeriveInput, #[case] expected: &str) {
    let message = parse_error(&input);
    assert!(
        message.contains(expected),
        "expected error containing {expected:?}, got {message:?}"
    );
}

#[test]
fn serde_attributes_supply_defaults() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[serde(rename_all = "kebab-case", deny_unknown_fields)]
        struct Demo {
            #[serde(rename(serialize = "out", deserialize = "in"), default)]
            renamed: u8,
            #[serde(skip_serializing_if = "Option::is_none", skip_serializing)]
            hidden: Option<u8>,
            #[serde(flatten)]
            nested: Inner,
        }
    };

    let parsed = parse(&input)?;
    ensure!(
        parsed.attrs.rename_all == Some(RenameRule::Kebab),
        "serde rename_all ignored"
    );
    let [renamed, hidden, nested] = parsed.fields.as_slice() else {
        return Err(anyhow!("expected three parsed fields"));
    };
    ensure!(
        renamed.attrs.rename.as_deref() == Some("out"),
        "serialize rename ignored"
    );
    ensure!(hidden.attrs.skip, "skip_serializing ignored");
    ensure!(nested.attrs.flatten, "serde flatten ignored");
    Ok(())
}

#[rstest]
#[case::skip_after_default(parse_quote!(struct S { #[serde(default = "zero", skip)] f: u8 }))]
#[case::skip_after_rename(
    parse_quote!(struct S { #[serde(rename = "pw", skip_serializing)] f: u8 })
)]
#[case::skip_after_path(
    parse_quote!(struct S { #[serde(serialize_with = "mask::hide", skip_serializing)] f: u8 })
)]
fn valued_serde_keys_keep_later_skip(#[case] input: DeriveInput) -> Result<()> {
    ensure!(field_attrs(&input)?.skip, "skip after a valued key ignored");
    Ok(())
}

#[test]
fn valued_serde_keys_keep_later_flatten_and_rename() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[serde(bound = "T: Clone", rename_all = "camelCase")]
        struct Demo {
            #[serde(with = "inner_codec", flatten)]
            nested: Inner,
            #[serde(skip_serializing_if = "String::is_empty", rename = "out")]
            renamed: String,
        }
    };

    let parsed = parse(&input)?;
    ensure!(
        parsed.attrs.rename_all == Some(RenameRule::Camel),
        "rename_all after a valued key ignored"
    );
    let [nested, renamed] = parsed.fields.as_slice() else {
        return Err(anyhow!("expected two parsed fields"));
    };
    ensure!(nested.attrs.flatten, "flatten after a valued key ignored");
    ensure!(
        renamed.attrs.rename.as_deref() == Some("out"),
        "rename after a valued key ignored"
    );
    Ok(())
}

#[test]
fn view_attributes_override_serde() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[view(rename_all = "UPPERCASE")]
        #[serde(rename_all = "camelCase")]
        struct Demo {
            #[view(rename = "view_name", skip = false)]
            #[serde(rename = "serde_name", skip)]
            field: u8,
        }
    };

    let parsed = parse(&input)?;
    ensure!(
        parsed.attrs.rename_all == Some(RenameRule::Upper),
        "view rename_all should win"
    );
    let attrs = parsed
        .fields
        .first()
        .map(|field| field.attrs.clone())
        .ok_or_else(|| anyhow!("missing field"))?;
    ensure!(
        attrs.rename.as_deref() == Some("view_name"),
        "view rename should win"
    );
    ensure!(!attrs.skip, "explicit skip = false should win");
    Ok(())
}

#[test]
fn raw_identifiers_lose_their_prefix() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Demo {
            r#type: String,
        }
    };
    let parsed = parse(&input)?;
    let name = parsed.fields.first().map(|field| field.name.as_str());
    ensure!(name == Some("type"), "expected unraw name, got {name:?}");
    Ok(())
}

#[test]
fn unit_structs_have_no_fields() -> Result<()> {
    let input: DeriveInput = parse_quote!(struct Marker;);
    ensure!(parse(&input)?.fields.is_empty(), "unit struct has no fields");
    Ok(())
}

#[rstest]
#[case("lowercase", "userId", "userid")]
#[case("UPPERCASE", "user_id", "USER_ID")]
#[case("PascalCase", "user_id", "UserId")]
#[case("camelCase", "user_id", "userId")]
#[case("snake_case", "userId", "user_id")]
#[case("SCREAMING_SNAKE_CASE", "user_id", "USER_ID")]
#[case("kebab-case", "user_id", "user-id")]
#[case("SCREAMING-KEBAB-CASE", "user_id", "USER-ID")]
fn rename_rules_match_serde(
    #[case] rule: &str,
    #[case] field: &str,
    #[case] expected: &str,
) -> Result<()> {
    let literal = syn::LitStr::new(rule, proc_macro2::Span::call_site());
    let parsed = RenameRule::parse(&literal).map_err(|err| anyhow!(err))?;
    ensure!(parsed.apply(field) == expected, "{rule} mismatch");
    Ok(())
}

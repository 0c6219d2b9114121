//! Caller-supplied projection options.

use serde::{Deserialize, Serialize};

/// Active groups used to decide which fields are projected.
///
/// A field tagged with several groups is projected when any one of them is
/// active. Fields without groups are always projected unless they inherit
/// groups from a flattened parent.
///
/// `Options` carries no per-call state, so a single value may be shared
/// between threads and reused across calls.
///
/// # Examples
///
/// ```
/// use ortho_view::Options;
///
/// let options = Options::from_csv("public,admin");
/// assert!(options.is_active("admin"));
/// assert!(!options.is_active("private"));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    groups: Vec<String>,
}

impl Options {
    /// Creates options with the given active groups.
    #[must_use]
    pub fn new<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        groups.into_iter().collect()
    }

    /// Splits `csv` on commas and activates every segment verbatim.
    ///
    /// Segments are not trimmed, so `"a, b"` activates `"a"` and `" b"`. An
    /// empty string activates the single empty group, which no field can
    /// declare.
    #[must_use]
    pub fn from_csv(csv: &str) -> Self {
        csv.split(',').collect()
    }

    /// Adds `group` to the active set.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.push(group.into());
        self
    }

    /// Returns the active groups in insertion order.
    #[must_use]
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Returns `true` when `group` is active.
    #[must_use]
    pub fn is_active(&self, group: &str) -> bool {
        self.groups.iter().any(|active| active == group)
    }

    /// Returns `true` when at least one of `groups` is active.
    ///
    /// An empty `groups` slice never intersects; callers treat untagged
    /// fields as visible before reaching this check.
    #[must_use]
    pub fn intersects(&self, groups: &[&str]) -> bool {
        groups.iter().any(|group| self.is_active(group))
    }
}

impl<S> FromIterator<S> for Options
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for option construction and group checks.

    use rstest::rstest;

    use super::Options;

    #[rstest]
    #[case("test", &["test"])]
    #[case("test,test-other", &["test", "test-other"])]
    #[case("a, b", &["a", " b"])]
    #[case("", &[""])]
    fn from_csv_splits_verbatim(#[case] csv: &str, #[case] expected: &[&str]) {
        let options = Options::from_csv(csv);
        assert_eq!(options.groups(), expected);
    }

    #[rstest]
    #[case(&["admin"], &["admin"], true)]
    #[case(&["user"], &["admin"], false)]
    #[case(&["user"], &["admin", "user"], true)]
    #[case(&[], &["admin"], false)]
    #[case(&["admin"], &[], false)]
    fn intersects_requires_a_shared_group(
        #[case] active: &[&str],
        #[case] declared: &[&str],
        #[case] expected: bool,
    ) {
        let options = Options::new(active.iter().copied());
        assert_eq!(options.intersects(declared), expected);
    }

    #[rstest]
    fn with_group_appends() {
        let options = Options::default().with_group("safe").with_group("summary");
        assert_eq!(options.groups(), ["safe", "summary"]);
    }

    #[rstest]
    fn deserialises_from_json() -> serde_json::Result<()> {
        let options: Options = serde_json::from_str(r#"{"groups":["public"]}"#)?;
        assert!(options.is_active("public"));
        let empty: Options = serde_json::from_str("{}")?;
        assert!(empty.groups().is_empty());
        Ok(())
    }
}

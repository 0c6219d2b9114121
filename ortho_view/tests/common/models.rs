//! Group-tagged models shared by the projection tests.

use std::collections::HashMap;

use ortho_view::Projectable;
use rstest::fixture;

/// Two flags visible to different groups.
#[derive(Debug, Clone, Projectable)]
pub struct Flags {
    #[view(rename = "something", groups = "test")]
    pub all_groups: bool,
    #[view(rename = "something_else", groups = "test-other")]
    pub test_group: bool,
}

/// A model exercising every field attribute combination.
#[derive(Debug, Clone, Default, Projectable)]
pub struct GroupsModel {
    pub default_marshal: String,
    #[view(skip)]
    pub never_marshal: String,
    #[view(groups = "test")]
    pub only_group_test: String,
    #[view(skip, groups = "test")]
    pub only_group_test_never_marshal: String,
    #[view(groups = "test-other")]
    pub only_group_test_other: String,
    #[view(groups = "test,test-other")]
    pub group_test_and_other: String,
    #[view(omit_empty)]
    pub omit_empty: String,
    #[view(omit_empty, groups = "test")]
    pub omit_empty_group_test: String,
    #[view(omit_empty, groups = "test")]
    pub slice_string: Vec<String>,
    #[view(omit_empty, groups = "test,test-other")]
    pub map_string_struct: HashMap<String, Flags>,
}

/// A fully populated [`GroupsModel`].
#[fixture]
pub fn groups_model() -> GroupsModel {
    GroupsModel {
        default_marshal: "DefaultMarshal".into(),
        never_marshal: "NeverMarshal".into(),
        only_group_test: "OnlyGroupTest".into(),
        only_group_test_never_marshal: "OnlyGroupTestNeverMarshal".into(),
        only_group_test_other: "OnlyGroupTestOther".into(),
        group_test_and_other: "GroupTestAndOther".into(),
        omit_empty: "OmitEmpty".into(),
        omit_empty_group_test: "OmitEmptyGroupTest".into(),
        slice_string: vec!["test".into(), "bla".into()],
        map_string_struct: HashMap::from([(
            "firstModel".to_owned(),
            Flags {
                all_groups: true,
                test_group: true,
            },
        )]),
    }
}

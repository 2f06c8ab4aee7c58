//! Support-form groups addressable from `support-form?form=<suffix>` links.

use serde::{Deserialize, Serialize};

/// A support group that can be opened by deep link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportGroup {
    /// Display name of the group.
    pub name: String,
    /// Value of the `form` query parameter that selects this group.
    pub deeplink_suffix: String,
}

impl SupportGroup {
    pub fn new(name: &str, deeplink_suffix: &str) -> Self {
        Self {
            name: name.to_string(),
            deeplink_suffix: deeplink_suffix.to_string(),
        }
    }
}

/// Ordered set of support groups; lookups return the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportGroupRegistry {
    groups: Vec<SupportGroup>,
}

impl Default for SupportGroupRegistry {
    fn default() -> Self {
        Self::new(vec![SupportGroup::new("Flipper", "flipper")])
    }
}

impl SupportGroupRegistry {
    pub fn new(groups: Vec<SupportGroup>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[SupportGroup] {
        &self.groups
    }

    /// Finds the group whose suffix equals `form_key`, ignoring ASCII case.
    ///
    /// An absent or empty key never matches.
    pub fn find(&self, form_key: Option<&str>) -> Option<&SupportGroup> {
        let key = form_key.filter(|k| !k.is_empty())?;
        self.groups
            .iter()
            .find(|g| g.deeplink_suffix.eq_ignore_ascii_case(key))
    }
}

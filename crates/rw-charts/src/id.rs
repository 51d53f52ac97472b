//! Chart element identifiers.

use uuid::Uuid;

/// Prefix of generated chart ids (`chart-xxxxxxxxx`).
pub const DEFAULT_ID_PREFIX: &str = "chart";

/// Number of random characters after the prefix.
const ID_SUFFIX_LEN: usize = 9;

/// Generate an element id for a chart canvas.
///
/// The id is `{prefix}-` followed by nine lowercase alphanumeric characters.
/// Collisions are improbable but not checked.
#[must_use]
pub fn generate_chart_id(prefix: &str) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &random[..ID_SUFFIX_LEN])
}

/// Whether `id` follows the generated-id naming convention for `prefix`.
#[must_use]
pub fn is_chart_id(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|suffix| !suffix.is_empty())
}

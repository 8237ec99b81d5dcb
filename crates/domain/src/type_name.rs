//! Data source type names.

/// Suffix appended to the provider name to form the data source type name.
pub const NOW_SUFFIX: &str = "_now";

/// Returns the type name of the `now` data source for the provider
/// namespace the host supplies, e.g. `time` → `time_now`.
///
/// The namespace is taken as-is; naming rules belong to the host.
#[must_use]
pub fn now_type_name(provider_type_name: &str) -> String {
    format!("{provider_type_name}{NOW_SUFFIX}")
}

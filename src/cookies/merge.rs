use crate::cookies::jar::CookieJar;
use std::collections::BTreeMap;
use url::Url;

/// A script-declared cookie instruction for one outgoing request.
///
/// Built fresh from script configuration per request and discarded once
/// the request is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOverride {
    pub name: String,
    pub value: String,
    /// When set, the override's value supersedes every jar-sourced value
    /// under the same name instead of being sent alongside them.
    pub replace: bool,
}

impl CookieOverride {
    pub fn new(name: impl Into<String>, value: impl Into<String>, replace: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            replace,
        }
    }

    /// An override that is sent in addition to any jar-sourced values.
    pub fn append(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, false)
    }

    /// An override that discards jar-sourced values under its name.
    pub fn replace(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, true)
    }
}

/// The cookies to send on one request: name → ordered values.
///
/// Names iterate in lexicographic order, making the wire order of cookie
/// headers deterministic across runs. Values under a name keep jar order,
/// with an appended override value last. Built fresh per request, never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedCookieSet {
    entries: BTreeMap<String, Vec<String>>,
}

impl MergedCookieSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The ordered values under `name`, if any.
    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Iterate names (lexicographically) with their value lists.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Iterate the flattened (name, value) pairs in send order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|(name, values)| {
            values.iter().map(move |value| (name.as_str(), value.as_str()))
        })
    }

    /// Number of distinct cookie names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of (name, value) pairs across all names.
    pub fn total_values(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Combine a jar's matches for `url` with the request's overrides.
///
/// Pure and total: every input combination, including an empty jar or an
/// empty override map, yields a well-defined set, and neither input is
/// mutated. Overrides are keyed by cookie name; the map key is
/// authoritative and applied in lexicographic order.
pub fn merge_cookies(
    jar: &CookieJar,
    url: &Url,
    overrides: &BTreeMap<String, CookieOverride>,
) -> MergedCookieSet {
    let mut merged = MergedCookieSet::new();

    for cookie in jar.cookies_for_url(url) {
        merged
            .entries
            .entry(cookie.name)
            .or_default()
            .push(cookie.value);
    }

    for (name, over) in overrides {
        let existing = merged.entries.remove(name).unwrap_or_default();
        merged.entries.insert(name.clone(), apply_override(existing, over));
    }

    merged
}

/// Replace-or-append policy for one cookie name.
///
/// `replace` discards jar-sourced values only when the jar actually had
/// some; with no existing values, or with `replace` unset, the override's
/// value lands after whatever the jar contributed. An empty override
/// value is still a value.
pub fn apply_override(mut existing: Vec<String>, over: &CookieOverride) -> Vec<String> {
    if !existing.is_empty() && over.replace {
        vec![over.value.clone()]
    } else {
        existing.push(over.value.clone());
        existing
    }
}

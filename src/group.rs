// group.rs - Group identifiers and per-match group maps.
//
// Named groups are keyed by their name, unnamed groups by their 1-based
// position among all groups. Every operation resolves keys through here.

use std::fmt;
use std::iter;
use std::ops::Index;

use smallvec::SmallVec;

use crate::engine::GroupSpans;

/// Resolve the identifier of the group at zero-based `index`.
///
/// A non-empty declared `name` is returned unchanged, otherwise the
/// identifier is the decimal text of `index + 1`.
///
/// ```
/// use rxgroups::group::resolve_identifier;
///
/// assert_eq!(resolve_identifier("year", 0), "year");
/// assert_eq!(resolve_identifier("", 1), "2");
/// ```
pub fn resolve_identifier(name: &str, index: usize) -> String {
    if name.is_empty() {
        (index + 1).to_string()
    } else {
        name.to_string()
    }
}

/// Resolve identifiers for a whole list of declared group names.
pub fn resolve_identifiers<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| resolve_identifier(name.as_ref(), i))
        .collect()
}

/// Captured text of one match, keyed by group identifier.
///
/// Entries keep declaration order. A group that did not participate in
/// the match is present with an empty value.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct GroupMap<'p, 't> {
    entries: SmallVec<[(&'p str, &'t str); 4]>,
}

impl<'p, 't> GroupMap<'p, 't> {
    /// Build the map for one match from its group spans.
    ///
    /// `identifiers` and `spans` are paired by position. Identifiers with
    /// no span left to pair with are treated as groups that did not
    /// participate; surplus spans are ignored.
    pub(crate) fn from_spans(
        identifiers: &'p [String],
        subject: &'t str,
        spans: &GroupSpans,
    ) -> GroupMap<'p, 't> {
        identifiers
            .iter()
            .zip(spans.iter().copied().chain(iter::repeat(None)))
            .map(|(id, span)| {
                let text = span.map_or("", |s| &subject[s.range()]);
                (id.as_str(), text)
            })
            .collect()
    }

    /// Captured text for `identifier`, or `None` if the pattern declares
    /// no such group.
    pub fn get(&self, identifier: &str) -> Option<&'t str> {
        self.entries
            .iter()
            .find(|(id, _)| *id == identifier)
            .map(|&(_, text)| text)
    }

    pub fn contains_key(&self, identifier: &str) -> bool {
        self.get(identifier).is_some()
    }

    /// Number of groups in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(identifier, text)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'p str, &'t str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'p str> + '_ {
        self.entries.iter().map(|&(id, _)| id)
    }

    pub fn values(&self) -> impl Iterator<Item = &'t str> + '_ {
        self.entries.iter().map(|&(_, text)| text)
    }
}

impl<'p, 't> FromIterator<(&'p str, &'t str)> for GroupMap<'p, 't> {
    fn from_iter<I: IntoIterator<Item = (&'p str, &'t str)>>(iter: I) -> Self {
        GroupMap {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Index<&str> for GroupMap<'_, '_> {
    type Output = str;

    /// # Panics
    ///
    /// Panics if the pattern declares no group with this identifier.
    fn index(&self, identifier: &str) -> &str {
        self.get(identifier)
            .unwrap_or_else(|| panic!("no group with identifier '{}'", identifier))
    }
}

impl fmt::Debug for GroupMap<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

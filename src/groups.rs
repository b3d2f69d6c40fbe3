// groups.rs - Per-match group extraction.
//
// Keys come from the identifiers the pattern resolved at construction,
// never from the individual match.

use crate::engine::Engine;
use crate::group::GroupMap;
use crate::pattern::Pattern;

/// Outcome of a group extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction<T> {
    /// The pattern does not match the subject.
    NoMatch,
    /// The pattern matches but declares no groups.
    Ungrouped,
    /// The pattern matches and its groups were captured.
    Groups(T),
}

impl<T> Extraction<T> {
    /// Returns `true` if the pattern matched, with or without groups.
    pub fn is_found(&self) -> bool {
        !matches!(self, Extraction::NoMatch)
    }

    /// Borrow the captured groups, if any.
    pub fn groups(&self) -> Option<&T> {
        match self {
            Extraction::Groups(groups) => Some(groups),
            _ => None,
        }
    }

    /// Take the captured groups, if any.
    pub fn into_groups(self) -> Option<T> {
        match self {
            Extraction::Groups(groups) => Some(groups),
            _ => None,
        }
    }
}

impl<E: Engine> Pattern<E> {
    /// Return the groups of the first match.
    ///
    /// # Examples
    ///
    /// ```
    /// use rxgroups::pattern::Pattern;
    ///
    /// let pat = Pattern::new(r"(?P<greeting>\w+),\s*(\w+)(!)").unwrap();
    /// let groups = pat.find_groups("hello, world!").into_groups().unwrap();
    /// assert_eq!(groups.get("greeting"), Some("hello"));
    /// assert_eq!(groups.get("2"), Some("world"));
    /// assert_eq!(groups.get("3"), Some("!"));
    /// ```
    pub fn find_groups<'p, 't>(&'p self, subject: &'t str) -> Extraction<GroupMap<'p, 't>> {
        if self.group_len() == 0 {
            return ungrouped(self.is_match(subject));
        }
        match self.engine().first_match(subject) {
            Some(m) => Extraction::Groups(GroupMap::from_spans(
                self.group_identifiers(),
                subject,
                &m.groups,
            )),
            None => Extraction::NoMatch,
        }
    }

    /// Return the groups of every successive non-overlapping match, one
    /// map per match in scan order.
    pub fn find_all_groups<'p, 't>(
        &'p self,
        subject: &'t str,
    ) -> Extraction<Vec<GroupMap<'p, 't>>> {
        if self.group_len() == 0 {
            return ungrouped(self.is_match(subject));
        }
        let identifiers = self.group_identifiers();
        let maps: Vec<_> = self
            .engine()
            .all_match_spans(subject)
            .iter()
            .map(|m| GroupMap::from_spans(identifiers, subject, &m.groups))
            .collect();
        if maps.is_empty() {
            return Extraction::NoMatch;
        }
        Extraction::Groups(maps)
    }
}

fn ungrouped<T>(found: bool) -> Extraction<T> {
    if found {
        Extraction::Ungrouped
    } else {
        Extraction::NoMatch
    }
}

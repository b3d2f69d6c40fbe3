// replace.rs - Group-driven replacement of every match.
//
// Output is built in one left-to-right pass over the match spans of the
// original subject. Offsets are never taken from the partially built
// output, so replacements of any length cannot shift later slices.

use std::borrow::Cow;

use log::trace;

use crate::engine::Engine;
use crate::group::GroupMap;
use crate::pattern::Pattern;

impl<E: Engine> Pattern<E> {
    /// Replace every non-overlapping match with the output of `replace`,
    /// called with that match's [`GroupMap`].
    ///
    /// Text outside the matches is copied through unchanged. If nothing
    /// matches, or `replace` is `None`, the subject is returned as is.
    /// A pattern without groups still calls `replace` once per match, with
    /// an empty map. A match starting before the end of the previous one
    /// is skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use rxgroups::group::GroupMap;
    /// use rxgroups::pattern::Pattern;
    ///
    /// fn swap(m: &GroupMap<'_, '_>) -> String {
    ///     format!("{}, {}.", &m["name"], &m["greeting"])
    /// }
    ///
    /// let pat = Pattern::new(r"(?P<greeting>\w+),\s*(?P<name>\w+)!").unwrap();
    /// let out = pat.replace_all_groups_func("pre hello, world! post", Some(swap));
    /// assert_eq!(out, "pre world, hello. post");
    /// ```
    pub fn replace_all_groups_func<'p, 't, F, R>(
        &'p self,
        subject: &'t str,
        replace: Option<F>,
    ) -> Cow<'t, str>
    where
        F: FnMut(&GroupMap<'p, 't>) -> R,
        R: AsRef<str>,
    {
        let Some(mut replace) = replace else {
            return Cow::Borrowed(subject);
        };
        let matches = self.engine().all_match_spans(subject);
        if matches.is_empty() {
            return Cow::Borrowed(subject);
        }
        trace!("replacing {} match(es) in {} byte subject", matches.len(), subject.len());

        let identifiers = self.group_identifiers();
        let mut out = String::with_capacity(subject.len());
        let mut last_end = 0;
        for m in &matches {
            if m.span.start < last_end {
                trace!("skipping match at {}..{} overlapping previous match", m.span.start, m.span.end);
                continue;
            }
            let groups = GroupMap::from_spans(identifiers, subject, &m.groups);
            out.push_str(&subject[last_end..m.span.start]);
            out.push_str(replace(&groups).as_ref());
            last_end = m.span.end;
        }
        out.push_str(&subject[last_end..]);
        Cow::Owned(out)
    }
}

// find.rs - Whole-match text extraction.
//
// Group structure is ignored here; only whole-match spans matter.

use crate::engine::Engine;
use crate::pattern::Pattern;

impl<E: Engine> Pattern<E> {
    /// Return the text of the first match, or `None` if nothing matches.
    ///
    /// ```
    /// use rxgroups::pattern::Pattern;
    ///
    /// let pat = Pattern::new(r"\w+,\s*\w+!").unwrap();
    /// assert_eq!(pat.find_match("hello, world! hi, cosmos!"), Some("hello, world!"));
    /// assert_eq!(pat.find_match("no punctuation"), None);
    /// ```
    pub fn find_match<'t>(&self, subject: &'t str) -> Option<&'t str> {
        self.engine().first_match_text(subject)
    }

    /// Return the texts of all successive non-overlapping matches, or
    /// `None` if nothing matches.
    ///
    /// A returned vector is never empty.
    pub fn find_all_matches<'t>(&self, subject: &'t str) -> Option<Vec<&'t str>> {
        let matches = self.engine().all_matches_text(subject);
        if matches.is_empty() {
            return None;
        }
        Some(matches)
    }
}

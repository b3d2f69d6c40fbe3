// engine.rs - Contract with the underlying regex engine.
//
// Everything about matching (syntax, search algorithm, scan order) is the
// engine's business. This layer only consumes names, spans and texts.

use std::ops::Range;

use smallvec::SmallVec;

/// Per-group spans of one match, inline for up to eight groups.
pub type GroupSpans = SmallVec<[Option<Span>; 8]>;

/// A byte range of the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Span {
        debug_assert!(start <= end, "span start {} is past its end {}", start, end);
        Span { start, end }
    }

    /// Byte range of the span.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` for a zero-width span.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Span {
        Span::new(range.start, range.end)
    }
}

/// Spans of a single match: the whole match plus one entry per declared
/// group. A group that did not take part in the match is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpans {
    pub span: Span,
    pub groups: GroupSpans,
}

impl MatchSpans {
    pub fn new(span: Span, groups: impl IntoIterator<Item = Option<Span>>) -> MatchSpans {
        MatchSpans {
            span,
            groups: groups.into_iter().collect(),
        }
    }
}

/// A compiled regular expression as seen by this crate.
///
/// Implementors must report matches left to right and without overlap.
/// The declared group names exclude the whole-match group, and an unnamed
/// group is reported as an empty string.
///
/// Only [`group_names`], [`first_match`] and [`all_match_spans`] are
/// required; the text-level methods are derived from spans unless the
/// engine has a cheaper way to answer them.
///
/// [`group_names`]: Engine::group_names
/// [`first_match`]: Engine::first_match
/// [`all_match_spans`]: Engine::all_match_spans
pub trait Engine {
    /// Declared group names in declaration order, `""` for unnamed groups.
    fn group_names(&self) -> Vec<String>;

    /// Spans of the leftmost match, or `None` if nothing matches.
    fn first_match(&self, subject: &str) -> Option<MatchSpans>;

    /// Spans of all successive non-overlapping matches.
    fn all_match_spans(&self, subject: &str) -> Vec<MatchSpans>;

    /// Check whether `subject` matches anywhere.
    fn is_match(&self, subject: &str) -> bool {
        self.first_match(subject).is_some()
    }

    /// Text of the leftmost match.
    fn first_match_text<'t>(&self, subject: &'t str) -> Option<&'t str> {
        self.first_match(subject).map(|m| &subject[m.span.range()])
    }

    /// Texts of all successive non-overlapping matches.
    fn all_matches_text<'t>(&self, subject: &'t str) -> Vec<&'t str> {
        self.all_match_spans(subject)
            .into_iter()
            .map(|m| &subject[m.span.range()])
            .collect()
    }
}

impl Engine for regex::Regex {
    fn group_names(&self) -> Vec<String> {
        self.capture_names()
            .skip(1)
            .map(|name| name.unwrap_or_default().to_string())
            .collect()
    }

    fn first_match(&self, subject: &str) -> Option<MatchSpans> {
        self.captures(subject).map(|caps| spans_of(&caps))
    }

    fn all_match_spans(&self, subject: &str) -> Vec<MatchSpans> {
        self.captures_iter(subject).map(|caps| spans_of(&caps)).collect()
    }

    fn is_match(&self, subject: &str) -> bool {
        regex::Regex::is_match(self, subject)
    }

    fn first_match_text<'t>(&self, subject: &'t str) -> Option<&'t str> {
        self.find(subject).map(|m| m.as_str())
    }

    fn all_matches_text<'t>(&self, subject: &'t str) -> Vec<&'t str> {
        self.find_iter(subject).map(|m| m.as_str()).collect()
    }
}

fn spans_of(caps: &regex::Captures<'_>) -> MatchSpans {
    // Group 0 always participates in a successful match.
    let whole = caps.get(0).map_or(Span::new(0, 0), |m| m.range().into());
    MatchSpans::new(
        whole,
        (1..caps.len()).map(|i| caps.get(i).map(|m| Span::from(m.range()))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_accessors() {
        let span = Span::from(3..6);
        assert_eq!(span.range(), 3..6);
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert!(Span::new(4, 4).is_empty());
    }

    #[test]
    fn regex_group_names() {
        let re = regex::Regex::new(r"(?P<greeting>\w+),\s*(\w+)(!)").unwrap();
        assert_eq!(Engine::group_names(&re), vec!["greeting", "", ""]);
    }

    #[test]
    fn regex_group_names_without_groups() {
        let re = regex::Regex::new(r"\w+").unwrap();
        assert!(Engine::group_names(&re).is_empty());
    }

    #[test]
    fn regex_first_match_spans() {
        let re = regex::Regex::new(r"(a)(b)?c").unwrap();
        let m = Engine::first_match(&re, "xxac").unwrap();
        assert_eq!(m.span, Span::new(2, 4));
        assert_eq!(m.span.len(), 2);
        assert_eq!(m.groups.as_slice(), &[Some(Span::new(2, 3)), None]);
    }

    #[test]
    fn regex_all_match_spans() {
        let re = regex::Regex::new(r"(\d)").unwrap();
        let spans: Vec<Span> = Engine::all_match_spans(&re, "1 2 3")
            .into_iter()
            .map(|m| m.span)
            .collect();
        assert_eq!(spans, vec![Span::new(0, 1), Span::new(2, 3), Span::new(4, 5)]);
    }

    #[test]
    fn regex_texts() {
        let re = regex::Regex::new(r"\d+").unwrap();
        assert_eq!(Engine::first_match_text(&re, "a 12 b 345"), Some("12"));
        assert_eq!(Engine::all_matches_text(&re, "a 12 b 345"), vec!["12", "345"]);
        assert!(Engine::first_match_text(&re, "none").is_none());
        assert!(!Engine::is_match(&re, "none"));
    }

    struct Fixed(Vec<MatchSpans>);

    impl Engine for Fixed {
        fn group_names(&self) -> Vec<String> {
            Vec::new()
        }

        fn first_match(&self, _: &str) -> Option<MatchSpans> {
            self.0.first().cloned()
        }

        fn all_match_spans(&self, _: &str) -> Vec<MatchSpans> {
            self.0.clone()
        }
    }

    #[test]
    fn default_text_methods_slice_spans() {
        let engine = Fixed(vec![
            MatchSpans::new(Span::new(0, 2), []),
            MatchSpans::new(Span::new(3, 3), []),
        ]);
        assert!(engine.is_match("ab cd"));
        assert_eq!(engine.first_match_text("ab cd"), Some("ab"));
        assert_eq!(engine.all_matches_text("ab cd"), vec!["ab", ""]);
        assert!(!Fixed(Vec::new()).is_match("ab cd"));
    }
}

// pattern.rs - Compiled patterns and their configuration.
//
// A Pattern pairs an engine with the group identifiers of its declared
// groups. The identifiers are resolved once here, so every match of the
// pattern surfaces the same group under the same key.

use bitflags::bitflags;
use log::debug;

use crate::engine::Engine;
use crate::error::PatternError;
use crate::group::resolve_identifiers;

bitflags! {
    /// Compilation options for [`PatternBuilder`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PatternFlags: u32 {
        /// Letters match both upper and lower case.
        const CASE_INSENSITIVE = 1 << 0;
        /// `^` and `$` match at line boundaries.
        const MULTI_LINE = 1 << 1;
        /// `.` also matches `\n`.
        const DOT_MATCHES_NEW_LINE = 1 << 2;
        /// Greedy and lazy quantifiers swap meaning.
        const SWAP_GREED = 1 << 3;
        /// Whitespace is ignored and `#` starts a comment.
        const IGNORE_WHITESPACE = 1 << 4;
        /// `\r\n` counts as a line terminator in multi-line mode.
        const CRLF = 1 << 5;
        /// Character classes and `\w`, `\d`, `\s` are ASCII only.
        const ASCII_ONLY = 1 << 6;
    }
}

/// A compiled pattern together with its resolved group identifiers.
///
/// # Examples
///
/// ```
/// use rxgroups::pattern::Pattern;
///
/// let pat = Pattern::new(r"(?P<greeting>\w+),\s*(\w+)(!)").unwrap();
/// assert_eq!(pat.group_identifiers(), ["greeting", "2", "3"]);
/// assert!(pat.is_match("hello, world!"));
/// ```
pub struct Pattern<E = regex::Regex> {
    engine: E,
    identifiers: Vec<String>,
}

impl Pattern {
    /// Compile an expression with default options.
    pub fn new(expr: &str) -> Result<Pattern, PatternError> {
        PatternBuilder::new(expr).build()
    }

    /// Create a [`PatternBuilder`] for fine-grained control over compilation.
    pub fn builder(expr: &str) -> PatternBuilder {
        PatternBuilder::new(expr)
    }

    /// The expression this pattern was compiled from.
    pub fn as_str(&self) -> &str {
        self.engine.as_str()
    }
}

impl<E: Engine> Pattern<E> {
    /// Wrap an already compiled engine.
    pub fn from_engine(engine: E) -> Pattern<E> {
        let identifiers = resolve_identifiers(&engine.group_names());
        Pattern {
            engine,
            identifiers,
        }
    }

    /// Check whether `subject` matches the pattern anywhere.
    pub fn is_match(&self, subject: &str) -> bool {
        self.engine.is_match(subject)
    }

    /// Identifiers of the declared groups in declaration order.
    ///
    /// Excludes the whole-match group.
    pub fn group_identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Number of declared groups (excluding the whole-match group).
    pub fn group_len(&self) -> usize {
        self.identifiers.len()
    }
}

impl<E> Pattern<E> {
    /// Access the underlying engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl From<regex::Regex> for Pattern {
    fn from(re: regex::Regex) -> Pattern {
        Pattern::from_engine(re)
    }
}

impl<E> std::fmt::Debug for Pattern<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pattern")
            .field("identifiers", &self.identifiers)
            .finish_non_exhaustive()
    }
}

// === PatternBuilder ===

/// Builder for compiling a [`Pattern`] with custom options.
///
/// # Examples
///
/// ```
/// use rxgroups::pattern::Pattern;
///
/// let pat = Pattern::builder(r"(?P<word>hello)")
///     .case_insensitive(true)
///     .build()
///     .unwrap();
/// assert!(pat.is_match("HELLO"));
/// ```
#[derive(Debug, Clone)]
pub struct PatternBuilder {
    expr: String,
    flags: PatternFlags,
    size_limit: Option<usize>,
}

impl PatternBuilder {
    /// Create a new builder for the given expression.
    pub fn new(expr: &str) -> Self {
        PatternBuilder {
            expr: expr.to_string(),
            flags: PatternFlags::empty(),
            size_limit: None,
        }
    }

    /// Enable or disable case-insensitive matching.
    pub fn case_insensitive(self, yes: bool) -> Self {
        self.flag(PatternFlags::CASE_INSENSITIVE, yes)
    }

    /// Enable or disable `^`/`$` matching at every line boundary.
    pub fn multi_line(self, yes: bool) -> Self {
        self.flag(PatternFlags::MULTI_LINE, yes)
    }

    /// Enable or disable `.` matching `\n`.
    pub fn dot_matches_new_line(self, yes: bool) -> Self {
        self.flag(PatternFlags::DOT_MATCHES_NEW_LINE, yes)
    }

    /// Swap the meaning of greedy and lazy quantifiers.
    pub fn swap_greed(self, yes: bool) -> Self {
        self.flag(PatternFlags::SWAP_GREED, yes)
    }

    /// Enable or disable extended mode (whitespace and `#` comments ignored).
    pub fn ignore_whitespace(self, yes: bool) -> Self {
        self.flag(PatternFlags::IGNORE_WHITESPACE, yes)
    }

    /// Treat `\r\n` as a line terminator in multi-line mode.
    pub fn crlf(self, yes: bool) -> Self {
        self.flag(PatternFlags::CRLF, yes)
    }

    /// Restrict character classes to ASCII.
    pub fn ascii_only(self, yes: bool) -> Self {
        self.flag(PatternFlags::ASCII_ONLY, yes)
    }

    /// Replace all flags at once.
    pub fn flags(mut self, flags: PatternFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the approximate size limit, in bytes, of the compiled program.
    pub fn size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        self
    }

    fn flag(mut self, flag: PatternFlags, yes: bool) -> Self {
        self.flags.set(flag, yes);
        self
    }

    /// Compile the expression into a [`Pattern`].
    pub fn build(self) -> Result<Pattern, PatternError> {
        let mut builder = regex::RegexBuilder::new(&self.expr);
        builder
            .case_insensitive(self.flags.contains(PatternFlags::CASE_INSENSITIVE))
            .multi_line(self.flags.contains(PatternFlags::MULTI_LINE))
            .dot_matches_new_line(self.flags.contains(PatternFlags::DOT_MATCHES_NEW_LINE))
            .swap_greed(self.flags.contains(PatternFlags::SWAP_GREED))
            .ignore_whitespace(self.flags.contains(PatternFlags::IGNORE_WHITESPACE))
            .crlf(self.flags.contains(PatternFlags::CRLF))
            .unicode(!self.flags.contains(PatternFlags::ASCII_ONLY));
        if let Some(bytes) = self.size_limit {
            builder.size_limit(bytes);
        }
        let pattern = Pattern::from_engine(builder.build()?);
        debug!(
            "compiled pattern {:?} with {} group(s), flags {:?}",
            self.expr,
            pattern.group_len(),
            self.flags
        );
        Ok(pattern)
    }
}

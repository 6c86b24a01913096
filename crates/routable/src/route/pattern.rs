/// Pattern compilation for route format strings
///
/// Pure functional parsing of formats like `users/:id` into typed segments.
/// All functions are **pure**: same input → same output, no side effects.

use crate::path::split_segments;

/// Sigil that marks a named parameter segment
pub const PARAM_SIGIL: char = ':';

/// A single compiled component of a route format
///
/// # Examples
///
/// ```
/// use routable::route::pattern::{classify_segment, Segment};
///
/// let seg = classify_segment("users");
/// assert!(matches!(seg, Segment::Literal(_)));
///
/// let seg = classify_segment(":id");
/// assert_eq!(seg, Segment::Param("id".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Must equal the request segment byte-for-byte
    Literal(String),
    /// Binds any non-empty request segment to the given name
    Param(String),
}

impl Segment {
    /// Tests this segment against one request segment
    ///
    /// Returns `Some(binding)` on success, where `binding` is the parameter
    /// name for `Param` segments and `None` for literals.
    pub fn accepts<'s>(&'s self, request: &str) -> Option<Option<&'s str>> {
        match self {
            Segment::Literal(text) => (text == request).then_some(None),
            // An empty name can never bind, so it never matches either.
            Segment::Param(name) if name.is_empty() || request.is_empty() => None,
            Segment::Param(name) => Some(Some(name.as_str())),
        }
    }
}

/// Classifies a format component into a segment (pure function)
///
/// A component starting with `:` is a parameter named by the remainder;
/// anything else is a literal. A lone `:` yields a parameter with an empty
/// name, accepted permissively.
pub fn classify_segment(component: &str) -> Segment {
    match component.strip_prefix(PARAM_SIGIL) {
        Some(name) => Segment::Param(name.to_string()),
        None => Segment::Literal(component.to_string()),
    }
}

/// An ordered sequence of segments compiled from a route format
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePattern {
    format: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Compiles a route format string; never fails
    ///
    /// Leading and trailing `/` are stripped before splitting on `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use routable::route::pattern::{RoutePattern, Segment};
    ///
    /// let pattern = RoutePattern::compile("/users/:id/");
    /// assert_eq!(pattern.len(), 2);
    /// assert_eq!(pattern.segments()[1], Segment::Param("id".to_string()));
    /// ```
    pub fn compile(format: &str) -> Self {
        let segments = split_segments(format).map(classify_segment).collect();

        Self {
            format: format.to_string(),
            segments,
        }
    }

    /// The format string this pattern was compiled from
    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Names of all parameter segments, in order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|seg| match seg {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Whether every segment is a literal
    pub fn is_static(&self) -> bool {
        self.param_names().next().is_none()
    }

    /// Pairwise test of `self` against the leading `self.len()` request segments
    ///
    /// Callers decide whether the request may be longer (prefix) or must be
    /// exactly as long (full match).
    pub(crate) fn accepts_prefix(&self, request: &[&str]) -> bool {
        request.len() >= self.len()
            && self
                .segments
                .iter()
                .zip(request)
                .all(|(seg, req)| seg.accepts(req).is_some())
    }

    /// Full-length match: same segment count and every pair accepted
    pub fn matches(&self, request: &[&str]) -> bool {
        request.len() == self.len() && self.accepts_prefix(request)
    }
}

/// Shorthand for [`RoutePattern::compile`]
pub fn compile(format: &str) -> RoutePattern {
    RoutePattern::compile(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_classify_literal() {
        assert_eq!(classify_segment("about"), Segment::Literal("about".to_string()));
    }

    #[test]
    fn test_classify_param() {
        assert_eq!(classify_segment(":id"), Segment::Param("id".to_string()));
    }

    #[test]
    fn test_classify_lone_sigil() {
        assert_eq!(classify_segment(":"), Segment::Param(String::new()));
    }

    #[test]
    fn test_sigil_only_counts_at_start() {
        assert_eq!(
            classify_segment("a:b"),
            Segment::Literal("a:b".to_string())
        );
    }

    #[rstest]
    #[case("users/:id", 2)]
    #[case("/users/:id/", 2)]
    #[case("logout", 1)]
    #[case("a/b/c/d", 4)]
    #[case("a//b", 3)]
    #[case("/", 1)]
    fn test_segment_count(#[case] format: &str, #[case] expected: usize) {
        let pattern = compile(format);
        let trimmed = format.trim_matches('/');
        assert_eq!(pattern.len(), expected);
        assert_eq!(pattern.len(), trimmed.split('/').count());
    }

    #[test]
    fn test_param_names() {
        let pattern = compile("orgs/:org/repos/:repo");
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["org", "repo"]);
        assert!(!pattern.is_static());
        assert!(compile("users/new").is_static());
    }

    #[test]
    fn test_param_rejects_empty_request_segment() {
        assert!(Segment::Param("id".to_string()).accepts("").is_none());
    }

    #[test]
    fn test_empty_named_param_never_matches() {
        let pattern = compile("users/:");
        assert!(!pattern.matches(&["users", "42"]));
    }

    #[test]
    fn test_matches_requires_equal_length() {
        let pattern = compile("users/:id");
        assert!(pattern.matches(&["users", "1"]));
        assert!(!pattern.matches(&["users"]));
        assert!(!pattern.matches(&["users", "1", "edit"]));
        assert!(pattern.accepts_prefix(&["users", "1", "edit"]));
    }

    #[test]
    fn test_literal_is_case_sensitive() {
        let pattern = compile("users/new");
        assert!(!pattern.matches(&["users", "NEW"]));
    }
}

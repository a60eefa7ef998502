#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
    pub literal: String,
}

impl TextSpan {
    pub fn new(start: usize, end: usize, literal: String) -> Self {
        Self { start, end, literal }
    }

    pub fn length(&self) -> usize {
        self.end - self.start
    }

    /// Combines spans into one covering span, ordered by start position
    pub fn combine_refs(spans: &[&TextSpan]) -> TextSpan {
        let start = spans.iter().map(|span| span.start).min().unwrap_or(0);
        let end = spans.iter().map(|span| span.end).max().unwrap_or(0);
        let literal = spans.iter().map(|span| span.literal.as_str()).collect::<Vec<_>>().join(" ");

        TextSpan::new(start, end, literal)
    }
}

//! Positional template parsing and substitution.
//!
//! A [`Template`] is an ordered sequence of segments: literal text spans and
//! positional placeholder markers. The source syntax mirrors Rust's `format!`
//! strings: `{}` marks a placeholder, `{{` and `}}` escape literal braces.
//! The escape forms matter here because the generated Gradle Kotlin DSL is
//! full of literal braces.
//!
//! Placeholder markers are strictly positional. The marker count defines the
//! template's arity, and [`Template::render`] consumes caller-supplied values
//! in order, one per marker.

use crate::error::{ParseError, RenderError};

/// One piece of a parsed template body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A literal text span, emitted verbatim (escape sequences already
    /// decoded).
    Literal(String),
    /// A positional substitution slot.
    Placeholder,
}

/// A parsed template body: ordered literals and placeholder slots.
///
/// Templates are immutable once parsed. [`bind`](Self::bind) produces a new
/// template rather than mutating in place, which is how the built-in catalog
/// layers version-specific values over a shared skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template source text into segments.
    ///
    /// `{}` becomes a [`Segment::Placeholder`]; `{{` and `}}` decode to
    /// literal braces. Any other lone brace is rejected so that a typo in a
    /// template body cannot silently shift placeholder positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use gradlegen::template::Template;
    ///
    /// let template = Template::parse("implementation(\"{}\")")?;
    /// assert_eq!(template.placeholder_count(), 1);
    /// # Ok::<(), gradlegen::error::ParseError>(())
    /// ```
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match c {
                '{' => match chars.peek() {
                    Some(&(_, '{')) => {
                        chars.next();
                        literal.push('{');
                    }
                    Some(&(_, '}')) => {
                        chars.next();
                        if !literal.is_empty() {
                            segments.push(Segment::Literal(std::mem::take(&mut literal)));
                        }
                        segments.push(Segment::Placeholder);
                    }
                    _ => return Err(ParseError::UnclosedBrace { offset }),
                },
                '}' => match chars.peek() {
                    Some(&(_, '}')) => {
                        chars.next();
                        literal.push('}');
                    }
                    _ => return Err(ParseError::UnmatchedBrace { offset }),
                },
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Number of placeholder slots, i.e. the arity [`render`](Self::render)
    /// requires.
    pub fn placeholder_count(&self) -> usize {
        self.segments.iter().filter(|s| matches!(s, Segment::Placeholder)).count()
    }

    /// The parsed segment sequence, in source order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Substitute the placeholder at position `slot` (zero-based, counting
    /// placeholders only) with a literal value, returning the reduced
    /// template.
    ///
    /// The result has one placeholder fewer; adjacent literals are merged so
    /// the segment sequence stays normalized. Returns `None` when `slot` is
    /// out of range.
    pub fn bind(&self, slot: usize, value: &str) -> Option<Self> {
        if slot >= self.placeholder_count() {
            return None;
        }

        fn append_literal(segments: &mut Vec<Segment>, text: &str) {
            if let Some(Segment::Literal(prev)) = segments.last_mut() {
                prev.push_str(text);
            } else {
                segments.push(Segment::Literal(text.to_string()));
            }
        }

        let mut segments: Vec<Segment> = Vec::with_capacity(self.segments.len());
        let mut seen = 0;
        for segment in &self.segments {
            match segment {
                Segment::Placeholder => {
                    if seen == slot {
                        append_literal(&mut segments, value);
                    } else {
                        segments.push(Segment::Placeholder);
                    }
                    seen += 1;
                }
                Segment::Literal(text) => append_literal(&mut segments, text),
            }
        }

        Some(Self { segments })
    }

    /// Render the template with positional substitution values.
    ///
    /// Walks the segment sequence in order, emitting literals verbatim and
    /// consuming the next unused value at each placeholder. Fails with
    /// [`RenderError::ArityMismatch`] before emitting anything when the value
    /// count is wrong; there is never partial output.
    pub fn render<S: AsRef<str>>(&self, values: &[S]) -> Result<String, RenderError> {
        let expected = self.placeholder_count();
        if values.len() != expected {
            return Err(RenderError::ArityMismatch {
                expected,
                got: values.len(),
            });
        }

        let capacity = self
            .segments
            .iter()
            .map(|s| match s {
                Segment::Literal(text) => text.len(),
                Segment::Placeholder => 0,
            })
            .sum::<usize>()
            + values.iter().map(|v| v.as_ref().len()).sum::<usize>();

        let mut output = String::with_capacity(capacity);
        let mut next = 0;
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder => {
                    output.push_str(values[next].as_ref());
                    next += 1;
                }
            }
        }

        Ok(output)
    }
}


use crate::core::OrderError;

use super::syntax::SyntaxConfig;

/// One abstract segment: a tag and its ordered element strings.
///
/// Elements may already contain component separators (composite data
/// elements); only the element separator, segment terminator and release
/// character are escaped on output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub tag: String,
    pub elements: Vec<String>,
}

impl Segment {
    pub fn new<S: Into<String>>(tag: impl Into<String>, elements: impl IntoIterator<Item = S>) -> Self {
        Self {
            tag: tag.into(),
            elements: elements.into_iter().map(Into::into).collect(),
        }
    }

    /// Render the segment to wire text, terminator included.
    ///
    /// Fails with [`OrderError::SegmentTooLong`] when the result exceeds
    /// the configured maximum length.
    pub fn render(&self, syntax: &SyntaxConfig) -> Result<String, OrderError> {
        let mut out = String::with_capacity(self.tag.len() + self.elements.len() * 8);
        out.push_str(&self.tag);
        for element in &self.elements {
            out.push(syntax.element_separator());
            escape_into(&mut out, element, syntax);
        }
        out.push(syntax.segment_terminator());

        let length = out.chars().count();
        if length > syntax.max_segment_length() {
            return Err(OrderError::SegmentTooLong {
                tag: self.tag.clone(),
                length,
                limit: syntax.max_segment_length(),
            });
        }
        Ok(out)
    }
}

/// Prefix every separator, terminator and release character with the release character.
///
/// Single pass: release characters inserted here are never escaped again.
fn escape_into(out: &mut String, element: &str, syntax: &SyntaxConfig) {
    let release = syntax.release_character();
    for ch in element.chars() {
        if ch == syntax.element_separator() || ch == syntax.segment_terminator() || ch == release {
            out.push(release);
        }
        out.push(ch);
    }
}

/// Split one rendered segment back into its tag and unescaped elements.
///
/// This is the inverse of [`Segment::render`] for a single segment and exists
/// to check escaping; it does not parse interchanges. A trailing terminator
/// (and newline) is accepted and stripped. Returns `None` when the text ends
/// in a dangling release character.
pub fn tokenize_segment(text: &str, syntax: &SyntaxConfig) -> Option<Segment> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let release = syntax.release_character();

    let mut fields: Vec<String> = vec![String::new()];
    let mut chars = text.chars();
    let mut terminated = false;

    while let Some(ch) = chars.next() {
        if terminated {
            // Content after an unescaped terminator belongs to another segment.
            return None;
        }
        if ch == release {
            let escaped = chars.next()?;
            fields.last_mut()?.push(escaped);
        } else if ch == syntax.element_separator() {
            fields.push(String::new());
        } else if ch == syntax.segment_terminator() {
            terminated = true;
        } else {
            fields.last_mut()?.push(ch);
        }
    }

    let mut fields = fields.into_iter();
    let tag = fields.next()?;
    Some(Segment {
        tag,
        elements: fields.collect(),
    })
}

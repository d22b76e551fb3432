//! Attributed text and the emphasis restyling pass.
//!
//! The formatter produces [`AttributedText`]: a string with semantic
//! spans marking which bytes are integer digits, percent symbols,
//! measurement values, units and so on. Spans may overlap, e.g. a
//! temperature's value span contains its integer and fraction spans.
//!
//! [`restyle`] turns those semantic spans into presentation by walking an
//! ordered rule table. Every rule paints its emphasis over all spans it
//! matches, so a later rule overrides an earlier one wherever they
//! overlap.

use std::ops::Range;

use serde::Serialize;

/// Part of a formatted number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberPart {
    Integer,
    Fraction,
    DecimalSeparator,
    GroupingSeparator,
}

/// A symbol that belongs to a formatted number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberSymbol {
    Percent,
}

/// Part of a formatted measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementPart {
    Value,
    Unit,
}

/// Semantic role of a span of formatted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    NumberPart(NumberPart),
    NumberSymbol(NumberSymbol),
    Measurement(MeasurementPart),
}

/// An attribute applied to a byte range of an [`AttributedText`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSpan {
    pub range: Range<usize>,
    pub attribute: Attribute,
}

/// Formatted text annotated with semantic spans.
///
/// Span ranges are byte offsets into [`AttributedText::as_str`] and always
/// fall on `char` boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributedText {
    text: String,
    spans: Vec<AttributeSpan>,
}

impl AttributedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text with no attributes at all.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[AttributeSpan] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append untagged text.
    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Append text tagged with a single attribute.
    pub fn push_tagged(&mut self, s: &str, attribute: Attribute) {
        let start = self.text.len();
        self.text.push_str(s);
        if !s.is_empty() {
            self.spans.push(AttributeSpan {
                range: start..self.text.len(),
                attribute,
            });
        }
    }

    /// Append another attributed text, keeping its spans.
    pub fn append(&mut self, other: AttributedText) {
        let offset = self.text.len();
        self.text.push_str(&other.text);
        self.spans.extend(other.spans.into_iter().map(|span| AttributeSpan {
            range: span.range.start + offset..span.range.end + offset,
            attribute: span.attribute,
        }));
    }

    /// Append another attributed text and tag the whole of it with
    /// `attribute`, on top of the spans it already carries.
    pub fn append_tagged(&mut self, other: AttributedText, attribute: Attribute) {
        let start = self.text.len();
        self.append(other);
        if self.text.len() > start {
            self.spans.push(AttributeSpan {
                range: start..self.text.len(),
                attribute,
            });
        }
    }

    /// Substrings covered by spans carrying `attribute`, in span order.
    pub fn substrings(&self, attribute: Attribute) -> Vec<&str> {
        self.spans
            .iter()
            .filter(|span| span.attribute == attribute)
            .map(|span| &self.text[span.range.clone()])
            .collect()
    }
}

/// Presentation tier of a run of styled text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    /// The figure itself: heavy weight, primary color.
    Emphasized,
    /// Units, symbols and labels: regular weight, muted color.
    Secondary,
}

/// A run of text with a single emphasis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledRun {
    pub text: String,
    pub emphasis: Emphasis,
}

/// Text decomposed into runs, each carrying one emphasis.
///
/// Adjacent runs never share the same emphasis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyledText {
    runs: Vec<StyledRun>,
}

impl StyledText {
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// The text without styling.
    pub fn plain(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Concatenated text of every run with the given emphasis.
    pub fn text_with(&self, emphasis: Emphasis) -> String {
        self.runs
            .iter()
            .filter(|run| run.emphasis == emphasis)
            .map(|run| run.text.as_str())
            .collect()
    }

    fn push(&mut self, text: &str, emphasis: Emphasis) {
        match self.runs.last_mut() {
            Some(last) if last.emphasis == emphasis => last.text.push_str(text),
            _ => self.runs.push(StyledRun {
                text: text.to_string(),
                emphasis,
            }),
        }
    }
}

/// One step of the restyling pass.
#[derive(Debug, Clone, Copy)]
pub struct RestyleRule {
    pub matches: fn(&Attribute) -> bool,
    pub emphasis: Emphasis,
}

fn is_percent_symbol(attribute: &Attribute) -> bool {
    matches!(attribute, Attribute::NumberSymbol(NumberSymbol::Percent))
}

fn is_integer_part(attribute: &Attribute) -> bool {
    matches!(attribute, Attribute::NumberPart(NumberPart::Integer))
}

fn is_measurement_value(attribute: &Attribute) -> bool {
    matches!(attribute, Attribute::Measurement(MeasurementPart::Value))
}

fn is_measurement_unit(attribute: &Attribute) -> bool {
    matches!(attribute, Attribute::Measurement(MeasurementPart::Unit))
}

/// Vital value styling, general to specific. Order is significant.
pub const VITAL_RULES: &[RestyleRule] = &[
    RestyleRule {
        matches: is_percent_symbol,
        emphasis: Emphasis::Secondary,
    },
    RestyleRule {
        matches: is_integer_part,
        emphasis: Emphasis::Emphasized,
    },
    RestyleRule {
        matches: is_measurement_value,
        emphasis: Emphasis::Emphasized,
    },
    RestyleRule {
        matches: is_measurement_unit,
        emphasis: Emphasis::Secondary,
    },
];

/// Restyle with [`VITAL_RULES`].
pub fn restyle(text: &AttributedText) -> StyledText {
    restyle_with(text, VITAL_RULES)
}

/// Apply `rules` in order over an unstyled copy of `text`.
///
/// Text that no rule touches inherits the surrounding style, which for a
/// vital value is [`Emphasis::Secondary`].
pub fn restyle_with(text: &AttributedText, rules: &[RestyleRule]) -> StyledText {
    let mut painted: Vec<Option<Emphasis>> = vec![None; text.len()];

    for rule in rules {
        for span in text.spans().iter().filter(|span| (rule.matches)(&span.attribute)) {
            let end = span.range.end.min(painted.len());
            let start = span.range.start.min(end);
            painted[start..end].fill(Some(rule.emphasis));
        }
    }

    let source = text.as_str();
    let mut styled = StyledText::default();
    for (offset, ch) in source.char_indices() {
        let emphasis = painted[offset].unwrap_or(Emphasis::Secondary);
        styled.push(&source[offset..offset + ch.len_utf8()], emphasis);
    }
    styled
}

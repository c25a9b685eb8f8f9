//! Delimiters and header defaults for rendering.

use std::collections::HashSet;

use crate::core::OrderError;

use super::DEFAULT_MAX_SEGMENT_LENGTH;
use super::tags;

/// Immutable rendering configuration.
///
/// Built once through [`SyntaxConfigBuilder`] and shared by reference across
/// any number of generation calls. Changing delimiters means building a new
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxConfig {
    segment_terminator: char,
    element_separator: char,
    component_separator: char,
    decimal_mark: char,
    release_character: char,
    syntax_identifier: String,
    syntax_version: String,
    message_version: String,
    message_release: String,
    responsible_agency: String,
    association_code: String,
    currency_qualifier: String,
    delivery_date_qualifier: String,
    max_segment_length: usize,
    service_string_advice: bool,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            segment_terminator: '\'',
            element_separator: '+',
            component_separator: ':',
            decimal_mark: '.',
            release_character: '?',
            syntax_identifier: "UNOA".into(),
            syntax_version: "2".into(),
            message_version: "D".into(),
            message_release: "96A".into(),
            responsible_agency: "UN".into(),
            association_code: "EAN008".into(),
            currency_qualifier: super::codes::CURRENCY_REFERENCE.into(),
            delivery_date_qualifier: super::codes::DELIVERY_DATE.into(),
            max_segment_length: DEFAULT_MAX_SEGMENT_LENGTH,
            service_string_advice: false,
        }
    }
}

impl SyntaxConfig {
    pub fn builder() -> SyntaxConfigBuilder {
        SyntaxConfigBuilder::new()
    }

    pub fn segment_terminator(&self) -> char {
        self.segment_terminator
    }

    pub fn element_separator(&self) -> char {
        self.element_separator
    }

    pub fn component_separator(&self) -> char {
        self.component_separator
    }

    pub fn decimal_mark(&self) -> char {
        self.decimal_mark
    }

    pub fn release_character(&self) -> char {
        self.release_character
    }

    pub fn syntax_identifier(&self) -> &str {
        &self.syntax_identifier
    }

    pub fn syntax_version(&self) -> &str {
        &self.syntax_version
    }

    pub fn message_version(&self) -> &str {
        &self.message_version
    }

    pub fn message_release(&self) -> &str {
        &self.message_release
    }

    pub fn responsible_agency(&self) -> &str {
        &self.responsible_agency
    }

    pub fn association_code(&self) -> &str {
        &self.association_code
    }

    pub fn currency_qualifier(&self) -> &str {
        &self.currency_qualifier
    }

    pub fn delivery_date_qualifier(&self) -> &str {
        &self.delivery_date_qualifier
    }

    pub fn max_segment_length(&self) -> usize {
        self.max_segment_length
    }

    pub fn service_string_advice(&self) -> bool {
        self.service_string_advice
    }

    /// Join components with the configured component separator.
    pub fn composite<S: AsRef<str>>(&self, components: &[S]) -> String {
        let mut out = String::new();
        for (i, component) in components.iter().enumerate() {
            if i > 0 {
                out.push(self.component_separator);
            }
            out.push_str(component.as_ref());
        }
        out
    }

    /// The UNA service string advice line, without trailing newline.
    pub fn una(&self) -> String {
        let mut out = String::from(tags::UNA);
        out.push(self.component_separator);
        out.push(self.element_separator);
        out.push(self.decimal_mark);
        out.push(self.release_character);
        out.push(' ');
        out.push(self.segment_terminator);
        out
    }

    fn validate(&self) -> Result<(), OrderError> {
        let specials = [
            ("segment terminator", self.segment_terminator),
            ("element separator", self.element_separator),
            ("component separator", self.component_separator),
            ("release character", self.release_character),
        ];

        let distinct: HashSet<char> = specials.iter().map(|(_, c)| *c).collect();
        if distinct.len() != specials.len() {
            return Err(OrderError::InvalidSeparator(format!(
                "terminator, element separator, component separator and release character must be distinct (got {:?})",
                specials.iter().map(|(_, c)| *c).collect::<String>()
            )));
        }

        for (name, c) in specials {
            if c.is_alphanumeric() || c.is_whitespace() {
                return Err(OrderError::InvalidSeparator(format!(
                    "{name} {c:?} must not be alphanumeric or whitespace"
                )));
            }
        }

        if !matches!(self.decimal_mark, '.' | ',') {
            return Err(OrderError::InvalidSeparator(format!(
                "decimal mark {:?} must be '.' or ','",
                self.decimal_mark
            )));
        }

        if self.max_segment_length == 0 {
            return Err(OrderError::InvalidSeparator(
                "maximum segment length must be positive".into(),
            ));
        }

        Ok(())
    }
}

/// Builder for [`SyntaxConfig`].
///
/// # Example
///
/// ```
/// use edifact_orders::edifact::SyntaxConfigBuilder;
///
/// let config = SyntaxConfigBuilder::new()
///     .segment_terminator('~')
///     .element_separator('*')
///     .build()
///     .unwrap();
/// assert_eq!(config.element_separator(), '*');
///
/// // Release character collides with the element separator.
/// assert!(SyntaxConfigBuilder::new().release_character('+').build().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SyntaxConfigBuilder {
    config: SyntaxConfig,
}

impl SyntaxConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segment_terminator(mut self, c: char) -> Self {
        self.config.segment_terminator = c;
        self
    }

    pub fn element_separator(mut self, c: char) -> Self {
        self.config.element_separator = c;
        self
    }

    pub fn component_separator(mut self, c: char) -> Self {
        self.config.component_separator = c;
        self
    }

    pub fn decimal_mark(mut self, c: char) -> Self {
        self.config.decimal_mark = c;
        self
    }

    pub fn release_character(mut self, c: char) -> Self {
        self.config.release_character = c;
        self
    }

    /// Set all five delimiters at once.
    pub fn delimiters(
        self,
        terminator: char,
        element: char,
        component: char,
        decimal: char,
        release: char,
    ) -> Self {
        self.segment_terminator(terminator)
            .element_separator(element)
            .component_separator(component)
            .decimal_mark(decimal)
            .release_character(release)
    }

    pub fn syntax(mut self, identifier: impl Into<String>, version: impl Into<String>) -> Self {
        self.config.syntax_identifier = identifier.into();
        self.config.syntax_version = version.into();
        self
    }

    /// Message version, release, controlling agency and association code for UNH.
    pub fn message_identifier(
        mut self,
        version: impl Into<String>,
        release: impl Into<String>,
        agency: impl Into<String>,
        association_code: impl Into<String>,
    ) -> Self {
        self.config.message_version = version.into();
        self.config.message_release = release.into();
        self.config.responsible_agency = agency.into();
        self.config.association_code = association_code.into();
        self
    }

    pub fn currency_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.config.currency_qualifier = qualifier.into();
        self
    }

    pub fn delivery_date_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.config.delivery_date_qualifier = qualifier.into();
        self
    }

    pub fn max_segment_length(mut self, length: usize) -> Self {
        self.config.max_segment_length = length;
        self
    }

    /// Prefix the interchange with a UNA line announcing the delimiters.
    pub fn service_string_advice(mut self, enabled: bool) -> Self {
        self.config.service_string_advice = enabled;
        self
    }

    /// Validate the delimiters and build the configuration.
    pub fn build(self) -> Result<SyntaxConfig, OrderError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

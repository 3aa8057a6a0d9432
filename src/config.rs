//! Syntax configuration shared by the parser and the encoder

use crate::error::{ConfigError, ConfigRole};

/// Escape character; fixed, not configurable
pub const ESCAPE_CHAR: char = '\\';

const DEFAULT_SEPARATOR: char = ',';
const DEFAULT_QUOTE_CHAR: char = '"';

/// Immutable set of syntax parameters
///
/// Instances are either one of the presets or the output of
/// [`CsvConfigBuilder::build`], which rejects degenerate combinations.
///
/// # Examples
///
/// ```
/// use csvforge::CsvConfig;
///
/// let config = CsvConfig::builder()
///     .field_separator('|')
///     .use_crlf(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.field_separator(), '|');
/// assert_eq!(config.line_terminator(), "\r\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CsvConfigBuilder", into = "CsvConfigBuilder")
)]
pub struct CsvConfig {
    field_separator: char,
    quote_char: char,
    use_crlf: bool,
    quote_all_fields: bool,
}

impl CsvConfig {
    /// Comma separated, double quotes, LF line endings
    pub const DEFAULT: CsvConfig = CsvConfig::preset(DEFAULT_SEPARATOR, false);
    /// Comma separated with CRLF line endings
    pub const WINDOWS: CsvConfig = CsvConfig::preset(DEFAULT_SEPARATOR, true);
    /// Semicolon separated, LF line endings
    pub const SEMICOLON: CsvConfig = CsvConfig::preset(';', false);
    /// Tab separated, LF line endings
    pub const TAB: CsvConfig = CsvConfig::preset('\t', false);

    const fn preset(field_separator: char, use_crlf: bool) -> Self {
        CsvConfig {
            field_separator,
            quote_char: DEFAULT_QUOTE_CHAR,
            use_crlf,
            quote_all_fields: false,
        }
    }

    /// Start building a configuration from the defaults
    pub fn builder() -> CsvConfigBuilder {
        CsvConfigBuilder::default()
    }

    /// Start building a configuration from this one
    pub fn to_builder(&self) -> CsvConfigBuilder {
        CsvConfigBuilder::from(*self)
    }

    pub fn field_separator(&self) -> char {
        self.field_separator
    }

    pub fn quote_char(&self) -> char {
        self.quote_char
    }

    pub fn uses_crlf(&self) -> bool {
        self.use_crlf
    }

    /// Whether the encoder quotes every field
    pub fn quote_all_fields(&self) -> bool {
        self.quote_all_fields
    }

    /// `"\r\n"` with CRLF enabled, `"\n"` otherwise
    pub fn line_terminator(&self) -> &'static str {
        if self.use_crlf {
            "\r\n"
        } else {
            "\n"
        }
    }

    /// First character of the line terminator; ends an unquoted field
    pub(crate) fn terminator_start(&self) -> char {
        if self.use_crlf {
            '\r'
        } else {
            '\n'
        }
    }
}

impl Default for CsvConfig {
    fn default() -> Self {
        CsvConfig::DEFAULT
    }
}

/// Builder for [`CsvConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CsvConfigBuilder {
    field_separator: char,
    quote_char: char,
    use_crlf: bool,
    quote_all_fields: bool,
}

impl Default for CsvConfigBuilder {
    fn default() -> Self {
        CsvConfigBuilder::from(CsvConfig::DEFAULT)
    }
}

impl From<CsvConfig> for CsvConfigBuilder {
    fn from(config: CsvConfig) -> Self {
        CsvConfigBuilder {
            field_separator: config.field_separator,
            quote_char: config.quote_char,
            use_crlf: config.use_crlf,
            quote_all_fields: config.quote_all_fields,
        }
    }
}

impl CsvConfigBuilder {
    /// Set field separator (builder pattern)
    pub fn field_separator(mut self, separator: char) -> Self {
        self.field_separator = separator;
        self
    }

    /// Set quote character (builder pattern)
    pub fn quote_char(mut self, quote: char) -> Self {
        self.quote_char = quote;
        self
    }

    /// Use `\r\n` instead of `\n` as line terminator (builder pattern)
    pub fn use_crlf(mut self, crlf: bool) -> Self {
        self.use_crlf = crlf;
        self
    }

    /// Quote every field on write (builder pattern)
    pub fn quote_all_fields(mut self, quote_all: bool) -> Self {
        self.quote_all_fields = quote_all;
        self
    }

    /// Validate and produce the configuration
    ///
    /// Fails when separator and quote coincide, when either is part of the
    /// line terminator, or when either is the escape character.
    pub fn build(self) -> Result<CsvConfig, ConfigError> {
        if self.field_separator == self.quote_char {
            return Err(ConfigError::SeparatorIsQuote(self.field_separator));
        }

        let config = CsvConfig {
            field_separator: self.field_separator,
            quote_char: self.quote_char,
            use_crlf: self.use_crlf,
            quote_all_fields: self.quote_all_fields,
        };

        for (role, ch) in [
            (ConfigRole::FieldSeparator, self.field_separator),
            (ConfigRole::QuoteCharacter, self.quote_char),
        ] {
            if ch == ESCAPE_CHAR {
                return Err(ConfigError::ConflictsWithEscape { role });
            }
            if config.line_terminator().contains(ch) {
                return Err(ConfigError::ConflictsWithLineTerminator { role, ch });
            }
        }

        Ok(config)
    }
}

impl TryFrom<CsvConfigBuilder> for CsvConfig {
    type Error = ConfigError;

    fn try_from(builder: CsvConfigBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

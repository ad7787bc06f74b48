//! Layout engine for SQL token streams
//!
//! The engine walks the token sequence once and decides, per token, whether
//! it starts a new line, at which indentation level, and how it is cased.
//! Source whitespace is discarded; every space and newline in the output is
//! chosen here. Since those choices depend only on the non-whitespace tokens,
//! formatting already formatted text is a no-op.

use std::mem;

use crate::config::{CommaStyle, FormatConfig, KeywordCase};
use crate::token::{KeywordClass, Token, TokenKind};

/// Separator owed before the next emitted token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
enum Separator {
    #[default]
    None,
    Space,
    Newline,
}

/// What was last written, as far as spacing cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    Nothing,
    Keyword,
    Identifier,
    /// `(` or `[`
    Opener,
    Dot,
    Comma,
    Number,
    Other,
}

/// Formatter for SQL token streams
pub struct Formatter {
    config: FormatConfig,
    output: String,
    indent_level: usize,
    at_line_start: bool,
    pending: Separator,
    last: Last,
}

impl Formatter {
    /// Create a new formatter with the given configuration
    pub fn new(config: FormatConfig) -> Self {
        Self {
            config,
            output: String::new(),
            indent_level: 0,
            at_line_start: true,
            pending: Separator::None,
            last: Last::Nothing,
        }
    }

    /// Lay out a token sequence
    pub fn format(&mut self, tokens: &[Token]) -> String {
        self.output.clear();
        self.indent_level = 0;
        self.at_line_start = true;
        self.pending = Separator::None;
        self.last = Last::Nothing;

        for token in tokens {
            match token.kind {
                TokenKind::Whitespace => {}
                TokenKind::Comment => self.format_comment(token),
                TokenKind::Keyword(KeywordClass::ClauseStart | KeywordClass::JoinStart) => {
                    self.format_header(token)
                }
                TokenKind::Keyword(KeywordClass::Connector) => self.format_connector(token),
                _ if token.is_punct(",") => self.format_comma(),
                _ => self.format_inline(token),
            }
        }

        log::debug!(
            "laid out {} tokens into {} lines",
            tokens.len(),
            self.output.lines().count()
        );

        mem::take(&mut self.output)
    }

    /// Clause and join keywords sit alone on a line at level 0; what follows
    /// them is indented one level
    fn format_header(&mut self, token: &Token) {
        self.indent_level = 0;
        let keyword = self.keyword_text(token);
        self.emit(&keyword, Separator::Newline);
        self.indent_level = 1;
        self.pending = Separator::Newline;
        self.last = Last::Keyword;
    }

    /// `AND`, `OR`, `ON` start an indented line and keep their operand on it
    fn format_connector(&mut self, token: &Token) {
        self.indent_level = 1;
        let keyword = self.keyword_text(token);
        self.emit(&keyword, Separator::Newline);
        self.pending = Separator::Space;
        self.last = Last::Keyword;
    }

    fn format_comma(&mut self) {
        match self.config.comma_style {
            CommaStyle::TrailingOnSameLine => self.emit(",", Separator::None),
            CommaStyle::LeadingOnNewLine => self.emit(",", Separator::Newline),
        }
        self.last = Last::Comma;
    }

    fn format_comment(&mut self, token: &Token) {
        self.emit(&token.text, Separator::Space);
        if token.is_line_comment() {
            // anything after `--` on the same line would become comment text
            self.pending = Separator::Newline;
        }
        self.last = Last::Other;
    }

    fn format_inline(&mut self, token: &Token) {
        let separator = self.separator_before(token);
        if token.kind.is_keyword() {
            let keyword = self.keyword_text(token);
            self.emit(&keyword, separator);
            self.last = Last::Keyword;
            return;
        }

        self.emit(&token.text, separator);
        self.last = match token.kind {
            TokenKind::Identifier => Last::Identifier,
            TokenKind::Number => Last::Number,
            _ if token.is_punct("(") || token.is_punct("[") => Last::Opener,
            _ if token.is_punct(".") => Last::Dot,
            _ => Last::Other,
        };
    }

    /// Spacing between the previous token and an inline token
    fn separator_before(&self, token: &Token) -> Separator {
        if token.kind == TokenKind::Punctuation {
            match token.text.as_str() {
                ")" | "]" | ";" => return Separator::None,
                // `1 .5` must not turn into the number `1.5`
                "." if self.last == Last::Number => return Separator::Space,
                "." => return Separator::None,
                // the comma already owes its own space: `(1, 'a'), (2, 'b')`
                "(" | "[" if self.last == Last::Comma => return Separator::Space,
                "(" | "[" => return Separator::None,
                _ => {}
            }
        }
        match self.last {
            Last::Nothing | Last::Opener | Last::Dot => Separator::None,
            _ => Separator::Space,
        }
    }

    fn keyword_text(&self, token: &Token) -> String {
        let words = token.text.split_whitespace();
        match self.config.keyword_case {
            KeywordCase::Uppercase => words
                .map(str::to_uppercase)
                .collect::<Vec<_>>()
                .join(" "),
            KeywordCase::PreserveOriginal => words.collect::<Vec<_>>().join(" "),
        }
    }

    // Helper methods

    /// Write `text`, preceded by the stronger of `separator` and any pending
    /// separator
    fn emit(&mut self, text: &str, separator: Separator) {
        let separator = separator.max(mem::take(&mut self.pending));
        if separator == Separator::Newline && !self.output.is_empty() {
            self.newline();
        }
        if self.at_line_start {
            self.write_indent();
        } else if separator == Separator::Space {
            self.output.push(' ');
        }
        self.output.push_str(text);
        self.at_line_start = false;
    }

    fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    fn write_indent(&mut self) {
        let indent = self.config.indent_at(self.indent_level);
        self.output.push_str(&indent);
    }
}

/// Lay out `tokens` according to `config`.
pub fn layout(tokens: &[Token], config: &FormatConfig) -> String {
    Formatter::new(config.clone()).format(tokens)
}

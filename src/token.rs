//! Token definitions for SQL source text

/// Source location information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self { start, end, line, column }
    }
}

/// Layout rule attached to a recognized keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordClass {
    /// Begins a top-level clause: `SELECT`, `FROM`, `WHERE`, `GROUP BY`, ...
    ClauseStart,
    /// Begins a join: `JOIN`, `LEFT JOIN`, `INNER JOIN`, ...
    JoinStart,
    /// Continues a clause on a new line: `AND`, `OR`, `ON`
    Connector,
    /// Recognized keyword with no layout effect: `AS`, `DISTINCT`, `NULL`, ...
    Other,
}

/// Token kinds for SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword(KeywordClass),
    /// Bare, quoted (`"x"`, `` `x` ``) or sigil-prefixed (`@x`, `$1`) names
    Identifier,
    StringLiteral,
    Number,
    /// `,` `(` `)` `;` `.` and operators
    Punctuation,
    /// `-- line` or `/* block */`
    Comment,
    Whitespace,
}

impl TokenKind {
    /// Check if this token is a keyword
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::Keyword(_))
    }

    /// Check if this token is trivia (whitespace or comment)
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

/// Token with its exact source text and span information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self { kind, text: text.into(), span }
    }

    /// True for a punctuation token with exactly this text
    pub fn is_punct(&self, punct: &str) -> bool {
        self.kind == TokenKind::Punctuation && self.text == punct
    }

    /// True for a `--` comment, which runs to the end of its line
    pub fn is_line_comment(&self) -> bool {
        self.kind == TokenKind::Comment && self.text.starts_with("--")
    }
}

//! Lossless lexer for SQL
//!
//! The lexer never fails and never drops input: concatenating the text of
//! every token it produces gives back the original source byte-for-byte.
//! Unterminated strings, quoted identifiers and block comments run to the end
//! of the input and come out as a single token of their kind.

use crate::keywords::{self, MAX_PHRASE_WORDS};
use crate::token::{Span, Token, TokenKind};

/// Operators lexed as a single punctuation token, longest first
const OPERATORS: &[&str] = &[
    "<=>", "->>", "<>", "<=", ">=", "!=", "==", "||", "::", "->", "=>",
];

/// Lexer for tokenizing SQL source code
pub struct Lexer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    position: usize,
    line: usize,
    column: usize,
    /// Last non-trivia token was a `.`
    after_dot: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            position: 0,
            line: 1,
            column: 1,
            after_dot: false,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        log::trace!("lexed {} tokens from {} bytes", tokens.len(), self.input.len());
        tokens
    }

    /// Get the next token (including trivia)
    pub fn next_token(&mut self) -> Option<Token> {
        let start_pos = self.position;
        let start_line = self.line;
        let start_col = self.column;

        let kind = match self.peek_char()? {
            // Comments
            '-' if self.peek_next_char() == Some('-') => self.lex_line_comment(),
            '/' if self.peek_next_char() == Some('*') => self.lex_block_comment(),

            // Quoted regions
            '\'' => self.lex_quoted('\'', TokenKind::StringLiteral),
            '"' => self.lex_quoted('"', TokenKind::Identifier),
            '`' => self.lex_quoted('`', TokenKind::Identifier),

            c if c.is_whitespace() => self.lex_whitespace(),

            // N'...', E'...', X'...', B'...'
            c if is_string_prefix(c) && self.peek_next_char() == Some('\'') => {
                self.advance();
                self.lex_quoted('\'', TokenKind::StringLiteral)
            }

            c if is_identifier_start(c) => self.lex_word(),
            c if c.is_ascii_digit() => self.lex_number(),

            // Parameters and variables: @id, $1, :name, ?1
            '@' | '$' | ':' | '?'
                if self.peek_next_char().is_some_and(is_identifier_continue) =>
            {
                self.lex_sigil()
            }

            _ => self.lex_punctuation(),
        };

        if !kind.is_trivia() {
            self.after_dot = kind == TokenKind::Punctuation
                && &self.input[start_pos..self.position] == ".";
        }

        Some(Token::new(
            kind,
            &self.input[start_pos..self.position],
            Span::new(start_pos, self.position, start_line, start_col),
        ))
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn peek_next_char(&self) -> Option<char> {
        let mut iter = self.input[self.position..].chars();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.position = pos + c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(c)
        } else {
            None
        }
    }

    fn advance_while<F>(&mut self, predicate: F)
    where
        F: Fn(char) -> bool,
    {
        while let Some(c) = self.peek_char() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Advance up to the byte offset `end`, keeping line/column in step
    fn advance_to(&mut self, end: usize) {
        while self.position < end {
            if self.advance().is_none() {
                break;
            }
        }
    }

    fn lex_whitespace(&mut self) -> TokenKind {
        self.advance_while(char::is_whitespace);
        TokenKind::Whitespace
    }

    fn lex_line_comment(&mut self) -> TokenKind {
        self.advance_while(|c| c != '\n' && c != '\r');
        TokenKind::Comment
    }

    fn lex_block_comment(&mut self) -> TokenKind {
        self.advance(); // consume /
        self.advance(); // consume *

        // The first `*/` closes the comment; `/*` inside it has no meaning
        while let Some(c) = self.advance() {
            if c == '*' && self.peek_char() == Some('/') {
                self.advance();
                break;
            }
        }

        TokenKind::Comment
    }

    /// Consume a region delimited by `quote`, where a doubled quote is an
    /// escaped quote character
    fn lex_quoted(&mut self, quote: char, kind: TokenKind) -> TokenKind {
        self.advance(); // consume opening quote

        while let Some(c) = self.advance() {
            if c == quote {
                if self.peek_char() == Some(quote) {
                    self.advance();
                } else {
                    break;
                }
            }
        }

        kind
    }

    /// Lex a word, folding up to `MAX_PHRASE_WORDS` whitespace-separated
    /// words into a single keyword token when they form a known phrase
    fn lex_word(&mut self) -> TokenKind {
        let input = self.input;
        let first_end = self.position + word_len(&input[self.position..]);

        // `t.from` is a column, not a clause
        if self.after_dot {
            self.advance_to(first_end);
            return TokenKind::Identifier;
        }

        let mut words = vec![(&input[self.position..first_end], first_end)];
        let mut cursor = first_end;
        while words.len() < MAX_PHRASE_WORDS {
            let rest = &input[cursor..];
            let gap = rest.len() - rest.trim_start().len();
            if gap == 0 {
                break;
            }
            let word_start = cursor + gap;
            if !input[word_start..].starts_with(is_identifier_start) {
                break;
            }
            let word_end = word_start + word_len(&input[word_start..]);
            words.push((&input[word_start..word_end], word_end));
            cursor = word_end;
        }

        for count in (1..=words.len()).rev() {
            let phrase: Vec<&str> = words[..count].iter().map(|&(word, _)| word).collect();
            if let Some(class) = keywords::lookup_phrase(&phrase) {
                self.advance_to(words[count - 1].1);
                return TokenKind::Keyword(class);
            }
        }

        self.advance_to(first_end);
        TokenKind::Identifier
    }

    fn lex_number(&mut self) -> TokenKind {
        self.advance_while(|c| c.is_ascii_digit());

        // Fractional part, possibly empty: `7.` and `1.e5` are one number
        if self.peek_char() == Some('.') {
            self.advance(); // consume .
            self.advance_while(|c| c.is_ascii_digit());
        }

        // Signed exponent; unsigned ones are picked up with the suffix below
        let rest = &self.input[self.position..];
        let mut ahead = rest.chars();
        if matches!(ahead.next(), Some('e' | 'E'))
            && matches!(ahead.next(), Some('+' | '-'))
            && ahead.next().is_some_and(|c| c.is_ascii_digit())
        {
            self.advance(); // consume e
            self.advance(); // consume sign
        }

        // 0x1F, 1e10, 10L
        self.advance_while(is_identifier_continue);

        TokenKind::Number
    }

    fn lex_sigil(&mut self) -> TokenKind {
        self.advance(); // consume sigil
        self.advance_while(is_identifier_continue);
        TokenKind::Identifier
    }

    fn lex_punctuation(&mut self) -> TokenKind {
        let rest = &self.input[self.position..];
        match OPERATORS.iter().find(|op| rest.starts_with(**op)) {
            Some(op) => self.advance_to(self.position + op.len()),
            None => {
                self.advance();
            }
        }
        TokenKind::Punctuation
    }
}

/// Tokenize `input` into a lossless token sequence.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

fn word_len(s: &str) -> usize {
    s.find(|c: char| !is_identifier_continue(c)).unwrap_or(s.len())
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_string_prefix(c: char) -> bool {
    matches!(c, 'n' | 'N' | 'e' | 'E' | 'x' | 'X' | 'b' | 'B')
}

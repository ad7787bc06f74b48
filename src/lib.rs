//! # SQL Pretty-Printer
//!
//! Re-lays out SQL queries into a canonical, readable shape without changing
//! what they mean.
//!
//! ## Features
//!
//! - **Lossless tokenization**: strings, quoted identifiers and comments are
//!   never looked inside, so `'select this'` or `-- FROM here` never trigger
//!   a line break
//! - **Clause layout**: `SELECT`, `FROM`, `WHERE`, joins and friends start
//!   their own line, their contents are indented one level
//! - **Configurable**: indent width, keyword casing and comma placement
//! - **Idempotent**: formatting formatted SQL changes nothing
//! - **Total**: any input, including partial or malformed SQL, produces output
//!
//! ## Quick Start
//!
//! ```rust
//! use sql_pretty::{format, FormatConfig};
//!
//! let sql = "select id,name from users where age > 18 and active = true";
//! let formatted = format(sql, &FormatConfig::default());
//! assert_eq!(
//!     formatted,
//!     "SELECT\n  id, name\nFROM\n  users\nWHERE\n  age > 18\n  AND active = true"
//! );
//! ```

pub mod config;
pub mod error;
pub mod formatter;
pub mod keywords;
pub mod lexer;
pub mod token;

pub use config::{CommaStyle, FormatConfig, KeywordCase};
pub use error::ConfigError;
pub use formatter::{layout, Formatter};
pub use lexer::{tokenize, Lexer};
pub use token::{KeywordClass, Span, Token, TokenKind};

/// Format SQL with the given configuration.
///
/// This never fails: unterminated strings, unbalanced parentheses and
/// unknown syntax are laid out on a best-effort basis.
///
/// # Example
///
/// ```rust
/// use sql_pretty::{format, CommaStyle, FormatConfig};
///
/// let config = FormatConfig::default().with_comma_style(CommaStyle::LeadingOnNewLine);
/// assert_eq!(format("SELECT a, b FROM t", &config), "SELECT\n  a\n  , b\nFROM\n  t");
/// ```
pub fn format(sql: &str, config: &FormatConfig) -> String {
    let tokens = tokenize(sql);
    layout(&tokens, config)
}

/// Format SQL with default configuration.
///
/// Convenience function equivalent to `format(sql, &FormatConfig::default())`.
pub fn format_default(sql: &str) -> String {
    format(sql, &FormatConfig::default())
}

/// Check whether `sql` would change if formatted with `config`.
pub fn needs_format(sql: &str, config: &FormatConfig) -> bool {
    format(sql, config) != sql
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_simple() {
        assert_eq!(format_default("select * from users"), "SELECT\n  *\nFROM\n  users");
    }

    #[test]
    fn test_format_preserve_case() {
        let config = FormatConfig::default().with_keyword_case(KeywordCase::PreserveOriginal);
        assert_eq!(format("select * from users", &config), "select\n  *\nfrom\n  users");
    }

    #[test]
    fn test_format_without_keywords() {
        assert_eq!(format_default("a   +\n b"), "a + b");
    }

    #[test]
    fn test_needs_format() {
        let config = FormatConfig::default();
        assert!(needs_format("select 1", &config));
        assert!(!needs_format("SELECT\n  1", &config));
        assert!(!needs_format("", &config));
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_default(""), "");
    }

    #[test]
    fn test_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FormatConfig>();
        assert_send_sync::<Token>();
    }
}

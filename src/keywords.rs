//! Static SQL keyword table
//!
//! Every entry maps a canonical (upper-case, single-space separated) spelling
//! to the layout rule it triggers. Lookups are ASCII case-insensitive and
//! word-by-word, so `group   by` and `Group\nBy` both resolve to `GROUP BY`.
//!
//! Only keywords that matter to layout or casing are listed. Words such as
//! `TRUE`, `FALSE` and function names stay identifiers and are never
//! case-folded.

use crate::token::KeywordClass;

/// Longest phrase in [`KEYWORDS`], in words
pub const MAX_PHRASE_WORDS: usize = 3;

pub static KEYWORDS: &[(&str, KeywordClass)] = &[
    // Clause starts
    ("SELECT", KeywordClass::ClauseStart),
    ("FROM", KeywordClass::ClauseStart),
    ("WHERE", KeywordClass::ClauseStart),
    ("GROUP BY", KeywordClass::ClauseStart),
    ("ORDER BY", KeywordClass::ClauseStart),
    ("HAVING", KeywordClass::ClauseStart),
    ("UNION", KeywordClass::ClauseStart),
    ("UNION ALL", KeywordClass::ClauseStart),
    ("INTERSECT", KeywordClass::ClauseStart),
    ("EXCEPT", KeywordClass::ClauseStart),
    ("LIMIT", KeywordClass::ClauseStart),
    ("OFFSET", KeywordClass::ClauseStart),
    ("WITH", KeywordClass::ClauseStart),
    ("INSERT INTO", KeywordClass::ClauseStart),
    ("VALUES", KeywordClass::ClauseStart),
    ("UPDATE", KeywordClass::ClauseStart),
    ("SET", KeywordClass::ClauseStart),
    ("DELETE FROM", KeywordClass::ClauseStart),
    ("RETURNING", KeywordClass::ClauseStart),
    // Join starts
    ("JOIN", KeywordClass::JoinStart),
    ("INNER JOIN", KeywordClass::JoinStart),
    ("LEFT JOIN", KeywordClass::JoinStart),
    ("RIGHT JOIN", KeywordClass::JoinStart),
    ("OUTER JOIN", KeywordClass::JoinStart),
    ("FULL JOIN", KeywordClass::JoinStart),
    ("CROSS JOIN", KeywordClass::JoinStart),
    ("NATURAL JOIN", KeywordClass::JoinStart),
    ("LEFT OUTER JOIN", KeywordClass::JoinStart),
    ("RIGHT OUTER JOIN", KeywordClass::JoinStart),
    ("FULL OUTER JOIN", KeywordClass::JoinStart),
    // Connectors
    ("AND", KeywordClass::Connector),
    ("OR", KeywordClass::Connector),
    ("ON", KeywordClass::Connector),
    // No layout effect
    ("ALL", KeywordClass::Other),
    ("ALTER", KeywordClass::Other),
    ("AS", KeywordClass::Other),
    ("ASC", KeywordClass::Other),
    ("BETWEEN", KeywordClass::Other),
    ("BY", KeywordClass::Other),
    ("CASCADE", KeywordClass::Other),
    ("CASE", KeywordClass::Other),
    ("CHECK", KeywordClass::Other),
    ("CONSTRAINT", KeywordClass::Other),
    ("CREATE", KeywordClass::Other),
    ("DEFAULT", KeywordClass::Other),
    ("DELETE", KeywordClass::Other),
    ("DESC", KeywordClass::Other),
    ("DISTINCT", KeywordClass::Other),
    ("DROP", KeywordClass::Other),
    ("ELSE", KeywordClass::Other),
    ("END", KeywordClass::Other),
    ("EXISTS", KeywordClass::Other),
    ("FOREIGN KEY", KeywordClass::Other),
    ("IF", KeywordClass::Other),
    ("ILIKE", KeywordClass::Other),
    ("IN", KeywordClass::Other),
    ("INDEX", KeywordClass::Other),
    ("INSERT", KeywordClass::Other),
    ("INTO", KeywordClass::Other),
    ("IS", KeywordClass::Other),
    ("LIKE", KeywordClass::Other),
    ("NOT", KeywordClass::Other),
    ("NOT NULL", KeywordClass::Other),
    ("NULL", KeywordClass::Other),
    ("OVER", KeywordClass::Other),
    ("PARTITION BY", KeywordClass::Other),
    ("PRIMARY KEY", KeywordClass::Other),
    ("REFERENCES", KeywordClass::Other),
    ("TABLE", KeywordClass::Other),
    ("THEN", KeywordClass::Other),
    ("UNIQUE", KeywordClass::Other),
    ("USING", KeywordClass::Other),
    ("WHEN", KeywordClass::Other),
];

/// Look up a single word.
pub fn lookup(word: &str) -> Option<KeywordClass> {
    lookup_phrase(&[word])
}

/// Look up a sequence of words as one phrase (`["group", "by"]`).
pub fn lookup_phrase(words: &[&str]) -> Option<KeywordClass> {
    if words.is_empty() || words.len() > MAX_PHRASE_WORDS {
        return None;
    }
    KEYWORDS
        .iter()
        .find(|(phrase, _)| phrase_matches(phrase, words))
        .map(|&(_, class)| class)
}

fn phrase_matches(phrase: &str, words: &[&str]) -> bool {
    let mut parts = phrase.split(' ');
    for word in words {
        match parts.next() {
            Some(part) if part.eq_ignore_ascii_case(word) => {}
            _ => return false,
        }
    }
    parts.next().is_none()
}

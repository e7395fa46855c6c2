//! Slug normalizer.
//!
//! Turns the Portuguese title of a document into the URL path segment used by
//! the public site. The transform is deliberately literal: whitespace runs
//! become a single hyphen, a fixed table of Latin diacritics is folded to the
//! ASCII base letter, everything else outside `[a-z0-9-]` is dropped, and the
//! result is clipped to [`SLUG_MAX_LENGTH`] characters. Hyphen runs left behind
//! by dropped characters are kept as-is and no edge trimming happens.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum number of characters kept in a generated slug.
pub const SLUG_MAX_LENGTH: usize = 96;

/// Field path the slug is generated from.
pub const SLUG_SOURCE: &str = "title.pt";

// ECMAScript whitespace: Unicode White_Space plus U+FEFF, without U+0085.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x{FEFF}&&[^\x{85}]]+").expect("whitespace run pattern is valid"));

/// URL-safe identifier stored on a document as `{ "current": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Slug {
    pub current: String,
}

impl Slug {
    /// Wrap an already-normalized value.
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
        }
    }

    /// Generate a slug from the source text.
    pub fn from_source(source: &str) -> Self {
        Self::new(slugify(source))
    }

    pub fn as_str(&self) -> &str {
        &self.current
    }

    pub fn is_empty(&self) -> bool {
        self.current.trim().is_empty()
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.current)
    }
}

/// Options declared on a slug field for the host studio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlugOptions {
    pub source: &'static str,
    pub max_length: usize,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            source: SLUG_SOURCE,
            max_length: SLUG_MAX_LENGTH,
        }
    }
}

/// Normalize a title into a URL slug capped at [`SLUG_MAX_LENGTH`] characters.
///
/// ```
/// use news_schema::slugify;
///
/// assert_eq!(slugify("BRICS Anuncia Nova Moeda"), "brics-anuncia-nova-moeda");
/// assert_eq!(slugify("Relações Não-Oficiais"), "relacoes-nao-oficiais");
/// ```
pub fn slugify(input: &str) -> String {
    slugify_with(input, SLUG_MAX_LENGTH)
}

/// Normalize a title into a URL slug capped at `max_length` characters.
pub fn slugify_with(input: &str, max_length: usize) -> String {
    let lowered = input.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lowered, "-");

    // Every character surviving the filter is ASCII, so counting chars is counting bytes.
    hyphenated
        .chars()
        .map(fold_diacritic)
        .filter(|ch| is_slug_char(*ch))
        .take(max_length)
        .collect()
}

/// True when `candidate` could have been produced by [`slugify`].
pub fn is_normalized_slug(candidate: &str) -> bool {
    candidate.len() <= SLUG_MAX_LENGTH && candidate.chars().all(is_slug_char)
}

fn is_slug_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-'
}

fn fold_diacritic(ch: char) -> char {
    match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        other => other,
    }
}

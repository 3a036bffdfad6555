//! Version stripping for quoted import specifiers.
//!
//! Works on raw text with a single regex pass; the host file is never parsed.
//! A match is a quote, a name made of non-quote characters, `@`, a version
//! made of digits and dots, and the same quote again:
//!
//! - `"@radix-ui/react-dialog@1.1.6"` becomes `"@radix-ui/react-dialog"`
//! - `'lucide-react@0.487.0'` becomes `'lucide-react'`
//!
//! The name class is greedy, so `"a@1.0@2.0"` only loses its last suffix.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Versioned specifier pattern. The `regex` crate has no backreferences, so
/// each quote style gets its own alternative to force matching quotes.
static VERSIONED_SPECIFIER: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(concat!(
        r#""(?<dq_name>[^"']+)@(?<dq_version>[0-9.]+)""#, // double-quoted
        r"|",
        r#"'(?<sq_name>[^"']+)@(?<sq_version>[0-9.]+)'"#, // single-quoted
    )) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid specifier regex: {err}"),
    }
});

/// A version suffix removed from one specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrippedSpecifier {
    /// Specifier as kept in the file, without quotes.
    pub name: String,
    /// The dropped version, without the `@`.
    pub version: String,
}

/// Result of running [`strip_versions`] over a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformation {
    /// The rewritten buffer (identical to the input when nothing matched).
    pub content: String,
    /// Whether `content` differs from the input.
    pub changed: bool,
    /// Every specifier that lost its version, in file order.
    pub stripped: Vec<StrippedSpecifier>,
}

/// Strip `@version` suffixes from every quoted versioned specifier.
///
/// All non-overlapping matches are replaced left to right in one pass.
/// Everything outside a match is left byte-for-byte identical.
#[must_use]
pub fn strip_versions(content: &str) -> Transformation {
    let mut stripped = Vec::new();

    let rewritten = VERSIONED_SPECIFIER.replace_all(content, |caps: &Captures<'_>| {
        let (quote, name, version) = if caps.name("dq_name").is_some() {
            ('"', &caps["dq_name"], &caps["dq_version"])
        } else {
            ('\'', &caps["sq_name"], &caps["sq_version"])
        };

        stripped.push(StrippedSpecifier {
            name: name.to_owned(),
            version: version.to_owned(),
        });
        format!("{quote}{name}{quote}")
    });

    let content_out = rewritten.into_owned();
    let changed = content_out != content;
    Transformation {
        content: content_out,
        changed,
        stripped,
    }
}

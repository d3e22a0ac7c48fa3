//! Filename templates with positional `{}` placeholders.
//!
//! `BNOT_{}_{}.set.png` expanded with `[3, 17]` gives `BNOT_3_17.set.png`.
//! Templates are validated up front; expansion checks the argument count and
//! the resulting length instead of writing into a fixed buffer.

use std::fmt;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Longest expanded path accepted, in bytes.
pub const MAX_PATH_LEN: usize = 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathTemplate {
    raw: String,
    /// Literal text around the placeholders; `placeholders() + 1` entries.
    parts: Vec<String>,
}

impl PathTemplate {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let parts: Vec<String> = raw.split("{}").map(str::to_string).collect();
        if parts.iter().any(|p| p.contains('{') || p.contains('}')) {
            return Err(Error::template(&raw, "only bare `{}` placeholders are supported"));
        }
        if raw.is_empty() {
            return Err(Error::template(&raw, "empty template"));
        }
        Ok(Self { raw, parts })
    }

    /// Number of `{}` slots.
    pub fn placeholders(&self) -> usize {
        self.parts.len() - 1
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Substitute `args` into the placeholders, in order.
    pub fn expand(&self, args: &[u64]) -> Result<PathBuf> {
        if args.len() != self.placeholders() {
            return Err(Error::template(
                &self.raw,
                format!(
                    "expected {} index argument(s), got {}",
                    self.placeholders(),
                    args.len()
                ),
            ));
        }
        let mut out = self.parts[0].clone();
        for (arg, part) in args.iter().zip(&self.parts[1..]) {
            out.push_str(&arg.to_string());
            out.push_str(part);
        }
        if out.len() > MAX_PATH_LEN {
            return Err(Error::template(
                &self.raw,
                format!("expanded path is {} bytes (max {MAX_PATH_LEN})", out.len()),
            ));
        }
        Ok(PathBuf::from(out))
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn expands_in_order() {
        let t = PathTemplate::new("out/BNOT_{}_{}.set.png").unwrap();
        assert_eq!(t.placeholders(), 2);
        assert_eq!(t.expand(&[3, 17]).unwrap(), Path::new("out/BNOT_3_17.set.png"));

        let lead = PathTemplate::new("{}.txt").unwrap();
        assert_eq!(lead.expand(&[9]).unwrap(), Path::new("9.txt"));

        let none = PathTemplate::new("fixed.dat").unwrap();
        assert_eq!(none.expand(&[]).unwrap(), Path::new("fixed.dat"));
    }

    #[test]
    fn argument_count_must_match() {
        let t = PathTemplate::new("BNOT_{}.txt").unwrap();
        let err = t.expand(&[1, 2]).unwrap_err();
        assert!(matches!(err, Error::Template { .. }));
        assert!(err.to_string().contains("expected 1"));
        assert!(t.expand(&[]).is_err());
    }

    #[test]
    fn rejects_malformed_templates() {
        assert!(PathTemplate::new("").is_err());
        assert!(PathTemplate::new("BNOT_%i_{0}.dat").is_err());
        assert!(PathTemplate::new("BNOT_{.dat").is_err());
    }

    #[test]
    fn overlong_expansion_fails() {
        let t = PathTemplate::new(format!("{}_{{}}", "a".repeat(MAX_PATH_LEN))).unwrap();
        assert!(t.expand(&[1]).is_err());
    }
}

//! os-release parsing
//!
//! Reads the freedesktop `os-release` key/value format. Only the fields the
//! distro detector needs get typed accessors; everything else stays in the
//! raw map.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SetupError};

/// Default location of the os-release file.
pub const DEFAULT_OS_RELEASE_PATH: &str = "/etc/os-release";

/// Parsed os-release metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsRelease {
    fields: HashMap<String, String>,
}

impl OsRelease {
    /// Read and parse an os-release file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SetupError::os_release(format!("cannot read {}: {}", path.display(), e))
        })?;
        debug!("Loaded os-release from {}", path.display());
        Ok(Self::parse(&content))
    }

    /// Parse os-release content.
    ///
    /// Blank lines, `#` comments and lines without `=` are ignored. Values may
    /// be bare, single-quoted or double-quoted.
    pub fn parse(content: &str) -> Self {
        let mut fields = HashMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                debug!("Ignoring malformed os-release line: {}", line);
                continue;
            };
            fields.insert(key.trim().to_string(), unquote(value.trim()));
        }

        Self { fields }
    }

    /// Raw value lookup.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// `ID` of the running distro, if present.
    pub fn id(&self) -> Option<&str> {
        self.get("ID")
    }

    /// `ID_LIKE` family identifiers in listed order. Empty when the field is
    /// missing.
    pub fn id_like(&self) -> Vec<String> {
        self.get("ID_LIKE")
            .map(|v| v.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// `PRETTY_NAME`, falling back to `NAME`.
    pub fn pretty_name(&self) -> Option<&str> {
        self.get("PRETTY_NAME").or_else(|| self.get("NAME"))
    }
}

fn unquote(value: &str) -> String {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == b'\'' && last == b'\'' {
            return value[1..value.len() - 1].to_string();
        }
        if first == b'"' && last == b'"' {
            let inner = &value[1..value.len() - 1];
            let mut out = String::with_capacity(inner.len());
            let mut chars = inner.chars();
            while let Some(c) = chars.next() {
                if c == '\\' {
                    match chars.next() {
                        Some(escaped @ ('"' | '\\' | '$' | '`')) => out.push(escaped),
                        Some(other) => {
                            out.push('\\');
                            out.push(other);
                        }
                        None => out.push('\\'),
                    }
                } else {
                    out.push(c);
                }
            }
            return out;
        }
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEDORA_LIKE: &str = r#"
NAME="Rocky Linux"
VERSION="9.3 (Blue Onyx)"
ID="rocky"
ID_LIKE="rhel centos fedora"
PRETTY_NAME="Rocky Linux 9.3 (Blue Onyx)"
# comment line
"#;

    #[test]
    fn test_parse_quoted_values() {
        let release = OsRelease::parse(FEDORA_LIKE);
        assert_eq!(release.id(), Some("rocky"));
        assert_eq!(release.id_like(), vec!["rhel", "centos", "fedora"]);
        assert_eq!(release.pretty_name(), Some("Rocky Linux 9.3 (Blue Onyx)"));
    }

    #[test]
    fn test_parse_bare_and_single_quoted() {
        let release = OsRelease::parse("ID=arch\nID_LIKE='arch'\n");
        assert_eq!(release.id(), Some("arch"));
        assert_eq!(release.id_like(), vec!["arch"]);
    }

    #[test]
    fn test_missing_id_like_is_empty() {
        let release = OsRelease::parse("ID=fedora\n");
        assert!(release.id_like().is_empty());
    }

    #[test]
    fn test_malformed_lines_are_ignored() {
        let release = OsRelease::parse("garbage\nID_LIKE=ubuntu debian\n=\n");
        assert_eq!(release.id_like(), vec!["ubuntu", "debian"]);
    }

    #[test]
    fn test_escaped_double_quotes() {
        let release = OsRelease::parse(r#"NAME="My \"Distro\"""#);
        assert_eq!(release.get("NAME"), Some(r#"My "Distro""#));
    }

    #[test]
    fn test_load_missing_file() {
        let err = OsRelease::load(Path::new("/nonexistent/os-release")).unwrap_err();
        assert!(matches!(err, SetupError::OsRelease(_)));
    }
}

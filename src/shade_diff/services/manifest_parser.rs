use crate::shade_diff::domain::{Coordinate, VersionedComponent, DEFAULT_TYPE};
use crate::shared::Result;
use std::collections::HashMap;

/// ManifestParser service for the textual records found in shaded archives
///
/// Pure parsing with no I/O. Individual malformed lines or records are
/// returned as errors for the caller to downgrade to warnings.
pub struct ManifestParser;

impl ManifestParser {
    /// Parses one line of the artifact list
    ///
    /// Accepted forms are `group:name:type:version` and
    /// `group:name:type:classifier:version`.
    ///
    /// # Returns
    /// `Ok(None)` for blank lines
    ///
    /// # Errors
    /// Returns an error for any other field count or an invalid field
    pub fn parse_artifact_line(line: &str) -> Result<Option<VersionedComponent>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let items: Vec<&str> = line.split(':').collect();
        let (group, name, artifact_type, classifier, version) = match items.as_slice() {
            [group, name, artifact_type, version] => (*group, *name, *artifact_type, None, *version),
            [group, name, artifact_type, classifier, version] => (
                *group,
                *name,
                *artifact_type,
                Some(classifier.to_string()),
                *version,
            ),
            _ => anyhow::bail!(
                "expected 4 or 5 colon-delimited fields, found {}",
                items.len()
            ),
        };

        let coordinate = Coordinate::new(group, name, artifact_type, classifier)?;
        Ok(Some(VersionedComponent::new(coordinate, version)?))
    }

    /// Parses a whole artifact list, skipping malformed lines
    ///
    /// # Arguments
    /// * `content` - Decoded list content
    /// * `archive` - Archive location, used in warning messages
    ///
    /// # Returns
    /// Tuple of (components in line order, warnings for skipped lines)
    pub fn parse_artifact_list(content: &str, archive: &str) -> (Vec<VersionedComponent>, Vec<String>) {
        let mut components = Vec::new();
        let mut warnings = Vec::new();

        for line in content.lines() {
            match Self::parse_artifact_line(line) {
                Ok(Some(component)) => components.push(component),
                Ok(None) => {}
                Err(e) => warnings.push(format!(
                    "Invalid full artifact ID line from {}'s list of included jars, skipping: {} ({})",
                    archive,
                    line.trim(),
                    e
                )),
            }
        }

        (components, warnings)
    }

    /// Parses a `pom.properties` record into a component
    ///
    /// Requires `groupId`, `artifactId` and `version`; `classifier` is
    /// optional and `type` defaults to `jar`.
    pub fn parse_pom_properties(content: &str) -> Result<VersionedComponent> {
        let properties = Self::parse_properties(content);

        let group = Self::required(&properties, "groupId")?;
        let name = Self::required(&properties, "artifactId")?;
        let version = Self::required(&properties, "version")?;
        let artifact_type = properties
            .get("type")
            .map(String::as_str)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TYPE);
        let classifier = properties.get("classifier").cloned();

        let coordinate = Coordinate::new(group, name, artifact_type, classifier)?;
        VersionedComponent::new(coordinate, version)
    }

    fn required<'a>(properties: &'a HashMap<String, String>, key: &str) -> Result<&'a str> {
        properties
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| anyhow::anyhow!("missing required property '{}'", key))
    }

    /// Reads a record in `java.util.Properties` text form
    ///
    /// Handles `=`, `:` and whitespace separators, `#`/`!` comments,
    /// backslash continuation lines and backslash escapes in keys and values.
    fn parse_properties(content: &str) -> HashMap<String, String> {
        let mut properties = HashMap::new();

        for line in Self::logical_lines(content) {
            let (key, value) = Self::split_key_value(&line);
            properties.insert(
                Self::unescape(key),
                Self::unescape(value).trim_end().to_string(),
            );
        }

        properties
    }

    /// Joins continuation lines and drops blanks and comments
    fn logical_lines(content: &str) -> Vec<String> {
        let mut lines = Vec::new();
        let mut pending: Option<String> = None;

        for raw in content.lines() {
            let physical = raw.trim_start_matches([' ', '\t', '\u{c}']);

            let mut current = match pending.take() {
                Some(joined) => joined + physical,
                None => {
                    if physical.is_empty() || physical.starts_with('#') || physical.starts_with('!') {
                        continue;
                    }
                    physical.to_string()
                }
            };

            let trailing_backslashes = current.chars().rev().take_while(|&c| c == '\\').count();
            if trailing_backslashes % 2 == 1 {
                current.pop();
                pending = Some(current);
            } else {
                lines.push(current);
            }
        }

        // a continuation on the last line ends the record
        lines.extend(pending);
        lines
    }

    /// Splits at the first unescaped `=`, `:` or whitespace
    fn split_key_value(line: &str) -> (&str, &str) {
        let mut escaped = false;
        let mut key_end = line.len();

        for (pos, c) in line.char_indices() {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '=' || c == ':' || c.is_whitespace() {
                key_end = pos;
                break;
            }
        }

        let rest = line[key_end..].trim_start();
        let rest = rest
            .strip_prefix('=')
            .or_else(|| rest.strip_prefix(':'))
            .unwrap_or(rest)
            .trim_start();
        (&line[..key_end], rest)
    }

    /// Resolves `\t`, `\n`, `\r`, `\f`, `\uXXXX` and `\<char>` escapes
    fn unescape(text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut chars = text.chars();

        while let Some(c) = chars.next() {
            if c != '\\' {
                result.push(c);
                continue;
            }
            match chars.next() {
                Some('t') => result.push('\t'),
                Some('n') => result.push('\n'),
                Some('r') => result.push('\r'),
                Some('f') => result.push('\u{c}'),
                Some('u') => {
                    let hex: String = chars.clone().take(4).collect();
                    match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                        Some(decoded) if hex.len() == 4 => {
                            result.push(decoded);
                            chars.nth(3);
                        }
                        _ => result.push('u'),
                    }
                }
                Some(other) => result.push(other),
                None => {}
            }
        }

        result
    }
}

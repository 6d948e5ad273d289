use crate::ports::outbound::DependencyProvider;
use crate::shade_diff::domain::{Coordinate, VersionedComponent};
use crate::shared::error::ShadeDiffError;
use crate::shared::security::{validate_regular_file, validate_size, MAX_DEPENDENCY_LIST_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Scopes that end up on the runtime classpath
pub const RUNTIME_SCOPES: &[&str] = &["compile", "runtime"];

/// DependencyListReader adapter reading a resolved dependency list from disk
///
/// Accepts the output of `mvn dependency:list -DoutputFile=<file>`:
/// one `group:name:type[:classifier]:version[:scope]` per line. Header lines,
/// `none`, blank lines and trailing ` -- module` annotations are ignored.
pub struct DependencyListReader {
    path: PathBuf,
    scopes: Vec<String>,
}

impl DependencyListReader {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            scopes: RUNTIME_SCOPES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replaces the scopes that are kept; unscoped entries are always kept
    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the list with size and file type checks
    fn read_list(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(ShadeDiffError::DependencyListNotFound {
                path: self.path.clone(),
                suggestion: "Generate it with `mvn dependency:list -DoutputFile=<file>` or specify the correct path with the --dependencies option.".to_string(),
            }
            .into());
        }

        let read = || -> Result<String> {
            let size = validate_regular_file(&self.path, "dependency list")?;
            validate_size(size, &self.path.display().to_string(), MAX_DEPENDENCY_LIST_SIZE)?;
            Ok(fs::read_to_string(&self.path)?)
        };

        read().map_err(|e| {
            ShadeDiffError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Parses the list content
    ///
    /// # Errors
    /// Returns `DependencyListParseError` naming the first offending line
    pub fn parse(&self, content: &str) -> Result<Vec<VersionedComponent>> {
        let mut components = Vec::new();

        for (index, raw) in content.lines().enumerate() {
            let Some(token) = Self::dependency_token(raw) else {
                continue;
            };

            let parsed = Self::parse_token(token).map_err(|e| {
                ShadeDiffError::DependencyListParseError {
                    path: self.path.clone(),
                    details: format!("line {}: '{}': {}", index + 1, raw.trim(), e),
                }
            })?;

            let (component, scope) = parsed;
            let keep = scope.map_or(true, |s| self.scopes.iter().any(|kept| kept == s));
            if keep {
                components.push(component);
            }
        }

        Ok(components)
    }

    /// Extracts the coordinate token of a line, or `None` for lines carrying no dependency
    fn dependency_token(line: &str) -> Option<&str> {
        let line = line.split(" -- ").next().unwrap_or(line);
        let token = line.split_whitespace().next()?;
        if token == "none" || !token.contains(':') || token.ends_with(':') {
            return None;
        }
        Some(token)
    }

    fn parse_token(token: &str) -> Result<(VersionedComponent, Option<&str>)> {
        let items: Vec<&str> = token.split(':').collect();
        let (group, name, artifact_type, classifier, version, scope) = match items.as_slice() {
            [g, n, t, v] => (*g, *n, *t, None, *v, None),
            [g, n, t, v, s] => (*g, *n, *t, None, *v, Some(*s)),
            [g, n, t, c, v, s] => (*g, *n, *t, Some(c.to_string()), *v, Some(*s)),
            _ => anyhow::bail!(
                "expected 4 to 6 colon-delimited fields, found {}",
                items.len()
            ),
        };

        let coordinate = Coordinate::new(group, name, artifact_type, classifier)?;
        Ok((VersionedComponent::new(coordinate, version)?, scope))
    }
}

impl DependencyProvider for DependencyListReader {
    fn resolved_dependencies(&self) -> Result<Vec<VersionedComponent>> {
        let content = self.read_list()?;
        self.parse(&content)
    }
}

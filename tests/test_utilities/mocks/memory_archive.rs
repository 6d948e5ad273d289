use shade_diff::prelude::*;

pub const ARTIFACT_LIST: &str = "META-INF/maven-shade-included-artifacts.list";

/// In-memory BundleArchive keeping entries in insertion order
#[derive(Clone, Default)]
pub struct MemoryArchive {
    pub location: String,
    pub entries: Vec<(String, Vec<u8>)>,
    pub unreadable: Option<String>,
}

impl MemoryArchive {
    pub fn new(location: &str) -> Self {
        Self {
            location: location.to_string(),
            ..Default::default()
        }
    }

    pub fn with_entry(mut self, name: &str, content: &[u8]) -> Self {
        self.entries.push((name.to_string(), content.to_vec()));
        self
    }

    pub fn with_artifact_list(self, lines: &[&str]) -> Self {
        let content = lines.join("\n");
        self.with_entry(ARTIFACT_LIST, content.as_bytes())
    }

    pub fn with_pom_properties(self, group: &str, name: &str, version: &str) -> Self {
        let path = format!("META-INF/maven/{}/{}/pom.properties", group, name);
        let content = format!(
            "#Generated by Maven\ngroupId={}\nartifactId={}\nversion={}\n",
            group, name, version
        );
        self.with_entry(&path, content.as_bytes())
    }

    /// Makes reads of `name` fail with an I/O style error
    pub fn with_unreadable_entry(mut self, name: &str) -> Self {
        self.entries.push((name.to_string(), Vec::new()));
        self.unreadable = Some(name.to_string());
        self
    }
}

impl BundleArchive for MemoryArchive {
    fn location(&self) -> &str {
        &self.location
    }

    fn entry_names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    fn read_entry(&mut self, name: &str) -> Result<Option<Vec<u8>>> {
        if self.unreadable.as_deref() == Some(name) {
            anyhow::bail!("Mock read failure for {}", name);
        }
        Ok(self
            .entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, content)| content.clone()))
    }
}

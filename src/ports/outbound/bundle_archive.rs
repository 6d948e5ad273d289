use crate::shared::Result;

/// BundleArchive port for read-only access to a shaded archive
///
/// Implementations expose the entry listing and raw entry bytes; decoding
/// and parsing belong to the manifest reader.
pub trait BundleArchive {
    /// Human-readable location of the archive, used in diagnostics
    fn location(&self) -> &str;

    /// Names of every entry, in archive order
    fn entry_names(&self) -> Vec<String>;

    /// Reads the raw bytes of an entry
    ///
    /// # Returns
    /// `Ok(None)` if no entry with that name exists
    ///
    /// # Errors
    /// Returns an error if the entry exists but cannot be read
    fn read_entry(&mut self, name: &str) -> Result<Option<Vec<u8>>>;
}

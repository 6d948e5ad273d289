use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a dependency list file (16 MB)
pub const MAX_DEPENDENCY_LIST_SIZE: u64 = 16 * 1024 * 1024;

/// Maximum uncompressed size of a single manifest entry read from an archive (16 MB)
///
/// Guards against decompression bombs hidden behind manifest paths.
pub const MAX_MANIFEST_ENTRY_SIZE: u64 = 16 * 1024 * 1024;

/// Validates that a path exists and is a regular file
///
/// Symbolic links are followed: local repositories are frequently assembled
/// from linked directories.
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "dependency list", "shaded jar")
///
/// # Errors
/// Returns an error if the path doesn't exist or is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata.len())
}

/// Validates that a size is within acceptable limits
///
/// # Arguments
/// * `size` - The size in bytes
/// * `what` - Description of the measured object (for error messages)
/// * `max_size` - Maximum allowed size in bytes
pub fn validate_size(size: u64, what: &str, max_size: u64) -> Result<()> {
    if size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            what,
            size,
            max_size
        );
    }
    Ok(())
}

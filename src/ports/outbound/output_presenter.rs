use crate::shared::Result;

/// OutputPresenter port delivering the rendered exclusions
///
/// The build reads the exclusions from wherever this writes them, so
/// nothing but the rendered content may go through it.
pub trait OutputPresenter {
    /// Writes `content` to the destination
    ///
    /// # Errors
    /// Returns an error if the destination rejects the write
    fn present(&self, content: &str) -> Result<()>;
}

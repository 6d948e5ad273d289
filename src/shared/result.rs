/// Crate-wide result alias; domain failures travel as `ShadeDiffError` inside the `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

mod formatter_factory;
mod presenter_factory;

pub use formatter_factory::{FormatterFactory, DEFAULT_EXCLUDES_PROPERTY};
pub use presenter_factory::{PresenterFactory, PresenterType};

pub use crate::error::Error;
pub use crate::output::Clipboard;
pub use crate::prompt::{Message, Mode, Role};
pub use crate::provider::Provider;

pub type Result<T> = std::result::Result<T, Error>;

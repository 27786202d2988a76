pub mod pool;
pub mod validate;

pub use pool::{random_default_name, DEFAULT_NAME_POOL};
pub use validate::{validate_edit, validate_submit, NameRejection, NAME_MAX_LEN, NAME_MIN_LEN};

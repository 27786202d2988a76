//! One-time app password creation flow.
//!
//! A host application embeds this crate behind its "add app password"
//! dialog: the user picks a name for the new credential (or keeps the
//! suggested one), the account service mints it, and the generated
//! secret is shown exactly once. The host supplies the account service,
//! clipboard, and notice toasts through the traits in [`ports`]; this
//! crate owns the name rules and the reveal state machine.

pub mod flow;
pub mod name;
pub mod ports;
pub mod secret;

pub use flow::{FlowController, FlowState};
pub use name::{
    random_default_name, validate_edit, validate_submit, NameRejection, DEFAULT_NAME_POOL,
    NAME_MAX_LEN, NAME_MIN_LEN,
};
pub use ports::{AccountService, Clipboard, CreatedAppPassword, Notifier};
pub use secret::Secret;

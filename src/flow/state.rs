use serde::Serialize;

use crate::secret::Secret;

/// Where the creation flow currently stands. The host renders straight
/// off this value.
///
/// `Creating` doubles as the in-flight marker for the account service
/// call: while the flow sits in it, no second submit can start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "camelCase")]
pub enum FlowState {
    /// Collecting a name for the new app password.
    Collecting { name: String },
    /// The creation call is in flight; the name is frozen.
    Creating { name: String },
    /// The secret is on screen. It will never be shown again.
    Revealed { secret: Secret, copied: bool },
    /// The flow has handed control back to the host.
    Done,
}

impl FlowState {
    /// Name being collected or submitted, if the flow still holds one.
    pub fn name(&self) -> Option<&str> {
        match self {
            FlowState::Collecting { name } | FlowState::Creating { name } => Some(name),
            FlowState::Revealed { .. } | FlowState::Done => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, FlowState::Done)
    }
}

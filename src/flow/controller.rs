use std::sync::Arc;

use anyhow::{anyhow, Result};
use log::{debug, error};
use rand::Rng;
use tokio::sync::Mutex;

use crate::name::{random_default_name, validate_edit, validate_submit};
use crate::ports::{AccountService, Clipboard, Notifier};
use crate::secret::Secret;

use super::FlowState;

const CREATION_FAILED_NOTICE: &str = "Failed to create app password.";
const COPIED_NOTICE: &str = "Copied to clipboard";

/// Drives one app password creation, from naming to the one-time reveal.
///
/// Cheap to clone; all clones share the same state. The host keeps one
/// per open dialog and discards it after [`FlowController::complete`].
#[derive(Clone)]
pub struct FlowController {
    state: Arc<Mutex<FlowState>>,
    account: Arc<dyn AccountService>,
    clipboard: Arc<dyn Clipboard>,
    notifier: Arc<dyn Notifier>,
}

impl FlowController {
    /// Starts a flow with a randomly suggested name.
    pub fn new(
        account: Arc<dyn AccountService>,
        clipboard: Arc<dyn Clipboard>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::with_rng(&mut rand::thread_rng(), account, clipboard, notifier)
    }

    /// Starts a flow, drawing the suggested name from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        rng: &mut R,
        account: Arc<dyn AccountService>,
        clipboard: Arc<dyn Clipboard>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(FlowState::Collecting {
                name: random_default_name(rng),
            })),
            account,
            clipboard,
            notifier,
        }
    }

    /// Snapshot of the current state for rendering.
    pub async fn state(&self) -> FlowState {
        self.state.lock().await.clone()
    }

    /// Replaces the held name with `candidate` if it passes the
    /// keystroke-level check; otherwise keeps the name and shows the
    /// rejection notice. Ignored outside of name collection.
    pub async fn edit_name(&self, candidate: &str) {
        let mut state = self.state.lock().await;
        let FlowState::Collecting { name } = &mut *state else {
            debug!("ignoring name edit outside of collection");
            return;
        };
        match validate_edit(candidate) {
            Ok(()) => *name = candidate.to_string(),
            Err(rejection) => self.notifier.show(&rejection.to_string()),
        }
    }

    /// Validates the held name and, if it passes, runs the creation call.
    ///
    /// Validation rejections show a notice and leave the flow collecting.
    /// A failed creation (or one that comes back without a password) does
    /// the same, with the name intact. On success the flow moves to the
    /// reveal. Returns the settled state; errs if called while a creation
    /// is already in flight or the flow is past collection.
    pub async fn submit(&self) -> Result<FlowState> {
        let name = {
            let mut state = self.state.lock().await;
            let FlowState::Collecting { name } = &*state else {
                return Err(anyhow!("no name being collected"));
            };
            if let Err(rejection) = validate_submit(name) {
                self.notifier.show(&rejection.to_string());
                return Ok(state.clone());
            }
            let name = name.clone();
            *state = FlowState::Creating { name: name.clone() };
            name
        };

        // Lock released while the call is in flight; the Creating tag is
        // what keeps a second submit out.
        let outcome = self.account.create_app_password(&name).await;

        let mut state = self.state.lock().await;
        match outcome {
            Ok(created) if !created.password.is_empty() => {
                *state = FlowState::Revealed {
                    secret: Secret::new(created.password),
                    copied: false,
                };
            }
            Ok(_) => {
                error!("app password creation returned an empty password");
                self.notifier.show(CREATION_FAILED_NOTICE);
                *state = FlowState::Collecting { name };
            }
            Err(err) => {
                error!("Failed to create app password: {:#}", err);
                self.notifier.show(CREATION_FAILED_NOTICE);
                *state = FlowState::Collecting { name };
            }
        }
        Ok(state.clone())
    }

    /// Copies the revealed secret to the clipboard and confirms with a
    /// notice. Every call copies again; the copied flag stays set once
    /// set. Errs unless a secret is on screen.
    pub async fn copy_secret(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        let FlowState::Revealed { secret, copied } = &mut *state else {
            return Err(anyhow!("no revealed app password to copy"));
        };
        self.clipboard.set_string(secret.reveal());
        *copied = true;
        self.notifier.show(COPIED_NOTICE);
        Ok(())
    }

    /// Ends the flow and hands control back to the host. Valid while
    /// collecting a name or after the reveal; completing twice is
    /// harmless. Errs while the creation call is in flight.
    pub async fn complete(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        match &*state {
            FlowState::Collecting { .. } | FlowState::Revealed { .. } => {
                *state = FlowState::Done;
                Ok(())
            }
            FlowState::Done => Ok(()),
            FlowState::Creating { .. } => Err(anyhow!("creation still in flight")),
        }
    }
}

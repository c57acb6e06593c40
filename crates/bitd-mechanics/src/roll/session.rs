//! Running a roll flow end to end against real collaborators.

use bitd_core::{ActorRegistry, Character};

use super::flow::{RollContext, RollFlow};
use crate::config::RollSettings;
use crate::dialog::FormDialog;
use crate::dispatch::{RollDispatcher, RollOutcome};
use crate::error::{MechError, MechResult};

/// How a roll flow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollFlowResult {
    /// The request was evaluated.
    Dispatched(RollOutcome),
    /// The player closed the form; nothing was rolled.
    Cancelled,
}

/// Binds a character to the collaborators a roll needs.
pub struct RollSession<'a> {
    character: &'a Character,
    registry: &'a dyn ActorRegistry,
    dialog: &'a dyn FormDialog,
    dispatcher: &'a RollDispatcher,
    settings: RollSettings,
}

impl<'a> RollSession<'a> {
    /// Create a session with default settings.
    pub fn new(
        character: &'a Character,
        registry: &'a dyn ActorRegistry,
        dialog: &'a dyn FormDialog,
        dispatcher: &'a RollDispatcher,
    ) -> Self {
        Self {
            character,
            registry,
            dialog,
            dispatcher,
            settings: RollSettings::default(),
        }
    }

    /// Use the given roll settings.
    pub fn with_settings(mut self, settings: RollSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Roll against `target`: show the form, wait for the player, and
    /// dispatch the result unless they cancel.
    ///
    /// Pools and crew modifiers are read when the roll starts.
    pub async fn begin_roll(
        &self,
        target: &str,
        default_dice_hint: i64,
    ) -> MechResult<RollFlowResult> {
        let context = RollContext::gather(self.character, self.registry, self.settings);
        let mut flow = RollFlow::new(context);
        let spec = flow
            .begin(target, default_dice_hint)
            .cloned()
            .ok_or_else(|| MechError::Dialog("roll form was not built".to_string()))?;

        let values = self.dialog.present(&spec).await?;
        flow.resume(values);

        match flow.into_request() {
            Some(request) => Ok(RollFlowResult::Dispatched(
                self.dispatcher.dispatch(request).await?,
            )),
            None => Ok(RollFlowResult::Cancelled),
        }
    }
}

//! Master volume control.

use std::sync::Arc;

use super::{Action, ActionError};
use crate::responder::Responder;
use crate::system::Mixer;

/// New volume after applying `delta`, clamped to 0-100
pub fn adjusted_level(current: i32, delta: i32) -> u8 {
    current.saturating_add(delta).clamp(0, 100) as u8
}

/// Changes the volume by a fixed amount and says the new level
pub struct AdjustVolume {
    responder: Arc<dyn Responder>,
    mixer: Arc<dyn Mixer>,
    delta: i32,
    confirmation: String,
}

impl AdjustVolume {
    /// `confirmation` is the (translated) sentence to speak, with `{volume}`
    /// standing in for the new level.
    pub fn new(
        responder: Arc<dyn Responder>,
        mixer: Arc<dyn Mixer>,
        delta: i32,
        confirmation: impl Into<String>,
    ) -> Self {
        Self {
            responder,
            mixer,
            delta,
            confirmation: confirmation.into(),
        }
    }
}

impl Action for AdjustVolume {
    fn name(&self) -> &'static str {
        "AdjustVolume"
    }

    fn run(&self, _transcript: &str) -> Result<(), ActionError> {
        let raw = self.mixer.read_level()?;
        tracing::info!("volume: {}", raw);

        let current: i32 = raw.trim().parse().map_err(|_| ActionError::Parse {
            what: "volume level",
            value: raw.clone(),
        })?;

        let volume = adjusted_level(current, self.delta);
        self.mixer.set_level(volume)?;

        self.responder
            .say(&self.confirmation.replace("{volume}", &volume.to_string()));
        Ok(())
    }
}

//! Collaborators injected into actions at construction time.

use std::path::PathBuf;
use std::sync::Arc;

use crate::catalogue::{Catalogue, Show};
use crate::config::Translator;
use crate::responder::Responder;
use crate::store::KeyValueStore;
use crate::system::{AudioPlayer, Clock, Dice, Mixer};

/// Everything an action may need from its surroundings.
///
/// Cheap to clone; every collaborator is shared.
#[derive(Clone)]
pub struct Services {
    pub responder: Arc<dyn Responder>,
    pub store: Arc<dyn KeyValueStore>,
    pub catalogue: Arc<dyn Catalogue>,
    pub mixer: Arc<dyn Mixer>,
    pub player: Arc<dyn AudioPlayer>,
    pub dice: Arc<dyn Dice>,
    pub clock: Arc<dyn Clock>,
    pub translator: Arc<Translator>,
    /// Directory holding the decaying-odds wavs
    pub wav_dir: PathBuf,
    /// Shows offered by the favorites episode picker
    pub favorites: Vec<Show>,
}

impl Services {
    /// Shorthand for a translation lookup
    pub fn tr(&self, text: &str) -> String {
        self.translator.lookup(text)
    }
}

//! External collaborators behind small traits.
//!
//! Every action that touches the outside world (shell, mixer, audio player,
//! randomness, wall clock) goes through one of these, so the actions can be
//! exercised in tests without real processes.

mod clock;
mod dice;
mod mixer;
mod player;
mod shell;

pub use clock::{Clock, SystemClock};
pub use dice::{Dice, ThreadDice};
pub use mixer::{AmixerMixer, Mixer};
pub use player::{AplayPlayer, AudioPlayer};
pub use shell::{ShellError, run_shell};

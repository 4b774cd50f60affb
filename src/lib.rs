//! voxact - keyword-triggered voice commands
//!
//! A recognized transcript is matched against registered keyword phrases;
//! every phrase it contains runs its [`action::Action`], which may speak a
//! response through the host's [`responder::Responder`].
//!
//! ## Pieces
//!
//! - [`dispatcher::Dispatcher`]: phrase table and failure boundary
//! - [`action`]: the action variants and the type-name registry
//! - [`config`]: `config.toml` settings and the `cmd-config` command file
//! - [`actor::make_actor`]: builds the dispatcher at startup
//! - [`store`], [`catalogue`], [`system`]: external state, the TV catalogue,
//!   and the shell/mixer/audio/randomness/clock collaborators

pub mod action;
pub mod actor;
pub mod catalogue;
pub mod config;
pub mod dispatcher;
pub mod responder;
pub mod store;
pub mod system;

#[cfg(test)]
mod test_support;

//! CLI command implementations

pub mod init;
pub mod list;
pub mod listen;
pub mod run;

use std::path::Path;

use anyhow::Result;

use voxact::action::ActionRegistry;
use voxact::actor::{build_services, make_actor};
use voxact::config::Config;
use voxact::dispatcher::Dispatcher;
use voxact::responder::responder_for;

/// Load config and build the full dispatcher
pub fn assemble(config_path: Option<&Path>) -> Result<Dispatcher> {
    let config = Config::load(config_path)?;
    let responder = responder_for(&config.settings.speech_command);
    let services = build_services(&config, responder)?;
    let registry = ActionRegistry::default();

    Ok(make_actor(
        &services,
        &registry,
        Some(config.settings.cmd_config.clone()),
        config.settings.cloud_speech_commands,
    ))
}

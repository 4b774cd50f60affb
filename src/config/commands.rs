//! Command file loading
//!
//! Parses the line-oriented command file:
//! ```text
//! # comment
//! parrot=SpeakAction,Norwegian Blue
//! moon men=WavChance,moonmen,10
//! ^         ^         ^       ^
//! phrase    type      keyword extra (optional)
//! ```
//! Each line becomes one dispatcher entry. A bad line is logged and skipped;
//! it never stops the lines after it.

use std::path::Path;

use anyhow::{Context, Result};

use crate::action::{ActionError, ActionRegistry, Services};
use crate::dispatcher::Dispatcher;

/// Error type for a single command line
#[derive(Debug, thiserror::Error)]
pub enum CommandLineError {
    #[error("Missing '=' between phrase and action")]
    MissingEquals,

    #[error("Empty phrase")]
    EmptyPhrase,

    #[error("Missing keyword after action type {0:?}")]
    MissingKeyword(String),

    #[error(transparent)]
    Action(#[from] ActionError),
}

/// One parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub phrase: String,
    pub action_type: String,
    pub keyword: String,
    pub extra: Option<String>,
}

/// Parse one line. Comments and blank lines are `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<CommandLine>, CommandLineError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (phrase, action) = line
        .split_once('=')
        .ok_or(CommandLineError::MissingEquals)?;

    let phrase = phrase.trim();
    if phrase.is_empty() {
        return Err(CommandLineError::EmptyPhrase);
    }

    let mut fields = action.splitn(3, ',').map(str::trim);
    let action_type = fields.next().unwrap_or_default().to_string();
    let keyword = fields
        .next()
        .ok_or_else(|| CommandLineError::MissingKeyword(action_type.clone()))?
        .to_string();
    let extra = fields.next().map(String::from);

    Ok(Some(CommandLine {
        phrase: phrase.to_string(),
        action_type,
        keyword,
        extra,
    }))
}

/// A line that could not be registered
#[derive(Debug)]
pub struct LoadFailure {
    /// 1-based line number
    pub line_no: usize,
    pub line: String,
    pub error: CommandLineError,
}

/// Outcome of loading a command file
#[derive(Debug, Default)]
pub struct LoadReport {
    pub registered: usize,
    pub failures: Vec<LoadFailure>,
}

/// Register every valid line of `content` into `dispatcher`.
///
/// Phrases go through the translation lookup before registration.
pub fn load_commands_from_str(
    content: &str,
    dispatcher: &mut Dispatcher,
    registry: &ActionRegistry,
    services: &Services,
) -> LoadReport {
    let mut report = LoadReport::default();

    for (idx, line) in content.lines().enumerate() {
        let result = parse_line(line).and_then(|parsed| {
            let Some(cmd) = parsed else {
                return Ok(None);
            };
            let action = registry.create(
                &cmd.action_type,
                services,
                &cmd.keyword,
                cmd.extra.as_deref(),
            )?;
            Ok(Some((cmd, action)))
        });

        match result {
            Ok(Some((cmd, action))) => {
                tracing::debug!(
                    "Added command from config - {} ({})",
                    cmd.phrase,
                    cmd.action_type
                );
                dispatcher.register(services.tr(&cmd.phrase), action);
                report.registered += 1;
            }
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(
                    "Failed to add command from config line {}: {:?}: {}",
                    idx + 1,
                    line.trim(),
                    error
                );
                report.failures.push(LoadFailure {
                    line_no: idx + 1,
                    line: line.trim().to_string(),
                    error,
                });
            }
        }
    }

    report
}

/// Load the command file at `path` into `dispatcher`.
///
/// Only an unreadable file is an error; bad lines end up in the report.
pub fn load_commands(
    path: &Path,
    dispatcher: &mut Dispatcher,
    registry: &ActionRegistry,
    services: &Services,
) -> Result<LoadReport> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read command file: {}", path.display()))?;

    let report = load_commands_from_str(&content, dispatcher, registry, services);
    tracing::info!(
        "Loaded {} commands from {} ({} skipped)",
        report.registered,
        path.display(),
        report.failures.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::FailureKind;
    use crate::test_support::Fakes;

    #[test]
    fn test_parse_full_line() {
        let cmd = parse_line("parrot=Voom,Norwegian Blue,4000000").unwrap().unwrap();
        assert_eq!(
            cmd,
            CommandLine {
                phrase: "parrot".to_string(),
                action_type: "Voom".to_string(),
                keyword: "Norwegian Blue".to_string(),
                extra: Some("4000000".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_without_extra() {
        let cmd = parse_line(" ding = PlayWav , /tmp/ding.wav ").unwrap().unwrap();
        assert_eq!(cmd.phrase, "ding");
        assert_eq!(cmd.action_type, "PlayWav");
        assert_eq!(cmd.keyword, "/tmp/ding.wav");
        assert_eq!(cmd.extra, None);
    }

    #[test]
    fn test_extra_keeps_later_commas() {
        let cmd = parse_line("up=SpeakShellCommandOutput,uptime -p,well, a while")
            .unwrap()
            .unwrap();
        assert_eq!(cmd.extra.as_deref(), Some("well, a while"));
    }

    #[test]
    fn test_equals_in_keyword_is_kept() {
        let cmd = parse_line("sum=SpeakShellCommandOutput,echo $((1+1==2))").unwrap().unwrap();
        assert_eq!(cmd.keyword, "echo $((1+1==2))");
    }

    #[test]
    fn test_comments_and_blank_lines() {
        assert!(parse_line("# parrot=SpeakAction,hi").unwrap().is_none());
        assert!(parse_line("   ").unwrap().is_none());
    }

    #[test]
    fn test_malformed_lines() {
        assert!(matches!(parse_line("parrot"), Err(CommandLineError::MissingEquals)));
        assert!(matches!(parse_line("=SpeakAction,hi"), Err(CommandLineError::EmptyPhrase)));
        assert!(matches!(
            parse_line("parrot=SpeakAction"),
            Err(CommandLineError::MissingKeyword(ref t)) if t == "SpeakAction"
        ));
    }

    #[test]
    fn test_unknown_type_is_skipped() {
        let fakes = Fakes::default();
        let services = fakes.services();
        let mut dispatcher = Dispatcher::new(services.responder.clone());

        let report = load_commands_from_str(
            "# my commands\nparrot=SpeakAction,squawk\nvoom=Voom,Norwegian Blue,4000000\n",
            &mut dispatcher,
            &ActionRegistry::default(),
            &services,
        );

        assert_eq!(report.registered, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].line_no, 3);
        match &report.failures[0].error {
            CommandLineError::Action(e) => assert_eq!(e.kind(), FailureKind::Configuration),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(dispatcher.len(), 1);
        assert_eq!(dispatcher.entries()[0].phrase, "parrot");
    }

    #[test]
    fn test_bad_line_does_not_stop_later_lines() {
        let fakes = Fakes::default();
        let services = fakes.services();
        let mut dispatcher = Dispatcher::new(services.responder.clone());

        let report = load_commands_from_str(
            "broken line\nquieter=VolumeControl,loud\nhi=SpeakAction,hello\nbye=SpeakAction,goodbye\n",
            &mut dispatcher,
            &ActionRegistry::default(),
            &services,
        );

        assert_eq!(report.registered, 2);
        assert_eq!(report.failures.len(), 2);

        dispatcher.dispatch("hi and bye");
        assert_eq!(fakes.responder.said(), vec!["hello", "goodbye"]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let fakes = Fakes::default();
        let services = fakes.services();
        let mut dispatcher = Dispatcher::new(services.responder.clone());

        let result = load_commands(
            Path::new("/nonexistent/cmd-config"),
            &mut dispatcher,
            &ActionRegistry::default(),
            &services,
        );

        assert!(result.is_err());
        assert!(dispatcher.is_empty());
    }
}

//! Command-line entry glue.
//!
//! With no arguments the binary lists models. `speak <text> <path>` runs
//! speech synthesis. Every outcome, errors included, is reported on the
//! output writer; the process itself always exits successfully.

use std::io::{self, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::config::ClientConfig;
use crate::models::ModelsClient;
use crate::speech::{AudioSink, SpeechClient};
use crate::{Error, Result};

const USAGE: &str = r#"oai-speech — list OpenAI models or synthesize speech

USAGE:
    oai-speech                                  List available models
    oai-speech speak <text> <path> [--write-audio]
                                                Synthesize <text> into <path>
    oai-speech help                             Show this help message

ENVIRONMENT:
    OPENAI_API_KEY                              API key (required)
    RUST_LOG                                    Log filter for stderr (default: warn)"#;

/// A parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListModels,
    Speak {
        text: String,
        path: PathBuf,
        sink: AudioSink,
    },
    Help,
    /// Unrecognised arguments; the message is shown above the usage text.
    Invalid(String),
}

impl Command {
    /// Parse arguments, excluding the program name.
    pub fn parse(args: &[String]) -> Self {
        let Some(first) = args.first() else {
            return Command::ListModels;
        };

        match first.as_str() {
            "speak" => parse_speak(&args[1..]),
            "help" | "--help" | "-h" => Command::Help,
            other => Command::Invalid(format!("Unknown command: {other}")),
        }
    }
}

fn parse_speak(args: &[String]) -> Command {
    let mut sink = AudioSink::CreateOnly;
    let mut positional = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--write-audio" => sink = AudioSink::WriteBody,
            flag if flag.starts_with("--") => {
                return Command::Invalid(format!("Unknown option: {flag}"));
            }
            _ => positional.push(arg.clone()),
        }
    }

    match <[String; 2]>::try_from(positional) {
        Ok([text, path]) => Command::Speak {
            text,
            path: PathBuf::from(path),
            sink,
        },
        Err(_) => Command::Invalid("speak expects <text> and <path>".to_string()),
    }
}

/// Run one command against the API described by `config`.
///
/// `config` is only consulted by commands that talk to the API; a missing key
/// is reported on `out` without any request being made. Only failures to
/// write to `out` are returned.
pub async fn run<W: Write>(command: Command, config: Result<ClientConfig>, out: &mut W) -> io::Result<()> {
    match command {
        Command::Help => writeln!(out, "{USAGE}"),
        Command::Invalid(message) => {
            writeln!(out, "{message}")?;
            writeln!(out)?;
            writeln!(out, "{USAGE}")
        }
        Command::ListModels => {
            let Some(config) = resolve_config(config, out)? else {
                return Ok(());
            };
            let result = match ModelsClient::new(config) {
                Ok(client) => client.list_models(out).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(models) => {
                    for model in &models {
                        writeln!(out, "{model}")?;
                    }
                    Ok(())
                }
                Err(e) => writeln!(out, "Error: {e}"),
            }
        }
        Command::Speak { text, path, sink } => {
            let Some(config) = resolve_config(config, out)? else {
                return Ok(());
            };
            let result = match SpeechClient::new(config) {
                Ok(client) => client.with_sink(sink).convert_text_to_speech(&text, &path).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => writeln!(out, "Speech saved to {}", path.display()),
                Err(e) => writeln!(out, "Error: {e}"),
            }
        }
    }
}

fn resolve_config<W: Write>(config: Result<ClientConfig>, out: &mut W) -> io::Result<Option<ClientConfig>> {
    match config {
        Ok(config) => {
            debug!(base_url = %config.base_url, "configuration resolved");
            Ok(Some(config))
        }
        Err(Error::MissingApiKey) => {
            writeln!(out, "{}", Error::MissingApiKey)?;
            Ok(None)
        }
        Err(e) => {
            writeln!(out, "Error: {e}")?;
            Ok(None)
        }
    }
}

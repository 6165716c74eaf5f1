mod history;
mod screen;
mod symbols;

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use ferroscreen_core::{
    DataSource, Envelope, EnvelopeError, FixtureSource, ProviderId, SymbolRegistry, YahooAdapter,
};

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::metadata::Metadata;

pub use history::HistoryData;
pub use screen::{warning_text, ScreenData};
pub use symbols::SymbolsData;

/// Typed payload of a finished command; serialized as the envelope `data`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CommandData {
    Screen(ScreenData),
    Symbols(SymbolsData),
    History(HistoryData),
}

pub struct CommandResult {
    pub data: CommandData,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
    pub source_chain: Vec<ProviderId>,
}

impl CommandResult {
    pub fn ok(data: CommandData, source: ProviderId) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
            source_chain: vec![source],
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    pub fn with_error(mut self, error: EnvelopeError) -> Self {
        self.errors.push(error);
        self
    }
}

pub async fn run(cli: &Cli) -> Result<Envelope<CommandData>, CliError> {
    let started = Instant::now();
    let source = build_source(cli.offline)?;
    let registry = SymbolRegistry::nse()?;

    let command_result = match &cli.command {
        Command::Screen(args) => screen::run(args, &registry, source).await?,
        Command::Symbols => symbols::run(&registry, source.id()),
        Command::History(args) => history::run(args, &registry, source).await?,
    };

    let CommandResult {
        data,
        warnings,
        errors,
        source_chain,
    } = command_result;

    let mut metadata = Metadata::new(source_chain, elapsed_ms(started))?;
    for warning in warnings {
        metadata.push_warning(warning);
    }
    let meta = metadata.into_envelope_meta()?;

    Envelope::with_errors(meta, data, errors).map_err(CliError::from)
}

fn build_source(offline: bool) -> Result<Arc<dyn DataSource>, CliError> {
    if offline {
        tracing::info!("using offline demo data");
        return Ok(Arc::new(FixtureSource::demo()));
    }

    Ok(Arc::new(YahooAdapter::from_env()?))
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

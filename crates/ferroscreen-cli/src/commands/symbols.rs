use serde::Serialize;

use ferroscreen_core::{ProviderId, SymbolEntry, SymbolRegistry};

use super::{CommandData, CommandResult};

#[derive(Debug, Serialize)]
pub struct SymbolsData {
    pub symbols: Vec<SymbolEntry>,
    pub default_selection: Vec<String>,
}

pub fn run(registry: &SymbolRegistry, source: ProviderId) -> CommandResult {
    let data = SymbolsData {
        symbols: registry.entries().to_vec(),
        default_selection: registry.default_selection(),
    };

    CommandResult::ok(CommandData::Symbols(data), source)
}

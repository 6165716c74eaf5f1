//! Display-name to ticker registry and user selections over it.

use serde::{Deserialize, Serialize};

use crate::{ScreenError, Symbol, ValidationError};

const NSE_LISTINGS: [(&str, &str); 10] = [
    ("Reliance", "RELIANCE.NS"),
    ("Infosys", "INFY.NS"),
    ("HDFC Bank", "HDFCBANK.NS"),
    ("TCS", "TCS.NS"),
    ("ICICI Bank", "ICICIBANK.NS"),
    ("Kotak Bank", "KOTAKBANK.NS"),
    ("Bharti Airtel", "BHARTIARTL.NS"),
    ("Adani Ports", "ADANIPORTS.NS"),
    ("SBI", "SBIN.NS"),
    ("Wipro", "WIPRO.NS"),
];

const DEFAULT_SELECTION: &str = "Reliance";

/// A human-readable company name bound to its ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub display_name: String,
    pub ticker: Symbol,
}

impl SymbolEntry {
    pub fn new(display_name: impl Into<String>, ticker: Symbol) -> Result<Self, ValidationError> {
        let display_name = display_name.into();
        let trimmed = display_name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyDisplayName);
        }

        Ok(Self {
            display_name: trimmed.to_owned(),
            ticker,
        })
    }
}

/// Fixed, ordered set of screenable stocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRegistry {
    entries: Vec<SymbolEntry>,
}

impl SymbolRegistry {
    /// Build a registry; display names must be unique (case-insensitively).
    pub fn new(entries: Vec<SymbolEntry>) -> Result<Self, ValidationError> {
        for (index, entry) in entries.iter().enumerate() {
            let duplicated = entries[..index]
                .iter()
                .any(|earlier| earlier.display_name.eq_ignore_ascii_case(&entry.display_name));
            if duplicated {
                return Err(ValidationError::DuplicateDisplayName {
                    name: entry.display_name.clone(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// The ten NSE large caps offered by the screener.
    pub fn nse() -> Result<Self, ValidationError> {
        let entries = NSE_LISTINGS
            .iter()
            .map(|(name, ticker)| SymbolEntry::new(*name, Symbol::parse(ticker)?))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    pub fn display_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.display_name.as_str())
            .collect()
    }

    pub fn default_selection(&self) -> Vec<String> {
        vec![String::from(DEFAULT_SELECTION)]
    }

    pub fn lookup(&self, display_name: &str) -> Result<&SymbolEntry, ScreenError> {
        let wanted = display_name.trim();
        self.entries
            .iter()
            .find(|entry| entry.display_name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ScreenError::UnknownSymbol {
                name: wanted.to_owned(),
            })
    }

    /// Resolve user-supplied names into an ordered selection.
    ///
    /// Repeated names collapse onto their first occurrence. Any unknown name
    /// rejects the whole selection.
    pub fn select<I, S>(&self, names: I) -> Result<Selection, ScreenError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<SymbolEntry> = Vec::new();
        for name in names {
            let entry = self.lookup(name.as_ref())?;
            if !entries.iter().any(|chosen| chosen == entry) {
                entries.push(entry.clone());
            }
        }

        Ok(Selection { entries })
    }
}

/// Ordered, duplicate-free stocks chosen for one render cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    entries: Vec<SymbolEntry>,
}

impl Selection {
    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

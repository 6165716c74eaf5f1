use std::collections::HashMap;
use std::sync::Mutex;

use time::{Date, Weekday};
use tracing::debug;

use crate::data_source::{DataSource, SourceError, SourceFuture};
use crate::{
    FundamentalsSnapshot, HistoryBar, LookbackPeriod, PriceHistory, ProviderId, Symbol,
    UtcDateTime,
};

/// Raw ratios a fixture reports for one ticker, in provider units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixtureRatios {
    pub trailing_pe: Option<f64>,
    pub price_to_book: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub return_on_equity: Option<f64>,
}

impl FixtureRatios {
    pub const fn new(
        trailing_pe: Option<f64>,
        price_to_book: Option<f64>,
        dividend_yield: Option<f64>,
        return_on_equity: Option<f64>,
    ) -> Self {
        Self {
            trailing_pe,
            price_to_book,
            dividend_yield,
            return_on_equity,
        }
    }
}

/// Provider call observed by a [`FixtureSource`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureCall {
    Fundamentals(Symbol),
    PriceHistory(Symbol, LookbackPeriod),
}

/// In-memory data source.
///
/// Scripted entries answer first. Symbols without an entry either fail with
/// an invalid-request error or, in [`demo`](Self::demo) mode, get
/// deterministic synthetic data derived from the ticker.
#[derive(Debug, Default)]
pub struct FixtureSource {
    fundamentals: HashMap<Symbol, Result<FixtureRatios, SourceError>>,
    histories: HashMap<Symbol, Result<Vec<HistoryBar>, SourceError>>,
    synthesize: bool,
    calls: Mutex<Vec<FixtureCall>>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Synthetic data for every ticker; backs `--offline`.
    pub fn demo() -> Self {
        Self {
            synthesize: true,
            ..Self::default()
        }
    }

    pub fn with_ratios(mut self, symbol: Symbol, ratios: FixtureRatios) -> Self {
        self.fundamentals.insert(symbol, Ok(ratios));
        self
    }

    pub fn with_fundamentals_error(mut self, symbol: Symbol, error: SourceError) -> Self {
        self.fundamentals.insert(symbol, Err(error));
        self
    }

    pub fn with_history(mut self, symbol: Symbol, bars: Vec<HistoryBar>) -> Self {
        self.histories.insert(symbol, Ok(bars));
        self
    }

    pub fn with_history_error(mut self, symbol: Symbol, error: SourceError) -> Self {
        self.histories.insert(symbol, Err(error));
        self
    }

    /// Calls received so far.
    pub fn calls(&self) -> Result<Vec<FixtureCall>, SourceError> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .map_err(|_| SourceError::internal("fixture call log poisoned"))
    }

    fn record(&self, call: FixtureCall) -> Result<(), SourceError> {
        self.calls
            .lock()
            .map_err(|_| SourceError::internal("fixture call log poisoned"))?
            .push(call);
        Ok(())
    }

    fn lookup_fundamentals(&self, symbol: &Symbol) -> Result<FundamentalsSnapshot, SourceError> {
        self.record(FixtureCall::Fundamentals(symbol.clone()))?;
        debug!(%symbol, "fixture fundamentals");

        let ratios = match self.fundamentals.get(symbol) {
            Some(scripted) => scripted.clone()?,
            None if self.synthesize => synthetic_ratios(symbol),
            None => return Err(missing_fixture(symbol)),
        };

        Ok(FundamentalsSnapshot::new(
            symbol.clone(),
            UtcDateTime::now(),
            ratios.trailing_pe,
            ratios.price_to_book,
            ratios.dividend_yield,
            ratios.return_on_equity,
        ))
    }

    fn lookup_history(
        &self,
        symbol: &Symbol,
        period: LookbackPeriod,
    ) -> Result<PriceHistory, SourceError> {
        self.record(FixtureCall::PriceHistory(symbol.clone(), period))?;
        debug!(%symbol, %period, "fixture price history");

        let bars = match self.histories.get(symbol) {
            Some(scripted) => scripted.clone()?,
            None if self.synthesize => {
                let today = UtcDateTime::now().into_inner().date();
                synthetic_bars(symbol, period, today)?
            }
            None => return Err(missing_fixture(symbol)),
        };

        Ok(PriceHistory::new(symbol.clone(), period, bars))
    }
}

impl DataSource for FixtureSource {
    fn id(&self) -> ProviderId {
        ProviderId::Fixture
    }

    fn fundamentals<'a>(&'a self, symbol: &'a Symbol) -> SourceFuture<'a, FundamentalsSnapshot> {
        Box::pin(async move { self.lookup_fundamentals(symbol) })
    }

    fn price_history<'a>(
        &'a self,
        symbol: &'a Symbol,
        period: LookbackPeriod,
    ) -> SourceFuture<'a, PriceHistory> {
        Box::pin(async move { self.lookup_history(symbol, period) })
    }
}

fn missing_fixture(symbol: &Symbol) -> SourceError {
    SourceError::invalid_request(format!("no fixture data for {symbol}"))
}

fn synthetic_ratios(symbol: &Symbol) -> FixtureRatios {
    let seed = symbol_seed(symbol);
    FixtureRatios::new(
        Some(12.0 + (seed % 380) as f64 / 10.0),
        Some(1.0 + (seed % 95) as f64 / 10.0),
        Some(0.002 + (seed % 40) as f64 / 1_000.0),
        Some(0.06 + (seed % 28) as f64 / 100.0),
    )
}

const fn trading_days(period: LookbackPeriod) -> usize {
    match period {
        LookbackPeriod::OneMonth => 21,
        LookbackPeriod::ThreeMonths => 63,
        LookbackPeriod::SixMonths => 126,
        LookbackPeriod::OneYear => 252,
    }
}

/// Weekday bars ending at `end`, oldest first.
fn synthetic_bars(
    symbol: &Symbol,
    period: LookbackPeriod,
    end: Date,
) -> Result<Vec<HistoryBar>, SourceError> {
    let seed = symbol_seed(symbol);
    let base = 400.0 + (seed % 3_200) as f64;
    let count = trading_days(period);

    let mut dates = Vec::with_capacity(count);
    let mut cursor = end;
    while dates.len() < count {
        if !matches!(cursor.weekday(), Weekday::Saturday | Weekday::Sunday) {
            dates.push(cursor);
        }
        cursor = cursor
            .previous_day()
            .ok_or_else(|| SourceError::internal("fixture calendar underflow"))?;
    }
    dates.reverse();

    let phase = (seed % 17) as f64;
    Ok(dates
        .into_iter()
        .enumerate()
        .map(|(index, date)| {
            let step = index as f64;
            let close = base * (1.0 + 0.08 * ((step + phase) / 9.0).sin()) + step * 0.4;
            let adjusted = close * 0.985;
            HistoryBar::new(date, Some(round_paise(close)), Some(round_paise(adjusted)))
        })
        .collect())
}

fn round_paise(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn symbol_seed(symbol: &Symbol) -> u64 {
    symbol.as_str().bytes().fold(0_u64, |acc, byte| {
        acc.wrapping_mul(33).wrapping_add(byte as u64)
    })
}

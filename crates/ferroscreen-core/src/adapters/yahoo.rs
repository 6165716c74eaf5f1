use std::sync::{Arc, Mutex};

use serde::Deserialize;
use time::UtcOffset;
use tracing::debug;

use crate::data_source::{DataSource, SourceError, SourceFuture};
use crate::http_client::{HttpAuth, HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};
use crate::{
    FundamentalsSnapshot, HistoryBar, LookbackPeriod, PriceHistory, ProviderId, Symbol,
    UtcDateTime,
};

const COOKIE_ENDPOINT: &str = "https://fc.yahoo.com";
const CRUMB_ENDPOINTS: [&str; 2] = [
    "https://query1.finance.yahoo.com/v1/test/getcrumb",
    "https://query2.finance.yahoo.com/v1/test/getcrumb",
];
const QUOTE_SUMMARY_ENDPOINT: &str = "https://query1.finance.yahoo.com/v10/finance/quoteSummary";
const CHART_ENDPOINT: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const SUMMARY_MODULES: &str = "summaryDetail,defaultKeyStatistics,financialData";
const REFERER: &str = "https://finance.yahoo.com/";

/// Environment variable holding a session cookie that overrides the jar.
pub const YAHOO_COOKIE_ENV: &str = "YAHOO_COOKIE";

// ============================================================================
// Session crumb
// ============================================================================

/// Holds the Yahoo crumb for the lifetime of the adapter.
///
/// `quoteSummary` rejects requests without a crumb that matches the session
/// cookie. The cookie itself lives in the HTTP client's jar (or comes from
/// [`YAHOO_COOKIE_ENV`]).
#[derive(Debug, Default)]
pub struct YahooSession {
    crumb: Mutex<Option<String>>,
}

impl YahooSession {
    fn cached(&self) -> Result<Option<String>, SourceError> {
        self.crumb
            .lock()
            .map(|guard| guard.clone())
            .map_err(|_| SourceError::internal("yahoo session lock poisoned"))
    }

    fn store(&self, crumb: Option<String>) -> Result<(), SourceError> {
        let mut guard = self
            .crumb
            .lock()
            .map_err(|_| SourceError::internal("yahoo session lock poisoned"))?;
        *guard = crumb;
        Ok(())
    }

    /// Return the cached crumb, or establish a session and fetch one.
    pub async fn crumb(
        &self,
        http_client: &dyn HttpClient,
        auth: &HttpAuth,
    ) -> Result<String, SourceError> {
        if let Some(crumb) = self.cached()? {
            return Ok(crumb);
        }

        let crumb = fetch_crumb(http_client, auth).await?;
        self.store(Some(crumb.clone()))?;
        Ok(crumb)
    }

    /// Forget the crumb so the next call starts a fresh session.
    pub fn invalidate(&self) -> Result<(), SourceError> {
        self.store(None)
    }
}

async fn fetch_crumb(http_client: &dyn HttpClient, auth: &HttpAuth) -> Result<String, SourceError> {
    if matches!(auth, HttpAuth::None) {
        let cookie_request = HttpRequest::get(COOKIE_ENDPOINT).with_header("referer", REFERER);
        // fc.yahoo.com answers 404 but still sets the session cookie.
        http_client.execute(cookie_request).await.map_err(|e| {
            SourceError::unavailable(format!("failed to fetch Yahoo cookie: {}", e.message()))
        })?;
    }

    for endpoint in CRUMB_ENDPOINTS {
        let crumb_request = HttpRequest::get(endpoint)
            .with_header("referer", REFERER)
            .with_auth(auth);

        let response = match http_client.execute(crumb_request).await {
            Ok(response) => response,
            Err(error) => {
                debug!(endpoint, error = %error, "crumb request failed");
                continue;
            }
        };

        let body = response.body.trim();
        if response.status == 429 || body.to_ascii_lowercase().contains("too many requests") {
            return Err(SourceError::rate_limited(
                "yahoo rate limited while fetching crumb",
            ));
        }
        if !response.is_success() || body.is_empty() {
            continue;
        }
        if body.contains("<html") || body.contains("<!DOCTYPE") {
            continue;
        }
        if body.len() < 100 && !body.contains(' ') {
            debug!(endpoint, "obtained yahoo crumb");
            return Ok(body.to_owned());
        }
    }

    Err(SourceError::unavailable(
        "failed to fetch Yahoo crumb from all endpoints",
    ))
}

// ============================================================================
// Yahoo Adapter
// ============================================================================

/// Yahoo Finance adapter for fundamentals (`quoteSummary`) and daily history
/// (`chart`).
#[derive(Clone)]
pub struct YahooAdapter {
    http_client: Arc<dyn HttpClient>,
    auth: HttpAuth,
    session: Arc<YahooSession>,
}

impl YahooAdapter {
    pub fn new(http_client: Arc<dyn HttpClient>, auth: HttpAuth) -> Self {
        Self {
            http_client,
            auth,
            session: Arc::new(YahooSession::default()),
        }
    }

    /// Adapter over a reqwest client, honouring [`YAHOO_COOKIE_ENV`].
    pub fn from_env() -> Result<Self, SourceError> {
        let client = ReqwestHttpClient::new()
            .map_err(|e| SourceError::internal(e.message().to_owned()))?;
        let auth = std::env::var(YAHOO_COOKIE_ENV)
            .ok()
            .filter(|cookie| !cookie.trim().is_empty())
            .map(HttpAuth::Cookie)
            .unwrap_or(HttpAuth::None);

        Ok(Self::new(Arc::new(client), auth))
    }

    async fn get(&self, url: String) -> Result<String, SourceError> {
        debug!(%url, "yahoo request");
        let request = HttpRequest::get(url)
            .with_header("referer", REFERER)
            .with_auth(&self.auth);

        let response = self.http_client.execute(request).await.map_err(|e| {
            SourceError::unavailable(format!("yahoo transport error: {}", e.message()))
        })?;

        if response.status == 401 || response.status == 403 {
            self.session.invalidate()?;
        }
        check_status(response)
    }

    async fn fetch_fundamentals(&self, symbol: &Symbol) -> Result<FundamentalsSnapshot, SourceError> {
        let crumb = self
            .session
            .crumb(self.http_client.as_ref(), &self.auth)
            .await?;
        let url = format!(
            "{QUOTE_SUMMARY_ENDPOINT}/{}?modules={SUMMARY_MODULES}&crumb={}",
            urlencoding::encode(symbol.as_str()),
            urlencoding::encode(&crumb)
        );

        let body = self.get(url).await?;
        parse_quote_summary(symbol, &body)
    }

    async fn fetch_history(
        &self,
        symbol: &Symbol,
        period: LookbackPeriod,
    ) -> Result<PriceHistory, SourceError> {
        let url = format!(
            "{CHART_ENDPOINT}/{}?range={}&interval=1d&events=div%2Csplit",
            urlencoding::encode(symbol.as_str()),
            period.as_str()
        );

        let body = self.get(url).await?;
        parse_chart(symbol, period, &body)
    }
}

impl DataSource for YahooAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Yahoo
    }

    fn fundamentals<'a>(&'a self, symbol: &'a Symbol) -> SourceFuture<'a, FundamentalsSnapshot> {
        Box::pin(self.fetch_fundamentals(symbol))
    }

    fn price_history<'a>(
        &'a self,
        symbol: &'a Symbol,
        period: LookbackPeriod,
    ) -> SourceFuture<'a, PriceHistory> {
        Box::pin(self.fetch_history(symbol, period))
    }
}

fn check_status(response: HttpResponse) -> Result<String, SourceError> {
    match response.status {
        status if (200..300).contains(&status) => Ok(response.body),
        // Yahoo answers unknown tickers with 404 and a JSON error body.
        404 => Err(api_error_from_body(&response.body)
            .unwrap_or_else(|| SourceError::invalid_request("yahoo returned status 404"))),
        429 => Err(SourceError::rate_limited("yahoo returned status 429")),
        status => Err(SourceError::unavailable(format!(
            "yahoo returned status {status}"
        ))),
    }
}

fn api_error_from_body(body: &str) -> Option<SourceError> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let error = value
        .get("quoteSummary")
        .or_else(|| value.get("chart"))
        .and_then(|section| section.get("error"))?;
    let error: YahooApiError = serde_json::from_value(error.clone()).ok()?;
    Some(error.into_source_error())
}

// ============================================================================
// Response parsing
// ============================================================================

fn parse_quote_summary(symbol: &Symbol, body: &str) -> Result<FundamentalsSnapshot, SourceError> {
    let response: YahooQuoteSummaryResponse = serde_json::from_str(body).map_err(|e| {
        SourceError::internal(format!("failed to parse yahoo fundamentals: {e}"))
    })?;

    if let Some(error) = response.quote_summary.error {
        return Err(error.into_source_error());
    }

    let result = response
        .quote_summary
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| {
            SourceError::invalid_request(format!("yahoo returned no fundamentals for {symbol}"))
        })?;

    let summary = result.summary_detail.unwrap_or_default();
    let statistics = result.default_key_statistics.unwrap_or_default();
    let financial = result.financial_data.unwrap_or_default();

    Ok(FundamentalsSnapshot::new(
        symbol.clone(),
        UtcDateTime::now(),
        YahooRawValue::value(summary.trailing_pe),
        YahooRawValue::value(summary.price_to_book)
            .or_else(|| YahooRawValue::value(statistics.price_to_book)),
        YahooRawValue::value(summary.dividend_yield),
        YahooRawValue::value(financial.return_on_equity),
    ))
}

fn parse_chart(
    symbol: &Symbol,
    period: LookbackPeriod,
    body: &str,
) -> Result<PriceHistory, SourceError> {
    let response: YahooChartResponse = serde_json::from_str(body)
        .map_err(|e| SourceError::internal(format!("failed to parse yahoo chart: {e}")))?;

    if let Some(error) = response.chart.error {
        return Err(error.into_source_error());
    }

    let result = response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| {
            SourceError::invalid_request(format!("yahoo returned no chart for {symbol}"))
        })?;

    let offset = result
        .meta
        .and_then(|meta| meta.gmtoffset)
        .and_then(|seconds| UtcOffset::from_whole_seconds(seconds).ok())
        .unwrap_or(UtcOffset::UTC);

    // A listing with no trades in the window has no timestamp array.
    let timestamps = result.timestamp.unwrap_or_default();
    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|quote| quote.close)
        .unwrap_or_default();
    let adjusted = result
        .indicators
        .adjclose
        .and_then(|series| series.into_iter().next())
        .map(|series| series.adjclose)
        .unwrap_or_default();

    let mut bars = Vec::with_capacity(timestamps.len());
    for (index, seconds) in timestamps.into_iter().enumerate() {
        let ts = UtcDateTime::from_unix_timestamp(seconds)
            .map_err(|e| SourceError::internal(format!("invalid chart timestamp: {e}")))?;
        bars.push(HistoryBar::new(
            ts.local_date(offset),
            closes.get(index).copied().flatten(),
            adjusted.get(index).copied().flatten(),
        ));
    }

    Ok(PriceHistory::new(symbol.clone(), period, bars))
}

#[derive(Debug, Clone, Deserialize)]
struct YahooApiError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    description: String,
}

impl YahooApiError {
    fn into_source_error(self) -> SourceError {
        let message = format!("yahoo API error: {} ({})", self.description, self.code);
        if self.code.eq_ignore_ascii_case("Not Found") {
            SourceError::invalid_request(message)
        } else {
            SourceError::unavailable(message)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct YahooQuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: YahooQuoteSummaryData,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooQuoteSummaryData {
    #[serde(default)]
    result: Option<Vec<YahooQuoteSummaryResult>>,
    #[serde(default)]
    error: Option<YahooApiError>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooQuoteSummaryResult {
    #[serde(rename = "summaryDetail", default)]
    summary_detail: Option<YahooSummaryDetail>,
    #[serde(rename = "defaultKeyStatistics", default)]
    default_key_statistics: Option<YahooKeyStatistics>,
    #[serde(rename = "financialData", default)]
    financial_data: Option<YahooFinancialData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct YahooSummaryDetail {
    #[serde(rename = "trailingPE", default)]
    trailing_pe: Option<YahooRawValue>,
    #[serde(rename = "priceToBook", default)]
    price_to_book: Option<YahooRawValue>,
    #[serde(rename = "dividendYield", default)]
    dividend_yield: Option<YahooRawValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct YahooKeyStatistics {
    #[serde(rename = "priceToBook", default)]
    price_to_book: Option<YahooRawValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct YahooFinancialData {
    #[serde(rename = "returnOnEquity", default)]
    return_on_equity: Option<YahooRawValue>,
}

/// Yahoo wraps numbers as `{ "raw": 0.0123, "fmt": "1.23%" }`, or `{}` when
/// the value is not reported.
#[derive(Debug, Clone, Deserialize)]
struct YahooRawValue {
    #[serde(default)]
    raw: Option<f64>,
}

impl YahooRawValue {
    fn value(wrapped: Option<Self>) -> Option<f64> {
        wrapped.and_then(|v| v.raw)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartResponse {
    chart: YahooChartData,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartData {
    #[serde(default)]
    result: Option<Vec<YahooChartResult>>,
    #[serde(default)]
    error: Option<YahooApiError>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartResult {
    #[serde(default)]
    meta: Option<YahooChartMeta>,
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    indicators: YahooChartIndicators,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartMeta {
    #[serde(default)]
    gmtoffset: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartIndicators {
    #[serde(default)]
    quote: Vec<YahooChartQuote>,
    #[serde(default)]
    adjclose: Option<Vec<YahooAdjClose>>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartQuote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooAdjClose {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_source::SourceErrorKind;
    use crate::http_client::HttpError;
    use std::future::Future;
    use std::pin::Pin;
    use time::macros::date;

    type TransportFuture<'a> =
        Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>>;

    /// Answers each request with the first route whose pattern is in the URL.
    struct ScriptedHttpClient {
        routes: Vec<(&'static str, Result<HttpResponse, HttpError>)>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl ScriptedHttpClient {
        fn new(routes: Vec<(&'static str, Result<HttpResponse, HttpError>)>) -> Self {
            Self {
                routes,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn urls(&self) -> Vec<String> {
            self.requests
                .lock()
                .expect("request log should not be poisoned")
                .iter()
                .map(|request| request.url.clone())
                .collect()
        }
    }

    impl HttpClient for ScriptedHttpClient {
        fn execute<'a>(&'a self, request: HttpRequest) -> TransportFuture<'a> {
            let response = self
                .routes
                .iter()
                .find(|(pattern, _)| request.url.contains(pattern))
                .map(|(_, response)| response.clone())
                .unwrap_or_else(|| Ok(HttpResponse::new(404, "")));
            self.requests
                .lock()
                .expect("request log should not be poisoned")
                .push(request);
            Box::pin(async move { response })
        }
    }

    const SUMMARY_BODY: &str = r#"{
        "quoteSummary": {
            "result": [{
                "summaryDetail": {
                    "trailingPE": {"raw": 22.1, "fmt": "22.10"},
                    "dividendYield": {"raw": 0.004, "fmt": "0.40%"}
                },
                "defaultKeyStatistics": {"priceToBook": {"raw": 2.3, "fmt": "2.30"}},
                "financialData": {"returnOnEquity": {"raw": 0.15, "fmt": "15.00%"}}
            }],
            "error": null
        }
    }"#;

    const CHART_BODY: &str = r#"{
        "chart": {
            "result": [{
                "meta": {"symbol": "RELIANCE.NS", "gmtoffset": 19800},
                "timestamp": [1719977400, 1720063800, 1720150200],
                "indicators": {
                    "quote": [{"close": [3100.5, null, 3150.0]}],
                    "adjclose": [{"adjclose": [3090.25, null, 3140.0]}]
                }
            }],
            "error": null
        }
    }"#;

    fn symbol() -> Symbol {
        Symbol::parse("RELIANCE.NS").expect("valid symbol")
    }

    fn adapter(client: Arc<ScriptedHttpClient>) -> YahooAdapter {
        YahooAdapter::new(client, HttpAuth::None)
    }

    fn with_session(mut routes: Vec<(&'static str, Result<HttpResponse, HttpError>)>) -> Arc<ScriptedHttpClient> {
        routes.push(("fc.yahoo.com", Ok(HttpResponse::new(404, ""))));
        routes.push(("getcrumb", Ok(HttpResponse::new(200, "abc123crumb"))));
        Arc::new(ScriptedHttpClient::new(routes))
    }

    #[test]
    fn parses_quote_summary_fields() {
        let snapshot = parse_quote_summary(&symbol(), SUMMARY_BODY).expect("parses");
        assert_eq!(snapshot.trailing_pe, Some(22.1));
        assert_eq!(snapshot.price_to_book, Some(2.3));
        assert_eq!(snapshot.dividend_yield_raw, Some(0.004));
        assert_eq!(snapshot.return_on_equity_raw, Some(0.15));
    }

    #[test]
    fn missing_and_empty_raw_values_stay_absent() {
        let body = r#"{"quoteSummary": {"result": [{
            "summaryDetail": {"trailingPE": {}, "dividendYield": {"raw": 0.0}},
            "financialData": {"returnOnEquity": {"raw": 0.2}}
        }], "error": null}}"#;

        let snapshot = parse_quote_summary(&symbol(), body).expect("parses");
        assert_eq!(snapshot.trailing_pe, None);
        assert_eq!(snapshot.price_to_book, None);
        assert_eq!(snapshot.dividend_yield_raw, Some(0.0));
        assert_eq!(snapshot.return_on_equity_raw, Some(0.2));
    }

    #[test]
    fn not_found_api_error_is_invalid_request() {
        let body = r#"{"quoteSummary": {"result": null, "error": {
            "code": "Not Found", "description": "Quote not found for symbol: NOPE.NS"
        }}}"#;

        let err = parse_quote_summary(&symbol(), body).expect_err("must fail");
        assert_eq!(err.kind(), SourceErrorKind::InvalidRequest);
        assert!(err.message().contains("Quote not found"));
    }

    #[test]
    fn garbage_body_is_internal_error() {
        let err = parse_quote_summary(&symbol(), "<html>oops</html>").expect_err("must fail");
        assert_eq!(err.kind(), SourceErrorKind::Internal);
    }

    #[test]
    fn parses_chart_with_exchange_dates_and_nulls() {
        let history =
            parse_chart(&symbol(), LookbackPeriod::SixMonths, CHART_BODY).expect("parses");

        assert_eq!(history.period, LookbackPeriod::SixMonths);
        assert_eq!(history.bars.len(), 3);
        assert_eq!(history.bars[0].date, date!(2024 - 07 - 03));
        assert_eq!(history.bars[0].close, Some(3100.5));
        assert_eq!(history.bars[0].adjusted_close, Some(3090.25));
        assert_eq!(history.bars[1].adjusted_close, None);
        assert_eq!(history.bars[2].date, date!(2024 - 07 - 05));
    }

    #[test]
    fn chart_without_timestamps_is_empty_history() {
        let body = r#"{"chart": {"result": [{"meta": {}, "indicators": {"quote": [{}]}}], "error": null}}"#;
        let history = parse_chart(&symbol(), LookbackPeriod::OneMonth, body).expect("parses");
        assert!(history.bars.is_empty());
    }

    #[test]
    fn status_mapping_follows_error_kinds() {
        let rate_limited = check_status(HttpResponse::new(429, "")).expect_err("must fail");
        assert_eq!(rate_limited.kind(), SourceErrorKind::RateLimited);

        let server = check_status(HttpResponse::new(503, "")).expect_err("must fail");
        assert_eq!(server.kind(), SourceErrorKind::Unavailable);

        let missing = check_status(HttpResponse::new(
            404,
            r#"{"chart": {"result": null, "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}}}"#,
        ))
        .expect_err("must fail");
        assert_eq!(missing.kind(), SourceErrorKind::InvalidRequest);
        assert!(missing.message().contains("delisted"));
    }

    #[tokio::test]
    async fn fundamentals_fetches_crumb_once_and_sends_it() {
        let client = with_session(vec![("quoteSummary", Ok(HttpResponse::ok_json(SUMMARY_BODY)))]);
        let adapter = adapter(client.clone());

        adapter.fundamentals(&symbol()).await.expect("first call");
        adapter.fundamentals(&symbol()).await.expect("second call");

        let urls = client.urls();
        let crumb_calls = urls.iter().filter(|url| url.contains("getcrumb")).count();
        assert_eq!(crumb_calls, 1, "crumb is reused within a session");
        assert!(urls
            .iter()
            .any(|url| url.contains("quoteSummary/RELIANCE.NS") && url.contains("crumb=abc123crumb")));
    }

    #[tokio::test]
    async fn history_requests_six_month_daily_range() {
        let client = with_session(vec![("v8/finance/chart", Ok(HttpResponse::ok_json(CHART_BODY)))]);
        let adapter = adapter(client.clone());

        let history = adapter
            .price_history(&symbol(), LookbackPeriod::SixMonths)
            .await
            .expect("history");

        assert_eq!(history.bars.len(), 3);
        let urls = client.urls();
        assert!(urls
            .iter()
            .any(|url| url.contains("chart/RELIANCE.NS?range=6mo&interval=1d")));
    }

    #[tokio::test]
    async fn transport_failure_is_unavailable() {
        let client = Arc::new(ScriptedHttpClient::new(vec![(
            "chart",
            Err(HttpError::new("connection failed: reset")),
        )]));
        let adapter = adapter(client);

        let err = adapter
            .price_history(&symbol(), LookbackPeriod::SixMonths)
            .await
            .expect_err("must fail");
        assert_eq!(err.kind(), SourceErrorKind::Unavailable);
        assert!(err.message().contains("connection failed"));
    }

    #[tokio::test]
    async fn crumb_rate_limit_surfaces_as_rate_limited() {
        let client = Arc::new(ScriptedHttpClient::new(vec![
            ("fc.yahoo.com", Ok(HttpResponse::new(404, ""))),
            ("getcrumb", Ok(HttpResponse::new(429, "Too Many Requests"))),
        ]));
        let adapter = adapter(client);

        let err = adapter.fundamentals(&symbol()).await.expect_err("must fail");
        assert_eq!(err.kind(), SourceErrorKind::RateLimited);
    }

    #[tokio::test]
    async fn rejected_session_drops_cached_crumb() {
        let client = with_session(vec![("quoteSummary", Ok(HttpResponse::new(401, "")))]);
        let adapter = adapter(client.clone());

        adapter.fundamentals(&symbol()).await.expect_err("401 fails");
        adapter.fundamentals(&symbol()).await.expect_err("401 fails again");

        let crumb_calls = client
            .urls()
            .iter()
            .filter(|url| url.contains("getcrumb"))
            .count();
        assert_eq!(crumb_calls, 2, "a rejected session forces a new crumb");
    }

    #[tokio::test]
    async fn cookie_override_skips_cookie_bootstrap() {
        let client = with_session(vec![("quoteSummary", Ok(HttpResponse::ok_json(SUMMARY_BODY)))]);
        let adapter = YahooAdapter::new(client.clone(), HttpAuth::Cookie(String::from("A3=x")));

        adapter.fundamentals(&symbol()).await.expect("succeeds");

        assert!(!client.urls().iter().any(|url| url.contains("fc.yahoo.com")));
    }
}

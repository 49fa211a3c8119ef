//! Query collaborator for the Uniswap V3 subgraph.
//!
//! [`PoolQuery`] is the page-level contract the fetcher drives; [`SubgraphClient`]
//! implements it over an injected [`HttpClient`] by POSTing a GraphQL document.
//! Numeric fields stay as decimal text here and are parsed by the fetcher.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::http_client::{HttpAuth, HttpClient, HttpRequest};

pub const DEFAULT_SUBGRAPH_ENDPOINT: &str =
    "https://api.thegraph.com/subgraphs/name/ianlapham/uniswap-v3-subgraph";

const POOLS_QUERY: &str = "query ($count: Int!, $lastId: String!, $dateRangeStart: Int!, $dateRangeEnd: Int!) { \
pools(first: $count, where: { id_gt: $lastId }) { \
id \
token0 { name } \
token1 { name } \
poolDayData(where: { date_gte: $dateRangeStart, date_lte: $dateRangeEnd }) { feesUSD tvlUSD date } \
} }";

/// Query failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorKind {
    Transport,
    Status,
    GraphQl,
    Decode,
}

/// Opaque failure of the query collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    kind: QueryErrorKind,
    message: String,
}

impl QueryError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: QueryErrorKind::Transport,
            message: message.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            kind: QueryErrorKind::Status,
            message: format!("subgraph returned status {status}"),
        }
    }

    pub fn graphql(message: impl Into<String>) -> Self {
        Self {
            kind: QueryErrorKind::GraphQl,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: QueryErrorKind::Decode,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> QueryErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            QueryErrorKind::Transport => "query.transport",
            QueryErrorKind::Status => "query.status",
            QueryErrorKind::GraphQl => "query.graphql",
            QueryErrorKind::Decode => "query.decode",
        }
    }
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "query failed: {} ({})", self.message, self.code())
    }
}

impl std::error::Error for QueryError {}

/// One page request: pools with `id > last_id`, days within `[date_gte, date_lte]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub first: usize,
    pub last_id: String,
    pub date_gte: i64,
    pub date_lte: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PoolPage {
    pub pools: Vec<PoolRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub name: String,
}

/// Per-day record as returned on the wire; numeric values are decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolDayRecord {
    pub date: i64,
    #[serde(rename = "feesUSD")]
    pub fees_usd: String,
    #[serde(rename = "tvlUSD")]
    pub tvl_usd: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolRecord {
    pub id: String,
    pub token0: TokenRecord,
    pub token1: TokenRecord,
    #[serde(rename = "poolDayData", default)]
    pub pool_day_data: Vec<PoolDayRecord>,
}

/// Page-level query contract driven by the fetcher.
pub trait PoolQuery: Send + Sync {
    fn fetch_page<'a>(
        &'a self,
        request: &'a PageRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PoolPage, QueryError>> + Send + 'a>>;
}

/// Endpoint and transport settings for [`SubgraphClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubgraphConfig {
    pub endpoint: String,
    pub timeout_ms: u64,
    pub auth: HttpAuth,
}

impl Default for SubgraphConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_SUBGRAPH_ENDPOINT),
            timeout_ms: 30_000,
            auth: HttpAuth::None,
        }
    }
}

impl SubgraphConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_auth(mut self, auth: HttpAuth) -> Self {
        self.auth = auth;
        self
    }
}

/// GraphQL client for the pools subgraph.
#[derive(Clone)]
pub struct SubgraphClient {
    http_client: Arc<dyn HttpClient>,
    config: SubgraphConfig,
}

impl SubgraphClient {
    pub fn new(http_client: Arc<dyn HttpClient>, config: SubgraphConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    fn build_request(&self, request: &PageRequest) -> HttpRequest {
        let body = json!({
            "query": POOLS_QUERY,
            "variables": {
                "count": request.first,
                "lastId": request.last_id,
                "dateRangeStart": request.date_gte,
                "dateRangeEnd": request.date_lte,
            },
        });

        HttpRequest::post_json(&self.config.endpoint, body.to_string())
            .with_auth(&self.config.auth)
            .with_timeout_ms(self.config.timeout_ms)
    }
}

impl PoolQuery for SubgraphClient {
    fn fetch_page<'a>(
        &'a self,
        request: &'a PageRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PoolPage, QueryError>> + Send + 'a>> {
        Box::pin(async move {
            let response = self
                .http_client
                .execute(self.build_request(request))
                .await
                .map_err(|error| QueryError::transport(error.message()))?;

            if !response.is_success() {
                return Err(QueryError::status(response.status));
            }

            parse_page_response(&response.body)
        })
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<PoolPage>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Decode a GraphQL response body into a page of pool records.
pub fn parse_page_response(body: &str) -> Result<PoolPage, QueryError> {
    let response: GraphQlResponse = serde_json::from_str(body)
        .map_err(|e| QueryError::decode(format!("failed to parse subgraph response: {}", e)))?;

    if !response.errors.is_empty() {
        let messages = response
            .errors
            .iter()
            .map(|error| error.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(QueryError::graphql(messages));
    }

    response
        .data
        .ok_or_else(|| QueryError::decode("subgraph response is missing 'data'"))
}

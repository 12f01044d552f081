use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError,
    document::{
        entities::Document,
        value_objects::{
            FieldCondition, Filter, FindQuery, PopulateSpec, Projection, SearchPredicate,
            SortParams,
        },
    },
};

pub const SELECT_KEY: &str = "select";
pub const SORT_KEY: &str = "sort";
pub const PAGE_KEY: &str = "page";
pub const LIMIT_KEY: &str = "limit";
pub const SEARCH_KEY: &str = "search";

/// Keys that steer listing and never become filter fields
pub const RESERVED_KEYS: [&str; 5] = [SELECT_KEY, SORT_KEY, PAGE_KEY, LIMIT_KEY, SEARCH_KEY];

pub const DEFAULT_LIMIT: u64 = 25;
pub const DEFAULT_SORT: &str = "-createdAt";
/// Largest skip a SQL backend accepts (`OFFSET` is a signed 64-bit integer)
const MAX_OFFSET: u64 = i64::MAX as u64;

/// Query parameters of a list request. Repeated keys keep every value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(key.into()).or_default().push(value.into());
    }

    /// All values of `key` joined with commas, the way a list parameter reads
    /// when it is given more than once.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|values| values.join(","))
    }

    /// Entries left once the reserved keys are removed
    pub fn filter_entries(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.entries
            .iter()
            .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Per-collection listing configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub searchable_fields: Vec<String>,
    pub populate: Vec<PopulateSpec>,
    pub default_limit: u64,
    pub default_sort: String,
    /// Upper bound for `limit`; larger requests are clamped. `None` leaves
    /// page size unbounded.
    pub max_limit: Option<u64>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            searchable_fields: Vec::new(),
            populate: Vec::new(),
            default_limit: DEFAULT_LIMIT,
            default_sort: DEFAULT_SORT.to_string(),
            max_limit: None,
        }
    }
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn searchable<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.searchable_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn populate(mut self, spec: impl Into<PopulateSpec>) -> Self {
        self.populate.push(spec.into());
        self
    }

    /// Adds populate entries from untyped configuration.
    pub fn populate_value(mut self, value: &Value) -> Self {
        self.populate.extend(PopulateSpec::normalize(value));
        self
    }

    pub fn default_limit(mut self, limit: u64) -> Self {
        self.default_limit = limit.max(1);
        self
    }

    pub fn default_sort(mut self, sort: impl Into<String>) -> Self {
        self.default_sort = sort.into();
        self
    }

    pub fn max_limit(mut self, max_limit: Option<u64>) -> Self {
        self.max_limit = max_limit.map(|max| max.max(1));
        self
    }
}

/// 1-based page and page size of one list request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub limit: u64,
}

impl PageWindow {
    /// Missing, non-numeric, zero or negative values fall back to page 1 and
    /// the default limit. Pages past the largest representable offset are
    /// pulled back to it, so `start_index` always fits a SQL `OFFSET`.
    pub fn from_params(page: Option<&str>, limit: Option<&str>, options: &ListOptions) -> Self {
        let page = parse_positive(page).unwrap_or(1);
        let limit = parse_positive(limit).unwrap_or(options.default_limit.max(1));
        let limit = match options.max_limit {
            Some(max) => limit.min(max),
            None => limit,
        }
        .min(MAX_OFFSET);
        let page = page.min(MAX_OFFSET / limit + 1);

        Self { page, limit }
    }

    pub fn start_index(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn pagination(&self, total_matching: u64) -> Pagination {
        let start_index = self.start_index();

        Pagination {
            prev: (start_index > 0).then(|| PageLink {
                page: self.page - 1,
                limit: self.limit,
            }),
            next: (start_index.saturating_add(self.limit) < total_matching).then(|| PageLink {
                page: self.page + 1,
                limit: self.limit,
            }),
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|value| *value > 0)
        .map(|value| value as u64)
}

/// A list request translated into a document query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub query: FindQuery,
    pub window: PageWindow,
}

impl ListRequest {
    pub fn parse(params: &QueryParams, options: &ListOptions) -> Result<Self, CoreError> {
        let mut filter = Filter::new();
        for (key, values) in params.filter_entries() {
            filter = filter.with(FieldCondition::parse(key, values.clone())?);
        }

        filter.search = params
            .get(SEARCH_KEY)
            .and_then(|term| SearchPredicate::new(&options.searchable_fields, &term));

        let projection = params
            .get(SELECT_KEY)
            .map(|select| Projection::from_string(&select))
            .unwrap_or_default();

        let sort = params
            .get(SORT_KEY)
            .map(|sort| SortParams::from_string(&sort))
            .filter(|sort| !sort.is_empty())
            .unwrap_or_else(|| SortParams::from_string(&options.default_sort));

        let window = PageWindow::from_params(
            params.get(PAGE_KEY).as_deref(),
            params.get(LIMIT_KEY).as_deref(),
            options,
        );

        Ok(Self {
            query: FindQuery {
                filter,
                projection,
                sort,
                skip: window.start_index(),
                limit: Some(window.limit),
                populate: options.populate.clone(),
            },
            window,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageLink {
    pub page: u64,
    pub limit: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<PageLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageLink>,
}

/// Response body of every list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResultEnvelope {
    pub success: bool,
    pub count: usize,
    pub pagination: Pagination,
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<Document>,
}

impl ResultEnvelope {
    pub fn new(data: Vec<Document>, pagination: Pagination) -> Self {
        Self {
            success: true,
            count: data.len(),
            pagination,
            data,
        }
    }
}

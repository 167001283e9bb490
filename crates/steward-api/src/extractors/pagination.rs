//! Guild listing extractor
//!
//! Extracts paging, filter and sort parameters from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use steward_core::{GuildFilter, GuildSortField, SortOrder};

use crate::response::ApiError;

/// Raw guild listing query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Maximum number of guilds to return
    #[serde(default)]
    pub limit: Option<i64>,
    /// Number of guilds to skip
    #[serde(default)]
    pub offset: Option<i64>,
    /// Case-insensitive guild name fragment
    #[serde(default)]
    pub search: Option<String>,
    /// Only guilds created after this instant (RFC 3339)
    #[serde(default)]
    pub created_after: Option<DateTime<Utc>>,
    /// Only guilds created before this instant (RFC 3339)
    #[serde(default)]
    pub created_before: Option<DateTime<Utc>>,
    /// Only guilds updated after this instant (RFC 3339)
    #[serde(default)]
    pub updated_after: Option<DateTime<Utc>>,
    /// Only guilds updated before this instant (RFC 3339)
    #[serde(default)]
    pub updated_before: Option<DateTime<Utc>>,
    /// Sort column: `created_at`, `updated_at` or `guild_name`
    #[serde(default)]
    pub sort_by: Option<String>,
    /// Sort direction: `asc` or `desc`
    #[serde(default)]
    pub order: Option<String>,
}

/// Validated guild listing parameters
#[derive(Debug, Clone)]
pub struct ListParams(pub GuildFilter);

impl TryFrom<ListQuery> for ListParams {
    type Error = ApiError;

    fn try_from(query: ListQuery) -> Result<Self, Self::Error> {
        let sort_by = match query.sort_by.as_deref() {
            None => GuildSortField::default(),
            Some("created_at") => GuildSortField::CreatedAt,
            Some("updated_at") => GuildSortField::UpdatedAt,
            Some("guild_name") => GuildSortField::GuildName,
            Some(other) => {
                return Err(ApiError::invalid_query(format!(
                    "Unknown sort_by value: {other}"
                )))
            }
        };

        let order = match query.order.as_deref() {
            None => SortOrder::default(),
            Some("asc") => SortOrder::Asc,
            Some("desc") => SortOrder::Desc,
            Some(other) => {
                return Err(ApiError::invalid_query(format!(
                    "Unknown order value: {other}"
                )))
            }
        };

        let filter = GuildFilter {
            limit: query.limit.unwrap_or(GuildFilter::DEFAULT_LIMIT),
            offset: query.offset.unwrap_or(0),
            search: query.search.filter(|s| !s.trim().is_empty()),
            created_after: query.created_after,
            created_before: query.created_before,
            updated_after: query.updated_after,
            updated_before: query.updated_before,
            sort_by,
            order,
        };

        Ok(ListParams(filter.clamped()))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<ListQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        ListParams::try_from(query)
    }
}

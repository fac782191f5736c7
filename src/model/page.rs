use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

fn default_page_no() -> u64 {
    1
}

fn default_page_size() -> u64 {
    10
}

/// Query parameters accepted by every paginated endpoint.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct PageQueryDto {
    /// 1-based page number (default 1).
    #[serde(default = "default_page_no")]
    pub page_no: u64,
    /// Items per page (default 10, at most 100).
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    /// Free-text search keyword; words are separated by whitespace.
    #[serde(default)]
    pub keyword: Option<String>,
}

impl Default for PageQueryDto {
    fn default() -> Self {
        Self {
            page_no: default_page_no(),
            page_size: default_page_size(),
            keyword: None,
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageDto<T> {
    pub page_size: u64,
    pub total_count: u64,
    pub total_page: u64,
    pub items: Vec<T>,
}

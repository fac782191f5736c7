//! Offset/limit pagination.

use crate::model::page::{PageDto, PageQueryDto};

/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Offsets are bound as signed 64-bit integers by the database driver.
const MAX_OFFSET: u64 = i64::MAX as u64;

/// A 1-based page request.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub page_no: u64,
    pub page_size: u64,
    pub keyword: Option<String>,
}

impl PageRequest {
    /// Creates a request, clamping page number to at least 1 and size to
    /// `1..=MAX_PAGE_SIZE`.
    pub fn new(page_no: u64, page_size: u64) -> Self {
        Self {
            page_no: page_no.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            keyword: None,
        }
    }

    pub fn from_dto(dto: PageQueryDto) -> Self {
        Self {
            keyword: dto.keyword,
            ..Self::new(dto.page_no, dto.page_size)
        }
    }

    /// Number of rows to skip; saturates for page numbers far past the end.
    pub fn offset(&self) -> u64 {
        (self.page_no - 1)
            .saturating_mul(self.page_size)
            .min(MAX_OFFSET)
    }

    /// Number of rows to take.
    pub fn limit(&self) -> u64 {
        self.page_size
    }

    /// Keyword, or the empty string when none was given.
    pub fn keyword(&self) -> &str {
        self.keyword.as_deref().unwrap_or("")
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

/// One page of items plus paging totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub page_size: u64,
    pub total_count: u64,
    pub total_page: u64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Builds a page; `total_page` is `ceil(total_count / page_size)`.
    pub fn new(total_count: u64, page_size: u64, items: Vec<T>) -> Self {
        let total_page = if page_size > 0 {
            total_count.div_ceil(page_size)
        } else {
            0
        };

        Self {
            page_size,
            total_count,
            total_page,
            items,
        }
    }

    /// Converts the page into its DTO, mapping each item.
    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> PageDto<D> {
        PageDto {
            page_size: self.page_size,
            total_count: self.total_count,
            total_page: self.total_page,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        let page = PageRequest::new(1, 10);

        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn third_page_skips_two_pages() {
        let page = PageRequest::new(3, 20);

        assert_eq!(page.offset(), 40);
        assert_eq!(page.limit(), 20);
    }

    #[test]
    fn page_zero_is_treated_as_first_page() {
        assert_eq!(PageRequest::new(0, 0).offset(), 0);
        assert_eq!(PageRequest::new(0, 0).limit(), 1);
    }

    #[test]
    fn huge_page_number_saturates_offset() {
        let page = PageRequest::new(u64::MAX, 100);

        assert_eq!(page.offset(), i64::MAX as u64);
        assert_eq!(page.limit(), 100);
    }

    #[test]
    fn page_size_is_capped() {
        let dto = PageQueryDto {
            page_no: 2,
            page_size: u64::MAX,
            keyword: None,
        };
        let page = PageRequest::from_dto(dto);

        assert_eq!(page.limit(), MAX_PAGE_SIZE);
        assert_eq!(page.offset(), MAX_PAGE_SIZE);
    }

    #[test]
    fn total_page_rounds_up() {
        assert_eq!(Page::new(21, 10, Vec::<()>::new()).total_page, 3);
        assert_eq!(Page::new(20, 10, Vec::<()>::new()).total_page, 2);
        assert_eq!(Page::new(0, 10, Vec::<()>::new()).total_page, 0);
    }

    #[test]
    fn defaults_apply_to_missing_query_fields() {
        let dto: PageQueryDto = serde_json::from_str("{}").unwrap();
        let page = PageRequest::from_dto(dto);

        assert_eq!(page.page_no, 1);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.keyword(), "");
    }
}

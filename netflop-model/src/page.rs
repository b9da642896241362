/// One page of a paginated catalog listing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogPage<T> {
    pub page: u32,
    pub results: Vec<T>,
    pub total_pages: u32,
    pub total_results: u32,
}

impl<T> CatalogPage<T> {
    pub fn empty(page: u32) -> Self {
        Self {
            page,
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> CatalogPage<U> {
        CatalogPage {
            page: self.page,
            results: self.results.into_iter().map(f).collect(),
            total_pages: self.total_pages,
            total_results: self.total_results,
        }
    }

    pub fn filter_map<U>(self, f: impl FnMut(T) -> Option<U>) -> CatalogPage<U> {
        CatalogPage {
            page: self.page,
            results: self.results.into_iter().filter_map(f).collect(),
            total_pages: self.total_pages,
            total_results: self.total_results,
        }
    }
}

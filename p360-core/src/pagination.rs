/// Number of items shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// One page of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page number after clamping.
    pub page_number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<'a, T> Page<'a, T> {
    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    /// 1-based positions of the first and last item on this page, if any.
    pub fn range(&self, page_size: usize) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page_number - 1) * page_size.max(1) + 1;
        Some((first, first + self.items.len() - 1))
    }
}

/// Slice `items` into the requested page.
///
/// `total_pages` is at least 1 even for an empty list, and `page_number` is
/// clamped into `[1, total_pages]` instead of failing. A `page_size` of 0 is
/// treated as 1.
pub fn paginate<T>(items: &[T], page_size: usize, page_number: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let page_number = page_number.clamp(1, total_pages);

    let start = ((page_number - 1) * page_size).min(total_items);
    let end = (start + page_size).min(total_items);

    Page {
        items: &items[start..end],
        page_number,
        total_pages,
        total_items,
    }
}

use std::fmt;

/// How many page numbers fit in the navigation strip before ellipses kick in.
pub const MAX_VISIBLE_PAGES: u64 = 5;

/// Allowed page sizes for the paginated batch listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Ten,
    TwentyFive,
    Fifty,
    Hundred,
}

impl PageSize {
    pub fn as_u64(self) -> u64 {
        match self {
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

impl TryFrom<u64> for PageSize {
    type Error = u64;

    fn try_from(limit: u64) -> Result<Self, Self::Error> {
        match limit {
            10 => Ok(PageSize::Ten),
            25 => Ok(PageSize::TwentyFive),
            50 => Ok(PageSize::Fifty),
            100 => Ok(PageSize::Hundred),
            other => Err(other),
        }
    }
}

/// One slot in the page-navigation strip: a concrete page number or a
/// non-interactive ellipsis placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Page(u64),
    Ellipsis,
}

impl fmt::Display for PageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageEntry::Page(page) => write!(f, "{page}"),
            PageEntry::Ellipsis => write!(f, "..."),
        }
    }
}

/// The pagination state visible to rendering collaborators. Only the
/// controller mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: u64,
    pub items_per_page: PageSize,
    pub total_pages: u64,
    pub total_records: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: PageSize::default(),
            total_pages: 0,
            total_records: 0,
        }
    }
}

impl PaginationState {
    pub fn page_numbers(&self) -> Vec<PageEntry> {
        page_window(self.total_pages, self.current_page)
    }
}

/// Computes the visible page-number window around `current_page`.
///
/// With at most [`MAX_VISIBLE_PAGES`] pages everything is shown. Beyond
/// that, the window pins the first and last page and collapses the gaps to
/// single ellipses; the three branches are mutually exclusive, so an
/// ellipsis never repeats for adjacent ranges.
pub fn page_window(total_pages: u64, current_page: u64) -> Vec<PageEntry> {
    let mut pages = Vec::new();

    if total_pages <= MAX_VISIBLE_PAGES {
        for page in 1..=total_pages {
            pages.push(PageEntry::Page(page));
        }
    } else if current_page <= 3 {
        for page in 1..=4 {
            pages.push(PageEntry::Page(page));
        }
        pages.push(PageEntry::Ellipsis);
        pages.push(PageEntry::Page(total_pages));
    } else if current_page >= total_pages - 2 {
        pages.push(PageEntry::Page(1));
        pages.push(PageEntry::Ellipsis);
        for page in total_pages - 3..=total_pages {
            pages.push(PageEntry::Page(page));
        }
    } else {
        pages.push(PageEntry::Page(1));
        pages.push(PageEntry::Ellipsis);
        pages.push(PageEntry::Page(current_page - 1));
        pages.push(PageEntry::Page(current_page));
        pages.push(PageEntry::Page(current_page + 1));
        pages.push(PageEntry::Ellipsis);
        pages.push(PageEntry::Page(total_pages));
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageEntry::{Ellipsis, Page};

    #[test]
    fn small_totals_list_every_page() {
        assert_eq!(page_window(3, 1), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            page_window(5, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert!(page_window(0, 1).is_empty());
    }

    #[test]
    fn window_near_the_start() {
        assert_eq!(
            page_window(10, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_window(10, 3),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn window_near_the_end() {
        assert_eq!(
            page_window(10, 9),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(
            page_window(10, 8),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn window_in_the_middle() {
        assert_eq!(
            page_window(10, 5),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn boundary_just_above_the_budget_never_duplicates_pages() {
        // totalPages = 6 exercises every branch adjacency.
        assert_eq!(
            page_window(6, 4),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6)]
        );
        for current in 1..=6 {
            let window = page_window(6, current);
            let mut numbers: Vec<u64> = window
                .iter()
                .filter_map(|entry| match entry {
                    Page(page) => Some(*page),
                    Ellipsis => None,
                })
                .collect();
            let before = numbers.len();
            numbers.dedup();
            assert_eq!(numbers.len(), before, "duplicate page at current={current}");
        }
    }

    #[test]
    fn page_size_round_trips() {
        for limit in [10u64, 25, 50, 100] {
            assert_eq!(PageSize::try_from(limit).unwrap().as_u64(), limit);
        }
        assert!(PageSize::try_from(7).is_err());
    }
}

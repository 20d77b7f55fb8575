//! # Pagination
//!
//! Builds the row of page links shown under a list:
//!
//! ```text
//! Previous  1 … 3 4 [5] 6 7 … 9  Next
//! ```
//!
//! The window of numbered pages is centered on the current page with
//! `shoulder` pages on each side (2 by default). Page 1 and the last page are
//! always reachable: when the window does not already include them they are
//! added as standalone links. Near either end the window is clamped so it
//! never shrinks below `2 * shoulder + 1` pages.
//!
//! When every page fits (`2 * shoulder + 3 >= page_count`) all pages are
//! listed. A single page (or none) produces no links at all.
//!
//! Pages are 1-indexed. Everything here is a pure function of
//! `(page, per_page, total)`.

use serde::Serialize;

pub const DEFAULT_SHOULDER: u64 = 2;
pub const DEFAULT_PREVIOUS_LABEL: &str = "Previous";
pub const DEFAULT_NEXT_LABEL: &str = "Next";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub label: String,
    pub page: u64,
    pub disabled: bool,
    pub active: bool,
}

impl PageLink {
    fn numbered(page: u64, current: u64) -> Self {
        Self {
            label: page.to_string(),
            page,
            disabled: false,
            active: page == current,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub shoulder: u64,
    pub previous_label: String,
    pub next_label: String,
}

impl Pagination {
    pub fn new(page: u64, per_page: u64, total: u64) -> Self {
        Self {
            page,
            per_page,
            total,
            shoulder: DEFAULT_SHOULDER,
            previous_label: DEFAULT_PREVIOUS_LABEL.to_string(),
            next_label: DEFAULT_NEXT_LABEL.to_string(),
        }
    }

    pub fn with_shoulder(mut self, shoulder: u64) -> Self {
        self.shoulder = shoulder;
        self
    }

    pub fn with_labels(mut self, previous: impl Into<String>, next: impl Into<String>) -> Self {
        self.previous_label = previous.into();
        self.next_label = next.into();
        self
    }

    /// Number of pages needed for `total` items; zero when `per_page` is zero.
    pub fn page_count(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page)
    }

    pub fn offset(&self) -> u64 {
        offset(self.page, self.per_page)
    }

    pub fn links(&self) -> Vec<PageLink> {
        let pages = self.window_pages();
        let (Some(&first), Some(&last)) = (pages.first(), pages.last()) else {
            return Vec::new();
        };

        let last_page = self.page_count();
        let mut links = Vec::with_capacity(pages.len() + 4);

        links.push(PageLink {
            label: self.previous_label.clone(),
            page: self.page.saturating_sub(1).max(1).min(last_page),
            disabled: self.page == 1,
            active: false,
        });

        if first > 1 {
            links.push(PageLink::numbered(1, self.page));
        }

        links.extend(pages.iter().map(|&p| PageLink::numbered(p, self.page)));

        if last < last_page {
            links.push(PageLink::numbered(last_page, self.page));
        }

        links.push(PageLink {
            label: self.next_label.clone(),
            page: self.page.saturating_add(1).min(last_page),
            disabled: self.page == last_page,
            active: false,
        });

        links
    }

    /// Numbered pages of the window, before page 1 / last page are added.
    fn window_pages(&self) -> Vec<u64> {
        let last_page = self.page_count();
        if last_page <= 1 {
            return Vec::new();
        }

        // Each shoulder, plus page 1, the current page and the last page
        let width = self.shoulder.saturating_mul(2);
        if width.saturating_add(3) >= last_page {
            return (1..=last_page).collect();
        }

        let lowest = 2;
        let highest = last_page - 1;
        let range_min = self
            .page
            .saturating_sub(self.shoulder)
            .max(lowest)
            .min(highest - width);
        let range_max = self
            .page
            .saturating_add(self.shoulder)
            .min(highest)
            .max(lowest + width);

        (range_min..=range_max).collect()
    }
}

/// Links for `page` of a `total`-item list with the default shoulder and labels.
pub fn compute_links(page: u64, per_page: u64, total: u64) -> Vec<PageLink> {
    Pagination::new(page, per_page, total).links()
}

/// Items to skip to reach `page`. Page 0 is treated like page 1.
pub fn offset(page: u64, per_page: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(label: &str, page: u64) -> PageLink {
        PageLink {
            label: label.to_string(),
            page,
            disabled: false,
            active: false,
        }
    }

    fn active(mut l: PageLink) -> PageLink {
        l.active = true;
        l
    }

    fn disabled(mut l: PageLink) -> PageLink {
        l.disabled = true;
        l
    }

    fn labels(links: &[PageLink]) -> Vec<String> {
        links.iter().map(|l| l.label.clone()).collect()
    }

    #[test]
    fn one_page_has_no_links() {
        assert!(compute_links(1, 10, 10).is_empty());
        assert!(compute_links(1, 10, 0).is_empty());
    }

    #[test]
    fn two_pages() {
        assert_eq!(
            compute_links(1, 10, 20),
            vec![
                disabled(link("Previous", 1)),
                active(link("1", 1)),
                link("2", 2),
                link("Next", 2),
            ]
        );
    }

    #[test]
    fn with_shoulders() {
        assert_eq!(
            compute_links(5, 10, 90),
            vec![
                link("Previous", 4),
                link("1", 1),
                link("3", 3),
                link("4", 4),
                active(link("5", 5)),
                link("6", 6),
                link("7", 7),
                link("9", 9),
                link("Next", 6),
            ]
        );
    }

    #[test]
    fn full_range_when_everything_fits() {
        // 7 pages == 2 * 2 + 3
        let links = compute_links(4, 10, 70);
        assert_eq!(
            labels(&links),
            vec!["Previous", "1", "2", "3", "4", "5", "6", "7", "Next"]
        );
    }

    #[test]
    fn window_clamped_at_start() {
        let links = compute_links(1, 10, 200);
        assert_eq!(
            labels(&links),
            vec!["Previous", "1", "2", "3", "4", "5", "6", "20", "Next"]
        );
        assert!(links[0].disabled);
        assert!(links[1].active);
    }

    #[test]
    fn window_clamped_at_end() {
        let links = compute_links(20, 10, 200);
        assert_eq!(
            labels(&links),
            vec!["Previous", "1", "15", "16", "17", "18", "19", "20", "Next"]
        );
        let next = links.last().unwrap();
        assert!(next.disabled);
        assert_eq!(next.page, 20);
    }

    #[test]
    fn window_never_shrinks_below_full_width() {
        for page in 1..=20 {
            let numbered = compute_links(page, 10, 200)
                .into_iter()
                .filter(|l| l.label.parse::<u64>().is_ok())
                .count();
            // window of 5 plus page 1 and/or page 20 standalone
            assert!(numbered >= 6, "page {} had {} numbered links", page, numbered);
        }
    }

    #[test]
    fn page_far_past_the_end() {
        let links = compute_links(u64::MAX, 10, 100);
        assert_eq!(
            labels(&links),
            vec!["Previous", "1", "5", "6", "7", "8", "9", "10", "Next"]
        );
        assert!(links.iter().all(|l| !l.active));
        assert_eq!(links[0].page, 10);
        assert_eq!(links.last().unwrap().page, 10);
    }

    #[test]
    fn huge_shoulder_lists_every_page() {
        let links = Pagination::new(2, 10, 50).with_shoulder(u64::MAX).links();
        assert_eq!(
            labels(&links),
            vec!["Previous", "1", "2", "3", "4", "5", "Next"]
        );
    }

    #[test]
    fn offset_saturates() {
        assert_eq!(offset(u64::MAX, 10), u64::MAX);
        assert_eq!(offset(0, 10), 0);
        assert_eq!(offset(3, 10), 20);
    }

    #[test]
    fn exactly_one_active_link() {
        for page in 1..=9 {
            let links = compute_links(page, 10, 90);
            assert_eq!(links.iter().filter(|l| l.active).count(), 1);
        }
    }

    #[test]
    fn custom_shoulder_and_labels() {
        let links = Pagination::new(5, 1, 9)
            .with_shoulder(1)
            .with_labels("«", "»")
            .links();
        assert_eq!(
            labels(&links),
            vec!["«", "1", "4", "5", "6", "9", "»"]
        );
    }

    #[test]
    fn zero_per_page_has_no_pages() {
        let p = Pagination::new(1, 0, 50);
        assert_eq!(p.page_count(), 0);
        assert!(p.links().is_empty());
    }

    #[test]
    fn offsets_are_one_indexed() {
        assert_eq!(offset(1, 10), 0);
        assert_eq!(offset(3, 10), 20);
        assert_eq!(offset(0, 10), 0);
        assert_eq!(Pagination::new(2, 25, 100).offset(), 25);
    }
}

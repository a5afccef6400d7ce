//! Page-window computation for paginated catalog listings
//!
//! Given the current page and the total page count, decides which page
//! numbers to show as pagination controls: at most five numbered entries,
//! plus an optional trailing ellipsis and jump-to-last-page entry when the
//! window does not already reach the final page.

/// The bounded set of page numbers to render for a paginated list.
///
/// Produced by [`page_window`]; purely derived, never persisted. All page
/// numbers are within `[1, total_pages]` and the current page is always
/// part of the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Page numbers to show, in ascending order. Empty when there is at
    /// most one page, in which case callers render no controls at all.
    pub pages: Vec<u32>,
    /// Whether a trailing `...` marker should be shown after the window.
    pub show_trailing_ellipsis: bool,
    /// Whether a jump-to-last-page entry should be shown after the marker.
    pub show_last_page_button: bool,
}

impl PageWindow {
    /// The empty window: nothing to render.
    pub fn empty() -> Self {
        Self {
            pages: Vec::new(),
            show_trailing_ellipsis: false,
            show_last_page_button: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Compute the window of page numbers to display.
///
/// The window holds `min(5, total_pages)` consecutive pages: anchored at the
/// start while the current page is within the first three, anchored at the
/// end while it is within the last three, and centered on the current page
/// otherwise. The ellipsis and last-page entry appear whenever the window
/// stops short of the final page.
///
/// Out-of-range `current_page` values are clamped into `[1, total_pages]`
/// rather than rejected. This function is pure and stateless; navigation
/// guards (ignoring clicks while a request is in flight, or to pages outside
/// the valid range) are the caller's responsibility.
pub fn page_window(current_page: u32, total_pages: u32) -> PageWindow {
    if total_pages <= 1 {
        return PageWindow::empty();
    }

    let current = current_page.clamp(1, total_pages);
    let window = total_pages.min(5);

    let start = if total_pages <= 5 || current <= 3 {
        1
    } else if current >= total_pages - 2 {
        total_pages - 4
    } else {
        current - 2
    };

    // Window stops short of the last page, so point at it explicitly.
    let truncated = total_pages > 5 && current < total_pages - 2;

    PageWindow {
        pages: (start..start + window).collect(),
        show_trailing_ellipsis: truncated,
        show_last_page_button: truncated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page_renders_nothing() {
        assert!(page_window(1, 1).is_empty());
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn test_few_pages_show_everything() {
        let window = page_window(3, 4);
        assert_eq!(window.pages, vec![1, 2, 3, 4]);
        assert!(!window.show_trailing_ellipsis);
        assert!(!window.show_last_page_button);
    }

    #[test]
    fn test_start_anchored_window() {
        let window = page_window(1, 10);
        assert_eq!(window.pages, vec![1, 2, 3, 4, 5]);
        assert!(window.show_trailing_ellipsis);
        assert!(window.show_last_page_button);

        // Pages 2 and 3 stay anchored at the start as well.
        assert_eq!(page_window(3, 10).pages, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_centered_window() {
        let window = page_window(5, 10);
        assert_eq!(window.pages, vec![3, 4, 5, 6, 7]);
        assert!(window.show_trailing_ellipsis);
        assert!(window.show_last_page_button);
    }

    #[test]
    fn test_end_anchored_window() {
        let window = page_window(9, 10);
        assert_eq!(window.pages, vec![6, 7, 8, 9, 10]);
        assert!(!window.show_trailing_ellipsis);
        assert!(!window.show_last_page_button);

        // The third-from-last page is the first one that reaches the end.
        let window = page_window(8, 10);
        assert_eq!(window.pages, vec![6, 7, 8, 9, 10]);
        assert!(!window.show_trailing_ellipsis);
    }

    #[test]
    fn test_out_of_range_current_page_is_clamped() {
        assert_eq!(page_window(0, 10).pages, vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(99, 10).pages, vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_current_page_always_in_window() {
        for total in 2..=30 {
            for current in 1..=total {
                let window = page_window(current, total);
                assert!(
                    window.pages.contains(&current),
                    "page {} missing from window for total {}",
                    current,
                    total
                );
                assert!(window.pages.iter().all(|&p| p >= 1 && p <= total));
                assert_eq!(window.pages.len() as u32, total.min(5));
            }
        }
    }
}

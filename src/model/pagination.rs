//! Pagination state and the row window it selects
//!
//! Every navigation command is total: invalid requests leave the state
//! untouched and report `false`.

use std::ops::RangeInclusive;

/// Maximum number of digits accepted by the jump-to-page input
const JUMP_INPUT_MAX_LEN: usize = 6;

/// Page index, page size and the dataset length they apply to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
    total_rows: usize,
    /// Text of the "jump to page" input (1-based page number)
    jump_input: String,
}

impl Pagination {
    /// Create pagination on the first page. A zero page size is bumped to 1.
    pub fn new(page_size: usize, total_rows: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
            total_rows,
            jump_input: "1".to_string(),
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn jump_input(&self) -> &str {
        &self.jump_input
    }

    /// Index of the last page; 0 for an empty dataset
    pub fn last_page_index(&self) -> usize {
        self.total_rows.div_ceil(self.page_size).saturating_sub(1)
    }

    /// Number of pages, never less than 1
    pub fn page_count(&self) -> usize {
        self.last_page_index() + 1
    }

    /// Inclusive range of row indices on the current page, `None` when empty
    pub fn row_window(&self) -> Option<RangeInclusive<usize>> {
        if self.total_rows == 0 {
            return None;
        }
        let from = self.page_index * self.page_size;
        if from >= self.total_rows {
            return None;
        }
        let to = (self.total_rows - 1).min(from + self.page_size - 1);
        Some(from..=to)
    }

    pub fn has_prev(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index < self.last_page_index()
    }

    /// Go to page `n` (0-based). Out-of-range requests change nothing.
    pub fn go_to_page(&mut self, n: usize) -> bool {
        if n > self.last_page_index() {
            log::debug!(
                "go_to_page({}) rejected, last page index is {}",
                n,
                self.last_page_index()
            );
            return false;
        }
        self.page_index = n;
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.page_index -= 1;
        true
    }

    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page_index += 1;
        true
    }

    pub fn first_page(&mut self) -> bool {
        self.go_to_page(0)
    }

    pub fn last_page(&mut self) -> bool {
        self.go_to_page(self.last_page_index())
    }

    /// Change the page size. Always returns to the first page and resets
    /// the jump input, even when the size is unchanged. Zero is rejected.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if size == 0 {
            log::warn!("Rejected page size 0");
            return false;
        }
        self.page_size = size;
        self.page_index = 0;
        self.jump_input = "1".to_string();
        true
    }

    /// Jump to the 1-based page number in `input`.
    ///
    /// Accepted only when it parses as an integer in `1..=last_page_index + 1`.
    pub fn jump_to_page(&mut self, input: &str) -> bool {
        let Ok(page) = input.trim().parse::<i64>() else {
            log::debug!("Jump input '{}' is not a number", input);
            return false;
        };
        if page < 1 || page > self.page_count() as i64 {
            log::debug!("Jump to page {} out of range 1..={}", page, self.page_count());
            return false;
        }
        self.go_to_page(page as usize - 1)
    }

    /// Submit the current jump input
    pub fn submit_jump(&mut self) -> bool {
        let input = self.jump_input.clone();
        self.jump_to_page(&input)
    }

    /// Append a digit to the jump input; other characters are ignored
    pub fn push_jump_char(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() || self.jump_input.len() >= JUMP_INPUT_MAX_LEN {
            return false;
        }
        self.jump_input.push(c);
        true
    }

    pub fn pop_jump_char(&mut self) -> bool {
        self.jump_input.pop().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_page_index_formula() {
        for page_size in 1..=20 {
            for total_rows in 0..=120 {
                let pagination = Pagination::new(page_size, total_rows);
                let expected = if total_rows == 0 {
                    0
                } else {
                    (total_rows + page_size - 1) / page_size - 1
                };
                assert_eq!(pagination.last_page_index(), expected);
            }
        }
    }

    #[test]
    fn test_go_to_page_never_leaves_range() {
        for page_size in 1..=12 {
            for total_rows in [0, 1, 5, 11, 55, 60] {
                let mut pagination = Pagination::new(page_size, total_rows);
                for n in 0..20 {
                    pagination.go_to_page(n);
                    assert!(pagination.page_index() <= pagination.last_page_index());
                    if total_rows > 0 {
                        assert!(pagination.row_window().is_some());
                    }
                }
            }
        }
    }

    #[test]
    fn test_scenario_55_rows_page_size_5() {
        let mut pagination = Pagination::new(5, 55);
        assert_eq!(pagination.last_page_index(), 10);

        assert!(pagination.go_to_page(10));
        assert_eq!(pagination.row_window(), Some(50..=54));

        assert!(!pagination.go_to_page(11));
        assert_eq!(pagination.page_index(), 10);
        assert_eq!(pagination.row_window(), Some(50..=54));
    }

    #[test]
    fn test_partial_last_page() {
        let mut pagination = Pagination::new(10, 55);
        assert!(pagination.last_page());
        assert_eq!(pagination.page_index(), 5);
        assert_eq!(pagination.row_window(), Some(50..=54));
    }

    #[test]
    fn test_set_page_size_resets_page_and_jump_input() {
        let mut pagination = Pagination::new(10, 55);
        pagination.go_to_page(3);
        pagination.push_jump_char('4');
        assert!(pagination.set_page_size(10));
        assert_eq!(pagination.page_index(), 0);
        assert_eq!(pagination.jump_input(), "1");

        pagination.go_to_page(2);
        assert!(pagination.set_page_size(50));
        assert_eq!(pagination.page_index(), 0);
        assert_eq!(pagination.last_page_index(), 1);
    }

    #[test]
    fn test_set_page_size_zero_rejected() {
        let mut pagination = Pagination::new(5, 55);
        pagination.go_to_page(2);
        assert!(!pagination.set_page_size(0));
        assert_eq!(pagination.page_size(), 5);
        assert_eq!(pagination.page_index(), 2);
    }

    #[test]
    fn test_jump_to_page_validation() {
        let mut pagination = Pagination::new(5, 55);
        assert!(pagination.jump_to_page("11"));
        assert_eq!(pagination.page_index(), 10);
        assert!(pagination.jump_to_page(" 1 "));
        assert_eq!(pagination.page_index(), 0);

        for bad in ["0", "12", "-3", "abc", "", "2.5"] {
            assert!(!pagination.jump_to_page(bad), "input {:?}", bad);
            assert_eq!(pagination.page_index(), 0);
        }
    }

    #[test]
    fn test_jump_input_editing() {
        let mut pagination = Pagination::new(5, 55);
        assert!(pagination.pop_jump_char());
        assert!(!pagination.pop_jump_char());
        assert!(!pagination.push_jump_char('x'));
        assert!(pagination.push_jump_char('7'));
        assert!(pagination.submit_jump());
        assert_eq!(pagination.page_index(), 6);

        for _ in 0..10 {
            pagination.push_jump_char('9');
        }
        assert_eq!(pagination.jump_input().len(), JUMP_INPUT_MAX_LEN);
        assert!(!pagination.submit_jump());
        assert_eq!(pagination.page_index(), 6);
    }

    #[test]
    fn test_prev_next_boundaries() {
        let mut pagination = Pagination::new(20, 55);
        assert!(!pagination.prev_page());
        assert!(pagination.next_page());
        assert!(pagination.next_page());
        assert!(!pagination.next_page());
        assert_eq!(pagination.page_index(), 2);
        assert!(pagination.prev_page());
        assert_eq!(pagination.page_index(), 1);
    }

    #[test]
    fn test_empty_dataset() {
        let mut pagination = Pagination::new(5, 0);
        assert_eq!(pagination.last_page_index(), 0);
        assert_eq!(pagination.row_window(), None);
        assert!(!pagination.has_prev());
        assert!(!pagination.has_next());
        assert!(!pagination.next_page());
        assert!(!pagination.prev_page());
        assert!(pagination.go_to_page(0));
        assert!(pagination.jump_to_page("1"));
        assert!(!pagination.jump_to_page("2"));
    }
}

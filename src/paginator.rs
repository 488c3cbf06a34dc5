//! Page arithmetic and the page indicator.
//!
//! The paginator does not own any content. It only tracks how many entries fit
//! on a page, which page is current, and renders the indicator shown below a
//! paginated view.
//!
//! ```rust
//! use orvyn::paginator::{Model, Type};
//!
//! let mut paginator = Model::new().with_type(Type::Arabic);
//! paginator.set_per_page(10);
//! paginator.set_total_items(42);
//!
//! assert_eq!(paginator.total_pages, 5);
//! assert_eq!(paginator.locate(23), (2, 3));
//!
//! paginator.page = 2;
//! assert_eq!(paginator.get_slice_bounds(42), (20, 30));
//! assert_eq!(paginator.view(), "3/5");
//! ```

/// How the page indicator is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    /// `2/5`
    Arabic,
    /// `○ • ○ ○ ○`
    #[default]
    Dots,
}

/// Page state of a paginated view.
///
/// The owner sets the page size with [`set_per_page`](Model::set_per_page)
/// and the entry count with [`set_total_items`](Model::set_total_items);
/// everything else is derived.
#[derive(Debug, Clone)]
pub struct Model {
    /// Indicator style.
    pub paginator_type: Type,
    /// Zero-based current page.
    pub page: usize,
    /// Entries per page, always at least 1.
    pub per_page: usize,
    /// Always at least 1, even with no entries.
    pub total_pages: usize,
    /// Glyph for the current page in [`Type::Dots`] mode.
    pub active_dot: String,
    /// Glyph for the other pages in [`Type::Dots`] mode.
    pub inactive_dot: String,
    /// Format of [`Type::Arabic`] mode. The first `%d` is the current page,
    /// the second the page count.
    pub arabic_format: String,
}

impl Default for Model {
    /// A single empty page drawn as dots, one entry per page.
    fn default() -> Self {
        Self {
            paginator_type: Type::default(),
            page: 0,
            per_page: 1,
            total_pages: 1,
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            arabic_format: "%d/%d".to_string(),
        }
    }
}

impl Model {
    /// Creates a paginator with the default settings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orvyn::paginator::{Model, Type};
    ///
    /// let paginator = Model::new();
    /// assert_eq!(paginator.paginator_type, Type::Dots);
    /// assert_eq!(paginator.page, 0);
    /// assert_eq!(paginator.total_pages, 1);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indicator style (builder pattern).
    pub fn with_type(mut self, paginator_type: Type) -> Self {
        self.paginator_type = paginator_type;
        self
    }

    /// Sets the page size. Zero is raised to 1.
    ///
    /// The page count is not recomputed; call
    /// [`set_total_items`](Model::set_total_items) afterwards.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Replaces both dot glyphs, usually with pre-styled strings.
    pub fn set_dots(&mut self, active: String, inactive: String) {
        self.active_dot = active;
        self.inactive_dot = inactive;
    }

    /// Derives the page count from an entry count and clamps the current page.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orvyn::paginator::Model;
    ///
    /// let mut paginator = Model::new();
    /// paginator.set_per_page(4);
    /// paginator.set_total_items(9);
    /// paginator.page = 2;
    ///
    /// paginator.set_total_items(5);
    /// assert_eq!(paginator.total_pages, 2);
    /// assert_eq!(paginator.page, 1);
    /// ```
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = items.div_ceil(self.per_page).max(1);

        if self.page >= self.total_pages {
            self.page = self.total_pages - 1;
        }
    }

    /// Half-open range of entry positions shown on the current page.
    ///
    /// Both bounds are clamped to `length`, so the range is always safe to
    /// slice with.
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = (self.page * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Number of entries on the current page.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        let (start, end) = self.get_slice_bounds(total_items);
        end - start
    }

    /// Page and in-page offset of an entry position.
    pub fn locate(&self, position: usize) -> (usize, usize) {
        (position / self.per_page, position % self.per_page)
    }

    /// Goes back one page, stopping at the first.
    pub fn prev_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
        }
    }

    /// Goes forward one page, stopping at the last.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Whether the current page is the first.
    pub fn on_first_page(&self) -> bool {
        self.page == 0
    }

    /// Whether the current page is the last.
    pub fn on_last_page(&self) -> bool {
        self.page + 1 >= self.total_pages
    }

    /// Renders the indicator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orvyn::paginator::Model;
    ///
    /// let mut paginator = Model::new();
    /// paginator.set_per_page(2);
    /// paginator.set_total_items(6);
    /// paginator.page = 1;
    ///
    /// assert_eq!(paginator.view(), "○ • ○");
    /// ```
    pub fn view(&self) -> String {
        match self.paginator_type {
            Type::Arabic => self
                .arabic_format
                .replacen("%d", &(self.page + 1).to_string(), 1)
                .replacen("%d", &self.total_pages.to_string(), 1),
            Type::Dots => (0..self.total_pages)
                .map(|i| {
                    if i == self.page {
                        self.active_dot.as_str()
                    } else {
                        self.inactive_dot.as_str()
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

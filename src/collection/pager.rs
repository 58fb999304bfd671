use super::Collection;

impl<T: Clone> Collection<T> {
    /// A page is addressable when it is 1-based and holds at least one
    /// element; the trailing partial page counts.
    pub fn is_page_allowed(&self, page: usize) -> bool {
        page >= 1 && (page - 1) * self.page_size < self.slots.len()
    }

    /// Output-prepared slice for page `page`, or `None` when the page is out
    /// of range.
    pub fn page(&self, page: usize) -> Option<Vec<T>> {
        if !self.is_page_allowed(page) {
            return None;
        }
        let (start, end) = self.page_bounds(page);
        Some(
            (start..end)
                .map(|index| self.prepare_output(Some(index), self.slots[index].value.clone()))
                .collect(),
        )
    }

    pub fn first_page(&self) -> Option<Vec<T>> {
        self.page(1)
    }

    pub fn last_page(&self) -> Option<Vec<T>> {
        self.page(self.page_count())
    }

    pub fn page_count(&self) -> usize {
        self.slots.len().div_ceil(self.page_size)
    }

    /// Advance the page cursor; silently stays put at the last page.
    pub fn next_page(&mut self) -> &mut Self {
        if self.is_page_allowed(self.current_page + 1) {
            self.current_page += 1;
        }
        self
    }

    /// Retreat the page cursor; silently stays put at page 1.
    pub fn previous_page(&mut self) -> &mut Self {
        if self.current_page > 1 && self.is_page_allowed(self.current_page - 1) {
            self.current_page -= 1;
        }
        self
    }

    /// Page after the cursor, without moving it.
    pub fn peek_next_page(&self) -> Option<Vec<T>> {
        self.page(self.current_page + 1)
    }

    /// Page before the cursor, without moving it.
    pub fn peek_previous_page(&self) -> Option<Vec<T>> {
        self.current_page
            .checked_sub(1)
            .and_then(|page| self.page(page))
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn set_current_page(&mut self, page: usize) -> &mut Self {
        self.current_page = page.max(1);
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Pages hold at least one element; zero is ignored.
    pub fn set_page_size(&mut self, size: usize) -> &mut Self {
        if size >= 1 {
            self.page_size = size;
        }
        self
    }

    /// Page-granular write: assign each provided value to the corresponding
    /// index of page `page`, stopping early when either the values or the
    /// page run out. Values pass through the usual change pipeline.
    pub fn set_page(&mut self, page: usize, values: Vec<T>) -> &mut Self {
        if !self.is_page_allowed(page) {
            return self;
        }
        let (start, end) = self.page_bounds(page);
        for (offset, value) in values.into_iter().enumerate() {
            let index = start + offset;
            if index >= end {
                break;
            }
            self.change(index, value);
        }
        self
    }

    /// Delete every element of page `page`. Walks the page backwards so the
    /// renumbering done by each removal cannot skew the walk.
    pub fn remove_page(&mut self, page: usize) -> &mut Self {
        if !self.is_page_allowed(page) {
            return self;
        }
        let (start, end) = self.page_bounds(page);
        for index in (start..end).rev() {
            self.remove(index);
        }
        self
    }

    fn page_bounds(&self, page: usize) -> (usize, usize) {
        let start = (page - 1) * self.page_size;
        (start, (start + self.page_size).min(self.slots.len()))
    }
}

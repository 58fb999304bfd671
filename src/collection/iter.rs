use super::Collection;

impl<T: Clone> Collection<T> {
    /// Iterate elements in index order as `(index, prepared element)`.
    ///
    /// Restartable by calling `iter` again.
    pub fn iter(&self) -> Elements<'_, T> {
        Elements {
            collection: self,
            index: 0,
        }
    }

    /// Iterate pages from page 1 as `(page number, prepared page)`.
    pub fn pages(&self) -> Pages<'_, T> {
        Pages {
            collection: self,
            page: 1,
        }
    }
}

/// Forward cursor over the elements of a collection.
pub struct Elements<'a, T> {
    collection: &'a Collection<T>,
    index: usize,
}

impl<T: Clone> Iterator for Elements<'_, T> {
    type Item = (usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index;
        let value = self.collection.get(index)?;
        self.index += 1;
        Some((index, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.collection.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Elements<'_, T> {}

/// Forward cursor over the pages of a collection.
pub struct Pages<'a, T> {
    collection: &'a Collection<T>,
    page: usize,
}

impl<T: Clone> Iterator for Pages<'_, T> {
    type Item = (usize, Vec<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let page = self.page;
        let items = self.collection.page(page)?;
        self.page += 1;
        Some((page, items))
    }
}

impl<'a, T: Clone> IntoIterator for &'a Collection<T> {
    type Item = (usize, T);
    type IntoIter = Elements<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

use crate::domain::model::Element;
use std::cmp::Ordering;
use std::ops::Index;

/// An ordered sequence of [`Element`] values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Elements {
    items: Vec<Element>,
}

/// Comparator ordering elements by the float attribute `key`, largest first.
///
/// Missing or non-float attributes compare as `0.0`. Uses `f64::total_cmp`, so a
/// positive NaN ranks above every number.
pub fn compare_float64_desc(key: &str) -> impl Fn(&Element, &Element) -> Ordering + '_ {
    move |a: &Element, b: &Element| b.get_float64(key).total_cmp(&a.get_float64(key))
}

impl Elements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, element: Element) {
        self.items.push(element);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Element> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[Element] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Element> {
        self.items
    }

    pub fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
    }

    /// Sorts in place by the float attribute `key`, descending.
    ///
    /// The sort is stable, so elements with equal scores keep their relative order.
    pub fn sort_by_float64_desc(&mut self, key: &str) -> &mut Self {
        tracing::debug!("Sorting {} elements by '{}' desc", self.items.len(), key);
        self.items.sort_by(compare_float64_desc(key));
        self
    }

    /// Returns a new sequence holding the elements for which `f` returns true.
    ///
    /// The source is left untouched and relative order is preserved.
    pub fn filter<F>(&self, mut f: F) -> Elements
    where
        F: FnMut(&Element) -> bool,
    {
        let mut filtered = Elements::with_capacity(self.items.len());
        for element in &self.items {
            if f(element) {
                filtered.push(element.clone());
            }
        }

        tracing::debug!("Filter kept {} of {} elements", filtered.len(), self.items.len());
        filtered
    }

    /// Replaces every element, in order, with the result of `f`.
    pub fn map<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(Element) -> Element,
    {
        for slot in self.items.iter_mut() {
            let element = std::mem::take(slot);
            *slot = f(element);
        }

        tracing::debug!("Mapped {} elements", self.items.len());
        self
    }
}

impl Index<usize> for Elements {
    type Output = Element;

    fn index(&self, index: usize) -> &Element {
        &self.items[index]
    }
}

impl From<Vec<Element>> for Elements {
    fn from(items: Vec<Element>) -> Self {
        Self { items }
    }
}

impl FromIterator<Element> for Elements {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Element> for Elements {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for Elements {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Elements {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

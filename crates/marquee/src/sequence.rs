//! Seamless loop composition
//!
//! The strip holds the item list repeated `copies` times, back to back and in
//! the same order. The scroll travels -50% of the strip's width per cycle, so
//! with at least two copies there is always repeated content sliding in from
//! the right when the cycle restarts; the default of three copies leaves a
//! margin against sub-pixel rounding and clipped items at wide viewports.
//!
//! The sequence is a pure view over the caller's items and is recomputed on
//! every render.

use crate::config::CarouselItem;

/// One position in the rendered strip
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderedItem<'a> {
    /// Which repetition of the list this belongs to
    pub copy: usize,
    /// Position inside the caller's list
    pub index: usize,
    pub item: &'a CarouselItem,
}

impl RenderedItem<'_> {
    /// Element key, unique among siblings even though sources repeat
    pub fn key(&self) -> String {
        format!("{}-{}", self.copy, self.index)
    }
}

/// The item list repeated `copies` times
#[derive(Clone, Copy, Debug)]
pub struct RenderedSequence<'a> {
    items: &'a [CarouselItem],
    copies: usize,
}

impl<'a> RenderedSequence<'a> {
    pub fn len(&self) -> usize {
        self.items.len() * self.copies
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn copies(&self) -> usize {
        self.copies
    }

    /// Entries in strip order
    pub fn iter(&self) -> impl Iterator<Item = RenderedItem<'a>> + 'a {
        let items = self.items;
        (0..self.copies).flat_map(move |copy| {
            items
                .iter()
                .enumerate()
                .map(move |(index, item)| RenderedItem { copy, index, item })
        })
    }
}

impl<'a> IntoIterator for RenderedSequence<'a> {
    type Item = RenderedItem<'a>;
    type IntoIter = Box<dyn Iterator<Item = RenderedItem<'a>> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Repeat `items` `copies` times
pub fn compose(items: &[CarouselItem], copies: usize) -> RenderedSequence<'_> {
    RenderedSequence { items, copies }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn item(name: &str) -> CarouselItem {
        CarouselItem::new(format!("{name}.png"), name)
    }

    fn alts(seq: RenderedSequence<'_>) -> Vec<String> {
        seq.iter().map(|r| r.item.alt_text.clone()).collect()
    }

    #[test]
    fn test_two_items_tripled() {
        let items = vec![item("X"), item("Y")];
        let seq = compose(&items, 3);
        assert_eq!(seq.len(), 6);
        assert_eq!(alts(seq), ["X", "Y", "X", "Y", "X", "Y"]);
    }

    #[test]
    fn test_three_items_tripled() {
        let items = vec![item("X"), item("Y"), item("Z")];
        let seq = compose(&items, 3);
        assert_eq!(seq.len(), 9);
        assert_eq!(
            alts(seq),
            ["X", "Y", "Z", "X", "Y", "Z", "X", "Y", "Z"]
        );
    }

    #[test]
    fn test_keys_distinguish_duplicates() {
        let items = vec![item("X"), item("X")];
        let seq = compose(&items, 3);
        let keys: Vec<_> = seq.iter().map(|r| r.key()).collect();
        assert_eq!(keys, ["0-0", "0-1", "1-0", "1-1", "2-0", "2-1"]);
    }

    #[test]
    fn test_empty_list_is_empty() {
        let seq = compose(&[], 3);
        assert!(seq.is_empty());
        assert_eq!(seq.iter().count(), 0);
    }

    #[test]
    fn test_into_iterator() {
        let items = vec![item("X")];
        let copies: Vec<_> = compose(&items, 2).into_iter().map(|r| r.copy).collect();
        assert_eq!(copies, [0, 1]);
    }

    proptest! {
        #[test]
        fn prop_sequence_is_items_repeated(
            names in prop::collection::vec("[A-Z]{1,3}", 1..12),
            copies in 2usize..6,
        ) {
            let items: Vec<_> = names.iter().map(|n| item(n)).collect();
            let seq = compose(&items, copies);
            prop_assert_eq!(seq.len(), copies * items.len());

            let rendered: Vec<_> = seq.iter().map(|r| r.item.clone()).collect();
            let expected: Vec<_> = items.iter().cycle().take(copies * items.len()).cloned().collect();
            prop_assert_eq!(rendered, expected);

            let keys: HashSet<_> = seq.iter().map(|r| r.key()).collect();
            prop_assert_eq!(keys.len(), seq.len());
        }
    }
}

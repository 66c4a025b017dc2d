use std::collections::HashSet;
use std::hash::Hash;

/// Deduplicated labels for one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet<L: Eq + Hash> {
    labels: HashSet<L>,
}

impl<L: Eq + Hash> LabelSet<L> {
    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
    {
        Self {
            labels: labels.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &L) -> bool {
        self.labels.contains(label)
    }

    /// Size of the intersection; iterates the smaller set.
    pub fn intersection_len(&self, other: &Self) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.labels.iter().filter(|l| large.contains(l)).count()
    }
}

impl<L: Eq + Hash> FromIterator<L> for LabelSet<L> {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        Self::from_labels(iter)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/labels.rs"]
mod tests;

/// Relation merging and transitive closure.
///
/// [`merge_relation`] combines the relations two rankings assign to one
/// ordered pair:
///
/// | first \ second | before | after | same   | unknown |
/// |----------------|--------|-------|--------|---------|
/// | before         | before | tie   | before | -       |
/// | after          | tie    | after | after  | -       |
/// | same           | before | after | -      | -       |
/// | unknown        | -      | -     | -      | -       |
///
/// `tie` is resolved by the [`TieBreak`] policy and `-` means no constraint.
///
/// [`RelationMap`] stores the resulting BEFORE edges as a dense boolean
/// matrix over [`ElementSet`] ordinals and closes it transitively
/// (Floyd-Warshall reachability).
use crate::ranking::ElementSet;
use crate::relation::{ElementRelation, RelationModel};

/// Resolution of a pair ordered BEFORE by one ranking and AFTER by the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Use the first ranking's direction.
    #[default]
    FirstRanking,
    /// Use the second ranking's direction.
    SecondRanking,
    /// Record no constraint for the pair.
    Ignore,
}

/// Merges the relations two rankings give the ordered pair `(a, b)`.
///
/// Returns `Some(Before)` or `Some(After)` when the pair is constrained and
/// `None` otherwise. Never returns `Same` or `Unknown`.
pub fn merge_relation(
    first: ElementRelation,
    second: ElementRelation,
    tie_break: TieBreak,
) -> Option<ElementRelation> {
    use ElementRelation::{After, Before, Same, Unknown};

    match (first, second) {
        (Unknown, _) | (_, Unknown) | (Same, Same) => None,
        (Before, Before) | (Before, Same) | (Same, Before) => Some(Before),
        (After, After) | (After, Same) | (Same, After) => Some(After),
        (Before, After) | (After, Before) => match tie_break {
            TieBreak::FirstRanking => Some(first),
            TieBreak::SecondRanking => Some(second),
            TieBreak::Ignore => None,
        },
    }
}

/// The merged, transitively closed BEFORE relation over an element set.
///
/// Immutable once built; every constructor closes the relation before
/// returning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationMap {
    elements: ElementSet,
    /// `before[i][j]` is `true` when element `i` precedes element `j`.
    before: Vec<Vec<bool>>,
}

impl RelationMap {
    /// Merges two relation models over `elements` and closes the result.
    pub fn merge(
        elements: ElementSet,
        first: &RelationModel,
        second: &RelationModel,
        tie_break: TieBreak,
    ) -> Self {
        let mut map = Self::empty(elements);
        let n = map.elements.len();

        for i in 0..n {
            for j in (i + 1)..n {
                let a = map.elements.labels()[i].as_str();
                let b = map.elements.labels()[j].as_str();
                match merge_relation(first.relation(a, b), second.relation(a, b), tie_break) {
                    Some(ElementRelation::Before) => map.before[i][j] = true,
                    Some(ElementRelation::After) => map.before[j][i] = true,
                    Some(ElementRelation::Same | ElementRelation::Unknown) | None => {}
                }
            }
        }

        let direct = map.edge_count();
        map.close();
        tracing::debug!(
            elements = n,
            direct_edges = direct,
            closed_edges = map.edge_count(),
            "merged relation map"
        );
        map
    }

    /// Builds a map from explicit `(before, after)` label pairs and closes it.
    ///
    /// Pairs naming a label outside `elements` are ignored. Unlike
    /// [`RelationMap::merge`] this can describe cyclic relations.
    pub fn from_pairs<'a, I>(elements: ElementSet, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut map = Self::empty(elements);
        for (a, b) in pairs {
            if let (Some(i), Some(j)) = (map.elements.ordinal(a), map.elements.ordinal(b)) {
                map.before[i][j] = true;
            }
        }
        map.close();
        map
    }

    fn empty(elements: ElementSet) -> Self {
        let n = elements.len();
        Self {
            elements,
            before: vec![vec![false; n]; n],
        }
    }

    /// Floyd-Warshall reachability: after this, `i → k → j` implies `i → j`.
    fn close(&mut self) {
        let n = self.before.len();
        for k in 0..n {
            for i in 0..n {
                if !self.before[i][k] {
                    continue;
                }
                for j in 0..n {
                    if self.before[k][j] {
                        self.before[i][j] = true;
                    }
                }
            }
        }
    }

    /// The element set the map is indexed by.
    pub fn elements(&self) -> &ElementSet {
        &self.elements
    }

    /// Returns `true` if `a` precedes `b`. Unknown labels are unconstrained.
    pub fn is_before(&self, a: &str, b: &str) -> bool {
        match (self.elements.ordinal(a), self.elements.ordinal(b)) {
            (Some(i), Some(j)) => self.before[i][j],
            _ => false,
        }
    }

    /// Merged relation of `a` to `b`.
    ///
    /// [`ElementRelation::Unknown`] means the pair is unconstrained. If the
    /// relation is cyclic and both directions hold, `Before` is reported.
    pub fn relation(&self, a: &str, b: &str) -> ElementRelation {
        if self.is_before(a, b) {
            ElementRelation::Before
        } else if self.is_before(b, a) {
            ElementRelation::After
        } else {
            ElementRelation::Unknown
        }
    }

    /// Ordinals of the elements that ordinal `i` precedes.
    pub fn successors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.before
            .get(i)
            .into_iter()
            .flat_map(|row| row.iter().enumerate().filter(|(_, b)| **b).map(|(j, _)| j))
    }

    /// Number of elements that precede ordinal `i`.
    pub fn predecessor_count(&self, i: usize) -> usize {
        self.before
            .iter()
            .filter(|row| row.get(i).copied().unwrap_or(false))
            .count()
    }

    /// Number of BEFORE edges, counting self-loops.
    pub fn edge_count(&self) -> usize {
        self.before
            .iter()
            .map(|row| row.iter().filter(|b| **b).count())
            .sum()
    }

    /// All BEFORE pairs as `(before, after)` labels, in ordinal order.
    pub fn before_pairs(&self) -> Vec<(&str, &str)> {
        let labels = self.elements.labels();
        let mut pairs = Vec::new();
        for (i, a) in labels.iter().enumerate() {
            for j in self.successors(i) {
                pairs.push((a.as_str(), labels[j].as_str()));
            }
        }
        pairs
    }

    /// Elements that precede themselves, i.e. lie on a cycle.
    ///
    /// Always empty for maps built by [`RelationMap::merge`].
    pub fn cyclic_elements(&self) -> Vec<&str> {
        self.elements
            .labels()
            .iter()
            .enumerate()
            .filter(|(i, _)| self.before[*i][*i])
            .map(|(_, label)| label.as_str())
            .collect()
    }

    /// Checks that `i → j` and `j → k` imply `i → k` for every triple.
    pub fn is_transitive(&self) -> bool {
        let n = self.before.len();
        (0..n).all(|i| {
            (0..n).all(|j| {
                !self.before[i][j] || (0..n).all(|k| !self.before[j][k] || self.before[i][k])
            })
        })
    }
}

use std::hash::{Hash, Hasher};

/// A bonded neighbor: the peer's element symbol and the order of the bond
/// linking it to the classified atom.
///
/// Bond orders come straight out of a connectivity matrix and can be
/// fractional, so they stay `f64`. Identity is bitwise, consistent with the
/// exact float comparison used for atom equality.
#[derive(Debug, Clone)]
pub struct Link {
    pub element: String,
    pub order: f64,
}

impl Link {
    pub fn new(element: &str, order: f64) -> Self {
        Link {
            element: element.to_string(),
            order,
        }
    }
}

impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element && self.order.to_bits() == other.order.to_bits()
    }
}
impl Eq for Link {}

impl Hash for Link {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.element.hash(state);
        self.order.to_bits().hash(state);
    }
}

/// Canonical multiset of an atom's bonded neighbors.
///
/// Entries are `(link, count)` pairs sorted most-common-first; among equal
/// counts the link that was encountered first comes first. The representation
/// is frozen at construction, so two atoms with the same neighborhood compare
/// and hash identically regardless of the order their peers were listed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Connectivity {
    entries: Vec<(Link, usize)>,
}

impl Connectivity {
    pub fn from_links(links: &[Link]) -> Self {
        let mut entries: Vec<(Link, usize)> = Vec::new();
        for link in links {
            match entries.iter().position(|(seen, _)| seen == link) {
                Some(pos) => entries[pos].1 += 1,
                None => entries.push((link.clone(), 1)),
            }
        }
        // stable sort keeps first-occurrence order among equal counts
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Connectivity { entries }
    }

    pub fn entries(&self) -> &[(Link, usize)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Classification key for an atom: its element plus its canonical
/// neighborhood. Atoms sharing a kind are chemically equivalent for
/// parameter-assignment purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtomKind {
    pub element: String,
    pub connectivity: Connectivity,
}

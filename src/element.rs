use phf::phf_map;

/// Per-element data backing the symbol and atomic-number lookups.
///
/// Only the elements the charge models currently parameterize are listed.
/// Anything else falls through to the caller's sentinel handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementData {
    pub symbol: &'static str,
    pub atomic_number: u32,
    pub valence_electrons: u32,
    pub total_electrons: u32,
}

/// Keys are lowercase symbols; use [`lookup`] for case-insensitive access.
static ELEMENTS: phf::Map<&'static str, ElementData> = phf_map! {
    "h" => ElementData {
        symbol: "H",
        atomic_number: 1,
        valence_electrons: 1,
        total_electrons: 1,
    },
    "c" => ElementData {
        symbol: "C",
        atomic_number: 6,
        valence_electrons: 4,
        total_electrons: 6,
    },
    "n" => ElementData {
        symbol: "N",
        atomic_number: 7,
        valence_electrons: 5,
        total_electrons: 7,
    },
    "o" => ElementData {
        symbol: "O",
        atomic_number: 8,
        valence_electrons: 6,
        total_electrons: 8,
    },
};

/// Case-insensitive symbol lookup.
pub fn lookup(symbol: &str) -> Option<&'static ElementData> {
    ELEMENTS.get(symbol.to_lowercase().as_str())
}

pub fn by_atomic_number(num: u32) -> Option<&'static ElementData> {
    ELEMENTS.values().find(|e| e.atomic_number == num)
}

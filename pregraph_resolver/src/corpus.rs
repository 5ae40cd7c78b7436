use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ResolverError, Result};

const FILE_PREFIX: &str = "underlying_";
const FILE_SUFFIX: &str = ".g6";

/// Connected graphs with maximum degree 3 (`geng -c -D3 4`).
const BUILTIN_4: &[&str] = &["CF", "CU", "CV", "C]", "C^", "C~"];

/// Connected graphs with maximum degree 3 (`geng -c -D3 5`).
const BUILTIN_5: &[&str] = &[
    "DCw", "DEw", "DEk", "DFw", "DQo", "DQw", "DUW", "DUw", "DTw", "D]w",
];

/// Underlying graphs in graph6, keyed by orbit count. Read-only once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
    graphs: BTreeMap<usize, Vec<String>>,
}

impl Corpus {
    pub fn new() -> Self {
        Corpus::default()
    }

    /// The graphs for 4 and 5 orbits.
    pub fn builtin() -> Self {
        Corpus::from_entries([
            (4, BUILTIN_4.iter().map(|s| s.to_string()).collect()),
            (5, BUILTIN_5.iter().map(|s| s.to_string()).collect()),
        ])
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (usize, Vec<String>)>) -> Self {
        Corpus {
            graphs: entries.into_iter().collect(),
        }
    }

    /// Reads every `underlying_<n>.g6` file in `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut graphs = BTreeMap::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let Some(orbits) = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(orbit_count_from_file_name)
            else {
                continue;
            };
            let encodings = parse_listing(&fs::read_to_string(&path)?);
            debug!(path = %path.display(), orbits, graphs = encodings.len(), "loaded corpus file");
            graphs.insert(orbits, encodings);
        }
        info!(dir = %dir.display(), entries = graphs.len(), "scanned corpus directory");
        Ok(Corpus { graphs })
    }

    /// Entries of `other` replace entries of `self` with the same key.
    pub fn merged_with(mut self, other: Corpus) -> Self {
        self.graphs.extend(other.graphs);
        self
    }

    pub fn graphs(&self, orbits: usize) -> Result<&[String]> {
        self.graphs
            .get(&orbits)
            .map(Vec::as_slice)
            .ok_or(ResolverError::MissingCorpus(orbits))
    }

    pub fn orbit_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.graphs.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }
}

/// Orbit count encoded in a corpus file name, for names matching exactly
/// `underlying_<digits>.g6`.
pub fn orbit_count_from_file_name(name: &str) -> Option<usize> {
    let digits = name.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_SUFFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Non-blank lines, trimmed.
pub fn parse_listing(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

use std::path::PathBuf;

use crate::certifier::SearchPolicy;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::feasibility::IlpSolver;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolverConfig {
    pub policy: SearchPolicy,
    /// Certify pregraphs on the rayon pool. Output order is unaffected.
    pub parallel: bool,
    /// Directory scanned for `underlying_<n>.g6` files.
    pub data_dir: Option<PathBuf>,
    /// Start from the built-in corpus for 4 and 5 orbits.
    pub include_builtin: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            policy: SearchPolicy::FirstSuccess,
            parallel: false,
            data_dir: None,
            include_builtin: true,
        }
    }
}

impl ResolverConfig {
    /// Built-in entries, overridden by whatever the data directory holds.
    pub fn load_corpus(&self) -> Result<Corpus> {
        let base = if self.include_builtin {
            Corpus::builtin()
        } else {
            Corpus::new()
        };
        match &self.data_dir {
            Some(dir) => Ok(base.merged_with(Corpus::from_dir(dir)?)),
            None => Ok(base),
        }
    }

    pub fn solver(&self) -> IlpSolver {
        IlpSolver
    }
}

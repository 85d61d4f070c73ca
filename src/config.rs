use crate::prelude::*;

/// Which bundled solver answers solve requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverKind {
    Iddfs,
    Mitm,
}

impl core::str::FromStr for SolverKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<SolverKind> {
        match s {
            "iddfs" => Ok(SolverKind::Iddfs),
            "mitm" => Ok(SolverKind::Mitm),
            _ => Err(anyhow::anyhow!(
                "Unrecognized solver {}, expected iddfs or mitm",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveConfig {
    pub solver: SolverKind,
    /// Longest solution the solver will look for.
    pub max_depth: u8,
}

impl Default for SolveConfig {
    fn default() -> Self {
        SolveConfig {
            solver: SolverKind::Mitm,
            max_depth: 8,
        }
    }
}

impl SolveConfig {
    pub fn solver(&self) -> Box<dyn Solver> {
        match self.solver {
            SolverKind::Iddfs => Box::new(NaiveIddfs::new(self.max_depth)),
            SolverKind::Mitm => Box::new(Mitm::new(self.max_depth)),
        }
    }
}

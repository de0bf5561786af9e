pub mod exhaustive;
pub mod greedy;

use anyhow::{anyhow, Result};
use maxdefense_challenges::{Challenge, Selection};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Greedy,
    Exhaustive,
}

impl Solver {
    pub const ALL: [Solver; 2] = [Solver::Greedy, Solver::Exhaustive];

    pub fn solve(&self, challenge: &Challenge) -> Result<Selection> {
        match self {
            Solver::Greedy => greedy::solve_challenge(challenge),
            Solver::Exhaustive => exhaustive::solve_challenge(challenge),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Solver::Greedy => "greedy",
            Solver::Exhaustive => "exhaustive",
        }
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Solver {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "greedy" => Ok(Solver::Greedy),
            "exhaustive" => Ok(Solver::Exhaustive),
            _ => Err(anyhow!("Unknown algorithm '{}'", s)),
        }
    }
}

use rand::rngs::SmallRng;
use rand::Rng;

use crate::player::{Player, PlayerView};

/// How the computer picks cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Targeting {
    /// Uniform over every cell; repeats are possible and get re-sampled.
    Naive,
    /// Uniform over cells not yet guessed.
    #[default]
    Fresh,
}

/// Computer opponent guessing at random.
#[derive(Debug, Clone, Default)]
pub struct AiPlayer {
    targeting: Targeting,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_targeting(targeting: Targeting) -> Self {
        Self { targeting }
    }

    pub fn targeting(&self) -> Targeting {
        self.targeting
    }
}

impl Player for AiPlayer {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        view: &PlayerView<'_>,
    ) -> anyhow::Result<(usize, usize)> {
        let target = view.target;
        if target.rows() == 0 || target.cols() == 0 {
            return Err(anyhow::anyhow!("target grid has no cells"));
        }
        match self.targeting {
            Targeting::Naive => Ok((
                rng.random_range(0..target.rows()),
                rng.random_range(0..target.cols()),
            )),
            Targeting::Fresh => {
                let open = target.unguessed_cells();
                if open.is_empty() {
                    return Err(anyhow::anyhow!("no unguessed cells left"));
                }
                Ok(open[rng.random_range(0..open.len())])
            }
        }
    }
}

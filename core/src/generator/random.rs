use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Purely random generation: every cell is a mine with the configured probability,
/// independently of every other cell. There is no guaranteed mine count and no safe start.
///
/// The same seed always produces the same board.
#[derive(Clone, Debug, PartialEq)]
pub struct BernoulliGenerator {
    seed: u64,
}

impl BernoulliGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl BoardGenerator for BernoulliGenerator {
    fn generate(self, config: BoardConfig) -> Result<Board> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let board = Board::generate(config, &mut rng)?;

        if board.safe_cell_count() == 0 {
            log::warn!(
                "Generated board has no safe cells, seed: {}, p: {}",
                self.seed,
                config.probability
            );
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_board() {
        let config = BoardConfig::new_unchecked(16, 9, 0.2);

        let first = BernoulliGenerator::new(42).generate(config).unwrap();
        let second = BernoulliGenerator::new(42).generate(config).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.size(), (16, 9));
    }

    #[test]
    fn mine_ratio_tracks_probability() {
        let config = BoardConfig::new_unchecked(100, 100, 0.25);

        let board = BernoulliGenerator::new(3).generate(config).unwrap();

        // 10k trials, loose bounds
        let mines = board.mine_count();
        assert!((2000..3000).contains(&mines), "got {mines} mines");
    }

    #[test]
    fn invalid_config_produces_no_board() {
        let config = BoardConfig::new_unchecked(4, -4, 0.2);

        assert_eq!(
            BernoulliGenerator::new(0).generate(config),
            Err(GameError::InvalidDimension {
                width: 4,
                height: -4
            })
        );
    }
}

use rand::prelude::*;

use super::*;

/// Default generation strategy: materialize every position on the
/// board, shuffle the lot, take the first `count`.
///
/// The full shuffle keeps the draw unbiased regardless of how many
/// hazards are requested; no position is weighted by its row or
/// column.
#[derive(Clone, Debug)]
pub struct RandomPositionGenerator {
    rng: SmallRng,
}

impl RandomPositionGenerator {
    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Reproducible generator for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPositionGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl PositionGenerator for RandomPositionGenerator {
    fn generate(&mut self, rows: Coord, columns: Coord, count: CellCount) -> Vec<Pos> {
        let total = cell_total(rows, columns);
        if count > total {
            log::warn!(
                "Requested {} hazards but a {}x{} board only fits {}",
                count,
                rows,
                columns,
                total
            );
        }

        let mut positions: Vec<Pos> = all_positions(rows, columns).collect();
        positions.shuffle(&mut self.rng);
        positions.truncate(count.min(total) as usize);
        positions
    }
}

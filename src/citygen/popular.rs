use crate::error::{GenError, Result};
use crate::grid::{Cell, Grid};
use rand::prelude::*;

/// Samples `count` distinct free cells of `grid`, returned in row-major order.
/// The caller claims every line cell (or endpoint) beforehand.
pub fn select<R: Rng>(grid: &Grid, count: usize, rng: &mut R) -> Result<Vec<Cell>> {
    if count == 0 {
        return Ok(vec![]);
    }
    let free = grid.free_cells();
    if free.len() < count {
        log::warn!("popular: need {count} cells, only {} free", free.len());
        return Err(GenError::InsufficientCapacity {
            what: "popular cells",
            needed: count,
            available: free.len(),
        });
    }
    let mut cells: Vec<Cell> = rand::seq::index::sample(rng, free.len(), count)
        .into_iter()
        .map(|i| free[i])
        .collect();
    cells.sort();
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn avoids_claimed_cells() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let mut grid = Grid::new(4, 4);
        let claimed: Vec<Cell> = (0..4).map(|c| Cell::new(1, c)).collect();
        grid.claim(&claimed);
        let popular = select(&grid, 12, &mut rng).unwrap();
        assert_eq!(popular.len(), 12);
        assert!(popular.iter().all(|&c| grid.is_free(c)));
        assert!(popular.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn too_few_free_cells() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let mut grid = Grid::new(2, 2);
        grid.claim(&[Cell::new(0, 0), Cell::new(0, 1)]);
        assert!(matches!(
            select(&grid, 3, &mut rng),
            Err(GenError::InsufficientCapacity { needed: 3, available: 2, .. })
        ));
        assert_eq!(select(&grid, 0, &mut rng), Ok(vec![]));
    }
}

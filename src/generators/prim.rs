use rand::Rng;

use crate::error::MazeError;
use crate::maze::{Cell, Coord, Maze};

/// Counters gathered during one carving run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CarveStats {
    /// Number of times a frontier cell was picked.
    pub iterations: usize,
    /// Number of two-step passages dug.
    pub carved: usize,
}

/// Digs passages outward from `seeds` until no frontier cell has a diggable neighbor left.
///
/// Seeds that are legal walls are marked as passage first. Any other seed (a border cell, a
/// painted start) is explored without being overwritten.
///
/// Each round picks a random frontier cell. If it has no candidate neighbors it is dropped,
/// otherwise a random candidate is connected to it and queued. The picked cell stays in the
/// frontier until it runs out of candidates, which is what gives the long winding corridors.
pub fn randomized_prim<R: Rng>(
    maze: &mut Maze,
    seeds: &[Coord],
    rng: &mut R,
) -> Result<CarveStats, MazeError> {
    if seeds.is_empty() {
        return Err(MazeError::EmptyFrontier);
    }

    let mut frontiers = seeds.to_vec();
    for &seed in seeds {
        if maze.is_legal(seed) && maze.is_diggable(seed) {
            maze.set(seed, Cell::Passage);
        }
    }
    tracing::info!(
        "[prim] Carving a {}x{} maze from {} seed(s)",
        maze.width(),
        maze.height(),
        seeds.len()
    );

    let mut stats = CarveStats::default();
    while !frontiers.is_empty() {
        stats.iterations += 1;

        let idx = rng.random_range(0..frontiers.len());
        let current = frontiers[idx];
        let neighbors = maze.candidate_neighbors(current);

        if neighbors.is_empty() {
            // Exhausted, it can never gain a diggable neighbor again
            frontiers.swap_remove(idx);
            continue;
        }

        let next = neighbors[rng.random_range(0..neighbors.len())];
        maze.connect(current, next)?;
        frontiers.push(next);
        stats.carved += 1;

        tracing::debug!(
            "[prim] current: {:?}; next: {:?}; frontiers: {}",
            current,
            next,
            frontiers.len()
        );
    }

    tracing::info!(
        "[prim] Done after {} iterations, {} passages carved",
        stats.iterations,
        stats.carved
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_empty_frontier_rejected() {
        let mut maze = Maze::new(7, 7).unwrap();
        maze.set((1, 1), Cell::Start);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            randomized_prim(&mut maze, &[], &mut rng),
            Err(MazeError::EmptyFrontier)
        );
        assert_eq!(maze.count(Cell::Wall), 48);
        assert_eq!(maze[(1, 1)], Cell::Start);
    }

    #[test]
    fn test_randomized_prim_covers_odd_grid() {
        let mut maze = Maze::new(11, 9).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let stats = randomized_prim(&mut maze, &[(2, 2)], &mut rng).unwrap();

        // Every even interior cell is reached: 4 columns x 3 rows
        for y in (2..8).step_by(2) {
            for x in (2..10).step_by(2) {
                assert_eq!(maze[(x, y)], Cell::Passage, "({}, {}) not carved", x, y);
            }
        }
        // A spanning tree over 12 cells has 11 connectors
        assert_eq!(stats.carved, 11);
        assert_eq!(maze.count(Cell::Passage), 12 + 11);
    }

    #[test]
    fn test_iterations_bound() {
        let mut maze = Maze::new(31, 25).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        let seeds = [(2, 2), (20, 10)];
        let stats = randomized_prim(&mut maze, &seeds, &mut rng).unwrap();
        // Every pick either carves once or retires one queued cell
        assert_eq!(stats.iterations, seeds.len() + 2 * stats.carved);
        assert!(stats.iterations <= 31 * 25);
    }

    #[test]
    fn test_outer_ring_untouched() {
        let mut maze = Maze::new(9, 9).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        // A seed on the edge is explored but not overwritten
        randomized_prim(&mut maze, &[(0, 1)], &mut rng).unwrap();
        for i in 0..9 {
            for coord in [(i, 0), (i, 8), (0, i), (8, i)] {
                assert_eq!(maze[coord], Cell::Wall, "{:?} was carved", coord);
            }
        }
        assert_eq!(maze[(1, 1)], Cell::Passage);
        assert_eq!(maze[(2, 1)], Cell::Passage);
    }

    #[test]
    fn test_painted_seed_is_kept() {
        let mut maze = Maze::new(7, 7).unwrap();
        maze.set((3, 3), Cell::Start);
        let mut rng = StdRng::seed_from_u64(1);
        let stats = randomized_prim(&mut maze, &[(3, 3)], &mut rng).unwrap();
        assert_eq!(maze[(3, 3)], Cell::Start);
        assert!(stats.carved > 0);
    }

    #[test]
    fn test_same_seed_same_maze() {
        let carve = |seed: u64| {
            let mut maze = Maze::new(21, 15).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            randomized_prim(&mut maze, &[(4, 6)], &mut rng).unwrap();
            maze.cells().to_vec()
        };
        assert_eq!(carve(42), carve(42));
    }
}

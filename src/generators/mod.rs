use std::collections::HashMap;

use rand::{Rng, SeedableRng, rngs::StdRng};

mod prim;

pub use prim::{CarveStats, randomized_prim};

use crate::{
    error::MazeError,
    maze::{Cell, Coord, Maze, Wormhole, rect_points},
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Coordinates to paint, grouped by cell kind.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Paint {
    cells: HashMap<Cell, Vec<Coord>>,
}

impl Paint {
    /// Kinds are always painted in this order, so a later kind wins on shared coordinates.
    pub const ORDER: [Cell; 12] = [
        Cell::Start,
        Cell::End,
        Cell::Passage,
        Cell::Wall,
        Cell::HardWall,
        Cell::Wormhole(Wormhole::A),
        Cell::Wormhole(Wormhole::B),
        Cell::Wormhole(Wormhole::C),
        Cell::Wormhole(Wormhole::D),
        Cell::Wormhole(Wormhole::E),
        Cell::Wormhole(Wormhole::F),
        Cell::Visited,
    ];

    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `coords` to the list for `kind`.
    pub fn with(mut self, kind: Cell, coords: impl IntoIterator<Item = Coord>) -> Self {
        self.cells.entry(kind).or_default().extend(coords);
        self
    }

    pub fn get(&self, kind: Cell) -> &[Coord] {
        self.cells.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when no kind has any coordinate to paint.
    pub fn is_empty(&self) -> bool {
        self.cells.values().all(Vec::is_empty)
    }

    /// Paints every kind in [`Paint::ORDER`], skipping kinds with nothing listed.
    pub fn apply(&self, maze: &mut Maze) {
        for kind in Self::ORDER {
            maze.set_many(self.get(kind), kind);
        }
    }
}

/// Everything needed to assemble a maze.
#[derive(Debug, Clone)]
pub struct MazeConfig {
    pub width: u16,
    pub height: u16,
    /// Cells to start digging from. When empty a random even cell is used, unless
    /// `random_seed` is off.
    pub frontiers: Vec<Coord>,
    pub random_seed: bool,
    pub hardwall_border: bool,
    /// Painted before digging; carving routes around anything that is not a wall.
    pub pre_paint: Paint,
    /// Painted after digging, on top of the finished passages.
    pub post_paint: Paint,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 47,
            height: 41,
            frontiers: Vec::new(),
            random_seed: true,
            hardwall_border: true,
            pre_paint: Paint::default(),
            post_paint: Paint::default(),
        }
    }
}

impl MazeConfig {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// The reference layout: a framed 47x41 maze dug from the left edge, with a start and
    /// an end on opposite sides and one of each wormhole.
    pub fn demo() -> Self {
        let (width, height) = (47, 41);
        let frame = [
            rect_points(0, 0, width, 1),
            rect_points(0, 0, 1, height),
            rect_points(0, height - 1, width, height),
            rect_points(width - 1, 0, width, height),
        ]
        .concat();
        Self {
            width,
            height,
            frontiers: vec![(0, 1)],
            random_seed: true,
            hardwall_border: true,
            pre_paint: Paint::new().with(Cell::HardWall, frame),
            post_paint: Paint::new()
                .with(Cell::Start, [(0, 1)])
                .with(Cell::End, [(width - 1, 1)])
                .with(Wormhole::A.into(), [(5, 2)])
                .with(Wormhole::B.into(), [(39, 1)])
                .with(Wormhole::C.into(), [(29, 12)])
                .with(Wormhole::D.into(), [(1, 9)])
                .with(Wormhole::E.into(), [(15, 8)])
                .with(Wormhole::F.into(), [(23, 3)]),
        }
    }
}

/// Picks a random interior cell with even coordinates, the parity all default carving uses.
///
/// A maze too small to have one gets an even cell drawn over its full extent instead. That
/// cell sits on the border margin, so digging from it leaves the maze untouched.
pub fn random_even_cell<R: Rng>(maze: &Maze, rng: &mut R) -> Coord {
    // Largest i with 0 < 2i < size - 1
    let max_i = maze.width().saturating_sub(2) / 2;
    let max_j = maze.height().saturating_sub(2) / 2;
    if max_i == 0 || max_j == 0 {
        let x = rng.random_range(0..=(maze.width() - 1) / 2) * 2;
        let y = rng.random_range(0..=(maze.height() - 1) / 2) * 2;
        return (x, y);
    }
    let x = rng.random_range(1..=max_i) * 2;
    let y = rng.random_range(1..=max_j) * 2;
    (x, y)
}

/// Runs the whole assembly on an existing maze: seed selection, pre-paint, border,
/// digging and post-paint. The maze dimensions win over the ones in `config`.
pub fn carve_maze<R: Rng>(
    maze: &mut Maze,
    config: &MazeConfig,
    rng: &mut R,
) -> Result<CarveStats, MazeError> {
    let frontiers = if config.frontiers.is_empty() && config.random_seed {
        vec![random_even_cell(maze, rng)]
    } else {
        config.frontiers.clone()
    };

    if !config.pre_paint.is_empty() {
        tracing::debug!("[maze] Pre-painting cells");
        config.pre_paint.apply(maze);
    }

    if config.hardwall_border {
        maze.draw_hardwall_border();
    }

    let stats = randomized_prim(maze, &frontiers, rng)?;

    if !config.post_paint.is_empty() {
        tracing::debug!("[maze] Post-painting cells");
        config.post_paint.apply(maze);
    }
    Ok(stats)
}

/// Builds and digs a new maze as described by `config`.
pub fn generate_maze<R: Rng>(config: &MazeConfig, rng: &mut R) -> Result<Maze, MazeError> {
    tracing::info!("[maze] Generating a {}x{} maze", config.width, config.height);
    let mut maze = Maze::new(config.width, config.height)?;
    carve_maze(&mut maze, config, rng)?;
    Ok(maze)
}

/// [`generate_maze`] with a fresh generator, seeded when `seed` is given.
pub fn generate_maze_seeded(config: &MazeConfig, seed: Option<u64>) -> Result<Maze, MazeError> {
    generate_maze(config, &mut get_rng(seed))
}

use std::collections::BTreeSet;
use std::io::Write;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use crossterm::{cursor, queue, style::Print, terminal};
use mazecarve::{
    Cell, Maze, MazeConfig,
    generators::{carve_maze, get_rng},
    logging,
    maze::GridEvent,
};

/// Delay between two carving steps when animating.
const STEP_DELAY: Duration = Duration::from_millis(2);

/// Redraws every cell change as it arrives, until the maze drops its sender.
fn animate(events: Receiver<GridEvent>) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    for event in events {
        match event {
            GridEvent::Initial {
                cell,
                width,
                height,
            } => {
                queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
                for y in 0..height {
                    queue!(stdout, cursor::MoveTo(0, y))?;
                    for _ in 0..width {
                        queue!(stdout, Print(cell))?;
                    }
                }
            }
            GridEvent::Update { coord, new, .. } => {
                queue!(
                    stdout,
                    cursor::MoveTo(coord.0 * Cell::CELL_WIDTH, coord.1),
                    Print(new)
                )?;
                std::thread::sleep(STEP_DELAY);
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

/// An absent seed means a fresh OS-seeded run; a malformed one is an error.
fn parse_seed(arg: Option<String>) -> Result<Option<u64>, std::num::ParseIntError> {
    arg.map(|s| s.parse::<u64>()).transpose()
}

fn main() -> std::io::Result<()> {
    let _guard = logging::init("mazecarve.log");

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let dims = args
        .by_ref()
        .take(2)
        .map(|s| s.parse::<u16>())
        .collect::<Result<Vec<_>, _>>();
    let Ok(seed) = parse_seed(args.next()) else {
        eprintln!("The seed must be a non-negative integer.");
        return Ok(());
    };

    let config = match dims.as_deref() {
        Ok([]) => MazeConfig::demo(),
        Ok(&[width, height]) => {
            if width < 3 || height < 3 {
                eprintln!("Width and height must be at least 3.");
                return Ok(());
            }
            MazeConfig::new(width, height)
        }
        _ => {
            eprintln!("Usage: mazecarve [width height [seed]]");
            return Ok(());
        }
    };

    let animated = matches!(std::env::var("ANIMATE"), Ok(val) if val == "1");
    let mut rng = get_rng(seed);
    let mut stdout = std::io::stdout();

    let kinds = if animated {
        let (sender, receiver) = mpsc::channel();
        let renderer = std::thread::spawn(move || animate(receiver));
        let mut maze = Maze::with_events(config.width, config.height, sender)?;
        carve_maze(&mut maze, &config, &mut rng)?;
        let kinds = maze.cells().iter().copied().collect::<BTreeSet<Cell>>();
        // Dropping the maze closes the channel and lets the renderer finish
        drop(maze);
        match renderer.join() {
            Ok(result) => result?,
            Err(_) => tracing::error!("[main] Render thread panicked"),
        }
        queue!(stdout, cursor::MoveTo(0, config.height))?;
        kinds
    } else {
        let mut maze = Maze::new(config.width, config.height)?;
        carve_maze(&mut maze, &config, &mut rng)?;
        maze.render(&mut stdout)?;
        maze.cells().iter().copied().collect::<BTreeSet<Cell>>()
    };

    // Legend of the kinds that ended up in the maze
    writeln!(stdout)?;
    for kind in kinds {
        writeln!(stdout, "{} {}", kind, kind.name())?;
    }
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed(None), Ok(None));
        assert_eq!(parse_seed(Some("42".to_string())), Ok(Some(42)));
        assert!(parse_seed(Some("forty-two".to_string())).is_err());
        assert!(parse_seed(Some("-1".to_string())).is_err());
    }
}

use std::time::Instant;

use mazecarve::{MazeConfig, generate_maze_seeded, logging};

fn main() -> std::io::Result<()> {
    let _guard = logging::init("profile.log");

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(100);

    let config = MazeConfig::new(u16::MAX / 64, u16::MAX / 64);
    let start = Instant::now();
    for i in 0..num_iters {
        generate_maze_seeded(&config, Some(i as u64))?;
    }
    let elapsed = start.elapsed();
    tracing::info!("[profile] {} mazes in {:?}", num_iters, elapsed);
    println!(
        "Generated {} {}x{} mazes in {:?} ({:?} per maze)",
        num_iters,
        config.width,
        config.height,
        elapsed,
        elapsed / num_iters.max(1) as u32
    );
    Ok(())
}

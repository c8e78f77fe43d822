use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, ensure, Context, Result};
use clap::Parser;
use log::info;
use scopeguard::defer;

use crate::args::Args;
use crate::gol::Grid;
use crate::render::{curses::CursesRender, plain::PlainRender, Renderer};
use crate::world::World;

mod args;
mod bgrid;
mod gol;
mod render;
mod world;

// upper bound on how long the ticker sleeps before rechecking for shutdown
const POLL: Duration = Duration::from_millis(50);

fn mk_pool(threads: usize) -> Result<rayon::ThreadPool> {
    Ok(rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("advance-{}", i))
        .build()?)
}

fn run_ticker(world: &World, interval: Duration, running: &AtomicBool) -> Result<()> {
    defer! {
        running.store(false, Ordering::SeqCst);
    }
    let mut next = Instant::now() + interval;
    while running.load(Ordering::SeqCst) {
        let now = Instant::now();
        if now < next {
            thread::sleep((next - now).min(POLL));
            continue;
        }
        world.tick()?;
        next += interval;
    }
    Ok(())
}

fn render_loop<R: Renderer>(
    world: &World,
    mut renderer: R,
    frame: Duration,
    running: &AtomicBool,
) -> Result<()> {
    while running.load(Ordering::SeqCst) && renderer.running() {
        let started = Instant::now();
        world.read(|grid, generation| {
            renderer.poll(grid.width(), grid.height());
            renderer.render(grid, generation)
        })??;
        if let Some(rest) = frame.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }
    Ok(())
}

fn run_interactive(
    pool: &rayon::ThreadPool,
    world: &World,
    interval: Duration,
    fps: u32,
) -> Result<()> {
    let frame = Duration::from_secs(1) / fps;
    let (width, height) = world.read(|g, _| (g.width(), g.height()))?;
    let running = AtomicBool::new(true);
    thread::scope(|s| -> Result<()> {
        let ticker = s.spawn(|| pool.install(|| run_ticker(world, interval, &running)));
        let rendered = {
            defer! {
                running.store(false, Ordering::SeqCst);
            }
            render_loop(world, CursesRender::new(width, height), frame, &running)
        };
        let ticked = ticker
            .join()
            .map_err(|_| anyhow!("ticker thread panicked"))?;
        rendered.and(ticked)
    })
}

fn run_headless<R: Renderer>(
    pool: &rayon::ThreadPool,
    world: &World,
    generations: u64,
    mut renderer: R,
) -> Result<()> {
    let started = Instant::now();
    pool.install(|| -> Result<()> {
        for _ in 0..generations {
            world.tick()?;
        }
        Ok(())
    })?;
    info!(
        "ran {} generations in {:?}, population {}",
        generations,
        started.elapsed(),
        world.population()?
    );
    world.read(|grid, generation| renderer.render(grid, generation))?
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    ensure!(args.fps > 0, "fps must be positive");
    ensure!(args.interval_ms > 0, "interval must be positive");

    let threads = args.threads.map(usize::from).unwrap_or_else(num_cpus::get);
    let pool = mk_pool(threads).context("failed to create threadpool")?;

    let mut grid = Grid::new(args.width, args.height)?;
    let seeded = args
        .pattern
        .seed(&mut grid)
        .with_context(|| format!("failed to seed pattern {}", args.pattern.name))?;
    info!(
        "seeded {} cells of {} on a {}x{} grid, {} threads",
        seeded,
        args.pattern.name,
        grid.width(),
        grid.height(),
        threads
    );

    let world = World::new(grid);
    match args.generations {
        Some(n) => run_headless(&pool, &world, n, PlainRender::new(io::stdout(), None)),
        None => run_interactive(
            &pool,
            &world,
            Duration::from_millis(args.interval_ms),
            args.fps,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gol::patterns;

    fn world_of(pattern: &patterns::Pattern, w: u32, h: u32) -> World {
        let mut g = Grid::new(w, h).unwrap();
        pattern.seed(&mut g).unwrap();
        World::new(g)
    }

    #[test]
    fn test_headless_prints_final_generation() -> Result<()> {
        let pool = mk_pool(2)?;
        let world = world_of(&patterns::BLINKER, 6, 6);
        let mut out = Vec::new();
        run_headless(&pool, &world, 3, PlainRender::new(&mut out, None))?;
        let out = String::from_utf8(out)?;
        assert!(out.starts_with("generation 3 population 3\n"));
        assert_eq!(world.generation()?, 3);
        assert!(world.is_alive(2, 1)?);
        Ok(())
    }

    #[test]
    fn test_ticker_stops_with_flag() -> Result<()> {
        let world = world_of(&patterns::BLOCK, 6, 6);
        let running = AtomicBool::new(true);
        thread::scope(|s| {
            let ticker = s.spawn(|| run_ticker(&world, Duration::from_millis(1), &running));
            while world.generation().unwrap() < 5 {
                thread::sleep(Duration::from_millis(1));
            }
            running.store(false, Ordering::SeqCst);
            ticker.join().unwrap()
        })?;
        assert!(world.generation()? >= 5);
        assert_eq!(world.population()?, 4);
        Ok(())
    }

    struct Counting {
        frames: usize,
        limit: usize,
    }

    impl Renderer for Counting {
        fn running(&self) -> bool {
            self.frames < self.limit
        }
        fn poll(&mut self, _: u32, _: u32) {}
        fn render(&mut self, _: &Grid, _: u64) -> Result<()> {
            self.frames += 1;
            Ok(())
        }
    }

    #[test]
    fn test_render_loop_ends_when_renderer_quits() -> Result<()> {
        let world = world_of(&patterns::GLIDER, 8, 8);
        let running = AtomicBool::new(true);
        let r = Counting {
            frames: 0,
            limit: 3,
        };
        render_loop(&world, r, Duration::from_millis(1), &running)?;
        assert!(running.load(Ordering::SeqCst));
        Ok(())
    }
}

use std::sync::{Arc, RwLock};

use anyhow::{anyhow, Result};

use crate::gol::Grid;

struct State {
    grid: Grid,
    generation: u64,
}

/// Shared handle to the running simulation.
///
/// Advancing takes the write lock for the whole step, so readers only ever
/// see complete generations.
#[derive(Clone)]
pub struct World {
    state: Arc<RwLock<State>>,
}

impl World {
    pub fn new(grid: Grid) -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                grid,
                generation: 0,
            })),
        }
    }

    pub fn tick(&self) -> Result<u64> {
        let mut state = self
            .state
            .write()
            .map_err(|_| anyhow!("world lock poisoned"))?;
        state.grid.advance();
        state.generation += 1;
        log::debug!(
            "generation {} population {}",
            state.generation,
            state.grid.population()
        );
        Ok(state.generation)
    }

    pub fn read<R>(&self, f: impl FnOnce(&Grid, u64) -> R) -> Result<R> {
        let state = self
            .state
            .read()
            .map_err(|_| anyhow!("world lock poisoned"))?;
        Ok(f(&state.grid, state.generation))
    }

    #[allow(dead_code)]
    pub fn is_alive(&self, x: i64, y: i64) -> Result<bool> {
        self.read(|g, _| g.is_alive(x, y))
    }

    pub fn generation(&self) -> Result<u64> {
        self.read(|_, gen| gen)
    }

    pub fn population(&self) -> Result<usize> {
        self.read(|g, _| g.population())
    }
}

use std::io::Write;

use anyhow::Result;

use crate::{
    bgrid::Frame,
    gol::{Grid, Mask},
};

use super::Renderer;

/// Writes each rendered frame as text, preceded by a summary line.
pub struct PlainRender<W: Write> {
    out: W,
    view: Option<Mask>,
}

impl<W: Write> PlainRender<W> {
    /// `view` defaults to the whole grid.
    pub fn new(out: W, view: Option<Mask>) -> Self {
        Self { out, view }
    }

    #[allow(dead_code)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for PlainRender<W> {
    fn running(&self) -> bool {
        true
    }

    fn poll(&mut self, _grid_width: u32, _grid_height: u32) {}

    fn render(&mut self, grid: &Grid, generation: u64) -> Result<()> {
        let view = self.view.unwrap_or_else(|| Mask::covering(grid));
        writeln!(
            self.out,
            "generation {} population {}",
            generation,
            grid.population()
        )?;
        for line in Frame::new(grid, view).lines() {
            writeln!(self.out, "{}", line.trim_end())?;
        }
        self.out.flush()?;
        Ok(())
    }
}

use anyhow::{ensure, Result};
use pancurses::{Input, Window};

use crate::{
    bgrid::Frame,
    gol::{Grid, Mask},
};

use super::Renderer;

const PAN_STEP: i64 = 8;

pub struct CursesRender {
    window: Window,
    view: Mask,
    running: bool,
}

impl CursesRender {
    pub fn new(grid_width: u32, grid_height: u32) -> Self {
        let window = pancurses::initscr();
        pancurses::cbreak();
        pancurses::noecho();
        pancurses::curs_set(0);
        window.nodelay(true);
        window.keypad(true);
        let mut r = Self {
            window,
            view: Mask {
                x: 0,
                y: 0,
                w: 0,
                h: 0,
            },
            running: true,
        };
        r.fit_view();
        r.view.x = grid_width.saturating_sub(r.view.w) / 2;
        r.view.y = grid_height.saturating_sub(r.view.h) / 2;
        r
    }

    // one status row; every glyph covers 2x2 cells
    fn fit_view(&mut self) {
        let cols = self.window.get_max_x().max(0) as u32;
        let rows = self.window.get_max_y().max(1) as u32 - 1;
        self.view.w = cols * 2;
        self.view.h = rows * 2;
    }
}

impl Drop for CursesRender {
    fn drop(&mut self) {
        pancurses::endwin();
    }
}

impl Renderer for CursesRender {
    fn running(&self) -> bool {
        self.running
    }

    fn poll(&mut self, grid_width: u32, grid_height: u32) {
        while let Some(input) = self.window.getch() {
            let (dx, dy) = match input {
                Input::Character('q') | Input::Character('Q') => {
                    self.running = false;
                    return;
                }
                Input::KeyLeft => (-PAN_STEP, 0),
                Input::KeyRight => (PAN_STEP, 0),
                Input::KeyUp => (0, -PAN_STEP),
                Input::KeyDown => (0, PAN_STEP),
                Input::KeyResize => {
                    pancurses::resize_term(0, 0);
                    self.fit_view();
                    (0, 0)
                }
                _ => (0, 0),
            };
            self.view.pan(dx, dy, grid_width, grid_height);
        }
    }

    fn render(&mut self, grid: &Grid, generation: u64) -> Result<()> {
        let frame = Frame::new(grid, self.view);
        self.window.erase();
        self.window.mvaddstr(
            0,
            0,
            format!(
                "generation {}  population {}  view {}  [arrows] pan  [q] quit",
                generation,
                grid.population(),
                self.view
            ),
        );
        for (pt, ch) in frame.render() {
            // the bottom-right cell reports an error once the cursor wraps
            self.window
                .mvaddstr(pt.y as i32 + 1, pt.x as i32, ch.to_string());
        }
        ensure!(
            self.window.refresh() != pancurses::ERR,
            "failed to refresh terminal"
        );
        Ok(())
    }
}

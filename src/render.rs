use crate::{Config, Grid, Markers};
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Text front end: prompts, errors and the field itself.
pub struct Renderer<W: Write> {
    out: W,
    markers: Markers,
    clear: bool,
}

impl<W: Write> Renderer<W> {
    /// `clear` - whether the visible terminal is cleared before every frame
    pub fn new(out: W, markers: Markers, clear: bool) -> Self {
        Self {
            out,
            markers,
            clear,
        }
    }

    pub fn greeting(&mut self, config: &Config) -> io::Result<()> {
        let (alive, dead) = (config.markers.alive, config.markers.dead);
        writeln!(
            self.out,
            "Press Enter for a random field or type the field in manually."
        )?;
        writeln!(
            self.out,
            "The field is {} x {} characters, a live cell is '{}' and a dead cell is '{}'.",
            config.width, config.height, alive, dead
        )?;
        writeln!(
            self.out,
            "[!] Any character other than '{}' and '{}' is a data error!",
            alive, dead
        )?;
        self.out.flush()
    }

    pub fn delay_prompt(&mut self, config: &Config) -> io::Result<()> {
        write!(
            self.out,
            "Enter the delay between generations in ms (1..={}) or press Enter for the default ({} ms): ",
            config.max_delay_ms, config.default_delay_ms
        )?;
        self.out.flush()
    }

    pub fn error(&mut self) -> io::Result<()> {
        writeln!(self.out, "n/a")?;
        self.out.flush()
    }

    pub fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        if self.clear {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        grid.write_rows(&mut self.out, self.markers)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_without_clear() {
        let mut grid = Grid::blank(2, 2);
        grid.set(1, 0, true);
        let mut renderer = Renderer::new(Vec::new(), Markers::default(), false);
        renderer.draw(&grid).unwrap();
        renderer.error().unwrap();
        assert_eq!(renderer.into_inner(), b"..\n@.\nn/a\n");
    }

    #[test]
    fn test_draw_with_clear_starts_with_escape() {
        let mut renderer = Renderer::new(Vec::new(), Markers::default(), true);
        renderer.draw(&Grid::blank(2, 1)).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(out.starts_with('\x1b'));
        assert!(out.ends_with("..\n"));
    }

    #[test]
    fn test_greeting_mentions_size() {
        let mut renderer = Renderer::new(Vec::new(), Markers::default(), false);
        renderer.greeting(&Config::default()).unwrap();
        renderer.delay_prompt(&Config::default()).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(out.contains("80 x 25"));
        assert!(out.contains("(300 ms)"));
    }
}

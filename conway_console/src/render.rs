use std::io::{self, Write};

use conway::Grid;
use crossterm::{
    cursor, execute, queue,
    style::Print,
    terminal::{BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate},
};

/// Text picture of one generation: `glyph` for alive, space for dead, one
/// line per row.
pub fn frame_text(grid: &Grid, glyph: char) -> String {
    let mut text = String::with_capacity(grid.height() * (grid.width() * glyph.len_utf8() + 1));
    for row in grid.rows() {
        for &alive in row {
            text.push(if alive { glyph } else { ' ' });
        }
        text.push('\n');
    }
    text
}

/// Draws whole frames onto a terminal, clearing the previous one first.
pub struct ConsoleRenderer<W: Write> {
    out: W,
    glyph: char,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Hides the cursor until the renderer is dropped.
    pub fn new(mut out: W, glyph: char) -> io::Result<Self> {
        execute!(out, cursor::Hide)?;
        Ok(Self { out, glyph })
    }

    pub fn render(&mut self, grid: &Grid) -> io::Result<()> {
        queue!(
            self.out,
            BeginSynchronizedUpdate,
            Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            Print(frame_text(grid, self.glyph)),
            EndSynchronizedUpdate
        )?;
        self.out.flush()
    }
}

impl<W: Write> Drop for ConsoleRenderer<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_text_uses_glyph_and_spaces() {
        let grid = Grid::parse(
            "#..
             .#.
             ..#",
            '#',
        )
        .unwrap();
        assert_eq!(frame_text(&grid, '█'), "█  \n █ \n  █\n");
    }

    #[test]
    fn every_line_is_grid_width() {
        let grid = Grid::initialize(13, 5, 0.5, Some(4));
        let text = frame_text(&grid, '*');
        assert_eq!(text.lines().count(), 5);
        assert!(text.lines().all(|l| l.chars().count() == 13));
    }

    #[test]
    fn render_clears_then_draws() {
        let grid = Grid::parse("#.\n.#", '#').unwrap();
        let mut buf = Vec::new();
        {
            let mut renderer = ConsoleRenderer::new(&mut buf, '#').unwrap();
            renderer.render(&grid).unwrap();
        }
        let out = String::from_utf8(buf).unwrap();
        let clear = out.find("\x1b[2J").expect("clear sequence");
        let body = out.find("# \n #\n").expect("frame body");
        assert!(clear < body);
        // Cursor shown again on drop
        assert!(out.ends_with("\x1b[?25h"));
    }
}

use std::io::{self, Write};

use crossterm::{
    cursor, execute, queue,
    style::{self, Color},
    terminal,
};

use maze_solver::{CellStatus, CellView, WallGrid};

const CELL_WIDTH: usize = 2;

/// Puts the terminal into raw mode on the alternate screen and undoes it on
/// drop, whichever way the driver exits.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

pub fn fill_color(cell: &CellView, grid: &WallGrid) -> Color {
    let coord = (cell.row, cell.col);
    if coord == grid.start() {
        return Color::Red;
    }
    if coord == grid.goal() {
        return Color::Green;
    }

    match cell.status {
        CellStatus::Unvisited => Color::White,
        CellStatus::Explored => Color::Rgb {
            r: 173,
            g: 216,
            b: 230,
        },
        CellStatus::Current => Color::Rgb {
            r: 147,
            g: 112,
            b: 219,
        },
        CellStatus::Final => Color::Blue,
    }
}

/// Draws walls as `+--+` / `|  |` art with every cell body filled by status.
pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn draw(&mut self, grid: &WallGrid, status: &[String]) -> io::Result<()> {
        let columns = grid.columns();
        let blank = " ".repeat(CELL_WIDTH);
        let horizontal = "-".repeat(CELL_WIDTH);

        queue!(self.out, cursor::MoveTo(0, 0))?;

        let cells: Vec<CellView> = grid.cells().collect();
        for row in cells.chunks(columns) {
            let mut top = String::new();
            for cell in row {
                top.push('+');
                top.push_str(if cell.walls.top { &horizontal } else { &blank });
            }
            top.push('+');
            queue!(self.out, style::Print(top), cursor::MoveToNextLine(1))?;

            for cell in row {
                let left = if cell.walls.left { "|" } else { " " };
                queue!(
                    self.out,
                    style::Print(left),
                    style::SetBackgroundColor(fill_color(cell, grid)),
                    style::Print(&blank),
                    style::ResetColor
                )?;
            }
            if let Some(last) = row.last() {
                let right = if last.walls.right { "|" } else { " " };
                queue!(self.out, style::Print(right))?;
            }
            queue!(self.out, cursor::MoveToNextLine(1))?;
        }

        let mut bottom = String::new();
        for cell in cells.iter().skip(cells.len() - columns) {
            bottom.push('+');
            bottom.push_str(if cell.walls.bottom { &horizontal } else { &blank });
        }
        bottom.push('+');
        queue!(self.out, style::Print(bottom), cursor::MoveToNextLine(1))?;

        for line in status {
            queue!(
                self.out,
                terminal::Clear(terminal::ClearType::CurrentLine),
                style::Print(line),
                cursor::MoveToNextLine(1)
            )?;
        }

        self.out.flush()
    }
}

#[cfg(test)]
mod test_renderer {
    use super::*;

    #[test]
    fn start_and_goal_colors_win_over_status() {
        let mut grid = WallGrid::with_dims(2, 2).unwrap();
        grid.set_status((0, 0), CellStatus::Final);
        grid.set_status((0, 1), CellStatus::Final);

        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(fill_color(&cells[0], &grid), Color::Red);
        assert_eq!(fill_color(&cells[1], &grid), Color::Blue);
        assert_eq!(fill_color(&cells[2], &grid), Color::White);
        assert_eq!(fill_color(&cells[3], &grid), Color::Green);
    }

    #[test]
    fn draws_walls_around_a_single_cell() {
        let grid = WallGrid::with_dims(1, 1).unwrap();
        let mut renderer = Renderer::new(Vec::new());
        renderer
            .draw(&grid, &["status".to_string()])
            .unwrap();

        let text = String::from_utf8_lossy(&renderer.out).to_string();
        assert_eq!(text.matches("+--+").count(), 2);
        assert!(text.contains('|'));
        assert!(text.contains("status"));
    }
}

use crate::config::CHAR_CELLS_PER_GRID_CELL;
use crate::sim::Simulation;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{BeginSynchronizedUpdate, EndSynchronizedUpdate},
};
use std::io::{self, Write};

const TITLE: &str = "Conway's Game of Life";
const LEGEND: &str =
    "Actions: '+' = speed up | '-' = slow down | 'q' = quit | 'r' = restart | 'n' = show/hide counts";

// Neighbour counts are 0..=8, padded to the two columns a cell occupies.
const COUNT_LABELS: [&str; 9] = [" 0", " 1", " 2", " 3", " 4", " 5", " 6", " 7", " 8"];

// Paint one full frame: the grid, then the banner, one flush at the end.
// Reads engine state only.
pub(crate) fn draw_frame(out: &mut impl Write, sim: &Simulation) -> io::Result<()> {
    queue!(out, BeginSynchronizedUpdate)?;

    let grid = sim.grid();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            queue!(
                out,
                MoveTo(x as u16 * CHAR_CELLS_PER_GRID_CELL, y as u16)
            )?;
            if grid.is_alive(x as i32, y as i32) {
                // Live cells are bare black blocks; the pattern is the
                // negative space in the gradient backdrop.
                queue!(out, SetBackgroundColor(Color::Black), Print("  "))?;
            } else {
                let bg = Color::Rgb {
                    r: backdrop_red(sim.generation(), x, y),
                    g: 18,
                    b: 255,
                };
                let text = if sim.show_counts() {
                    COUNT_LABELS[sim.neighbour_count(x, y) as usize]
                } else {
                    "  "
                };
                queue!(
                    out,
                    SetForegroundColor(Color::Black),
                    SetBackgroundColor(bg),
                    Print(text)
                )?;
            }
        }
    }

    draw_banner(out, sim)?;

    queue!(out, EndSynchronizedUpdate)?;
    out.flush()
}

fn draw_banner(out: &mut impl Write, sim: &Simulation) -> io::Result<()> {
    let grid = sim.grid();
    let width = grid.width() * CHAR_CELLS_PER_GRID_CELL as usize;
    let top = grid.height() as u16;

    queue!(
        out,
        SetForegroundColor(Color::Rgb { r: 0, g: 255, b: 0 }),
        SetBackgroundColor(Color::Black)
    )?;

    let stats = format!(
        "#{} | Generation {} ({}/s) | Population {}",
        sim.run_count(),
        sim.generation(),
        sim.ticks_per_second(),
        sim.population()
    );
    queue!(out, MoveTo(0, top), Print(fit_line(&stats, width)))?;
    queue!(out, MoveTo(0, top + 1), Print(fit_line(LEGEND, width)))?;
    queue!(out, MoveTo(0, top + 2), Print(fit_line(TITLE, width)))?;
    Ok(())
}

// Shifting gradient for the dead-cell backdrop.
pub(crate) fn backdrop_red(generation: u64, x: usize, y: usize) -> u8 {
    ((125 + generation + x as u64 + y as u64) % 256) as u8
}

// Pad or cut to exactly `width` columns so the previous frame's line is
// fully overwritten.
fn fit_line(text: &str, width: usize) -> String {
    let mut line: String = text.chars().take(width).collect();
    while line.len() < width {
        line.push(' ');
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backdrop_red_shifts_and_wraps() {
        assert_eq!(backdrop_red(0, 0, 0), 125);
        assert_eq!(backdrop_red(1, 2, 3), 131);
        assert_eq!(backdrop_red(131, 0, 0), 0);
        assert_eq!(backdrop_red(300, 10, 10), ((125 + 320) % 256) as u8);
    }

    #[test]
    fn test_fit_line_pads_to_width() {
        assert_eq!(fit_line("ab", 5), "ab   ");
        assert_eq!(fit_line("", 3), "   ");
    }

    #[test]
    fn test_fit_line_cuts_overlong_text() {
        assert_eq!(fit_line("abcdef", 3), "abc");
        assert_eq!(fit_line("abc", 3), "abc");
    }

    #[test]
    fn test_count_labels_cover_the_moore_range() {
        assert_eq!(COUNT_LABELS.len(), 9);
        for (count, label) in COUNT_LABELS.iter().enumerate() {
            assert_eq!(*label, format!(" {count}"));
        }
    }
}

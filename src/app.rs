use crate::config::{self, Settings, BANNER_ROWS, CHAR_CELLS_PER_GRID_CELL};
use crate::input::{command_for_event, Command};
use crate::render;
use crate::sim::Simulation;
use anyhow::{Context, Result};
use crossterm::{
    cursor::{self, MoveTo},
    event, execute, queue,
    style::ResetColor,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

pub(crate) fn run() -> Result<()> {
    let settings = config::load().sanitized();
    let mut stdout = io::stdout();

    terminal::enable_raw_mode().context("enter raw input mode")?;
    if let Err(err) = execute!(stdout, EnterAlternateScreen, cursor::Hide) {
        let _ = terminal::disable_raw_mode();
        return Err(err).context("prepare terminal screen");
    }

    let result = App::new(settings).event_loop(&mut stdout);

    // One restore sequence for every exit: quit, interrupt key, or error.
    let _ = execute!(stdout, ResetColor, cursor::Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    result
}

struct App {
    settings: Settings,
    sim: Simulation,
}

impl App {
    fn new(settings: Settings) -> Self {
        let sim = Simulation::new(
            settings.show_counts,
            settings.ticks_per_second,
            settings.noise,
        );
        Self { settings, sim }
    }

    // Three event sources, one thread: the epoch reset deadline, the tick
    // deadline, and the keyboard. The loop sleeps in `poll` until the
    // nearest deadline and handles whatever is ready, one item at a time.
    fn event_loop(&mut self, out: &mut impl Write) -> Result<()> {
        let mut reset_at = self.restart(out)?;
        let mut next_tick = Instant::now() + self.tick_period();

        loop {
            let now = Instant::now();

            if now >= reset_at {
                reset_at = self.restart(out)?;
                next_tick = Instant::now() + self.tick_period();
                continue;
            }

            if now >= next_tick {
                self.sim.tick();
                render::draw_frame(out, &self.sim)?;
                next_tick = Instant::now() + self.tick_period();
                continue;
            }

            let timeout = reset_at.min(next_tick).saturating_duration_since(now);
            if !event::poll(timeout)? {
                continue;
            }
            match command_for_event(&event::read()?) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::Restart) => {
                    reset_at = self.restart(out)?;
                    next_tick = Instant::now() + self.tick_period();
                }
                Some(Command::ToggleCounts) => self.sim.toggle_counts(),
                // Re-arm the tick timer so the new period applies to the
                // next tick, like a ticker reset.
                Some(Command::SpeedUp) => {
                    self.sim.speed_up();
                    next_tick = Instant::now() + self.tick_period();
                }
                Some(Command::SlowDown) => {
                    self.sim.slow_down();
                    next_tick = Instant::now() + self.tick_period();
                }
                None => {}
            }
        }
    }

    // Begin a new epoch: fresh geometry, cleared screen, reseeded engine.
    // Returns the auto-reset deadline for the epoch.
    fn restart(&mut self, out: &mut impl Write) -> Result<Instant> {
        let (cols, rows) = terminal::size().context("query terminal size")?;
        let width = (cols / CHAR_CELLS_PER_GRID_CELL).max(1) as usize;
        let height = rows.saturating_sub(BANNER_ROWS).max(1) as usize;

        queue!(out, ResetColor, MoveTo(0, 0), Clear(ClearType::All))?;
        out.flush()?;

        self.sim.restart(width, height, self.grid_seed());
        Ok(Instant::now() + Duration::from_secs(self.settings.reset_secs))
    }

    fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.sim.ticks_per_second()
    }

    fn grid_seed(&self) -> u64 {
        if self.settings.seed != 0 {
            return self.settings.seed;
        }
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0xC0FFEE)
    }
}

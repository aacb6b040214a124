//! Renderer hook and a headless text renderer.
//!
//! A renderer is handed the body store after every completed step and must
//! be done with it before the next step begins. It never writes back.

use std::io::{self, Write};

use crate::simulation::engine::Clock;
use crate::simulation::states::System;

/// Consumer of per-step state
pub trait Renderer {
    fn render(&mut self, clock: &Clock, sys: &System);
}

/// No-op renderer, for runs where only the final state matters
impl Renderer for () {
    fn render(&mut self, _clock: &Clock, _sys: &System) {}
}

/// Writes `step t index x y z`, one line per body, every `every` steps.
///
/// The first write error stops further output and is kept for `finish`.
pub struct TraceRenderer<W: Write> {
    out: W,
    every: usize,
    error: Option<io::Error>,
}

impl<W: Write> TraceRenderer<W> {
    pub fn new(out: W, every: usize) -> Self {
        Self {
            out,
            every: every.max(1),
            error: None,
        }
    }

    /// Flush and hand back the writer, or the first write error
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_state(&mut self, clock: &Clock, sys: &System) -> io::Result<()> {
        for (i, x) in sys.positions().iter().enumerate() {
            writeln!(
                self.out,
                "{} {:.6} {} {:.9e} {:.9e} {:.9e}",
                clock.step,
                clock.time(),
                i,
                x.x,
                x.y,
                x.z
            )?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TraceRenderer<W> {
    fn render(&mut self, clock: &Clock, sys: &System) {
        if self.error.is_some() || clock.step % self.every != 0 {
            return;
        }
        if let Err(e) = self.write_state(clock, sys) {
            self.error = Some(e);
        }
    }
}

//! Terminal runner (default binary).
//!
//! Interactive mode draws a plain text view with crossterm and feeds key
//! presses to the engine. `--dump [FRAMES]` runs headless on a simulated
//! clock without input and prints one JSON snapshot per frame.
//!
//! Configuration comes from `BLOCKFALL_*` environment variables (see
//! `blockfall::config`), logging from `RUST_LOG`.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use blockfall::config::RuntimeConfig;
use blockfall::core::{panic_message, FrameDriver, FrameOutcome, GameState};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::view::TextView;

const DEFAULT_DUMP_FRAMES: u64 = 600;

fn main() -> Result<()> {
    env_logger::init();

    // The default hook prints to stderr, which lands on the raw-mode screen
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        log::error!("panic at {}: {}", location, panic_message(info.payload()));
    }));

    let config = RuntimeConfig::from_env().context("reading BLOCKFALL_* configuration")?;
    log::info!("starting with {:?}", config);

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("--dump") => {
            let frames = match args.next() {
                Some(raw) => raw
                    .parse()
                    .with_context(|| format!("invalid frame count {:?}", raw))?,
                None => DEFAULT_DUMP_FRAMES,
            };
            dump(&config, frames)
        }
        Some(other) => anyhow::bail!("unknown argument {:?} (expected --dump [FRAMES])", other),
        None => {
            let mut term = Terminal::new();
            term.enter()?;

            let result = run(&mut term, &config);

            // Always try to restore terminal state.
            let _ = term.exit();
            result
        }
    }
}

/// Headless run: no input, one JSON line per frame until game over.
fn dump(config: &RuntimeConfig, frames: u64) -> Result<()> {
    let mut game = GameState::with_config(config.engine);
    let mut driver = FrameDriver::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for frame in 0..frames {
        let now_ms = frame * config.frame_ms;
        let outcome = driver.frame(now_ms, &mut game, |g| -> Result<()> {
            serde_json::to_writer(&mut out, &g.snapshot())?;
            out.write_all(b"\n")?;
            Ok(())
        });
        for event in game.drain_events() {
            log::debug!("frame {}: {:?}", frame, event);
        }
        if outcome == FrameOutcome::Recovered {
            log::warn!("frame {} recovered", frame);
        }
        if game.game_over() {
            break;
        }
    }

    out.flush()?;
    Ok(())
}

fn run(term: &mut Terminal, config: &RuntimeConfig) -> Result<()> {
    let mut game = GameState::with_config(config.engine);
    let view = TextView::default();
    let mut driver = FrameDriver::new();

    let start = Instant::now();
    let frame_period = Duration::from_millis(config.frame_ms);
    let mut next_frame = start;

    loop {
        // Input with timeout until next frame.
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if Instant::now() < next_frame {
            continue;
        }
        next_frame += frame_period;

        let now_ms = start.elapsed().as_millis() as u64;
        driver.frame(now_ms, &mut game, |g| term.draw(&view.render(&g.snapshot())));

        for event in game.drain_events() {
            log::debug!("{:?}", event);
        }
    }
}

/// Raw-mode terminal that redraws text lines in place.
struct Terminal {
    stdout: io::Stdout,
    buf: Vec<u8>,
    needs_clear: bool,
}

impl Terminal {
    fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(8 * 1024),
            needs_clear: true,
        }
    }

    fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()
    }

    fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force a full clear before the next draw (terminal resize).
    fn invalidate(&mut self) {
        self.needs_clear = true;
    }

    fn draw(&mut self, lines: &[String]) -> Result<()> {
        self.buf.clear();
        if self.needs_clear {
            self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
            self.needs_clear = false;
        }
        for (row, line) in lines.iter().enumerate() {
            self.buf.queue(cursor::MoveTo(0, row as u16))?;
            self.buf.queue(Print(line))?;
            self.buf
                .queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

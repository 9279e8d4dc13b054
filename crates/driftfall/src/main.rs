use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use driftfall_config::Config;
use driftfall_core::Viewport;
use driftfall_particles::ParticleField;
use rand::rngs::ThreadRng;
use ratatui::{DefaultTerminal, Frame};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load();
    let terminal = ratatui::init();
    let result = App::new(&config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Interval between render ticks.
    tick: Duration,
    /// Start of the elapsed-time clock.
    started: Instant,
    /// The animated particle set.
    field: ParticleField,
    /// Randomness source for particle generation.
    rng: ThreadRng,
}

impl App {
    /// Construct a new instance of [`App`] from the loaded configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            running: false,
            tick: config.frame_interval(),
            started: Instant::now(),
            field: ParticleField::new(config.particle_count, config.speed),
            rng: rand::thread_rng(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Milliseconds elapsed since application start.
    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Renders the particle canvas.
    fn render(&mut self, frame: &mut Frame) {
        let now_ms = self.now_ms();
        self.field.render(frame, now_ms, &mut self.rng);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with a timeout so the animation keeps ticking.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.tick)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(width, height) => self.on_resize(width, height),
                Event::Mouse(_) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Rebuild the particle set against the new terminal dimensions.
    /// The only re-entry point into particle logic after the initial build.
    fn on_resize(&mut self, width: u16, height: u16) {
        let now_ms = self.now_ms();
        self.field
            .resize(Viewport::from_cells(width, height), now_ms, &mut self.rng);
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

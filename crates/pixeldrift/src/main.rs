use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pixeldrift_core::FieldConfig;
use pixeldrift_field::{DrawSurface, PreloadGate, SpriteField};
use rand::rngs::ThreadRng;
use ratatui::{DefaultTerminal, Frame};

mod surface;

use surface::PixelSurface;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = pixeldrift_config::load()?;
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Field configuration, loaded once at startup.
    config: FieldConfig,
    /// The terminal pixel canvas; `None` until a usable terminal is seen.
    surface: Option<PixelSurface>,
    /// The sprite field; `None` while the surface is absent (inert mode).
    field: Option<SpriteField>,
    /// Random source for placement and respawn.
    rng: ThreadRng,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: FieldConfig) -> Self {
        Self {
            running: false,
            config,
            surface: None,
            field: None,
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

    /// Advance the field one frame and paint it.
    fn render(&mut self, frame: &mut Frame) {
        if self.surface.is_none() {
            let area = frame.area();
            if area.width == 0 || area.height == 0 {
                // No usable drawing surface: stay inert, no sprites, no field.
                return;
            }
            self.surface = Some(PixelSurface::from_terminal(area.width, area.height));
            self.start_field();
        }

        if let (Some(field), Some(surface)) = (self.field.as_mut(), self.surface.as_mut()) {
            field.tick(surface, &mut self.rng);
        }
        if let Some(surface) = self.surface.as_ref() {
            surface.render(frame);
        }
    }

    /// Decode every built-in asset through the preload gate, then populate
    /// the field exactly once. Decode failures shrink the pool; if nothing
    /// decodes the field stays empty and ticking it is a no-op.
    fn start_field(&mut self) {
        let mut gate = PreloadGate::new(pixeldrift_sprites::NAMES.len());
        for name in pixeldrift_sprites::NAMES {
            gate.record(pixeldrift_sprites::load(name));
        }

        if let (Some(pool), Some(surface)) = (gate.take_pool(), self.surface.as_ref()) {
            self.field = Some(SpriteField::populate(
                pool,
                surface.width(),
                surface.height(),
                self.config.clone(),
                &mut self.rng,
            ));
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with a short timeout to pace the animation near 60 Hz.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => self.on_resize(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Adopt the new terminal dimensions. Sprites are never repositioned
    /// here; the next tick simply uses the new bounds.
    fn on_resize(&mut self, cols: u16, rows: u16) {
        if let Some(surface) = self.surface.as_mut() {
            surface.resize_terminal(cols, rows);
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

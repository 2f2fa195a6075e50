//! Frame loop state
//!
//! One `App` owns the text entity, the playlist and the sound player. The
//! frontend feeds it input and tick counts and hands it a surface to draw on;
//! it never sleeps or polls on its own.

use hecs::World;

use crate::systems::{draw_texts, play_bounce_sounds, remeasure_texts};
use crate::{
    command_for, create_text, random_velocity, step, AppError, Command, Config, Events, GameRng,
    InputEvent, Label, Motion, MusicBackend, Placement, PlaybackState, Playlist, SoundPlayer,
    Surface, TextSpawn,
};

pub struct App<S: SoundPlayer, M: MusicBackend> {
    world: World,
    config: Config,
    rng: GameRng,
    events: Events,
    playlist: Playlist<M>,
    sound: S,
    text: hecs::Entity,
    running: bool,
}

impl<S: SoundPlayer, M: MusicBackend> App<S, M> {
    /// Validate the config, load the bounce clip, start the music and spawn
    /// the text centered with a random velocity.
    pub fn new<F: Surface>(
        config: Config,
        motion: Motion,
        surface: &F,
        mut sound: S,
        music: M,
        mut rng: GameRng,
    ) -> Result<Self, AppError> {
        config.validate()?;
        log::debug!("Starting with {:?}", config);

        let clip = sound.load_clip(&config.bounce_sound)?;
        let playlist =
            Playlist::new(config.music.clone(), music)?.with_fade_out(config.fade_out_ms);

        let label = Label::new(config.text.clone(), config.font_size);
        let size = surface.measure_text(&label);
        let velocity = random_velocity(&mut rng, &config, motion);

        let mut world = World::new();
        let text = create_text(
            &mut world,
            &config,
            TextSpawn {
                label,
                size,
                placement: Placement::Centered,
                velocity,
                motion,
                tint: config.text_color,
                sound: Some(clip),
            },
        );

        Ok(Self {
            world,
            config,
            rng,
            events: Events::new(),
            playlist,
            sound,
            text,
            running: true,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The bouncing text entity
    pub fn text(&self) -> hecs::Entity {
        self.text
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn playlist(&self) -> &Playlist<M> {
        &self.playlist
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    /// Apply one input event
    pub fn handle_input(&mut self, event: InputEvent) -> Result<Option<Command>, AppError> {
        let Some(command) = command_for(event) else {
            return Ok(None);
        };

        match command {
            Command::Quit => self.shutdown(),
            Command::ToggleMusic => match self.playlist.toggle_pause()? {
                PlaybackState::Loading => log::debug!("Ignoring music toggle while loading"),
                PlaybackState::Unloaded => log::debug!("Ignoring music toggle, nothing loaded"),
                PlaybackState::Playing | PlaybackState::Paused => {}
            },
            Command::NextTrack => {
                self.playlist.next()?;
            }
        }
        Ok(Some(command))
    }

    /// Advance the simulation one tick and play bounce sounds.
    /// Returns how many clips were started.
    pub fn tick(&mut self) -> usize {
        step(&mut self.world, &self.config, &mut self.rng, &mut self.events);
        play_bounce_sounds(&self.world, &self.events, &mut self.sound)
    }

    /// Clear to the background and draw the text
    pub fn draw<F: Surface>(&self, surface: &mut F) {
        surface.fill(self.config.background);
        draw_texts(&self.world, surface);
    }

    /// One frame: inputs, `ticks` updates, render. Stops early on quit.
    /// A failed input is logged and the rest of the frame still runs.
    pub fn frame<I, F>(&mut self, inputs: I, ticks: u32, surface: &mut F)
    where
        I: IntoIterator<Item = InputEvent>,
        F: Surface,
    {
        for input in inputs {
            if let Err(e) = self.handle_input(input) {
                log::warn!("Input {:?} failed: {}", input, e);
            }
            if !self.running {
                return;
            }
        }

        for _ in 0..ticks {
            self.tick();
        }
        self.draw(surface);
    }

    /// Replace the displayed text, re-measuring its size
    pub fn set_text<F: Surface>(&mut self, text: impl Into<String>, surface: &F) {
        if let Ok(mut label) = self.world.get::<&mut Label>(self.text) {
            label.text = text.into();
        }
        remeasure_texts(&mut self.world, self.config.viewport, surface);
    }

    /// Stop the music and end the loop
    pub fn shutdown(&mut self) {
        if self.running {
            log::info!("Shutting down");
        }
        self.playlist.stop();
        self.running = false;
    }
}

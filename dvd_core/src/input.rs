/// Keys the app reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Space,
    S,
    Other,
}

/// Input delivered by the frontend. Keys act on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyUp(Key),
    CloseRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    ToggleMusic,
    NextTrack,
}

/// Map an input event to the command it triggers
pub fn command_for(event: InputEvent) -> Option<Command> {
    match event {
        InputEvent::CloseRequested | InputEvent::KeyUp(Key::Escape) => Some(Command::Quit),
        InputEvent::KeyUp(Key::Space) => Some(Command::ToggleMusic),
        InputEvent::KeyUp(Key::S) => Some(Command::NextTrack),
        InputEvent::KeyUp(Key::Other) => None,
    }
}

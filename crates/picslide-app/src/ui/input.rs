use eframe::egui::{InputState, Key};

use crate::action::{Action, ActionRequestQueue, SlideDirection};

struct Shortcut {
    key: Key,
    command: bool,
    action: Action,
}

impl Shortcut {
    const fn command(key: Key, action: Action) -> Self {
        Self {
            key,
            command: true,
            action,
        }
    }

    const fn plain(key: Key, action: Action) -> Self {
        Self {
            key,
            command: false,
            action,
        }
    }
}

const SHORTCUTS: [Shortcut; 6] = [
    Shortcut::command(Key::O, Action::PickImage),
    Shortcut::command(Key::R, Action::Restart),
    Shortcut::plain(Key::ArrowUp, Action::SlideBlank(SlideDirection::Up)),
    Shortcut::plain(Key::ArrowDown, Action::SlideBlank(SlideDirection::Down)),
    Shortcut::plain(Key::ArrowLeft, Action::SlideBlank(SlideDirection::Left)),
    Shortcut::plain(Key::ArrowRight, Action::SlideBlank(SlideDirection::Right)),
];

pub fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    // `i.modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
    for shortcut in SHORTCUTS {
        if i.key_pressed(shortcut.key) && i.modifiers.command == shortcut.command {
            action_queue.request(shortcut.action);
        }
    }
}

use std::mem;

use picslide_game::TileId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    ClickTile(TileId),
    SlideBlank(SlideDirection),
    SetGridSize(u8),
    PickImage,
    Restart,
}

/// The direction a tile should slide, i.e. the arrow key the user
/// pressed. The tile that moves is the blank's neighbor on the opposite
/// side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum SlideDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue};

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::Restart);
        queue.request(Action::SetGridSize(4));

        let drained = queue.take_all();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[0], Action::Restart));
        assert!(matches!(drained[1], Action::SetGridSize(4)));

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }
}

use picslide_game::{Session, Shuffler};

// AppState owns the puzzle engine side of the app: the session state
// machine and the randomness source it shuffles with.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) session: Session,
    pub(crate) shuffler: Shuffler,
}

impl AppState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            session: Session::new(),
            shuffler: Shuffler::new(),
        }
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn with_seed(seed: u64) -> Self {
        Self {
            session: Session::new(),
            shuffler: Shuffler::with_seed(seed),
        }
    }
}

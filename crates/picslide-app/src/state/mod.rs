pub(crate) use self::{app_state::*, ui_state::*};

mod app_state;
mod ui_state;

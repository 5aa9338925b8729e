/// Play Nine: pick digits that add up to the star count, until all nine are used
pub mod action;
pub mod game;
pub mod renderer;
pub mod round;
pub mod view;

pub use action::{Action, ParseActionError};
pub use game::PlayNineGame;
pub use renderer::PlayNineRenderer;
pub use round::{draw_target, Outcome, RoundState, Verdict};

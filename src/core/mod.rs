pub mod engine;
pub mod game;
pub mod renderer;
pub mod script;

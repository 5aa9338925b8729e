/// Renderer trait for drawing game state using Ratatui
use ratatui::Frame;

pub trait Renderer<S> {
    /// Render the current state into the Ratatui Frame
    fn render(frame: &mut Frame, state: &S);
}

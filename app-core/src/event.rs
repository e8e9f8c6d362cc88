/// Whether an applied event is done or has to be applied again in the next
/// frame (e.g. because it waits for a file dialog to return).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventState {
    Finished,
    Busy,
}

pub trait AppEvent {
    type App;
    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String>;

    /// Events acting on the current workspace content are dropped when the
    /// workspace is reset.
    fn is_workspace_bound(&self) -> bool {
        false
    }
}

/// Shared state handed to every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Records parsed from the bundled dataset at startup. `None` when the
    /// file was missing or unreadable.
    pub record_count: Option<usize>,
}

impl AppState {
    pub fn new(record_count: Option<usize>) -> Self {
        Self { record_count }
    }
}

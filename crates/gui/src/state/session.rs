//! Session state: the loaded directory and the current selection.

use brewmap_core::{CoffeeShop, Directory};

/// Outcome of the one-shot directory load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// The loader thread is still running.
    Loading,
    /// The directory is installed and the views are populated.
    Ready,
    /// The load failed with a user-facing message. Terminal: the session
    /// never retries, the user restarts the application instead.
    Failed(String),
}

/// All shared mutable state for one run of the application.
///
/// The directory is installed at most once and never replaced. After that,
/// the selection is the only value that changes, and only through
/// [`Session::select`]; every view reads it, none writes it.
pub struct Session {
    load_state: LoadState,
    directory: Directory,
    selected: Option<usize>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            load_state: LoadState::Loading,
            directory: Directory::default(),
            selected: None,
        }
    }

    /// Install the loaded directory. Happens exactly once per session.
    pub fn install(&mut self, directory: Directory) {
        self.directory = directory;
        self.load_state = LoadState::Ready;
    }

    /// Record a terminal load failure.
    pub fn fail(&mut self, message: String) {
        self.load_state = LoadState::Failed(message);
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// The directory, once it has loaded.
    pub fn directory(&self) -> Option<&Directory> {
        match self.load_state {
            LoadState::Ready => Some(&self.directory),
            _ => None,
        }
    }

    /// Index of the currently selected shop.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The currently selected shop, if any.
    pub fn selected_shop(&self) -> Option<&CoffeeShop> {
        self.selected.and_then(|index| self.directory.get(index))
    }

    /// Move the selection to `index`.
    ///
    /// Returns false and changes nothing when no directory is installed or
    /// the index is out of range. Callers only produce indices of rendered
    /// entries, so a rejected call indicates a caller bug, not user input.
    /// Once any shop has been selected there is no way back to the
    /// no-selection state.
    pub fn select(&mut self, index: usize) -> bool {
        if self.load_state != LoadState::Ready || index >= self.directory.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
name,address,lat,lng
Demitasse,135 S San Pedro St,34.0489,-118.2407
Maru Coffee,1019 S Santa Fe Ave,34.0330,-118.2326";

    fn ready_session() -> Session {
        let mut session = Session::new();
        session.install(Directory::from_text(SAMPLE));
        session
    }

    #[test]
    fn test_select_in_range() {
        let mut session = ready_session();
        assert!(session.select(1));
        assert_eq!(session.selected(), Some(1));
        assert_eq!(session.selected_shop().unwrap().name, "Maru Coffee");
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut session = ready_session();
        assert!(!session.select(2));
        assert_eq!(session.selected(), None);
        assert!(session.selected_shop().is_none());
    }

    #[test]
    fn test_select_before_install_is_ignored() {
        let mut session = Session::new();
        assert!(!session.select(0));
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut session = ready_session();
        assert!(session.select(0));
        let first = session.selected_shop().cloned();
        assert!(session.select(0));
        assert_eq!(session.selected(), Some(0));
        assert_eq!(session.selected_shop().cloned(), first);
    }

    #[test]
    fn test_selection_moves_but_never_clears() {
        let mut session = ready_session();
        session.select(0);
        session.select(1);
        assert_eq!(session.selected(), Some(1));
        // A rejected select does not disturb the current selection.
        session.select(99);
        assert_eq!(session.selected(), Some(1));
    }

    #[test]
    fn test_failed_load_exposes_no_directory() {
        let mut session = Session::new();
        session.fail("Unable to load coffee shop data".to_string());
        assert!(session.directory().is_none());
        assert!(!session.select(0));
        assert!(matches!(session.load_state(), LoadState::Failed(_)));
    }
}

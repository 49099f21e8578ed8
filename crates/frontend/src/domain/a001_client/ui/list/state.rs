use contracts::domain::a001_client::{Client, ClientId};
use leptos::prelude::*;

pub const SAVE_ERROR: &str = "Error al guardar cliente. Verifique los datos o si ya existe.";
pub const DELETE_ERROR: &str = "Error al eliminar cliente.";

/// Outcome of removing a client from the local list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Removal {
    /// The client was in the list and is gone now
    pub removed: bool,
    /// It was the selected one; the selection has been reset
    pub was_selected: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ClientListState {
    pub items: Vec<Client>,
    pub selected: Option<ClientId>,
    pub is_loaded: bool,
}

impl ClientListState {
    pub fn set_items(&mut self, items: Vec<Client>) {
        if let Some(id) = self.selected {
            if !items.iter().any(|c| c.id == id) {
                self.selected = None;
            }
        }
        self.items = items;
        self.is_loaded = true;
    }

    /// The list request failed; stop waiting and keep what is shown
    pub fn load_failed(&mut self) {
        self.is_loaded = true;
    }

    pub fn select(&mut self, id: Option<ClientId>) {
        self.selected = id;
    }

    pub fn find(&self, id: ClientId) -> Option<&Client> {
        self.items.iter().find(|c| c.id == id)
    }

    /// Replace the entry with the same id in place; unknown ids are appended
    pub fn replace(&mut self, client: Client) {
        match self.items.iter_mut().find(|c| c.id == client.id) {
            Some(entry) => *entry = client,
            None => self.items.push(client),
        }
    }

    /// Drop `id` from the list. A second call for the same id is a no-op.
    pub fn remove(&mut self, id: ClientId) -> Removal {
        let before = self.items.len();
        self.items.retain(|c| c.id != id);
        let removed = self.items.len() != before;
        let was_selected = removed && self.selected == Some(id);
        if was_selected {
            self.selected = None;
        }
        Removal {
            removed,
            was_selected,
        }
    }
}

pub fn create_state() -> RwSignal<ClientListState> {
    RwSignal::new(ClientListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: ClientId, name: &str) -> Client {
        Client {
            id,
            name: name.to_string(),
            industry: None,
            contact_email: None,
            tier: None,
        }
    }

    fn loaded() -> ClientListState {
        let mut state = ClientListState::default();
        state.set_items(vec![client(1, "Acme"), client(2, "Globex"), client(3, "Initech")]);
        state
    }

    #[test]
    fn test_remove_selected_client_exactly_once() {
        let mut state = loaded();
        state.select(Some(2));

        let first = state.remove(2);
        assert_eq!(
            first,
            Removal {
                removed: true,
                was_selected: true
            }
        );
        assert_eq!(state.selected, None);
        assert_eq!(state.items.len(), 2);

        let second = state.remove(2);
        assert_eq!(second, Removal::default());
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_remove_other_client_keeps_selection() {
        let mut state = loaded();
        state.select(Some(1));
        let removal = state.remove(3);
        assert!(removal.removed);
        assert!(!removal.was_selected);
        assert_eq!(state.selected, Some(1));
    }

    #[test]
    fn test_replace_in_place() {
        let mut state = loaded();
        state.select(Some(2));
        state.replace(client(2, "Globex Corp"));
        assert_eq!(state.items[1].name, "Globex Corp");
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.selected, Some(2));

        state.replace(client(9, "Umbrella"));
        assert_eq!(state.find(9).map(|c| c.name.as_str()), Some("Umbrella"));
    }

    #[test]
    fn test_failed_load_ends_loading() {
        let mut state = ClientListState::default();
        assert!(!state.is_loaded);
        state.load_failed();
        assert!(state.is_loaded);
        assert!(state.items.is_empty());

        let mut state = loaded();
        state.select(Some(1));
        state.load_failed();
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.selected, Some(1));
    }

    #[test]
    fn test_reload_drops_missing_selection() {
        let mut state = loaded();
        state.select(Some(3));
        state.set_items(vec![client(1, "Acme")]);
        assert_eq!(state.selected, None);
        assert!(state.is_loaded);
    }
}

use crate::config::CardConfig;
use crate::model::{
    ActivePlayerEvent, KeyValueStore, MediaPlayer, Result, SelectionNotifier, ACTIVE_PLAYER_KEY,
};

/// Selection state of a single group row.
///
/// Only the owner of the list deselects a row (through [`assign`]); the row
/// itself can only go from unselected to selected.
///
/// [`assign`]: GroupSelection::assign
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupSelection {
    selected: bool,
}

impl GroupSelection {
    pub fn new(selected: bool) -> Self {
        GroupSelection { selected }
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn assign(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Announces the player if this row is selected. Returns whether a
    /// notification was sent.
    pub fn notify_selection(
        &self,
        player: &MediaPlayer,
        config: &CardConfig,
        notifier: &dyn SelectionNotifier,
    ) -> Result<bool> {
        if !self.selected {
            return Ok(false);
        }
        notifier.notify(&ActivePlayerEvent::new(player.id.clone()), config)?;
        Ok(true)
    }

    /// Called once the row is mounted so a preselected row announces itself.
    pub fn on_attach(
        &self,
        player: &MediaPlayer,
        config: &CardConfig,
        notifier: &dyn SelectionNotifier,
    ) -> Result<bool> {
        self.notify_selection(player, config, notifier)
    }

    /// Selects the row, remembers the player for this session and announces
    /// it. Clicking an already selected row does nothing and returns
    /// `Ok(false)`.
    ///
    /// A failed storage write does not stop the announcement; the error is
    /// reported after the notifier ran. If the notifier fails too, its error
    /// is returned and the storage error is only logged.
    pub fn click(
        &mut self,
        player: &MediaPlayer,
        config: &CardConfig,
        storage: &dyn KeyValueStore,
        notifier: &dyn SelectionNotifier,
    ) -> Result<bool> {
        if self.selected {
            return Ok(false);
        }
        self.selected = true;
        log::debug!("Group {} selected", player.id);

        let stored = storage.set(ACTIVE_PLAYER_KEY, &player.id);
        if let Err(e) = self.notify_selection(player, config, notifier) {
            if let Err(storage_error) = &stored {
                log::warn!("Failed to remember group {}: {}", player.id, storage_error);
            }
            return Err(e);
        }
        stored.map(|()| true)
    }
}

use crate::config::CardConfig;
use crate::model::{PlayerId, Result};
use serde::{Deserialize, Serialize};

/// Name of the DOM event announcing the active player.
pub const ACTIVE_PLAYER_EVENT: &str = "sonos-card-active-player";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivePlayerEvent {
    pub entity_id: PlayerId,
}

impl ActivePlayerEvent {
    pub fn new(entity_id: impl Into<PlayerId>) -> Self {
        ActivePlayerEvent {
            entity_id: entity_id.into(),
        }
    }
}

/// Tells whoever owns the group list which player became active.
pub trait SelectionNotifier {
    fn notify(&self, event: &ActivePlayerEvent, config: &CardConfig) -> Result<()>;
}

/// Forwards notifications to a plain closure.
pub struct CallbackNotifier<F>(pub F);

impl<F> SelectionNotifier for CallbackNotifier<F>
where
    F: Fn(&ActivePlayerEvent),
{
    fn notify(&self, event: &ActivePlayerEvent, _config: &CardConfig) -> Result<()> {
        (self.0)(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn event_detail_is_camel_case() {
        let event = ActivePlayerEvent::new("media_player.kitchen");
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"entityId":"media_player.kitchen"}"#);
    }

    #[test]
    fn callback_notifier_forwards_event() {
        let seen = RefCell::new(Vec::new());
        let notifier = CallbackNotifier(|event: &ActivePlayerEvent| {
            seen.borrow_mut().push(event.entity_id.clone())
        });

        notifier
            .notify(
                &ActivePlayerEvent::new("media_player.den"),
                &CardConfig::default(),
            )
            .unwrap();

        assert_eq!(*seen.borrow(), vec!["media_player.den".to_string()]);
    }
}

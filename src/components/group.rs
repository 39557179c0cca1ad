use crate::components::{DomNotifier, IconsComp, PlayingBarsComp, StorageHandle};
use crate::config::CardConfig;
use crate::model::{
    ActivePlayerEvent, GroupSelection, GroupView, MediaPlayer, Result, SelectionNotifier, Store,
};
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GroupProps {
    pub store: Store,
    pub player: MediaPlayer,
    #[prop_or_default]
    pub selected: bool,
    #[prop_or_default]
    pub on_select: Callback<ActivePlayerEvent>,
    /// Falls back to the browser session storage.
    #[prop_or_default]
    pub storage: Option<StorageHandle>,
}

/// Sends the active player both to the parent callback and up the DOM.
struct RowNotifier {
    dom: Option<DomNotifier>,
    on_select: Callback<ActivePlayerEvent>,
}

impl RowNotifier {
    fn new(node_ref: &NodeRef, on_select: Callback<ActivePlayerEvent>) -> Self {
        RowNotifier {
            dom: node_ref.cast::<Element>().map(DomNotifier::new),
            on_select,
        }
    }
}

impl SelectionNotifier for RowNotifier {
    fn notify(&self, event: &ActivePlayerEvent, config: &CardConfig) -> Result<()> {
        self.on_select.emit(event.clone());
        match &self.dom {
            Some(dom) => dom.notify(event, config),
            None => Ok(()),
        }
    }
}

/// One clickable row in the group list.
#[function_component(GroupComp)]
pub fn group_comp(props: &GroupProps) -> Html {
    let node_ref = use_node_ref();
    let selection = use_state_eq(|| GroupSelection::new(props.selected));
    let session = use_state(StorageHandle::session);
    let storage = props
        .storage
        .clone()
        .unwrap_or_else(|| (*session).clone());

    {
        let selection = selection.clone();
        use_effect_with(props.selected, move |selected| {
            selection.set(GroupSelection::new(*selected));
        });
    }

    {
        let selection = *selection;
        let node_ref = node_ref.clone();
        let props = props.clone();
        use_effect_with((), move |_| {
            let notifier = RowNotifier::new(&node_ref, props.on_select.clone());
            if let Err(e) = selection.on_attach(&props.player, &props.store.config, &notifier) {
                log::warn!("Failed to announce group {}: {}", props.player.id, e);
            }
        });
    }

    let onclick = {
        let selection = selection.clone();
        let node_ref = node_ref.clone();
        let props = props.clone();
        let storage = storage.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *selection;
            let notifier = RowNotifier::new(&node_ref, props.on_select.clone());
            if let Err(e) = next.click(
                &props.player,
                &props.store.config,
                &*storage,
                &notifier,
            ) {
                log::warn!("Failed to select group {}: {}", props.player.id, e);
            }
            selection.set(next);
        })
    };

    let view = GroupView::project(&props.player, &props.store);
    let selected = selection.is_selected();

    html! {
        <mwc-list-item
            ref={node_ref}
            hasmeta=""
            selected={selected}
            activated={selected.then_some("")}
            {onclick}
        >
            <div class="row">
                <IconsComp layout={view.icon_layout()} />
                <div class="text">
                    <span class="speakers">{&view.speaker_list}</span>
                    <span class="song-title">{&view.current_track}</span>
                </div>
            </div>
            if view.playing {
                <PlayingBarsComp />
            }
        </mwc-list-item>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MemoryStore;

    fn kitchen() -> MediaPlayer {
        MediaPlayer::new("media_player.kitchen", "Kitchen")
    }

    #[test]
    fn props_default_to_unselected_session_row() {
        let props = yew::props!(GroupProps {
            store: Store::default(),
            player: kitchen(),
        });

        assert!(!props.selected);
        assert!(props.storage.is_none());
    }

    #[test]
    fn default_storage_keeps_props_equal_across_renders() {
        let on_select = Callback::from(|_: ActivePlayerEvent| ());
        let first = yew::props!(GroupProps {
            store: Store::default(),
            player: kitchen(),
            on_select: on_select.clone(),
        });
        let second = yew::props!(GroupProps {
            store: Store::default(),
            player: kitchen(),
            on_select,
        });

        assert!(first == second);
    }

    #[test]
    fn injected_storage_keeps_props_equal_when_shared() {
        let on_select = Callback::from(|_: ActivePlayerEvent| ());
        let storage = StorageHandle::new(MemoryStore::new());
        let first = yew::props!(GroupProps {
            store: Store::default(),
            player: kitchen(),
            on_select: on_select.clone(),
            storage: Some(storage.clone()),
        });
        let second = yew::props!(GroupProps {
            store: Store::default(),
            player: kitchen(),
            on_select,
            storage: Some(storage),
        });

        assert!(first == second);
    }

    #[test]
    fn storage_handles_compare_by_identity() {
        let storage = StorageHandle::new(MemoryStore::new());
        assert!(storage == storage.clone());
        assert!(storage != StorageHandle::new(MemoryStore::new()));
    }
}

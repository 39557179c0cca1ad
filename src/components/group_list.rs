use crate::components::{GroupComp, StorageHandle, GROUP_STYLES};
use crate::model::{ActivePlayerEvent, MediaPlayer, PlayerId, Store};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GroupListProps {
    pub store: Store,
    pub players: Vec<MediaPlayer>,
    #[prop_or_default]
    pub active_player_id: Option<PlayerId>,
    #[prop_or_default]
    pub on_select: Callback<ActivePlayerEvent>,
    /// Falls back to the browser session storage.
    #[prop_or_default]
    pub storage: Option<StorageHandle>,
}

#[function_component(GroupListComp)]
pub fn group_list_comp(props: &GroupListProps) -> Html {
    let session = use_state(StorageHandle::session);
    let storage = props
        .storage
        .clone()
        .unwrap_or_else(|| (*session).clone());

    html! {
        <div class="groups">
            <style>{GROUP_STYLES}</style>
            {for props.players.iter().map(|player| {
                let selected = props.active_player_id.as_ref() == Some(&player.id);
                html! {
                    <GroupComp
                        key={player.id.clone()}
                        store={props.store.clone()}
                        player={player.clone()}
                        {selected}
                        on_select={props.on_select.clone()}
                        storage={Some(storage.clone())}
                    />
                }
            })}
        </div>
    }
}

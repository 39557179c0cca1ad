use speaker_group_card::prelude::*;
use web_sys::Event;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

fn demo_players() -> Vec<MediaPlayer> {
    vec![
        MediaPlayer::new("media_player.living_room", "Living Room")
            .with_members(vec![
                Member::new("media_player.living_room", "Living Room").with_icon("mdi:sofa"),
                Member::new("media_player.kitchen", "Kitchen").with_icon("mdi:fridge"),
                Member::new("media_player.patio", "Patio").with_icon("mdi:grill"),
            ])
            .with_track("Khruangbin", "Maria También")
            .with_state(PlaybackState::Playing),
        MediaPlayer::new("media_player.office", "Office")
            .with_members(vec![Member::new("media_player.office", "Office").with_icon("mdi:desk")])
            .with_track("Nils Frahm", "Says")
            .with_state(PlaybackState::Paused),
        MediaPlayer::new("media_player.bedroom", "Bedroom").with_members(vec![
            Member::new("media_player.bedroom", "Bedroom").with_icon("mdi:bed"),
            Member::new("media_player.bath", "Bath").with_icon("mdi:shower"),
            Member::new("media_player.hall", "Hall").with_icon("mdi:door"),
            Member::new("media_player.kids", "Kids").with_icon("mdi:teddy-bear"),
            Member::new("media_player.attic", "Attic"),
            Member::new("media_player.guest", "Guest").with_icon("mdi:account"),
        ]),
        MediaPlayer::new("media_player.garage", "Garage"),
    ]
}

#[function_component(App)]
pub fn app() -> Html {
    let players = use_state(demo_players);
    let store = use_state(|| {
        Store::new(
            CardConfig::default(),
            vec![PredefinedGroup::new(
                "Upstairs",
                vec![
                    "media_player.bedroom".to_string(),
                    "media_player.bath".to_string(),
                    "media_player.hall".to_string(),
                    "media_player.kids".to_string(),
                    "media_player.attic".to_string(),
                    "media_player.guest".to_string(),
                ],
            )],
        )
    });
    let active_player_id = use_state(|| {
        SessionStore
            .get(ACTIVE_PLAYER_KEY)
            .or_else(|| players.first().map(|player| player.id.clone()))
    });

    let on_select = {
        let active_player_id = active_player_id.clone();
        Callback::from(move |event: ActivePlayerEvent| {
            log::info!("Active player: {}", event.entity_id);
            active_player_id.set(Some(event.entity_id));
        })
    };

    let on_change = {
        let store = store.clone();
        move |e: Event| {
            let target = e.target_unchecked_into::<HtmlSelectElement>();
            let mut new_store = (*store).clone();
            new_store.config.hide_group_current_track = target.value() == "hide";
            store.set(new_store);
        }
    };

    html! {
        <div>
            <select onchange={on_change}>
                <option value="show">{"Show current track"}</option>
                <option value="hide">{"Hide current track"}</option>
            </select>
            <GroupListComp
                store={(*store).clone()}
                players={(*players).clone()}
                active_player_id={(*active_player_id).clone()}
                {on_select}
            />
        </div>
    }
}

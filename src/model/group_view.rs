use crate::model::{layout_icons, speaker_list, IconLayout, MediaPlayer, Store};

/// Everything a group row displays, derived from the player and the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupView {
    pub speaker_list: String,
    pub current_track: String,
    pub icons: Vec<String>,
    pub playing: bool,
}

impl GroupView {
    pub fn project(player: &MediaPlayer, store: &Store) -> Self {
        let current_track = if store.config.hide_group_current_track {
            String::new()
        } else {
            player.current_track()
        };

        GroupView {
            speaker_list: speaker_list(player, &store.predefined_groups),
            current_track,
            icons: player
                .members
                .iter()
                .filter_map(|member| member.icon().map(str::to_string))
                .collect(),
            playing: player.is_playing(),
        }
    }

    pub fn icon_layout(&self) -> IconLayout {
        layout_icons(&self.icons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CardConfig;
    use crate::model::{Member, PlaybackState};

    fn group() -> MediaPlayer {
        MediaPlayer::new("media_player.kitchen", "Kitchen")
            .with_members(vec![
                Member::new("media_player.kitchen", "Kitchen").with_icon("mdi:fridge"),
                Member::new("media_player.den", "Den"),
                Member::new("media_player.bath", "Bath").with_icon("mdi:shower"),
            ])
            .with_track("Artist", "Title")
            .with_state(PlaybackState::Playing)
    }

    #[test]
    fn projects_player_state() {
        let view = GroupView::project(&group(), &Store::default());

        assert_eq!(view.speaker_list, "Kitchen + Den + Bath");
        assert_eq!(view.current_track, "Artist - Title");
        assert!(view.playing);
    }

    #[test]
    fn drops_members_without_icons() {
        let view = GroupView::project(&group(), &Store::default());
        assert_eq!(view.icons, vec!["mdi:fridge", "mdi:shower"]);
        assert_eq!(view.icon_layout().icon_count(), 2);
    }

    #[test]
    fn hidden_track_is_always_blank() {
        let store = Store {
            config: CardConfig {
                hide_group_current_track: true,
                ..CardConfig::default()
            },
            ..Store::default()
        };

        for state in [PlaybackState::Playing, PlaybackState::Paused] {
            let view = GroupView::project(&group().with_state(state), &store);
            assert_eq!(view.current_track, "");
        }
    }

    #[test]
    fn paused_group_is_not_playing() {
        let view = GroupView::project(&group().with_state(PlaybackState::Paused), &Store::default());
        assert!(!view.playing);
    }
}

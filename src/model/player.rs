use crate::model::{Identifiable, Named, PlaybackState};
use serde::{Deserialize, Serialize};

pub type PlayerId = String;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Member {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Member {
            id: id.into(),
            name: name.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// The icon reference, if the member has a non-empty one.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref().filter(|icon| !icon.is_empty())
    }
}

impl Identifiable for Member {
    fn identifier(&self) -> &str {
        &self.id
    }
}

impl Named for Member {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A group of speakers as seen by the dashboard. The group is addressed by
/// its coordinator's entity id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPlayer {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub media_artist: Option<String>,
    #[serde(default)]
    pub media_title: Option<String>,
    #[serde(default)]
    pub state: PlaybackState,
}

impl MediaPlayer {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        MediaPlayer {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_members(mut self, members: Vec<Member>) -> Self {
        self.members = members;
        self
    }

    pub fn with_track(mut self, artist: impl Into<String>, title: impl Into<String>) -> Self {
        self.media_artist = Some(artist.into());
        self.media_title = Some(title.into());
        self
    }

    pub fn with_state(mut self, state: PlaybackState) -> Self {
        self.state = state;
        self
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn current_track(&self) -> String {
        let artist = self.media_artist.as_deref().filter(|s| !s.is_empty());
        let title = self.media_title.as_deref().filter(|s| !s.is_empty());
        match (artist, title) {
            (Some(artist), Some(title)) => format!("{artist} - {title}"),
            (Some(single), None) | (None, Some(single)) => single.to_string(),
            (None, None) => String::new(),
        }
    }
}

impl Identifiable for MediaPlayer {
    fn identifier(&self) -> &str {
        &self.id
    }
}

impl Named for MediaPlayer {
    fn name(&self) -> &str {
        &self.name
    }
}

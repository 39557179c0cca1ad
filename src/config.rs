use crate::model::GroupError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Player,
    #[serde(rename = "media browser")]
    MediaBrowser,
    Groups,
    Grouping,
    Volumes,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Player,
        Section::MediaBrowser,
        Section::Groups,
        Section::Grouping,
        Section::Volumes,
    ];
}

/// Card options that affect how a group row is rendered and announced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardConfig {
    /// Leave the track line of every group row blank.
    pub hide_group_current_track: bool,
    /// Sections shown by the card. `None` means all of them.
    pub sections: Option<Vec<Section>>,
}

impl CardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, GroupError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn shows_all_sections(&self) -> bool {
        match &self.sections {
            None => true,
            Some(sections) => Section::ALL.iter().all(|s| sections.contains(s)),
        }
    }
}

use crate::model::{MediaPlayer, Named, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A named speaker grouping configured ahead of time by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PredefinedGroup {
    pub name: String,
    pub entities: Vec<PlayerId>,
}

impl PredefinedGroup {
    pub fn new(name: impl Into<String>, entities: Vec<PlayerId>) -> Self {
        PredefinedGroup {
            name: name.into(),
            entities,
        }
    }

    /// True when the group consists of exactly the player's members.
    pub fn matches(&self, player: &MediaPlayer) -> bool {
        let ours: BTreeSet<&str> = self.entities.iter().map(String::as_str).collect();
        let theirs: BTreeSet<&str> = player.members.iter().map(|m| m.id.as_str()).collect();
        !ours.is_empty() && ours == theirs
    }
}

impl Named for PredefinedGroup {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Human readable summary of who is playing in a group.
pub fn speaker_list(player: &MediaPlayer, predefined_groups: &[PredefinedGroup]) -> String {
    if let Some(group) = predefined_groups.iter().find(|g| g.matches(player)) {
        return group.name.clone();
    }
    if player.members.is_empty() {
        return player.name.clone();
    }
    player
        .members
        .iter()
        .map(|member| member.name.as_str())
        .collect::<Vec<_>>()
        .join(" + ")
}

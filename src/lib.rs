#[cfg(feature = "yew")]
pub mod components;
pub mod config;
pub mod model;

pub mod prelude {
    #[cfg(feature = "yew")]
    pub use crate::components::*;
    pub use crate::config::{CardConfig, Section};
    pub use crate::model::ActivePlayerEvent;
    pub use crate::model::GroupError;
    pub use crate::model::GroupSelection;
    pub use crate::model::GroupView;
    pub use crate::model::Identifiable;
    pub use crate::model::KeyValueStore;
    pub use crate::model::MediaPlayer;
    pub use crate::model::Member;
    pub use crate::model::MemoryStore;
    pub use crate::model::Named;
    pub use crate::model::PlaybackState;
    pub use crate::model::PredefinedGroup;
    pub use crate::model::SelectionNotifier;
    pub use crate::model::Store;
    pub use crate::model::ACTIVE_PLAYER_KEY;
}

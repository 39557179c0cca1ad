mod error;
mod group_view;
mod icon_layout;
mod identifiable;
mod named;
mod notifier;
mod playback_state;
mod player;
mod predefined_group;
mod selection;
mod storage;
mod store;

pub use error::{GroupError, Result};
pub use group_view::GroupView;
pub use icon_layout::{layout_icons, IconFragment, IconLayout, IconSize, MAX_ICONS};
pub use identifiable::Identifiable;
pub use named::Named;
pub use notifier::{ActivePlayerEvent, CallbackNotifier, SelectionNotifier, ACTIVE_PLAYER_EVENT};
pub use playback_state::PlaybackState;
pub use player::{MediaPlayer, Member, PlayerId};
pub use predefined_group::{speaker_list, PredefinedGroup};
pub use selection::GroupSelection;
pub use storage::{KeyValueStore, MemoryStore, ACTIVE_PLAYER_KEY};
pub use store::Store;

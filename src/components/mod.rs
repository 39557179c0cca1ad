mod browser;
mod group;
mod group_list;
mod icons;
mod playing_bars;

pub use browser::{DomNotifier, SessionStore, StorageHandle};
pub use group::{GroupComp, GroupProps};
pub use group_list::{GroupListComp, GroupListProps};
pub use icons::{IconsComp, IconsProps};
pub use playing_bars::PlayingBarsComp;

/// Styles for group rows. Hosts rendering [`GroupComp`] outside of
/// [`GroupListComp`] include this once themselves.
pub const GROUP_STYLES: &str = include_str!("../../assets/group.css");

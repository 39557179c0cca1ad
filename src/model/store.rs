use crate::config::CardConfig;
use crate::model::PredefinedGroup;

/// Shared dashboard state a group row reads from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    pub config: CardConfig,
    pub predefined_groups: Vec<PredefinedGroup>,
}

impl Store {
    pub fn new(config: CardConfig, predefined_groups: Vec<PredefinedGroup>) -> Self {
        Store {
            config,
            predefined_groups,
        }
    }
}

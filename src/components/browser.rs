use crate::config::CardConfig;
use crate::model::{
    ActivePlayerEvent, GroupError, KeyValueStore, Result, SelectionNotifier, ACTIVE_PLAYER_EVENT,
};
use gloo::storage::{SessionStorage, Storage};
use std::ops::Deref;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit, Element};

fn js_error(err: JsValue) -> String {
    format!("{:?}", err)
}

/// `window.sessionStorage`, storing values as plain strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStore;

impl KeyValueStore for SessionStore {
    fn get(&self, key: &str) -> Option<String> {
        SessionStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        SessionStorage::raw()
            .set_item(key, value)
            .map_err(|e| GroupError::Storage(js_error(e)))
    }
}

/// Shared handle to the store a group row persists its selection in.
#[derive(Clone)]
pub struct StorageHandle(Rc<dyn KeyValueStore>);

impl StorageHandle {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        StorageHandle(Rc::new(store))
    }

    pub fn session() -> Self {
        Self::new(SessionStore)
    }
}

impl Deref for StorageHandle {
    type Target = dyn KeyValueStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for StorageHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Announces the active player from a row element so ancestors can react.
///
/// When the card only shows some of its sections, the other sections live in
/// separate cards that follow the URL hash instead of listening for events.
pub struct DomNotifier {
    element: Element,
}

impl DomNotifier {
    pub fn new(element: Element) -> Self {
        DomNotifier { element }
    }

    fn dispatch(&self, event: &ActivePlayerEvent) -> Result<()> {
        let detail = js_sys::Object::new();
        js_sys::Reflect::set(
            &detail,
            &JsValue::from_str("entityId"),
            &JsValue::from_str(&event.entity_id),
        )
        .map_err(|e| GroupError::Dispatch(js_error(e)))?;

        let init = CustomEventInit::new();
        init.set_bubbles(true);
        init.set_composed(true);
        init.set_detail(&detail);

        let dom_event = CustomEvent::new_with_event_init_dict(ACTIVE_PLAYER_EVENT, &init)
            .map_err(|e| GroupError::Dispatch(js_error(e)))?;
        self.element
            .dispatch_event(&dom_event)
            .map_err(|e| GroupError::Dispatch(js_error(e)))?;
        Ok(())
    }

    fn navigate(&self, event: &ActivePlayerEvent) -> Result<()> {
        gloo::utils::window()
            .location()
            .set_hash(&event.entity_id)
            .map_err(|e| GroupError::Dispatch(js_error(e)))
    }
}

impl SelectionNotifier for DomNotifier {
    fn notify(&self, event: &ActivePlayerEvent, config: &CardConfig) -> Result<()> {
        if config.shows_all_sections() {
            log::debug!("Dispatching {} for {}", ACTIVE_PLAYER_EVENT, event.entity_id);
            self.dispatch(event)
        } else {
            log::debug!("Navigating to #{}", event.entity_id);
            self.navigate(event)
        }
    }
}

use crate::domain::model::{ItemList, ScopeState, SortKey};
use crate::domain::ports::ViewModel;
use tokio::sync::watch;

/// View-model held in a watch channel.
///
/// A renderer subscribes and redraws whenever the controller or the user changes a field.
/// Reading never reaches the network.
#[derive(Debug)]
pub struct SharedScope {
    state: watch::Sender<ScopeState>,
}

impl SharedScope {
    pub fn new() -> Self {
        let (state, _) = watch::channel(ScopeState::default());
        Self { state }
    }

    pub fn subscribe(&self) -> watch::Receiver<ScopeState> {
        self.state.subscribe()
    }

    pub fn phones(&self) -> Option<ItemList> {
        self.state.borrow().phones.clone()
    }

    pub fn order_prop(&self) -> Option<SortKey> {
        self.state.borrow().order_prop.clone()
    }
}

impl Default for SharedScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewModel for SharedScope {
    fn set_phones(&self, phones: ItemList) {
        self.state.send_modify(|state| state.phones = Some(phones));
    }

    fn set_order_prop(&self, key: SortKey) {
        self.state.send_modify(|state| state.order_prop = Some(key));
    }

    fn snapshot(&self) -> ScopeState {
        self.state.borrow().clone()
    }
}

use crate::domain::model::{ItemList, SortKey, PHONES_PATH};
use crate::domain::ports::{HttpClient, ViewModel};
use crate::utils::error::PhonecatError;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Name the phone list controller is mounted under.
pub const PHONE_LIST_CTRL: &str = "PhoneListCtrl";

/// Binds the remote phone list to one view-model.
///
/// Each call to [`activate`](Self::activate) is one controller activation: the sort key is
/// set immediately and a single GET for the phone list runs in the background.
pub struct PhoneListController<H: HttpClient, V: ViewModel> {
    http: Arc<H>,
    scope: Arc<V>,
}

impl<H, V> PhoneListController<H, V>
where
    H: HttpClient + 'static,
    V: ViewModel + 'static,
{
    pub fn new(http: Arc<H>, scope: Arc<V>) -> Self {
        Self { http, scope }
    }

    pub fn scope(&self) -> &Arc<V> {
        &self.scope
    }

    /// Must be called from within a tokio runtime.
    pub fn activate(&self) -> Activation {
        self.scope.set_order_prop(SortKey::default());

        let http = Arc::clone(&self.http);
        let scope = Arc::clone(&self.scope);
        let handle = tokio::spawn(async move { fetch_phones(&*http, &*scope).await });

        Activation { handle }
    }
}

async fn fetch_phones<H, V>(http: &H, scope: &V) -> Settlement
where
    H: HttpClient + ?Sized,
    V: ViewModel + ?Sized,
{
    tracing::debug!("Requesting phone list from {}", PHONES_PATH);

    match http.get(PHONES_PATH).await.and_then(ItemList::from_body) {
        Ok(phones) => {
            let count = phones.len();
            scope.set_phones(phones);
            tracing::debug!("Phone list updated with {} items", count);
            Settlement::Populated { count }
        }
        Err(e) => {
            // The view keeps whatever it was showing.
            tracing::warn!("Phone list request failed: {}", e);
            Settlement::Dropped(e)
        }
    }
}

/// Handle on the background request of one activation.
///
/// Dropping it does not cancel the request.
#[derive(Debug)]
pub struct Activation {
    handle: JoinHandle<Settlement>,
}

impl Activation {
    pub fn is_settled(&self) -> bool {
        self.handle.is_finished()
    }

    pub async fn settled(self) -> Settlement {
        match self.handle.await {
            Ok(settlement) => settlement,
            Err(e) => {
                tracing::warn!("Phone list request did not complete: {}", e);
                Settlement::Aborted
            }
        }
    }
}

/// How an activation's request ended. Only the `Populated` case touches the view-model.
#[derive(Debug)]
pub enum Settlement {
    Populated { count: usize },
    Dropped(PhonecatError),
    Aborted,
}

impl Settlement {
    pub fn is_populated(&self) -> bool {
        matches!(self, Self::Populated { .. })
    }
}

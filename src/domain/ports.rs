use crate::domain::model::{ItemList, ScopeState, SortKey};
use crate::utils::error::Result;
use async_trait::async_trait;

/// GET-only HTTP capability. Non-success statuses come back as errors.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, path: &str) -> Result<serde_json::Value>;
}

/// Mutable view-model shared with a rendering layer.
pub trait ViewModel: Send + Sync {
    fn set_phones(&self, phones: ItemList);
    fn set_order_prop(&self, key: SortKey);
    fn snapshot(&self) -> ScopeState;
}

pub trait ConfigProvider: Send + Sync {
    fn app_name(&self) -> &str;
    fn base_url(&self) -> &str;
}

use crate::adapters::{ReqwestHttpClient, SharedScope};
use crate::core::controller::{Activation, PhoneListController, PHONE_LIST_CTRL};
use crate::domain::ports::{ConfigProvider, HttpClient};
use crate::utils::error::Result;
use std::sync::Arc;

/// Composition root: owns the shared HTTP capability and mounts controllers onto fresh scopes.
pub struct PhonecatApp<H: HttpClient> {
    name: String,
    http: Arc<H>,
}

/// A mounted controller: the scope a renderer reads and the activation's pending request.
pub struct MountedView<V> {
    pub controller: &'static str,
    pub scope: Arc<V>,
    pub activation: Activation,
}

impl PhonecatApp<ReqwestHttpClient> {
    pub fn bootstrap<C: ConfigProvider>(config: &C) -> Result<Self> {
        let http = ReqwestHttpClient::new(config.base_url())?;
        tracing::info!(
            "Bootstrapping {} against {}",
            config.app_name(),
            http.base_url()
        );
        Ok(Self::new(config.app_name(), http))
    }
}

impl<H: HttpClient + 'static> PhonecatApp<H> {
    pub fn new(name: impl Into<String>, http: H) -> Self {
        Self {
            name: name.into(),
            http: Arc::new(http),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_list_controller(
        &self,
        scope: Arc<SharedScope>,
    ) -> PhoneListController<H, SharedScope> {
        PhoneListController::new(Arc::clone(&self.http), scope)
    }

    /// Creates a blank scope, wires a phone list controller to it and activates it once.
    pub fn mount_phone_list(&self) -> MountedView<SharedScope> {
        let scope = Arc::new(SharedScope::new());
        let activation = self.phone_list_controller(Arc::clone(&scope)).activate();

        tracing::debug!("Mounted {} in {}", PHONE_LIST_CTRL, self.name);
        MountedView {
            controller: PHONE_LIST_CTRL,
            scope,
            activation,
        }
    }
}

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlConfig;

pub use adapters::{ReqwestHttpClient, SharedScope};
pub use core::app::{MountedView, PhonecatApp};
pub use core::controller::{Activation, PhoneListController, Settlement, PHONE_LIST_CTRL};
pub use domain::model::{ItemList, ScopeState, SortKey, PHONES_PATH};
pub use utils::error::{PhonecatError, Result};

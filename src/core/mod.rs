pub mod app;
pub mod controller;

pub use crate::domain::model::{ItemList, ScopeState, SortKey, PHONES_PATH};
pub use crate::domain::ports::{ConfigProvider, HttpClient, ViewModel};
pub use crate::utils::error::Result;

// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod render;
pub mod scope;

pub use http::ReqwestHttpClient;
pub use scope::SharedScope;

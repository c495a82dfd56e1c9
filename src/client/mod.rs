// Analysis and Health service clients

pub mod provider;
pub mod http;

pub use provider::*;
pub use http::HttpServiceClient;

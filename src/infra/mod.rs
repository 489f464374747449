pub mod google_provider;
pub mod http_client;

pub use google_provider::GoogleGeocodingProvider;
pub use http_client::ReqwestHttp;

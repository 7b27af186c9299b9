pub(crate) mod api_provider;

pub use api_provider::ApiProvider;

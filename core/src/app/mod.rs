#[cfg(feature = "app_env")]
pub mod env;
#[cfg(feature = "app_tracing")]
pub mod tracing;
#[cfg(feature = "app_storage")]
pub mod storage;

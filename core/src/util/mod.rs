pub mod maybe_send;
#[cfg(feature = "time")]
pub mod time;

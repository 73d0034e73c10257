pub(crate) mod serde;
#[cfg(feature = "serde_json")]
mod serde_json;

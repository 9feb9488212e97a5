//! Replaying adapters that serve recorded interactions from cassettes.

pub mod image_generator;

use std::sync::{Arc, Mutex};

use crate::cassette::replayer::CassetteReplayer;

/// Retrieve the next recorded output for a given port and method.
///
/// # Panics
///
/// Panics if the cassette has no more interactions for the pair.
pub(crate) fn next_output(
    replayer: &Arc<Mutex<CassetteReplayer>>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let mut guard = replayer.lock().expect("replayer lock poisoned");
    guard.next_interaction(port, method).output.clone()
}

/// Deserialize a replayed output as `Result<T, String>` from the Ok/Err
/// JSON convention.
pub(crate) fn replay_result<T: serde::de::DeserializeOwned>(
    output: serde_json::Value,
) -> Result<T, String> {
    if let Some(err_val) = output.get("Err") {
        return Err(err_val.as_str().unwrap_or("replayed error").to_string());
    }
    if let Some(ok_val) = output.get("Ok") {
        return serde_json::from_value(ok_val.clone()).map_err(|e| e.to_string());
    }
    serde_json::from_value(output).map_err(|e| e.to_string())
}

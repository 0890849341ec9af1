//! Secrets read from AWS Systems Manager Parameter Store.

use anyhow::{Context, Result};
use aws_config::BehaviorVersion;
use aws_sdk_ssm::Client;

use crate::config::parameter_key;

/// Reads every parameter under `path`, recursively and decrypted.
///
/// Returns `(key, value)` pairs where `key` is the parameter name with `path`
/// stripped. `path` must end in `/`.
pub async fn load_parameters(path: &str) -> Result<Vec<(String, String)>> {
    let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    let client = Client::new(&config);

    let mut parameters = Vec::new();
    let mut next_token = None;

    loop {
        let output = client
            .get_parameters_by_path()
            .path(path)
            .recursive(true)
            .with_decryption(true)
            .set_next_token(next_token.take())
            .send()
            .await
            .with_context(|| format!("failed to read parameters under {path}"))?;

        for parameter in output.parameters() {
            let (Some(name), Some(value)) = (parameter.name(), parameter.value()) else {
                continue;
            };
            if let Some(key) = parameter_key(path, name) {
                parameters.push((key.to_string(), value.to_string()));
            }
        }

        match output.next_token() {
            Some(token) => next_token = Some(token.to_string()),
            None => break,
        }
    }

    Ok(parameters)
}

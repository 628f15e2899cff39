//! API token storage via the OS keyring.
//!
//! The tracker token is an opaque value supplied by the user once and
//! attached to every request; it never lives in the config file.

use super::error::{Result, SonarError};

/// The keyring service name for Sonar tokens.
const KEYRING_SERVICE: &str = "sonar";

/// The keyring account the token is stored under.
const KEYRING_USER: &str = "openradar";

/// Store an API token in the OS keyring.
///
/// # Errors
///
/// Returns an error if the token cannot be stored in the keyring.
pub fn store_token(token: &str) -> Result<()> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER)
        .map_err(|e| SonarError::new(format!("Keyring error: failed to create entry: {}", e)))?;

    entry
        .set_password(token)
        .map_err(|e| SonarError::new(format!("Keyring error: failed to store token: {}", e)))?;

    Ok(())
}

/// Retrieve the stored API token from the OS keyring.
///
/// # Errors
///
/// Returns an error if no token is stored or the keyring is unavailable.
pub fn get_token() -> Result<String> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER)
        .map_err(|e| SonarError::new(format!("Keyring error: failed to access keyring: {}", e)))?;

    entry
        .get_password()
        .map_err(|e| SonarError::new(format!("Keyring error: failed to retrieve token: {}", e)))
}

/// Delete the stored API token from the OS keyring.
///
/// # Errors
///
/// Returns an error if the token cannot be deleted.
pub fn delete_token() -> Result<()> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER)
        .map_err(|e| SonarError::new(format!("Keyring error: failed to access keyring: {}", e)))?;

    entry
        .delete_password()
        .map_err(|e| SonarError::new(format!("Keyring error: failed to delete token: {}", e)))?;

    Ok(())
}

/// Check whether a token is stored.
pub fn has_token() -> bool {
    get_token().is_ok()
}

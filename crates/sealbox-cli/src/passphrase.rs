//! Passphrase acquisition.

use std::io::IsTerminal;

use dialoguer::Password;
use secrecy::SecretString;

use crate::constants::PASSPHRASE_ENV;

/// Read the passphrase from `SEALBOX_PASSPHRASE`, or prompt for it.
///
/// `confirm` asks twice; used when encrypting so a typo cannot lock data away.
pub fn obtain_passphrase(confirm: bool) -> anyhow::Result<SecretString> {
    if let Some(value) = passphrase_from_env() {
        return Ok(value);
    }
    if !std::io::stderr().is_terminal() || !std::io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "No passphrase provided and no TTY available. Set {}.",
            PASSPHRASE_ENV
        ));
    }

    let prompt = Password::new().with_prompt(if confirm {
        "Enter passphrase"
    } else {
        "Passphrase"
    });
    let prompt = if confirm {
        prompt.with_confirmation("Confirm passphrase", "Passphrases do not match")
    } else {
        prompt
    };

    prompt
        .interact()
        .map(SecretString::from)
        .map_err(|e| anyhow::anyhow!("Failed to read passphrase: {}", e))
}

fn passphrase_from_env() -> Option<SecretString> {
    std::env::var(PASSPHRASE_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(SecretString::from)
}

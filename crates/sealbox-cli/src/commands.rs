//! Command handlers.

use sealbox_core::{Codec, Container};
use secrecy::ExposeSecret;
use tracing::info;

use crate::cli::{InspectArgs, TransformArgs};
use crate::errors::from_seal_error;
use crate::io::{read_input, write_output};
use crate::output::{container_json, container_text};
use crate::passphrase::obtain_passphrase;

pub fn encrypt(codec: &Codec, args: &TransformArgs, quiet: bool) -> anyhow::Result<()> {
    let plaintext = read_input(args.input.as_deref())?;
    let passphrase = obtain_passphrase(true)?;

    let sealed = codec
        .encrypt(passphrase.expose_secret(), &plaintext)
        .map_err(from_seal_error)?;
    write_output(args.output.as_deref(), &sealed, false)?;

    info!(
        plaintext_len = plaintext.len(),
        container_len = sealed.len(),
        "encrypted"
    );
    if let (Some(path), false) = (args.output.as_ref(), quiet) {
        eprintln!("Encrypted {} bytes to {}", plaintext.len(), path.display());
    }
    Ok(())
}

pub fn decrypt(codec: &Codec, args: &TransformArgs, quiet: bool) -> anyhow::Result<()> {
    let container = read_input(args.input.as_deref())?;
    // Reject malformed input before asking for a passphrase
    Container::parse(&container).map_err(from_seal_error)?;
    let passphrase = obtain_passphrase(false)?;

    let plaintext = zeroize::Zeroizing::new(
        codec
            .decrypt(passphrase.expose_secret(), &container)
            .map_err(from_seal_error)?,
    );
    write_output(args.output.as_deref(), &plaintext, true)?;

    info!(plaintext_len = plaintext.len(), "decrypted");
    if let (Some(path), false) = (args.output.as_ref(), quiet) {
        eprintln!("Decrypted {} bytes to {}", plaintext.len(), path.display());
    }
    Ok(())
}

pub fn inspect(args: &InspectArgs) -> anyhow::Result<()> {
    let bytes = read_input(args.input.as_deref())?;
    let container = Container::parse(&bytes).map_err(from_seal_error)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&container_json(&container, bytes.len()))?
        );
    } else {
        println!("{}", container_text(&container, bytes.len()));
    }
    Ok(())
}

//! Transaction signing and witness verification.

use lyra_crypto::ECDsa;
use lyra_wallet::{Account, PublicKey};

use crate::transaction::Transaction;
use crate::witness::Witness;
use crate::{Error, Result};

/// Push opcode for the 64-byte signature in an invocation script.
const SIGNATURE_PUSH: u8 = 0x40;

/// Signs the transaction with the account's key and appends the resulting
/// witness. The signature covers the SHA-256 digest of the unsigned wire
/// form; the invocation script is the length-prefixed raw r||s signature
/// and the verification script is the account's wallet script.
///
/// Multiple signers call this in turn; witnesses stay in signing order.
pub fn sign_transaction(tx: &mut Transaction, account: &Account) -> Result<()> {
    let private_key = account.private_key().map_err(|_| Error::NoSigningKey)?;
    let unsigned = tx.serialize_unsigned()?;
    let signature = ECDsa::sign(&unsigned, private_key.as_bytes())?;

    let mut invocation_script = Vec::with_capacity(1 + signature.len());
    invocation_script.push(SIGNATURE_PUSH);
    invocation_script.extend_from_slice(&signature);

    tx.witnesses.push(Witness {
        invocation_script,
        verification_script: account.verification_script().to_vec(),
    });
    log::debug!("signed transaction by {}", account.address());
    Ok(())
}

/// Checks one witness of `tx` against a public key. Returns `Ok(false)`
/// when the signature is well formed but does not verify.
pub fn verify_witness(tx: &Transaction, witness: &Witness, public_key: &PublicKey) -> Result<bool> {
    let script = &witness.invocation_script;
    if script.len() != 65 || script[0] != SIGNATURE_PUSH {
        return Err(lyra_crypto::Error::InvalidSignature(format!(
            "invocation script is not a signature push ({} bytes)",
            script.len()
        ))
        .into());
    }
    let unsigned = tx.serialize_unsigned()?;
    Ok(ECDsa::verify(&unsigned, &script[1..], public_key.as_bytes())?)
}

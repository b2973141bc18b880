//! Accounts derived from keys under a protocol profile.

use lyra_config::ProtocolProfile;
use lyra_crypto::UInt160;

use crate::address::script_hash_to_address;
use crate::contract::wallet_script;
use crate::key_pair::{KeyPair, PrivateKey, PublicKey};
use crate::wif::decode_wif;
use crate::{Error, Result};

/// An account on one network: a public key, its wallet verification script
/// and the derived script hash and address. Accounts built from a bare
/// public key are watch-only and carry no signing key.
///
/// Derivation is fixed at construction, so the fields can never disagree
/// with each other or with the profile they were built under.
#[derive(Debug, Clone)]
pub struct Account {
    key_pair: Option<KeyPair>,
    public_key: PublicKey,
    verification_script: Vec<u8>,
    script_hash: UInt160,
    address: String,
}

impl Account {
    /// Derives an account from a private key.
    pub fn from_private_key(private_key: PrivateKey, profile: &ProtocolProfile) -> Result<Self> {
        let key_pair = KeyPair::new(private_key)?;
        let public_key = *key_pair.public_key();
        Ok(Self::derive(Some(key_pair), public_key, profile))
    }

    /// Derives an account from a WIF-encoded private key.
    pub fn from_wif(wif: &str, profile: &ProtocolProfile) -> Result<Self> {
        let private_key = decode_wif(wif, profile.wif_version)?;
        Self::from_private_key(private_key, profile)
    }

    /// Derives a watch-only account from a compressed public key. The
    /// account can build and inspect transactions but cannot sign them.
    pub fn from_public_key(public_key: PublicKey, profile: &ProtocolProfile) -> Self {
        Self::derive(None, public_key, profile)
    }

    /// Generates an account with a fresh random key.
    pub fn new_random(profile: &ProtocolProfile) -> Result<Self> {
        Self::from_private_key(PrivateKey::random(), profile)
    }

    fn derive(
        key_pair: Option<KeyPair>,
        public_key: PublicKey,
        profile: &ProtocolProfile,
    ) -> Self {
        let verification_script = wallet_script(
            &public_key,
            &profile.trusted_contract,
            profile.template_version,
        );
        let script_hash = UInt160::from_script(&verification_script);
        let address = script_hash_to_address(&script_hash, profile.address_version);
        log::debug!("derived account {address} on {}", profile.network);
        Self {
            key_pair,
            public_key,
            verification_script,
            script_hash,
            address,
        }
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The account's wallet verification script.
    pub fn verification_script(&self) -> &[u8] {
        &self.verification_script
    }

    /// Hash160 of the verification script; the account's on-ledger identity.
    pub fn script_hash(&self) -> &UInt160 {
        &self.script_hash
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Whether the account holds a signing key.
    pub fn can_sign(&self) -> bool {
        self.key_pair.is_some()
    }

    /// The signing key, or [`Error::WatchOnly`] when there is none.
    pub fn private_key(&self) -> Result<&PrivateKey> {
        self.key_pair
            .as_ref()
            .map(KeyPair::private_key)
            .ok_or(Error::WatchOnly)
    }
}

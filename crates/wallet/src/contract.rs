//! Wallet verification script templates.
//!
//! A wallet script is not a bare signature check. It is a fixed bytecode
//! template with two splice points: the owner's compressed public key and
//! the script hash of the network's trusted contract. The resulting script
//! authorizes a spend either when the trusted contract is the calling
//! context or when the owner signature verifies against the embedded key.
//!
//! The templates are opaque byte blobs. Their instruction layout is pinned
//! by golden tests and must never be re-derived or "fixed" here; a single
//! byte of drift changes every script hash and therefore every address.

use hex_literal::hex;
use lyra_config::TemplateVersion;

use crate::key_pair::PublicKey;

/// A byte range replaced when a template is instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Splice {
    pub offset: usize,
    pub len: usize,
}

/// One generation of the wallet verification script.
#[derive(Debug, Clone, Copy)]
pub struct ScriptTemplate {
    bytes: &'static [u8; 107],
    /// 33-byte compressed public key slot.
    public_key: Splice,
    /// Trusted-contract slot: 20 raw bytes in V1, 0x14-prefixed in V2.
    trusted_contract: Splice,
}

/// V1: the trusted-contract hash is spliced as a raw 20-byte field; the push
/// prefix is part of the template. The signature branch falls through to an
/// accept tail shared with the trusted-contract jump.
const TEMPLATE_V1: ScriptTemplate = ScriptTemplate {
    bytes: &hex!(
        "682b53797374656d2e457865637574696f6e456e67696e652e47657443616c6c"
        "696e675363726970744861736814000000000000000000000000000000000000"
        "0000876327002100000000000000000000000000000000000000000000000000"
        "0000000000000000ac6651"
    ),
    public_key: Splice {
        offset: 71,
        len: 33,
    },
    trusted_contract: Splice {
        offset: 46,
        len: 20,
    },
};

/// V2: the trusted-contract splice carries its own length prefix, and the
/// trusted-contract branch returns early instead of sharing an accept tail.
const TEMPLATE_V2: ScriptTemplate = ScriptTemplate {
    bytes: &hex!(
        "682b53797374656d2e457865637574696f6e456e67696e652e47657443616c6c"
        "696e675363726970744861736800000000000000000000000000000000000000"
        "0000876405005166210000000000000000000000000000000000000000000000"
        "00000000000000000000ac"
    ),
    public_key: Splice {
        offset: 73,
        len: 33,
    },
    trusted_contract: Splice {
        offset: 45,
        len: 21,
    },
};

impl ScriptTemplate {
    /// The template for a given generation.
    pub fn for_version(version: TemplateVersion) -> Self {
        match version {
            TemplateVersion::V1 => TEMPLATE_V1,
            TemplateVersion::V2 => TEMPLATE_V2,
        }
    }

    /// Template length in bytes; identical across generations.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Instantiates the template for an account.
    pub fn instantiate(&self, public_key: &PublicKey, trusted_contract: &[u8; 20]) -> Vec<u8> {
        let mut script = self.bytes.to_vec();

        let pk = self.public_key;
        script[pk.offset..pk.offset + pk.len].copy_from_slice(public_key.as_bytes());

        let tc = self.trusted_contract;
        if tc.len == 21 {
            // The splice carries its own push length prefix.
            script[tc.offset] = 0x14;
            script[tc.offset + 1..tc.offset + 21].copy_from_slice(trusted_contract);
        } else {
            script[tc.offset..tc.offset + 20].copy_from_slice(trusted_contract);
        }
        script
    }
}

/// Builds the verification script for an account's public key under the
/// given template generation.
pub fn wallet_script(
    public_key: &PublicKey,
    trusted_contract: &[u8; 20],
    version: TemplateVersion,
) -> Vec<u8> {
    ScriptTemplate::for_version(version).instantiate(public_key, trusted_contract)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn public_key() -> PublicKey {
        PublicKey::from_hex("034f3d2e20ad0d396535518bde127280de73b9aa3bf42efa3f88ed5d577f3de116")
            .unwrap()
    }

    fn trusted_contract() -> [u8; 20] {
        hex!("a5762ff6a3176e32db7bf8daa7f938f1d9e2ff8f")
    }

    #[test]
    fn v1_matches_golden_script() {
        let script = wallet_script(&public_key(), &trusted_contract(), TemplateVersion::V1);
        assert_eq!(
            hex::encode(script),
            "682b53797374656d2e457865637574696f6e456e67696e652e47657443616c6c\
             696e675363726970744861736814a5762ff6a3176e32db7bf8daa7f938f1d9e2\
             ff8f8763270021034f3d2e20ad0d396535518bde127280de73b9aa3bf42efa3f\
             88ed5d577f3de116ac6651"
        );
    }

    #[test]
    fn v2_matches_golden_script() {
        let script = wallet_script(&public_key(), &trusted_contract(), TemplateVersion::V2);
        assert_eq!(
            hex::encode(script),
            "682b53797374656d2e457865637574696f6e456e67696e652e47657443616c6c\
             696e675363726970744861736814a5762ff6a3176e32db7bf8daa7f938f1d9e2\
             ff8f87640500516621034f3d2e20ad0d396535518bde127280de73b9aa3bf42e\
             fa3f88ed5d577f3de116ac"
        );
    }

    #[test]
    fn splice_offsets_land_inside_the_template() {
        for version in [TemplateVersion::V1, TemplateVersion::V2] {
            let template = ScriptTemplate::for_version(version);
            let pk = template.public_key;
            let tc = template.trusted_contract;
            assert!(pk.offset + pk.len <= template.len());
            assert!(tc.offset + tc.len <= template.len());
            // The two slots never overlap.
            assert!(tc.offset + tc.len <= pk.offset || pk.offset + pk.len <= tc.offset);
        }
    }

    #[test]
    fn generations_share_length_but_not_bytes() {
        let v1 = wallet_script(&public_key(), &trusted_contract(), TemplateVersion::V1);
        let v2 = wallet_script(&public_key(), &trusted_contract(), TemplateVersion::V2);
        assert_eq!(v1.len(), v2.len());
        assert_ne!(v1, v2);
    }
}

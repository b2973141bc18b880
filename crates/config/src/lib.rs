//! Protocol profiles for the Lyra ledger.
//!
//! A [`ProtocolProfile`] carries every network-dependent constant the wallet
//! core needs: version bytes, asset identifiers, the trusted contract spliced
//! into wallet scripts and the wallet-script template generation. Callers
//! select one profile and pass it by reference into account and transaction
//! construction; nothing here is process-global, so several profiles can
//! coexist in one process (and in tests).

use serde::{Deserialize, Serialize};

/// Number of integer units per whole asset unit (8 decimals of precision).
pub const FEE_PRECISION: i64 = 100_000_000;

/// Generation of the parameterized wallet verification script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateVersion {
    /// Original template; the trusted-contract hash is spliced as a raw
    /// 20-byte field into a pre-encoded push.
    V1,
    /// Current template; the trusted-contract hash is spliced together with
    /// its push length prefix.
    V2,
}

/// Network-dependent constants for one deployment of the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolProfile {
    /// Human-readable network name.
    pub network: String,

    /// Version byte prepended to script hashes in addresses.
    pub address_version: u8,

    /// Version byte prepended to private keys in WIF strings.
    pub wif_version: u8,

    /// Asset id of the governing token (wire order).
    #[serde(with = "hex")]
    pub governing_asset: [u8; 32],

    /// Asset id of the utility token that pays execution fees (wire order).
    #[serde(with = "hex")]
    pub utility_asset: [u8; 32],

    /// Script hash of the contract allowed to spend from wallet scripts
    /// without the owner signature (wire order).
    #[serde(with = "hex")]
    pub trusted_contract: [u8; 20],

    /// Wallet-script template generation used for new accounts.
    pub template_version: TemplateVersion,
}

impl ProtocolProfile {
    /// The production network profile.
    pub fn mainnet() -> Self {
        Self {
            network: "mainnet".to_string(),
            address_version: 0x17,
            wif_version: 0x80,
            governing_asset: [
                0x22, 0xf6, 0x54, 0x8c, 0x50, 0x1f, 0x44, 0x46, 0xe5, 0x90, 0xdd, 0x78, 0xe4,
                0xa3, 0xeb, 0x91, 0x87, 0x21, 0x4c, 0xe4, 0x12, 0x32, 0xeb, 0x82, 0xf2, 0x28,
                0xf5, 0xc8, 0xc5, 0x0d, 0xc5, 0xe0,
            ],
            utility_asset: [
                0x94, 0x5b, 0xb6, 0xb0, 0xed, 0x69, 0xdb, 0x58, 0xa2, 0x5f, 0xa1, 0x06, 0xf2,
                0x59, 0xf9, 0xa8, 0xd1, 0xf6, 0x4b, 0x1d, 0x5f, 0x48, 0x17, 0x1a, 0x78, 0x93,
                0xe0, 0x45, 0x76, 0xa5, 0x62, 0xbe,
            ],
            trusted_contract: [
                0xa5, 0x76, 0x2f, 0xf6, 0xa3, 0x17, 0x6e, 0x32, 0xdb, 0x7b, 0xf8, 0xda, 0xa7,
                0xf9, 0x38, 0xf1, 0xd9, 0xe2, 0xff, 0x8f,
            ],
            template_version: TemplateVersion::V2,
        }
    }

    /// The public test network profile. Shares the mainnet asset layout but
    /// keeps accounts on the older wallet-script template.
    pub fn testnet() -> Self {
        Self {
            network: "testnet".to_string(),
            template_version: TemplateVersion::V1,
            ..Self::mainnet()
        }
    }
}

impl Default for ProtocolProfile {
    fn default() -> Self {
        Self::mainnet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_differ_only_where_expected() {
        let mainnet = ProtocolProfile::mainnet();
        let testnet = ProtocolProfile::testnet();
        assert_eq!(mainnet.template_version, TemplateVersion::V2);
        assert_eq!(testnet.template_version, TemplateVersion::V1);
        assert_eq!(mainnet.address_version, testnet.address_version);
        assert_eq!(mainnet.utility_asset, testnet.utility_asset);
    }

    #[test]
    fn serde_round_trip() {
        let profile = ProtocolProfile::mainnet();
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(
            serde_json::from_str::<ProtocolProfile>(&json).unwrap(),
            profile
        );
    }
}

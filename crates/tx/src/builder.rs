//! Transaction assembly: intents in, funded unsigned transaction out.
//!
//! The builder never touches the network. Callers supply the sender's
//! spendable coins from an external balance source; the builder selects
//! inputs largest-first per asset, emits the intent outputs, and returns
//! any surplus to the sender as change. Whatever the inputs cover beyond
//! the outputs is the fee left to the network.

use std::collections::BTreeMap;

use lyra_config::ProtocolProfile;
use lyra_crypto::{UInt160, UInt256};
use lyra_script::{build_invocation_script, ContractParameter};
use lyra_wallet::Account;

use crate::attribute::TransactionAttribute;
use crate::coin::{Coin, CoinReference};
use crate::fixed8::Fixed8;
use crate::output::TransactionOutput;
use crate::transaction::{Transaction, TransactionPayload};
use crate::{Error, Result};

/// One requested value movement: an amount of one asset to one recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferIntent {
    pub asset_id: UInt256,
    pub value: Fixed8,
    pub to: UInt160,
}

/// Builds unsigned transactions under one protocol profile.
pub struct TransactionBuilder<'a> {
    profile: &'a ProtocolProfile,
}

impl<'a> TransactionBuilder<'a> {
    pub fn new(profile: &'a ProtocolProfile) -> Self {
        Self { profile }
    }

    /// Builds a plain spend covering `intents` from `coins`, with change
    /// back to `sender`. `network_fee` is an extra utility-asset amount
    /// consumed by the inputs but not returned as change.
    pub fn transfer(
        &self,
        sender: &Account,
        coins: &[Coin],
        intents: &[TransferIntent],
        attributes: Vec<TransactionAttribute>,
        network_fee: Fixed8,
    ) -> Result<Transaction> {
        let mut tx = Transaction::new(0, TransactionPayload::Transfer);
        tx.attributes = attributes;
        self.fund(&mut tx, sender, coins, intents, network_fee)?;
        Ok(tx)
    }

    /// Builds a claim converting prior outputs into `amount` of the utility
    /// asset, paid to `recipient`. The claimed references are validated by
    /// the ledger, not here.
    pub fn claim(
        &self,
        recipient: &Account,
        claims: Vec<CoinReference>,
        amount: Fixed8,
    ) -> Result<Transaction> {
        if !amount.is_positive() {
            return Err(Error::NonPositiveAmount);
        }
        let mut tx = Transaction::new(0, TransactionPayload::Claim { claims });
        tx.outputs.push(TransactionOutput {
            asset_id: UInt256::new(self.profile.utility_asset),
            value: amount,
            script_hash: *recipient.script_hash(),
        });
        Ok(tx)
    }

    /// Builds an invocation carrying `script`, alongside ordinary value
    /// movement from `intents` when the call must also transfer. The
    /// committed execution fee is `gas` rounded up to a whole utility
    /// unit, and the inputs must cover it plus `network_fee`.
    #[allow(clippy::too_many_arguments)]
    pub fn invocation(
        &self,
        sender: &Account,
        coins: &[Coin],
        script: Vec<u8>,
        gas: Fixed8,
        intents: &[TransferIntent],
        attributes: Vec<TransactionAttribute>,
        network_fee: Fixed8,
    ) -> Result<Transaction> {
        let committed = gas.ceil_to_unit()?;
        let fee = committed.checked_add(network_fee).ok_or(Error::Overflow)?;
        let mut tx = Transaction::new(
            1,
            TransactionPayload::Invocation {
                script,
                gas: committed,
            },
        );
        tx.attributes = attributes;
        self.fund(&mut tx, sender, coins, intents, fee)?;
        Ok(tx)
    }

    /// Convenience wrapper: encodes a contract method call and funds the
    /// invocation carrying it.
    #[allow(clippy::too_many_arguments)]
    pub fn contract_call(
        &self,
        sender: &Account,
        coins: &[Coin],
        contract: &UInt160,
        operation: &str,
        args: &[ContractParameter],
        gas: Fixed8,
        intents: &[TransferIntent],
        attributes: Vec<TransactionAttribute>,
        network_fee: Fixed8,
    ) -> Result<Transaction> {
        let script = build_invocation_script(contract, operation, args)?;
        self.invocation(sender, coins, script, gas, intents, attributes, network_fee)
    }

    /// Emits intent outputs, selects inputs per asset largest-first, and
    /// appends change outputs back to the sender.
    fn fund(
        &self,
        tx: &mut Transaction,
        sender: &Account,
        coins: &[Coin],
        intents: &[TransferIntent],
        fee: Fixed8,
    ) -> Result<()> {
        for intent in intents {
            if !intent.value.is_positive() {
                return Err(Error::NonPositiveAmount);
            }
            tx.outputs.push(TransactionOutput {
                asset_id: intent.asset_id,
                value: intent.value,
                script_hash: intent.to,
            });
        }

        let mut required: BTreeMap<UInt256, Fixed8> = BTreeMap::new();
        for intent in intents {
            let entry = required.entry(intent.asset_id).or_insert(Fixed8::ZERO);
            *entry = entry.checked_add(intent.value).ok_or(Error::Overflow)?;
        }
        if fee.is_positive() {
            let utility = UInt256::new(self.profile.utility_asset);
            let entry = required.entry(utility).or_insert(Fixed8::ZERO);
            *entry = entry.checked_add(fee).ok_or(Error::Overflow)?;
        }

        for (asset, needed) in required {
            let mut candidates: Vec<&Coin> =
                coins.iter().filter(|coin| coin.asset_id == asset).collect();
            candidates.sort_by(|a, b| b.value.cmp(&a.value));

            let mut gathered = Fixed8::ZERO;
            let mut selected = Vec::new();
            for coin in candidates {
                if gathered >= needed {
                    break;
                }
                gathered = gathered.checked_add(coin.value).ok_or(Error::Overflow)?;
                selected.push(coin);
            }
            if gathered < needed {
                return Err(Error::InsufficientFunds {
                    asset,
                    needed,
                    available: gathered,
                });
            }

            for coin in &selected {
                tx.inputs.push(coin.reference());
            }
            let change = gathered.checked_sub(needed).ok_or(Error::Overflow)?;
            if change.is_positive() {
                tx.outputs.push(TransactionOutput {
                    asset_id: asset,
                    value: change,
                    script_hash: *sender.script_hash(),
                });
            }
            log::debug!(
                "funded {needed} of {asset} from {} input(s), change {change}",
                selected.len()
            );
        }
        Ok(())
    }
}

// src/heuristics/token_mint.rs
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::constants::KnownAddresses;
use crate::heuristics::Heuristic;
use crate::types::{
    AssetKind, AssetTransfer, Category, Context, ContextVariable, Summaries, Summary, Transaction,
};

/// Mint archetype: a transfer out of the null address that is not a
/// wrapped-native deposit, in a transaction with at most two non-null
/// parties. The party cap keeps this to simple single-recipient mints and
/// out of multi-party batch operations that happen to include one.
#[derive(Debug, Clone)]
pub struct TokenMint {
    known: Arc<KnownAddresses>,
}

impl TokenMint {
    pub fn new(known: Arc<KnownAddresses>) -> Self {
        Self { known }
    }

    fn qualifying_mints<'a>(&self, transfers: &'a [AssetTransfer]) -> Vec<&'a AssetTransfer> {
        transfers
            .iter()
            .filter(|t| {
                self.known.is_null(&t.from)
                    && !t
                        .asset
                        .as_deref()
                        .is_some_and(|asset| self.known.is_wrapped_native(asset))
            })
            .collect()
    }
}

impl Heuristic for TokenMint {
    fn name(&self) -> &'static str {
        "token-mint"
    }

    fn detect(&self, tx: &Transaction) -> bool {
        let (Some(transfers), Some(net)) = (&tx.asset_transfers, &tx.net_asset_transfers) else {
            return false;
        };
        if transfers.is_empty() {
            return false;
        }
        if self.qualifying_mints(transfers).is_empty() {
            return false;
        }
        // map keys are already distinct addresses
        let parties = net.keys().filter(|addr| !self.known.is_null(addr)).count();
        parties <= 2
    }

    fn generate(&self, mut tx: Transaction) -> Transaction {
        let Some(transfers) = tx.asset_transfers.as_deref() else {
            return tx;
        };
        let mints = self.qualifying_mints(transfers);
        let Some(mint) = mints.first() else {
            return tx;
        };

        let token_contract = mint.asset.clone().unwrap_or_default();
        let token = match mint.kind {
            AssetKind::Erc721 => ContextVariable::Erc721 {
                token: token_contract,
                token_id: mint.token_id.clone().unwrap_or_default(),
            },
            AssetKind::Erc1155 => ContextVariable::Erc1155 {
                token: token_contract,
                token_id: mint.token_id.clone().unwrap_or_default(),
                value: mint.value.clone().unwrap_or_else(|| "1".to_string()),
            },
            AssetKind::Erc20 => ContextVariable::Erc20 {
                token: token_contract,
                value: mint.value.clone().unwrap_or_default(),
            },
            AssetKind::Eth => ContextVariable::Eth {
                value: mint.value.clone().unwrap_or_default(),
            },
        };

        let mut variables = BTreeMap::new();
        variables.insert("token".to_string(), token);
        variables.insert(
            "recipient".to_string(),
            ContextVariable::address(mint.to.clone()),
        );

        let mut summary_variables = BTreeMap::new();
        summary_variables.insert("minted".to_string(), ContextVariable::action("minted"));

        tx.context = Some(Context {
            variables,
            summaries: Summaries {
                category: Category::FungibleToken,
                en: Summary {
                    title: "Token Mint".to_string(),
                    template: "[[recipient]] [[minted]] [[token]]".to_string(),
                    variables: summary_variables,
                },
            },
        });

        tx
    }
}

// src/heuristics/nft_trade.rs
use std::collections::{BTreeMap, BTreeSet};

use crate::heuristics::{add_amounts, Heuristic};
use crate::types::{
    Asset, AssetKind, Category, Context, ContextVariable, Summaries, Summary, Transaction,
};

/// Which side of the trade the transaction initiator is on. The sale and
/// purchase archetypes are the same aggregation with the roles swapped, so
/// one heuristic covers both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitiatorRole {
    /// Initiator sends NFTs and receives payment.
    Seller,
    /// Initiator sends payment and receives NFTs.
    Buyer,
}

/// Generic asset-for-payment heuristic, instantiated as the ERC-1155 sale
/// and ERC-721 purchase archetypes.
#[derive(Debug, Clone)]
pub struct NftTrade {
    name: &'static str,
    nft_kind: AssetKind,
    role: InitiatorRole,
}

impl NftTrade {
    /// Initiator sells ERC-1155s (arbitrary quantity) for ETH or ERC-20.
    pub fn erc1155_sale() -> Self {
        Self {
            name: "erc1155-sale",
            nft_kind: AssetKind::Erc1155,
            role: InitiatorRole::Seller,
        }
    }

    /// Initiator buys ERC-721s with ETH or ERC-20.
    pub fn erc721_purchase() -> Self {
        Self {
            name: "erc721-purchase",
            nft_kind: AssetKind::Erc721,
            role: InitiatorRole::Buyer,
        }
    }
}

impl Heuristic for NftTrade {
    fn name(&self) -> &'static str {
        self.name
    }

    /// Only the initiator's net row is inspected here; generation looks at
    /// the whole map. The overlap with `generate` is intentional, it keeps
    /// the predicate cheap and independently testable.
    fn detect(&self, tx: &Transaction) -> bool {
        let Some(row) = tx.initiator_row() else {
            return false;
        };
        let (nft_side, payment_side) = match self.role {
            InitiatorRole::Seller => (&row.sent, &row.received),
            InitiatorRole::Buyer => (&row.received, &row.sent),
        };
        nft_side.iter().any(|a| a.kind == self.nft_kind)
            && payment_side.iter().any(|a| a.kind.is_payment())
    }

    /// Aggregates over every address in `netAssetTransfers`, not just the
    /// initiator: in multi-hop settlement the parties receiving NFTs or
    /// sending payment can differ from `tx.from`.
    fn generate(&self, mut tx: Transaction) -> Transaction {
        let Some(net) = tx.net_asset_transfers.as_ref() else {
            return tx;
        };

        let mut receiving_addresses: Vec<String> = Vec::new();
        let mut received_nfts: Vec<Asset> = Vec::new();
        // keyed by asset contract so per-asset sums are order independent
        let mut payments: BTreeMap<String, (AssetKind, String)> = BTreeMap::new();

        for (address, row) in net {
            let nfts: Vec<&Asset> = row
                .received
                .iter()
                .filter(|a| a.kind == self.nft_kind)
                .collect();
            if !nfts.is_empty() {
                receiving_addresses.push(address.clone());
                received_nfts.extend(nfts.into_iter().cloned());
            }
            for payment in row.sent.iter().filter(|a| a.kind.is_payment()) {
                let value = payment.value.as_deref().unwrap_or("0");
                payments
                    .entry(payment.asset.clone())
                    .and_modify(|(_, total)| *total = add_amounts(total, value))
                    .or_insert((payment.kind, value.to_string()));
            }
        }

        let nft_contracts: BTreeSet<&str> =
            received_nfts.iter().map(|a| a.asset.as_str()).collect();

        let user_or_users = if receiving_addresses.len() > 1 {
            ContextVariable::emphasis(format!("{} Users", receiving_addresses.len()))
        } else {
            ContextVariable::address(receiving_addresses.first().cloned().unwrap_or_default())
        };

        let token_or_tokens = if received_nfts.len() == 1 {
            let nft = &received_nfts[0];
            match self.nft_kind {
                AssetKind::Erc1155 => ContextVariable::Erc1155 {
                    token: nft.asset.clone(),
                    token_id: nft.token_id.clone().unwrap_or_default(),
                    value: nft.value.clone().unwrap_or_else(|| "1".to_string()),
                },
                _ => ContextVariable::Erc721 {
                    token: nft.asset.clone(),
                    token_id: nft.token_id.clone().unwrap_or_default(),
                },
            }
        } else if nft_contracts.len() == 1 {
            // several NFTs out of one collection: name the collection
            ContextVariable::address(
                nft_contracts.iter().next().map(|s| s.to_string()).unwrap_or_default(),
            )
        } else {
            ContextVariable::emphasis(format!("{} NFTs", received_nfts.len()))
        };

        // detect guarantees at least one payment at the initiator; an empty
        // map here means the precondition was violated, so settle for zero
        let price = if payments.len() > 1 {
            ContextVariable::emphasis(format!("{} Assets", payments.len()))
        } else {
            match payments.into_iter().next() {
                Some((_, (AssetKind::Eth, value))) => ContextVariable::Eth { value },
                Some((asset, (_, value))) => ContextVariable::Erc20 { token: asset, value },
                None => ContextVariable::Eth { value: "0".to_string() },
            }
        };

        let mut variables = BTreeMap::new();
        variables.insert("userOrUsers".to_string(), user_or_users);
        variables.insert("tokenOrTokens".to_string(), token_or_tokens);
        variables.insert("price".to_string(), price);

        let mut summary_variables = BTreeMap::new();
        summary_variables.insert("bought".to_string(), ContextVariable::action("bought"));

        tx.context = Some(Context {
            variables,
            summaries: Summaries {
                category: Category::Nft,
                en: Summary {
                    // same title for both directions; the matching archetype
                    // name carries the sale/purchase distinction
                    title: "NFT Purchase".to_string(),
                    template: "[[userOrUsers]] [[bought]] [[tokenOrTokens]] for [[price]]"
                        .to_string(),
                    variables: summary_variables,
                },
            },
        });

        tx
    }
}

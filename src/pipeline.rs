// src/pipeline.rs
use std::sync::Arc;

use crate::constants::KnownAddresses;
use crate::heuristics::erc20_swap::Erc20Swap;
use crate::heuristics::nft_trade::NftTrade;
use crate::heuristics::token_approval::TokenApproval;
use crate::heuristics::token_mint::TokenMint;
use crate::heuristics::Heuristic;
use crate::protocols::farcaster::{IdRegistry, StorageRegistry};
use crate::types::Transaction;

/// Priority-ordered heuristic list, first match wins, at most one context
/// per transaction.
///
/// Protocol heuristics run before the generic asset heuristics because their
/// (target, method) predicate is strictly more specific; the mint heuristic
/// runs before the NFT trades so a paid mint reads as a mint rather than a
/// purchase.
pub struct Pipeline {
    heuristics: Vec<Box<dyn Heuristic + Send + Sync>>,
}

impl Pipeline {
    pub fn new(known: KnownAddresses) -> Self {
        let known = Arc::new(known);
        Self {
            heuristics: vec![
                Box::new(IdRegistry::new(Arc::clone(&known))),
                Box::new(StorageRegistry::new(Arc::clone(&known))),
                Box::new(TokenApproval::new()),
                Box::new(Erc20Swap::new()),
                Box::new(TokenMint::new(Arc::clone(&known))),
                Box::new(NftTrade::erc1155_sale()),
                Box::new(NftTrade::erc721_purchase()),
            ],
        }
    }

    /// Single pass: the first heuristic whose `detect` fires attaches the
    /// context; everything after it is skipped. Deterministic, so re-running
    /// an already classified transaction reproduces the same context.
    pub fn run(&self, tx: Transaction) -> Transaction {
        for heuristic in &self.heuristics {
            if heuristic.detect(&tx) {
                return heuristic.generate(tx);
            }
        }
        tx
    }

    /// Names of every heuristic whose predicate matches, in priority order.
    /// Diagnostics only; `run` always takes the first.
    pub fn matches(&self, tx: &Transaction) -> Vec<&'static str> {
        self.heuristics
            .iter()
            .filter(|h| h.detect(tx))
            .map(|h| h.name())
            .collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(KnownAddresses::default())
    }
}

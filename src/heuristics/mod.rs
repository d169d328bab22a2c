// src/heuristics/mod.rs
//
// Archetype heuristics driven by netted asset movement. Each one is a pure
// detect/generate pair; the split is deliberate so predicates stay unit
// testable and the pipeline can skip aggregation work on non-matches.

pub mod erc20_swap;
pub mod nft_trade;
pub mod token_approval;
pub mod token_mint;

use alloy::primitives::U256;

use crate::types::Transaction;

/// The contract every archetype implements.
///
/// `detect` is total: missing or structurally insufficient input means
/// `false`, never a panic. `generate` assumes `detect` returned true for the
/// same transaction; calling it otherwise is a precondition violation and
/// its output is unspecified (it will not panic, but the context may be
/// degenerate). `contextualize` is the gated composition callers should use.
pub trait Heuristic {
    /// Stable archetype name, used for pipeline diagnostics and tests.
    fn name(&self) -> &'static str;

    fn detect(&self, tx: &Transaction) -> bool;

    fn generate(&self, tx: Transaction) -> Transaction;

    fn contextualize(&self, tx: Transaction) -> Transaction {
        if self.detect(&tx) {
            self.generate(tx)
        } else {
            tx
        }
    }
}

/// Add two base-unit amounts given as decimal strings.
///
/// Token amounts routinely exceed u128, so sums go through U256. Values the
/// upstream decoder failed to produce parse as zero; addition saturates
/// rather than wrapping.
pub(crate) fn add_amounts(acc: &str, next: &str) -> String {
    let a = acc.parse::<U256>().unwrap_or(U256::ZERO);
    let b = next.parse::<U256>().unwrap_or(U256::ZERO);
    a.saturating_add(b).to_string()
}

#[cfg(test)]
mod tests {
    use super::add_amounts;

    #[test]
    fn adds_past_u128() {
        // 2^128 each; the sum only fits in a wider integer
        let big = "340282366920938463463374607431768211456";
        assert_eq!(
            add_amounts(big, big),
            "680564733841876926926749214863536422912"
        );
    }

    #[test]
    fn garbage_counts_as_zero() {
        assert_eq!(add_amounts("", "5"), "5");
        assert_eq!(add_amounts("x", "y"), "0");
    }
}

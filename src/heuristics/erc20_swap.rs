// src/heuristics/erc20_swap.rs
use std::collections::BTreeMap;

use crate::heuristics::Heuristic;
use crate::types::{
    Asset, AssetKind, Category, Context, ContextVariable, Summaries, Summary, Transaction,
};

/// Fungible swap archetype: the initiator's net row shows exactly one ERC-20
/// leaving and exactly one different ERC-20 arriving. Multi-hop routing is
/// fine, the netted view already collapses intermediate legs.
#[derive(Debug, Clone, Default)]
pub struct Erc20Swap;

impl Erc20Swap {
    pub fn new() -> Self {
        Self
    }

    fn legs(tx: &Transaction) -> Option<(Asset, Asset)> {
        let row = tx.initiator_row()?;
        let sent: Vec<&Asset> = row.sent.iter().filter(|a| a.kind == AssetKind::Erc20).collect();
        let received: Vec<&Asset> =
            row.received.iter().filter(|a| a.kind == AssetKind::Erc20).collect();
        match (sent.as_slice(), received.as_slice()) {
            ([out], [inn]) if out.asset != inn.asset => Some(((*out).clone(), (*inn).clone())),
            _ => None,
        }
    }
}

impl Heuristic for Erc20Swap {
    fn name(&self) -> &'static str {
        "erc20-swap"
    }

    fn detect(&self, tx: &Transaction) -> bool {
        Self::legs(tx).is_some()
    }

    fn generate(&self, mut tx: Transaction) -> Transaction {
        let Some((out, inn)) = Self::legs(&tx) else {
            return tx;
        };

        let mut variables = BTreeMap::new();
        variables.insert("swapper".to_string(), ContextVariable::address(tx.from.clone()));
        variables.insert(
            "tokenIn".to_string(),
            ContextVariable::Erc20 {
                token: out.asset,
                value: out.value.unwrap_or_default(),
            },
        );
        variables.insert(
            "tokenOut".to_string(),
            ContextVariable::Erc20 {
                token: inn.asset,
                value: inn.value.unwrap_or_default(),
            },
        );

        let mut summary_variables = BTreeMap::new();
        summary_variables.insert("swapped".to_string(), ContextVariable::action("swapped"));

        tx.context = Some(Context {
            variables,
            summaries: Summaries {
                category: Category::FungibleToken,
                en: Summary {
                    title: "Token Swap".to_string(),
                    template: "[[swapper]] [[swapped]] [[tokenIn]] for [[tokenOut]]".to_string(),
                    variables: summary_variables,
                },
            },
        });

        tx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SWAPPER: &str = "0x1111111111111111111111111111111111111111";
    const DAI: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";
    const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";

    fn tx(value: serde_json::Value) -> Transaction {
        serde_json::from_value(value).unwrap()
    }

    fn swap() -> Transaction {
        tx(json!({
            "hash": "0x1",
            "from": SWAPPER,
            "to": "0x7a250d5630b4cf539739df2c5dacb4c659f2488d",
            "netAssetTransfers": {
                SWAPPER: {
                    "sent": [{"type": "erc20", "asset": DAI, "value": "1000000000000000000"}],
                    "received": [{"type": "erc20", "asset": USDC, "value": "998000"}]
                }
            }
        }))
    }

    #[test]
    fn detects_one_for_one_erc20_swap() {
        assert!(Erc20Swap::new().detect(&swap()));
    }

    #[test]
    fn same_asset_both_ways_is_not_a_swap() {
        let refund = tx(json!({
            "hash": "0x2",
            "from": SWAPPER,
            "netAssetTransfers": {
                SWAPPER: {
                    "sent": [{"type": "erc20", "asset": DAI, "value": "10"}],
                    "received": [{"type": "erc20", "asset": DAI, "value": "10"}]
                }
            }
        }));
        assert!(!Erc20Swap::new().detect(&refund));
    }

    #[test]
    fn multiple_legs_do_not_match() {
        let multi = tx(json!({
            "hash": "0x3",
            "from": SWAPPER,
            "netAssetTransfers": {
                SWAPPER: {
                    "sent": [
                        {"type": "erc20", "asset": DAI, "value": "10"},
                        {"type": "erc20", "asset": USDC, "value": "10"}
                    ],
                    "received": [{"type": "erc20", "asset": "0x9999999999999999999999999999999999999999", "value": "1"}]
                }
            }
        }));
        assert!(!Erc20Swap::new().detect(&multi));
        assert!(!Erc20Swap::new().detect(&tx(json!({"hash": "0x4", "from": SWAPPER}))));
    }

    #[test]
    fn generates_swap_legs() {
        let context = Erc20Swap::new().generate(swap()).context.unwrap();
        assert_eq!(context.variables["swapper"], ContextVariable::address(SWAPPER));
        assert_eq!(
            context.variables["tokenIn"],
            ContextVariable::Erc20 { token: DAI.into(), value: "1000000000000000000".into() }
        );
        assert_eq!(
            context.variables["tokenOut"],
            ContextVariable::Erc20 { token: USDC.into(), value: "998000".into() }
        );
        assert_eq!(context.summaries.en.title, "Token Swap");
        assert_eq!(
            context.summaries.en.template,
            "[[swapper]] [[swapped]] [[tokenIn]] for [[tokenOut]]"
        );
    }
}

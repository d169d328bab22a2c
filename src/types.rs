// src/types.rs
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Asset classes that can appear in a transfer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Eth,
    Erc20,
    Erc721,
    Erc1155,
}

impl AssetKind {
    /// ETH and ERC20 are the kinds accepted as payment in trades.
    pub fn is_payment(self) -> bool {
        matches!(self, AssetKind::Eth | AssetKind::Erc20)
    }
}

/// A single low-level asset movement, produced by the upstream decoder.
/// Append-only input: heuristics read these, never write them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetTransfer {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
}

/// One netted asset position inside a `NetTransfers` row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub asset: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
}

/// Per-address netted view of a transaction's transfers.
/// Same-asset movements between two parties arrive already consolidated;
/// heuristics only aggregate across rows of the map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetTransfers {
    #[serde(default)]
    pub sent: Vec<Asset>,
    #[serde(default)]
    pub received: Vec<Asset>,
}

/// Decoded contract call, supplied by the external call-decoding service.
/// Arguments stay as raw JSON values; each heuristic pulls out what it needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodedCall {
    pub method: String,
    #[serde(default)]
    pub args: Vec<serde_json::Value>,
}

impl DecodedCall {
    /// Argument at `index` as a string, if it is one.
    pub fn arg_str(&self, index: usize) -> Option<&str> {
        self.args.get(index).and_then(|v| v.as_str())
    }

    /// Argument at `index` as a u64. Decoders emit numbers either as JSON
    /// numbers or as decimal strings, so both are accepted.
    pub fn arg_u64(&self, index: usize) -> Option<u64> {
        self.args.get(index).and_then(json_u64)
    }
}

/// Read a u64 out of a JSON number or decimal string.
pub(crate) fn json_u64(value: &serde_json::Value) -> Option<u64> {
    match value {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// The unit of classification. Deserialized from the upstream decoder's
/// JSON; `context` is the only field the pipeline ever sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub hash: String,
    pub from: String,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub asset_transfers: Option<Vec<AssetTransfer>>,
    #[serde(default)]
    pub net_asset_transfers: Option<HashMap<String, NetTransfers>>,
    #[serde(default)]
    pub decoded: Option<DecodedCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
}

impl Transaction {
    /// The initiator's netted row, if the upstream transformer produced one.
    pub fn initiator_row(&self) -> Option<&NetTransfers> {
        self.net_asset_transfers.as_ref()?.get(&self.from)
    }
}

/// Variable kinds a context can carry. Closed sum type so renderers can
/// handle every case exhaustively; the tag and field names are the wire
/// contract and must stay identical across archetypes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContextVariable {
    Address {
        value: String,
    },
    Emphasis {
        value: String,
    },
    Eth {
        value: String,
    },
    Erc20 {
        token: String,
        value: String,
    },
    Erc721 {
        token: String,
        #[serde(rename = "tokenId")]
        token_id: String,
    },
    Erc1155 {
        token: String,
        #[serde(rename = "tokenId")]
        token_id: String,
        value: String,
    },
    ContextAction {
        value: String,
    },
}

impl ContextVariable {
    pub fn address(value: impl Into<String>) -> Self {
        ContextVariable::Address { value: value.into() }
    }

    pub fn emphasis(value: impl Into<String>) -> Self {
        ContextVariable::Emphasis { value: value.into() }
    }

    pub fn action(value: impl Into<String>) -> Self {
        ContextVariable::ContextAction { value: value.into() }
    }

    /// The `value` field, for the variants that carry one.
    pub fn value(&self) -> Option<&str> {
        match self {
            ContextVariable::Address { value }
            | ContextVariable::Emphasis { value }
            | ContextVariable::Eth { value }
            | ContextVariable::ContextAction { value }
            | ContextVariable::Erc20 { value, .. }
            | ContextVariable::Erc1155 { value, .. } => Some(value.as_str()),
            ContextVariable::Erc721 { .. } => None,
        }
    }
}

/// Summary grouping consumed by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "NFT")]
    Nft,
    #[serde(rename = "FUNGIBLE_TOKEN")]
    FungibleToken,
    #[serde(rename = "FARCASTER")]
    Farcaster,
}

/// One locale's rendering recipe. `template` references context variables
/// through `[[name]]` placeholders; expansion happens downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub title: String,
    #[serde(rename = "default")]
    pub template: String,
    pub variables: BTreeMap<String, ContextVariable>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summaries {
    pub category: Category,
    pub en: Summary,
}

/// The classification result attached by exactly one heuristic. Either the
/// whole thing is present and consistent or the transaction carries none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    pub variables: BTreeMap<String, ContextVariable>,
    pub summaries: Summaries,
}

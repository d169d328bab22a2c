// src/heuristics/token_approval.rs
use std::collections::BTreeMap;

use crate::heuristics::Heuristic;
use crate::types::{Category, Context, ContextVariable, Summaries, Summary, Transaction};

const APPROVAL_METHODS: [&str; 2] = ["approve", "setApprovalForAll"];

/// Approval archetype. Approvals move no value, so detection keys off the
/// decoded call instead of net transfers: an `approve`/`setApprovalForAll`
/// invocation with no asset movement for the initiator.
#[derive(Debug, Clone, Default)]
pub struct TokenApproval;

impl TokenApproval {
    pub fn new() -> Self {
        Self
    }
}

impl Heuristic for TokenApproval {
    fn name(&self) -> &'static str {
        "token-approval"
    }

    fn detect(&self, tx: &Transaction) -> bool {
        let Some(call) = &tx.decoded else {
            return false;
        };
        if tx.to.is_none() || !APPROVAL_METHODS.contains(&call.method.as_str()) {
            return false;
        }
        // an approval that also moved the initiator's assets is something else
        match tx.initiator_row() {
            Some(row) => row.sent.is_empty() && row.received.is_empty(),
            None => true,
        }
    }

    fn generate(&self, mut tx: Transaction) -> Transaction {
        let spender = tx
            .decoded
            .as_ref()
            .and_then(|call| call.arg_str(0))
            .unwrap_or_default()
            .to_string();
        let token = tx.to.clone().unwrap_or_default();

        let mut variables = BTreeMap::new();
        variables.insert("owner".to_string(), ContextVariable::address(tx.from.clone()));
        variables.insert("spender".to_string(), ContextVariable::address(spender));
        variables.insert("token".to_string(), ContextVariable::address(token));

        let mut summary_variables = BTreeMap::new();
        summary_variables.insert(
            "gaveAccessTo".to_string(),
            ContextVariable::action("gave access to"),
        );

        tx.context = Some(Context {
            variables,
            summaries: Summaries {
                category: Category::FungibleToken,
                en: Summary {
                    title: "Token Approval".to_string(),
                    template: "[[owner]] [[gaveAccessTo]] [[spender]] for [[token]]".to_string(),
                    variables: summary_variables,
                },
            },
        });

        tx
    }
}

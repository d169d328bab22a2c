// src/protocols/farcaster.rs
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::constants::KnownAddresses;
use crate::heuristics::Heuristic;
use crate::types::{json_u64, Category, Context, ContextVariable, Summaries, Summary, Transaction};

const ID_REGISTRY_METHODS: [&str; 4] = [
    "changeRecoveryAddress",
    "changeRecoveryAddressFor",
    "transfer",
    "transferFor",
];

fn call_on<'a>(
    tx: &'a Transaction,
    is_target: impl Fn(&str) -> bool,
    methods: &[&str],
) -> Option<&'a crate::types::DecodedCall> {
    let to = tx.to.as_deref()?;
    if !is_target(to) {
        return None;
    }
    let call = tx.decoded.as_ref()?;
    methods.contains(&call.method.as_str()).then_some(call)
}

/// Farcaster IdRegistry operations: recovery-address changes and identity
/// transfers.
#[derive(Debug, Clone)]
pub struct IdRegistry {
    known: Arc<KnownAddresses>,
}

impl IdRegistry {
    pub fn new(known: Arc<KnownAddresses>) -> Self {
        Self { known }
    }
}

impl Heuristic for IdRegistry {
    fn name(&self) -> &'static str {
        "farcaster-id-registry"
    }

    fn detect(&self, tx: &Transaction) -> bool {
        call_on(tx, |to| self.known.is_id_registry(to), &ID_REGISTRY_METHODS).is_some()
    }

    fn generate(&self, mut tx: Transaction) -> Transaction {
        let Some(call) =
            call_on(&tx, |to| self.known.is_id_registry(to), &ID_REGISTRY_METHODS).cloned()
        else {
            return tx;
        };

        let mut variables = BTreeMap::new();
        let mut summary_variables = BTreeMap::new();
        let template;

        match call.method.as_str() {
            // changeRecoveryAddressFor(owner, recovery, ...) acts on behalf
            // of the owner argument; the plain variant acts on the caller
            "changeRecoveryAddress" | "changeRecoveryAddressFor" => {
                let (owner, recovery) = if call.method == "changeRecoveryAddressFor" {
                    (
                        call.arg_str(0).unwrap_or(&tx.from).to_string(),
                        call.arg_str(1).unwrap_or_default().to_string(),
                    )
                } else {
                    (
                        tx.from.clone(),
                        call.arg_str(0).unwrap_or_default().to_string(),
                    )
                };
                variables.insert("owner".to_string(), ContextVariable::address(owner));
                variables.insert(
                    "recoveryAddress".to_string(),
                    ContextVariable::address(recovery),
                );
                summary_variables.insert(
                    "changedRecoveryAddress".to_string(),
                    ContextVariable::action("changed recovery address"),
                );
                template = "[[owner]] [[changedRecoveryAddress]] to [[recoveryAddress]]";
            }
            // transfer(to, ...) / transferFor(from, to, ...)
            _ => {
                let (owner, to) = if call.method == "transferFor" {
                    (
                        call.arg_str(0).unwrap_or(&tx.from).to_string(),
                        call.arg_str(1).unwrap_or_default().to_string(),
                    )
                } else {
                    (
                        tx.from.clone(),
                        call.arg_str(0).unwrap_or_default().to_string(),
                    )
                };
                variables.insert("owner".to_string(), ContextVariable::address(owner));
                variables.insert("to".to_string(), ContextVariable::address(to));
                summary_variables.insert(
                    "transferredId".to_string(),
                    ContextVariable::action("transferred Farcaster ID"),
                );
                template = "[[owner]] [[transferredId]] to [[to]]";
            }
        }

        tx.context = Some(Context {
            variables,
            summaries: Summaries {
                category: Category::Farcaster,
                en: Summary {
                    title: "Farcaster ID".to_string(),
                    template: template.to_string(),
                    variables: summary_variables,
                },
            },
        });

        tx
    }
}

/// Farcaster StorageRegistry operations: `rent` and `rentMany`.
#[derive(Debug, Clone)]
pub struct StorageRegistry {
    known: Arc<KnownAddresses>,
}

impl StorageRegistry {
    pub fn new(known: Arc<KnownAddresses>) -> Self {
        Self { known }
    }
}

impl Heuristic for StorageRegistry {
    fn name(&self) -> &'static str {
        "farcaster-storage-registry"
    }

    fn detect(&self, tx: &Transaction) -> bool {
        call_on(
            tx,
            |to| self.known.is_storage_registry(to),
            &["rent", "rentMany"],
        )
        .is_some()
    }

    fn generate(&self, mut tx: Transaction) -> Transaction {
        let Some(call) = call_on(
            &tx,
            |to| self.known.is_storage_registry(to),
            &["rent", "rentMany"],
        )
        .cloned() else {
            return tx;
        };

        // rent(fid, units) / rentMany(fids[], units[]); the displayed fid is
        // the first one, units are summed across all pairs before the
        // singular/plural choice is made
        let (fid, total_units) = if call.method == "rentMany" {
            let fid = call
                .args
                .first()
                .and_then(|v| v.as_array())
                .and_then(|fids| fids.first())
                .and_then(json_u64)
                .unwrap_or(0);
            let units: u64 = call
                .args
                .get(1)
                .and_then(|v| v.as_array())
                .map(|units| units.iter().filter_map(json_u64).sum())
                .unwrap_or(0);
            (fid, units)
        } else {
            (call.arg_u64(0).unwrap_or(0), call.arg_u64(1).unwrap_or(0))
        };

        let units_text = if total_units == 1 {
            "1 storage unit for".to_string()
        } else {
            format!("{total_units} storage units for")
        };

        let mut variables = BTreeMap::new();
        variables.insert("caller".to_string(), ContextVariable::address(tx.from.clone()));
        variables.insert(
            "fid".to_string(),
            ContextVariable::emphasis(format!("Farcaster ID #{fid}")),
        );
        variables.insert("units".to_string(), ContextVariable::emphasis(units_text));

        let mut summary_variables = BTreeMap::new();
        summary_variables.insert("rented".to_string(), ContextVariable::action("rented"));

        tx.context = Some(Context {
            variables,
            summaries: Summaries {
                category: Category::Farcaster,
                en: Summary {
                    title: "Farcaster Storage".to_string(),
                    template: "[[caller]] [[rented]] [[units]] [[fid]]".to_string(),
                    variables: summary_variables,
                },
            },
        });

        tx
    }
}

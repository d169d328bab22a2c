// End-to-end scenarios over recorded-transaction shaped fixtures.
use serde_json::json;
use tx_context::{Pipeline, Transaction};

const ID_REGISTRY: &str = "0x00000000fc6c5f01fc30151999387bb99a9f489b";
const STORAGE_REGISTRY: &str = "0x00000000fcce7f938e7ae6d3c335bd6a1a7c593d";
const NULL: &str = "0x0000000000000000000000000000000000000000";

fn tx(value: serde_json::Value) -> Transaction {
    serde_json::from_value(value).unwrap()
}

fn catchall() -> Transaction {
    // plain ETH send: no archetype should claim it
    tx(json!({
        "hash": "0xc35c01ac40fcf45eb5d7ad0f1bf3b3b09d0c030a",
        "from": "0x9a37e57d177c5ff8817b55da36f2a2b3532cde3f",
        "to": "0x4a9449ef55e1f4b7a07e0d296ba6ca09e1b59b16",
        "assetTransfers": [
            {"from": "0x9a37e57d177c5ff8817b55da36f2a2b3532cde3f",
             "to": "0x4a9449ef55e1f4b7a07e0d296ba6ca09e1b59b16",
             "type": "eth", "asset": "eth", "value": "50000000000000000"}
        ],
        "netAssetTransfers": {
            "0x9a37e57d177c5ff8817b55da36f2a2b3532cde3f": {
                "sent": [{"type": "eth", "asset": "eth", "value": "50000000000000000"}],
                "received": []
            },
            "0x4a9449ef55e1f4b7a07e0d296ba6ca09e1b59b16": {
                "sent": [],
                "received": [{"type": "eth", "asset": "eth", "value": "50000000000000000"}]
            }
        }
    }))
}

#[test]
fn catchall_matches_no_heuristic() {
    let pipeline = Pipeline::default();
    let fixture = catchall();
    assert!(pipeline.matches(&fixture).is_empty());
    assert!(pipeline.run(fixture).context.is_none());
}

#[test]
fn missing_net_transfers_matches_nothing() {
    let pipeline = Pipeline::default();
    let bare = tx(json!({
        "hash": "0x1",
        "from": "0x9a37e57d177c5ff8817b55da36f2a2b3532cde3f",
        "to": "0x4a9449ef55e1f4b7a07e0d296ba6ca09e1b59b16"
    }));
    assert!(pipeline.matches(&bare).is_empty());
    assert!(pipeline.run(bare).context.is_none());
}

#[test]
fn storage_rent_single_unit() {
    let pipeline = Pipeline::default();
    let rent = tx(json!({
        "hash": "0x09794a62f2f5e9ee1f3c3f5923f5e073c80c77c3",
        "from": "0x3a4afca659f54922a0d7a7b0bebabf641dec66bb",
        "to": STORAGE_REGISTRY,
        "decoded": {"method": "rent", "args": ["196573", "1"]}
    }));
    assert_eq!(pipeline.matches(&rent), vec!["farcaster-storage-registry"]);

    let context = pipeline.run(rent).context.unwrap();
    assert_eq!(context.variables["fid"].value(), Some("Farcaster ID #196573"));
    assert_eq!(context.variables["units"].value(), Some("1 storage unit for"));
    assert_eq!(
        context.variables["caller"].value(),
        Some("0x3a4afca659f54922a0d7a7b0bebabf641dec66bb")
    );
}

#[test]
fn storage_rent_many_aggregates_units() {
    let pipeline = Pipeline::default();
    let rent_many = tx(json!({
        "hash": "0x4a23db3decb10e1f0ab5ff4cf62165dc86a1d131",
        "from": "0x2d93c2f74b2c4697f9ea85d0450148aa45d4d5a2",
        "to": STORAGE_REGISTRY,
        "decoded": {"method": "rentMany", "args": [["12350", "12351"], [1, 1]]}
    }));
    let context = pipeline.run(rent_many).context.unwrap();
    assert_eq!(context.variables["units"].value(), Some("2 storage units for"));
    assert_eq!(context.variables["fid"].value(), Some("Farcaster ID #12350"));
}

#[test]
fn recovery_change_extracts_both_addresses() {
    let pipeline = Pipeline::default();
    let recovery = tx(json!({
        "hash": "0x07c03c85b732bbcfa3f4f8fbcca5551fd9e46163",
        "from": "0x5f00b21e8b0a9502e4a9f13e1ebd9858e5ab07c8",
        "to": ID_REGISTRY,
        "decoded": {
            "method": "changeRecoveryAddressFor",
            "args": [
                "0x71414dDe8eeEa49e916D77D1633366E602785ea4",
                "0x6BA0CADf5D997c6b3EE62bBE55594456B4E80039",
                "1712685487",
                "0x00"
            ]
        }
    }));
    assert_eq!(pipeline.matches(&recovery), vec!["farcaster-id-registry"]);

    let context = pipeline.run(recovery).context.unwrap();
    assert_eq!(
        context.variables["owner"].value(),
        Some("0x71414dDe8eeEa49e916D77D1633366E602785ea4")
    );
    assert_eq!(
        context.variables["recoveryAddress"].value(),
        Some("0x6BA0CADf5D997c6b3EE62bBE55594456B4E80039")
    );
}

#[test]
fn paid_mint_classifies_as_mint_not_purchase() {
    // minter pays ETH and receives a fresh ERC-721: both the mint and the
    // purchase predicates fire, the pipeline must hand it to the mint
    let pipeline = Pipeline::default();
    let minter = "0x1111111111111111111111111111111111111111";
    let collection = "0x2222222222222222222222222222222222222222";
    let paid_mint = tx(json!({
        "hash": "0x2",
        "from": minter,
        "to": collection,
        "assetTransfers": [
            {"from": NULL, "to": minter, "type": "erc721", "asset": collection, "tokenId": "5"}
        ],
        "netAssetTransfers": {
            minter: {
                "sent": [{"type": "eth", "asset": "eth", "value": "80000000000000000"}],
                "received": [{"type": "erc721", "asset": collection, "tokenId": "5"}]
            },
            collection: {
                "sent": [],
                "received": [{"type": "eth", "asset": "eth", "value": "80000000000000000"}]
            }
        }
    }));

    let matches = pipeline.matches(&paid_mint);
    assert_eq!(matches, vec!["token-mint", "erc721-purchase"]);

    let context = pipeline.run(paid_mint).context.unwrap();
    assert_eq!(context.summaries.en.title, "Token Mint");
}

#[test]
fn rerunning_the_pipeline_is_idempotent() {
    let pipeline = Pipeline::default();
    let rent = tx(json!({
        "hash": "0x09794a62f2f5e9ee1f3c3f5923f5e073c80c77c3",
        "from": "0x3a4afca659f54922a0d7a7b0bebabf641dec66bb",
        "to": STORAGE_REGISTRY,
        "decoded": {"method": "rent", "args": ["196573", "1"]}
    }));

    let once = pipeline.run(rent);
    let twice = pipeline.run(once.clone());
    assert_eq!(once.context, twice.context);
}

#[test]
fn fixture_corpus_yields_at_most_one_winner() {
    let pipeline = Pipeline::default();
    let corpus = vec![
        catchall(),
        tx(json!({
            "hash": "0x3",
            "from": "0x5f00b21e8b0a9502e4a9f13e1ebd9858e5ab07c8",
            "to": ID_REGISTRY,
            "decoded": {"method": "transfer", "args": ["0xBC04652B7657E9a7C2778f04B425683955DE88C1", "0", "0x00"]}
        })),
        tx(json!({
            "hash": "0x4",
            "from": "0x9a37e57d177c5ff8817b55da36f2a2b3532cde3f",
            "to": "0x6b175474e89094c44da98b954eedeac495271d0f",
            "decoded": {"method": "approve", "args": ["0x7a250d5630b4cf539739df2c5dacb4c659f2488d", "1000"]}
        })),
    ];

    for fixture in corpus {
        let matched = pipeline.matches(&fixture);
        assert!(matched.len() <= 1, "{} claimed by {:?}", fixture.hash, matched);
    }
}

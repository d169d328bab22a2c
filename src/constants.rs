// src/constants.rs
use alloy::primitives::{address, Address};

/// Canonical mint/burn origin.
pub const NULL_ADDRESS: Address = address!("0000000000000000000000000000000000000000");

/// Wrapped-native token contracts (WETH on mainnet, WMATIC on Polygon).
/// Transfers minted into these are wrapping, not token mints.
pub const WRAPPED_NATIVE: [Address; 2] = [
    address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"),
    address!("0d500b1d8e8ef31e21c99d1db9a6444d3adf1270"),
];

/// Farcaster IdRegistry on OP mainnet.
pub const FARCASTER_ID_REGISTRY: Address = address!("00000000fc6c5f01fc30151999387bb99a9f489b");

/// Farcaster StorageRegistry on OP mainnet.
pub const FARCASTER_STORAGE_REGISTRY: Address =
    address!("00000000fcce7f938e7ae6d3c335bd6a1a7c593d");

/// Well-known addresses consulted by detection predicates. Injected into
/// heuristics at construction so tests can swap in alternate address sets;
/// `Default` carries the mainnet values above.
#[derive(Debug, Clone)]
pub struct KnownAddresses {
    pub null: Address,
    pub wrapped_native: Vec<Address>,
    pub farcaster_id_registry: Address,
    pub farcaster_storage_registry: Address,
}

impl Default for KnownAddresses {
    fn default() -> Self {
        Self {
            null: NULL_ADDRESS,
            wrapped_native: WRAPPED_NATIVE.to_vec(),
            farcaster_id_registry: FARCASTER_ID_REGISTRY,
            farcaster_storage_registry: FARCASTER_STORAGE_REGISTRY,
        }
    }
}

impl KnownAddresses {
    pub fn is_null(&self, addr: &str) -> bool {
        parsed(addr) == Some(self.null)
    }

    pub fn is_wrapped_native(&self, asset: &str) -> bool {
        match parsed(asset) {
            Some(a) => self.wrapped_native.contains(&a),
            None => false,
        }
    }

    pub fn is_id_registry(&self, addr: &str) -> bool {
        parsed(addr) == Some(self.farcaster_id_registry)
    }

    pub fn is_storage_registry(&self, addr: &str) -> bool {
        parsed(addr) == Some(self.farcaster_storage_registry)
    }
}

/// Upstream data carries addresses in mixed case; comparisons go through
/// `Address` so casing never matters. Unparseable strings match nothing.
fn parsed(addr: &str) -> Option<Address> {
    addr.parse::<Address>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_detection() {
        let known = KnownAddresses::default();
        assert!(known.is_null("0x0000000000000000000000000000000000000000"));
        assert!(!known.is_null("0x1111111111111111111111111111111111111111"));
        assert!(!known.is_null("not-an-address"));
    }

    #[test]
    fn wrapped_native_checksummed_and_lowercase() {
        let known = KnownAddresses::default();
        assert!(known.is_wrapped_native("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"));
        assert!(known.is_wrapped_native("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"));
        assert!(!known.is_wrapped_native("0x6b175474e89094c44da98b954eedeac495271d0f"));
    }

    #[test]
    fn registry_addresses_distinct() {
        let known = KnownAddresses::default();
        assert!(known.is_id_registry("0x00000000Fc6c5F01Fc30151999387Bb99A9f489b"));
        assert!(!known.is_storage_registry("0x00000000Fc6c5F01Fc30151999387Bb99A9f489b"));
    }
}

use serde::Serialize;

use crate::keys::{NetworkTag, PrivateKeyRecord, PublicKeyBytes};

/// Everything derived from one private key.
#[derive(Debug, Clone, Serialize)]
pub struct KeyReport {
    #[serde(flatten)]
    record: PrivateKeyRecord,
    public_key: PublicKeyBytes,
    address: String,
    wif: String,
}

impl KeyReport {
    pub fn new(
        record: PrivateKeyRecord,
        public_key: PublicKeyBytes,
        address: String,
        wif: String,
    ) -> Self {
        KeyReport {
            record,
            public_key,
            address,
            wif,
        }
    }

    pub fn record(&self) -> &PrivateKeyRecord {
        &self.record
    }

    pub fn scalar(&self) -> &[u8; 32] {
        self.record.scalar()
    }

    pub fn network(&self) -> NetworkTag {
        self.record.network()
    }

    pub fn is_compressed(&self) -> bool {
        self.record.is_compressed()
    }

    pub fn public_key(&self) -> &PublicKeyBytes {
        &self.public_key
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn wif(&self) -> &str {
        &self.wif
    }
}

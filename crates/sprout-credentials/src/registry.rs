use std::collections::HashMap;

use sprout_core::models::instrument::InstrumentKind;

const ADMIN_ACCOUNT_ID: &str = "admin";
const ADMIN_SECRET: &str = "gtdd001";

const SENSORY_PREFIX: &str = "GT";
const BEHAVIORAL_PREFIX: &str = "DD";
const ACCOUNTS_PER_INSTRUMENT: u32 = 100;

/// One credential on a printed assessment card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub account_id: String,
    pub secret: String,
    pub instrument: InstrumentKind,
    pub is_admin: bool,
}

/// Build the full credential set, keyed by account id.
///
/// Pure arithmetic — no randomness, no I/O — so every process derives the
/// identical set. One administrator, then 100 sensory cards (GT0001–GT0100)
/// and 100 behavioral cards (DD0001–DD0100), each with a 6-digit secret
/// derived from its sequence number.
pub fn build_registry() -> HashMap<String, CredentialRecord> {
    let mut registry = HashMap::with_capacity(2 * ACCOUNTS_PER_INSTRUMENT as usize + 1);

    // The admin's declared instrument is a record-shape default; admins
    // bypass the instrument-affinity check entirely.
    registry.insert(
        ADMIN_ACCOUNT_ID.to_string(),
        CredentialRecord {
            account_id: ADMIN_ACCOUNT_ID.to_string(),
            secret: ADMIN_SECRET.to_string(),
            instrument: InstrumentKind::Behavioral,
            is_admin: true,
        },
    );

    for seq in 1..=ACCOUNTS_PER_INSTRUMENT {
        let account_id = format!("{SENSORY_PREFIX}{seq:04}");
        registry.insert(
            account_id.clone(),
            CredentialRecord {
                account_id,
                secret: derive_secret(seq, 997, 12_345),
                instrument: InstrumentKind::Sensory,
                is_admin: false,
            },
        );

        let account_id = format!("{BEHAVIORAL_PREFIX}{seq:04}");
        registry.insert(
            account_id.clone(),
            CredentialRecord {
                account_id,
                secret: derive_secret(seq, 883, 54_321),
                instrument: InstrumentKind::Behavioral,
                is_admin: false,
            },
        );
    }

    registry
}

/// Six-digit secret for a card sequence number.
///
/// The multiplier/offset pairs are frozen: cards already in circulation
/// carry secrets computed with exactly these constants.
fn derive_secret(seq: u32, multiplier: u32, offset: u32) -> String {
    ((seq * multiplier + offset) % 900_000 + 100_000).to_string()
}

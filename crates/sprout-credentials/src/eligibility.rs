use std::collections::HashMap;

use jiff::Timestamp;
use tracing::{info, warn};

use sprout_core::models::instrument::InstrumentKind;
use sprout_storage::kv::KvStore;
use sprout_storage::state;

use crate::error::LoginDenied;
use crate::registry::{self, CredentialRecord};

/// Well-known storage key holding the usage log: a JSON object mapping
/// account id to the epoch-millisecond timestamp of its last use.
pub const USAGE_LOG_KEY: &str = "used_accounts_log";

const COOLDOWN_MS: i64 = 24 * 60 * 60 * 1000;
const HOUR_MS: i64 = 60 * 60 * 1000;

/// A validated login. The caller layers any instrument-affinity policy on
/// top of the returned `instrument`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginSession {
    pub instrument: InstrumentKind,
    pub is_admin: bool,
}

/// Validates credentials against the registry and enforces the 24-hour
/// single-use window through the persisted usage log.
pub struct EligibilityEngine<S> {
    registry: HashMap<String, CredentialRecord>,
    store: S,
}

impl<S: KvStore> EligibilityEngine<S> {
    pub fn new(store: S) -> Self {
        Self {
            registry: registry::build_registry(),
            store,
        }
    }

    /// Check whether `account_id`/`secret` may start an assessment now.
    ///
    /// Succeeding here does not consume the credential: the surrounding
    /// flow commits consumption with [`Self::mark_used`] once it accepts
    /// the login.
    pub fn login(&self, account_id: &str, secret: &str) -> Result<LoginSession, LoginDenied> {
        self.login_at(account_id, secret, Timestamp::now().as_millisecond())
    }

    /// [`Self::login`] with an explicit clock, for cooldown tests.
    pub fn login_at(
        &self,
        account_id: &str,
        secret: &str,
        now_ms: i64,
    ) -> Result<LoginSession, LoginDenied> {
        let Some(record) = self.registry.get(account_id) else {
            return Err(LoginDenied::AccountNotFound);
        };
        if record.secret != secret {
            return Err(LoginDenied::IncorrectSecret);
        }

        // Administrators skip the cooldown and never touch the log.
        if record.is_admin {
            info!(account_id = account_id, "administrator login");
            return Ok(LoginSession {
                instrument: record.instrument,
                is_admin: true,
            });
        }

        if let Some(&last_used_ms) = self.read_log().get(account_id) {
            let elapsed = now_ms - last_used_ms;
            if elapsed < COOLDOWN_MS {
                let hours_remaining =
                    ((COOLDOWN_MS - elapsed) as u64).div_ceil(HOUR_MS as u64) as i64;
                return Err(LoginDenied::AccountLocked { hours_remaining });
            }
        }

        info!(account_id = account_id, "login accepted");
        Ok(LoginSession {
            instrument: record.instrument,
            is_admin: false,
        })
    }

    /// Start (or restart) the account's 24-hour window. No-op for
    /// administrators; write failures are logged and swallowed, best
    /// effort.
    pub fn mark_used(&self, account_id: &str) {
        self.mark_used_at(account_id, Timestamp::now().as_millisecond());
    }

    /// [`Self::mark_used`] with an explicit clock, for cooldown tests.
    pub fn mark_used_at(&self, account_id: &str, now_ms: i64) {
        if self
            .registry
            .get(account_id)
            .is_some_and(|record| record.is_admin)
        {
            return;
        }

        let mut log = self.read_log();
        log.insert(account_id.to_string(), now_ms);
        if let Err(e) = state::save_state(&self.store, USAGE_LOG_KEY, &log) {
            warn!(error = %e, account_id = account_id, "failed to persist usage log");
        }
    }

    /// Look up a registry record, e.g. for caller-side affinity checks.
    pub fn record(&self, account_id: &str) -> Option<&CredentialRecord> {
        self.registry.get(account_id)
    }

    // Fail open: an unreadable or corrupt store must not block logins, so
    // it reads as an empty log.
    fn read_log(&self) -> HashMap<String, i64> {
        match state::load_state(&self.store, USAGE_LOG_KEY) {
            Ok(Some(log)) => log,
            Ok(None) => HashMap::new(),
            Err(e) => {
                warn!(error = %e, "usage log unreadable, treating as empty");
                HashMap::new()
            }
        }
    }
}

//! Admin bootstrap code service.
//!
//! Generates and redeems the one-time verification codes used to create the
//! first admin user on a fresh deployment. A code is issued on startup when
//! no admin exists, lives in memory with a short TTL, and is invalidated the
//! moment it is redeemed or expires — there is never more than one code at a
//! time, and a code never survives a restart.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// How long an issued code stays redeemable.
const CODE_TTL: Duration = Duration::from_secs(60);

/// Length of the generated code string.
const CODE_LENGTH: usize = 32;

/// An issued code with its expiry instant.
#[derive(Clone)]
struct BootstrapCode {
    code: String,
    expires_at: Instant,
}

impl BootstrapCode {
    fn new(code: String) -> Self {
        Self {
            code,
            expires_at: Instant::now() + CODE_TTL,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Service managing the single in-memory admin bootstrap code.
///
/// Cloning shares the underlying code slot, so the instance stored in
/// application state and the one used during startup observe the same code.
#[derive(Clone)]
pub struct AdminCodeService {
    code: Arc<RwLock<Option<BootstrapCode>>>,
}

impl AdminCodeService {
    pub fn new() -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
        }
    }

    /// Issues a fresh code, replacing any previously issued one.
    ///
    /// # Returns
    /// - `String` - The generated code to include in the logged login link
    pub async fn issue(&self) -> String {
        let code = Self::random_code();
        *self.code.write().await = Some(BootstrapCode::new(code.clone()));
        code
    }

    /// Redeems a presented code.
    ///
    /// Succeeds only when a code is stored, unexpired, and matches the input
    /// exactly. A successful redemption consumes the code; an expired code is
    /// discarded on first contact so it cannot be retried.
    ///
    /// # Returns
    /// - `true` - Code matched and has now been consumed
    /// - `false` - No code, expired code, or mismatch
    pub async fn redeem(&self, input: &str) -> bool {
        let mut slot = self.code.write().await;

        match slot.as_ref() {
            Some(stored) if stored.is_expired() => {
                *slot = None;
                false
            }
            Some(stored) if stored.code == input => {
                *slot = None;
                true
            }
            _ => false,
        }
    }

    fn random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}

//! Time-based one-time passwords - RFC 6238 generation and verification,
//! otpauth:// provisioning URIs and recovery code batches.

mod generator;
mod recovery;
mod uri;

pub use generator::{
    compute_hmac, counter_at, generate_at, generate_now, new_secret, truncate, verify_at,
    verify_now,
};
pub use recovery::{generate_batch, generate_batch_with};
pub use uri::ProvisioningUri;

/// Smallest accepted code length
pub const DIGITS_MIN: u32 = 6;

/// Largest accepted code length
pub const DIGITS_MAX: u32 = 8;

/// Default time step in seconds
pub const DEFAULT_PERIOD: u64 = 30;

/// Base of every provisioning URI
pub const OTPAUTH_BASE_URL: &str = "otpauth://totp";

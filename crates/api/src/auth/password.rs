//! Argon2id password hashing and verification.
//!
//! Hashes use a random salt from [`OsRng`] and are stored as PHC strings, so
//! the cost parameters travel with each hash. Verification reads them from
//! the hash, which lets the configured cost change without invalidating
//! existing users.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

/// Argon2id cost parameters, fixed per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordConfig {
    /// Memory cost in KiB (default: 19456).
    pub memory_kib: u32,
    /// Number of passes (default: 2).
    pub iterations: u32,
    /// Degree of parallelism (default: 1).
    pub parallelism: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl PasswordConfig {
    /// Load hashing cost from environment variables.
    ///
    /// | Env Var                     | Default |
    /// |-----------------------------|---------|
    /// | `PASSWORD_HASH_MEMORY_KIB`  | `19456` |
    /// | `PASSWORD_HASH_ITERATIONS`  | `2`     |
    /// | `PASSWORD_HASH_PARALLELISM` | `1`     |
    ///
    /// # Panics
    ///
    /// Panics if a value does not parse or the combination is rejected by Argon2.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let read = |key: &str, default: u32| -> u32 {
            std::env::var(key)
                .map(|v| v.parse().unwrap_or_else(|_| panic!("{key} must be a valid u32")))
                .unwrap_or(default)
        };

        let config = Self {
            memory_kib: read("PASSWORD_HASH_MEMORY_KIB", defaults.memory_kib),
            iterations: read("PASSWORD_HASH_ITERATIONS", defaults.iterations),
            parallelism: read("PASSWORD_HASH_PARALLELISM", defaults.parallelism),
        };
        if let Err(e) = config.hasher() {
            panic!("Invalid password hashing parameters: {e}");
        }
        config
    }

    /// Build an Argon2id hasher with these parameters.
    pub fn hasher(&self) -> Result<Argon2<'static>, argon2::Error> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Hash a plaintext password using Argon2id with a random salt.
///
/// Returns the PHC-formatted hash string (includes algorithm, params, salt, and hash).
pub fn hash_password(
    password: &str,
    config: &PasswordConfig,
) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = config.hasher()?;
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted Argon2id hash.
///
/// Returns `Ok(true)` if the password matches, `Ok(false)` if it does not.
/// The comparison is constant-time.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

//! Candidate identifier generation.
//!
//! Generators only propose codes. Uniqueness is enforced by the store, which
//! checks every candidate and asks for another on collision.

use rand::Rng;
use rand::distr::Alphanumeric;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::code::ShortCode;

/// Default identifier length.
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// Shortest identifier length accepted by configuration.
pub const MIN_CODE_LENGTH: usize = 6;

/// Longest identifier length accepted by configuration.
pub const MAX_CODE_LENGTH: usize = 16;

const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Source of fresh candidate identifiers.
///
/// Implementations must be safe to call from many threads at once.
pub trait CodeGenerator: Send + Sync {
    /// Proposes a candidate. It may already be taken.
    fn generate(&self) -> ShortCode;

    /// Number of characters in every generated code.
    fn length(&self) -> usize;
}

/// Which [`CodeGenerator`] the service is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorStrategy {
    Random,
    Sequential,
}

impl GeneratorStrategy {
    pub fn build(self, length: usize) -> Box<dyn CodeGenerator> {
        match self {
            Self::Random => Box::new(RandomGenerator::new(length)),
            Self::Sequential => Box::new(SequentialGenerator::new(length)),
        }
    }
}

impl FromStr for GeneratorStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "sequential" => Ok(Self::Sequential),
            other => Err(format!(
                "unknown generator strategy '{other}', expected 'random' or 'sequential'"
            )),
        }
    }
}

/// Samples each character uniformly from `[A-Za-z0-9]`.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    length: usize,
}

impl RandomGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomGenerator {
    fn generate(&self) -> ShortCode {
        let code: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect();
        ShortCode::new(code)
    }

    fn length(&self) -> usize {
        self.length
    }
}

/// Base62-encodes a monotonically increasing counter.
///
/// The counter wraps at `62^length`, after which codes repeat and the store
/// starts reporting collisions.
#[derive(Debug)]
pub struct SequentialGenerator {
    counter: AtomicU64,
    length: usize,
    capacity: Option<u64>,
}

impl SequentialGenerator {
    pub fn new(length: usize) -> Self {
        Self::with_offset(length, 0)
    }

    /// Starts counting from `offset` instead of zero.
    pub fn with_offset(length: usize, offset: u64) -> Self {
        let capacity = u32::try_from(length)
            .ok()
            .and_then(|exp| 62u64.checked_pow(exp));
        Self {
            counter: AtomicU64::new(offset),
            length,
            capacity,
        }
    }
}

impl CodeGenerator for SequentialGenerator {
    fn generate(&self) -> ShortCode {
        let raw = self.counter.fetch_add(1, Ordering::Relaxed);
        let value = match self.capacity {
            Some(capacity) => raw % capacity,
            None => raw,
        };
        ShortCode::new(encode_base62(value, self.length))
    }

    fn length(&self) -> usize {
        self.length
    }
}

/// Encodes `value` in base62, left-padded with `0` to `width` characters.
fn encode_base62(mut value: u64, width: usize) -> String {
    let mut digits = Vec::with_capacity(width);
    while value > 0 {
        digits.push(BASE62_ALPHABET[(value % 62) as usize]);
        value /= 62;
    }
    while digits.len() < width {
        digits.push(b'0');
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}

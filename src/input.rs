//! Sample-set documents.
//!
//! A document is a JSON object with a `keys` block and one record per sample:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Records keep the order they appear in the text. Only names made of ASCII
//! digits are records; a repeated name yields a second record.

use core::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};
use num_bigint::BigInt;
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;

use crate::mpc::{radix, reconstruct, Point, RecoveryError};

const KEYS_FIELD: &str = "keys";

/// Top-level object, with every record kept in textual order. Repeated
/// names stay separate entries.
struct RawDocument {
    keys: Option<RawKeys>,
    records: Vec<(String, Value)>,
}

impl<'de> Deserialize<'de> for RawDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = RawDocument;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of sample records")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawDocument, A::Error> {
        let mut keys = None;
        let mut records = Vec::new();
        while let Some(name) = map.next_key::<String>()? {
            if name != KEYS_FIELD {
                records.push((name, map.next_value::<Value>()?));
            } else if keys.is_none() {
                keys = Some(map.next_value::<RawKeys>()?);
            } else {
                // First `keys` block wins.
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(RawDocument { keys, records })
    }
}

#[derive(Deserialize)]
struct RawKeys {
    #[serde(default)]
    n: Option<Value>,
    #[serde(default)]
    k: Option<Value>,
}

#[derive(Deserialize)]
struct RawRecord {
    base: RawBase,
    value: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBase {
    Text(String),
    Number(u64),
}

impl RawBase {
    /// Values that fit a `u32` go to the decoder, which range-checks them.
    fn to_base(&self, index: &str) -> Result<u32, RecoveryError> {
        match self {
            RawBase::Text(text) => {
                let text = text.trim();
                if !is_decimal(text) {
                    return Err(RecoveryError::MalformedInput(format!(
                        "record {}: base {:?} is not an integer",
                        index, text
                    )));
                }
                text.parse::<u32>().map_err(|_| base_out_of_range(index, text))
            }
            RawBase::Number(number) => {
                u32::try_from(*number).map_err(|_| base_out_of_range(index, number))
            }
        }
    }
}

fn base_out_of_range(index: &str, base: impl fmt::Display) -> RecoveryError {
    RecoveryError::MalformedInput(format!("record {}: base {} is out of range", index, base))
}

/// Non-empty and ASCII digits only.
fn is_decimal(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// One decoded sample set: the threshold and its points in document order.
#[derive(Debug, Clone)]
pub struct TestCase {
    k: usize,
    n: Option<u64>,
    points: Vec<Point>,
}

impl TestCase {
    /// Reads and parses the document at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RecoveryError> {
        let text = read_text(path)?;
        Self::parse(&text)
    }

    /// Parses a document and decodes every sample in it.
    pub fn parse(text: &str) -> Result<Self, RecoveryError> {
        let document: RawDocument = serde_json::from_str(text)?;

        let keys = document.keys.ok_or(RecoveryError::MissingField("k"))?;
        let k = keys
            .k
            .as_ref()
            .and_then(Value::as_u64)
            .and_then(|k| usize::try_from(k).ok())
            .ok_or(RecoveryError::MissingField("k"))?;
        let n = keys.n.as_ref().and_then(Value::as_u64);

        let mut points = Vec::with_capacity(document.records.len());
        for (index, record) in &document.records {
            if !is_decimal(index) {
                debug!("Skipping non-sample entry {:?}", index);
                continue;
            }
            let x = index.parse::<BigInt>().map_err(|e| {
                RecoveryError::MalformedInput(format!("record {}: {}", index, e))
            })?;
            let raw: RawRecord = serde_json::from_value(record.clone()).map_err(|e| {
                RecoveryError::MalformedInput(format!("record {}: {}", index, e))
            })?;
            let base = raw.base.to_base(index)?;
            let y = radix::decode(&raw.value, base)?;
            debug!("Decoded record {} in base {} ({} bits)", index, base, y.bits());
            points.push(Point::new(x, y));
        }

        if let Some(n) = n {
            if n != points.len() as u64 {
                warn!("Declared n={} but found {} samples", n, points.len());
            }
        }

        Ok(Self { k, n, points })
    }

    /// The threshold: how many points define the polynomial.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The declared sample count, if any. Informational only.
    pub fn n(&self) -> Option<u64> {
        self.n
    }

    /// Decoded points in document order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Evaluates the polynomial through the first `k` points at `at`.
    pub fn evaluate(&self, at: &BigInt) -> Result<BigInt, RecoveryError> {
        reconstruct::reconstruct_at(&self.points, self.k, at)
    }

    /// Recovers the constant term.
    pub fn secret(&self) -> Result<BigInt, RecoveryError> {
        reconstruct::reconstruct_secret(&self.points, self.k)
    }
}

/// Reads a whole file as UTF-8 text.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, RecoveryError> {
    let mut file = File::open(path)?;
    let mut text = String::new();
    file.read_to_string(&mut text)?;
    Ok(text)
}

// hash.rs
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

const SHA256_PREFIX: &str = "SHA-256:";

/// Hash SHA-256 del contenido de un adjunto.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SecureHash([u8; 32]);

impl SecureHash {
  pub fn from_bytes(bytes: [u8; 32]) -> Self {
    SecureHash(bytes)
  }

  /// Calcula el hash de `data`.
  pub fn sha256(data: &[u8]) -> Self {
    SecureHash(Sha256::digest(data).into())
  }

  /// Acepta hexadecimal de 64 caracteres (mayúsculas o minúsculas), con el
  /// prefijo opcional `SHA-256:`.
  pub fn parse(text: &str) -> Result<Self, String> {
    let hex_part = text.strip_prefix(SHA256_PREFIX).unwrap_or(text);
    let bytes = hex::decode(hex_part).map_err(|e| format!("hexadecimal inválido: {}", e))?;
    let arr: [u8; 32] = bytes.as_slice()
                             .try_into()
                             .map_err(|_| format!("se esperaban 32 bytes, hay {}", bytes.len()))?;
    Ok(SecureHash(arr))
  }

  pub fn as_bytes(&self) -> &[u8; 32] {
    &self.0
  }
}

impl fmt::Display for SecureHash {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&hex::encode_upper(self.0))
  }
}

impl fmt::Debug for SecureHash {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "SecureHash({})", self)
  }
}

impl FromStr for SecureHash {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

impl Serialize for SecureHash {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.to_string())
  }
}

impl<'de> Deserialize<'de> for SecureHash {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let s = String::deserialize(deserializer)?;
    SecureHash::parse(&s).map_err(serde::de::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_accepts_prefix_and_lowercase() {
    let h = SecureHash::sha256(b"attachment");
    let upper = h.to_string();
    assert_eq!(SecureHash::parse(&upper).unwrap(), h);
    assert_eq!(SecureHash::parse(&upper.to_lowercase()).unwrap(), h);
    assert_eq!(SecureHash::parse(&format!("SHA-256:{}", upper)).unwrap(), h);
  }

  #[test]
  fn parse_rejects_wrong_length() {
    assert!(SecureHash::parse("AABB").is_err());
    assert!(SecureHash::parse("not-a-hash").is_err());
  }
}

use serde::Serialize;
use sha2::{Digest, Sha256};
use svj_core::errors::{ErrorInfo, SvjError};

fn hash_json<T: Serialize>(value: &T) -> Result<String, SvjError> {
    let json = serde_json::to_vec(value)
        .map_err(|err| SvjError::Serde(ErrorInfo::new("settings-serialize", err.to_string())))?;
    let mut hasher = Sha256::new();
    hasher.update(json);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Computes the canonical hash of rendered simulator settings.
pub fn hash_settings(lines: &[String]) -> Result<String, SvjError> {
    hash_json(&lines)
}

/// Computes the canonical hash of any serializable model artefact.
pub fn hash_artifact<T: Serialize>(value: &T) -> Result<String, SvjError> {
    hash_json(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_hash_is_order_sensitive() {
        let forward = vec!["a = 1".to_string(), "b = 2".to_string()];
        let reversed = vec!["b = 2".to_string(), "a = 1".to_string()];
        assert_ne!(hash_settings(&forward).unwrap(), hash_settings(&reversed).unwrap());
        assert_eq!(hash_settings(&forward).unwrap(), hash_artifact(&forward).unwrap());
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refused"))
        }
    }

    #[test]
    fn serialization_failures_carry_a_stable_code() {
        let err = hash_artifact(&Unserializable).unwrap_err();
        assert_eq!(err.code(), "settings-serialize");
    }
}

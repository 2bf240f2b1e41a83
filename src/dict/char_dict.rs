use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DictError, Romanization};

const MAGIC: &[u8; 4] = b"ZYDX";
const VERSION: u8 = 1;
const HEADER_SIZE: usize = 5; // 4 bytes magic + 1 byte version

#[derive(Debug, Serialize, Deserialize)]
struct DictData {
    entries: HashMap<char, String>,
}

/// In-memory character-to-Jyutping dictionary.
///
/// Loaded once per process and read-only afterwards; lookups are O(1) and
/// synchronous. Characters with multiple readings carry only their
/// canonical one.
#[derive(Debug)]
pub struct CharDictionary {
    data: DictData,
}

impl CharDictionary {
    pub fn from_entries(entries: impl IntoIterator<Item = (char, String)>) -> Self {
        Self {
            data: DictData {
                entries: entries.into_iter().collect(),
            },
        }
    }

    /// Parse a TSV source: one `character<TAB>jyutping` pair per line.
    /// Blank lines and `#` comments are skipped. Later lines win for
    /// duplicate characters.
    pub fn from_tsv(text: &str) -> Result<Self, DictError> {
        let mut entries = HashMap::new();
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((field, reading)) = line.split_once('\t') else {
                return Err(DictError::Parse(format!(
                    "line {}: expected character<TAB>jyutping",
                    lineno + 1
                )));
            };
            let mut chars = field.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                return Err(DictError::Parse(format!(
                    "line {}: key must be a single character",
                    lineno + 1
                )));
            };
            entries.insert(ch, reading.trim().to_string());
        }
        Ok(Self {
            data: DictData { entries },
        })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        let mut buf = Vec::new();
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        let encoded = bincode::serialize(&self.data).map_err(DictError::Serialize)?;
        buf.extend_from_slice(&encoded);
        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, DictError> {
        if data.len() < HEADER_SIZE {
            return Err(DictError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(DictError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(DictError::UnsupportedVersion(data[4]));
        }
        let data: DictData =
            bincode::deserialize(&data[HEADER_SIZE..]).map_err(DictError::Deserialize)?;
        Ok(Self { data })
    }

    pub fn open(path: &Path) -> Result<Self, DictError> {
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    pub fn save(&self, path: &Path) -> Result<(), DictError> {
        fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.data.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.entries.is_empty()
    }
}

impl Romanization for CharDictionary {
    fn lookup(&self, ch: char) -> Option<&str> {
        self.data.entries.get(&ch).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dict() -> CharDictionary {
        CharDictionary::from_entries([
            ('我', "ngo5".to_string()),
            ('你', "nei5".to_string()),
            ('食', "sik6".to_string()),
        ])
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let dict = sample_dict();
        assert_eq!(dict.lookup('我'), Some("ngo5"));
        assert_eq!(dict.lookup('無'), None);
    }

    #[test]
    fn test_lookup_many_preserves_order() {
        let dict = sample_dict();
        let got = dict.lookup_many(&['你', '無', '我']);
        assert_eq!(got, vec![Some("nei5"), None, Some("ngo5")]);
    }

    #[test]
    fn test_from_tsv() {
        let dict = CharDictionary::from_tsv("# comment\n我\tngo5\n\n屋\tuk1\n").unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.lookup('屋'), Some("uk1"));
    }

    #[test]
    fn test_from_tsv_rejects_multi_char_key() {
        let err = CharDictionary::from_tsv("我哋\tngo5 dei6\n").unwrap_err();
        assert!(matches!(err, DictError::Parse(_)));
    }

    #[test]
    fn test_from_tsv_rejects_missing_tab() {
        let err = CharDictionary::from_tsv("我 ngo5\n").unwrap_err();
        assert!(matches!(err, DictError::Parse(_)));
    }

    #[test]
    fn test_serialize_roundtrip() {
        let dict = sample_dict();
        let bytes = dict.to_bytes().unwrap();
        let dict2 = CharDictionary::from_bytes(&bytes).unwrap();
        assert_eq!(dict2.len(), dict.len());
        assert_eq!(dict2.lookup('食'), Some("sik6"));
    }

    #[test]
    fn test_invalid_magic() {
        let result = CharDictionary::from_bytes(b"XXXX\x01data");
        assert!(matches!(result, Err(DictError::InvalidMagic)));
    }

    #[test]
    fn test_header_too_short() {
        let result = CharDictionary::from_bytes(b"ZYD");
        assert!(matches!(result, Err(DictError::InvalidHeader)));
    }

    #[test]
    fn test_unsupported_version() {
        let result = CharDictionary::from_bytes(b"ZYDX\x99");
        assert!(matches!(result, Err(DictError::UnsupportedVersion(0x99))));
    }
}

use encoding_rs::Encoding;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::errors::CharsetError;

/// A named text encoding known to the charset registry.
///
/// Lookup goes through [`Charset::for_name`], which accepts the canonical name
/// or any registered alias (case-insensitive) and always hands back the
/// canonical form. The six standard charsets carry their own alias tables;
/// every other encoding known to `encoding_rs` is reachable through its WHATWG
/// labels and is named by `Encoding::name()`.
#[derive(Debug, Clone, Copy)]
pub struct Charset {
    name: &'static str,
    aliases: &'static [&'static str],
}

/// Charsets every runtime must support, checked before the WHATWG labels so
/// that e.g. `ISO-8859-1` does not collapse into `windows-1252`.
const STANDARD: &[Charset] = &[
    Charset::US_ASCII,
    Charset::ISO_8859_1,
    Charset::UTF_8,
    Charset::UTF_16BE,
    Charset::UTF_16LE,
    Charset::UTF_16,
];

impl Charset {
    pub const US_ASCII: Charset = Charset {
        name: "US-ASCII",
        aliases: &[
            "iso-ir-6",
            "ANSI_X3.4-1986",
            "ISO_646.irv:1991",
            "ASCII",
            "ISO646-US",
            "us",
            "IBM367",
            "cp367",
            "csASCII",
            "default",
            "646",
            "iso_646.irv:1983",
            "ANSI_X3.4-1968",
            "ascii7",
        ],
    };

    pub const ISO_8859_1: Charset = Charset {
        name: "ISO-8859-1",
        aliases: &[
            "iso-ir-100",
            "ISO_8859-1",
            "latin1",
            "l1",
            "IBM819",
            "cp819",
            "csISOLatin1",
            "819",
            "IBM-819",
            "ISO8859_1",
            "ISO_8859-1:1987",
            "ISO_8859_1",
            "8859_1",
            "ISO8859-1",
        ],
    };

    pub const UTF_8: Charset = Charset {
        name: "UTF-8",
        aliases: &["unicode-1-1-utf-8", "UTF8"],
    };

    pub const UTF_16BE: Charset = Charset {
        name: "UTF-16BE",
        aliases: &["UTF_16BE", "ISO-10646-UCS-2", "X-UTF-16BE", "UnicodeBigUnmarked"],
    };

    pub const UTF_16LE: Charset = Charset {
        name: "UTF-16LE",
        aliases: &["UTF_16LE", "X-UTF-16LE", "UnicodeLittleUnmarked"],
    };

    pub const UTF_16: Charset = Charset {
        name: "UTF-16",
        aliases: &["UTF_16", "utf16", "unicode", "UnicodeBig"],
    };

    /// Resolve a charset by canonical name or alias.
    pub fn for_name(name: &str) -> Result<Charset, CharsetError> {
        if !Self::is_legal_name(name) {
            return Err(CharsetError::IllegalName(name.to_string()));
        }

        if let Some(cs) = STANDARD.iter().find(|cs| cs.matches(name)) {
            tracing::trace!(requested = name, resolved = cs.name, "standard charset");
            return Ok(*cs);
        }

        let enc = Encoding::for_label_no_replacement(name.as_bytes())
            .filter(|enc| !folds_into_superset(name, *enc))
            .ok_or_else(|| CharsetError::Unsupported(name.to_string()))?;
        let cs = STANDARD
            .iter()
            .copied()
            .find(|cs| cs.name == enc.name())
            .unwrap_or(Charset { name: enc.name(), aliases: &[] });
        tracing::trace!(requested = name, resolved = cs.name, "whatwg charset");
        Ok(cs)
    }

    /// Whether `name` is syntactically acceptable as a charset name: a
    /// leading letter or digit followed by letters, digits or `- + . : _`.
    pub fn is_legal_name(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphanumeric() => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '.' | ':' | '_'))
    }

    /// Whether a charset with this name or alias is known.
    pub fn is_supported(name: &str) -> bool {
        Self::for_name(name).is_ok()
    }

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    /// Nearest `encoding_rs` encoding for decoding bytes in this charset.
    ///
    /// `US-ASCII` and `ISO-8859-1` map to `windows-1252`, their WHATWG
    /// superset. `UTF-16` decodes big-endian unless a BOM says otherwise.
    pub fn encoding(&self) -> &'static Encoding {
        if self.name == Self::UTF_16.name {
            return encoding_rs::UTF_16BE;
        }
        Encoding::for_label(self.name.as_bytes()).unwrap_or(encoding_rs::WINDOWS_1252)
    }

    fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name) || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

/// WHATWG maps some labels onto a wider encoding than the one they name
/// (`iso-8859-9` onto `windows-1254`, `gb2312` onto `GBK`, ...). For those
/// encodings only the labels naming the encoding itself are taken.
fn folds_into_superset(label: &str, enc: &'static Encoding) -> bool {
    let exact: &[&str] = if enc == encoding_rs::WINDOWS_1252 {
        &["windows-1252", "cp1252", "x-cp1252"]
    } else if enc == encoding_rs::WINDOWS_1254 {
        &["windows-1254", "cp1254", "x-cp1254"]
    } else if enc == encoding_rs::WINDOWS_874 {
        &["windows-874", "dos-874"]
    } else if enc == encoding_rs::GBK {
        &["gbk", "x-gbk"]
    } else if enc == encoding_rs::UTF_16LE || enc == encoding_rs::UTF_16BE {
        // the standard table already holds every UTF-16 alias we accept
        &[]
    } else {
        return false;
    };
    !exact.iter().any(|l| l.eq_ignore_ascii_case(label))
}

impl PartialEq for Charset {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Charset {}

impl Hash for Charset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl std::str::FromStr for Charset {
    type Err = CharsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Charset::for_name(s)
    }
}

impl Serialize for Charset {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name)
    }
}

impl<'de> Deserialize<'de> for Charset {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CharsetVisitor;

        impl<'de> Visitor<'de> for CharsetVisitor {
            type Value = Charset;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a charset name")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Charset::for_name(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(CharsetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_names_resolve_to_themselves() {
        for cs in STANDARD {
            assert_eq!(Charset::for_name(cs.name()).unwrap(), *cs);
        }
    }

    #[test]
    fn test_aliases_canonicalize() {
        assert_eq!(Charset::for_name("utf8").unwrap().name(), "UTF-8");
        assert_eq!(Charset::for_name("latin1").unwrap().name(), "ISO-8859-1");
        assert_eq!(Charset::for_name("ascii").unwrap().name(), "US-ASCII");
        assert_eq!(Charset::for_name("unicodebigunmarked").unwrap().name(), "UTF-16BE");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(Charset::for_name("iso-8859-1").unwrap(), Charset::ISO_8859_1);
        assert_eq!(Charset::for_name("Utf-16le").unwrap(), Charset::UTF_16LE);
    }

    #[test]
    fn test_whatwg_labels() {
        let sjis = Charset::for_name("shift_jis").unwrap();
        assert_eq!(sjis.name(), "Shift_JIS");
        assert_eq!(sjis.encoding(), encoding_rs::SHIFT_JIS);
        assert!(sjis.aliases().is_empty());

        // the WHATWG label table also knows utf-8 aliases; they fold into the standard entry
        assert_eq!(Charset::for_name("x-unicode20utf8").unwrap(), Charset::UTF_8);
    }

    #[test]
    fn test_superset_labels_are_unsupported() {
        for name in [
            "ISO-8859-9",
            "latin5",
            "ISO-8859-11",
            "TIS-620",
            "GB2312",
            "chinese",
            "iso88591",
            "ucs-2",
            "csunicode",
            "unicodefffe",
        ] {
            assert!(
                matches!(Charset::for_name(name), Err(CharsetError::Unsupported(_))),
                "{name:?} should be unsupported"
            );
        }
    }

    #[test]
    fn test_superset_encodings_by_own_name() {
        assert_eq!(Charset::for_name("windows-1254").unwrap().name(), "windows-1254");
        assert_eq!(Charset::for_name("CP1252").unwrap().name(), "windows-1252");
        assert_eq!(Charset::for_name("windows-874").unwrap().name(), "windows-874");
        assert_eq!(Charset::for_name("gbk").unwrap().name(), "GBK");
        // still distinct from the narrower standard charset
        assert_ne!(Charset::for_name("cp1252").unwrap(), Charset::ISO_8859_1);
    }

    #[test]
    fn test_illegal_names() {
        for name in ["", "-utf8", "utf 8", "utf8!", "\u{e9}"] {
            assert!(
                matches!(Charset::for_name(name), Err(CharsetError::IllegalName(_))),
                "{name:?} should be illegal"
            );
        }
    }

    #[test]
    fn test_unsupported_names() {
        assert!(matches!(Charset::for_name("no-such-charset"), Err(CharsetError::Unsupported(_))));
        // legal and known to WHATWG, but only as the replacement encoding
        assert!(matches!(Charset::for_name("iso-2022-kr"), Err(CharsetError::Unsupported(_))));
        assert!(!Charset::is_supported("no-such-charset"));
    }

    #[test]
    fn test_encoding_mapping() {
        assert_eq!(Charset::UTF_8.encoding(), encoding_rs::UTF_8);
        assert_eq!(Charset::UTF_16.encoding(), encoding_rs::UTF_16BE);
        assert_eq!(Charset::UTF_16LE.encoding(), encoding_rs::UTF_16LE);
        assert_eq!(Charset::ISO_8859_1.encoding(), encoding_rs::WINDOWS_1252);
        assert_eq!(Charset::US_ASCII.encoding(), encoding_rs::WINDOWS_1252);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Charset::UTF_16BE).unwrap();
        assert_eq!(json, "\"UTF-16BE\"");

        let cs: Charset = serde_json::from_str("\"latin1\"").unwrap();
        assert_eq!(cs, Charset::ISO_8859_1);

        assert!(serde_json::from_str::<Charset>("\"bogus\"").is_err());
        assert!(serde_json::from_str::<Charset>("42").is_err());
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Charset::US_ASCII.to_string(), "US-ASCII");
        assert_eq!("utf8".parse::<Charset>().unwrap(), Charset::UTF_8);
    }
}

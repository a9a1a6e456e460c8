//! Catalog keys: pack, category and intensity.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SoundError;

macro_rules! key_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $(
                #[doc = concat!("`", $text, "`")]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in catalog order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Lowercase name used in paths and on the command line.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SoundError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let lower = s.trim().to_ascii_lowercase();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == lower)
                    .ok_or_else(|| {
                        let expected: Vec<&str> = $name::ALL.iter().map(|v| v.as_str()).collect();
                        SoundError::invalid_key(s, format!("expected one of: {}", expected.join(", ")))
                    })
            }
        }
    };
}

key_enum! {
    /// Stylistic sound pack.
    Pack {
        Meme => "meme",
        Chill => "chill",
        Retro => "retro",
    }
}

key_enum! {
    /// Notification category.
    Category {
        Error => "error",
        Warning => "warning",
        Success => "success",
    }
}

key_enum! {
    /// How prominent the sound is.
    Intensity {
        Light => "light",
        Medium => "medium",
        Heavy => "heavy",
    }
}

/// Unique identifier of one catalog sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SoundKey {
    /// Sound pack.
    pub pack: Pack,
    /// Notification category.
    pub category: Category,
    /// Intensity level.
    pub intensity: Intensity,
}

impl SoundKey {
    /// Creates a key.
    pub const fn new(pack: Pack, category: Category, intensity: Intensity) -> Self {
        Self {
            pack,
            category,
            intensity,
        }
    }

    /// Every key in the cross product of packs, categories and intensities.
    pub fn all() -> impl Iterator<Item = SoundKey> {
        Pack::ALL.iter().flat_map(|&pack| {
            Category::ALL.iter().flat_map(move |&category| {
                Intensity::ALL
                    .iter()
                    .map(move |&intensity| SoundKey::new(pack, category, intensity))
            })
        })
    }

    /// Path of this sound relative to the output root:
    /// `<pack>/<category>/<intensity>.wav`.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.pack.as_str())
            .join(self.category.as_str())
            .join(format!("{}.wav", self.intensity.as_str()))
    }
}

impl fmt::Display for SoundKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.pack, self.category, self.intensity)
    }
}

impl FromStr for SoundKey {
    type Err = SoundError;

    /// Parses `pack/category/intensity`, with an optional `.wav` suffix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches(".wav");
        let parts: Vec<&str> = trimmed.split(['/', '\\']).collect();
        match parts.as_slice() {
            [pack, category, intensity] => Ok(SoundKey::new(
                pack.parse()?,
                category.parse()?,
                intensity.parse()?,
            )),
            _ => Err(SoundError::invalid_key(
                s,
                "expected <pack>/<category>/<intensity>",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Meme".parse::<Pack>().unwrap(), Pack::Meme);
        assert_eq!(" WARNING ".parse::<Category>().unwrap(), Category::Warning);
        assert_eq!("heavy".parse::<Intensity>().unwrap(), Intensity::Heavy);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "loud".parse::<Intensity>().unwrap_err();
        assert!(err.to_string().contains("light, medium, heavy"));
    }

    #[test]
    fn test_sound_key_roundtrip_display() {
        let key = SoundKey::new(Pack::Chill, Category::Success, Intensity::Medium);
        assert_eq!(key.to_string(), "chill/success/medium");
        assert_eq!("chill/success/medium".parse::<SoundKey>().unwrap(), key);
        assert_eq!("chill/success/medium.wav".parse::<SoundKey>().unwrap(), key);
    }

    #[test]
    fn test_sound_key_rejects_wrong_shape() {
        assert!("chill/success".parse::<SoundKey>().is_err());
        assert!("chill/success/medium/extra".parse::<SoundKey>().is_err());
        assert!("jazz/success/medium".parse::<SoundKey>().is_err());
    }

    #[test]
    fn test_relative_path() {
        let key = SoundKey::new(Pack::Retro, Category::Error, Intensity::Light);
        assert_eq!(
            key.relative_path(),
            PathBuf::from("retro").join("error").join("light.wav")
        );
    }

    #[test]
    fn test_all_keys_unique() {
        let keys: Vec<SoundKey> = SoundKey::all().collect();
        assert_eq!(keys.len(), 27);
        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), 27);
    }
}

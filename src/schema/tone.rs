use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The style profile that selects which template pools are used.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Punchy,
    Professional,
    Playful,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Punchy, Tone::Professional, Tone::Playful];

    /// Returns the lowercase name used on the command line and in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Punchy => "punchy",
            Self::Professional => "professional",
            Self::Playful => "playful",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|tone| tone.name() == s)
            .ok_or_else(|| format!("unknown tone '{}': expected punchy, professional or playful", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_names() {
        assert_eq!(Tone::Punchy.name(), "punchy");
        assert_eq!(Tone::Professional.name(), "professional");
        assert_eq!(Tone::Playful.name(), "playful");
    }

    #[test]
    fn tone_default_is_punchy() {
        assert_eq!(Tone::default(), Tone::Punchy);
    }

    #[test]
    fn tone_parse() {
        assert_eq!("playful".parse::<Tone>().unwrap(), Tone::Playful);
        assert!("sarcastic".parse::<Tone>().is_err());
        assert!("Punchy".parse::<Tone>().is_err());
    }

    #[test]
    fn tone_ron_uses_lowercase_name() {
        let serialized = ron::to_string(&Tone::Professional).unwrap();
        assert_eq!(serialized, "professional");
        let tone: Tone = ron::from_str("playful").unwrap();
        assert_eq!(tone, Tone::Playful);
    }
}

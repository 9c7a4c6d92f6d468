//! Option sets for a plant's room, light and water amount.
//!
//! Front ends only offer the listed options, and parsing from text only accepts them. Saved
//! data is not re-validated though: a value outside the set is kept as `Other` and written back
//! exactly as it was read.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// The room a plant lives in.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Room {
    #[default]
    Bedroom,
    Bathroom,
    Kitchen,
    #[serde(rename = "Living Room")]
    #[strum(serialize = "Living Room")]
    LivingRoom,
    Balcony,
    /// A saved value that isn't one of the options above
    #[serde(untagged)]
    #[strum(disabled)]
    Other(String),
}

impl Room {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bedroom => "Bedroom",
            Self::Bathroom => "Bathroom",
            Self::Kitchen => "Kitchen",
            Self::LivingRoom => "Living Room",
            Self::Balcony => "Balcony",
            Self::Other(other) => other,
        }
    }
}

/// How much sunlight a plant gets.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Light {
    #[default]
    #[serde(rename = "Full Sun")]
    #[strum(serialize = "Full Sun")]
    FullSun,
    #[serde(rename = "Partial Sun")]
    #[strum(serialize = "Partial Sun")]
    PartialSun,
    #[serde(rename = "Low Sun")]
    #[strum(serialize = "Low Sun")]
    LowSun,
    /// A saved value that isn't one of the options above
    #[serde(untagged)]
    #[strum(disabled)]
    Other(String),
}

impl Light {
    pub fn as_str(&self) -> &str {
        match self {
            Self::FullSun => "Full Sun",
            Self::PartialSun => "Partial Sun",
            Self::LowSun => "Low Sun",
            Self::Other(other) => other,
        }
    }
}

/// How much water a plant is given each time it is watered.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum WaterAmount {
    #[default]
    #[serde(rename = "20-50 ml")]
    #[strum(serialize = "20-50 ml")]
    Ml20To50,
    #[serde(rename = "50-100 ml")]
    #[strum(serialize = "50-100 ml")]
    Ml50To100,
    #[serde(rename = "100-200 ml")]
    #[strum(serialize = "100-200 ml")]
    Ml100To200,
    #[serde(rename = "200-300 ml")]
    #[strum(serialize = "200-300 ml")]
    Ml200To300,
    /// A saved value that isn't one of the options above
    #[serde(untagged)]
    #[strum(disabled)]
    Other(String),
}

impl WaterAmount {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ml20To50 => "20-50 ml",
            Self::Ml50To100 => "50-100 ml",
            Self::Ml100To200 => "100-200 ml",
            Self::Ml200To300 => "200-300 ml",
            Self::Other(other) => other,
        }
    }
}

impl Display for Room {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for Light {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for WaterAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    /// The display string doubles as the persisted string, so the two must never drift apart.
    fn assert_display_matches_serde<T>()
    where
        T: IntoEnumIterator + Serialize + for<'de> Deserialize<'de> + Display + PartialEq + fmt::Debug,
    {
        for option in T::iter() {
            let json = serde_json::to_string(&option).unwrap();
            assert_eq!(json, format!("\"{option}\""));
            assert_eq!(serde_json::from_str::<T>(&json).unwrap(), option);
        }
    }

    #[test]
    fn test_display_matches_serde() {
        assert_display_matches_serde::<Room>();
        assert_display_matches_serde::<Light>();
        assert_display_matches_serde::<WaterAmount>();
    }

    #[test]
    fn test_option_order() {
        let rooms: Vec<String> = Room::iter().map(|r| r.to_string()).collect();
        assert_eq!(
            rooms,
            ["Bedroom", "Bathroom", "Kitchen", "Living Room", "Balcony"]
        );

        let lights: Vec<String> = Light::iter().map(|l| l.to_string()).collect();
        assert_eq!(lights, ["Full Sun", "Partial Sun", "Low Sun"]);

        let amounts: Vec<String> = WaterAmount::iter().map(|w| w.to_string()).collect();
        assert_eq!(amounts, ["20-50 ml", "50-100 ml", "100-200 ml", "200-300 ml"]);
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!(Room::from_str("living room").unwrap(), Room::LivingRoom);
        assert_eq!(Light::from_str("LOW SUN").unwrap(), Light::LowSun);
        assert_eq!(
            WaterAmount::from_str("100-200 ML").unwrap(),
            WaterAmount::Ml100To200
        );
    }

    #[test]
    fn test_parse_rejects_unlisted() {
        assert!(Room::from_str("Garage").is_err());
        assert!(Light::from_str("Moonlight").is_err());
        assert!(WaterAmount::from_str("1 l").is_err());
    }

    #[test]
    fn test_unlisted_value_kept() {
        let light: Light = serde_json::from_str("\"Moonlight\"").unwrap();

        assert_eq!(light, Light::Other("Moonlight".into()));
        assert_eq!(light.to_string(), "Moonlight");
        assert_eq!(serde_json::to_string(&light).unwrap(), "\"Moonlight\"");
    }

    #[test]
    fn test_listed_value_not_other() {
        let room: Room = serde_json::from_str("\"Living Room\"").unwrap();

        assert_eq!(room, Room::LivingRoom);
    }
}

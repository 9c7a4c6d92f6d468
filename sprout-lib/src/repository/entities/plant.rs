use std::str::FromStr;

use derive_more::{Deref, Display, From};
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repository::entities::{Light, Room, WaterAmount};

/// Identifies a single [`Plant`]. Assigned once when the plant is created and never reused.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    From,
    Deref,
)]
#[serde(transparent)]
pub struct PlantId(Uuid);

impl PlantId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl FromStr for PlantId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A tracked house plant and whether it has been watered.
///
/// Serialized field names are camelCase (`waterAmount`, `isWatered`) to stay compatible with
/// lists saved by earlier versions of the app. `isWatered` may be missing from older data, in
/// which case it is read as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, CopyGetters)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    #[getset(get_copy = "pub")]
    id: PlantId,
    /// A human friendly display name
    #[getset(get = "pub")]
    name: String,
    #[getset(get = "pub")]
    room: Room,
    #[getset(get = "pub")]
    light: Light,
    #[getset(get = "pub")]
    water_amount: WaterAmount,
    #[serde(default)]
    #[getset(get_copy = "pub")]
    is_watered: bool,
}

impl Plant {
    pub fn new(id: PlantId, fields: PlantFields) -> Self {
        let PlantFields {
            name,
            room,
            light,
            water_amount,
        } = fields;

        Self {
            id,
            name,
            room,
            light,
            water_amount,
            is_watered: false,
        }
    }

    /// The user editable fields of this plant.
    pub fn fields(&self) -> PlantFields {
        PlantFields {
            name: self.name.clone(),
            room: self.room.clone(),
            light: self.light.clone(),
            water_amount: self.water_amount.clone(),
        }
    }

    /// Overwrite every editable field. The id and watered state are left alone.
    pub(crate) fn apply(&mut self, fields: PlantFields) {
        self.name = fields.name;
        self.room = fields.room;
        self.light = fields.light;
        self.water_amount = fields.water_amount;
    }

    /// Flip the watered state, returning the new value.
    pub(crate) fn toggle_watered(&mut self) -> bool {
        self.is_watered = !self.is_watered;
        self.is_watered
    }
}

/// The fields a user fills in when creating or editing a plant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantFields {
    pub name: String,
    pub room: Room,
    pub light: Light,
    pub water_amount: WaterAmount,
}

impl Default for PlantFields {
    /// The values a new reminder starts out with.
    fn default() -> Self {
        Self {
            name: "Pothos".to_string(),
            room: Room::default(),
            light: Light::default(),
            water_amount: WaterAmount::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    fn monstera() -> PlantFields {
        PlantFields {
            name: "Monstera".into(),
            room: Room::LivingRoom,
            light: Light::PartialSun,
            water_amount: WaterAmount::Ml200To300,
        }
    }

    #[test]
    fn test_new_is_unwatered() {
        let plant = Plant::new(PlantId::generate(), monstera());

        assert!(!plant.is_watered());
        assert_eq!(plant.name(), "Monstera");
        assert_eq!(plant.fields(), monstera());
    }

    #[test]
    fn test_default_fields() {
        let fields = PlantFields::default();

        assert_eq!(fields.name, "Pothos");
        assert_eq!(fields.room, Room::Bedroom);
        assert_eq!(fields.light, Light::FullSun);
        assert_eq!(fields.water_amount, WaterAmount::Ml20To50);
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut plant = Plant::new(PlantId::generate(), PlantFields::default());
        let id = plant.id();
        plant.toggle_watered();

        plant.apply(monstera());

        assert_eq!(plant.id(), id);
        assert!(plant.is_watered());
        assert_eq!(plant.fields(), monstera());
    }

    #[test]
    fn test_toggle_watered() {
        let mut plant = Plant::new(PlantId::generate(), PlantFields::default());

        assert!(plant.toggle_watered());
        assert!(!plant.toggle_watered());
        assert!(!plant.is_watered());
    }

    #[test]
    fn test_serialized_shape() {
        let plant = Plant::new(PlantId::generate(), monstera());

        let value = serde_json::to_value(&plant).unwrap();

        assert_eq!(
            value,
            json!({
                "id": plant.id().to_string(),
                "name": "Monstera",
                "room": "Living Room",
                "light": "Partial Sun",
                "waterAmount": "200-300 ml",
                "isWatered": false,
            })
        );
    }

    #[test]
    fn test_missing_is_watered_defaults_to_false() {
        let plant: Plant = serde_json::from_value(json!({
            "id": "6F9619FF-8B86-D011-B42D-00CF4FC964FF",
            "name": "Fern",
            "room": "Bathroom",
            "light": "Low Sun",
            "waterAmount": "50-100 ml",
        }))
        .unwrap();

        assert!(!plant.is_watered());
        assert_eq!(plant.room(), &Room::Bathroom);
        assert_eq!(
            plant.id(),
            "6f9619ff-8b86-d011-b42d-00cf4fc964ff"
                .parse::<PlantId>()
                .unwrap()
        );
    }

    #[test]
    fn test_unlisted_options_round_trip() {
        let value = json!({
            "id": "6f9619ff-8b86-d011-b42d-00cf4fc964ff",
            "name": "Cactus",
            "room": "Garage",
            "light": "Grow Lamp",
            "waterAmount": "1 l",
            "isWatered": true,
        });

        let plant: Plant = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(plant.room(), &Room::Other("Garage".into()));
        assert_eq!(plant.light(), &Light::Other("Grow Lamp".into()));
        assert_eq!(plant.water_amount(), &WaterAmount::Other("1 l".into()));
        assert_eq!(serde_json::to_value(&plant).unwrap(), value);
    }

    #[test]
    fn test_missing_name_rejected() {
        let result = serde_json::from_value::<Plant>(json!({
            "id": "6F9619FF-8B86-D011-B42D-00CF4FC964FF",
            "room": "Bathroom",
            "light": "Low Sun",
            "waterAmount": "50-100 ml",
        }));

        assert!(result.is_err());
    }
}

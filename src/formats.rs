use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// Number of naming conventions, and therefore the arity of every bone row.
pub const SLOT_COUNT: usize = 12;

/// A bone naming convention. The discriminant is the column of the convention
/// in every [`BoneRow`](crate::mapping::BoneRow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    #[serde(rename = "mmd_english")]
    MmdEnglish = 0,
    #[serde(rename = "xna_lara")]
    XnaLara = 1,
    #[serde(rename = "daz_poser")]
    DazPoser = 2,
    #[serde(rename = "blender_rigify")]
    BlenderRigify = 3,
    #[serde(rename = "sims_2")]
    Sims2 = 4,
    #[serde(rename = "motion_builder")]
    MotionBuilder = 5,
    #[serde(rename = "3ds_max")]
    ThreeDsMax = 6,
    #[serde(rename = "type_x")]
    TypeX = 7,
    #[serde(rename = "bepu")]
    Bepu = 8,
    #[serde(rename = "mmd_japanese")]
    MmdJapanese = 9,
    #[serde(rename = "mmd_japaneseLR")]
    MmdJapaneseLr = 10,
    #[serde(rename = "unknown")]
    Unknown = 11,
}

impl Format {
    pub const ALL: [Format; SLOT_COUNT] = [
        Format::MmdEnglish,
        Format::XnaLara,
        Format::DazPoser,
        Format::BlenderRigify,
        Format::Sims2,
        Format::MotionBuilder,
        Format::ThreeDsMax,
        Format::TypeX,
        Format::Bepu,
        Format::MmdJapanese,
        Format::MmdJapaneseLr,
        Format::Unknown,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Format::MmdEnglish => "mmd_english",
            Format::XnaLara => "xna_lara",
            Format::DazPoser => "daz_poser",
            Format::BlenderRigify => "blender_rigify",
            Format::Sims2 => "sims_2",
            Format::MotionBuilder => "motion_builder",
            Format::ThreeDsMax => "3ds_max",
            Format::TypeX => "type_x",
            Format::Bepu => "bepu",
            Format::MmdJapanese => "mmd_japanese",
            Format::MmdJapaneseLr => "mmd_japaneseLR",
            Format::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Format::MmdEnglish => "MMD English",
            Format::XnaLara => "XNALara",
            Format::DazPoser => "DAZ/Poser",
            Format::BlenderRigify => "Rigify",
            Format::Sims2 => "Sims 2",
            Format::MotionBuilder => "Motion Builder",
            Format::ThreeDsMax => "3ds Max",
            Format::TypeX => "Type X",
            Format::Bepu => "BEPu",
            Format::MmdJapanese => "MMD Japanese",
            Format::MmdJapaneseLr => "MMD Japanese L/R",
            Format::Unknown => "Unknown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Format::MmdEnglish => "MikuMikuDance English bone names",
            Format::XnaLara => "XNALara bone names",
            Format::DazPoser => "DAZ Studio and Poser bone names",
            Format::BlenderRigify => "Blender Rigify bone names",
            Format::Sims2 => "The Sims 2 bone names",
            Format::MotionBuilder => "Motion Builder bone names",
            Format::ThreeDsMax => "3ds Max bone names",
            Format::TypeX => "Type X bone names",
            Format::Bepu => "BEPu bone names",
            Format::MmdJapanese => "MikuMikuDance Japanese bone names",
            Format::MmdJapaneseLr => "MikuMikuDance Japanese bone names with L/R suffixes",
            Format::Unknown => "Unknown bone format",
        }
    }

    pub fn slot(&self) -> usize {
        *self as usize
    }
}

/// Looks up a convention by its exact external key.
pub fn resolve(key: &str) -> Result<Format, FormatError> {
    Format::ALL
        .into_iter()
        .find(|format| format.key() == key)
        .ok_or_else(|| FormatError::UnknownFormat(key.to_string()))
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        resolve(value)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slots_are_contiguous_and_match_registry_order() {
        for (index, format) in Format::ALL.iter().enumerate() {
            assert_eq!(format.slot(), index);
        }
    }

    #[test]
    fn keys_are_unique_and_resolve_back() {
        let keys = Format::ALL.iter().map(Format::key).collect::<HashSet<_>>();
        assert_eq!(keys.len(), SLOT_COUNT);
        for format in Format::ALL {
            assert_eq!(resolve(format.key()), Ok(format));
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert_eq!(
            resolve("mmd_klingon"),
            Err(FormatError::UnknownFormat("mmd_klingon".to_string()))
        );
        assert!("".parse::<Format>().is_err());
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert_eq!(resolve("mmd_japaneseLR"), Ok(Format::MmdJapaneseLr));
        assert!(resolve("mmd_japaneselr").is_err());
        assert_eq!(
            resolve(" bepu "),
            Err(FormatError::UnknownFormat(" bepu ".to_string()))
        );
    }

    #[test]
    fn serde_uses_external_keys() {
        let value = serde_json::to_value(Format::ThreeDsMax).expect("serialize");
        assert_eq!(value, serde_json::json!("3ds_max"));
        let parsed: Format = serde_json::from_value(serde_json::json!("blender_rigify"))
            .expect("deserialize");
        assert_eq!(parsed, Format::BlenderRigify);
    }
}

//! Calculator models.
//!
//! Each model has a file magic, a product id, a display language, a feature
//! set and its own token table. Token tables are built together, once, on
//! first use and shared read-only afterwards.

pub mod version;

use std::fmt;
use std::ops::BitOr;

use lazy_static::lazy_static;
use log::debug;

use crate::tokens::TokenTable;

pub use version::{ModelId, OsVersion};

/// A set of model features.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Features(u8);

impl Features {
    pub const NONE: Features = Features(0);
    /// Complex number support
    pub const COMPLEX: Features = Features(1 << 0);
    /// A flash chip, and with it archiving and versioned entries
    pub const FLASH: Features = Features(1 << 1);
    pub const APPS: Features = Features(1 << 2);
    /// Real-time clock
    pub const CLOCK: Features = Features(1 << 3);
    pub const COLOR: Features = Features(1 << 4);
    pub const EZ80: Features = Features(1 << 5);
    /// Exact fractions and radicals
    pub const EXACT_MATH: Features = Features(1 << 6);
    pub const PYTHON: Features = Features(1 << 7);

    pub const fn union(self, other: Features) -> Features {
        Features(self.0 | other.0)
    }

    pub const fn without(self, other: Features) -> Features {
        Features(self.0 & !other.0)
    }

    pub const fn contains(self, other: Features) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Features {
    type Output = Features;

    fn bitor(self, rhs: Features) -> Features {
        self.union(rhs)
    }
}

const FEATURES_82: Features = Features::NONE;
const FEATURES_83: Features = FEATURES_82.union(Features::COMPLEX);
const FEATURES_82A: Features = FEATURES_83.union(Features::FLASH);
const FEATURES_83P: Features = FEATURES_82A.union(Features::APPS);
const FEATURES_84P: Features = FEATURES_83P.union(Features::CLOCK);
const FEATURES_84PCSE: Features = FEATURES_84P.union(Features::COLOR);
const FEATURES_84PCE: Features = FEATURES_84PCSE.union(Features::EZ80);
const FEATURES_83PCE: Features = FEATURES_84PCE.union(Features::EXACT_MATH);
const FEATURES_83PCEEP: Features = FEATURES_83PCE.union(Features::PYTHON);
const FEATURES_84PCEPY: Features = FEATURES_84PCE.union(Features::PYTHON);
const FEATURES_82AEP: Features = FEATURES_83PCEEP.without(Features::APPS);

/// A calculator model.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Model {
    pub id: ModelId,
    pub features: Features,
    /// Signature at the start of var files for this model.
    pub magic: &'static str,
    /// Product id byte in the var file header; zero matches any model.
    pub product_id: u8,
    /// Language of token display names.
    pub lang: &'static str,
}

impl Model {
    const fn new(
        id: ModelId,
        features: Features,
        magic: &'static str,
        product_id: u8,
        lang: &'static str,
    ) -> Self {
        Self {
            id,
            features,
            magic,
            product_id,
            lang,
        }
    }

    /// Returns the model's display name.
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Returns true if the model has every given feature.
    pub fn has(&self, features: Features) -> bool {
        self.features.contains(features)
    }

    /// Returns an OS version of this model; see [`OsVersion::parse`].
    pub fn os(&self, version: &str) -> Option<OsVersion> {
        OsVersion::parse(self.id, version)
    }

    /// Past the last OS of this model.
    pub fn latest_os(&self) -> OsVersion {
        OsVersion::latest(self.id)
    }

    /// Returns this model's token table.
    pub fn tokens(&self) -> &'static TokenTable {
        &TOKEN_TABLES[self.id as usize]
    }

    /// Looks up a model by id.
    pub fn get(id: ModelId) -> &'static Model {
        MODELS[id as usize]
    }

    /// Returns every model whose var files start with the given magic.
    pub fn with_magic(magic: &str) -> impl Iterator<Item = &'static Model> + '_ {
        MODELS.iter().copied().filter(move |model| model.magic == magic)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub static TI_82: Model = Model::new(ModelId::Ti82, FEATURES_82, "**TI82**", 0x00, "en");
pub static TI_83: Model = Model::new(ModelId::Ti83, FEATURES_83, "**TI83**", 0x00, "en");
pub static TI_82ST: Model = Model::new(ModelId::Ti82St, FEATURES_83, "**TI83**", 0x00, "en");
pub static TI_82ST_FR: Model = Model::new(ModelId::Ti82StFr, FEATURES_83, "**TI83**", 0x00, "fr");
pub static TI_76_FR: Model = Model::new(ModelId::Ti76Fr, FEATURES_83, "**TI83**", 0x00, "fr");
pub static TI_83P: Model = Model::new(ModelId::Ti83P, FEATURES_83P, "**TI83F*", 0x04, "en");
pub static TI_83PSE: Model = Model::new(ModelId::Ti83PSe, FEATURES_83P, "**TI83F*", 0x04, "en");
pub static TI_83P_FR: Model = Model::new(ModelId::Ti83PFr, FEATURES_83P, "**TI83F*", 0x04, "fr");
pub static TI_82P: Model = Model::new(ModelId::Ti82P, FEATURES_83P, "**TI83F*", 0x04, "fr");
pub static TI_84P: Model = Model::new(ModelId::Ti84P, FEATURES_84P, "**TI83F*", 0x0A, "en");
pub static TI_84PSE: Model = Model::new(ModelId::Ti84PSe, FEATURES_84P, "**TI83F*", 0x0A, "en");
pub static TI_83P_FR_USB: Model =
    Model::new(ModelId::Ti83PFrUsb, FEATURES_84P, "**TI83F*", 0x0A, "fr");
pub static TI_84P_FR: Model = Model::new(ModelId::Ti84PFr, FEATURES_84P, "**TI83F*", 0x0A, "fr");
pub static TI_84PPSE: Model = Model::new(ModelId::Ti84PPse, FEATURES_84P, "**TI83F*", 0x0A, "en");
pub static TI_82A: Model = Model::new(ModelId::Ti82A, FEATURES_82A, "**TI83F*", 0x0B, "fr");
pub static TI_84PT: Model = Model::new(ModelId::Ti84PT, FEATURES_84P, "**TI83F*", 0x1B, "en");
pub static TI_84PCSE: Model =
    Model::new(ModelId::Ti84PCse, FEATURES_84PCSE, "**TI83F*", 0x0F, "en");
pub static TI_84PCE: Model = Model::new(ModelId::Ti84PCe, FEATURES_84PCE, "**TI83F*", 0x13, "en");
pub static TI_84PCET: Model =
    Model::new(ModelId::Ti84PCeT, FEATURES_84PCE, "**TI83F*", 0x13, "en");
pub static TI_83PCE: Model = Model::new(ModelId::Ti83PCe, FEATURES_83PCE, "**TI83F*", 0x13, "fr");
pub static TI_83PCEEP: Model =
    Model::new(ModelId::Ti83PCeEp, FEATURES_83PCEEP, "**TI83F*", 0x13, "fr");
pub static TI_84PCEPY: Model =
    Model::new(ModelId::Ti84PCePy, FEATURES_84PCEPY, "**TI83F*", 0x13, "en");
pub static TI_84PCETPE: Model =
    Model::new(ModelId::Ti84PCeTpe, FEATURES_84PCEPY, "**TI83F*", 0x13, "en");
pub static TI_82AEP: Model = Model::new(ModelId::Ti82Aep, FEATURES_82AEP, "**TI83F*", 0x00, "fr");

/// Every model, indexed by [`ModelId`].
pub static MODELS: [&Model; 24] = [
    &TI_82,
    &TI_83,
    &TI_82ST,
    &TI_82ST_FR,
    &TI_76_FR,
    &TI_83P,
    &TI_83PSE,
    &TI_83P_FR,
    &TI_82P,
    &TI_84P,
    &TI_84PSE,
    &TI_83P_FR_USB,
    &TI_84P_FR,
    &TI_84PPSE,
    &TI_82A,
    &TI_84PT,
    &TI_84PCSE,
    &TI_84PCE,
    &TI_84PCET,
    &TI_83PCE,
    &TI_83PCEEP,
    &TI_84PCEPY,
    &TI_84PCETPE,
    &TI_82AEP,
];

lazy_static! {
    static ref TOKEN_TABLES: Vec<TokenTable> = {
        let tables: Vec<TokenTable> = MODELS.iter().map(|model| TokenTable::for_model(model)).collect();
        debug!("built token tables for {} models", tables.len());
        tables
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_models_indexed_by_id() {
        for (index, model) in MODELS.iter().enumerate() {
            assert_eq!(model.id as usize, index);
            assert_eq!(Model::get(model.id), *model);
        }
    }

    #[test]
    fn test_feature_ladder() {
        assert!(!TI_83.has(Features::FLASH));
        assert!(TI_83P.has(Features::FLASH | Features::APPS));
        assert!(TI_84P.has(Features::CLOCK));
        assert!(!TI_84P.has(Features::COLOR));
        assert!(TI_84PCE.has(Features::COLOR | Features::EZ80));
        assert!(TI_83PCEEP.has(Features::PYTHON | Features::EXACT_MATH));
        assert!(!TI_82AEP.has(Features::APPS));
        assert!(TI_82AEP.has(Features::PYTHON));
    }

    #[test]
    fn test_magic_lookup() {
        let flash: Vec<_> = Model::with_magic("**TI83F*").map(|m| m.id).collect();
        assert_eq!(flash.first(), Some(&ModelId::Ti83P));
        assert_eq!(flash.len(), 19);
        assert_eq!(Model::with_magic("**TI82**").count(), 1);
    }

    #[test]
    fn test_os_versions() {
        assert_eq!(
            TI_84P.os("2.55"),
            Some(OsVersion::new(ModelId::Ti84P, 2, 55, 0))
        );
        assert!(TI_83.latest_os() < TI_84P.os("").unwrap());
    }
}

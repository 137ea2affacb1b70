//! OS versions, ordered across the whole model line.

use std::fmt;

/// Every supported model, in release order.
///
/// The order is what makes [`OsVersion`]s from different models comparable:
/// any OS of a later model is newer than every OS of an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ModelId {
    Ti82 = 0,
    Ti83,
    Ti82St,
    Ti82StFr,
    Ti76Fr,
    Ti83P,
    Ti83PSe,
    Ti83PFr,
    Ti82P,
    Ti84P,
    Ti84PSe,
    Ti83PFrUsb,
    Ti84PFr,
    Ti84PPse,
    Ti82A,
    Ti84PT,
    Ti84PCse,
    Ti84PCe,
    Ti84PCeT,
    Ti83PCe,
    Ti83PCeEp,
    Ti84PCePy,
    Ti84PCeTpe,
    Ti82Aep,
}

impl ModelId {
    /// All models in order.
    pub const ALL: [ModelId; 24] = [
        ModelId::Ti82,
        ModelId::Ti83,
        ModelId::Ti82St,
        ModelId::Ti82StFr,
        ModelId::Ti76Fr,
        ModelId::Ti83P,
        ModelId::Ti83PSe,
        ModelId::Ti83PFr,
        ModelId::Ti82P,
        ModelId::Ti84P,
        ModelId::Ti84PSe,
        ModelId::Ti83PFrUsb,
        ModelId::Ti84PFr,
        ModelId::Ti84PPse,
        ModelId::Ti82A,
        ModelId::Ti84PT,
        ModelId::Ti84PCse,
        ModelId::Ti84PCe,
        ModelId::Ti84PCeT,
        ModelId::Ti83PCe,
        ModelId::Ti83PCeEp,
        ModelId::Ti84PCePy,
        ModelId::Ti84PCeTpe,
        ModelId::Ti82Aep,
    ];

    /// Returns the model's display name.
    pub fn name(self) -> &'static str {
        match self {
            ModelId::Ti82 => "TI-82",
            ModelId::Ti83 => "TI-83",
            ModelId::Ti82St => "TI-82ST",
            ModelId::Ti82StFr => "TI-82ST.fr",
            ModelId::Ti76Fr => "TI-76.fr",
            ModelId::Ti83P => "TI-83+",
            ModelId::Ti83PSe => "TI-83+SE",
            ModelId::Ti83PFr => "TI-83+.fr",
            ModelId::Ti82P => "TI-82+",
            ModelId::Ti84P => "TI-84+",
            ModelId::Ti84PSe => "TI-84+SE",
            ModelId::Ti83PFrUsb => "TI-83+.fr:USB",
            ModelId::Ti84PFr => "TI-84+.fr",
            ModelId::Ti84PPse => "TI-84+PSE",
            ModelId::Ti82A => "TI-82A",
            ModelId::Ti84PT => "TI-84+T",
            ModelId::Ti84PCse => "TI-84+CSE",
            ModelId::Ti84PCe => "TI-84+CE",
            ModelId::Ti84PCeT => "TI-84+CET",
            ModelId::Ti83PCe => "TI-83PCE",
            ModelId::Ti83PCeEp => "TI-83PCEEP",
            ModelId::Ti84PCePy => "TI-84+CEPY",
            ModelId::Ti84PCeTpe => "TI-84+CETPE",
            ModelId::Ti82Aep => "TI-82AEP",
        }
    }

    /// Looks up a model by display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }
}

/// An OS version on a particular model.
///
/// Ordering compares the model first, then the version numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OsVersion {
    pub model: ModelId,
    pub version: [u16; 3],
}

impl OsVersion {
    /// Older than every real OS.
    pub const INITIAL: OsVersion = OsVersion::initial(ModelId::Ti82);

    /// Newer than every real OS.
    pub const LATEST: OsVersion = OsVersion::latest(ModelId::Ti82Aep);

    /// Creates an OS version.
    pub const fn new(model: ModelId, major: u16, minor: u16, patch: u16) -> Self {
        Self {
            model,
            version: [major, minor, patch],
        }
    }

    /// The first OS of a model.
    pub const fn initial(model: ModelId) -> Self {
        Self {
            model,
            version: [0, 0, 0],
        }
    }

    /// Past the last OS of a model.
    pub const fn latest(model: ModelId) -> Self {
        Self {
            model,
            version: [u16::MAX; 3],
        }
    }

    /// Parses a dotted version such as `"2.55"` or `"5.3.1"`.
    ///
    /// An empty string means the model's first OS and `"latest"` its last.
    pub fn parse(model: ModelId, version: &str) -> Option<Self> {
        match version {
            "" => return Some(Self::initial(model)),
            "latest" => return Some(Self::latest(model)),
            _ => {}
        }

        let mut parts = [0u16; 3];
        let mut count = 0;
        for part in version.split('.') {
            if count == parts.len() {
                return None;
            }
            parts[count] = part.parse().ok()?;
            count += 1;
        }
        Some(Self {
            model,
            version: parts,
        })
    }
}

impl fmt::Display for OsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version {
            [0, 0, 0] => write!(f, "{} (initial)", self.model.name()),
            [u16::MAX, u16::MAX, u16::MAX] => write!(f, "{} (latest)", self.model.name()),
            [major, minor, 0] => write!(f, "{} {}.{}", self.model.name(), major, minor),
            [major, minor, patch] => {
                write!(f, "{} {}.{}.{}", self.model.name(), major, minor, patch)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_model_then_version() {
        let ti84p_255 = OsVersion::new(ModelId::Ti84P, 2, 55, 0);
        let ti84p_221 = OsVersion::new(ModelId::Ti84P, 2, 21, 0);
        let ti84pce_50 = OsVersion::new(ModelId::Ti84PCe, 5, 0, 0);
        let ti83p_latest = OsVersion::latest(ModelId::Ti83P);

        assert!(ti84p_221 < ti84p_255);
        assert!(ti84p_255 < ti84pce_50);
        assert!(ti83p_latest < ti84p_221);
        assert!(OsVersion::INITIAL < ti84p_221);
        assert!(ti84pce_50 < OsVersion::LATEST);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            OsVersion::parse(ModelId::Ti84PCe, "5.3.1"),
            Some(OsVersion::new(ModelId::Ti84PCe, 5, 3, 1))
        );
        assert_eq!(
            OsVersion::parse(ModelId::Ti84P, ""),
            Some(OsVersion::initial(ModelId::Ti84P))
        );
        assert_eq!(
            OsVersion::parse(ModelId::Ti84P, "latest"),
            Some(OsVersion::latest(ModelId::Ti84P))
        );
        assert_eq!(OsVersion::parse(ModelId::Ti84P, "2.x"), None);
        assert_eq!(OsVersion::parse(ModelId::Ti84P, "1.2.3.4"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(OsVersion::new(ModelId::Ti84P, 2, 55, 0).to_string(), "TI-84+ 2.55");
        assert_eq!(OsVersion::new(ModelId::Ti84PCe, 5, 3, 1).to_string(), "TI-84+CE 5.3.1");
        assert_eq!(ModelId::from_name("TI-83+SE"), Some(ModelId::Ti83PSe));
    }
}

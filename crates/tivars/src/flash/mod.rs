//! Flash files: operating systems, apps, certificates and licenses.
//!
//! A flash file is one or more [`FlashHeader`]s back to back. Headers whose
//! binary flag is `0x01` carry their data as Intel hex text, which
//! [`IntelBlock`] splits into addressed blocks.

pub mod file;
pub mod header;
pub mod intel;

pub use file::FlashFile;
pub use header::{FLASH_HEADER_LENGTH, FLASH_MAGIC, FlashHeader};
pub use intel::{BLOCK_SEPARATOR, IntelBlock};

/// What a flash header holds, from the type id of its first device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FlashKind {
    OperatingSystem = 0x23,
    App = 0x24,
    Certificate = 0x25,
    License = 0x3E,
}

impl FlashKind {
    pub fn from_u8(type_id: u8) -> Option<Self> {
        match type_id {
            0x23 => Some(FlashKind::OperatingSystem),
            0x24 => Some(FlashKind::App),
            0x25 => Some(FlashKind::Certificate),
            0x3E => Some(FlashKind::License),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FlashKind::OperatingSystem => "OperatingSystem",
            FlashKind::App => "App",
            FlashKind::Certificate => "Certificate",
            FlashKind::License => "License",
        }
    }
}

/// Calculator family a flash header is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DeviceType {
    /// The whole TI-83+/TI-84+ line, color and eZ80 models included.
    Ti83P = 0x73,
    Ti73 = 0x74,
    Ti92 = 0x88,
    Ti89 = 0x98,
}

impl DeviceType {
    pub fn from_u8(device: u8) -> Option<Self> {
        match device {
            0x73 => Some(DeviceType::Ti83P),
            0x74 => Some(DeviceType::Ti73),
            0x88 => Some(DeviceType::Ti92),
            0x98 => Some(DeviceType::Ti89),
            _ => None,
        }
    }
}

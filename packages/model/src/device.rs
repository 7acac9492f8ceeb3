use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Simulated viewport the canvas is displayed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeviceType {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

/// Display width of a device preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceWidth {
    /// Full width of the hosting area
    Full,
    Pixels(u32),
}

impl DeviceWidth {
    pub fn to_css(&self) -> String {
        match self {
            DeviceWidth::Full => "100%".to_string(),
            DeviceWidth::Pixels(px) => format!("{}px", px),
        }
    }
}

impl DeviceType {
    pub const ALL: [DeviceType; 3] = [DeviceType::Desktop, DeviceType::Tablet, DeviceType::Mobile];

    pub fn width(&self) -> DeviceWidth {
        match self {
            DeviceType::Desktop => DeviceWidth::Full,
            DeviceType::Tablet => DeviceWidth::Pixels(768),
            DeviceType::Mobile => DeviceWidth::Pixels(375),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeviceType::Desktop => "Desktop",
            DeviceType::Tablet => "Tablet",
            DeviceType::Mobile => "Mobile",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DeviceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "desktop" => Ok(DeviceType::Desktop),
            "tablet" => Ok(DeviceType::Tablet),
            "mobile" => Ok(DeviceType::Mobile),
            _ => Err(format!(
                "Invalid device: {}. Use: desktop, tablet, or mobile",
                s
            )),
        }
    }
}

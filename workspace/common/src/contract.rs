use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Version of the backend contract the client is built against.
///
/// Two backend variants exist and they disagree on both payloads, so the
/// client never guesses: the version is picked in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractVersion {
    /// `plot_url` is a direct URI, the summary is the flat floor-wise dataset
    V1,
    /// `plot_url` is a base64 PNG, the summary nests four datasets
    #[default]
    V2,
}

/// How the forecast response carries its image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotEncoding {
    Url,
    Base64Png,
}

/// How the visualization summary is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLayout {
    Flat,
    Nested,
}

impl ContractVersion {
    pub fn plot_encoding(self) -> PlotEncoding {
        match self {
            ContractVersion::V1 => PlotEncoding::Url,
            ContractVersion::V2 => PlotEncoding::Base64Png,
        }
    }

    pub fn summary_layout(self) -> SummaryLayout {
        match self {
            ContractVersion::V1 => SummaryLayout::Flat,
            ContractVersion::V2 => SummaryLayout::Nested,
        }
    }
}

impl fmt::Display for ContractVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractVersion::V1 => write!(f, "v1"),
            ContractVersion::V2 => write!(f, "v2"),
        }
    }
}

impl FromStr for ContractVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "v1" | "1" => Ok(ContractVersion::V1),
            "v2" | "2" => Ok(ContractVersion::V2),
            other => Err(format!("unknown contract version '{}' (expected v1 or v2)", other)),
        }
    }
}

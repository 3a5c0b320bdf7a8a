//! Input control scheme selection.

use super::error::ParseEnumError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Named camera/manipulation input scheme.
///
/// The scheme implementations live with the host; the core only selects
/// which one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlSchemeKind {
    /// Alt + mouse buttons drive the camera.
    #[default]
    Maya,
    /// Maya bindings adapted for a trackpad without a middle button.
    MayaLaptop,
    /// 3ds Max style bindings.
    Max,
}

impl ControlSchemeKind {
    /// Every scheme, in declaration order.
    pub const ALL: [ControlSchemeKind; 3] = [
        ControlSchemeKind::Maya,
        ControlSchemeKind::MayaLaptop,
        ControlSchemeKind::Max,
    ];

    /// Config/CLI name of the scheme.
    pub fn as_str(self) -> &'static str {
        match self {
            ControlSchemeKind::Maya => "maya",
            ControlSchemeKind::MayaLaptop => "maya-laptop",
            ControlSchemeKind::Max => "max",
        }
    }
}

impl fmt::Display for ControlSchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlSchemeKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("control scheme", s, "maya, maya-laptop, max"))
    }
}

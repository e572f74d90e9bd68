/// Canonical A/C command sent under every protocol during a scan.
///
/// The fields mirror the common "state" model shared by IR A/C encoders:
/// every protocol-specific encoder maps this one description onto its own
/// bit layout. The scan only ever varies `protocol` and `power`.
use serde::Serialize;

use crate::catalog::ProtocolId;

/// Operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpMode {
    Off,
    Auto,
    Cool,
    Heat,
    Dry,
    Fan,
}

/// Fan speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FanSpeed {
    Auto,
    Min,
    Low,
    Medium,
    High,
    Max,
}

/// Vertical louvre position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SwingV {
    Off,
    Auto,
    Highest,
    High,
    Middle,
    Low,
    Lowest,
}

/// Horizontal louvre position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SwingH {
    Off,
    Auto,
    LeftMax,
    Left,
    Middle,
    Right,
    RightMax,
    Wide,
}

/// A complete A/C state command for one protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AcCommand {
    /// Protocol the encoder should use
    pub protocol: ProtocolId,
    /// Protocol-specific model variant
    pub model: i16,
    pub power: bool,
    pub mode: OpMode,
    /// Temperature unit: true for Celsius, false for Fahrenheit
    pub celsius: bool,
    pub degrees: u8,
    pub fan: FanSpeed,
    pub swing_v: SwingV,
    pub swing_h: SwingH,
    pub light: bool,
    pub beep: bool,
    pub econo: bool,
    pub filter: bool,
    pub turbo: bool,
    pub quiet: bool,
    pub clean: bool,
    /// Sleep timer in minutes, `None` when disabled
    pub sleep: Option<u16>,
    /// Clock in minutes past midnight, `None` when not set
    pub clock: Option<u16>,
}

/// The fixed "power on, cool, 25°C, medium fan" target.
#[derive(Debug, Clone, Copy)]
pub struct CommandTemplate {
    base: AcCommand,
}

impl CommandTemplate {
    pub const fn new() -> Self {
        Self {
            base: AcCommand {
                protocol: 0,
                model: 1,
                power: false,
                mode: OpMode::Cool,
                celsius: true,
                degrees: 25,
                fan: FanSpeed::Medium,
                swing_v: SwingV::Off,
                swing_h: SwingH::Off,
                light: false,
                beep: false,
                econo: false,
                filter: false,
                turbo: false,
                quiet: false,
                clean: false,
                sleep: None,
                clock: None,
            },
        }
    }

    /// The template as configured, with power still off and no protocol.
    #[cfg(test)]
    pub fn base(&self) -> &AcCommand {
        &self.base
    }

    /// Build the probe for `protocol`: the template with power forced on.
    pub fn build_probe(&self, protocol: ProtocolId) -> AcCommand {
        AcCommand {
            protocol,
            power: true,
            ..self.base
        }
    }
}

impl Default for CommandTemplate {
    fn default() -> Self {
        Self::new()
    }
}

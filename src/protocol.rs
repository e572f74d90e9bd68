/// JSON message protocol between the probe and companion apps.
///
/// All messages are newline-delimited JSON (NDJSON).
/// Uses `heapless` types for no_std/no-alloc operation.
use heapless::Vec;
use serde::{Deserialize, Serialize};

use crate::catalog::ProtocolId;
use crate::command::AcCommand;

/// Messages sent from the device to the companion app / serial console
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum DeviceMessage<'a> {
    /// A probe was transmitted. Also the request format for the IR encoder
    /// on the serial bridge.
    #[serde(rename = "probe")]
    Probe {
        id: ProtocolId,
        name: &'a str,
        command: &'a AcCommand,
        /// Uptime in milliseconds when sent
        ts: u32,
    },
    /// The operator confirmed a protocol
    #[serde(rename = "matched")]
    Matched { id: ProtocolId, name: &'a str },
    /// Every protocol was tried without a match
    #[serde(rename = "exhausted")]
    Exhausted {
        /// Catalog size
        total: ProtocolId,
    },
    /// Device status report
    #[serde(rename = "status")]
    Status {
        /// "idle", "seeking", "pending", "finished" or "matched"
        state: &'static str,
        /// Next protocol id to look at
        next: ProtocolId,
        /// Catalog size
        total: ProtocolId,
        /// Name of the most recent probe
        #[serde(skip_serializing_if = "Option::is_none")]
        last: Option<&'a str>,
        /// Probe timeout in ticks (0 = none)
        timeout: u16,
        /// Uptime in seconds
        uptime: u32,
        /// Free heap in bytes
        heap_free: u32,
        /// Number of connected BLE clients
        ble_clients: u8,
        /// Board identifier
        board: &'static str,
        /// Firmware version
        version: &'static str,
    },
}

/// Commands sent from the companion app to the device.
///
/// Deserialized via [`RawCommand`] in `comm::parse_command()` because
/// `serde_json_core` does not support internally tagged enums (`deserialize_any`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCommand {
    /// Reset and start a scan from the first protocol
    Start,
    /// Operator verdict on the pending probe
    Confirm { matched: bool },
    /// Request current status
    GetStatus,
    /// Set the probe timeout in ticks (0 disables it)
    SetTimeout { ticks: u16 },
}

/// Wire format for host commands: flat struct that `serde_json_core` can
/// deserialize without `deserialize_any`. Converted to [`HostCommand`] in
/// `comm::parse_command()`.
#[derive(Deserialize)]
pub(crate) struct RawCommand {
    pub cmd: heapless::String<16>,
    #[serde(default)]
    pub matched: Option<bool>,
    #[serde(default)]
    pub ticks: Option<u16>,
}

impl RawCommand {
    pub(crate) fn into_command(self) -> Option<HostCommand> {
        match self.cmd.as_str() {
            "start" => Some(HostCommand::Start),
            "confirm" => self.matched.map(|matched| HostCommand::Confirm { matched }),
            "yes" => Some(HostCommand::Confirm { matched: true }),
            "no" => Some(HostCommand::Confirm { matched: false }),
            "status" => Some(HostCommand::GetStatus),
            "set_timeout" => self.ticks.map(|ticks| HostCommand::SetTimeout { ticks }),
            _ => None,
        }
    }
}

/// Firmware version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum size of a serialized JSON message
pub const MAX_MSG_LEN: usize = 512;

/// Maximum length of one inbound command line
pub const MAX_CMD_LEN: usize = 128;

/// Buffer type for serialized JSON messages
pub type MsgBuffer = Vec<u8, MAX_MSG_LEN>;

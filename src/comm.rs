/// Communication layer: BLE notification payloads and NDJSON commands.
///
/// Scan progress goes to the companion as raw text notifications (the bare
/// protocol name, or [`FIN_PROC`] when the catalog runs out). Operator
/// commands arrive as NDJSON lines over BLE writes or serial; bare keyword
/// lines are accepted too so any BLE terminal app can answer yes/no.

use crate::catalog::ProtocolCatalog;
use crate::protocol::{DeviceMessage, HostCommand, RawCommand, MAX_CMD_LEN};
use crate::scan::{ScanConfig, ScanSession};

/// BLE GATT service UUIDs.
///
/// These duplicate the string literals in the `#[gatt_service]` and `#[characteristic]`
/// proc macro attributes in the firmware; Rust proc macros require string literals, so
/// we can't reference these constants there. Kept here as the canonical source of truth.
pub mod ble_uuids {
    /// Primary service UUID
    pub const SERVICE: &str = "6c2a0001-8d3b-4f6e-9a51-3e7f0c1d2b4a";
    /// TX characteristic: scan progress, notify
    pub const TX_CHAR: &str = "6c2a0002-8d3b-4f6e-9a51-3e7f0c1d2b4a";
    /// RX characteristic: commands, write
    pub const RX_CHAR: &str = "6c2a0003-8d3b-4f6e-9a51-3e7f0c1d2b4a";
}

/// BLE advertising name
pub const BLE_ADV_NAME: &str = "AC-Probe";

/// Maximum BLE notification payload (MTU-3)
pub const BLE_MAX_NOTIFY: usize = 20;

/// Notification published once when every protocol has been tried.
pub const FIN_PROC: &str = "FIN_PROC";

/// Outgoing side of the notification channel.
pub trait Notifier {
    /// Set the outgoing payload and alert subscribers.
    fn publish(&mut self, text: &str);
}

/// Fixed-size TX characteristic value for `text`.
///
/// Text longer than one notification is truncated; the remainder is padded
/// with newlines so line-oriented readers see empty lines, not NULs.
pub fn notify_payload(text: &str) -> [u8; BLE_MAX_NOTIFY] {
    let mut padded = [b'\n'; BLE_MAX_NOTIFY];
    let bytes = text.as_bytes();
    let len = bytes.len().min(BLE_MAX_NOTIFY);
    padded[..len].copy_from_slice(&bytes[..len]);
    padded
}

/// Current value of the TX characteristic.
///
/// Holds the most recent payload so a client that connects mid-scan can be
/// told which protocol is waiting for a verdict, or that the scan finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TxValue {
    latest: Option<[u8; BLE_MAX_NOTIFY]>,
}

impl TxValue {
    pub const fn new() -> Self {
        Self { latest: None }
    }

    /// Replace the value with `text`, returning the padded payload.
    pub fn set(&mut self, text: &str) -> [u8; BLE_MAX_NOTIFY] {
        let payload = notify_payload(text);
        self.latest = Some(payload);
        payload
    }

    pub fn get(&self) -> Option<[u8; BLE_MAX_NOTIFY]> {
        self.latest
    }

    pub fn clear(&mut self) {
        self.latest = None;
    }
}

impl Notifier for TxValue {
    fn publish(&mut self, text: &str) {
        self.set(text);
    }
}

// ── Serialization helpers ──────────────────────────────────────────────

/// Serialize a DeviceMessage to JSON bytes and write to the output buffer.
/// Returns the number of bytes written, or None if serialization failed.
pub fn serialize_message(msg: &DeviceMessage, buf: &mut [u8]) -> Option<usize> {
    match serde_json_core::to_slice(msg, buf) {
        Ok(len) => {
            // Append newline for NDJSON
            if len < buf.len() {
                buf[len] = b'\n';
                Some(len + 1)
            } else {
                Some(len)
            }
        }
        Err(_) => None,
    }
}

/// Parse one command line: a JSON object, or a bare keyword.
pub fn parse_command(data: &[u8]) -> Option<HostCommand> {
    let trimmed = trim_whitespace(data);
    if trimmed.is_empty() {
        return None;
    }
    if trimmed[0] == b'{' {
        serde_json_core::from_slice::<RawCommand>(trimmed)
            .ok()
            .and_then(|(raw, _)| raw.into_command())
    } else {
        parse_keyword(core::str::from_utf8(trimmed).ok()?)
    }
}

fn parse_keyword(word: &str) -> Option<HostCommand> {
    const KEYWORDS: &[(&str, HostCommand)] = &[
        ("start", HostCommand::Start),
        ("yes", HostCommand::Confirm { matched: true }),
        ("y", HostCommand::Confirm { matched: true }),
        ("no", HostCommand::Confirm { matched: false }),
        ("n", HostCommand::Confirm { matched: false }),
        ("status", HostCommand::GetStatus),
    ];
    KEYWORDS
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(word))
        .map(|&(_, cmd)| cmd)
}

/// Apply a host command to the scan.
///
/// Returns a `matched` message when the command confirmed a protocol.
/// `GetStatus` returns None; the caller builds the status with live
/// uptime/heap data.
pub fn handle_command<'c, C>(
    cmd: &HostCommand,
    session: &mut ScanSession,
    config: &mut ScanConfig,
    catalog: &'c C,
) -> Option<DeviceMessage<'c>>
where
    C: ProtocolCatalog + ?Sized,
{
    match *cmd {
        HostCommand::Start => {
            session.start();
            None
        }
        HostCommand::Confirm { matched } => session.confirm(matched).map(|id| {
            DeviceMessage::Matched {
                id,
                name: catalog.name_of(id),
            }
        }),
        HostCommand::GetStatus => None,
        HostCommand::SetTimeout { ticks } => {
            config.probe_timeout_ticks = ticks;
            log::info!("Probe timeout set to {} ticks", ticks);
            None
        }
    }
}

// ── Line reader ────────────────────────────────────────────────────────

/// Command line reader state machine.
/// Accumulates bytes until a newline is found, then yields the line.
pub struct LineReader {
    buf: [u8; MAX_CMD_LEN],
    pos: usize,
}

impl LineReader {
    pub const fn new() -> Self {
        Self {
            buf: [0; MAX_CMD_LEN],
            pos: 0,
        }
    }

    /// Feed a byte into the reader. Returns a complete line (without newline)
    /// when one is detected.
    pub fn feed(&mut self, byte: u8) -> Option<&[u8]> {
        if byte == b'\n' || byte == b'\r' {
            if self.pos > 0 {
                let line = &self.buf[..self.pos];
                self.pos = 0;
                Some(line)
            } else {
                None
            }
        } else if byte == 0 {
            // Zero padding from fixed-size characteristic writes
            None
        } else if self.pos < self.buf.len() {
            self.buf[self.pos] = byte;
            self.pos += 1;
            None
        } else {
            // Overflow, discard and reset
            self.pos = 0;
            None
        }
    }
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new()
    }
}

fn trim_whitespace(data: &[u8]) -> &[u8] {
    let is_ws = |b: &u8| matches!(*b, b' ' | b'\n' | b'\r' | b'\t');
    let start = data.iter().position(|b| !is_ws(b)).unwrap_or(data.len());
    let end = data.iter().rposition(|b| !is_ws(b)).map_or(start, |i| i + 1);
    &data[start..end]
}

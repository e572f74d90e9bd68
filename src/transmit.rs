/// IR transmission seam.
///
/// Encoding an [`AcCommand`] into a protocol's waveform is the
/// transmitter's job. The scan treats sending as best effort: the returned
/// flag is logged and never changes what the scan does next.
use crate::command::AcCommand;

/// Something that can emit an A/C command as infrared.
pub trait IrTransmitter {
    /// Send `command` under `command.protocol`.
    ///
    /// Returns `false` if the command could not be encoded or queued.
    fn send(&mut self, command: &AcCommand) -> bool;
}

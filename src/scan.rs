/// Protocol scan state machine.
///
/// Walks the protocol catalog one id per tick. Each supported id gets one
/// probe: its name is published, the canonical command is transmitted, and
/// the session parks until the operator answers with [`ScanSession::confirm`].
/// Unsupported ids are skipped silently. When the catalog runs out the
/// sentinel [`FIN_PROC`] is published once and the session goes idle.
///
/// All operations are synchronous and never block. Callers that drive
/// `tick` and `confirm` from different tasks must serialize access to the
/// session (the firmware keeps it behind a critical-section mutex).
use crate::catalog::{ProtocolCatalog, ProtocolId};
use crate::command::CommandTemplate;
use crate::comm::{Notifier, FIN_PROC};
use crate::transmit::IrTransmitter;

/// Default interval between ticks in the firmware.
pub const DEFAULT_TICK_MS: u64 = 250;

/// Runtime scan configuration. Adjustable from the companion app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Milliseconds between ticks
    pub tick_interval_ms: u64,
    /// Ticks to wait for a verdict before treating the probe as a
    /// non-match. 0 waits forever.
    pub probe_timeout_ticks: u16,
}

impl ScanConfig {
    pub const fn new() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_MS,
            probe_timeout_ticks: 0,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Observable scan state, derived from the session fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Never started, or reset
    Idle,
    /// Active, will probe on the next tick
    Seeking,
    /// Active, probe sent, waiting for the operator
    Pending,
    /// Catalog exhausted without a match
    Finished,
    /// Operator confirmed a protocol
    Matched(ProtocolId),
}

impl ScanState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanState::Idle => "idle",
            ScanState::Seeking => "seeking",
            ScanState::Pending => "pending",
            ScanState::Finished => "finished",
            ScanState::Matched(_) => "matched",
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanResult {
    Matched(ProtocolId),
    Exhausted,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session not active
    Inactive,
    /// A probe is still waiting for a verdict
    AwaitingConfirmation,
    /// Id was unsupported and passed over
    Skipped(ProtocolId),
    /// Probe for this id was published and transmitted
    Probed(ProtocolId),
    /// The pending probe for this id ran out of time
    TimedOut(ProtocolId),
    /// Catalog ran out; sentinel published
    Exhausted,
}

/// One protocol scan.
#[derive(Debug, Clone)]
pub struct ScanSession {
    active: bool,
    pending_confirmation: bool,
    current_protocol_index: ProtocolId,
    /// Set once the cursor has moved past `ProtocolId::MAX`
    past_end: bool,
    last_probe: Option<ProtocolId>,
    result: Option<ScanResult>,
    pending_ticks: u16,
    template: CommandTemplate,
}

impl ScanSession {
    pub const fn new() -> Self {
        Self::with_template(CommandTemplate::new())
    }

    pub const fn with_template(template: CommandTemplate) -> Self {
        Self {
            active: false,
            pending_confirmation: false,
            current_protocol_index: 1,
            past_end: false,
            last_probe: None,
            result: None,
            pending_ticks: 0,
            template,
        }
    }

    /// Reset and begin scanning from the first protocol id.
    pub fn start(&mut self) {
        self.current_protocol_index = 1;
        self.past_end = false;
        self.active = true;
        self.pending_confirmation = false;
        self.last_probe = None;
        self.result = None;
        self.pending_ticks = 0;
        log::info!("AC protocol scan started");
    }

    /// Advance the scan by at most one protocol id.
    pub fn tick<C, T, N>(
        &mut self,
        catalog: &C,
        transmitter: &mut T,
        notifier: &mut N,
        config: &ScanConfig,
    ) -> TickOutcome
    where
        C: ProtocolCatalog + ?Sized,
        T: IrTransmitter + ?Sized,
        N: Notifier + ?Sized,
    {
        if !self.active {
            return TickOutcome::Inactive;
        }

        if self.pending_confirmation {
            return self.wait_for_verdict(config);
        }

        let id = self.current_protocol_index;

        if self.past_end || id > catalog.count() {
            log::info!("Protocol catalog exhausted, no match found");
            notifier.publish(FIN_PROC);
            self.active = false;
            self.result = Some(ScanResult::Exhausted);
            return TickOutcome::Exhausted;
        }

        match id.checked_add(1) {
            Some(next) => self.current_protocol_index = next,
            None => self.past_end = true,
        }

        if !catalog.is_supported(id) {
            return TickOutcome::Skipped(id);
        }

        let name = catalog.name_of(id);
        log::info!("Trying protocol {} ({})", name, id);
        notifier.publish(name);

        let probe = self.template.build_probe(id);
        if !transmitter.send(&probe) {
            log::warn!("Transmission of {} probe failed", name);
        }

        self.pending_confirmation = true;
        self.pending_ticks = 0;
        self.last_probe = Some(id);
        TickOutcome::Probed(id)
    }

    fn wait_for_verdict(&mut self, config: &ScanConfig) -> TickOutcome {
        if config.probe_timeout_ticks == 0 {
            return TickOutcome::AwaitingConfirmation;
        }

        self.pending_ticks = self.pending_ticks.saturating_add(1);
        if self.pending_ticks < config.probe_timeout_ticks {
            return TickOutcome::AwaitingConfirmation;
        }

        // Unanswered probes count as "no".
        let id = self.last_probe.unwrap_or(0);
        log::warn!(
            "No verdict for protocol {} after {} ticks, moving on",
            id,
            self.pending_ticks
        );
        self.pending_confirmation = false;
        self.pending_ticks = 0;
        TickOutcome::TimedOut(id)
    }

    /// Record the operator's verdict on the pending probe.
    ///
    /// Returns the matched protocol id when `matched` is true. Calls made
    /// while idle or with no probe pending are ignored.
    pub fn confirm(&mut self, matched: bool) -> Option<ProtocolId> {
        if !self.active {
            log::debug!("Verdict ignored: no scan in progress");
            return None;
        }
        if !self.pending_confirmation {
            log::debug!("Verdict ignored: no probe pending");
            return None;
        }

        self.pending_confirmation = false;
        self.pending_ticks = 0;

        let id = self.last_probe?;
        if matched {
            log::info!("Protocol {} confirmed by operator", id);
            self.active = false;
            self.result = Some(ScanResult::Matched(id));
            Some(id)
        } else {
            log::info!("Protocol {} rejected by operator", id);
            None
        }
    }

    pub fn state(&self) -> ScanState {
        match (self.active, self.pending_confirmation, self.result) {
            (true, true, _) => ScanState::Pending,
            (true, false, _) => ScanState::Seeking,
            (false, _, Some(ScanResult::Matched(id))) => ScanState::Matched(id),
            (false, _, Some(ScanResult::Exhausted)) => ScanState::Finished,
            (false, _, None) => ScanState::Idle,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_pending(&self) -> bool {
        self.pending_confirmation
    }

    /// Next protocol id the scan will look at. Stays at `ProtocolId::MAX`
    /// once a full-range catalog has been walked.
    pub fn current_index(&self) -> ProtocolId {
        self.current_protocol_index
    }

    /// Id of the most recent probe, if any.
    pub fn last_probe(&self) -> Option<ProtocolId> {
        self.last_probe
    }

    pub fn result(&self) -> Option<ScanResult> {
        self.result
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::KnownProtocols;
    use crate::command::AcCommand;

    /// Catalog of named protocols with a per-id support flag.
    struct FakeCatalog {
        entries: Vec<(&'static str, bool)>,
    }

    impl FakeCatalog {
        fn all_supported(names: &[&'static str]) -> Self {
            Self {
                entries: names.iter().map(|&n| (n, true)).collect(),
            }
        }
    }

    impl ProtocolCatalog for FakeCatalog {
        fn count(&self) -> ProtocolId {
            self.entries.len() as ProtocolId
        }

        fn name_of(&self, id: ProtocolId) -> &str {
            self.entries[id as usize - 1].0
        }

        fn is_supported(&self, id: ProtocolId) -> bool {
            self.entries[id as usize - 1].1
        }
    }

    #[derive(Default)]
    struct RecordingTransmitter {
        sent: Vec<AcCommand>,
        fail: bool,
    }

    impl IrTransmitter for RecordingTransmitter {
        fn send(&mut self, command: &AcCommand) -> bool {
            self.sent.push(*command);
            !self.fail
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        published: Vec<String>,
    }

    impl Notifier for RecordingNotifier {
        fn publish(&mut self, text: &str) {
            self.published.push(text.to_string());
        }
    }

    struct Rig {
        session: ScanSession,
        catalog: FakeCatalog,
        tx: RecordingTransmitter,
        notifier: RecordingNotifier,
        config: ScanConfig,
    }

    impl Rig {
        fn new(catalog: FakeCatalog) -> Self {
            Self {
                session: ScanSession::new(),
                catalog,
                tx: RecordingTransmitter::default(),
                notifier: RecordingNotifier::default(),
                config: ScanConfig::new(),
            }
        }

        fn tick(&mut self) -> TickOutcome {
            self.session
                .tick(&self.catalog, &mut self.tx, &mut self.notifier, &self.config)
        }

        fn sent_protocols(&self) -> Vec<ProtocolId> {
            self.tx.sent.iter().map(|c| c.protocol).collect()
        }
    }

    fn abc() -> Rig {
        Rig::new(FakeCatalog::all_supported(&["A", "B", "C"]))
    }

    // ── start ───────────────────────────────────────────────────────

    #[test]
    fn new_session_is_idle() {
        let session = ScanSession::new();
        assert_eq!(session.state(), ScanState::Idle);
        assert!(!session.is_active());
        assert!(!session.is_pending());
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn start_enters_seeking() {
        let mut session = ScanSession::new();
        session.start();
        assert_eq!(session.state(), ScanState::Seeking);
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.last_probe(), None);
    }

    #[test]
    fn start_resets_a_pending_scan() {
        let mut rig = abc();
        rig.session.start();
        rig.tick();
        rig.tick();
        assert!(rig.session.is_pending());

        rig.session.start();
        assert_eq!(rig.session.state(), ScanState::Seeking);
        assert_eq!(rig.session.current_index(), 1);
        assert_eq!(rig.tick(), TickOutcome::Probed(1));
    }

    #[test]
    fn start_after_match_clears_result() {
        let mut rig = abc();
        rig.session.start();
        rig.tick();
        rig.session.confirm(true);
        assert_eq!(rig.session.result(), Some(ScanResult::Matched(1)));

        rig.session.start();
        assert_eq!(rig.session.result(), None);
        assert_eq!(rig.session.state(), ScanState::Seeking);
    }

    // ── tick ────────────────────────────────────────────────────────

    #[test]
    fn tick_while_idle_does_nothing() {
        let mut rig = abc();
        assert_eq!(rig.tick(), TickOutcome::Inactive);
        assert!(rig.tx.sent.is_empty());
        assert!(rig.notifier.published.is_empty());
    }

    #[test]
    fn first_tick_probes_first_protocol() {
        let mut rig = abc();
        rig.session.start();
        assert_eq!(rig.tick(), TickOutcome::Probed(1));
        assert_eq!(rig.notifier.published, ["A"]);
        assert_eq!(rig.sent_protocols(), [1]);
        assert_eq!(rig.session.state(), ScanState::Pending);
        assert_eq!(rig.session.current_index(), 2);
        assert_eq!(rig.session.last_probe(), Some(1));
    }

    #[test]
    fn probe_is_power_on_cool_25() {
        let mut rig = abc();
        rig.session.start();
        rig.tick();
        let probe = rig.tx.sent[0];
        assert!(probe.power);
        assert_eq!(probe.mode, crate::command::OpMode::Cool);
        assert_eq!(probe.degrees, 25);
    }

    #[test]
    fn pending_blocks_further_probes() {
        let mut rig = abc();
        rig.session.start();
        rig.tick();
        for _ in 0..10 {
            assert_eq!(rig.tick(), TickOutcome::AwaitingConfirmation);
        }
        assert_eq!(rig.tx.sent.len(), 1);
        assert_eq!(rig.notifier.published.len(), 1);
        assert_eq!(rig.session.current_index(), 2);
    }

    #[test]
    fn unsupported_ids_are_skipped_silently() {
        let mut rig = Rig::new(FakeCatalog {
            entries: vec![("A", true), ("B", true), ("C", false), ("D", true)],
        });
        rig.session.start();

        let mut visited = Vec::new();
        for _ in 0..20 {
            if let TickOutcome::Probed(id) = rig.tick() {
                visited.push(id);
                rig.session.confirm(false);
            }
        }

        assert_eq!(visited, [1, 2, 4]);
        assert_eq!(rig.sent_protocols(), [1, 2, 4]);
        assert_eq!(rig.notifier.published, ["A", "B", "D", FIN_PROC]);
    }

    #[test]
    fn skip_advances_one_id_per_tick() {
        let mut rig = Rig::new(FakeCatalog {
            entries: vec![("A", false), ("B", false), ("C", true)],
        });
        rig.session.start();
        assert_eq!(rig.tick(), TickOutcome::Skipped(1));
        assert_eq!(rig.tick(), TickOutcome::Skipped(2));
        assert_eq!(rig.session.state(), ScanState::Seeking);
        assert_eq!(rig.tick(), TickOutcome::Probed(3));
    }

    #[test]
    fn failed_transmission_still_waits_for_verdict() {
        let mut rig = abc();
        rig.tx.fail = true;
        rig.session.start();
        assert_eq!(rig.tick(), TickOutcome::Probed(1));
        assert!(rig.session.is_pending());
        assert_eq!(rig.notifier.published, ["A"]);
    }

    // ── confirm ─────────────────────────────────────────────────────

    #[test]
    fn confirm_false_resumes_seeking() {
        let mut rig = abc();
        rig.session.start();
        rig.tick();
        assert_eq!(rig.session.confirm(false), None);
        assert_eq!(rig.session.state(), ScanState::Seeking);
        assert!(rig.session.is_active());
        assert_eq!(rig.session.current_index(), 2);
        assert_eq!(rig.tick(), TickOutcome::Probed(2));
    }

    #[test]
    fn match_terminates_scan() {
        let mut rig = abc();
        rig.session.start();
        rig.tick();
        assert_eq!(rig.session.confirm(true), Some(1));
        assert!(!rig.session.is_active());
        assert!(!rig.session.is_pending());
        assert_eq!(rig.session.state(), ScanState::Matched(1));

        assert_eq!(rig.tick(), TickOutcome::Inactive);
        assert_eq!(rig.tx.sent.len(), 1);
        assert_eq!(rig.notifier.published, ["A"]);
    }

    #[test]
    fn confirm_while_idle_is_ignored() {
        let mut session = ScanSession::new();
        assert_eq!(session.confirm(true), None);
        assert_eq!(session.confirm(false), None);
        assert_eq!(session.state(), ScanState::Idle);
    }

    #[test]
    fn confirm_without_pending_probe_is_ignored() {
        let mut rig = abc();
        rig.session.start();
        assert_eq!(rig.session.confirm(true), None);
        assert_eq!(rig.session.state(), ScanState::Seeking);
        assert_eq!(rig.tick(), TickOutcome::Probed(1));
    }

    #[test]
    fn duplicate_confirm_is_ignored() {
        let mut rig = abc();
        rig.session.start();
        rig.tick();
        rig.session.confirm(false);
        assert_eq!(rig.session.confirm(true), None);
        assert!(rig.session.is_active());
        assert_eq!(rig.session.result(), None);
    }

    // ── scenarios ───────────────────────────────────────────────────

    #[test]
    fn scenario_third_protocol_matches() {
        let mut rig = abc();
        rig.session.start();

        assert_eq!(rig.tick(), TickOutcome::Probed(1));
        assert_eq!(rig.session.confirm(false), None);
        assert_eq!(rig.tick(), TickOutcome::Probed(2));
        assert_eq!(rig.session.confirm(false), None);
        assert_eq!(rig.tick(), TickOutcome::Probed(3));
        assert_eq!(rig.session.confirm(true), Some(3));

        assert_eq!(rig.notifier.published, ["A", "B", "C"]);
        assert_eq!(rig.sent_protocols(), [1, 2, 3]);
        assert_eq!(rig.session.result(), Some(ScanResult::Matched(3)));
        assert!(!rig.session.is_active());
    }

    #[test]
    fn scenario_exhaustion_publishes_sentinel_once() {
        let mut rig = abc();
        rig.session.start();
        for id in 1..=3 {
            assert_eq!(rig.tick(), TickOutcome::Probed(id));
            rig.session.confirm(false);
        }

        assert_eq!(rig.tick(), TickOutcome::Exhausted);
        assert_eq!(rig.session.state(), ScanState::Finished);
        assert_eq!(rig.session.result(), Some(ScanResult::Exhausted));

        for _ in 0..5 {
            assert_eq!(rig.tick(), TickOutcome::Inactive);
        }
        let sentinels = rig
            .notifier
            .published
            .iter()
            .filter(|p| p.as_str() == FIN_PROC)
            .count();
        assert_eq!(sentinels, 1);
        assert_eq!(rig.tx.sent.len(), 3);
    }

    #[test]
    fn empty_catalog_exhausts_on_first_tick() {
        let mut rig = Rig::new(FakeCatalog { entries: Vec::new() });
        rig.session.start();
        assert_eq!(rig.tick(), TickOutcome::Exhausted);
        assert_eq!(rig.notifier.published, [FIN_PROC]);
        assert!(rig.tx.sent.is_empty());
    }

    #[test]
    fn confirm_after_exhaustion_is_ignored() {
        let mut rig = Rig::new(FakeCatalog { entries: Vec::new() });
        rig.session.start();
        rig.tick();
        assert_eq!(rig.session.confirm(true), None);
        assert_eq!(rig.session.state(), ScanState::Finished);
    }

    // ── properties over mixed call sequences ───────────────────────

    /// Deterministic call pattern: ticks interleaved with verdicts and
    /// redundant calls.
    fn mixed_calls(rig: &mut Rig, steps: usize) -> (Vec<ProtocolId>, usize) {
        let mut indices = Vec::new();
        let mut probes_while_pending = 0;
        for step in 0..steps {
            let was_pending = rig.session.is_pending();
            let sent_before = rig.tx.sent.len();
            match step % 7 {
                0 | 2 | 3 | 5 => {
                    rig.tick();
                }
                1 | 6 => {
                    rig.session.confirm(false);
                }
                _ => {
                    rig.session.confirm(step % 11 == 0);
                }
            }
            if was_pending && rig.tx.sent.len() > sent_before {
                probes_while_pending += 1;
            }
            indices.push(rig.session.current_index());
        }
        (indices, probes_while_pending)
    }

    #[test]
    fn index_never_decreases_without_start() {
        let mut rig = Rig::new(FakeCatalog {
            entries: (0..12).map(|i| ("P", i % 3 != 0)).collect(),
        });
        rig.session.start();
        let (indices, _) = mixed_calls(&mut rig, 200);
        assert!(indices.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn never_two_probes_in_flight() {
        let mut rig = Rig::new(FakeCatalog {
            entries: (0..12).map(|i| ("P", i % 4 != 1)).collect(),
        });
        rig.session.start();
        let (_, probes_while_pending) = mixed_calls(&mut rig, 200);
        assert_eq!(probes_while_pending, 0);
    }

    #[test]
    fn pending_implies_active() {
        let mut rig = abc();
        rig.session.start();
        for step in 0..30 {
            if step % 3 == 2 {
                rig.session.confirm(step == 29);
            } else {
                rig.tick();
            }
            assert!(!rig.session.is_pending() || rig.session.is_active());
        }
    }

    // ── probe timeout ───────────────────────────────────────────────

    #[test]
    fn timeout_disabled_waits_forever() {
        let mut rig = abc();
        rig.session.start();
        rig.tick();
        for _ in 0..1000 {
            assert_eq!(rig.tick(), TickOutcome::AwaitingConfirmation);
        }
    }

    #[test]
    fn timeout_advances_as_non_match() {
        let mut rig = abc();
        rig.config.probe_timeout_ticks = 3;
        rig.session.start();
        assert_eq!(rig.tick(), TickOutcome::Probed(1));
        assert_eq!(rig.tick(), TickOutcome::AwaitingConfirmation);
        assert_eq!(rig.tick(), TickOutcome::AwaitingConfirmation);
        assert_eq!(rig.tick(), TickOutcome::TimedOut(1));
        assert_eq!(rig.session.state(), ScanState::Seeking);
        assert_eq!(rig.tick(), TickOutcome::Probed(2));
    }

    #[test]
    fn confirm_resets_timeout_counter() {
        let mut rig = abc();
        rig.config.probe_timeout_ticks = 2;
        rig.session.start();
        rig.tick();
        rig.tick();
        rig.session.confirm(false);
        assert_eq!(rig.tick(), TickOutcome::Probed(2));
        assert_eq!(rig.tick(), TickOutcome::AwaitingConfirmation);
        assert_eq!(rig.tick(), TickOutcome::TimedOut(2));
    }

    /// Catalog spanning every possible id, only the last one supported.
    struct FullRangeCatalog;

    impl ProtocolCatalog for FullRangeCatalog {
        fn count(&self) -> ProtocolId {
            ProtocolId::MAX
        }

        fn name_of(&self, _id: ProtocolId) -> &str {
            "LAST"
        }

        fn is_supported(&self, id: ProtocolId) -> bool {
            id == ProtocolId::MAX
        }
    }

    #[test]
    fn full_range_catalog_probes_last_id_once_then_exhausts() {
        let catalog = FullRangeCatalog;
        let mut tx = RecordingTransmitter::default();
        let mut notifier = RecordingNotifier::default();
        let config = ScanConfig::new();
        let mut session = ScanSession::new();
        session.start();

        let mut ticks = 0u32;
        while session.is_active() && ticks < 70_000 {
            if let TickOutcome::Probed(_) =
                session.tick(&catalog, &mut tx, &mut notifier, &config)
            {
                session.confirm(false);
            }
            ticks += 1;
        }

        assert_eq!(ticks, u32::from(ProtocolId::MAX) + 1);
        assert_eq!(session.result(), Some(ScanResult::Exhausted));
        assert_eq!(tx.sent.len(), 1);
        assert_eq!(tx.sent[0].protocol, ProtocolId::MAX);
        assert_eq!(notifier.published, ["LAST", FIN_PROC]);
        assert_eq!(session.current_index(), ProtocolId::MAX);

        // Restarting rewinds the cursor
        session.start();
        assert_eq!(session.current_index(), 1);
        assert_eq!(
            session.tick(&catalog, &mut tx, &mut notifier, &config),
            TickOutcome::Skipped(1)
        );
    }

    // ── built-in catalog ────────────────────────────────────────────

    #[test]
    fn full_scan_over_known_protocols() {
        let catalog = KnownProtocols::new();
        let mut tx = RecordingTransmitter::default();
        let mut notifier = RecordingNotifier::default();
        let config = ScanConfig::new();
        let mut session = ScanSession::new();
        session.start();

        let mut ticks = 0;
        while session.is_active() {
            if let TickOutcome::Probed(_) =
                session.tick(&catalog, &mut tx, &mut notifier, &config)
            {
                session.confirm(false);
            }
            ticks += 1;
        }

        assert_eq!(ticks, catalog.count() as usize + 1);
        assert_eq!(tx.sent.len(), crate::defaults::ac_protocol_count());
        assert!(tx.sent.iter().all(|c| catalog.is_supported(c.protocol)));
        assert_eq!(notifier.published.last().map(String::as_str), Some(FIN_PROC));
        assert_eq!(notifier.published[0], "LG");
    }

    #[test]
    fn state_names() {
        assert_eq!(ScanState::Idle.as_str(), "idle");
        assert_eq!(ScanState::Pending.as_str(), "pending");
        assert_eq!(ScanState::Matched(4).as_str(), "matched");
    }
}

//! AC Probe: infrared air-conditioner protocol finder
//!
//! Walks the built-in IR protocol catalog, sending a "power on, cool, 25°C"
//! probe under each A/C protocol in turn. Every attempt is announced as a
//! BLE notification carrying the protocol name; the operator watches the
//! unit and answers yes/no from a companion app. `FIN_PROC` is notified if
//! nothing matched.
//!
//! Probes are emitted as NDJSON on the serial console for the IR encoder
//! attached to it.

#![no_std]
#![no_main]

extern crate alloc;

use esp_backtrace as _;

esp_bootloader_esp_idf::esp_app_desc!();

// Hardware-specific modules (binary crate only)
#[cfg(feature = "m5stickc")]
mod display;

// Re-export library modules so binary submodules (display) can use crate::*
pub(crate) use acprobe::{board, catalog, comm, protocol, scan};

use core::cell::Cell;
use core::sync::atomic::{AtomicU8, Ordering};
use critical_section::Mutex;
use embassy_futures::select::{select3, Either3};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex as AsyncMutex;
use embassy_time::{Duration, Instant, Timer};
use esp_hal::interrupt::software::SoftwareInterruptControl;
use esp_hal::timer::timg::TimerGroup;
use static_cell::StaticCell;

use trouble_host::prelude::*;

use acprobe::command::AcCommand;
use acprobe::defaults;
use acprobe::transmit::IrTransmitter;
use catalog::{KnownProtocols, ProtocolCatalog, ProtocolId};
use comm::{LineReader, Notifier, TxValue, BLE_MAX_NOTIFY};
use protocol::{DeviceMessage, HostCommand, MsgBuffer, MAX_MSG_LEN, VERSION};
use scan::{ScanConfig, ScanSession, ScanState, TickOutcome};

// ── BLE GATT server definition ──────────────────────────────────────
//
// Proc macros depend on trouble-host which is firmware-only. The UUID
// constants in comm::ble_uuids are the canonical source; proc macros
// require string literals.

#[gatt_service(uuid = "6c2a0001-8d3b-4f6e-9a51-3e7f0c1d2b4a")]
struct ProbeGattService {
    /// TX: protocol name under test or FIN_PROC, followed by NDJSON
    /// device messages. Notify-only.
    #[characteristic(uuid = "6c2a0002-8d3b-4f6e-9a51-3e7f0c1d2b4a", notify)]
    tx: [u8; 20],

    /// RX: operator commands, write-only.
    /// NDJSON or bare keywords, accumulated via LineReader.
    #[characteristic(uuid = "6c2a0003-8d3b-4f6e-9a51-3e7f0c1d2b4a", write)]
    rx: [u8; 20],
}

/// Top-level GATT server.
#[gatt_server]
struct ProbeServer {
    probe_service: ProbeGattService,
}

// ── Channel type aliases ──────────────────────────────────────────────

type OutputChannel = Channel<CriticalSectionRawMutex, MsgBuffer, 8>;
type NotifyChannel = Channel<CriticalSectionRawMutex, [u8; BLE_MAX_NOTIFY], 4>;
type CommandChannel = Channel<CriticalSectionRawMutex, HostCommand, 4>;
type BleOutputChannel = Channel<CriticalSectionRawMutex, MsgBuffer, 4>;

// ── Static channels and shared state ─────────────────────────────────

/// Static channel for serialized NDJSON output (serial console)
static OUTPUT_CHANNEL: OutputChannel = Channel::new();

/// Static channel for BLE notification payloads
static NOTIFY_CHANNEL: NotifyChannel = Channel::new();

/// Static channel for host commands
static CMD_CHANNEL: CommandChannel = Channel::new();

/// NDJSON messages cloned by the serial task for BLE clients
static BLE_OUTPUT_CHANNEL: BleOutputChannel = Channel::new();

/// Built-in protocol catalog
static CATALOG: KnownProtocols = KnownProtocols::new();

/// The scan session. Ticked by `scan_tick_task`, confirmed by
/// `command_task`. Held across a whole `tick`/`confirm` so the counter and
/// both flags always change together; async so interrupts stay enabled
/// while the tick logs and serializes.
static SESSION: AsyncMutex<CriticalSectionRawMutex, ScanSession> =
    AsyncMutex::new(ScanSession::new());

/// Latest TX payload, replayed to clients that connect mid-scan
static TX_VALUE: Mutex<Cell<TxValue>> = Mutex::new(Cell::new(TxValue::new()));

/// Runtime scan configuration
static SCAN_CONFIG: Mutex<Cell<ScanConfig>> = Mutex::new(Cell::new(ScanConfig::new()));

/// Number of connected BLE clients
pub(crate) static BLE_CLIENTS: AtomicU8 = AtomicU8::new(0);

/// Get a snapshot of the current scan config.
fn get_scan_config() -> ScanConfig {
    critical_section::with(|cs| SCAN_CONFIG.borrow(cs).get())
}

/// Snapshot of the session for status reporting and the display.
#[derive(Clone, Copy)]
pub(crate) struct ScanSnapshot {
    pub state: ScanState,
    pub next: ProtocolId,
    pub last: Option<ProtocolId>,
}

pub(crate) async fn scan_snapshot() -> ScanSnapshot {
    let session = SESSION.lock().await;
    ScanSnapshot {
        state: session.state(),
        next: session.current_index(),
        last: session.last_probe(),
    }
}

pub(crate) fn protocol_name(id: ProtocolId) -> &'static str {
    CATALOG.name_of(id)
}

pub(crate) fn protocol_count() -> ProtocolId {
    CATALOG.count()
}

fn uptime_millis_u32() -> u32 {
    (Instant::now().as_millis() & 0xFFFF_FFFF) as u32
}

/// Serialize `msg` onto the output channel. Drops it if the channel is full.
fn send_message(msg: &DeviceMessage) -> bool {
    let mut buf = MsgBuffer::new();
    buf.resize_default(MAX_MSG_LEN).ok();
    match comm::serialize_message(msg, &mut buf) {
        Some(len) => {
            buf.truncate(len);
            OUTPUT_CHANNEL.try_send(buf).is_ok()
        }
        None => false,
    }
}

async fn send_status() {
    let snapshot = scan_snapshot().await;
    let config = get_scan_config();
    let msg = DeviceMessage::Status {
        state: snapshot.state.as_str(),
        next: snapshot.next,
        total: CATALOG.count(),
        last: snapshot.last.map(protocol_name),
        timeout: config.probe_timeout_ticks,
        uptime: (Instant::now().as_millis() / 1000) as u32,
        heap_free: esp_alloc::HEAP.free() as u32,
        ble_clients: BLE_CLIENTS.load(Ordering::Relaxed),
        board: board::BOARD_NAME,
        version: VERSION,
    };
    send_message(&msg);
}

// ── Scan collaborators ───────────────────────────────────────────────

/// Sets the TX value and notifies connected BLE clients.
struct BleNotifier;

impl Notifier for BleNotifier {
    fn publish(&mut self, text: &str) {
        let payload = critical_section::with(|cs| {
            let cell = TX_VALUE.borrow(cs);
            let mut value = cell.get();
            let payload = value.set(text);
            cell.set(value);
            payload
        });
        // Held in TX_VALUE until a client connects
        if BLE_CLIENTS.load(Ordering::Relaxed) == 0 {
            log::debug!("No BLE client for notification '{}'", text);
            return;
        }
        if NOTIFY_CHANNEL.try_send(payload).is_err() {
            log::warn!("BLE notify queue full, dropped '{}'", text);
        }
    }
}

/// Forwards each probe as a `probe` NDJSON message to the IR encoder on
/// the serial console.
struct SerialIrBridge;

impl IrTransmitter for SerialIrBridge {
    fn send(&mut self, command: &AcCommand) -> bool {
        send_message(&DeviceMessage::Probe {
            id: command.protocol,
            name: protocol_name(command.protocol),
            command,
            ts: uptime_millis_u32(),
        })
    }
}

// ── Entry point ──────────────────────────────────────────────────────

#[esp_rtos::main]
async fn main(spawner: embassy_executor::Spawner) {
    esp_println::logger::init_logger_from_env();

    let peripherals = esp_hal::init(esp_hal::Config::default());

    // Heap for the BLE stack
    #[cfg(feature = "esp32")]
    {
        esp_alloc::heap_allocator!(size: 64 * 1024);
    }
    #[cfg(not(feature = "esp32"))]
    {
        esp_alloc::heap_allocator!(size: 96 * 1024);
    }

    // Start the RTOS, requires timer + software interrupt
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_int = SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_int.software_interrupt0);

    log::info!("AC Probe v{} starting on {}", VERSION, board::BOARD_NAME);

    log::info!(
        "Catalog loaded: {} protocols, {} with A/C state commands",
        CATALOG.count(),
        defaults::ac_protocol_count(),
    );

    spawner.spawn(scan_tick_task()).unwrap();
    spawner.spawn(output_serial_task()).unwrap();
    spawner.spawn(status_task()).unwrap();
    spawner.spawn(command_task()).unwrap();

    // Hold power on (M5StickC Plus2 needs GPIO4 HIGH to stay powered)
    #[cfg(feature = "m5stickc")]
    let _power_hold = esp_hal::gpio::Output::new(
        peripherals.GPIO4,
        esp_hal::gpio::Level::High,
        esp_hal::gpio::OutputConfig::default(),
    );

    #[cfg(feature = "m5stickc")]
    {
        spawner
            .spawn(display::display_task(
                peripherals.SPI2,
                peripherals.GPIO15,
                peripherals.GPIO13,
                peripherals.GPIO5,
                peripherals.GPIO14,
                peripherals.GPIO12,
                peripherals.GPIO27,
            ))
            .unwrap();
        log::info!("Display task spawned");
    }

    log::info!(
        "Build target: {} (display: {})",
        if cfg!(feature = "devkit") {
            "devkit (ESP32)"
        } else if cfg!(feature = "m5stickc") {
            "m5stickc (ESP32)"
        } else {
            "unknown"
        },
        if board::HAS_DISPLAY { "yes" } else { "no" }
    );

    // ── BLE radio initialization ───────────────────────────────────────

    let connector =
        esp_radio::ble::controller::BleConnector::new(peripherals.BT, Default::default())
            .expect("BLE connector init failed");

    let controller: ExternalController<_, 20> = ExternalController::new(connector);

    static HOST_RESOURCES: StaticCell<HostResources<DefaultPacketPool, 1, 2>> = StaticCell::new();
    let resources = HOST_RESOURCES.init(HostResources::new());

    let address = Address::random([0xff, 0x8f, 0x1a, 0x05, 0xe4, 0xac]);

    let stack = trouble_host::new(controller, resources).set_random_address(address);
    let Host {
        mut peripheral,
        mut runner,
        ..
    } = stack.build();

    log::info!("BLE radio initialized");

    let server = ProbeServer::new_with_config(GapConfig::Peripheral(PeripheralConfig {
        name: comm::BLE_ADV_NAME,
        appearance: &appearance::UNKNOWN,
    }))
    .expect("GATT server init failed");

    // ── BLE orchestration ──────────────────────────────────────────────
    //
    // Two concurrent futures via join:
    //   1. BLE stack runner (drives HCI)
    //   2. GATT server (advertise, accept connections, send notifications)

    let _ = embassy_futures::join::join(
        async {
            loop {
                if let Err(e) = runner.run().await {
                    log::error!("BLE runner error: {:?}", e);
                    Timer::after(Duration::from_secs(1)).await;
                }
            }
        },
        async {
            loop {
                let mut adv_data = [0u8; 31];
                let adv_len = match AdStructure::encode_slice(
                    &[
                        AdStructure::Flags(LE_GENERAL_DISCOVERABLE | BR_EDR_NOT_SUPPORTED),
                        AdStructure::CompleteLocalName(comm::BLE_ADV_NAME.as_bytes()),
                    ],
                    &mut adv_data[..],
                ) {
                    Ok(len) => len,
                    Err(e) => {
                        log::error!("Ad encode error: {:?}", e);
                        Timer::after(Duration::from_secs(5)).await;
                        continue;
                    }
                };

                let advertiser = match peripheral
                    .advertise(
                        &Default::default(),
                        Advertisement::ConnectableScannableUndirected {
                            adv_data: &adv_data[..adv_len],
                            scan_data: &[],
                        },
                    )
                    .await
                {
                    Ok(adv) => adv,
                    Err(e) => {
                        log::error!("BLE advertise error: {:?}", e);
                        Timer::after(Duration::from_secs(5)).await;
                        continue;
                    }
                };

                log::info!("BLE advertising as '{}'", comm::BLE_ADV_NAME);

                let conn = match advertiser.accept().await {
                    Ok(c) => c,
                    Err(e) => {
                        log::error!("BLE accept error: {:?}", e);
                        continue;
                    }
                };

                let gatt_conn = match conn.with_attribute_server(&server) {
                    Ok(gc) => gc,
                    Err(e) => {
                        log::error!("GATT setup error: {:?}", e);
                        continue;
                    }
                };

                log::info!("BLE client connected");
                BLE_CLIENTS.fetch_add(1, Ordering::Relaxed);

                handle_gatt_connection(&gatt_conn, &server).await;

                BLE_CLIENTS.fetch_sub(1, Ordering::Relaxed);
                log::info!("BLE client disconnected, re-advertising");
            }
        },
    )
    .await;
}

/// Handle a GATT connection: bring the client up to date with the current
/// TX value, forward scan progress and NDJSON messages as notifications,
/// and turn RX writes into host commands.
async fn handle_gatt_connection<'s, P: PacketPool>(
    conn: &GattConnection<'_, 's, P>,
    server: &'s ProbeServer<'_>,
) {
    let notify_rx = NOTIFY_CHANNEL.receiver();
    let ble_rx = BLE_OUTPUT_CHANNEL.receiver();
    let mut line_reader = LineReader::new();

    // Anything queued from an earlier connection is superseded by TX_VALUE
    NOTIFY_CHANNEL.clear();
    BLE_OUTPUT_CHANNEL.clear();
    let current = critical_section::with(|cs| TX_VALUE.borrow(cs).get()).get();
    if let Some(payload) = current {
        if server.probe_service.tx.notify(conn, &payload).await.is_err() {
            return;
        }
    }

    loop {
        match select3(notify_rx.receive(), ble_rx.receive(), conn.next()).await {
            Either3::First(payload) => {
                if server
                    .probe_service
                    .tx
                    .notify(conn, &payload)
                    .await
                    .is_err()
                {
                    return;
                }
            }
            Either3::Second(msg) => {
                // Chunk the NDJSON message into notification-sized pieces,
                // newline padded so the companion parser sees empty lines.
                for chunk in msg.chunks(BLE_MAX_NOTIFY) {
                    let mut padded = [b'\n'; BLE_MAX_NOTIFY];
                    padded[..chunk.len()].copy_from_slice(chunk);
                    if server
                        .probe_service
                        .tx
                        .notify(conn, &padded)
                        .await
                        .is_err()
                    {
                        return;
                    }
                }
            }
            Either3::Third(event) => match event {
                GattConnectionEvent::Disconnected { .. } => return,
                GattConnectionEvent::Gatt { event } => {
                    if let GattEvent::Write(ref write_event) = event {
                        if write_event.handle() == server.probe_service.rx.handle {
                            for &byte in write_event.data() {
                                if let Some(line) = line_reader.feed(byte) {
                                    match comm::parse_command(line) {
                                        Some(cmd) => {
                                            let _ = CMD_CHANNEL.try_send(cmd);
                                        }
                                        None => log::warn!("Unrecognized command line"),
                                    }
                                }
                            }
                        }
                    }
                    // Must accept/reply to all GATT events
                    if let Ok(reply) = event.accept() {
                        reply.send().await;
                    }
                }
                _ => {}
            },
        }
    }
}

/// Scan tick task: advances the scan once per tick interval.
#[embassy_executor::task]
async fn scan_tick_task() {
    log::info!("Scan tick task started");

    let mut transmitter = SerialIrBridge;
    let mut notifier = BleNotifier;

    loop {
        let config = get_scan_config();

        let outcome = SESSION
            .lock()
            .await
            .tick(&CATALOG, &mut transmitter, &mut notifier, &config);

        if outcome == TickOutcome::Exhausted {
            send_message(&DeviceMessage::Exhausted {
                total: CATALOG.count(),
            });
        }

        Timer::after(Duration::from_millis(config.tick_interval_ms)).await;
    }
}

/// Serial output task: logs NDJSON messages to the console, where the IR
/// encoder and any host tooling pick them up.
#[embassy_executor::task]
async fn output_serial_task() {
    log::info!("Serial output task started");

    let output_rx = OUTPUT_CHANNEL.receiver();

    loop {
        let msg = output_rx.receive().await;

        if BLE_CLIENTS.load(Ordering::Relaxed) > 0 {
            let _ = BLE_OUTPUT_CHANNEL.try_send(msg.clone());
        }

        if let Ok(s) = core::str::from_utf8(&msg) {
            log::info!("{}", s.trim_end());
        }
    }
}

/// Periodic status reporting task
#[embassy_executor::task]
async fn status_task() {
    loop {
        Timer::after(Duration::from_secs(30)).await;
        send_status().await;
    }
}

/// Host command processing task: applies operator commands to the
/// session and config, responds to status requests.
#[embassy_executor::task]
async fn command_task() {
    let cmd_rx = CMD_CHANNEL.receiver();

    loop {
        let cmd = cmd_rx.receive().await;

        let reply = {
            let mut session = SESSION.lock().await;
            let mut config = get_scan_config();
            let reply = comm::handle_command(&cmd, &mut session, &mut config, &CATALOG);
            critical_section::with(|cs| SCAN_CONFIG.borrow(cs).set(config));
            reply
        };

        match cmd {
            // The previous scan's last payload no longer applies
            HostCommand::Start => critical_section::with(|cs| {
                TX_VALUE.borrow(cs).set(TxValue::new());
            }),
            HostCommand::GetStatus => send_status().await,
            _ => {}
        }

        if let Some(msg) = reply {
            send_message(&msg);
        }
    }
}

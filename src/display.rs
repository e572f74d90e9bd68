/// Display driver for M5StickC Plus2 (ST7789V2, 135x240, SPI).
///
/// Shows the operator which protocol is under test and whether the probe
/// is waiting for a verdict. Refreshes every 250ms via direct SPI writes
/// (no framebuffer, the 64KB required would exceed ESP32's heap).

use core::fmt::Write;
use core::sync::atomic::Ordering;

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use esp_hal::spi::Mode;
use esp_hal::time::Rate;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, ColorOrder, Orientation, Rotation};
use mipidsi::Builder;

use embassy_time::{Duration, Timer};

use crate::board;
use crate::protocol::VERSION;
use crate::scan::ScanState;
use crate::ScanSnapshot;

/// Landscape width after 90-degree rotation
const W: i32 = board::DISPLAY_HEIGHT as i32;

/// Colors
const BG: Rgb565 = Rgb565::BLACK;
const HEADER_BG: Rgb565 = Rgb565::new(2, 4, 12);
const TEXT: Rgb565 = Rgb565::WHITE;
const ACCENT: Rgb565 = Rgb565::new(0, 50, 0);
const DIM: Rgb565 = Rgb565::new(12, 24, 12);

#[embassy_executor::task]
pub async fn display_task(
    spi2: esp_hal::peripherals::SPI2<'static>,
    mosi: esp_hal::peripherals::GPIO15<'static>,
    clk: esp_hal::peripherals::GPIO13<'static>,
    cs_pin: esp_hal::peripherals::GPIO5<'static>,
    dc_pin: esp_hal::peripherals::GPIO14<'static>,
    rst_pin: esp_hal::peripherals::GPIO12<'static>,
    bl_pin: esp_hal::peripherals::GPIO27<'static>,
) {
    let _bl = Output::new(bl_pin, Level::High, OutputConfig::default());

    let spi_config = SpiConfig::default()
        .with_frequency(Rate::from_mhz(board::DISPLAY_SPI_FREQ_MHZ))
        .with_mode(Mode::_0);
    let spi = match Spi::new(spi2, spi_config) {
        Ok(spi) => spi.with_sck(clk).with_mosi(mosi),
        Err(e) => {
            log::error!("Display SPI init failed: {:?}", e);
            return;
        }
    };

    let cs = Output::new(cs_pin, Level::High, OutputConfig::default());
    let Ok(spi_device) = ExclusiveDevice::new_no_delay(spi, cs) else {
        log::error!("Display SPI device init failed");
        return;
    };

    let dc = Output::new(dc_pin, Level::Low, OutputConfig::default());
    let mut buffer = [0u8; 512];
    let di = SpiInterface::new(spi_device, dc, &mut buffer);

    // ST7789V2, 135x240 panel, driven in landscape
    let rst = Output::new(rst_pin, Level::High, OutputConfig::default());
    let mut delay = Delay::new();
    let mut display = match Builder::new(ST7789, di)
        .display_size(board::DISPLAY_WIDTH, board::DISPLAY_HEIGHT)
        .display_offset(52, 40)
        .invert_colors(ColorInversion::Inverted)
        .color_order(ColorOrder::Bgr)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .reset_pin(rst)
        .init(&mut delay)
    {
        Ok(display) => display,
        Err(_) => {
            log::error!("Display init failed");
            return;
        }
    };

    log::info!("Display initialized (240x135 landscape)");

    draw_splash(&mut display);
    Timer::after(Duration::from_secs(2)).await;

    loop {
        let snapshot = crate::scan_snapshot().await;
        draw_status(&mut display, &snapshot);
        Timer::after(Duration::from_millis(250)).await;
    }
}

fn draw_splash(display: &mut impl DrawTarget<Color = Rgb565>) {
    let _ = display.clear(BG);

    let style = MonoTextStyle::new(&FONT_6X10, TEXT);
    let accent = MonoTextStyle::new(&FONT_6X10, ACCENT);

    // "AC PROBE" is 8 chars × 6px = 48px
    let _ = Text::new("AC PROBE", Point::new((W - 48) / 2, 55), style).draw(display);

    let mut ver = heapless::String::<20>::new();
    let _ = write!(ver, "v{}", VERSION);
    let vw = ver.len() as i32 * 6;
    let _ = Text::new(&ver, Point::new((W - vw) / 2, 70), accent).draw(display);

    let tag = "IR Protocol Finder";
    let tw = tag.len() as i32 * 6;
    let _ = Text::new(tag, Point::new((W - tw) / 2, 95), MonoTextStyle::new(&FONT_6X10, DIM)).draw(display);
}

fn draw_status(display: &mut impl DrawTarget<Color = Rgb565>, snapshot: &ScanSnapshot) {
    let _ = display.clear(BG);

    let white = MonoTextStyle::new(&FONT_6X10, TEXT);
    let dim = MonoTextStyle::new(&FONT_6X10, DIM);

    let total = crate::protocol_count();

    // ── Header bar ──────────────────────────────────────────────────────
    let _ = Rectangle::new(Point::zero(), Size::new(W as u32, 14))
        .into_styled(PrimitiveStyle::with_fill(HEADER_BG))
        .draw(display);

    let mut header = heapless::String::<40>::new();
    let _ = write!(header, " AC PROBE v{}", VERSION);
    let _ = Text::new(&header, Point::new(0, 10), white).draw(display);

    let (indicator, color) = match snapshot.state {
        ScanState::Idle => ("[IDLE]", DIM),
        ScanState::Seeking => ("[SCAN]", Rgb565::GREEN),
        ScanState::Pending => ("[WAIT]", Rgb565::YELLOW),
        ScanState::Finished => ("[DONE]", Rgb565::RED),
        ScanState::Matched(_) => ("[FOUND]", Rgb565::CYAN),
    };
    let _ = Text::new(
        indicator,
        Point::new(W - 6 * indicator.len() as i32 - 2, 10),
        MonoTextStyle::new(&FONT_6X10, color),
    )
    .draw(display);

    // ── Protocol under test ─────────────────────────────────────────────
    let big = MonoTextStyle::new(&FONT_10X20, color);
    match (snapshot.state, snapshot.last) {
        (ScanState::Finished, _) => {
            let _ = Text::new(" No match", Point::new(0, 40), big).draw(display);
        }
        (_, Some(id)) => {
            let mut name = heapless::String::<24>::new();
            let _ = write!(name, " {}", crate::protocol_name(id));
            let _ = Text::new(&name, Point::new(0, 40), big).draw(display);
        }
        (_, None) => {
            let _ = Text::new(" ---", Point::new(0, 40), MonoTextStyle::new(&FONT_10X20, DIM)).draw(display);
        }
    }

    let prompt = match snapshot.state {
        ScanState::Pending => " Did the unit respond? yes / no",
        ScanState::Matched(_) => " Protocol found",
        ScanState::Idle => " Send 'start' to begin",
        _ => "",
    };
    let _ = Text::new(prompt, Point::new(0, 56), white).draw(display);

    // ── Divider ─────────────────────────────────────────────────────────
    let _ = Rectangle::new(Point::new(0, 64), Size::new(W as u32, 1))
        .into_styled(PrimitiveStyle::with_fill(DIM))
        .draw(display);

    // ── Progress ────────────────────────────────────────────────────────
    let shown = snapshot.next.saturating_sub(1).min(total);
    let mut progress = heapless::String::<40>::new();
    let _ = write!(progress, " Protocol {} / {}", shown, total);
    let _ = Text::new(&progress, Point::new(0, 80), dim).draw(display);

    // Progress bar
    let bar_w = (W - 12) as u32;
    let filled = if total == 0 { 0 } else { bar_w * shown as u32 / total as u32 };
    let _ = Rectangle::new(Point::new(6, 88), Size::new(bar_w, 6))
        .into_styled(PrimitiveStyle::with_fill(HEADER_BG))
        .draw(display);
    let _ = Rectangle::new(Point::new(6, 88), Size::new(filled, 6))
        .into_styled(PrimitiveStyle::with_fill(ACCENT))
        .draw(display);

    // ── Status info ─────────────────────────────────────────────────────
    let ble_clients = crate::BLE_CLIENTS.load(Ordering::Relaxed);
    let mut status = heapless::String::<40>::new();
    let _ = write!(status, " BLE: {} client{}",
        ble_clients, if ble_clients == 1 { "" } else { "s" });
    let _ = Text::new(&status, Point::new(0, 110), dim).draw(display);
}

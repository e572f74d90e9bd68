/// Hardware abstraction for supported boards.
///
/// Each board module defines display geometry and capabilities
/// selected at compile time via feature flags.

#[cfg(feature = "board-devkit")]
mod hw {
    pub const HAS_DISPLAY: bool = false;
    pub const BOARD_NAME: &str = "esp32_devkitc";
}

#[cfg(feature = "board-m5stickc")]
mod hw {
    pub const HAS_DISPLAY: bool = true;
    pub const DISPLAY_WIDTH: u16 = 135;
    pub const DISPLAY_HEIGHT: u16 = 240;
    pub const DISPLAY_SPI_FREQ_MHZ: u32 = 40;
    pub const BOARD_NAME: &str = "m5stickc_plus2";
}

#[cfg(not(any(feature = "board-devkit", feature = "board-m5stickc")))]
mod hw {
    pub const HAS_DISPLAY: bool = false;
    pub const BOARD_NAME: &str = "unknown";
}

pub use hw::*;

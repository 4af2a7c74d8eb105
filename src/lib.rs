//! Button-driven OLED status display for a headless single-board computer.
//!
//! A fixed-rate control loop samples one push-button, renders one of several
//! info screens to a 128x32 SSD1306 panel, and triggers host power actions
//! on long button holds:
//!
//! - tap: wake the display (it blanks after 15 s of inactivity)
//! - hold 3 s: release reboots the host
//! - hold 6 s: release shuts the host down
//!
//! While awake, the display cycles between a network screen (hostname, IP)
//! and a performance screen (CPU/RAM/DISK percentages), re-fetching the data
//! for the visible screen twice a second.
//!
//! # Architecture
//!
//! Each tick runs four units in strict order over one shared [`state::AppState`]:
//!
//! ```text
//! button sample -> [input] -> [refresh] -> [render] -> [oled] flush
//! ```
//!
//! The logic modules are pure over `AppState` and host-testable; `main.rs`
//! owns the hardware (GPIO button, I2C display), the signal handling, and
//! the tick timing.

// Configuration and shared state
pub mod config;
pub mod state;

// Tick phases
pub mod input;
pub mod refresh;
pub mod render;

// Rendering support
pub mod screens;
pub mod styles;
pub mod widgets;

// External collaborators
pub mod button;
pub mod oled;
pub mod power;
pub mod stats;

//! Tab switcher domain
//!
//! Contains:
//! - `tab` - fixed tab labels and the `Tab` value type
//! - `pane` - content panes, one per tab
//! - `menu` - optional secondary menus attached to some panes
//! - `config` - startup configuration of the switcher
//! - `controller` - `TabController`, the selection state machine

pub mod config;
pub mod controller;
pub mod menu;
pub mod pane;
pub mod tab;

pub use config::{DefaultSelection, LogLevel, TabsConfig};
pub use controller::{SelectionState, TabController};
pub use menu::SecondaryMenu;
pub use pane::Pane;
pub use tab::{Tab, TAB_LABELS};

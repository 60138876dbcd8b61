//! Tab switcher views
//!
//! Contains:
//! - `switcher` - `<select>` with one option per tab
//! - `pane` - content panes, hidden unless their tab is selected
//! - `menu` - secondary menu rendered inside a pane

pub mod menu;
pub mod pane;
pub mod switcher;

pub use menu::PaneMenu;
pub use pane::{TabPane, TabPanes};
pub use switcher::TabSwitcher;

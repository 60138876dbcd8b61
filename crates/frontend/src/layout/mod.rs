pub mod tabs;
pub mod tabs_context;

pub use tabs_context::{use_tabs, TabsContext};

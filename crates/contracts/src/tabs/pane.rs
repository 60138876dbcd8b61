use super::menu::SecondaryMenu;
use super::tab::Tab;

/// Content block shown or hidden together with its tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pane {
    /// DOM id of the pane, same as the tab label.
    pub id: String,
    pub content: String,
    pub visible: bool,
    pub menu: Option<SecondaryMenu>,
}

impl Pane {
    /// Creates the hidden pane for `tab`, with its secondary menu when `with_menu` is set.
    pub fn for_tab(tab: &Tab, with_menu: bool) -> Self {
        Self {
            id: tab.label.clone(),
            content: format!("Hello {}", tab.label),
            visible: false,
            menu: if with_menu {
                SecondaryMenu::for_label(&tab.label)
            } else {
                None
            },
        }
    }
}

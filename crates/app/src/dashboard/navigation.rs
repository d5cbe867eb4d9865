//! Tab and building selection.

use crate::domain::buildings::records::BuildingUuid;

/// Top-level dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Buildings list and building detail.
    #[default]
    Properties,

    /// People list.
    People,
}

/// Which tab is active and which building, if any, is being inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigation {
    tab: Tab,
    selected_building: Option<BuildingUuid>,
}

impl Navigation {
    /// The active tab.
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// The building shown in detail, if any.
    pub fn selected_building(&self) -> Option<BuildingUuid> {
        self.selected_building
    }

    /// Switching tabs always returns to the list.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.selected_building = None;
    }

    /// Show `building` in detail on the properties tab.
    pub fn select_building(&mut self, building: BuildingUuid) {
        self.tab = Tab::Properties;
        self.selected_building = Some(building);
    }

    /// Leave the building detail for the list.
    pub fn back(&mut self) {
        self.selected_building = None;
    }

    /// The logo: properties list with nothing selected.
    pub fn home(&mut self) {
        self.select_tab(Tab::Properties);
    }
}

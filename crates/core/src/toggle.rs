//! Open/closed widgets: nav menu, dropdown, results modal, page sections.

/// Where a click landed relative to a disclosure widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Trigger,
    Inside,
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    pub const fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Trigger toggles, a click elsewhere closes, a click inside is ignored.
    pub fn click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Trigger => self.toggle(),
            ClickTarget::Inside => {}
            ClickTarget::Outside => self.close(),
        }
    }

    /// Collapsible menus reset once the layout is wide enough to show them
    /// inline.
    pub fn on_resize(&mut self, wide_layout: bool) {
        if wide_layout {
            self.close();
        }
    }
}

/// Top-level page sections reachable from the nav menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Dashboard,
    TopLocations,
    Map,
    Trends,
    Search,
}

impl Section {
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::TopLocations,
        Self::Map,
        Self::Trends,
        Self::Search,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::TopLocations => "Top Locations",
            Self::Map => "Map",
            Self::Trends => "Trends",
            Self::Search => "Search",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_toggles_and_outside_closes() {
        let mut dropdown = Disclosure::default();

        dropdown.click(ClickTarget::Trigger);
        assert!(dropdown.is_open());

        dropdown.click(ClickTarget::Inside);
        assert!(dropdown.is_open());

        dropdown.click(ClickTarget::Outside);
        assert!(!dropdown.is_open());

        dropdown.click(ClickTarget::Trigger);
        dropdown.click(ClickTarget::Trigger);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn wide_resize_collapses_menu() {
        let mut menu = Disclosure::default();
        menu.open();
        menu.on_resize(false);
        assert!(menu.is_open());
        menu.on_resize(true);
        assert!(!menu.is_open());
    }

    #[test]
    fn section_indices_are_stable() {
        for section in Section::ALL {
            assert_eq!(Section::from_index(section.index()), Some(section));
        }
        assert_eq!(Section::from_index(9), None);
    }
}

use std::{fmt, str::FromStr};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown menu item: {0}")]
pub struct UnknownMenuItem(pub String);

/// Sidebar destinations. Only [`MenuItem::LabRecipe`] has a real page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuItem {
    #[default]
    LabRecipe,
    Inventory,
    Reports,
    Settings,
    Users,
    Help,
}

impl MenuItem {
    pub const ALL: [MenuItem; 6] = [
        MenuItem::LabRecipe,
        MenuItem::Inventory,
        MenuItem::Reports,
        MenuItem::Settings,
        MenuItem::Users,
        MenuItem::Help,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::LabRecipe => "Lab Recipe",
            Self::Inventory => "Inventory",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
            Self::Users => "Users",
            Self::Help => "Help",
        }
    }

    /// Body text of the pages that are not built yet.
    pub fn placeholder(self) -> String {
        format!("{} Content", self.label())
    }
}

impl fmt::Display for MenuItem {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-insensitive; spaces, dashes and underscores are ignored, so
/// `"Lab Recipe"`, `"lab-recipe"` and `"labrecipe"` all parse.
impl FromStr for MenuItem {
    type Err = UnknownMenuItem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|item| item.label().replace(' ', "").to_lowercase() == key)
            .ok_or_else(|| UnknownMenuItem(s.to_string()))
    }
}

/// Collapsible side menu.
#[derive(Debug, Clone)]
pub struct Sidebar {
    is_open: bool,
    active: MenuItem,
    breakpoint: u32,
}

impl Sidebar {
    /// Starts closed with Lab Recipe active. Viewports narrower than
    /// `breakpoint` pixels close the menu after a pick.
    pub fn new(breakpoint: u32) -> Self {
        Self {
            is_open: false,
            active: MenuItem::default(),
            breakpoint,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn active(&self) -> MenuItem {
        self.active
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn select(
        &mut self,
        item: MenuItem,
        viewport_width: u32,
    ) {
        debug!(%item, viewport_width, "menu item selected");
        self.active = item;
        if viewport_width < self.breakpoint {
            self.is_open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // MenuItem
    // =========================================================================

    #[test]
    fn parses_labels_loosely() {
        assert_eq!("Lab Recipe".parse::<MenuItem>().unwrap(), MenuItem::LabRecipe);
        assert_eq!("lab-recipe".parse::<MenuItem>().unwrap(), MenuItem::LabRecipe);
        assert_eq!("HELP".parse::<MenuItem>().unwrap(), MenuItem::Help);
        assert_eq!(
            "Billing".parse::<MenuItem>().unwrap_err(),
            UnknownMenuItem("Billing".to_string())
        );
    }

    #[test]
    fn placeholder_names_the_page() {
        assert_eq!(MenuItem::Inventory.placeholder(), "Inventory Content");
    }

    // =========================================================================
    // Sidebar
    // =========================================================================

    #[test]
    fn starts_closed_on_lab_recipe() {
        let sidebar = Sidebar::new(768);

        assert!(!sidebar.is_open());
        assert_eq!(sidebar.active(), MenuItem::LabRecipe);
    }

    #[test]
    fn toggle_flips_open_state() {
        let mut sidebar = Sidebar::new(768);

        sidebar.toggle();
        assert!(sidebar.is_open());
        sidebar.toggle();
        assert!(!sidebar.is_open());
    }

    #[test]
    fn narrow_viewport_closes_after_select() {
        let mut sidebar = Sidebar::new(768);
        sidebar.toggle();

        sidebar.select(MenuItem::Reports, 767);

        assert_eq!(sidebar.active(), MenuItem::Reports);
        assert!(!sidebar.is_open());
    }

    #[test]
    fn wide_viewport_stays_open() {
        let mut sidebar = Sidebar::new(768);
        sidebar.toggle();

        sidebar.select(MenuItem::Users, 768);

        assert_eq!(sidebar.active(), MenuItem::Users);
        assert!(sidebar.is_open());
    }
}

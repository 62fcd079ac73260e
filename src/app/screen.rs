// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::ui::navbar::NavTarget;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Recipes,
    Settings,
}

impl Screen {
    /// The drawer link that corresponds to this screen.
    #[must_use]
    pub fn nav_target(self) -> NavTarget {
        match self {
            Screen::Home => NavTarget::Home,
            Screen::Recipes => NavTarget::Recipes,
            Screen::Settings => NavTarget::Settings,
        }
    }
}

impl From<NavTarget> for Screen {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Home => Screen::Home,
            NavTarget::Recipes => Screen::Recipes,
            NavTarget::Settings => Screen::Settings,
        }
    }
}

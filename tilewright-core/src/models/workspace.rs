use super::{Directions, Location, Manager, Role, WindowHandle, Xyhw};
use crate::config::Config;
use crate::layouts::{self, Arrangement, Layout};
use crate::utils::helpers::relative_index;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A layout together with the manager it lays out.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Tiling {
    pub layout: Layout,
    pub manager: Manager,
}

/// Tiling context of one desktop on one screen.
#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct Workspace {
    pub location: Location,
    pub tilings: Vec<Tiling>,
    active: usize,
    pub enabled: bool,
}

impl fmt::Debug for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Workspace {{ location: {}, layout: {}, enabled: {} }}",
            self.location,
            self.layout(),
            self.enabled
        )
    }
}

impl Workspace {
    #[must_use]
    pub fn new(location: Location, config: &impl Config) -> Self {
        let mut layouts = config.layouts();
        if layouts.is_empty() {
            layouts = Layout::ALL.to_vec();
        }
        let initial = config.initial_layout();
        let active = layouts.iter().position(|l| *l == initial).unwrap_or_default();
        let tilings = layouts
            .into_iter()
            .map(|layout| Tiling {
                layout,
                manager: Manager::new(config),
            })
            .collect();
        Self {
            location,
            tilings,
            active,
            enabled: config.tiling_enabled(),
        }
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.tilings[self.active].layout
    }

    #[must_use]
    pub fn manager(&self) -> &Manager {
        &self.tilings[self.active].manager
    }

    pub fn manager_mut(&mut self) -> &mut Manager {
        &mut self.tilings[self.active].manager
    }

    /// Activate `layout`. Returns false if it is not available here.
    pub fn set_layout(&mut self, layout: Layout) -> bool {
        match self.tilings.iter().position(|t| t.layout == layout) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    /// Move `step` layouts forward, wrapping around.
    pub fn cycle_layout(&mut self, step: i32) -> Layout {
        if let Some(active) = relative_index(self.tilings.len(), self.active, step) {
            self.active = active;
        }
        self.layout()
    }

    #[must_use]
    pub fn contains(&self, handle: WindowHandle) -> bool {
        self.manager().contains(handle)
    }

    /// Role of a client in every layout, in layout order.
    #[must_use]
    pub fn roles(&self, handle: WindowHandle) -> Vec<Option<Role>> {
        self.tilings.iter().map(|t| t.manager.role(handle)).collect()
    }

    pub fn add_client(&mut self, handle: WindowHandle, stacking: &[WindowHandle]) -> bool {
        self.tilings
            .iter_mut()
            .fold(false, |added, t| t.manager.add(handle, stacking) || added)
    }

    /// Add a client keeping the role it had in each layout elsewhere.
    pub fn add_client_with_roles(
        &mut self,
        handle: WindowHandle,
        roles: &[Option<Role>],
        stacking: &[WindowHandle],
    ) -> bool {
        let mut added = false;
        for (index, tiling) in self.tilings.iter_mut().enumerate() {
            let role = roles.get(index).copied().flatten().unwrap_or(Role::Master);
            added = tiling.manager.add_as(handle, role, stacking) || added;
        }
        added
    }

    pub fn remove_client(&mut self, handle: WindowHandle) -> bool {
        self.tilings
            .iter_mut()
            .fold(false, |removed, t| t.manager.remove(handle) || removed)
    }

    pub fn restack(&mut self, stacking: &[WindowHandle]) {
        for tiling in &mut self.tilings {
            tiling.manager.restack(stacking);
        }
    }

    #[must_use]
    pub fn arrange(&self, workarea: &Xyhw, gap: i32) -> Arrangement {
        layouts::arrange(self.layout(), self.manager(), workarea, gap)
    }

    pub fn update_proportions(
        &mut self,
        workarea: &Xyhw,
        gap: i32,
        handle: WindowHandle,
        geometry: &Xyhw,
        directions: Directions,
    ) -> bool {
        let layout = self.layout();
        layouts::update_proportions(
            layout,
            self.manager_mut(),
            workarea,
            gap,
            handle,
            geometry,
            directions,
        )
    }
}

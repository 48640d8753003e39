use super::{Location, Proportions, Role, WindowHandle, Workspace, Xyhw};
use crate::layouts::Layout;
use crate::tracker::Tracker;
use crate::{Config, WindowSystem};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClientState {
    pub handle: WindowHandle,
    pub class: String,
    pub name: String,
    pub location: Location,
    pub role: Option<Role>,
    pub geometry: Xyhw,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkspaceState {
    pub location: Location,
    pub layout: Layout,
    pub enabled: bool,
    pub masters: Vec<WindowHandle>,
    pub slaves: Vec<WindowHandle>,
    pub master_capacity: usize,
    pub slave_capacity: usize,
    pub proportions: Proportions,
}

/// Snapshot of the engine handed to observers.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TrackerState {
    pub desktop: usize,
    pub screen: usize,
    pub clients: Vec<ClientState>,
    pub workspaces: Vec<WorkspaceState>,
}

impl From<&Workspace> for WorkspaceState {
    fn from(workspace: &Workspace) -> Self {
        let manager = workspace.manager();
        Self {
            location: workspace.location,
            layout: workspace.layout(),
            enabled: workspace.enabled,
            masters: manager.masters.clients.clone(),
            slaves: manager.slaves.clients.clone(),
            master_capacity: manager.masters.capacity,
            slave_capacity: manager.slaves.capacity,
            proportions: manager.proportions.clone(),
        }
    }
}

impl<C: Config, S: WindowSystem> From<&Tracker<C, S>> for TrackerState {
    fn from(tracker: &Tracker<C, S>) -> Self {
        let mut clients: Vec<ClientState> = tracker
            .clients
            .values()
            .map(|client| ClientState {
                handle: client.handle,
                class: client.latest.class.clone(),
                name: client.latest.name.clone(),
                location: client.location,
                role: tracker
                    .workspaces
                    .get(&client.location)
                    .and_then(|w| w.manager().role(client.handle)),
                geometry: client.geometry(),
            })
            .collect();
        clients.sort_by_key(|c| c.handle);
        let workplace = tracker.workplace();
        Self {
            desktop: workplace.desktop,
            screen: workplace.screen,
            clients,
            workspaces: tracker.workspaces.values().map(WorkspaceState::from).collect(),
        }
    }
}

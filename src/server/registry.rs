use std::sync::RwLock;

use uuid::Uuid;

use crate::common::{Workspace, WorkspaceStatus};

/// In-memory workspaces, kept in creation order so list responses (and their
/// tags) are stable.
#[derive(Default)]
pub struct WorkspaceRegistry {
    workspaces: RwLock<Vec<Workspace>>,
}

impl WorkspaceRegistry {

    pub fn list(&self) -> Vec<Workspace> {
        match self.workspaces.read() {
            Ok(workspaces) => workspaces.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn get(&self, id: &str) -> Option<Workspace> {
        let workspaces = match self.workspaces.read() {
            Ok(workspaces) => workspaces,
            Err(poisoned) => poisoned.into_inner(),
        };
        workspaces.iter().find(|w| w.id == id).cloned()
    }

    pub fn create(&self, name: String) -> Workspace {
        let workspace = Workspace {
            id: Uuid::new_v4().to_string(),
            name,
            status: WorkspaceStatus::Stopped,
            created: chrono::Utc::now().to_rfc3339(),
        };
        let mut workspaces = match self.workspaces.write() {
            Ok(workspaces) => workspaces,
            Err(poisoned) => poisoned.into_inner(),
        };
        workspaces.push(workspace.clone());
        workspace
    }

    pub fn set_status(&self, id: &str, status: WorkspaceStatus) -> Option<Workspace> {
        let mut workspaces = match self.workspaces.write() {
            Ok(workspaces) => workspaces,
            Err(poisoned) => poisoned.into_inner(),
        };
        let workspace = workspaces.iter_mut().find(|w| w.id == id)?;
        workspace.status = status;
        Some(workspace.clone())
    }
}


use std::fmt;
use serde::{Deserialize, Serialize};

pub fn print_banner(mode: &str) {
    // We don't need this as a constant because it will be shown only once.
    let banner: &str = "\n\n\
\x20   ___ _____            \n\
\x20  | __|_   _|_ _  __ _  \n\
\x20  | _|  | |/ _` |/ _` | \n\
\x20  |___| |_|\\__,_|\\__, | \n\
\x20                 |___/  \n\
\x20  ======================\n";
    println!("{}\x20  Mode: {}\n\n", banner, mode);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkspaceStatus {
    Stopped,
    Running,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub status: WorkspaceStatus,
    pub created: String,
}

#[derive(Debug, Deserialize)]
pub struct NewWorkspace {
    pub name: String,
}

impl fmt::Display for Workspace {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({}, {:?})", self.name, self.id, self.status)
    }
}

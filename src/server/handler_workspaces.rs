use actix_web::http::StatusCode;
use actix_web::{error, web, Error, Responder};
use etag_filter::{Element, Entity};
use serde_json::json;

use crate::common::{NewWorkspace, WorkspaceStatus};
use crate::server::registry::WorkspaceRegistry;
use crate::server::{MSG_MISSING_REQUIRED_FIELD, MSG_NOT_FOUND};

pub async fn list(registry: web::Data<WorkspaceRegistry>) -> Entity {
    Entity::list(registry.list().into_iter().map(Element::json))
}

pub async fn get(registry: web::Data<WorkspaceRegistry>,
                 paths: web::Path<String>) -> Result<Entity, Error> {
    let id = paths.into_inner();
    match registry.get(&id) {
        Some(workspace) => Ok(Entity::from(Element::json(workspace))),
        None => Err(error::ErrorNotFound(MSG_NOT_FOUND)),
    }
}

pub async fn create(registry: web::Data<WorkspaceRegistry>,
                    body: web::Json<NewWorkspace>) -> Result<impl Responder, Error> {
    let name = body.into_inner().name;
    if name.trim().is_empty() {
        return Err(error::ErrorBadRequest(MSG_MISSING_REQUIRED_FIELD));
    }
    let workspace = registry.create(name);
    log::info!("Created workspace {}", workspace);
    Ok(Entity::from(Element::json(workspace))
        .customize()
        .with_status(StatusCode::CREATED))
}

pub async fn start(registry: web::Data<WorkspaceRegistry>,
                   paths: web::Path<String>) -> Result<Entity, Error> {
    change_status(&registry, &paths.into_inner(), WorkspaceStatus::Running)
}

pub async fn stop(registry: web::Data<WorkspaceRegistry>,
                  paths: web::Path<String>) -> Result<Entity, Error> {
    change_status(&registry, &paths.into_inner(), WorkspaceStatus::Stopped)
}

fn change_status(
    registry: &WorkspaceRegistry,
    id: &str,
    status: WorkspaceStatus,
) -> Result<Entity, Error> {
    let workspace = registry
        .set_status(id, status)
        .ok_or_else(|| error::ErrorNotFound(MSG_NOT_FOUND))?;
    log::info!("Workspace {} is now {:?}", workspace.id, workspace.status);
    Ok(Entity::from(Element::json(workspace)))
}

/// Free-form attributes, assembled ad hoc; these responses are never tagged.
pub async fn attributes(registry: web::Data<WorkspaceRegistry>,
                        paths: web::Path<String>) -> Result<Entity, Error> {
    let id = paths.into_inner();
    let workspace = registry
        .get(&id)
        .ok_or_else(|| error::ErrorNotFound(MSG_NOT_FOUND))?;
    Ok(Entity::from(json!({
        "id": workspace.id,
        "status": workspace.status,
        "created": workspace.created,
    })))
}

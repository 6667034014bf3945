
use actix_web::{error, Error};
use etag_filter::{Element, Entity};

use crate::server::MSG_SOMETHING_WRONG;

pub async fn handle() -> Result<Entity, Error> {
    // already JSON text, hashed and written as-is
    let version = serde_json::to_string(env!("CARGO_PKG_VERSION"))
        .map_err(|_| error::ErrorInternalServerError(MSG_SOMETHING_WRONG))?;
    Ok(Entity::from(Element::text(version)))
}

use rocket::get;

use super::*;

pub(super) fn parse_bbox(bbox: Option<&str>) -> result::Result<Option<MapBbox>, ApiError> {
    let Some(bbox) = bbox.filter(|s| !s.trim().is_empty()) else {
        return Ok(None);
    };
    let bbox = bbox
        .parse::<MapBbox>()
        .map_err(|err| {
            debug!("Invalid bbox '{bbox}': {err}");
            usecases::Error::Bbox
        })?;
    if !bbox.is_valid() {
        return Err(usecases::Error::Bbox.into());
    }
    Ok(Some(bbox))
}

#[get("/tags")]
pub fn get_tags(db: &State<Connections>, _access: PublicAccess) -> Result<Vec<String>> {
    Ok(Json(usecases::load_tags(&db.shared()?)?))
}

/// Fallback for clients that are not built with a key of their own.
#[get("/config/maps")]
pub fn get_maps_config(cfg: &State<Cfg>, _access: PublicAccess) -> Json<json::MapsConfig> {
    Json(json::MapsConfig {
        api_key: cfg.maps_api_key.clone(),
    })
}

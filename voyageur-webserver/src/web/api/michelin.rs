use rocket::{get, post};

use super::{util::parse_bbox, *};

#[post("/michelin/sync")]
pub async fn post_sync(
    db: &State<Connections>,
    guide: &State<Guide>,
    account: Account,
) -> Result<json::GuideSyncReport> {
    usecases::authorize_editor(&db.shared()?, account.id())?;
    let report = flows::sync_guide_ratings(db, &***guide).await?;
    info!(
        "Guide sync by {}: {} seen, {} matched, {} updated",
        account.id(),
        report.seen,
        report.matched,
        report.updated
    );
    Ok(Json(to_json::guide_sync_report(report)))
}

#[post("/michelin/discover-place-ids")]
pub async fn post_discover_place_ids(
    db: &State<Connections>,
    places: &State<Places>,
    account: Account,
) -> Result<json::PlaceIdDiscoveryReport> {
    usecases::authorize_editor(&db.shared()?, account.id())?;
    let report = flows::discover_place_ids(db, &***places).await?;
    Ok(Json(to_json::place_id_discovery_report(report)))
}

#[get("/michelin/rating?<name>&<lat>&<lng>")]
pub async fn get_rating(
    guide: &State<Guide>,
    _access: PublicAccess,
    name: &str,
    lat: f64,
    lng: f64,
) -> Result<Option<json::GuideRestaurant>> {
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(usecases::Error::Position)?;
    let restaurant = flows::guide_rating(&***guide, name, pos).await?;
    Ok(Json(restaurant.map(Into::into)))
}

#[get("/michelin/restaurants?<bbox>")]
pub async fn get_restaurants(
    guide: &State<Guide>,
    _access: PublicAccess,
    bbox: Option<&str>,
) -> Result<Vec<json::GuideRestaurant>> {
    let bbox = parse_bbox(bbox)?;
    let restaurants = flows::guide_restaurants(&***guide, bbox.as_ref()).await?;
    Ok(Json(restaurants.into_iter().map(Into::into).collect()))
}

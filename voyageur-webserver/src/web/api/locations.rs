use rocket::{delete, get, post, put};

use super::*;

#[get("/locations")]
pub fn get_locations(db: &State<Connections>, _access: PublicAccess) -> Result<Vec<json::Location>> {
    let locations = usecases::load_locations(&db.shared()?)?;
    Ok(Json(locations.into_iter().map(Into::into).collect()))
}

#[get("/locations/tag/<tag>")]
pub fn get_locations_by_tag(
    db: &State<Connections>,
    _access: PublicAccess,
    tag: &str,
) -> Result<Vec<json::Location>> {
    let locations = usecases::load_locations_by_tag(&db.shared()?, tag)?;
    Ok(Json(locations.into_iter().map(Into::into).collect()))
}

#[post("/locations", format = "application/json", data = "<body>")]
pub fn post_location(
    db: &State<Connections>,
    account: Account,
    body: JsonResult<json::NewLocation>,
) -> Result<json::Location> {
    let new_location = from_json::new_location(body?.into_inner());
    let location = flows::create_location(db, account.id(), new_location)?;
    Ok(Json(location.into()))
}

#[put("/locations/<id>", format = "application/json", data = "<body>")]
pub fn put_location(
    db: &State<Connections>,
    account: Account,
    id: &str,
    body: JsonResult<json::NewLocation>,
) -> Result<json::Location> {
    let update = from_json::new_location(body?.into_inner());
    let location = flows::update_location(db, account.id(), id, update)?;
    Ok(Json(location.into()))
}

#[delete("/locations/<id>")]
pub fn delete_location(db: &State<Connections>, account: Account, id: &str) -> Result<()> {
    flows::delete_location(db, account.id(), id)?;
    Ok(Json(()))
}

#[put("/locations/<id>/rating", format = "application/json", data = "<body>")]
pub fn put_editorial_rating(
    db: &State<Connections>,
    account: Account,
    id: &str,
    body: JsonResult<json::EditorialRating>,
) -> Result<()> {
    let json::EditorialRating { score } = body?.into_inner();
    flows::set_editorial_score(db, account.id(), id, score)?;
    Ok(Json(()))
}

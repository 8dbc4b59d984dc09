use rocket::{get, post};

use super::*;

#[get("/ratings/<id>")]
pub fn get_personal_rating(
    db: &State<Connections>,
    account: Account,
    id: &str,
) -> Result<Option<json::PersonalRating>> {
    let db = db.shared()?;
    let user = usecases::authorize_user(&db, account.id())?;
    let rating = usecases::load_personal_rating(&db, &user, id)?;
    Ok(Json(rating.map(Into::into)))
}

#[post("/ratings/<id>", format = "application/json", data = "<body>")]
pub fn post_personal_rating(
    db: &State<Connections>,
    account: Account,
    id: &str,
    body: JsonResult<json::NewPersonalRating>,
) -> Result<json::PersonalRating> {
    let json::NewPersonalRating { value } = body?.into_inner();
    let rating = flows::rate_location(db, account.id(), id, value)?;
    Ok(Json(rating.into()))
}

#[get("/ratings/<id>/count")]
pub fn get_community_rating(
    db: &State<Connections>,
    _access: PublicAccess,
    id: &str,
) -> Result<json::CommunityRating> {
    let db = db.shared()?;
    // unknown locations are reported as such instead of an empty rating
    db.get_location(id)?;
    let rating = usecases::load_community_rating(&db, id)?;
    Ok(Json(rating.into()))
}

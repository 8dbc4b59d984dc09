use rocket::{delete, get, post};

use super::*;

fn load_list(
    connections: &Connections,
    account: &Account,
    list: UserListKind,
) -> Result<Vec<json::Location>> {
    let db = connections.shared()?;
    let user = usecases::authorize_user(&db, account.id())?;
    let locations = usecases::load_user_list(&db, &user, list)?;
    Ok(Json(locations.into_iter().map(Into::into).collect()))
}

fn add_to_list(
    connections: &Connections,
    account: &Account,
    list: UserListKind,
    location_id: &str,
) -> Result<()> {
    let db = connections.exclusive()?;
    let user = usecases::authorize_user(&db, account.id())?;
    usecases::add_to_user_list(&db, &user, list, location_id)?;
    Ok(Json(()))
}

fn remove_from_list(
    connections: &Connections,
    account: &Account,
    list: UserListKind,
    location_id: &str,
) -> Result<()> {
    let db = connections.exclusive()?;
    let user = usecases::authorize_user(&db, account.id())?;
    usecases::remove_from_user_list(&db, &user, list, location_id)?;
    Ok(Json(()))
}

#[get("/favorites")]
pub fn get_favorites(db: &State<Connections>, account: Account) -> Result<Vec<json::Location>> {
    load_list(db, &account, UserListKind::Favorite)
}

#[post("/favorites/<id>")]
pub fn post_favorite(db: &State<Connections>, account: Account, id: &str) -> Result<()> {
    add_to_list(db, &account, UserListKind::Favorite, id)
}

#[delete("/favorites/<id>")]
pub fn delete_favorite(db: &State<Connections>, account: Account, id: &str) -> Result<()> {
    remove_from_list(db, &account, UserListKind::Favorite, id)
}

#[get("/want-to-go")]
pub fn get_want_to_go(db: &State<Connections>, account: Account) -> Result<Vec<json::Location>> {
    load_list(db, &account, UserListKind::WantToGo)
}

#[post("/want-to-go/<id>")]
pub fn post_want_to_go(db: &State<Connections>, account: Account, id: &str) -> Result<()> {
    add_to_list(db, &account, UserListKind::WantToGo, id)
}

#[delete("/want-to-go/<id>")]
pub fn delete_want_to_go(db: &State<Connections>, account: Account, id: &str) -> Result<()> {
    remove_from_list(db, &account, UserListKind::WantToGo, id)
}

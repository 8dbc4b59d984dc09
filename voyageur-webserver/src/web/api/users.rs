use rocket::{get, post, put};

use super::*;

fn new_user(account: &Account, display_name: Option<String>) -> usecases::NewUser {
    usecases::NewUser {
        id: account.id().into(),
        email: account.email().unwrap_or_default().to_owned(),
        display_name,
    }
}

#[get("/user")]
pub fn get_current_user(db: &State<Connections>, account: Account) -> Result<json::User> {
    let user = usecases::authorize_user(&db.shared()?, account.id())?;
    Ok(Json(user.into()))
}

#[get("/user/role")]
pub fn get_current_role(db: &State<Connections>, account: Account) -> Result<json::UserRole> {
    let user = usecases::authorize_user(&db.shared()?, account.id())?;
    Ok(Json(user.role.into()))
}

#[get("/admin/users")]
pub fn get_users(db: &State<Connections>, account: Account) -> Result<Vec<json::User>> {
    let db = db.shared()?;
    usecases::authorize_editor(&db, account.id())?;
    let users = usecases::load_users(&db)?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

#[put("/admin/users/<id>/role", format = "application/json", data = "<body>")]
pub fn put_user_role(
    db: &State<Connections>,
    account: Account,
    id: &str,
    body: JsonResult<json::RoleChange>,
) -> Result<json::User> {
    let json::RoleChange { role } = body?.into_inner();
    let user = flows::change_user_role(db, account.id(), id, role.into())?;
    Ok(Json(user.into()))
}

#[post("/signup", format = "application/json", data = "<body>")]
pub fn post_signup(
    db: &State<Connections>,
    account: Account,
    body: JsonResult<json::SignUp>,
) -> Result<json::User> {
    let json::SignUp { display_name } = body?.into_inner();
    let user = usecases::register_user(&db.exclusive()?, new_user(&account, display_name))?;
    info!("Registered new user {}", user.id);
    Ok(Json(user.into()))
}

#[post("/create-oauth-user")]
pub fn post_create_oauth_user(db: &State<Connections>, account: Account) -> Result<json::User> {
    let user = usecases::get_or_register_user(&db.exclusive()?, new_user(&account, None))?;
    Ok(Json(user.into()))
}

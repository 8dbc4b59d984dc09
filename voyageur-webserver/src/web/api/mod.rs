use std::{fmt::Display, result};

use rocket::{
    self, catch, catchers,
    http::Status,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Catcher, Request, Route, State,
};
use voyageur_application::{error::AppError, prelude as flows};
use voyageur_db_sqlite::Connections;

use super::{guards::*, Cfg};
use crate::{
    adapters::json::{self, from_json, to_json},
    core::{prelude::*, usecases},
};

mod error;
mod locations;
mod michelin;
mod places;
mod ratings;
mod user_lists;
mod users;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   locations   --- //
        locations::get_locations,
        locations::get_locations_by_tag,
        locations::post_location,
        locations::put_location,
        locations::delete_location,
        locations::put_editorial_rating,
        // ---   ratings   --- //
        ratings::get_personal_rating,
        ratings::post_personal_rating,
        ratings::get_community_rating,
        // ---   user lists   --- //
        user_lists::get_favorites,
        user_lists::post_favorite,
        user_lists::delete_favorite,
        user_lists::get_want_to_go,
        user_lists::post_want_to_go,
        user_lists::delete_want_to_go,
        // ---   users   --- //
        users::get_current_user,
        users::get_current_role,
        users::get_users,
        users::put_user_role,
        users::post_signup,
        users::post_create_oauth_user,
        // ---   places   --- //
        places::get_place_details,
        places::get_search,
        // ---   michelin   --- //
        michelin::post_sync,
        michelin::post_discover_place_ids,
        michelin::get_rating,
        michelin::get_restaurants,
        // ---   util   --- //
        util::get_tags,
        util::get_maps_config,
    ]
}

pub fn catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}

#[catch(default)]
fn default_catcher(status: Status, _: &Request) -> Json<json::Error> {
    Json(json::Error {
        http_status: status.code,
        message: status.reason_lossy().to_owned(),
    })
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = json::Error {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

use std::ops::Deref;

use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};
use voyageur_application::error::AppError;
use voyageur_core::{
    gateways::{guide::GuideGateway, places::PlacesGateway},
    usecases::Error as ParameterError,
};

use super::{jwt, Cfg};

pub const API_KEY_HEADER: &str = "apikey";

type Result<T> = std::result::Result<T, AppError>;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    auth_header_val
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[derive(Debug)]
pub struct Auth {
    claims: Option<jwt::Claims>,
    api_key: Option<String>,
}

impl Auth {
    pub fn claims(&self) -> Result<&jwt::Claims> {
        self.claims
            .as_ref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    fn claims_from_header(request: &Request, jwt_state: &jwt::JwtState) -> Option<jwt::Claims> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .find_map(|token| {
                jwt_state
                    .validate_token(token)
                    .inspect_err(|err| debug!("Rejecting bearer token: {err}"))
                    .ok()
            })
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let jwt_state = try_outcome!(request.guard::<&State<jwt::JwtState>>().await);
        let claims = Self::claims_from_header(request, jwt_state);
        let api_key = request
            .headers()
            .get_one(API_KEY_HEADER)
            .map(ToOwned::to_owned);
        Outcome::Success(Self { claims, api_key })
    }
}

/// A request with a valid bearer token.
#[derive(Debug)]
pub struct Account(jwt::Claims);

impl Account {
    pub fn id(&self) -> &str {
        &self.0.sub
    }

    pub fn email(&self) -> Option<&str> {
        self.0.email.as_deref()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.claims() {
            Ok(claims) => Outcome::Success(Account(claims.clone())),
            _ => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

/// Access to public reads.
///
/// If an anonymous key is configured, the request has to carry
/// either that key or a valid bearer token.
#[derive(Debug)]
pub struct PublicAccess;

#[rocket::async_trait]
impl<'r> FromRequest<'r> for PublicAccess {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let cfg = try_outcome!(request.guard::<&State<Cfg>>().await);
        let Some(anon_key) = &cfg.anon_key else {
            return Outcome::Success(PublicAccess);
        };
        let auth = try_outcome!(Auth::from_request(request).await);
        if auth.claims.is_some() || auth.api_key.as_ref() == Some(anon_key) {
            Outcome::Success(PublicAccess)
        } else {
            Outcome::Error((Status::Unauthorized, ()))
        }
    }
}

pub struct Places(pub Box<dyn PlacesGateway>);

impl Deref for Places {
    type Target = dyn PlacesGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub struct Guide(pub Box<dyn GuideGateway>);

impl Deref for Guide {
    type Target = dyn GuideGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

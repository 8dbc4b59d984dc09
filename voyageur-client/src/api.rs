use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    bbox_string, into_json, is_unauthorized,
    json::{
        CommunityRating, EditorialRating, GuideRestaurant, GuideSyncReport, Location, MapBbox,
        MapsConfig, NewLocation, NewPersonalRating, PersonalRating, PlaceDetails,
        PlaceIdDiscoveryReport, RoleChange, SignUp, Suggestion, User, UserRole,
    },
    Credential, Error, Result, Session,
};

/// Name of the header that carries the publishable key.
pub const API_KEY_HEADER: &str = "apikey";

/// Whether a request may go out without a user session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Public,
    Private,
}

/// Le Voyageur API
#[derive(Clone)]
pub struct VoyageurApi {
    url: String,
    anon_key: Option<String>,
    client: Client,
    session: Arc<Session>,
}

impl VoyageurApi {
    #[must_use]
    pub fn new(url: impl Into<String>, session: Arc<Session>) -> Self {
        let url = url.into().trim_end_matches('/').to_owned();
        Self {
            url,
            anon_key: None,
            client: Client::new(),
            session,
        }
    }

    #[must_use]
    pub fn with_anon_key(mut self, anon_key: impl Into<String>) -> Self {
        self.anon_key = Some(anon_key.into());
        self
    }

    #[must_use]
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.url)
    }

    async fn authorize(&self, req: RequestBuilder, access: Access) -> Result<RequestBuilder> {
        let credential: Option<Credential> = self.session.credential().await;
        match (credential, access) {
            (Some(credential), _) => Ok(req.header("Authorization", credential.auth_header_value())),
            (None, Access::Public) => Ok(match &self.anon_key {
                Some(key) => req.header(API_KEY_HEADER, key),
                None => req,
            }),
            (None, Access::Private) => Err(Error::Unauthenticated),
        }
    }

    fn require_editor(&self) -> Result<()> {
        if self.session.is_editor() {
            Ok(())
        } else {
            Err(Error::Forbidden)
        }
    }

    async fn send<T>(&self, req: RequestBuilder, access: Access) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.authorize(req, access).await?.send().await?;
        if is_unauthorized(&response) {
            self.session.force_sign_out();
            return Err(Error::Unauthenticated);
        }
        into_json(response).await
    }

    async fn send_json<D, T>(&self, req: RequestBuilder, data: &D, access: Access) -> Result<T>
    where
        T: DeserializeOwned,
        D: Serialize,
    {
        self.send(req.json(data), access).await
    }

    // ---   locations   --- //

    pub async fn locations(&self) -> Result<Vec<Location>> {
        let req = self.client.get(self.url("/locations"));
        self.send(req, Access::Public).await
    }

    pub async fn locations_by_tag(&self, tag: &str) -> Result<Vec<Location>> {
        let encoded_tag = utf8_percent_encode(tag, NON_ALPHANUMERIC);
        let req = self
            .client
            .get(self.url(&format!("/locations/tag/{encoded_tag}")));
        self.send(req, Access::Public).await
    }

    pub async fn create_location(&self, new_location: &NewLocation) -> Result<Location> {
        self.require_editor()?;
        let req = self.client.post(self.url("/locations"));
        self.send_json(req, new_location, Access::Private).await
    }

    pub async fn update_location(&self, id: &str, location: &NewLocation) -> Result<Location> {
        self.require_editor()?;
        let req = self.client.put(self.url(&format!("/locations/{id}")));
        self.send_json(req, location, Access::Private).await
    }

    pub async fn delete_location(&self, id: &str) -> Result<()> {
        self.require_editor()?;
        let req = self.client.delete(self.url(&format!("/locations/{id}")));
        self.send(req, Access::Private).await
    }

    pub async fn set_editorial_score(&self, id: &str, score: Option<f64>) -> Result<()> {
        self.require_editor()?;
        let req = self.client.put(self.url(&format!("/locations/{id}/rating")));
        self.send_json(req, &EditorialRating { score }, Access::Private)
            .await
    }

    // ---   ratings   --- //

    pub async fn personal_rating(&self, id: &str) -> Result<Option<PersonalRating>> {
        let req = self.client.get(self.url(&format!("/ratings/{id}")));
        self.send(req, Access::Private).await
    }

    pub async fn rate_location(&self, id: &str, value: u8) -> Result<PersonalRating> {
        let req = self.client.post(self.url(&format!("/ratings/{id}")));
        self.send_json(req, &NewPersonalRating { value }, Access::Private)
            .await
    }

    pub async fn community_rating(&self, id: &str) -> Result<CommunityRating> {
        let req = self.client.get(self.url(&format!("/ratings/{id}/count")));
        self.send(req, Access::Public).await
    }

    // ---   user lists   --- //

    pub async fn favorites(&self) -> Result<Vec<Location>> {
        let req = self.client.get(self.url("/favorites"));
        self.send(req, Access::Private).await
    }

    pub async fn add_favorite(&self, id: &str) -> Result<()> {
        let req = self.client.post(self.url(&format!("/favorites/{id}")));
        self.send(req, Access::Private).await
    }

    pub async fn remove_favorite(&self, id: &str) -> Result<()> {
        let req = self.client.delete(self.url(&format!("/favorites/{id}")));
        self.send(req, Access::Private).await
    }

    pub async fn want_to_go(&self) -> Result<Vec<Location>> {
        let req = self.client.get(self.url("/want-to-go"));
        self.send(req, Access::Private).await
    }

    pub async fn add_want_to_go(&self, id: &str) -> Result<()> {
        let req = self.client.post(self.url(&format!("/want-to-go/{id}")));
        self.send(req, Access::Private).await
    }

    pub async fn remove_want_to_go(&self, id: &str) -> Result<()> {
        let req = self.client.delete(self.url(&format!("/want-to-go/{id}")));
        self.send(req, Access::Private).await
    }

    // ---   users   --- //

    /// Loads the profile and caches its role for client-side checks.
    pub async fn current_user(&self) -> Result<User> {
        let req = self.client.get(self.url("/user"));
        let user: User = self.send(req, Access::Private).await?;
        self.session.cache_role(user.role);
        Ok(user)
    }

    pub async fn current_role(&self) -> Result<UserRole> {
        let req = self.client.get(self.url("/user/role"));
        let role = self.send(req, Access::Private).await?;
        self.session.cache_role(role);
        Ok(role)
    }

    pub async fn users(&self) -> Result<Vec<User>> {
        self.require_editor()?;
        let req = self.client.get(self.url("/admin/users"));
        self.send(req, Access::Private).await
    }

    pub async fn change_user_role(&self, user_id: &str, role: UserRole) -> Result<User> {
        self.require_editor()?;
        let req = self
            .client
            .put(self.url(&format!("/admin/users/{user_id}/role")));
        self.send_json(req, &RoleChange { role }, Access::Private)
            .await
    }

    pub async fn sign_up(&self, display_name: Option<String>) -> Result<User> {
        let req = self.client.post(self.url("/signup"));
        let user: User = self
            .send_json(req, &SignUp { display_name }, Access::Private)
            .await?;
        self.session.cache_role(user.role);
        Ok(user)
    }

    pub async fn create_oauth_user(&self) -> Result<User> {
        let req = self.client.post(self.url("/create-oauth-user"));
        let user: User = self.send(req, Access::Private).await?;
        self.session.cache_role(user.role);
        Ok(user)
    }

    // ---   places   --- //

    pub async fn tags(&self) -> Result<Vec<String>> {
        let req = self.client.get(self.url("/tags"));
        self.send(req, Access::Public).await
    }

    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetails> {
        let encoded_id = utf8_percent_encode(place_id, NON_ALPHANUMERIC);
        let req = self
            .client
            .get(self.url(&format!("/google/place/{encoded_id}")));
        self.send(req, Access::Public).await
    }

    pub async fn search(&self, text: &str, bbox: Option<&MapBbox>) -> Result<Vec<Suggestion>> {
        let mut query = vec![("text", text.to_owned())];
        if let Some(bbox) = bbox {
            query.push(("bbox", bbox_string(bbox)));
        }
        let req = self.client.get(self.url("/search")).query(&query);
        self.send(req, Access::Public).await
    }

    pub async fn maps_config(&self) -> Result<MapsConfig> {
        let req = self.client.get(self.url("/config/maps"));
        self.send(req, Access::Public).await
    }

    // ---   dining guide   --- //

    pub async fn sync_guide_ratings(&self) -> Result<GuideSyncReport> {
        self.require_editor()?;
        let req = self.client.post(self.url("/michelin/sync"));
        self.send(req, Access::Private).await
    }

    pub async fn discover_place_ids(&self) -> Result<PlaceIdDiscoveryReport> {
        self.require_editor()?;
        let req = self.client.post(self.url("/michelin/discover-place-ids"));
        self.send(req, Access::Private).await
    }

    pub async fn guide_rating(
        &self,
        name: &str,
        lat: f64,
        lng: f64,
    ) -> Result<Option<GuideRestaurant>> {
        let query = [
            ("name", name.to_owned()),
            ("lat", lat.to_string()),
            ("lng", lng.to_string()),
        ];
        let req = self.client.get(self.url("/michelin/rating")).query(&query);
        self.send(req, Access::Public).await
    }

    pub async fn guide_restaurants(&self, bbox: Option<&MapBbox>) -> Result<Vec<GuideRestaurant>> {
        let mut req = self.client.get(self.url("/michelin/restaurants"));
        if let Some(bbox) = bbox {
            req = req.query(&[("bbox", bbox_string(bbox))]);
        }
        self.send(req, Access::Public).await
    }
}

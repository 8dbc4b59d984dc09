use super::schema::*;

#[derive(Queryable)]
pub struct LocationEntity {
    pub id: String,
    pub created_at: i64,
    pub created_by: Option<String>,
    pub name: String,
    pub description: String,
    pub kind: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub address: Option<String>,
    pub editorial_score: Option<f64>,
    pub external_rating: Option<f64>,
    pub external_review_count: Option<i64>,
    pub guide_award: Option<String>,
    pub place_id: Option<String>,
    pub guide_id: Option<String>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = locations)]
#[diesel(treat_none_as_null = true)]
pub struct NewLocation<'a> {
    pub id: &'a str,
    pub created_at: i64,
    pub created_by: Option<&'a str>,
    pub name: &'a str,
    pub description: &'a str,
    pub kind: Option<&'a str>,
    pub lat: f64,
    pub lng: f64,
    pub address: Option<&'a str>,
    pub editorial_score: Option<f64>,
    pub external_rating: Option<f64>,
    pub external_review_count: Option<i64>,
    pub guide_award: Option<&'a str>,
    pub place_id: Option<&'a str>,
    pub guide_id: Option<&'a str>,
}

#[derive(Queryable, Insertable)]
#[diesel(table_name = location_tag)]
pub struct LocationTag {
    pub location_id: String,
    pub tag: String,
}

#[derive(Queryable, Insertable)]
#[diesel(table_name = tags)]
pub struct Tag {
    pub id: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub display_name: Option<&'a str>,
    pub role: i16,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub role: i16,
    pub created_at: i64,
}

#[derive(Queryable, Insertable)]
#[diesel(table_name = personal_rating)]
pub struct PersonalRating {
    pub location_id: String,
    pub user_id: String,
    pub value: i16,
    pub created_at: i64,
}

#[derive(Queryable, Insertable)]
#[diesel(table_name = user_list_entry)]
pub struct UserListEntry {
    pub user_id: String,
    pub list: String,
    pub location_id: String,
    pub created_at: i64,
}

///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> Text,
        email -> Text,
        display_name -> Nullable<Text>,
        role -> SmallInt,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Tags
///////////////////////////////////////////////////////////////////////

table! {
    tags (id) {
        id -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Locations
///////////////////////////////////////////////////////////////////////

table! {
    locations (id) {
        id -> Text,
        created_at -> BigInt,
        created_by -> Nullable<Text>,
        name -> Text,
        description -> Text,
        kind -> Nullable<Text>,
        lat -> Double,
        lng -> Double,
        address -> Nullable<Text>,
        editorial_score -> Nullable<Double>,
        external_rating -> Nullable<Double>,
        external_review_count -> Nullable<BigInt>,
        guide_award -> Nullable<Text>,
        place_id -> Nullable<Text>,
        guide_id -> Nullable<Text>,
    }
}

table! {
    location_tag (location_id, tag) {
        location_id -> Text,
        tag -> Text,
    }
}

joinable!(location_tag -> locations (location_id));

///////////////////////////////////////////////////////////////////////
// Personal ratings & lists
///////////////////////////////////////////////////////////////////////

table! {
    personal_rating (location_id, user_id) {
        location_id -> Text,
        user_id -> Text,
        value -> SmallInt,
        created_at -> BigInt,
    }
}

joinable!(personal_rating -> locations (location_id));
joinable!(personal_rating -> users (user_id));

table! {
    user_list_entry (user_id, list, location_id) {
        user_id -> Text,
        list -> Text,
        location_id -> Text,
        created_at -> BigInt,
    }
}

joinable!(user_list_entry -> locations (location_id));
joinable!(user_list_entry -> users (user_id));

allow_tables_to_appear_in_same_query!(
    users,
    tags,
    locations,
    location_tag,
    personal_rating,
    user_list_entry,
);

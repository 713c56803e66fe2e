use magnet_client_core::Maybe;
use serde::{Deserialize, Serialize};

/// A registered account.
///
/// The server never returns the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier.
    pub id: i64,
    /// Contact email, unique.
    pub email: String,
    /// Login name, unique.
    pub username: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub full_name: Maybe<String>,
    /// Whether the account is locked.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub disabled: Maybe<bool>,
    /// Whether the account is active.
    pub is_active: bool,
    /// Owned items.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub items: Maybe<Vec<Item>>,
}

/// An item owned by a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identifier.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Free text description.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub description: Maybe<String>,
    /// Identifier of the owning user.
    pub owner_id: i64,
}

#[cfg(test)]
mod tests {
    use magnet_client_core::{DecodeError, Dto};
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;

    #[rstest]
    #[case::minimal(json!({"id": 1, "email": "a@b.c", "username": "a", "is_active": true}))]
    #[case::null_optionals(json!({
        "id": 1,
        "email": "a@b.c",
        "username": "a",
        "full_name": null,
        "disabled": null,
        "is_active": true,
        "items": null
    }))]
    #[case::full(json!({
        "id": 1,
        "email": "a@b.c",
        "username": "a",
        "full_name": "A",
        "disabled": false,
        "is_active": true,
        "items": [
            {"id": 3, "title": "pen", "owner_id": 1},
            {"id": 4, "title": "ink", "description": null, "owner_id": 1},
            {"id": 5, "title": "pad", "description": "A5", "owner_id": 1}
        ]
    }))]
    fn should_keep_user_json_identity(#[case] value: Value) {
        let user = User::from_json(value.clone()).expect("valid user").expect("not null");

        assert_eq!(user.to_json().expect("json"), value);
    }

    #[rstest]
    #[case::missing(json!({"id": 3, "title": "pen", "owner_id": 1}))]
    #[case::null(json!({"id": 3, "title": "pen", "description": null, "owner_id": 1}))]
    #[case::value(json!({"id": 3, "title": "pen", "description": "blue", "owner_id": 1}))]
    fn should_keep_item_json_identity(#[case] value: Value) {
        let item = Item::from_json(value.clone()).expect("valid item").expect("not null");

        assert_eq!(item.to_json().expect("json"), value);
    }

    #[test]
    fn should_tell_missing_items_from_null() {
        let base = json!({"id": 1, "email": "a@b.c", "username": "a", "is_active": true});
        let mut with_null = base.clone();
        with_null["items"] = Value::Null;

        let missing = User::from_json(base).expect("valid").expect("not null");
        let null = User::from_json(with_null).expect("valid").expect("not null");

        assert!(missing.items.is_absent());
        assert!(null.items.is_null());
        insta::assert_snapshot!(missing.to_json().expect("json"), @r#"{"email":"a@b.c","id":1,"is_active":true,"username":"a"}"#);
    }

    #[test]
    fn should_read_items() {
        let value = json!({
            "id": 1,
            "email": "john@example.com",
            "username": "john",
            "is_active": true,
            "items": [{"id": 3, "title": "pen", "owner_id": 1}]
        });

        let user = User::from_json(value).expect("valid user").expect("not null");

        let items = user.items.as_option().expect("items");
        assert_eq!(items[0].title, "pen");
        assert!(items[0].description.is_absent());
    }

    #[test]
    fn should_report_missing_required_field() {
        let value = json!({"id": 1, "email": "john@example.com", "username": "john"});

        let result = User::from_json(value);

        let Err(DecodeError::Mapping { error, .. }) = result else {
            panic!("expected a mapping error");
        };
        insta::assert_snapshot!(error, @"missing field `is_active`");
    }

    #[test]
    fn should_map_null_to_none() {
        let user = User::from_json(Value::Null).expect("null is accepted");

        assert!(user.is_none());
    }
}

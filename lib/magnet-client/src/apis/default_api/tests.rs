use magnet_client_core::{ApiClient, ApiClientError, Configuration, DecodeError, RecordingTransport};
use serde_json::json;

use super::*;
use crate::models::{
    CreateTradeBot, DummyPatch, HttpValidationError, ModifyPassword, RegisterUser,
};
use crate::{
    CreateBotRequest, DeleteUserRequest, IndexScaffoldRequest, ModifyPasswordRequest,
    PatchScaffoldRequest, RegisterUserRequest, RequirementDefinitionRequest, SwitchBotRequest,
};

fn api_with(transport: &RecordingTransport, token: Option<&str>) -> DefaultApi {
    let mut builder = Configuration::builder().with_base_url("http://magnet.test/api");
    if let Some(token) = token {
        builder = builder.with_access_token(token);
    }
    let configuration = builder.build().expect("valid configuration");
    DefaultApi::new(ApiClient::with_transport(configuration, transport.clone()))
}

fn user_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "email": "john@example.com",
        "username": "john",
        "full_name": "John Doe",
        "is_active": true
    })
}

#[tokio::test]
async fn should_get_user_with_token() {
    let transport = RecordingTransport::new().respond_with_json(200, &user_json(42));
    let api = api_with(&transport, Some("tok123"));

    let user = api
        .get_user(GetUserRequest::new(42))
        .await
        .expect("user")
        .expect("not null");

    assert_eq!(user.id, 42);
    assert_eq!(user.full_name.as_option().map(String::as_str), Some("John Doe"));
    let requests = transport.requests();
    insta::assert_snapshot!(requests[0].uri, @"http://magnet.test/api/users/42");
    assert_eq!(requests[0].headers["authorization"], "tok123");
}

#[tokio::test]
async fn should_call_public_endpoint_without_token() {
    let transport = RecordingTransport::new().respond_with_json(200, &json!("Hello World"));
    let api = api_with(&transport, Some("tok123"));

    let greeting = api.root_get().await.expect("greeting");

    assert_eq!(greeting, "Hello World");
    assert!(!transport.requests()[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn should_fail_before_io_when_user_id_is_missing() {
    let transport = RecordingTransport::new();
    let api = api_with(&transport, Some("tok123"));

    let result = api.delete_user(DeleteUserRequest::default()).await;

    let Err(ApiClientError::Required(error)) = result else {
        panic!("expected a required error, got {result:?}");
    };
    insta::assert_snapshot!(error, @"Required parameter requestParameters.user_id was null or undefined when calling delete_user.");
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn should_check_login_password_before_username() {
    let transport = RecordingTransport::new();
    let api = api_with(&transport, None);

    let result = api.login_user(LoginForm::default()).await;

    let Err(ApiClientError::Required(error)) = result else {
        panic!("expected a required error");
    };
    assert_eq!(error.parameter(), "password");
    assert_eq!(error.operation(), "login_user");
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn should_login_with_form_body() {
    let transport = RecordingTransport::new()
        .respond_with_json(200, &json!({"access_token": "abc", "token_type": "bearer"}));
    let api = api_with(&transport, Some("ignored"));

    let token = api
        .login_user(LoginForm::new("john doe", "p@ss word").with_scope("me"))
        .await
        .expect("token")
        .expect("not null");

    assert_eq!(token.access_token, "abc");
    let request = &transport.requests()[0];
    assert_eq!(request.method, http::Method::POST);
    assert_eq!(
        request.headers["content-type"],
        "application/x-www-form-urlencoded"
    );
    assert!(!request.headers.contains_key("authorization"));
    insta::assert_snapshot!(request.body_text(), @"username=john+doe&password=p%40ss+word&scope=me");
}

#[tokio::test]
async fn should_send_scoped_token_on_modify_password() {
    let transport = RecordingTransport::new().respond_with_json(200, &json!(null));
    let configuration = Configuration::builder()
        .with_token_resolver(|scheme, scopes| format!("{scheme}:{}", scopes.join(" ")))
        .build()
        .expect("valid configuration");
    let api = DefaultApi::new(ApiClient::with_transport(configuration, transport.clone()));

    let request = ModifyPasswordRequest::new(ModifyPassword {
        password: "n3w".to_string(),
    });
    api.modify_password(request).await.expect("modified");

    let request = &transport.requests()[0];
    assert_eq!(request.method, http::Method::PATCH);
    assert_eq!(
        request.headers["authorization"],
        "OAuth2PasswordBearer:me me"
    );
    insta::assert_snapshot!(request.body_text(), @r#"{"password":"n3w"}"#);
}

#[tokio::test]
async fn should_skip_absent_query_parameters() {
    let transport = RecordingTransport::new().respond_with_json(200, &json!([]));
    let api = api_with(&transport, None);

    let request = IndexScaffoldRequest {
        limit: Some(20),
        ..IndexScaffoldRequest::default()
    };
    api.index_scaffold(request).await.expect("scaffolds");

    insta::assert_snapshot!(transport.requests()[0].uri, @"http://magnet.test/api/scaffold/?limit=20");
}

#[tokio::test]
async fn should_encode_requirement_definition_query() {
    let transport = RecordingTransport::new().respond_with_json(200, &json!({"sum": 80}));
    let api = api_with(&transport, None);

    let request = RequirementDefinitionRequest {
        domain: Some("world wide".to_string()),
        has_timezone: Some(true),
        most_old_year: Some(1900),
        etl: Some(false),
        ..RequirementDefinitionRequest::default()
    };
    let value = api.requirement_definition(request).await.expect("value");

    assert_eq!(value["sum"], 80);
    insta::assert_snapshot!(transport.requests()[0].uri, @"http://magnet.test/api/system/requirement_definition?domain=world%20wide&has_timezone=true&most_old_year=1900&etl=false");
}

#[tokio::test]
async fn should_send_python_literal_query() {
    let transport = RecordingTransport::new().respond_with_json(200, &json!("class Model"));
    let api = api_with(&transport, None);

    let request = crate::JsonToPydanticRequest {
        json: Some("{'a': 1}".to_string()),
    };
    api.json_to_pydantic(request).await.expect("model source");

    insta::assert_snapshot!(transport.requests()[0].uri, @"http://magnet.test/api/develop/json_to_pydantic?json=%7B%27a%27%3A%201%7D");
}

#[tokio::test]
async fn should_switch_bot_with_query_flag() {
    let transport = RecordingTransport::new().respond_with_json(200, &json!({"is_active": false}));
    let api = api_with(&transport, None);

    api.switch_bot(SwitchBotRequest::new(7, false))
        .await
        .expect("switched");

    let request = &transport.requests()[0];
    assert_eq!(request.method, http::Method::POST);
    insta::assert_snapshot!(request.uri, @"http://magnet.test/api/bot/profile/7/switch?is_active=false");
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn should_require_patch_body() {
    let transport = RecordingTransport::new();
    let api = api_with(&transport, None);

    let request = PatchScaffoldRequest {
        id: Some(3),
        dummy_patch: None,
    };
    let result = api.patch_scaffold(request).await;

    let Err(ApiClientError::Required(error)) = result else {
        panic!("expected a required error");
    };
    assert_eq!(error.parameter(), "dummy_patch");
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn should_send_patch_body() {
    let transport = RecordingTransport::new().respond_with_json(200, &json!({"id": 3}));
    let api = api_with(&transport, None);

    let patch = DummyPatch {
        name: "renamed".to_string().into(),
        ..DummyPatch::default()
    };
    api.patch_scaffold(PatchScaffoldRequest::new(3, patch))
        .await
        .expect("patched");

    let request = &transport.requests()[0];
    insta::assert_snapshot!(request.uri, @"http://magnet.test/api/scaffold/3/patch");
    insta::assert_snapshot!(request.body_text(), @r#"{"name":"renamed"}"#);
}

#[tokio::test]
async fn should_post_default_trade_bot() {
    let transport = RecordingTransport::new().respond_with_json(200, &json!({"id": 1}));
    let api = api_with(&transport, None);

    api.create_bot(CreateBotRequest::new(CreateTradeBot::default()))
        .await
        .expect("created");

    let request = &transport.requests()[0];
    assert_eq!(request.headers["content-type"], "application/json");
    let body: serde_json::Value = serde_json::from_slice(&request.body).expect("json body");
    assert_eq!(body["periods"], 86400.0);
    assert_eq!(body["analyzers"], json!(["t_cross"]));
}

#[tokio::test]
async fn should_decode_user_list_and_count() {
    let transport = RecordingTransport::new()
        .respond_with_json(200, &json!([user_json(1), user_json(2)]))
        .respond_with_json(200, &json!(1));
    let api = api_with(&transport, Some("tok123"));

    let users = api
        .query_user(crate::QueryUserRequest::default())
        .await
        .expect("users")
        .expect("not null");
    let deleted = api.withdraw_me().await.expect("count");

    assert_eq!(users.iter().map(|user| user.id).collect::<Vec<_>>(), [1, 2]);
    assert_eq!(deleted, 1);
    let requests = transport.requests();
    assert_eq!(requests[1].method, http::Method::DELETE);
    insta::assert_snapshot!(requests[1].uri, @"http://magnet.test/api/me/");
}

#[tokio::test]
async fn should_expose_validation_error() {
    let body = json!({
        "detail": [{"loc": ["path", "user_id"], "msg": "value is not a valid integer", "type": "type_error.integer"}]
    });
    let transport = RecordingTransport::new().respond_with_json(422, &body);
    let api = api_with(&transport, None);

    let result = api.get_user(GetUserRequest::new(1)).await;

    let Err(ApiClientError::Api(error)) = result else {
        panic!("expected an API error");
    };
    assert_eq!(error.status(), http::StatusCode::UNPROCESSABLE_ENTITY);
    let validation = error.json::<HttpValidationError>().expect("validation body");
    assert_eq!(validation.detail[0].msg, "value is not a valid integer");
}

#[tokio::test]
async fn should_report_mapping_error_on_incomplete_user() {
    let transport = RecordingTransport::new().respond_with_json(200, &json!({"id": 1}));
    let api = api_with(&transport, Some("tok123"));

    let result = api.get_me().await;

    let Err(ApiClientError::Decode(DecodeError::Mapping { error, .. })) = result else {
        panic!("expected a mapping error, got {result:?}");
    };
    insta::assert_snapshot!(error, @"missing field `email`");
}

#[tokio::test]
async fn should_read_null_me_as_none() {
    let transport = RecordingTransport::new()
        .respond_with(200, "null")
        .respond_with(200, "null")
        .respond_with(200, "null");
    let api = api_with(&transport, Some("tok123"));

    let me = api.get_me().await.expect("null me");
    let user = api.get_user(GetUserRequest::new(1)).await.expect("null user");
    let registered = api
        .register_user(RegisterUserRequest::new(RegisterUser {
            email: "john@example.com".to_string(),
            password: "s3cret".to_string(),
        }))
        .await
        .expect("null registration");

    assert_eq!(me, None);
    assert_eq!(user, None);
    assert_eq!(registered, None);
}

#[tokio::test]
async fn should_keep_raw_response_available() {
    let transport = RecordingTransport::new().respond_with(200, "not-json");
    let api = api_with(&transport, None);

    let response = api.get_capabilities_raw().await.expect("transport success");

    assert_eq!(response.raw().status(), http::StatusCode::OK);
    assert!(response.value().is_err());
    assert!(!response.is_decoded());
}

fn with_ids(path: &str) -> String {
    let mut rendered = String::new();
    let mut rest = path;
    while let Some(start) = rest.find('{') {
        let end = rest[start..].find('}').map_or(rest.len(), |end| start + end + 1);
        rendered.push_str(&rest[..start]);
        rendered.push('1');
        rest = &rest[end..];
    }
    rendered.push_str(rest);
    rendered
}

#[tokio::test]
async fn should_route_every_operation_of_the_table() {
    use crate::models::{DummyCreate, RegisterFirstAdmin};
    use crate::operations::OPERATIONS;
    use crate::{
        CopyScaffoldRequest, CreateScaffoldRequest, DealBotRequest, DeleteScaffoldRequest,
        GetBotRequest, GetScaffoldRequest, GetStatisticsRequest, JsonToPydanticRequest,
        QueryUserRequest, RegisterFirstAdminRequest,
    };

    let transport = RecordingTransport::new();
    let api = api_with(&transport, Some("tok123"));

    // Each raw call checks its decoder against the table in debug builds
    api.copy_scaffold_raw(CopyScaffoldRequest::new(1)).await.expect("copy_scaffold");
    api.create_bot_raw(CreateBotRequest::new(CreateTradeBot::default()))
        .await
        .expect("create_bot");
    api.create_scaffold_raw(CreateScaffoldRequest::new(DummyCreate::new("demo")))
        .await
        .expect("create_scaffold");
    api.deal_bot_raw(DealBotRequest::new(1)).await.expect("deal_bot");
    api.delete_scaffold_raw(DeleteScaffoldRequest::new(1))
        .await
        .expect("delete_scaffold");
    api.delete_user_raw(DeleteUserRequest::new(1)).await.expect("delete_user");
    api.get_bot_raw(GetBotRequest::new(1)).await.expect("get_bot");
    api.get_capabilities_raw().await.expect("get_capabilities");
    api.get_me_raw().await.expect("get_me");
    api.get_me_if_admin_or_power_raw()
        .await
        .expect("get_me_if_admin_or_power");
    api.get_scaffold_raw(GetScaffoldRequest::new(1)).await.expect("get_scaffold");
    api.get_statistics_raw(GetStatisticsRequest::default())
        .await
        .expect("get_statistics");
    api.get_user_raw(GetUserRequest::new(1)).await.expect("get_user");
    api.index_scaffold_raw(IndexScaffoldRequest::default())
        .await
        .expect("index_scaffold");
    api.json_to_pydantic_raw(JsonToPydanticRequest::default())
        .await
        .expect("json_to_pydantic");
    api.load_all_bot_raw().await.expect("load_all_bot");
    api.login_user_raw(LoginForm::new("john", "s3cret"))
        .await
        .expect("login_user");
    api.logout_me_raw().await.expect("logout_me");
    api.modify_password_raw(ModifyPasswordRequest::new(ModifyPassword {
        password: "n3w".to_string(),
    }))
    .await
    .expect("modify_password");
    api.patch_scaffold_raw(PatchScaffoldRequest::new(1, DummyPatch::default()))
        .await
        .expect("patch_scaffold");
    api.query_user_raw(QueryUserRequest::default()).await.expect("query_user");
    api.register_first_admin_raw(RegisterFirstAdminRequest::new(RegisterFirstAdmin {
        email: "admin@example.com".to_string(),
        password: "s3cret".to_string(),
    }))
    .await
    .expect("register_first_admin");
    api.register_user_raw(RegisterUserRequest::new(RegisterUser {
        email: "john@example.com".to_string(),
        password: "s3cret".to_string(),
    }))
    .await
    .expect("register_user");
    api.requirement_definition_raw(RequirementDefinitionRequest::default())
        .await
        .expect("requirement_definition");
    api.root_get_raw().await.expect("root_get");
    api.switch_bot_raw(SwitchBotRequest::new(1, true)).await.expect("switch_bot");
    api.withdraw_me_raw().await.expect("withdraw_me");

    let mut sent = transport
        .requests()
        .iter()
        .map(|request| {
            let path = request.uri.path().trim_start_matches("/api").to_string();
            (request.method.clone(), path)
        })
        .collect::<Vec<_>>();
    let mut declared = OPERATIONS
        .iter()
        .map(|operation| (http::Method::from(operation.method), with_ids(operation.path)))
        .collect::<Vec<_>>();
    sent.sort_by(|a, b| (a.0.as_str(), &a.1).cmp(&(b.0.as_str(), &b.1)));
    declared.sort_by(|a, b| (a.0.as_str(), &a.1).cmp(&(b.0.as_str(), &b.1)));
    assert_eq!(transport.call_count(), OPERATIONS.len());
    assert_eq!(sent, declared);
}

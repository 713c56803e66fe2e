//! Static description of every server endpoint.
//!
//! Each [`Operation`] carries the method, the path template, the required
//! parameters (checked in order before any I/O) and the security
//! requirement. [`DefaultApi`](crate::DefaultApi) builds its requests from
//! these constants.

use magnet_client_core::{HttpMethod, Operation, ResponseKind, SecurityRequirement};

/// Name of the OAuth2 password flow security scheme.
pub const SCHEME: &str = "OAuth2PasswordBearer";

/// Secured without scopes.
pub const BEARER: SecurityRequirement = SecurityRequirement::new(SCHEME, &[]);

/// Secured with the `me` scope.
// the server declares the scope twice
pub const BEARER_ME: SecurityRequirement = SecurityRequirement::new(SCHEME, &["me", "me"]);

/// `GET /`
pub const ROOT_GET: Operation = Operation {
    name: "root_get",
    method: HttpMethod::Get,
    path: "/",
    required: &[],
    security: None,
    response: ResponseKind::Json,
};

/// `POST /scaffold/{id}/copy`
pub const COPY_SCAFFOLD: Operation = Operation {
    name: "copy_scaffold",
    method: HttpMethod::Post,
    path: "/scaffold/{id}/copy",
    required: &["id"],
    security: None,
    response: ResponseKind::Json,
};

/// `POST /bot/profile`
pub const CREATE_BOT: Operation = Operation {
    name: "create_bot",
    method: HttpMethod::Post,
    path: "/bot/profile",
    required: &["create_trade_bot"],
    security: None,
    response: ResponseKind::Json,
};

/// `POST /scaffold/`
pub const CREATE_SCAFFOLD: Operation = Operation {
    name: "create_scaffold",
    method: HttpMethod::Post,
    path: "/scaffold/",
    required: &["dummy_create"],
    security: None,
    response: ResponseKind::Json,
};

/// `GET /bot/profile/{profile_id}/deal`
pub const DEAL_BOT: Operation = Operation {
    name: "deal_bot",
    method: HttpMethod::Get,
    path: "/bot/profile/{profile_id}/deal",
    required: &["profile_id"],
    security: None,
    response: ResponseKind::Json,
};

/// `DELETE /scaffold/{id}/delete`
pub const DELETE_SCAFFOLD: Operation = Operation {
    name: "delete_scaffold",
    method: HttpMethod::Delete,
    path: "/scaffold/{id}/delete",
    required: &["id"],
    security: None,
    response: ResponseKind::Json,
};

/// `DELETE /users/user/{user_id}`
pub const DELETE_USER: Operation = Operation {
    name: "delete_user",
    method: HttpMethod::Delete,
    path: "/users/user/{user_id}",
    required: &["user_id"],
    security: Some(BEARER),
    response: ResponseKind::Json,
};

/// `GET /bot/profile/{profile_id}`
pub const GET_BOT: Operation = Operation {
    name: "get_bot",
    method: HttpMethod::Get,
    path: "/bot/profile/{profile_id}",
    required: &["profile_id"],
    security: None,
    response: ResponseKind::Json,
};

/// `GET /bot/capability`
pub const GET_CAPABILITIES: Operation = Operation {
    name: "get_capabilities",
    method: HttpMethod::Get,
    path: "/bot/capability",
    required: &[],
    security: None,
    response: ResponseKind::Json,
};

/// `GET /me/admin_or_power`
pub const GET_ME_IF_ADMIN_OR_POWER: Operation = Operation {
    name: "get_me_if_admin_or_power",
    method: HttpMethod::Get,
    path: "/me/admin_or_power",
    required: &[],
    security: Some(BEARER),
    response: ResponseKind::Dto,
};

/// `GET /me/`
pub const GET_ME: Operation = Operation {
    name: "get_me",
    method: HttpMethod::Get,
    path: "/me/",
    required: &[],
    security: Some(BEARER_ME),
    response: ResponseKind::Dto,
};

/// `GET /scaffold/{id}`
pub const GET_SCAFFOLD: Operation = Operation {
    name: "get_scaffold",
    method: HttpMethod::Get,
    path: "/scaffold/{id}",
    required: &["id"],
    security: None,
    response: ResponseKind::Json,
};

/// `GET /system/statistics`
pub const GET_STATISTICS: Operation = Operation {
    name: "get_statistics",
    method: HttpMethod::Get,
    path: "/system/statistics",
    required: &[],
    security: None,
    response: ResponseKind::Json,
};

/// `GET /users/{user_id}`
pub const GET_USER: Operation = Operation {
    name: "get_user",
    method: HttpMethod::Get,
    path: "/users/{user_id}",
    required: &["user_id"],
    security: Some(BEARER),
    response: ResponseKind::Dto,
};

/// `GET /scaffold/`
pub const INDEX_SCAFFOLD: Operation = Operation {
    name: "index_scaffold",
    method: HttpMethod::Get,
    path: "/scaffold/",
    required: &[],
    security: None,
    response: ResponseKind::Json,
};

/// `POST /develop/json_to_pydantic`
pub const JSON_TO_PYDANTIC: Operation = Operation {
    name: "json_to_pydantic",
    method: HttpMethod::Post,
    path: "/develop/json_to_pydantic",
    required: &[],
    security: None,
    response: ResponseKind::Json,
};

/// `POST /bot/etl/load_all`
pub const LOAD_ALL_BOT: Operation = Operation {
    name: "load_all_bot",
    method: HttpMethod::Post,
    path: "/bot/etl/load_all",
    required: &[],
    security: None,
    response: ResponseKind::Json,
};

/// `POST /guest/login`
pub const LOGIN_USER: Operation = Operation {
    name: "login_user",
    method: HttpMethod::Post,
    path: "/guest/login",
    required: &["password", "username"],
    security: None,
    response: ResponseKind::Dto,
};

/// `POST /me/logout`
pub const LOGOUT_ME: Operation = Operation {
    name: "logout_me",
    method: HttpMethod::Post,
    path: "/me/logout",
    required: &[],
    security: Some(BEARER),
    response: ResponseKind::Json,
};

/// `PATCH /me/modify_password`
pub const MODIFY_PASSWORD: Operation = Operation {
    name: "modify_password",
    method: HttpMethod::Patch,
    path: "/me/modify_password",
    required: &["modify_password"],
    security: Some(BEARER_ME),
    response: ResponseKind::Json,
};

/// `PATCH /scaffold/{id}/patch`
pub const PATCH_SCAFFOLD: Operation = Operation {
    name: "patch_scaffold",
    method: HttpMethod::Patch,
    path: "/scaffold/{id}/patch",
    required: &["id", "dummy_patch"],
    security: None,
    response: ResponseKind::Json,
};

/// `GET /users/`
pub const QUERY_USER: Operation = Operation {
    name: "query_user",
    method: HttpMethod::Get,
    path: "/users/",
    required: &[],
    security: Some(BEARER),
    response: ResponseKind::Dto,
};

/// `POST /guest/register_first_admin`
pub const REGISTER_FIRST_ADMIN: Operation = Operation {
    name: "register_first_admin",
    method: HttpMethod::Post,
    path: "/guest/register_first_admin",
    required: &["register_first_admin"],
    security: None,
    response: ResponseKind::Dto,
};

/// `POST /guest/register`
pub const REGISTER_USER: Operation = Operation {
    name: "register_user",
    method: HttpMethod::Post,
    path: "/guest/register",
    required: &["register_user"],
    security: None,
    response: ResponseKind::Dto,
};

/// `GET /system/requirement_definition`
pub const REQUIREMENT_DEFINITION: Operation = Operation {
    name: "requirement_definition",
    method: HttpMethod::Get,
    path: "/system/requirement_definition",
    required: &[],
    security: None,
    response: ResponseKind::Json,
};

/// `POST /bot/profile/{profile_id}/switch`
pub const SWITCH_BOT: Operation = Operation {
    name: "switch_bot",
    method: HttpMethod::Post,
    path: "/bot/profile/{profile_id}/switch",
    required: &["profile_id", "is_active"],
    security: None,
    response: ResponseKind::Json,
};

/// `DELETE /me/`
pub const WITHDRAW_ME: Operation = Operation {
    name: "withdraw_me",
    method: HttpMethod::Delete,
    path: "/me/",
    required: &[],
    security: Some(BEARER_ME),
    response: ResponseKind::Json,
};

/// Every operation, sorted by name.
pub const OPERATIONS: &[Operation] = &[
    COPY_SCAFFOLD,
    CREATE_BOT,
    CREATE_SCAFFOLD,
    DEAL_BOT,
    DELETE_SCAFFOLD,
    DELETE_USER,
    GET_BOT,
    GET_CAPABILITIES,
    GET_ME,
    GET_ME_IF_ADMIN_OR_POWER,
    GET_SCAFFOLD,
    GET_STATISTICS,
    GET_USER,
    INDEX_SCAFFOLD,
    JSON_TO_PYDANTIC,
    LOAD_ALL_BOT,
    LOGIN_USER,
    LOGOUT_ME,
    MODIFY_PASSWORD,
    PATCH_SCAFFOLD,
    QUERY_USER,
    REGISTER_FIRST_ADMIN,
    REGISTER_USER,
    REQUIREMENT_DEFINITION,
    ROOT_GET,
    SWITCH_BOT,
    WITHDRAW_ME,
];

use crate::models::{
    CreateTradeBot, DummyCreate, DummyPatch, ModifyPassword, RegisterFirstAdmin, RegisterUser,
};

/// Parameters of [`DefaultApi::copy_scaffold`](crate::DefaultApi::copy_scaffold).
///
/// Required fields left `None` fail the call with a
/// [`RequiredError`](magnet_client_core::RequiredError) before any I/O.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopyScaffoldRequest {
    /// Scaffold record identifier. Required.
    pub id: Option<i64>,
}

impl CopyScaffoldRequest {
    /// Creates the parameters with every required field set.
    pub fn new(id: i64) -> Self {
        Self { id: Some(id) }
    }
}

/// Parameters of [`DefaultApi::create_bot`](crate::DefaultApi::create_bot).
///
/// Required fields left `None` fail the call with a
/// [`RequiredError`](magnet_client_core::RequiredError) before any I/O.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateBotRequest {
    /// The bot profile. Required.
    pub create_trade_bot: Option<CreateTradeBot>,
}

impl CreateBotRequest {
    /// Creates the parameters with every required field set.
    pub fn new(create_trade_bot: CreateTradeBot) -> Self {
        Self { create_trade_bot: Some(create_trade_bot) }
    }
}

/// Parameters of [`DefaultApi::create_scaffold`](crate::DefaultApi::create_scaffold).
///
/// Required fields left `None` fail the call with a
/// [`RequiredError`](magnet_client_core::RequiredError) before any I/O.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateScaffoldRequest {
    /// The record to create. Required.
    pub dummy_create: Option<DummyCreate>,
}

impl CreateScaffoldRequest {
    /// Creates the parameters with every required field set.
    pub fn new(dummy_create: DummyCreate) -> Self {
        Self { dummy_create: Some(dummy_create) }
    }
}

/// Parameters of [`DefaultApi::deal_bot`](crate::DefaultApi::deal_bot).
///
/// Required fields left `None` fail the call with a
/// [`RequiredError`](magnet_client_core::RequiredError) before any I/O.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DealBotRequest {
    /// Bot profile identifier. Required.
    pub profile_id: Option<i64>,
}

impl DealBotRequest {
    /// Creates the parameters with every required field set.
    pub fn new(profile_id: i64) -> Self {
        Self { profile_id: Some(profile_id) }
    }
}

/// Parameters of [`DefaultApi::delete_scaffold`](crate::DefaultApi::delete_scaffold).
///
/// Required fields left `None` fail the call with a
/// [`RequiredError`](magnet_client_core::RequiredError) before any I/O.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteScaffoldRequest {
    /// Scaffold record identifier. Required.
    pub id: Option<i64>,
}

impl DeleteScaffoldRequest {
    /// Creates the parameters with every required field set.
    pub fn new(id: i64) -> Self {
        Self { id: Some(id) }
    }
}

/// Parameters of [`DefaultApi::delete_user`](crate::DefaultApi::delete_user).
///
/// Required fields left `None` fail the call with a
/// [`RequiredError`](magnet_client_core::RequiredError) before any I/O.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteUserRequest {
    /// User identifier. Required.
    pub user_id: Option<i64>,
}

impl DeleteUserRequest {
    /// Creates the parameters with every required field set.
    pub fn new(user_id: i64) -> Self {
        Self { user_id: Some(user_id) }
    }
}

/// Parameters of [`DefaultApi::get_bot`](crate::DefaultApi::get_bot).
///
/// Required fields left `None` fail the call with a
/// [`RequiredError`](magnet_client_core::RequiredError) before any I/O.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetBotRequest {
    /// Bot profile identifier. Required.
    pub profile_id: Option<i64>,
}

impl GetBotRequest {
    /// Creates the parameters with every required field set.
    pub fn new(profile_id: i64) -> Self {
        Self { profile_id: Some(profile_id) }
    }
}

/// Parameters of [`DefaultApi::get_scaffold`](crate::DefaultApi::get_scaffold).
///
/// Required fields left `None` fail the call with a
/// [`RequiredError`](magnet_client_core::RequiredError) before any I/O.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetScaffoldRequest {
    /// Scaffold record identifier. Required.
    pub id: Option<i64>,
}

impl GetScaffoldRequest {
    /// Creates the parameters with every required field set.
    pub fn new(id: i64) -> Self {
        Self { id: Some(id) }
    }
}

/// Parameters of [`DefaultApi::get_statistics`](crate::DefaultApi::get_statistics).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetStatisticsRequest {
    /// Only keep allocations from modules containing this text.
    pub filter_module: Option<String>,
}

/// Parameters of [`DefaultApi::get_user`](crate::DefaultApi::get_user).
///
/// Required fields left `None` fail the call with a
/// [`RequiredError`](magnet_client_core::RequiredError) before any I/O.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetUserRequest {
    /// User identifier. Required.
    pub user_id: Option<i64>,
}

impl GetUserRequest {
    /// Creates the parameters with every required field set.
    pub fn new(user_id: i64) -> Self {
        Self { user_id: Some(user_id) }
    }
}

/// Parameters of [`DefaultApi::index_scaffold`](crate::DefaultApi::index_scaffold).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexScaffoldRequest {
    /// Index of the first entry.
    pub from: Option<i64>,
    /// Maximum number of entries.
    pub limit: Option<i64>,
}

/// Parameters of [`DefaultApi::json_to_pydantic`](crate::DefaultApi::json_to_pydantic).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonToPydanticRequest {
    /// A JSON (or hjson) document.
    pub json: Option<String>,
}

/// Parameters of [`DefaultApi::modify_password`](crate::DefaultApi::modify_password).
///
/// Required fields left `None` fail the call with a
/// [`RequiredError`](magnet_client_core::RequiredError) before any I/O.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModifyPasswordRequest {
    /// The new password. Required.
    pub modify_password: Option<ModifyPassword>,
}

impl ModifyPasswordRequest {
    /// Creates the parameters with every required field set.
    pub fn new(modify_password: ModifyPassword) -> Self {
        Self { modify_password: Some(modify_password) }
    }
}

/// Parameters of [`DefaultApi::patch_scaffold`](crate::DefaultApi::patch_scaffold).
///
/// Required fields left `None` fail the call with a
/// [`RequiredError`](magnet_client_core::RequiredError) before any I/O.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchScaffoldRequest {
    /// Scaffold record identifier. Required.
    pub id: Option<i64>,
    /// The fields to update. Required.
    pub dummy_patch: Option<DummyPatch>,
}

impl PatchScaffoldRequest {
    /// Creates the parameters with every required field set.
    pub fn new(id: i64, dummy_patch: DummyPatch) -> Self {
        Self {
            id: Some(id),
            dummy_patch: Some(dummy_patch),
        }
    }
}

/// Parameters of [`DefaultApi::query_user`](crate::DefaultApi::query_user).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryUserRequest {
    /// Index of the first entry.
    pub from: Option<i64>,
    /// Maximum number of entries.
    pub limit: Option<i64>,
}

/// Parameters of [`DefaultApi::register_first_admin`](crate::DefaultApi::register_first_admin).
///
/// Required fields left `None` fail the call with a
/// [`RequiredError`](magnet_client_core::RequiredError) before any I/O.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterFirstAdminRequest {
    /// The administrator credentials. Required.
    pub register_first_admin: Option<RegisterFirstAdmin>,
}

impl RegisterFirstAdminRequest {
    /// Creates the parameters with every required field set.
    pub fn new(register_first_admin: RegisterFirstAdmin) -> Self {
        Self { register_first_admin: Some(register_first_admin) }
    }
}

/// Parameters of [`DefaultApi::register_user`](crate::DefaultApi::register_user).
///
/// Required fields left `None` fail the call with a
/// [`RequiredError`](magnet_client_core::RequiredError) before any I/O.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterUserRequest {
    /// The user credentials. Required.
    pub register_user: Option<RegisterUser>,
}

impl RegisterUserRequest {
    /// Creates the parameters with every required field set.
    pub fn new(register_user: RegisterUser) -> Self {
        Self { register_user: Some(register_user) }
    }
}

/// Parameters of [`DefaultApi::requirement_definition`](crate::DefaultApi::requirement_definition).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequirementDefinitionRequest {
    /// `internal` or a public domain.
    pub domain: Option<String>,
    /// Handled timezone, `utc` by default.
    pub timezone: Option<String>,
    /// Whether local times are stored.
    pub has_timezone: Option<bool>,
    /// Oldest handled year.
    pub most_old_year: Option<i64>,
    /// Whether scraping is needed.
    pub scraping: Option<bool>,
    /// Whether an ETL is needed.
    pub etl: Option<bool>,
}

/// Parameters of [`DefaultApi::switch_bot`](crate::DefaultApi::switch_bot).
///
/// Required fields left `None` fail the call with a
/// [`RequiredError`](magnet_client_core::RequiredError) before any I/O.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwitchBotRequest {
    /// Bot profile identifier. Required.
    pub profile_id: Option<i64>,
    /// The new bot state. Required.
    pub is_active: Option<bool>,
}

impl SwitchBotRequest {
    /// Creates the parameters with every required field set.
    pub fn new(profile_id: i64, is_active: bool) -> Self {
        Self {
            profile_id: Some(profile_id),
            is_active: Some(is_active),
        }
    }
}

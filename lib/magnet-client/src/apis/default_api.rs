use magnet_client_core::{
    ApiClient, ApiClientError, ApiResponse, Dto, JsonDecoder, Operation, RequestDescriptor,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::requests::{
    CopyScaffoldRequest, CreateBotRequest, CreateScaffoldRequest, DealBotRequest,
    DeleteScaffoldRequest, DeleteUserRequest, GetBotRequest, GetScaffoldRequest,
    GetStatisticsRequest, GetUserRequest, IndexScaffoldRequest, JsonToPydanticRequest,
    ModifyPasswordRequest, PatchScaffoldRequest, QueryUserRequest, RegisterFirstAdminRequest,
    RegisterUserRequest, RequirementDefinitionRequest, SwitchBotRequest,
};
use crate::models::{LoginForm, Token, User};
use crate::operations;

/// A response whose body decodes as JSON into `T`.
pub type JsonResponse<T> = ApiResponse<JsonDecoder<T>>;

/// Typed access to every endpoint of the magnet API.
///
/// Each endpoint has two methods: one returning the decoded value, and a
/// `*_raw` one returning the [`ApiResponse`] so that the status and headers
/// stay available and decoding happens on demand.
///
/// Endpoints returning a model decode with [`JsonDecoder::dto`], so a `null`
/// body gives `None`.
///
/// # Example
///
/// ```rust,no_run
/// use magnet_client::{ApiClient, Configuration, DefaultApi, GetUserRequest, LoginForm};
///
/// # async fn example() -> Result<(), magnet_client::ApiClientError> {
/// let configuration = Configuration::builder()
///     .with_base_url("http://127.0.0.1:8000")
///     .build()?;
/// let api = DefaultApi::new(ApiClient::new(configuration));
/// let Some(token) = api.login_user(LoginForm::new("john", "s3cret")).await? else {
///     return Ok(());
/// };
///
/// let configuration = Configuration::builder()
///     .with_base_url("http://127.0.0.1:8000")
///     .with_access_token(token.access_token)
///     .build()?;
/// let api = DefaultApi::new(ApiClient::new(configuration));
/// let user = api.get_user(GetUserRequest::new(42)).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DefaultApi {
    client: ApiClient,
}

impl DefaultApi {
    /// Wraps a client.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// The underlying client.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    async fn send<T>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<JsonResponse<T>, ApiClientError>
    where
        T: DeserializeOwned,
    {
        self.client.call(descriptor, JsonDecoder::new()).await
    }

    async fn send_dto<T>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<JsonResponse<Option<T>>, ApiClientError>
    where
        T: Dto,
    {
        self.client.call(descriptor, JsonDecoder::dto()).await
    }

    fn value<T>(operation: &Operation, response: JsonResponse<T>) -> Result<T, ApiClientError> {
        response.into_value().map_err(|error| {
            warn!(operation = operation.name, %error, "failed to decode response");
            ApiClientError::from(error)
        })
    }

    /// Copies a scaffold record.
    ///
    /// `POST /scaffold/{id}/copy`
    pub async fn copy_scaffold(
        &self,
        request: CopyScaffoldRequest,
    ) -> Result<Value, ApiClientError> {
        let response = self.copy_scaffold_raw(request).await?;
        Self::value(&operations::COPY_SCAFFOLD, response)
    }

    /// Like [`copy_scaffold`](Self::copy_scaffold), keeping the raw response.
    pub async fn copy_scaffold_raw(
        &self,
        request: CopyScaffoldRequest,
    ) -> Result<JsonResponse<Value>, ApiClientError> {
        let descriptor = RequestDescriptor::from_operation(&operations::COPY_SCAFFOLD)
            .path_param("id", request.id);
        self.send(descriptor).await
    }

    /// Creates a trade bot profile and schedules its bot.
    ///
    /// `POST /bot/profile`
    pub async fn create_bot(&self, request: CreateBotRequest) -> Result<Value, ApiClientError> {
        let response = self.create_bot_raw(request).await?;
        Self::value(&operations::CREATE_BOT, response)
    }

    /// Like [`create_bot`](Self::create_bot), keeping the raw response.
    pub async fn create_bot_raw(
        &self,
        request: CreateBotRequest,
    ) -> Result<JsonResponse<Value>, ApiClientError> {
        let descriptor = RequestDescriptor::from_operation(&operations::CREATE_BOT)
            .json_body("create_trade_bot", request.create_trade_bot.as_ref())?;
        self.send(descriptor).await
    }

    /// Creates a scaffold record.
    ///
    /// `POST /scaffold/`
    pub async fn create_scaffold(
        &self,
        request: CreateScaffoldRequest,
    ) -> Result<Value, ApiClientError> {
        let response = self.create_scaffold_raw(request).await?;
        Self::value(&operations::CREATE_SCAFFOLD, response)
    }

    /// Like [`create_scaffold`](Self::create_scaffold), keeping the raw response.
    pub async fn create_scaffold_raw(
        &self,
        request: CreateScaffoldRequest,
    ) -> Result<JsonResponse<Value>, ApiClientError> {
        let descriptor = RequestDescriptor::from_operation(&operations::CREATE_SCAFFOLD)
            .json_body("dummy_create", request.dummy_create.as_ref())?;
        self.send(descriptor).await
    }

    /// Lets a bot trade once.
    ///
    /// `GET /bot/profile/{profile_id}/deal`
    pub async fn deal_bot(&self, request: DealBotRequest) -> Result<Value, ApiClientError> {
        let response = self.deal_bot_raw(request).await?;
        Self::value(&operations::DEAL_BOT, response)
    }

    /// Like [`deal_bot`](Self::deal_bot), keeping the raw response.
    pub async fn deal_bot_raw(
        &self,
        request: DealBotRequest,
    ) -> Result<JsonResponse<Value>, ApiClientError> {
        let descriptor = RequestDescriptor::from_operation(&operations::DEAL_BOT)
            .path_param("profile_id", request.profile_id);
        self.send(descriptor).await
    }

    /// Deletes a scaffold record.
    ///
    /// `DELETE /scaffold/{id}/delete`
    pub async fn delete_scaffold(
        &self,
        request: DeleteScaffoldRequest,
    ) -> Result<Value, ApiClientError> {
        let response = self.delete_scaffold_raw(request).await?;
        Self::value(&operations::DELETE_SCAFFOLD, response)
    }

    /// Like [`delete_scaffold`](Self::delete_scaffold), keeping the raw response.
    pub async fn delete_scaffold_raw(
        &self,
        request: DeleteScaffoldRequest,
    ) -> Result<JsonResponse<Value>, ApiClientError> {
        let descriptor = RequestDescriptor::from_operation(&operations::DELETE_SCAFFOLD)
            .path_param("id", request.id);
        self.send(descriptor).await
    }

    /// Deletes a user, returning the number of deleted rows.
    ///
    /// `DELETE /users/user/{user_id}`
    pub async fn delete_user(&self, request: DeleteUserRequest) -> Result<i64, ApiClientError> {
        let response = self.delete_user_raw(request).await?;
        Self::value(&operations::DELETE_USER, response)
    }

    /// Like [`delete_user`](Self::delete_user), keeping the raw response.
    pub async fn delete_user_raw(
        &self,
        request: DeleteUserRequest,
    ) -> Result<JsonResponse<i64>, ApiClientError> {
        let descriptor = RequestDescriptor::from_operation(&operations::DELETE_USER)
            .path_param("user_id", request.user_id);
        self.send(descriptor).await
    }

    /// Reads a trade bot profile.
    ///
    /// `GET /bot/profile/{profile_id}`
    pub async fn get_bot(&self, request: GetBotRequest) -> Result<Value, ApiClientError> {
        let response = self.get_bot_raw(request).await?;
        Self::value(&operations::GET_BOT, response)
    }

    /// Like [`get_bot`](Self::get_bot), keeping the raw response.
    pub async fn get_bot_raw(
        &self,
        request: GetBotRequest,
    ) -> Result<JsonResponse<Value>, ApiClientError> {
        let descriptor = RequestDescriptor::from_operation(&operations::GET_BOT)
            .path_param("profile_id", request.profile_id);
        self.send(descriptor).await
    }

    /// Lists the available providers, markets and analyzers.
    ///
    /// `GET /bot/capability`
    pub async fn get_capabilities(&self) -> Result<Value, ApiClientError> {
        let response = self.get_capabilities_raw().await?;
        Self::value(&operations::GET_CAPABILITIES, response)
    }

    /// Like [`get_capabilities`](Self::get_capabilities), keeping the raw response.
    pub async fn get_capabilities_raw(&self) -> Result<JsonResponse<Value>, ApiClientError> {
        self.send(RequestDescriptor::from_operation(&operations::GET_CAPABILITIES))
            .await
    }

    /// Reads the current user.
    ///
    /// `GET /me/`
    pub async fn get_me(&self) -> Result<Option<User>, ApiClientError> {
        let response = self.get_me_raw().await?;
        Self::value(&operations::GET_ME, response)
    }

    /// Like [`get_me`](Self::get_me), keeping the raw response.
    pub async fn get_me_raw(&self) -> Result<JsonResponse<Option<User>>, ApiClientError> {
        self.send_dto(RequestDescriptor::from_operation(&operations::GET_ME))
            .await
    }

    /// Reads the current user, if an administrator or power user.
    ///
    /// `GET /me/admin_or_power`
    pub async fn get_me_if_admin_or_power(&self) -> Result<Option<User>, ApiClientError> {
        let response = self.get_me_if_admin_or_power_raw().await?;
        Self::value(&operations::GET_ME_IF_ADMIN_OR_POWER, response)
    }

    /// Like [`get_me_if_admin_or_power`](Self::get_me_if_admin_or_power), keeping the raw response.
    pub async fn get_me_if_admin_or_power_raw(&self) -> Result<JsonResponse<Option<User>>, ApiClientError> {
        self.send_dto(RequestDescriptor::from_operation(&operations::GET_ME_IF_ADMIN_OR_POWER))
            .await
    }

    /// Reads a scaffold record.
    ///
    /// `GET /scaffold/{id}`
    pub async fn get_scaffold(&self, request: GetScaffoldRequest) -> Result<Value, ApiClientError> {
        let response = self.get_scaffold_raw(request).await?;
        Self::value(&operations::GET_SCAFFOLD, response)
    }

    /// Like [`get_scaffold`](Self::get_scaffold), keeping the raw response.
    pub async fn get_scaffold_raw(
        &self,
        request: GetScaffoldRequest,
    ) -> Result<JsonResponse<Value>, ApiClientError> {
        let descriptor = RequestDescriptor::from_operation(&operations::GET_SCAFFOLD)
            .path_param("id", request.id);
        self.send(descriptor).await
    }

    /// Reads the server memory statistics.
    ///
    /// `GET /system/statistics`
    pub async fn get_statistics(
        &self,
        request: GetStatisticsRequest,
    ) -> Result<Value, ApiClientError> {
        let response = self.get_statistics_raw(request).await?;
        Self::value(&operations::GET_STATISTICS, response)
    }

    /// Like [`get_statistics`](Self::get_statistics), keeping the raw response.
    pub async fn get_statistics_raw(
        &self,
        request: GetStatisticsRequest,
    ) -> Result<JsonResponse<Value>, ApiClientError> {
        let descriptor = RequestDescriptor::from_operation(&operations::GET_STATISTICS)
            .query_param("filter_module", request.filter_module);
        self.send(descriptor).await
    }

    /// Reads a user.
    ///
    /// `GET /users/{user_id}`
    pub async fn get_user(&self, request: GetUserRequest) -> Result<Option<User>, ApiClientError> {
        let response = self.get_user_raw(request).await?;
        Self::value(&operations::GET_USER, response)
    }

    /// Like [`get_user`](Self::get_user), keeping the raw response.
    pub async fn get_user_raw(
        &self,
        request: GetUserRequest,
    ) -> Result<JsonResponse<Option<User>>, ApiClientError> {
        let descriptor = RequestDescriptor::from_operation(&operations::GET_USER)
            .path_param("user_id", request.user_id);
        self.send_dto(descriptor).await
    }

    /// Lists scaffold records.
    ///
    /// `GET /scaffold/`
    pub async fn index_scaffold(
        &self,
        request: IndexScaffoldRequest,
    ) -> Result<Value, ApiClientError> {
        let response = self.index_scaffold_raw(request).await?;
        Self::value(&operations::INDEX_SCAFFOLD, response)
    }

    /// Like [`index_scaffold`](Self::index_scaffold), keeping the raw response.
    pub async fn index_scaffold_raw(
        &self,
        request: IndexScaffoldRequest,
    ) -> Result<JsonResponse<Value>, ApiClientError> {
        let descriptor = RequestDescriptor::from_operation(&operations::INDEX_SCAFFOLD)
            .query_param("from", request.from)
            .query_param("limit", request.limit);
        self.send(descriptor).await
    }

    /// Generates model source code from a JSON document.
    ///
    /// `POST /develop/json_to_pydantic`
    pub async fn json_to_pydantic(
        &self,
        request: JsonToPydanticRequest,
    ) -> Result<String, ApiClientError> {
        let response = self.json_to_pydantic_raw(request).await?;
        Self::value(&operations::JSON_TO_PYDANTIC, response)
    }

    /// Like [`json_to_pydantic`](Self::json_to_pydantic), keeping the raw response.
    pub async fn json_to_pydantic_raw(
        &self,
        request: JsonToPydanticRequest,
    ) -> Result<JsonResponse<String>, ApiClientError> {
        let descriptor = RequestDescriptor::from_operation(&operations::JSON_TO_PYDANTIC)
            .query_param("json", request.json);
        self.send(descriptor).await
    }

    /// Loads the market data of every bot.
    ///
    /// `POST /bot/etl/load_all`
    pub async fn load_all_bot(&self) -> Result<Value, ApiClientError> {
        let response = self.load_all_bot_raw().await?;
        Self::value(&operations::LOAD_ALL_BOT, response)
    }

    /// Like [`load_all_bot`](Self::load_all_bot), keeping the raw response.
    pub async fn load_all_bot_raw(&self) -> Result<JsonResponse<Value>, ApiClientError> {
        self.send(RequestDescriptor::from_operation(&operations::LOAD_ALL_BOT))
            .await
    }

    /// Exchanges credentials for a [`Token`].
    ///
    /// `POST /guest/login`
    pub async fn login_user(&self, request: LoginForm) -> Result<Option<Token>, ApiClientError> {
        let response = self.login_user_raw(request).await?;
        Self::value(&operations::LOGIN_USER, response)
    }

    /// Like [`login_user`](Self::login_user), keeping the raw response.
    pub async fn login_user_raw(
        &self,
        request: LoginForm,
    ) -> Result<JsonResponse<Option<Token>>, ApiClientError> {
        let descriptor =
            RequestDescriptor::from_operation(&operations::LOGIN_USER).form_fields(&request)?;
        self.send_dto(descriptor).await
    }

    /// Revokes the current token.
    ///
    /// `POST /me/logout`
    pub async fn logout_me(&self) -> Result<Value, ApiClientError> {
        let response = self.logout_me_raw().await?;
        Self::value(&operations::LOGOUT_ME, response)
    }

    /// Like [`logout_me`](Self::logout_me), keeping the raw response.
    pub async fn logout_me_raw(&self) -> Result<JsonResponse<Value>, ApiClientError> {
        self.send(RequestDescriptor::from_operation(&operations::LOGOUT_ME))
            .await
    }

    /// Changes the current user password.
    ///
    /// `PATCH /me/modify_password`
    pub async fn modify_password(
        &self,
        request: ModifyPasswordRequest,
    ) -> Result<Value, ApiClientError> {
        let response = self.modify_password_raw(request).await?;
        Self::value(&operations::MODIFY_PASSWORD, response)
    }

    /// Like [`modify_password`](Self::modify_password), keeping the raw response.
    pub async fn modify_password_raw(
        &self,
        request: ModifyPasswordRequest,
    ) -> Result<JsonResponse<Value>, ApiClientError> {
        let descriptor = RequestDescriptor::from_operation(&operations::MODIFY_PASSWORD)
            .json_body("modify_password", request.modify_password.as_ref())?;
        self.send(descriptor).await
    }

    /// Updates some fields of a scaffold record.
    ///
    /// `PATCH /scaffold/{id}/patch`
    pub async fn patch_scaffold(
        &self,
        request: PatchScaffoldRequest,
    ) -> Result<Value, ApiClientError> {
        let response = self.patch_scaffold_raw(request).await?;
        Self::value(&operations::PATCH_SCAFFOLD, response)
    }

    /// Like [`patch_scaffold`](Self::patch_scaffold), keeping the raw response.
    pub async fn patch_scaffold_raw(
        &self,
        request: PatchScaffoldRequest,
    ) -> Result<JsonResponse<Value>, ApiClientError> {
        let descriptor = RequestDescriptor::from_operation(&operations::PATCH_SCAFFOLD)
            .path_param("id", request.id)
            .json_body("dummy_patch", request.dummy_patch.as_ref())?;
        self.send(descriptor).await
    }

    /// Lists users.
    ///
    /// `GET /users/`
    pub async fn query_user(&self, request: QueryUserRequest) -> Result<Option<Vec<User>>, ApiClientError> {
        let response = self.query_user_raw(request).await?;
        Self::value(&operations::QUERY_USER, response)
    }

    /// Like [`query_user`](Self::query_user), keeping the raw response.
    pub async fn query_user_raw(
        &self,
        request: QueryUserRequest,
    ) -> Result<JsonResponse<Option<Vec<User>>>, ApiClientError> {
        let descriptor = RequestDescriptor::from_operation(&operations::QUERY_USER)
            .query_param("from", request.from)
            .query_param("limit", request.limit);
        self.send_dto(descriptor).await
    }

    /// Registers the first administrator; only allowed on an empty server.
    ///
    /// `POST /guest/register_first_admin`
    pub async fn register_first_admin(
        &self,
        request: RegisterFirstAdminRequest,
    ) -> Result<Option<User>, ApiClientError> {
        let response = self.register_first_admin_raw(request).await?;
        Self::value(&operations::REGISTER_FIRST_ADMIN, response)
    }

    /// Like [`register_first_admin`](Self::register_first_admin), keeping the raw response.
    pub async fn register_first_admin_raw(
        &self,
        request: RegisterFirstAdminRequest,
    ) -> Result<JsonResponse<Option<User>>, ApiClientError> {
        let descriptor = RequestDescriptor::from_operation(&operations::REGISTER_FIRST_ADMIN)
            .json_body("register_first_admin", request.register_first_admin.as_ref())?;
        self.send_dto(descriptor).await
    }

    /// Registers a user.
    ///
    /// `POST /guest/register`
    pub async fn register_user(
        &self,
        request: RegisterUserRequest,
    ) -> Result<Option<User>, ApiClientError> {
        let response = self.register_user_raw(request).await?;
        Self::value(&operations::REGISTER_USER, response)
    }

    /// Like [`register_user`](Self::register_user), keeping the raw response.
    pub async fn register_user_raw(
        &self,
        request: RegisterUserRequest,
    ) -> Result<JsonResponse<Option<User>>, ApiClientError> {
        let descriptor = RequestDescriptor::from_operation(&operations::REGISTER_USER)
            .json_body("register_user", request.register_user.as_ref())?;
        self.send_dto(descriptor).await
    }

    /// Scores the difficulty of a system from a few requirements.
    ///
    /// `GET /system/requirement_definition`
    pub async fn requirement_definition(
        &self,
        request: RequirementDefinitionRequest,
    ) -> Result<Value, ApiClientError> {
        let response = self.requirement_definition_raw(request).await?;
        Self::value(&operations::REQUIREMENT_DEFINITION, response)
    }

    /// Like [`requirement_definition`](Self::requirement_definition), keeping the raw response.
    pub async fn requirement_definition_raw(
        &self,
        request: RequirementDefinitionRequest,
    ) -> Result<JsonResponse<Value>, ApiClientError> {
        let descriptor = RequestDescriptor::from_operation(&operations::REQUIREMENT_DEFINITION)
            .query_param("domain", request.domain)
            .query_param("timezone", request.timezone)
            .query_param("has_timezone", request.has_timezone)
            .query_param("most_old_year", request.most_old_year)
            .query_param("scraping", request.scraping)
            .query_param("etl", request.etl);
        self.send(descriptor).await
    }

    /// Greets the caller.
    ///
    /// `GET /`
    pub async fn root_get(&self) -> Result<String, ApiClientError> {
        let response = self.root_get_raw().await?;
        Self::value(&operations::ROOT_GET, response)
    }

    /// Like [`root_get`](Self::root_get), keeping the raw response.
    pub async fn root_get_raw(&self) -> Result<JsonResponse<String>, ApiClientError> {
        self.send(RequestDescriptor::from_operation(&operations::ROOT_GET))
            .await
    }

    /// Turns a bot on or off.
    ///
    /// `POST /bot/profile/{profile_id}/switch`
    pub async fn switch_bot(&self, request: SwitchBotRequest) -> Result<Value, ApiClientError> {
        let response = self.switch_bot_raw(request).await?;
        Self::value(&operations::SWITCH_BOT, response)
    }

    /// Like [`switch_bot`](Self::switch_bot), keeping the raw response.
    pub async fn switch_bot_raw(
        &self,
        request: SwitchBotRequest,
    ) -> Result<JsonResponse<Value>, ApiClientError> {
        let descriptor = RequestDescriptor::from_operation(&operations::SWITCH_BOT)
            .path_param("profile_id", request.profile_id)
            .query_param("is_active", request.is_active);
        self.send(descriptor).await
    }

    /// Deletes the current user, returning the number of deleted rows.
    ///
    /// `DELETE /me/`
    pub async fn withdraw_me(&self) -> Result<i64, ApiClientError> {
        let response = self.withdraw_me_raw().await?;
        Self::value(&operations::WITHDRAW_ME, response)
    }

    /// Like [`withdraw_me`](Self::withdraw_me), keeping the raw response.
    pub async fn withdraw_me_raw(&self) -> Result<JsonResponse<i64>, ApiClientError> {
        self.send(RequestDescriptor::from_operation(&operations::WITHDRAW_ME))
            .await
    }
}

#[cfg(test)]
mod tests;

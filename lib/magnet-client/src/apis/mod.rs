mod default_api;
pub use self::default_api::{DefaultApi, JsonResponse};

mod requests;
pub use self::requests::{
    CopyScaffoldRequest, CreateBotRequest, CreateScaffoldRequest, DealBotRequest,
    DeleteScaffoldRequest, DeleteUserRequest, GetBotRequest, GetScaffoldRequest,
    GetStatisticsRequest, GetUserRequest, IndexScaffoldRequest, JsonToPydanticRequest,
    ModifyPasswordRequest, PatchScaffoldRequest, QueryUserRequest, RegisterFirstAdminRequest,
    RegisterUserRequest, RequirementDefinitionRequest, SwitchBotRequest,
};

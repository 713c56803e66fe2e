use std::borrow::Cow;

use indexmap::IndexSet;
use serde::Serialize;

use super::parameters::{CallBody, CallHeaders, CallPath, ParamMap, ParamValue};
use super::{ApiClientError, RequiredError, SecurityRequirement};

/// The HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HttpMethod {
    /// `GET`
    #[display("GET")]
    Get,
    /// `POST`
    #[display("POST")]
    Post,
    /// `PUT`
    #[display("PUT")]
    Put,
    /// `PATCH`
    #[display("PATCH")]
    Patch,
    /// `DELETE`
    #[display("DELETE")]
    Delete,
    /// `HEAD`
    #[display("HEAD")]
    Head,
    /// `OPTIONS`
    #[display("OPTIONS")]
    Options,
}

impl From<HttpMethod> for http::Method {
    fn from(value: HttpMethod) -> Self {
        match value {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Delete => Self::DELETE,
            HttpMethod::Head => Self::HEAD,
            HttpMethod::Options => Self::OPTIONS,
        }
    }
}

/// How the response body of an operation is decoded.
///
/// Every [`Decoder`](crate::Decoder) reports its kind; a call built from an
/// [`Operation`] checks it in debug builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    /// Plain text.
    Text,
    /// JSON mapped with `Deserialize` (strings, numbers, untyped values).
    Json,
    /// JSON mapped into a DTO, `null` giving `None`.
    Dto,
    /// No content.
    Void,
}

/// A static description of one server endpoint.
///
/// Operations are meant for `const` tables: every field is `'static` and the
/// struct is `Copy`.
///
/// ```rust
/// use magnet_client_core::{HttpMethod, Operation, ResponseKind, SecurityRequirement};
///
/// const GET_USER: Operation = Operation {
///     name: "get_user",
///     method: HttpMethod::Get,
///     path: "/users/{user_id}",
///     required: &["user_id"],
///     security: Some(SecurityRequirement::new("OAuth2PasswordBearer", &[])),
///     response: ResponseKind::Json,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operation {
    /// The operation name, used in error messages and logs.
    pub name: &'static str,
    /// The HTTP method.
    pub method: HttpMethod,
    /// The path template, with `{name}` placeholders.
    pub path: &'static str,
    /// Parameters that must be supplied, checked in order.
    pub required: &'static [&'static str],
    /// The security requirement, `None` for public operations.
    pub security: Option<SecurityRequirement>,
    /// How the response is decoded.
    pub response: ResponseKind,
}

#[derive(Debug, Clone, Default)]
enum Payload {
    #[default]
    Empty,
    Encoded(CallBody),
    Form(ParamMap),
}

/// The logical description of one HTTP call, before execution.
///
/// A descriptor tracks which named parameters were supplied so that missing
/// required ones are reported with a [`RequiredError`] before any I/O.
///
/// # Example
///
/// ```rust
/// use magnet_client_core::{HttpMethod, RequestDescriptor};
///
/// let descriptor = RequestDescriptor::new(HttpMethod::Get, "/scaffold/")
///     .query_param("from", 0)
///     .query_param("limit", Some(20));
///
/// assert_eq!(descriptor.method(), HttpMethod::Get);
/// ```
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    operation: Cow<'static, str>,
    method: HttpMethod,
    path: CallPath,
    query: ParamMap,
    headers: CallHeaders,
    payload: Payload,
    security: Option<SecurityRequirement>,
    required: Cow<'static, [&'static str]>,
    supplied: IndexSet<String>,
    response: Option<ResponseKind>,
}

impl RequestDescriptor {
    /// Creates a public descriptor without required parameters.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            operation: Cow::Owned(format!("{method} {path}")),
            method,
            path: CallPath::from(path),
            query: ParamMap::default(),
            headers: CallHeaders::default(),
            payload: Payload::default(),
            security: None,
            required: Cow::Borrowed(&[]),
            supplied: IndexSet::new(),
            response: None,
        }
    }

    /// Creates a descriptor inheriting the method, path, required parameters
    /// and security requirement of an operation.
    pub fn from_operation(operation: &Operation) -> Self {
        Self {
            operation: Cow::Borrowed(operation.name),
            method: operation.method,
            path: CallPath::from(operation.path),
            query: ParamMap::default(),
            headers: CallHeaders::default(),
            payload: Payload::default(),
            security: operation.security,
            required: Cow::Borrowed(operation.required),
            supplied: IndexSet::new(),
            response: Some(operation.response),
        }
    }

    /// Sets the operation name used in errors and logs.
    pub fn with_operation_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.operation = name.into();
        self
    }

    /// Declares the call as secured by `requirement`.
    pub fn with_security(mut self, requirement: SecurityRequirement) -> Self {
        self.security = Some(requirement);
        self
    }

    /// Declares a parameter that must be supplied.
    pub fn with_required(mut self, name: &'static str) -> Self {
        self.required.to_mut().push(name);
        self
    }

    /// Sets a path parameter.
    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        let name = name.into();
        let value = value.into();
        self.mark(&name, &value);
        self.path = self.path.add_param(name, value);
        self
    }

    /// Sets a query parameter; an absent value is not sent.
    pub fn query_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        let name = name.into();
        let value = value.into();
        self.mark(&name, &value);
        self.query.insert(name, value);
        self
    }

    /// Sets a header; an absent value is not sent.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        let name = name.into();
        let value = value.into();
        self.mark(&name, &value);
        self.headers = self.headers.add_header(name, value);
        self
    }

    /// Sets a form field of an `application/x-www-form-urlencoded` body.
    ///
    /// Replaces any JSON or raw body previously set.
    pub fn form_field(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        let name = name.into();
        let value = value.into();
        self.mark(&name, &value);
        match &mut self.payload {
            Payload::Form(fields) => fields.insert(name, value),
            payload => *payload = Payload::Form(ParamMap::new().add_param(name, value)),
        }
        self
    }

    /// Sets every field of a flat serializable struct as a form field.
    ///
    /// `None` fields are omitted and stay unsupplied.
    ///
    /// # Errors
    ///
    /// Fails if the value is not a flat structure.
    pub fn form_fields<T>(self, value: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let encoded =
            serde_urlencoded::to_string(value).map_err(|err| ApiClientError::Serialization {
                message: format!("Failed to serialize form data: {err}"),
            })?;
        let descriptor = url::form_urlencoded::parse(encoded.as_bytes())
            .fold(self, |descriptor, (name, text)| {
                descriptor.form_field(name.into_owned(), text.into_owned())
            });
        Ok(descriptor)
    }

    /// Sets a JSON body supplied under the parameter `name`.
    ///
    /// A `None` body leaves the parameter unsupplied.
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be serialized as JSON.
    pub fn json_body<T>(
        mut self,
        name: impl Into<String>,
        value: Option<&T>,
    ) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        if let Some(value) = value {
            self.payload = Payload::Encoded(CallBody::json(value)?);
            self.supplied.insert(name.into());
        }
        Ok(self)
    }

    /// Sets an already encoded body.
    pub fn body(mut self, body: CallBody) -> Self {
        self.payload = Payload::Encoded(body);
        self
    }

    fn mark(&mut self, name: &str, value: &ParamValue) {
        if value.is_present() {
            self.supplied.insert(name.to_string());
        } else {
            self.supplied.shift_remove(name);
        }
    }

    /// The operation name.
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// The HTTP method.
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// The path with its parameters.
    pub fn path(&self) -> &CallPath {
        &self.path
    }

    /// The query parameters.
    pub fn query(&self) -> &ParamMap {
        &self.query
    }

    /// The per-call headers.
    pub fn headers(&self) -> &CallHeaders {
        &self.headers
    }

    /// The security requirement, if the call is secured.
    pub fn security(&self) -> Option<&SecurityRequirement> {
        self.security.as_ref()
    }

    /// The response kind declared by the operation, if built from one.
    pub fn response(&self) -> Option<ResponseKind> {
        self.response
    }

    /// The encoded body, if any.
    pub fn to_body(&self) -> Option<CallBody> {
        match &self.payload {
            Payload::Empty => None,
            Payload::Encoded(body) => Some(body.clone()),
            Payload::Form(fields) => Some(CallBody::form(fields)),
        }
    }

    /// Checks that every required parameter was supplied, in declaration order.
    ///
    /// # Errors
    ///
    /// A [`RequiredError`] naming the first missing parameter.
    pub fn check_required(&self) -> Result<(), RequiredError> {
        match self
            .required
            .iter()
            .find(|name| !self.supplied.contains(**name))
        {
            Some(name) => Err(RequiredError::new(*name, self.operation.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SWITCH: Operation = Operation {
        name: "switch_bot",
        method: HttpMethod::Post,
        path: "/bot/profile/{profile_id}/switch",
        required: &["profile_id", "is_active"],
        security: None,
        response: ResponseKind::Json,
    };

    #[test]
    fn should_inherit_operation() {
        let descriptor = RequestDescriptor::from_operation(&SWITCH);

        assert_eq!(descriptor.operation(), "switch_bot");
        assert_eq!(descriptor.method(), HttpMethod::Post);
        assert_eq!(descriptor.path().template(), "/bot/profile/{profile_id}/switch");
        assert!(descriptor.security().is_none());
        assert_eq!(descriptor.response(), Some(ResponseKind::Json));
    }

    #[test]
    fn should_report_first_missing_required() {
        let descriptor = RequestDescriptor::from_operation(&SWITCH).query_param("is_active", true);

        let error = descriptor.check_required().expect_err("profile_id is missing");

        assert_eq!(error.parameter(), "profile_id");
        insta::assert_snapshot!(error, @"Required parameter requestParameters.profile_id was null or undefined when calling switch_bot.");
    }

    #[test]
    fn should_treat_absent_value_as_missing() {
        let descriptor = RequestDescriptor::from_operation(&SWITCH)
            .path_param("profile_id", 3)
            .query_param("is_active", None::<bool>);

        let error = descriptor.check_required().expect_err("is_active is missing");

        assert_eq!(error.parameter(), "is_active");
    }

    #[test]
    fn should_accept_all_required() {
        let descriptor = RequestDescriptor::from_operation(&SWITCH)
            .path_param("profile_id", 3)
            .query_param("is_active", false);

        assert!(descriptor.check_required().is_ok());
    }

    #[test]
    fn should_track_json_body() {
        let body = serde_json::json!({"password": "s3cret"});
        let descriptor = RequestDescriptor::new(HttpMethod::Patch, "/me/modify_password")
            .with_required("modify_password");

        let missing = descriptor
            .clone()
            .json_body::<serde_json::Value>("modify_password", None)
            .expect("no body");
        let supplied = descriptor
            .json_body("modify_password", Some(&body))
            .expect("json body");

        assert!(missing.check_required().is_err());
        assert!(supplied.check_required().is_ok());
        let encoded = supplied.to_body().expect("a body");
        insta::assert_snapshot!(encoded.content_type(), @"application/json");
    }

    #[test]
    fn should_accumulate_form_fields() {
        let descriptor = RequestDescriptor::new(HttpMethod::Post, "/guest/login")
            .form_field("username", "john")
            .form_field("password", "secret")
            .form_field("scope", None::<String>);

        let body = descriptor.to_body().expect("a body");

        insta::assert_snapshot!(String::from_utf8_lossy(body.data()), @"username=john&password=secret");
        insta::assert_snapshot!(body.content_type(), @"application/x-www-form-urlencoded");
    }

    #[derive(Serialize)]
    struct Credentials<'a> {
        username: Option<&'a str>,
        password: Option<&'a str>,
        scope: Option<&'a str>,
    }

    #[test]
    fn should_set_form_fields_from_struct() {
        let credentials = Credentials {
            username: Some("john doe"),
            password: Some("p@ss"),
            scope: None,
        };

        let descriptor = RequestDescriptor::new(HttpMethod::Post, "/guest/login")
            .with_required("password")
            .with_required("username")
            .form_fields(&credentials)
            .expect("flat form");

        assert!(descriptor.check_required().is_ok());
        let body = descriptor.to_body().expect("a body");
        insta::assert_snapshot!(String::from_utf8_lossy(body.data()), @"username=john+doe&password=p%40ss");
    }

    #[test]
    fn should_leave_none_form_fields_unsupplied() {
        let credentials = Credentials {
            username: Some("john"),
            password: None,
            scope: Some("me"),
        };

        let descriptor = RequestDescriptor::new(HttpMethod::Post, "/guest/login")
            .with_required("password")
            .form_fields(&credentials)
            .expect("flat form");

        let error = descriptor.check_required().expect_err("password is missing");
        assert_eq!(error.parameter(), "password");
    }

    #[test]
    fn should_reject_nested_form_struct() {
        let result = RequestDescriptor::new(HttpMethod::Post, "/guest/login")
            .form_fields(&serde_json::json!({"nested": {"a": 1}}));

        assert!(matches!(result, Err(ApiClientError::Serialization { .. })));
    }

    #[test]
    fn should_name_ad_hoc_descriptor() {
        let descriptor = RequestDescriptor::new(HttpMethod::Delete, "/me/");

        assert_eq!(descriptor.operation(), "DELETE /me/");
        assert!(descriptor.to_body().is_none());
        assert!(descriptor.response().is_none());
    }
}

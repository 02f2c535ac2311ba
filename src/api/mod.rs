//! API client for communicating with the Employee Management backend

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Failure of a single API call. `Display` is the message shown to the user.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Server { status: StatusCode, message: String },

    #[error("Not logged in")]
    NotAuthenticated,

    #[error("No token in response")]
    MissingToken,
}

/// Employee record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body for `POST /employees`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
}

/// Body for `PUT /employees/:id`. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

impl EmployeeUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignupRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Deserialize)]
struct EmployeesResponse {
    #[serde(default)]
    employees: Vec<Employee>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// API client for the Employee Management backend
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            http: Client::new(),
        }
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }

    /// Same client, sending `Authorization: Bearer <token>` on employee calls
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let response = self
            .request(Method::POST, "/users/login")
            .json(&LoginRequest { email, password })
            .send()?;
        Self::read_token(response, "Login failed")
    }

    pub fn signup(&self, username: &str, email: &str, password: &str) -> Result<String, ApiError> {
        let response = self
            .request(Method::POST, "/users/signup")
            .json(&SignupRequest {
                username,
                email,
                password,
            })
            .send()?;
        Self::read_token(response, "Signup failed")
    }

    pub fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let response = self.authorized(Method::GET, "/employees")?.send()?;
        let body: EmployeesResponse = Self::read_json(response, "Failed to fetch employees")?;
        debug!(count = body.employees.len(), "employees fetched");
        Ok(body.employees)
    }

    pub fn get_employee(&self, id: &str) -> Result<Employee, ApiError> {
        let response = self.authorized(Method::GET, &employee_path(id))?.send()?;
        Self::read_json(response, "Failed to fetch employee")
    }

    pub fn create_employee(&self, employee: &NewEmployee) -> Result<(), ApiError> {
        let response = self
            .authorized(Method::POST, "/employees")?
            .json(employee)
            .send()?;
        Self::expect_success(response, "Add employee failed")
    }

    pub fn update_employee(&self, id: &str, update: &EmployeeUpdate) -> Result<(), ApiError> {
        let response = self
            .authorized(Method::PUT, &employee_path(id))?
            .json(update)
            .send()?;
        Self::expect_success(response, "Update failed")
    }

    pub fn delete_employee(&self, id: &str) -> Result<(), ApiError> {
        let response = self.authorized(Method::DELETE, &employee_path(id))?.send()?;
        Self::expect_success(response, "Failed to delete employee")
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(%method, path, "sending request");
        self.http.request(method, self.url(path))
    }

    fn authorized(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let token = self.token.as_deref().ok_or(ApiError::NotAuthenticated)?;
        Ok(self.request(method, path).bearer_auth(token))
    }

    fn read_token(response: Response, fallback: &str) -> Result<String, ApiError> {
        let body: TokenResponse = Self::read_json(response, fallback)?;
        body.token
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::MissingToken)
    }

    fn read_json<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::rejected(status, response, fallback));
        }
        Ok(response.json()?)
    }

    fn expect_success(response: Response, fallback: &str) -> Result<(), ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::rejected(status, response, fallback));
        }
        debug!(status = status.as_u16(), "request succeeded");
        Ok(())
    }

    fn rejected(status: StatusCode, response: Response, fallback: &str) -> ApiError {
        let message = response
            .json::<ErrorBody>()
            .ok()
            .and_then(|body| body.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        warn!(status = status.as_u16(), %message, "request rejected by server");
        ApiError::Server { status, message }
    }
}

fn employee_path(id: &str) -> String {
    format!("/employees/{}", urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_update_only_serializes_present_fields() {
        let update = EmployeeUpdate {
            salary: Some(2000.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "salary": 2000.0 }));
        assert!(!update.is_empty());
        assert!(EmployeeUpdate::default().is_empty());
    }

    #[test]
    fn employee_reads_mongo_style_id() {
        let employee: Employee = serde_json::from_value(serde_json::json!({
            "_id": "65f0c0ffee",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "position": "Engineer",
            "department": "R&D",
            "salary": 1200.5,
            "created_at": "2024-03-05T12:00:00.000Z",
            "__v": 0
        }))
        .unwrap();
        assert_eq!(employee.id, "65f0c0ffee");
        assert_eq!(employee.full_name(), "Ada Lovelace");
        assert_eq!(employee.created_at.as_deref(), Some("2024-03-05T12:00:00.000Z"));
    }

    #[test]
    fn employee_calls_require_a_token() {
        let client = ApiClient::new(Some("http://127.0.0.1:9".to_string()));
        assert!(matches!(client.list_employees(), Err(ApiError::NotAuthenticated)));

        let client = client.with_token(Some(String::new()));
        assert!(matches!(client.delete_employee("1"), Err(ApiError::NotAuthenticated)));
    }

    #[test]
    fn base_url_and_ids_are_normalized() {
        let client = ApiClient::new(Some("http://api.local/".to_string()));
        assert_eq!(client.get_base_url(), "http://api.local");
        assert_eq!(client.url(&employee_path("a b/c")), "http://api.local/employees/a%20b%2Fc");
        assert_eq!(ApiClient::new(None).get_base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn server_error_displays_message() {
        let err = ApiError::Server {
            status: StatusCode::BAD_REQUEST,
            message: "Email already exists".to_string(),
        };
        assert_eq!(err.to_string(), "Email already exists");
    }
}

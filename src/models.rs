//! Screen models for the Employee Manager GUI
//!
//! Form serialization, dashboard statistics, list filtering and display
//! formatting. None of this touches GPUI, so the screens stay thin.

use std::collections::HashSet;

use chrono::{DateTime, Local};
use regex::Regex;
use thiserror::Error;

use crate::api::{Employee, EmployeeUpdate, NewEmployee};

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+$";
pub const MIN_PASSWORD_LEN: usize = 6;

/// Rejected form input, shown in the screen's error banner
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} must be a valid email address")]
    InvalidEmail(&'static str),

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("Salary must be a number")]
    InvalidSalary,

    #[error("Salary must be at least 0")]
    NegativeSalary,

    #[error("Fill in at least one field to update")]
    NothingToUpdate,
}

/// Loading / error state shared by every screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenStatus {
    pub loading: bool,
    pub error: Option<String>,
}

impl ScreenStatus {
    pub fn loading() -> Self {
        Self {
            loading: true,
            error: None,
        }
    }

    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish(&mut self) {
        self.loading = false;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }
}

/// Dashboard numbers, recomputed from the full list on every Home visit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub average_salary: f64,
    pub departments: usize,
    pub positions: usize,
}

impl DashboardStats {
    pub fn from_employees(employees: &[Employee]) -> Self {
        let departments: HashSet<&str> = employees.iter().map(|e| e.department.as_str()).collect();
        let positions: HashSet<&str> = employees.iter().map(|e| e.position.as_str()).collect();
        let average_salary = if employees.is_empty() {
            0.0
        } else {
            employees.iter().map(|e| e.salary).sum::<f64>() / employees.len() as f64
        };

        Self {
            total_employees: employees.len(),
            average_salary,
            departments: departments.len(),
            positions: positions.len(),
        }
    }
}

/// Column the employee list search matches against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchField {
    #[default]
    Department,
    Position,
}

impl SearchField {
    pub fn label(self) -> &'static str {
        match self {
            SearchField::Department => "Search by Department",
            SearchField::Position => "Search by Position",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            SearchField::Department => "Enter department...",
            SearchField::Position => "Enter position...",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SearchField::Department => SearchField::Position,
            SearchField::Position => SearchField::Department,
        }
    }

    fn value(self, employee: &Employee) -> &str {
        match self {
            SearchField::Department => &employee.department,
            SearchField::Position => &employee.position,
        }
    }
}

/// Case-insensitive substring match; an empty term keeps everything
pub fn filter_employees<'a>(
    employees: &'a [Employee],
    field: SearchField,
    term: &str,
) -> Vec<&'a Employee> {
    if term.is_empty() {
        return employees.iter().collect();
    }
    let needle = term.to_lowercase();
    employees
        .iter()
        .filter(|e| field.value(e).to_lowercase().contains(&needle))
        .collect()
}

/// What the employee list area shows
#[derive(Debug, PartialEq)]
pub enum ListBody<'a> {
    Loading,
    NoEmployees,
    NoMatch,
    Rows(Vec<&'a Employee>),
}

impl<'a> ListBody<'a> {
    /// A pending fetch always shows the loading state, even over rows from
    /// an earlier fetch.
    pub fn select(
        status: &ScreenStatus,
        employees: &'a [Employee],
        field: SearchField,
        term: &str,
    ) -> Self {
        if status.loading {
            return ListBody::Loading;
        }
        if employees.is_empty() {
            return ListBody::NoEmployees;
        }
        let rows = filter_employees(employees, field, term);
        if rows.is_empty() {
            ListBody::NoMatch
        } else {
            ListBody::Rows(rows)
        }
    }
}

/// Raw text of the Add / Edit employee form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub salary: String,
}

impl EmployeeForm {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            position: employee.position.clone(),
            department: employee.department.clone(),
            salary: employee.salary.to_string(),
        }
    }

    /// Add Employee: every field required, salary >= 0
    pub fn to_new_employee(&self) -> Result<NewEmployee, FormError> {
        let email = required("Email", &self.email)?;
        check_email("Email", &email)?;
        Ok(NewEmployee {
            first_name: required("First name", &self.first_name)?,
            last_name: required("Last name", &self.last_name)?,
            email,
            position: required("Position", &self.position)?,
            department: required("Department", &self.department)?,
            salary: parse_salary(&required("Salary", &self.salary)?)?,
        })
    }

    /// Edit Employee: blank fields are left out of the request, and an
    /// entirely blank form is rejected
    pub fn to_update(&self) -> Result<EmployeeUpdate, FormError> {
        let email = optional(&self.email);
        if let Some(email) = &email {
            check_email("Email", email)?;
        }
        let salary = match optional(&self.salary) {
            Some(raw) => Some(parse_salary(&raw)?),
            None => None,
        };

        let update = EmployeeUpdate {
            first_name: optional(&self.first_name),
            last_name: optional(&self.last_name),
            email,
            position: optional(&self.position),
            department: optional(&self.department),
            salary,
        };
        if update.is_empty() {
            return Err(FormError::NothingToUpdate);
        }
        Ok(update)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormError> {
        let email = required("Email", &self.email)?;
        check_email("Email", &email)?;
        if self.password.is_empty() {
            return Err(FormError::Required("Password"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), FormError> {
        required("Username", &self.username)?;
        let email = required("Email", &self.email)?;
        check_email("Email", &email)?;
        if self.password.is_empty() {
            return Err(FormError::Required("Password"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::TooShort {
                field: "Password",
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }
}

fn required(field: &'static str, raw: &str) -> Result<String, FormError> {
    optional(raw).ok_or(FormError::Required(field))
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn check_email(field: &'static str, value: &str) -> Result<(), FormError> {
    let valid = Regex::new(EMAIL_PATTERN)
        .map(|re| re.is_match(value))
        .unwrap_or(false);
    if valid {
        Ok(())
    } else {
        Err(FormError::InvalidEmail(field))
    }
}

fn parse_salary(raw: &str) -> Result<f64, FormError> {
    let salary: f64 = raw.parse().map_err(|_| FormError::InvalidSalary)?;
    if !salary.is_finite() {
        return Err(FormError::InvalidSalary);
    }
    if salary < 0.0 {
        return Err(FormError::NegativeSalary);
    }
    Ok(salary)
}

/// `$1,234.50`
pub fn format_usd(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// `$2,000`, for dashboard cards
pub fn format_usd_whole(amount: f64) -> String {
    let dollars = amount.abs().round() as u64;
    let sign = if amount < 0.0 && dollars > 0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(dollars))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Local calendar date of a server timestamp, `m/d/yyyy`
pub fn format_date(timestamp: Option<&str>) -> String {
    match timestamp {
        Some(raw) => match DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => dt.with_timezone(&Local).format("%-m/%-d/%Y").to_string(),
            Err(_) => raw.to_string(),
        },
        None => "Unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(department: &str, position: &str, salary: f64) -> Employee {
        Employee {
            id: format!("{department}-{position}-{salary}"),
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a@b.com".into(),
            position: position.into(),
            department: department.into(),
            salary,
            created_at: None,
        }
    }

    #[test]
    fn average_salary_of_1000_and_3000_is_2000() {
        let stats = DashboardStats::from_employees(&[
            employee("R&D", "Eng", 1000.0),
            employee("R&D", "Eng", 3000.0),
        ]);
        assert_eq!(stats.average_salary, 2000.0);
        assert_eq!(stats.total_employees, 2);
        assert_eq!(stats.departments, 1);
        assert_eq!(stats.positions, 1);
    }

    #[test]
    fn stats_count_distinct_departments_and_positions() {
        let stats = DashboardStats::from_employees(&[
            employee("R&D", "Eng", 1.0),
            employee("Sales", "Eng", 1.0),
            employee("Sales", "Manager", 1.0),
            employee("HR", "Recruiter", 1.0),
        ]);
        assert_eq!(stats.departments, 3);
        assert_eq!(stats.positions, 3);
        assert_eq!(DashboardStats::from_employees(&[]), DashboardStats::default());
    }

    #[test]
    fn search_is_case_insensitive_on_the_selected_field() {
        let all = vec![
            employee("Research", "Engineer", 1.0),
            employee("Sales", "Researcher", 1.0),
        ];
        let hits = filter_employees(&all, SearchField::Department, "rEsEa");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].department, "Research");

        let hits = filter_employees(&all, SearchField::Position, "research");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].department, "Sales");

        assert_eq!(filter_employees(&all, SearchField::Position, "").len(), 2);
        assert!(filter_employees(&all, SearchField::Department, "ops").is_empty());
    }

    #[test]
    fn refetch_shows_loading_over_stale_rows() {
        let all = vec![employee("R&D", "Eng", 1.0)];
        assert_eq!(
            ListBody::select(&ScreenStatus::loading(), &all, SearchField::Department, ""),
            ListBody::Loading
        );
        assert_eq!(
            ListBody::select(&ScreenStatus::default(), &all, SearchField::Department, ""),
            ListBody::Rows(vec![&all[0]])
        );
    }

    #[test]
    fn empty_list_and_no_match_are_distinct() {
        let idle = ScreenStatus::default();
        assert_eq!(
            ListBody::select(&idle, &[], SearchField::Department, "r&d"),
            ListBody::NoEmployees
        );
        let all = vec![employee("R&D", "Eng", 1.0)];
        assert_eq!(
            ListBody::select(&idle, &all, SearchField::Position, "sales"),
            ListBody::NoMatch
        );
    }

    #[test]
    fn new_employee_form_serializes_all_fields() {
        let form = EmployeeForm {
            first_name: "A".into(),
            last_name: "B".into(),
            email: " a@b.com ".into(),
            position: "Eng".into(),
            department: "R&D".into(),
            salary: "1000".into(),
        };
        let new = form.to_new_employee().unwrap();
        assert_eq!(new.email, "a@b.com");
        assert_eq!(new.salary, 1000.0);
        assert_eq!(
            serde_json::to_value(&new).unwrap(),
            serde_json::json!({
                "first_name": "A",
                "last_name": "B",
                "email": "a@b.com",
                "position": "Eng",
                "department": "R&D",
                "salary": 1000.0
            })
        );
    }

    #[test]
    fn new_employee_form_enforces_required_and_min() {
        let mut form = EmployeeForm {
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a@b.com".into(),
            position: "Eng".into(),
            department: "  ".into(),
            salary: "1000".into(),
        };
        assert_eq!(form.to_new_employee(), Err(FormError::Required("Department")));

        form.department = "R&D".into();
        form.salary = "-1".into();
        assert_eq!(form.to_new_employee(), Err(FormError::NegativeSalary));

        form.salary = "lots".into();
        assert_eq!(form.to_new_employee(), Err(FormError::InvalidSalary));

        form.salary = "0".into();
        form.email = "not-an-email".into();
        assert_eq!(form.to_new_employee(), Err(FormError::InvalidEmail("Email")));
    }

    #[test]
    fn edit_form_sends_only_non_empty_fields() {
        let form = EmployeeForm {
            salary: "2000".into(),
            ..Default::default()
        };
        let update = form.to_update().unwrap();
        assert_eq!(
            update,
            EmployeeUpdate {
                salary: Some(2000.0),
                ..Default::default()
            }
        );
        assert_eq!(
            EmployeeForm::default().to_update(),
            Err(FormError::NothingToUpdate)
        );
        let blank = EmployeeForm {
            first_name: "   ".into(),
            ..Default::default()
        };
        assert_eq!(blank.to_update(), Err(FormError::NothingToUpdate));
    }

    #[test]
    fn edit_form_prefills_from_employee() {
        let e = employee("R&D", "Eng", 1234.5);
        let form = EmployeeForm::from_employee(&e);
        assert_eq!(form.salary, "1234.5");
        assert_eq!(form.department, "R&D");
        assert_eq!(form.to_update().unwrap().salary, Some(1234.5));
    }

    #[test]
    fn signup_requires_six_character_password() {
        let mut form = SignupForm {
            username: "ada".into(),
            email: "ada@example.com".into(),
            password: "12345".into(),
        };
        assert_eq!(
            form.validate(),
            Err(FormError::TooShort {
                field: "Password",
                min: 6
            })
        );
        form.password = "123456".into();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn login_requires_email_and_password() {
        let form = LoginForm {
            email: "ada@example.com".into(),
            password: String::new(),
        };
        assert_eq!(form.validate(), Err(FormError::Required("Password")));
        assert_eq!(LoginForm::default().validate(), Err(FormError::Required("Email")));
    }

    #[test]
    fn currency_formatting() {
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_usd(-12.5), "-$12.50");
        assert_eq!(format_usd_whole(2000.0), "$2,000");
        assert_eq!(format_usd_whole(999.5), "$1,000");
    }

    #[test]
    fn dates_render_as_local_calendar_day() {
        assert_eq!(format_date(Some("2024-03-05T12:00:00.000Z")), "3/5/2024");
        assert_eq!(format_date(Some("yesterday")), "yesterday");
        assert_eq!(format_date(None), "Unknown");
    }

    #[test]
    fn screen_status_transitions() {
        let mut status = ScreenStatus::loading();
        status.fail("boom");
        assert!(!status.loading);
        assert_eq!(status.error.as_deref(), Some("boom"));
        status.begin();
        assert_eq!(status, ScreenStatus::loading());
        status.finish();
        assert_eq!(status, ScreenStatus::default());
    }
}

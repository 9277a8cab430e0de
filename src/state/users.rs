//! Users screen: server-side list query and the create/edit form.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::types::{Company, User, UserQuery};
use crate::state::forms::FieldErrors;

pub const USER_PAGE_SIZE: u32 = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Inactive];

    /// Value of the `<select>` option.
    pub fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "true",
            Self::Inactive => "false",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Status",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "true" => Self::Active,
            "false" => Self::Inactive,
            _ => Self::All,
        }
    }

    fn query_value(self) -> Option<String> {
        match self {
            Self::All => None,
            other => Some(other.value().to_owned()),
        }
    }
}

/// Paging and filters of the user list. The list refetches when `page` or
/// `status` change, or when a search is submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserListState {
    pub page: u32,
    pub search: String,
    pub status: StatusFilter,
}

impl Default for UserListState {
    fn default() -> Self {
        Self { page: 1, search: String::new(), status: StatusFilter::All }
    }
}

impl UserListState {
    pub fn query(&self) -> UserQuery {
        let search = self.search.trim();
        UserQuery {
            page_index: self.page.max(1),
            page_count: USER_PAGE_SIZE,
            search: (!search.is_empty()).then(|| search.to_owned()),
            active: self.status.query_value(),
        }
    }

    /// Whether a response fetched for `issued` still matches the list on screen.
    pub fn is_current(&self, issued: &UserQuery) -> bool {
        self.query() == *issued
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
        self.page = 1;
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// A full page suggests there may be more rows.
    pub fn has_next(rows: usize) -> bool {
        rows >= USER_PAGE_SIZE as usize
    }
}

pub fn full_name(user: &User) -> String {
    format!("{} {}", user.first_name.trim(), user.last_name.trim()).trim().to_owned()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserForm {
    pub user_id: i64,
    pub user_name: String,
    pub user_password: String,
    pub first_name: String,
    pub last_name: String,
    pub email_id: String,
    pub mobile_no: String,
    pub c_id: i64,
    pub active: bool,
    pub whatsapp_otp: bool,
    pub email_otp: bool,
    pub created_date: Option<String>,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            user_id: 0,
            user_name: String::new(),
            user_password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email_id: String::new(),
            mobile_no: String::new(),
            c_id: 0,
            active: true,
            whatsapp_otp: false,
            email_otp: false,
            created_date: None,
        }
    }
}

impl UserForm {
    /// Edit form. The password is never shown; leaving it blank keeps it.
    pub fn for_edit(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            user_name: user.user_name.clone(),
            user_password: String::new(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email_id: user.email_id.clone(),
            mobile_no: user.mobile_no.clone(),
            c_id: user.c_id,
            active: user.active,
            whatsapp_otp: user.whatsapp_otp,
            email_otp: user.email_otp,
            created_date: user.created_date.clone(),
        }
    }

    /// Username is fixed once the account exists.
    pub fn is_edit(&self) -> bool {
        self.user_id != 0
    }

    /// Select the only company when there is exactly one and none is set.
    pub fn apply_company_default(&mut self, companies: &[Company]) {
        if let [only] = companies
            && self.c_id == 0
        {
            self.c_id = only.c_id;
        }
    }

    /// # Errors
    ///
    /// Returns the field errors that block submission.
    pub fn validate(&self) -> Result<User, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("userName", &self.user_name, "Username is required");
        if !self.is_edit() {
            errors.require("userPassword", &self.user_password, "Password is required");
        }
        errors.require("firstName", &self.first_name, "First name is required");
        errors.require("lastName", &self.last_name, "Last name is required");
        errors.require("emailId", &self.email_id, "Email is required");
        if !self.email_id.trim().is_empty() && !self.email_id.contains('@') {
            errors.add("emailId", "Enter a valid email address");
        }
        errors.require("mobileNo", &self.mobile_no, "Mobile number is required");
        if self.c_id == 0 {
            errors.add("cId", "Select a company");
        }
        errors.into_result()?;

        let password = self.user_password.trim();
        Ok(User {
            user_id: self.user_id,
            user_name: self.user_name.trim().to_owned(),
            user_password: (!password.is_empty()).then(|| password.to_owned()),
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email_id: self.email_id.trim().to_owned(),
            mobile_no: self.mobile_no.trim().to_owned(),
            active: self.active,
            c_id: self.c_id,
            whatsapp_otp: self.whatsapp_otp,
            email_otp: self.email_otp,
            created_date: self.created_date.clone(),
        })
    }
}

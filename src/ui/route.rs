//! Pages of the console and their paths.

use std::fmt;

use crate::model::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    AddUser,
    EditUser(UserId),
    UserInfo(UserId),
    About,
}

impl Route {
    /// Parses `/`, `/addUser`, `/editUser/:id`, `/userInfo/:id` and `/about`.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_end_matches('/');
        let mut segments = trimmed.split('/').skip(1);
        let route = match (segments.next(), segments.next()) {
            (None, None) => Route::Home,
            (Some("addUser"), None) => Route::AddUser,
            (Some("about"), None) => Route::About,
            (Some("editUser"), Some(id)) if !id.is_empty() => Route::EditUser(UserId::from(id)),
            (Some("userInfo"), Some(id)) if !id.is_empty() => Route::UserInfo(UserId::from(id)),
            _ => return None,
        };
        if segments.next().is_some() || (!trimmed.is_empty() && !trimmed.starts_with('/')) {
            return None;
        }
        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::AddUser => "/addUser".to_string(),
            Route::EditUser(id) => format!("/editUser/{}", id),
            Route::UserInfo(id) => format!("/userInfo/{}", id),
            Route::About => "/about".to_string(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "User Management",
            Route::AddUser => "Add User",
            Route::EditUser(_) => "Edit User",
            Route::UserInfo(_) => "User Detail",
            Route::About => "About",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

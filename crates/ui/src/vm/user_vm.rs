use portal_core::model::{Role, User, UserStatus};

/// One row of the admin user table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRowVm {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role_label: &'static str,
    pub role_class: &'static str,
    pub status_label: &'static str,
    pub status_class: &'static str,
}

#[must_use]
pub fn map_user_row(user: &User) -> UserRowVm {
    let (role_label, role_class) = match user.role() {
        Role::Admin => ("Admin", "badge badge--admin"),
        Role::User => ("User", "badge badge--user"),
    };
    let (status_label, status_class) = match user.status() {
        UserStatus::Active => ("Active", "badge badge--active"),
        UserStatus::Inactive => ("Inactive", "badge badge--inactive"),
    };
    UserRowVm {
        id: user.id().value(),
        name: user.name().to_string(),
        email: user.email().to_string(),
        role_label,
        role_class,
        status_label,
        status_class,
    }
}

//! Role-based navigation
//!
//! Maps the role returned at login to the first screen shown. The mapping is
//! trusted as-is; nothing is confirmed with the server.

pub use crate::shared::models::Role;

/// Screen the app lands on after login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    AdminDashboard,
    TeacherDashboard,
    StudentHome,
    Login,
}

impl Destination {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Destination::AdminDashboard,
            Role::Professor => Destination::TeacherDashboard,
            Role::Student => Destination::StudentHome,
        }
    }

    /// Route name used by the navigation graph
    pub fn route(&self) -> &'static str {
        match self {
            Destination::AdminDashboard => "admin_dashboard_screen",
            Destination::TeacherDashboard => "teacher_dashboard_screen",
            Destination::StudentHome => "home_screen",
            Destination::Login => "main_screen",
        }
    }
}

/// Destination for a raw role label
pub fn destination_for(role: &str) -> Destination {
    Destination::for_role(Role::from_label(role))
}

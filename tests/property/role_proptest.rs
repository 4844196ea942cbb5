//! Property-based tests for role-based navigation

use lengua_client::client::navigation::{destination_for, Destination};
use lengua_client::shared::models::{LoginOutcome, LoginResponse};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_unknown_roles_land_on_student_home(role in "\\PC*") {
        prop_assume!(role != "admin" && role != "profesor");
        prop_assert_eq!(destination_for(&role), Destination::StudentHome);
    }

    #[test]
    fn test_login_role_is_kept_or_defaulted(token in "[a-zA-Z0-9]{1,40}", role in proptest::option::of("[a-z]{1,12}")) {
        let outcome = LoginOutcome::from(LoginResponse { token: token.clone(), role: role.clone() });
        prop_assert_eq!(outcome.token, token);
        prop_assert_eq!(outcome.role, role.unwrap_or_else(|| "student".to_string()));
    }
}

#[test]
fn test_known_roles() {
    assert_eq!(destination_for("admin"), Destination::AdminDashboard);
    assert_eq!(destination_for("profesor"), Destination::TeacherDashboard);
}

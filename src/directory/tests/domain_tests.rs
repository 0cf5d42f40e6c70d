//! Domain-focused tests for identity validation and user records.

use crate::directory::domain::{
    CompanyId, DirectoryDomainError, ParseUserRoleError, UserId, UserRecord, UserRole,
};
use rstest::rstest;

#[rstest]
#[case("u1")]
#[case("  u1  ")]
fn user_id_normalizes_surrounding_whitespace(#[case] raw: &str) {
    let id = UserId::new(raw).expect("valid user id");
    assert_eq!(id.as_str(), "u1");
}

#[rstest]
#[case("")]
#[case("   ")]
fn user_id_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(UserId::new(raw), Err(DirectoryDomainError::BlankUserId));
}

#[rstest]
#[case("")]
#[case("   ")]
fn company_id_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(CompanyId::new(raw), Err(DirectoryDomainError::BlankCompanyId));
}

#[rstest]
#[case(UserRole::Admin, "admin")]
#[case(UserRole::Supervisor, "supervisor")]
#[case(UserRole::Employee, "employee")]
fn user_role_round_trips_storage_representation(#[case] role: UserRole, #[case] repr: &str) {
    assert_eq!(role.as_str(), repr);
    assert_eq!(UserRole::try_from(repr), Ok(role));
}

#[rstest]
fn user_role_parse_trims_and_ignores_case() {
    assert_eq!(UserRole::try_from("  Supervisor "), Ok(UserRole::Supervisor));
}

#[rstest]
fn user_role_parse_rejects_unknown_values() {
    assert_eq!(
        UserRole::try_from("owner"),
        Err(ParseUserRoleError("owner".to_owned()))
    );
}

#[rstest]
fn user_record_starts_active_with_trimmed_name() {
    let id = UserId::new("u1").expect("valid user id");
    let company_id = CompanyId::new("c1").expect("valid company id");
    let record = UserRecord::new(id, company_id, "  Alex Chen ", UserRole::Employee)
        .expect("valid user record");

    assert_eq!(record.display_name(), "Alex Chen");
    assert!(record.is_active());
}

#[rstest]
fn user_record_rejects_blank_display_name() {
    let id = UserId::new("u1").expect("valid user id");
    let company_id = CompanyId::new("c1").expect("valid company id");
    let result = UserRecord::new(id, company_id, "   ", UserRole::Employee);

    assert_eq!(result, Err(DirectoryDomainError::BlankDisplayName));
}

#[rstest]
fn user_record_deactivate_clears_active_flag() {
    let id = UserId::new("u1").expect("valid user id");
    let company_id = CompanyId::new("c1").expect("valid company id");
    let mut record =
        UserRecord::new(id, company_id, "Alex Chen", UserRole::Admin).expect("valid user record");

    record.deactivate();

    assert!(!record.is_active());
}

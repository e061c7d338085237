use super::*;

#[test]
fn starts_as_guest() {
    let auth = AuthState::default();
    let view = auth.view();
    assert!(view.show_login && view.show_signup);
    assert!(!view.show_signout && !view.show_profile_info && !view.show_dividers);
    assert_eq!(view.user_name, GUEST_NAME);
}

#[test]
fn login_names_user_after_email_local_part() {
    let mut auth = AuthState::default();
    let view = auth.login("ada@example.com");
    assert_eq!(view.user_name, "ada");
    assert!(view.show_signout && view.show_profile_info && view.show_dividers);
    assert!(!view.show_login && !view.show_signup);
    assert_eq!(auth.user().unwrap().email, "ada@example.com");
}

#[test]
fn login_without_at_sign_uses_whole_string() {
    let mut auth = AuthState::default();
    assert_eq!(auth.login("operator").user_name, "operator");
    assert_eq!(auth.login("").user_name, "");
}

#[test]
fn signup_uses_given_name() {
    let mut auth = AuthState::default();
    let view = auth.signup("Grace Hopper", "grace@navy.mil");
    assert_eq!(view.user_name, "Grace Hopper");
    assert!(auth.is_logged_in());
}

#[test]
fn logout_returns_to_guest() {
    let mut auth = AuthState::default();
    auth.login("ada@example.com");
    let view = auth.logout();
    assert_eq!(view, AuthState::default().view());
    assert!(auth.user().is_none());
}

/// Signed-in user. Nothing is verified; any email is accepted.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

pub const GUEST_NAME: &str = "Guest User";

/// Visibility of the profile-menu entries after an auth transition.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct AuthView {
    pub show_login: bool,
    pub show_signup: bool,
    pub show_signout: bool,
    pub show_profile_info: bool,
    pub show_dividers: bool,
    pub user_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    user: Option<User>,
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// The display name is everything before the first `@`.
    pub fn login(&mut self, email: &str) -> AuthView {
        let name = email.split('@').next().unwrap_or_default();
        self.user = Some(User {
            name: name.to_string(),
            email: email.to_string(),
        });
        self.view()
    }

    pub fn signup(&mut self, name: &str, email: &str) -> AuthView {
        self.user = Some(User {
            name: name.to_string(),
            email: email.to_string(),
        });
        self.view()
    }

    pub fn logout(&mut self) -> AuthView {
        self.user = None;
        self.view()
    }

    pub fn view(&self) -> AuthView {
        let logged_in = self.is_logged_in();
        AuthView {
            show_login: !logged_in,
            show_signup: !logged_in,
            show_signout: logged_in,
            show_profile_info: logged_in,
            show_dividers: logged_in,
            user_name: self
                .user
                .as_ref()
                .map_or_else(|| GUEST_NAME.to_string(), |u| u.name.clone()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glue/auth.rs"]
mod tests;

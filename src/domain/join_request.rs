use serde::{Deserialize, Serialize};

/// Sign-up form submitted by a new member.
///
/// Field order is significant: it is the key order of the encoded JSON object.
/// No validation happens here, the form is carried as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
}

impl JoinRequest {
    pub fn builder() -> JoinRequestBuilder {
        JoinRequestBuilder::default()
    }
}

// Passwords stay out of anything that may end up in a log line.
impl std::fmt::Display for JoinRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JoinRequest(email={}, name={})", self.email, self.name)
    }
}

/// Fluent construction of a [`JoinRequest`]. Fields left unset are empty.
#[derive(Debug, Default)]
pub struct JoinRequestBuilder {
    inner: JoinRequest,
}

impl JoinRequestBuilder {
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.inner.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.inner.password = password.into();
        self
    }

    pub fn confirm_password(mut self, confirm_password: impl Into<String>) -> Self {
        self.inner.confirm_password = confirm_password.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = name.into();
        self
    }

    pub fn build(self) -> JoinRequest {
        self.inner
    }
}

//! Authentication-override query parameters.
//!
//! A credential form either overrides the globally configured TeamForge
//! credentials with its own url/username/password, or inherits them. The
//! decision is encoded as a query fragment:
//!
//! ```text
//! [url=<enc>&username=<enc>&password=<enc>&]override_auth=<true|false>
//! ```
//!
//! Forms without an `override_auth` checkbox always override.

use std::fmt;

use crate::error::{AuthParamError, AuthParamResult};
use crate::escape::escape_value;
use crate::form::{Field, FieldPrefix, FormFields};

/// Query key carrying the TeamForge base URL.
pub const URL_PARAM: &str = "url";
/// Query key carrying the username.
pub const USERNAME_PARAM: &str = "username";
/// Query key carrying the password.
pub const PASSWORD_PARAM: &str = "password";
/// Query key carrying the override decision.
pub const OVERRIDE_AUTH_PARAM: &str = "override_auth";

/// Credentials entered on the form.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub url: String,
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read the credential triple for `prefix`.
    fn read<F: FormFields + ?Sized>(form: &F, prefix: &FieldPrefix) -> AuthParamResult<Self> {
        let read = |field: Field| -> AuthParamResult<String> {
            let id = prefix.field_name(field);
            match form.value_by_id(&id) {
                Some(value) => Ok(value.to_string()),
                None => Err(AuthParamError::missing(id)),
            }
        };

        Ok(Self {
            url: read(Field::CollabNetUrl)?,
            username: read(Field::Username)?,
            password: read(Field::Password)?,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Authentication decision for one credential form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOverride {
    /// Use the credentials entered on the form.
    Override(Credentials),

    /// Use the globally configured credentials.
    Inherit,
}

impl AuthOverride {
    pub fn new_override(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::Override(Credentials::new(url, username, password))
    }

    pub fn inherit() -> Self {
        Self::Inherit
    }

    /// Read the decision for `prefix` from a form.
    ///
    /// Credential fields are only read when the form overrides.
    pub fn from_form<F: FormFields + ?Sized>(
        form: &F,
        prefix: &FieldPrefix,
    ) -> AuthParamResult<Self> {
        let decision = if override_requested(form, prefix) {
            Self::Override(Credentials::read(form, prefix)?)
        } else {
            Self::Inherit
        };

        tracing::debug!(
            prefix = %prefix,
            override_auth = decision.override_auth(),
            "resolved auth override"
        );

        Ok(decision)
    }

    pub fn override_auth(&self) -> bool {
        matches!(self, Self::Override(_))
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        match self {
            Self::Override(credentials) => Some(credentials),
            Self::Inherit => None,
        }
    }

    /// Encode the decision as a query fragment.
    pub fn to_query_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AuthOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Self::Override(credentials) = self {
            write!(
                f,
                "{}={}&{}={}&{}={}&",
                URL_PARAM,
                escape_value(&credentials.url),
                USERNAME_PARAM,
                escape_value(&credentials.username),
                PASSWORD_PARAM,
                escape_value(&credentials.password),
            )?;
        }
        write!(f, "{}={}", OVERRIDE_AUTH_PARAM, self.override_auth())
    }
}

/// Whether the form for `prefix` overrides the global credentials.
///
/// Without an `override_auth` checkbox there is nothing to choose, so the
/// form always overrides. Otherwise the first checkbox with that name decides.
pub fn override_requested<F: FormFields + ?Sized>(form: &F, prefix: &FieldPrefix) -> bool {
    let name = prefix.field_name(Field::OverrideAuth);
    match form.checked_by_name(&name).first() {
        Some(&checked) => checked,
        None => {
            tracing::debug!(field = %name, "no override choice, overriding");
            true
        }
    }
}

/// Build the authentication parameter string for `prefix`.
///
/// ```
/// use cnauth_core::{build_auth_param_str, FormSnapshot};
///
/// let form = FormSnapshot::new()
///     .with_value("p.collabneturl", "http://x")
///     .with_value("p.username", "u")
///     .with_value("p.password", "pw");
///
/// assert_eq!(
///     build_auth_param_str(&form, "p").unwrap(),
///     "url=http%3A//x&username=u&password=pw&override_auth=true"
/// );
/// ```
pub fn build_auth_param_str<F: FormFields + ?Sized>(
    form: &F,
    prefix: &str,
) -> AuthParamResult<String> {
    let prefix = FieldPrefix::new(prefix)?;
    Ok(AuthOverride::from_form(form, &prefix)?.to_query_string())
}

//! Read-only access to the credential form.
//!
//! A credential form renders four fields per prefix:
//!
//! | Field | Kind | Required |
//! |-------|------|----------|
//! | `<prefix>.override_auth` | checkbox, looked up by name | no |
//! | `<prefix>.collabneturl` | text, looked up by id | when overriding |
//! | `<prefix>.username` | text, looked up by id | when overriding |
//! | `<prefix>.password` | password, looked up by id | when overriding |
//!
//! [`FormFields`] is the seam the builder reads through. [`FormSnapshot`] is a
//! serializable in-memory form used by the CLI and in tests.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AuthParamError, AuthParamResult};

/// Field lookups a hosting page provides.
pub trait FormFields {
    /// Checked state of every element named `name`, in document order.
    fn checked_by_name(&self, name: &str) -> Vec<bool>;

    /// Value of the element whose identifier is `id`.
    fn value_by_id(&self, id: &str) -> Option<&str>;
}

impl<T: FormFields + ?Sized> FormFields for &T {
    fn checked_by_name(&self, name: &str) -> Vec<bool> {
        (**self).checked_by_name(name)
    }

    fn value_by_id(&self, id: &str) -> Option<&str> {
        (**self).value_by_id(id)
    }
}

/// The fields rendered for one credential prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    OverrideAuth,
    CollabNetUrl,
    Username,
    Password,
}

impl Field {
    /// Suffix appended to the prefix to form the field name.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::OverrideAuth => "override_auth",
            Self::CollabNetUrl => "collabneturl",
            Self::Username => "username",
            Self::Password => "password",
        }
    }
}

/// Namespace shared by the fields of one credential form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPrefix(String);

impl FieldPrefix {
    /// Create a prefix. The value is used verbatim; only empty prefixes are rejected.
    pub fn new(prefix: impl Into<String>) -> AuthParamResult<Self> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(AuthParamError::InvalidPrefix {
                prefix,
                reason: "prefix cannot be empty".to_string(),
            });
        }
        Ok(Self(prefix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full name (and id) of `field` under this prefix.
    pub fn field_name(&self, field: Field) -> String {
        format!("{}.{}", self.0, field.suffix())
    }
}

impl fmt::Display for FieldPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FieldPrefix {
    type Err = AuthParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for FieldPrefix {
    type Error = AuthParamError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// One rendered form element.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormElement {
    pub name: String,

    /// Element identifier; defaults to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub checked: bool,

    #[serde(default)]
    pub value: String,
}

impl FormElement {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }
}

// Values can hold passwords.
impl fmt::Debug for FormElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormElement")
            .field("name", &self.name)
            .field("id", &self.id)
            .field("checked", &self.checked)
            .field("value_len", &self.value.len())
            .finish()
    }
}

/// Serializable view of a rendered form.
///
/// ```
/// use cnauth_core::form::{FormFields, FormSnapshot};
///
/// let form = FormSnapshot::from_yaml_str(
///     "elements:\n  - name: repo.override_auth\n    checked: true\n",
/// )
/// .unwrap();
/// assert_eq!(form.checked_by_name("repo.override_auth"), vec![true]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormSnapshot {
    #[serde(default)]
    pub elements: Vec<FormElement>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a snapshot from YAML (JSON is accepted as well).
    pub fn from_yaml_str(content: &str) -> AuthParamResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> AuthParamResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AuthParamError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let snapshot = Self::from_yaml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            elements = snapshot.elements.len(),
            "loaded form snapshot"
        );
        Ok(snapshot)
    }

    pub fn with_element(mut self, element: FormElement) -> Self {
        self.elements.push(element);
        self
    }

    /// Add a checkbox-like element.
    pub fn with_checkbox(self, name: impl Into<String>, checked: bool) -> Self {
        self.with_element(FormElement {
            name: name.into(),
            checked,
            ..FormElement::default()
        })
    }

    /// Add a text-like element whose id equals its name.
    pub fn with_value(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_element(FormElement {
            name: name.into(),
            value: value.into(),
            ..FormElement::default()
        })
    }
}

impl FormFields for FormSnapshot {
    fn checked_by_name(&self, name: &str) -> Vec<bool> {
        self.elements
            .iter()
            .filter(|e| e.name == name)
            .map(|e| e.checked)
            .collect()
    }

    fn value_by_id(&self, id: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|e| e.id() == id)
            .map(|e| e.value.as_str())
    }
}

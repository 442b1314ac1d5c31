use chrono::{DateTime, Utc};

/// A user record. Owned exclusively by the store; handlers work on clones.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Store-assigned, immutable. `0` marks a record not yet inserted.
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Option<String>,
    pub title: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Builds a new, not-yet-inserted record. String fields are trimmed
    /// before storage; both timestamps start at now.
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        department: Option<&str>,
        title: Option<&str>,
        is_active: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.trim().to_string(),
            department: department.map(|d| d.trim().to_string()),
            title: title.map(|t| t.trim().to_string()),
            is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a user record. Every field is optional; absent fields
/// leave the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub title: Option<String>,
    pub is_active: Option<bool>,
}

impl UserPatch {
    /// Applies the patch. The override rules are deliberately asymmetric:
    ///
    /// - `first_name` / `last_name` / `email`: a value overrides only when
    ///   non-blank after trimming — a blank string never clears a name.
    /// - `department` / `title`: any provided value overrides, and an empty
    ///   string clears the field.
    /// - `is_active`: any provided boolean overrides.
    ///
    /// Timestamps are the store's concern, not the patch's.
    pub fn apply(self, user: &mut User) {
        if let Some(v) = non_blank(self.first_name) {
            user.first_name = v;
        }
        if let Some(v) = non_blank(self.last_name) {
            user.last_name = v;
        }
        if let Some(v) = non_blank(self.email) {
            user.email = v;
        }
        if let Some(v) = self.department {
            user.department = Some(v.trim().to_string());
        }
        if let Some(v) = self.title {
            user.title = Some(v.trim().to_string());
        }
        if let Some(v) = self.is_active {
            user.is_active = v;
        }
    }
}

/// Trims the value and drops it entirely when blank.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

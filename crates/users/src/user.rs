use serde::{Deserialize, Serialize};

use charolis_core::{Entity, UserId};

/// Placeholder stored in contact fields a guest never provided.
pub const NOT_AVAILABLE: &str = "N/A";

// ─────────────────────────────────────────────────────────────────────────────
// User Kind
// ─────────────────────────────────────────────────────────────────────────────

/// What a user is allowed to be in the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserKind {
    Administrator,
    Registered,
    Guest,
}

impl core::fmt::Display for UserKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            UserKind::Administrator => write!(f, "administrator"),
            UserKind::Registered => write!(f, "registered"),
            UserKind::Guest => write!(f, "guest"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Contact Details
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl ContactDetails {
    pub fn new(
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// All fields set to [`NOT_AVAILABLE`].
    pub fn unknown() -> Self {
        Self::new(NOT_AVAILABLE, NOT_AVAILABLE, NOT_AVAILABLE)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// User
// ─────────────────────────────────────────────────────────────────────────────

/// A shop user.
///
/// # Invariants
/// - `id` is fixed at construction; updates replace the whole record under the
///   same id.
/// - Guests are created with [`ContactDetails::unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    kind: UserKind,
    name: String,
    contact: ContactDetails,
}

impl User {
    pub fn new(id: UserId, kind: UserKind, name: impl Into<String>, contact: ContactDetails) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            contact,
        }
    }

    pub fn administrator(id: UserId, name: impl Into<String>, contact: ContactDetails) -> Self {
        Self::new(id, UserKind::Administrator, name, contact)
    }

    pub fn registered(id: UserId, name: impl Into<String>, contact: ContactDetails) -> Self {
        Self::new(id, UserKind::Registered, name, contact)
    }

    pub fn guest(id: UserId, name: impl Into<String>) -> Self {
        Self::new(id, UserKind::Guest, name, ContactDetails::unknown())
    }

    pub fn kind(&self) -> UserKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.contact.email
    }

    pub fn phone(&self) -> &str {
        &self.contact.phone
    }

    pub fn address(&self) -> &str {
        &self.contact.address
    }

    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_contact(&mut self, contact: ContactDetails) {
        self.contact = contact;
    }

    /// Case-insensitive exact comparison against the stored email.
    pub fn has_email(&self, email: &str) -> bool {
        self.contact.email.to_lowercase() == email.to_lowercase()
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

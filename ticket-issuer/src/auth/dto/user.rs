use std::{ops::Deref, sync::Arc};

///
/// Struct with user information.
///
/// To make sure cloning does not take too long
/// all fields are stored in InnerUser behind an Arc.
///
/// InnerUser fields are accessible thanks to Deref trait.
///
#[derive(Clone)]
pub struct User {
    inner: Arc<InnerUser>,
}

///
/// User information retrieved from the ID token.
///
pub struct InnerUser {
    /// Subject assigned by identity provider
    pub id: String,

    /// Name that can be displayed on pages
    pub name: String,
}

impl User {
    pub fn new(id: String, name: String) -> Self {
        Self {
            inner: Arc::new(InnerUser { id, name }),
        }
    }
}

impl Deref for User {
    type Target = InnerUser;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

//! Navigation targets.

use std::fmt;

/// A client-side route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The advert list.
    List,
    /// The creation form.
    New,
    /// Detail page of one advert.
    Detail(String),
}

impl Route {
    /// Path for this route, e.g. `/adverts/5f1a`.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::List => "/adverts".to_string(),
            Self::New => "/adverts/new".to_string(),
            Self::Detail(id) => format!("/adverts/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

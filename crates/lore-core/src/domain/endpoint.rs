use std::fmt;

use url::Url;

/// Server endpoint a form submission targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    Register,
}

impl Endpoint {
    pub const SIGN_IN_BUTTON: &'static str = "sign_in_button";
    pub const REGISTER_BUTTON: &'static str = "register_button";

    /// Resolve the endpoint from the id of the control that submitted the form.
    pub fn from_submitter(submitter_id: &str) -> Option<Self> {
        match submitter_id {
            Self::SIGN_IN_BUTTON => Some(Endpoint::Login),
            Self::REGISTER_BUTTON => Some(Endpoint::Register),
            _ => None,
        }
    }

    /// Relative path, resolved against the configured origin.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Login => "login",
            Endpoint::Register => "register",
        }
    }

    pub fn url(&self, origin: &Url) -> Result<Url, url::ParseError> {
        origin.join(self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

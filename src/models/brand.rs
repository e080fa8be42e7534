use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brand {
    #[serde(rename = "honda")]
    Honda,
    #[serde(rename = "hero")]
    Hero,
}

impl Brand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Honda => "Honda",
            Self::Hero => "Hero",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use std::{fmt, str::FromStr};

use crate::{Error, Result, code::is_valid_scope};

/// Visibility of a property or method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// The keyword used in generated source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

impl FromStr for Visibility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if !is_valid_scope(s) {
            return Err(Error::InvalidScope {
                value: s.to_string(),
            });
        }

        Ok(match s {
            "protected" => Self::Protected,
            "private" => Self::Private,
            _ => Self::Public,
        })
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("public".parse::<Visibility>(), Ok(Visibility::Public));
        assert_eq!("protected".parse::<Visibility>(), Ok(Visibility::Protected));
        assert_eq!("private".parse::<Visibility>(), Ok(Visibility::Private));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "internal".parse::<Visibility>(),
            Err(Error::InvalidScope {
                value: "internal".into()
            })
        );
    }

    #[test]
    fn test_default_is_public() {
        assert_eq!(Visibility::default(), Visibility::Public);
        assert_eq!(Visibility::default().to_string(), "public");
    }
}

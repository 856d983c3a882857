//! Free-text status values.
//!
//! Statuses are persisted as plain strings. Known values get a variant of
//! their own; anything else is kept verbatim in `Other` so it survives a
//! read-write cycle unchanged.

macro_rules! status_enum {
  (
    $(#[$meta:meta])*
    $name:ident { $($variant:ident => $text:literal),+ $(,)? }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
    #[serde(from = "String", into = "String")]
    pub enum $name {
      $($variant,)+
      Other(String),
    }

    impl $name {
      /// The persisted string form.
      pub fn as_str(&self) -> &str {
        match self {
          $(Self::$variant => $text,)+
          Self::Other(s) => s.as_str(),
        }
      }
    }

    impl From<String> for $name {
      fn from(s: String) -> Self {
        match s.as_str() {
          $($text => Self::$variant,)+
          _ => Self::Other(s),
        }
      }
    }

    impl From<&str> for $name {
      fn from(s: &str) -> Self { Self::from(s.to_owned()) }
    }

    impl From<$name> for String {
      fn from(status: $name) -> Self {
        match status {
          $name::Other(s) => s,
          known => known.as_str().to_owned(),
        }
      }
    }

    impl std::fmt::Display for $name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
      }
    }
  };
}

pub(crate) use status_enum;

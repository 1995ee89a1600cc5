//! Macro for implementing Display and FromStr for wire enums
//!
//! Every status-like enum the backend exchanges as a lowercase string
//! (`"active"`, `"freelancer"`, `"google_calendar"`, ...) gets its text
//! conversions from one place so the table view, the form select options and
//! the CLI argument parser all agree on spelling.
//!
//! # Example
//!
//! ```rust
//! use bizhub_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Priority {
//!     Low,
//!     High,
//! }
//!
//! impl_domain_status_conversions!(Priority {
//!     Low => "low",
//!     High => "high",
//! });
//!
//! assert_eq!(Priority::High.to_string(), "high");
//! assert_eq!("LOW".parse::<Priority>().unwrap(), Priority::Low);
//! ```

/// Implements `Display`, `FromStr` and an `ALL` variant table for wire enums
///
/// - Display writes the wire string
/// - FromStr parses case-insensitively
/// - `ALL` lists every variant in declaration order (used for select options)
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$enum_name] = &[$($enum_name::$variant),+];

            /// Wire representation of the variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

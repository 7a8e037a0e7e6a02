/// Creates an enum with various traits.
/// Converting a value without a matching variant fails with
/// `Error::InvalidValue`. When the variant list ends with `; Other`, the enum
/// gets an `Other(ty)` variant holding any unmatched value and converting
/// never fails.
#[macro_export]
macro_rules! extended_enum {
    ($(#[$outer:meta])* $name:ident, $ty:ty, $($(#[$inner:meta])* $var:ident => $val:expr),+ ; $(#[$other_doc:meta])* $other:ident $(,)*) => (

        $(#[$outer])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$inner])*
                $var,
            )*
            $(#[$other_doc])*
            $other($ty),
        }

        impl $name {
            /// Symbolic name of the variant
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$var => stringify!($var), )*
                    $name::$other(_) => stringify!($other),
                }
            }
        }

        impl From<$ty> for $name {
            fn from(v: $ty) -> Self {
                match v {
                    $( $val => $name::$var,)*
                    _ => $name::$other(v),
                }
            }
        }

        impl From<$name> for $ty {
            fn from(v: $name) -> Self {
                match v {
                    $( $name::$var => $val, )*
                    $name::$other(value) => value,
                }
            }
        }

        impl PartialEq<$name> for $ty {
            fn eq(&self, other: &$name) -> bool {
                *self == <$ty>::from(*other)
            }
        }
    );
    ($(#[$outer:meta])* $name:ident, $ty:ty, $($(#[$inner:meta])* $var:ident => $val:expr),+ $(,)*) => (

        $(#[$outer])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$inner])*
                $var,
            )*
        }

        impl $name {
            /// Symbolic name of the variant
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$var => stringify!($var), )*
                }
            }
        }

        impl core::convert::TryFrom<$ty> for $name {
            type Error = $crate::error::Error;

            fn try_from(v: $ty) -> Result<Self, Self::Error> {
                match v {
                    $( $val => Ok($name::$var),)*
                    _ => Err($crate::error::Error::InvalidValue),
                }
            }
        }

        impl From<$name> for $ty {
            fn from(v: $name) -> Self {
                match v {
                    $( $name::$var => $val, )*
                }
            }
        }

        impl PartialEq<$name> for $ty {
            fn eq(&self, other: &$name) -> bool {
                match *other {
                    $( $name::$var => *self == $val, )*
                }
            }
        }
    );
}

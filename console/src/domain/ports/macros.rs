//! Helper macro for generating driven-port error enums.
//!
//! Each variant gets a snake-case constructor accepting `impl Into<T>` for
//! its fields, so adapters can write `BoardQueryError::decode("...")`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for the generated constructors.
    define_port_error! {
        pub enum ExamplePortError {
            Unavailable => "unavailable",
            Transport { message: String } => "transport: {message}",
            Status { code: u16 } => "status: {code}",
            Mixed { message: String, code: u16 } => "mixed: {message} ({code})",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExamplePortError::transport("reset");
        assert_eq!(err.to_string(), "transport: reset");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = ExamplePortError::status(503_u16);
        assert_eq!(err.to_string(), "status: 503");
    }

    #[test]
    fn constructors_support_mixed_and_unit_variants() {
        assert_eq!(ExamplePortError::mixed("hi", 1_u16).to_string(), "mixed: hi (1)");
        assert_eq!(ExamplePortError::unavailable(), ExamplePortError::Unavailable);
    }
}

//! Declaration macro for schema types.

/// Declare a schema type together with its field descriptor table.
///
/// Required fields become plain struct fields taken by `new`, optional fields
/// become [`Field`](crate::Field)s that start out absent and get a same-named
/// builder method. Emission order is required fields first, then optional
/// fields, each in the order written.
///
/// Top-level API objects name their `apiVersion` and `kind` after `=>`; both
/// are stored as leading fields and filled in by `new`.
///
/// ```
/// use gybe_model::{resource, Field, Resource};
///
/// resource! {
///     /// A port exposed by a widget.
///     pub struct WidgetPort {
///         required {
///             port: i32 => "port",
///         }
///         optional {
///             name: String => "name",
///             type_: String => "type",
///         }
///     }
/// }
///
/// let port = WidgetPort::new(8080).type_("TCP");
/// assert_eq!(port.name, Field::Absent);
/// assert_eq!(port.fields()[2].wire_name, "type");
/// ```
#[macro_export]
macro_rules! resource {
    (@define [$($meta:tt)*] $vis:vis $name:ident
        [$( [$($rmeta:tt)*] $rfield:ident : $rty:ty => $rwire:literal ),* $(,)?]
        [$( [$($ometa:tt)*] $ofield:ident : $oty:ty => $owire:literal ),* $(,)?]
    ) => {
        $($meta)*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $( $($rmeta)* pub $rfield: $rty, )*
            $( $($ometa)* pub $ofield: $crate::Field<$oty>, )*
        }

        impl $name {
            /// Declared fields in emission order.
            pub const FIELDS: &'static [$crate::FieldDescriptor] = &[
                $( $crate::FieldDescriptor::required(stringify!($rfield), $rwire), )*
                $( $crate::FieldDescriptor::optional(stringify!($ofield), $owire), )*
            ];

            $(
                #[doc = concat!("Set `", $owire, "`.")]
                pub fn $ofield(mut self, value: impl Into<$oty>) -> Self {
                    self.$ofield = $crate::Field::Present(value.into());
                    self
                }
            )*
        }

        impl $crate::Resource for $name {
            fn schema_name(&self) -> &str {
                stringify!($name)
            }

            fn fields(&self) -> Vec<$crate::FieldEntry<'_>> {
                let values: Vec<$crate::FieldValue<'_>> = vec![
                    $( $crate::ToFieldValue::to_field_value(&self.$rfield), )*
                    $( $crate::ToFieldValue::to_field_value(&self.$ofield), )*
                ];
                Self::FIELDS
                    .iter()
                    .zip(values)
                    .map(|(descriptor, value)| $crate::FieldEntry::from_descriptor(descriptor, value))
                    .collect()
            }
        }

        impl $crate::ToFieldValue for $name {
            fn to_field_value(&self) -> $crate::FieldValue<'_> {
                $crate::FieldValue::Resource(self)
            }
        }
    };

    (@ctor $name:ident [$( $rfield:ident : $rty:ty ),*] [$( $ofield:ident ),*] $( $pre:ident = $pval:literal ),*) => {
        impl $name {
            #[allow(clippy::new_without_default, clippy::too_many_arguments)]
            pub fn new($( $rfield: impl Into<$rty> ),*) -> Self {
                Self {
                    $( $pre: $pval.to_string(), )*
                    $( $rfield: $rfield.into(), )*
                    $( $ofield: $crate::Field::Absent, )*
                }
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident => $api_version:literal, $kind:literal {
            required {
                $( $(#[$rmeta:meta])* $rfield:ident : $rty:ty => $rwire:literal ),* $(,)?
            }
            optional {
                $( $(#[$ometa:meta])* $ofield:ident : $oty:ty => $owire:literal ),* $(,)?
            }
        }
    ) => {
        $crate::resource! { @define [$(#[$meta])*] $vis $name
            [
                [#[doc = "APIVersion defines the versioned schema of this representation of an object."]]
                api_version : String => "apiVersion",
                [#[doc = "Kind is a string value representing the REST resource this object represents."]]
                kind : String => "kind"
                $( , [$(#[$rmeta])*] $rfield : $rty => $rwire )*
            ]
            [ $( [$(#[$ometa])*] $ofield : $oty => $owire ),* ]
        }

        $crate::resource! { @ctor $name [$( $rfield : $rty ),*] [$( $ofield ),*]
            api_version = $api_version, kind = $kind }

        impl $crate::ApiObject for $name {
            const API_VERSION: &'static str = $api_version;
            const KIND: &'static str = $kind;
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            required {
                $( $(#[$rmeta:meta])* $rfield:ident : $rty:ty => $rwire:literal ),* $(,)?
            }
            optional {
                $( $(#[$ometa:meta])* $ofield:ident : $oty:ty => $owire:literal ),* $(,)?
            }
        }
    ) => {
        $crate::resource! { @define [$(#[$meta])*] $vis $name
            [ $( [$(#[$rmeta])*] $rfield : $rty => $rwire ),* ]
            [ $( [$(#[$ometa])*] $ofield : $oty => $owire ),* ]
        }

        $crate::resource! { @ctor $name [$( $rfield : $rty ),*] [$( $ofield ),*] }
    };
}

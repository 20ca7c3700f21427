//! Newtype ids for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe id wrappers that prevent
//! accidentally mixing ids from different entity types. All entities are
//! keyed by UUIDs generated by the database.

use uuid::Uuid;

/// Macro to define a type-safe id wrapper.
///
/// Creates a newtype wrapper around [`Uuid`] with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_uuid()`
/// - `From<Uuid>` and `Into<Uuid>` implementations
/// - `sqlx` `Type`, `Encode`, and `Decode` implementations (with `postgres` feature)
///
/// # Example
///
/// ```rust
/// # use mam_cung_core::define_id;
/// # use uuid::Uuid;
/// define_id!(OfferingId);
/// define_id!(OrderId);
///
/// let offering_id = OfferingId::new(Uuid::nil());
/// let order_id = OrderId::new(Uuid::nil());
///
/// // These are different types, so this won't compile:
/// // let _: OfferingId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(::uuid::Uuid);

        impl $name {
            /// Create a new id from a UUID value.
            #[must_use]
            pub const fn new(id: ::uuid::Uuid) -> Self {
                Self(id)
            }

            /// Get the underlying UUID value.
            #[must_use]
            pub const fn as_uuid(&self) -> ::uuid::Uuid {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<::uuid::Uuid> for $name {
            fn from(id: ::uuid::Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for ::uuid::Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        #[cfg(feature = "postgres")]
        impl ::sqlx::Type<::sqlx::Postgres> for $name {
            fn type_info() -> ::sqlx::postgres::PgTypeInfo {
                <::uuid::Uuid as ::sqlx::Type<::sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &::sqlx::postgres::PgTypeInfo) -> bool {
                <::uuid::Uuid as ::sqlx::Type<::sqlx::Postgres>>::compatible(ty)
            }
        }

        #[cfg(feature = "postgres")]
        impl<'r> ::sqlx::Decode<'r, ::sqlx::Postgres> for $name {
            fn decode(
                value: ::sqlx::postgres::PgValueRef<'r>,
            ) -> ::core::result::Result<Self, ::sqlx::error::BoxDynError> {
                let id = <::uuid::Uuid as ::sqlx::Decode<::sqlx::Postgres>>::decode(value)?;
                Ok(Self(id))
            }
        }

        #[cfg(feature = "postgres")]
        impl ::sqlx::Encode<'_, ::sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut ::sqlx::postgres::PgArgumentBuffer,
            ) -> ::std::result::Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError> {
                <::uuid::Uuid as ::sqlx::Encode<::sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }
    };
}

// Define standard entity ids
define_id!(UserId);
define_id!(CategoryId);
define_id!(OfferingId);
define_id!(OrderId);
define_id!(ReviewId);

impl OrderId {
    /// Human-facing order code: the first 8 hex characters of the UUID,
    /// uppercased. Display only, never used for lookups.
    #[must_use]
    pub fn short_code(&self) -> String {
        self.0
            .simple()
            .to_string()
            .chars()
            .take(8)
            .collect::<String>()
            .to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_distinct_types() {
        let raw = Uuid::nil();
        let offering = OfferingId::new(raw);
        let order = OrderId::new(raw);
        assert_eq!(offering.as_uuid(), order.as_uuid());
    }

    #[test]
    fn test_display_is_hyphenated_uuid() {
        let raw = Uuid::parse_str("c56a4180-65aa-42ec-a945-5fd21dec0538").unwrap();
        assert_eq!(
            UserId::new(raw).to_string(),
            "c56a4180-65aa-42ec-a945-5fd21dec0538"
        );
    }

    #[test]
    fn test_order_short_code() {
        let raw = Uuid::parse_str("c56a4180-65aa-42ec-a945-5fd21dec0538").unwrap();
        assert_eq!(OrderId::new(raw).short_code(), "C56A4180");
    }

    #[test]
    fn test_serde_transparent() {
        let raw = Uuid::parse_str("c56a4180-65aa-42ec-a945-5fd21dec0538").unwrap();
        let json = serde_json::to_string(&OfferingId::new(raw)).unwrap();
        assert_eq!(json, "\"c56a4180-65aa-42ec-a945-5fd21dec0538\"");
    }
}

//! A set of macros for easily working with internals.

/// Implements `PartialEq`, `Eq` and `Hash` for a model in terms of a single identifying field.
///
/// The remaining fields of the model take no part in comparisons, mirroring how the API
/// identifies its objects.
macro_rules! identity_eq {
    ($($(#[$attr:meta])* $name:ident => $field:ident;)*) => {
        $(
            $(#[$attr])*
            impl PartialEq for $name {
                fn eq(&self, other: &Self) -> bool {
                    self.$field == other.$field
                }
            }

            impl Eq for $name {}

            impl std::hash::Hash for $name {
                fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                    std::hash::Hash::hash(&self.$field, state);
                }
            }
        )*
    }
}

/// Implements [`Medium`] for file-like models, and equality over their `file_unique_id`.
///
/// Passing `thumbed` also implements [`ThumbedMedium`] over a `thumb` field.
///
/// [`Medium`]: crate::model::Medium
/// [`ThumbedMedium`]: crate::model::ThumbedMedium
macro_rules! medium {
    ($name:ident) => {
        identity_eq! {
            $name => file_unique_id;
        }

        impl $crate::model::Medium for $name {
            fn file_id(&self) -> &str {
                &self.file_id
            }

            fn file_unique_id(&self) -> &str {
                &self.file_unique_id
            }

            fn file_size(&self) -> Option<u64> {
                self.file_size
            }
        }
    };
    ($name:ident, thumbed) => {
        medium!($name);

        impl $crate::model::ThumbedMedium for $name {
            fn thumb(&self) -> Option<&$crate::model::PhotoSize> {
                self.thumb.as_ref()
            }
        }
    };
}

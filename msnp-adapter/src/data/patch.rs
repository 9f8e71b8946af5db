/// A partial update of `T`.
///
/// Only the fields present in the patch are written; everything else in the
/// target keeps its value.
pub trait Patch<T> {
    /// Write the supplied fields into `target`.
    fn apply(self, target: &mut T);

    /// True when no field is supplied.
    fn is_empty(&self) -> bool;
}

/// Declares a patch struct whose fields mirror `$target` as `Option`s.
macro_rules! patch_for {
    (
        $(#[$meta:meta])*
        $patch:ident => $target:ty { $($field:ident: $ty:ty),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        pub struct $patch {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $crate::data::Patch<$target> for $patch {
            fn apply(self, target: &mut $target) {
                $(
                    if let Some(value) = self.$field {
                        target.$field = value;
                    }
                )*
            }

            fn is_empty(&self) -> bool {
                true $(&& self.$field.is_none())*
            }
        }
    };
}

pub(crate) use patch_for;

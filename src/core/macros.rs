//! Declarative helper for phase enums.

/// Declare a fieldless phase enum and its [`State`](crate::core::State) impl.
///
/// Variants listed under `accepting` are the ones in which an answer may be
/// evaluated.
///
/// ```
/// use math_quest::core::State;
/// use math_quest::state_enum;
///
/// state_enum! {
///     pub enum Quiz {
///         Asking,
///         Grading,
///     }
///     accepting: [Asking]
/// }
///
/// assert_eq!(Quiz::Grading.name(), "Grading");
/// assert!(Quiz::Asking.accepts_answer());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(accepting: [$($accepting:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn accepts_answer(&self) -> bool {
                match self {
                    $($(Self::$accepting => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}

//! Macros for declaring state identifier enums.

/// Declare an identifier enum and implement [`StateId`](crate::core::StateId) for it.
///
/// The enum gets the derives an identifier needs plus serde support and a
/// `Display` impl that prints the variant name, and `VARIANTS` lists every
/// variant in declaration order. An optional `transitions` block declares
/// the graph and generates a `universe()` constructor. Every variant must
/// appear on the left of that block; a missing one makes `universe()` fail
/// with [`BuildError::UnknownState`](crate::universe::BuildError::UnknownState).
///
/// # Example
///
/// ```
/// use statewise::state_ids;
/// use statewise::core::StateId;
///
/// state_ids! {
///     pub enum Order {
///         Placed,
///         Paid,
///         Shipped,
///         Cancelled,
///     }
///     transitions: {
///         Placed => [Paid, Cancelled],
///         Paid => [Shipped, Cancelled],
///         Shipped => [],
///         Cancelled => [],
///     }
/// }
///
/// let universe = Order::universe().unwrap();
/// assert_eq!(universe.len(), 4);
/// assert_eq!(Order::Paid.name(), "Paid");
/// assert_eq!(Order::Shipped.to_string(), "Shipped");
/// ```
#[macro_export]
macro_rules! state_ids {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(transitions: {
            $($from:ident => [$($to:ident),* $(,)?]),* $(,)?
        })?
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateId for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            $vis const VARIANTS: &'static [Self] = &[$(Self::$variant),*];
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::StateId::name(self))
            }
        }

        $(
            impl $name {
                /// The declared transition graph as a validated universe.
                #[allow(dead_code)]
                $vis fn universe(
                ) -> ::std::result::Result<$crate::universe::Universe<Self>, $crate::universe::BuildError> {
                    let universe = $crate::universe::UniverseBuilder::new()
                        $(.state(Self::$from, [$(Self::$to),*]))*
                        .build()?;
                    for id in Self::VARIANTS {
                        universe.resolve(id)?;
                    }
                    ::std::result::Result::Ok(universe)
                }
            }
        )?
    };
}

//! Identifier trait for state machine states.
//!
//! States never reference each other directly. They name their neighbours
//! by identifier, and every identifier type implements this trait.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state identifiers.
///
/// All methods are pure. Identifiers are small comparable values that
/// uniquely name one state within a universe.
///
/// # Required Traits
///
/// - `Clone`: identifiers are copied into transition sets and history
/// - `Ord` + `Hash`: identifiers are stored in sets and maps
/// - `Debug`: identifiers must be debuggable for diagnostics
/// - `Send` + `Sync`: universes are shareable across threads
///
/// # Example
///
/// ```rust
/// use statewise::core::StateId;
///
/// #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// enum Light {
///     Red,
///     Green,
/// }
///
/// impl StateId for Light {
///     fn name(&self) -> &str {
///         match self {
///             Self::Red => "Red",
///             Self::Green => "Green",
///         }
///     }
/// }
///
/// assert_eq!(Light::Red.name(), "Red");
/// assert_eq!("state1".name(), "state1");
/// ```
pub trait StateId: Clone + Ord + Hash + Debug + Send + Sync {
    /// Get the identifier's name for display and diagnostics.
    fn name(&self) -> &str;
}

impl StateId for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl StateId for &'static str {
    fn name(&self) -> &str {
        self
    }
}

/// Render a set of identifiers as `a, b, c`.
pub(crate) fn join_names<'a, I, It>(ids: It) -> String
where
    I: StateId + 'a,
    It: IntoIterator<Item = &'a I>,
{
    ids.into_iter()
        .map(|id| id.name())
        .collect::<Vec<_>>()
        .join(", ")
}

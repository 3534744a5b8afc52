//! Accessor generation macros
//!
//! These macros eliminate repetitive match code on the `Node` sum type.
//! They use `paste` internally for identifier concatenation.

/// Generate is_xxx, as_xxx, as_xxx_mut for enums with typed variants
///
/// Uses paste's `:camel` modifier to convert the method name to the variant
/// name (and payload type, which share the same name).
///
/// # Generated methods per variant:
/// - `is_xxx(&self) -> bool`
/// - `as_xxx(&self) -> Option<&Type>`
/// - `as_xxx_mut(&mut self) -> Option<&mut Type>`
///
/// # Example
/// ```ignore
/// impl Node {
///     // element -> Element, text -> Text
///     impl_node_accessors!(element, text);
/// }
/// ```
#[macro_export]
macro_rules! impl_node_accessors {
    ($($variant:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Check if this is a " [<$variant:camel>] " node"]
                #[inline]
                pub fn [<is_ $variant>](&self) -> bool {
                    matches!(self, Self::[<$variant:camel>](_))
                }

                #[doc = "Try to get as " $variant " reference"]
                #[inline]
                pub fn [<as_ $variant>](&self) -> Option<&[<$variant:camel>]> {
                    match self { Self::[<$variant:camel>](v) => Some(v), _ => None }
                }

                #[doc = "Try to get as mutable " $variant " reference"]
                #[inline]
                pub fn [<as_ $variant _mut>](&mut self) -> Option<&mut [<$variant:camel>]> {
                    match self { Self::[<$variant:camel>](v) => Some(v), _ => None }
                }
            )*
        }
    };
}

/// Build a `Children` collection from node-convertible items.
///
/// # Example
/// ```ignore
/// let children = children![Element::new("p").text("A"), Text::new("\n")];
/// ```
#[macro_export]
macro_rules! children {
    () => {
        $crate::node::Children::new()
    };
    ($($node:expr),+ $(,)?) => {{
        let mut children = $crate::node::Children::new();
        $(children.push($crate::node::Node::from($node));)+
        children
    }};
}

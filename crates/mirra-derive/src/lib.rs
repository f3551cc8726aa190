use proc_macro::TokenStream;

mod entity;

/// Derive the reflection surface (`TypeName`, `Entity`, `Node`) for a struct
/// with named fields.
///
/// Fields annotated `#[entity(skip)]` are excluded from reflection.
#[proc_macro_derive(Entity, attributes(entity))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    entity::derive_entity(input.into()).into()
}

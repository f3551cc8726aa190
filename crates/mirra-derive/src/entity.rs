use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Error, Fields, GenericParam, Generics, Type};

// derive_entity
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let ident = &input.ident;
    let name = ident.to_string();

    let fields = if let Data::Struct(data) = &input.data {
        if let Fields::Named(named) = &data.fields {
            &named.named
        } else {
            let err = Error::new_spanned(
                &data.fields,
                "Entity can only be derived for structs with named fields",
            );
            return err.to_compile_error();
        }
    } else {
        let err = Error::new_spanned(
            &input.ident,
            "Entity can only be derived for structs with named fields",
        );
        return err.to_compile_error();
    };

    let kept: Vec<&syn::Field> = fields.iter().filter(|field| !is_skipped(field)).collect();

    let metas = kept.iter().map(|field| {
        let field_name = field.ident.as_ref().expect("named field").to_string();
        let (cardinality, sequence) = classify_field(&field.ty);

        quote! {
            ::mirra::field::FieldMeta::new(
                #field_name,
                ::mirra::field::FieldCardinality::#cardinality,
                #sequence,
            )
        }
    });

    let by_name_arms = kept.iter().map(|field| {
        let field_ident = field.ident.as_ref().expect("named field");
        let field_name = field_ident.to_string();

        quote! {
            #field_name => Some(::mirra::traits::Node::view(&self.#field_ident)),
        }
    });

    let by_index_arms = kept.iter().enumerate().map(|(index, field)| {
        let field_ident = field.ident.as_ref().expect("named field");

        quote! {
            #index => Some(::mirra::traits::Node::view(&self.#field_ident)),
        }
    });

    let type_params: Vec<Ident> = input
        .generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();

    let label_expr = if type_params.is_empty() {
        quote! {
            ::mirra::traits::TypeLabel::new(#name)
        }
    } else {
        quote! {
            ::mirra::traits::TypeLabel::generic(
                #name,
                &[#( <#type_params as ::mirra::traits::TypeName>::simple_name() ),*],
            )
        }
    };

    let generics = add_trait_bounds(input.generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::mirra::traits::TypeName for #ident #ty_generics #where_clause {
            fn simple_name() -> &'static str {
                #name
            }

            fn type_label() -> ::mirra::traits::TypeLabel {
                #label_expr
            }
        }

        impl #impl_generics ::mirra::traits::Entity for #ident #ty_generics #where_clause {
            fn type_label(&self) -> ::mirra::traits::TypeLabel {
                <Self as ::mirra::traits::TypeName>::type_label()
            }

            fn fields(&self) -> &'static [::mirra::field::FieldMeta] {
                const FIELDS: &[::mirra::field::FieldMeta] = &[#(#metas),*];

                FIELDS
            }

            fn field_at(&self, index: usize) -> Option<::mirra::view::FieldView<'_>> {
                match index {
                    #(#by_index_arms)*
                    _ => None,
                }
            }

            fn field(&self, name: &str) -> Option<::mirra::view::FieldView<'_>> {
                match name {
                    #(#by_name_arms)*
                    _ => None,
                }
            }
        }

        impl #impl_generics ::mirra::traits::Node for #ident #ty_generics #where_clause {
            fn view(&self) -> ::mirra::view::FieldView<'_> {
                ::mirra::view::FieldView::Entity(self)
            }
        }
    }
}

fn is_skipped(field: &syn::Field) -> bool {
    field.attrs.iter().any(|attr| {
        if !attr.path().is_ident("entity") {
            return false;
        }

        let mut skip = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
            }
            Ok(())
        });

        skip
    })
}

// Declared-type classification. `Vec` and `String` iterate, so they are
// sequence-like for path stepping; `Option` is peeled first.
fn classify_field(ty: &Type) -> (Ident, bool) {
    if is_path_ident(ty, "Vec") {
        (format_ident!("Many"), true)
    } else if is_path_ident(ty, "String") {
        (format_ident!("One"), true)
    } else if is_path_ident(ty, "Option") {
        match generic_arg(ty) {
            Some(inner) if is_path_ident(inner, "Vec") => (format_ident!("Many"), true),
            Some(inner) if is_path_ident(inner, "String") => (format_ident!("Opt"), true),
            _ => (format_ident!("Opt"), false),
        }
    } else {
        (format_ident!("One"), false)
    }
}

fn is_path_ident(ty: &Type, ident: &str) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };

    path.path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == ident)
}

fn generic_arg(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };

    let syn::PathArguments::AngleBracketed(args) = &path.path.segments.last()?.arguments else {
        return None;
    };

    args.args.iter().find_map(|arg| match arg {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    })
}

fn add_trait_bounds(mut generics: Generics) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param
                .bounds
                .push(syn::parse_quote!(::mirra::traits::Node));
            type_param
                .bounds
                .push(syn::parse_quote!(::mirra::traits::TypeName));
        }
    }

    generics
}

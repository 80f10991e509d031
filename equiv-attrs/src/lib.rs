mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Implements `equiv_error::ErrorKind` for a struct.
///
/// The report is described by an `error` attribute on the struct:
/// ```ignore
/// use equiv_attrs::ErrorKind;
/// use equiv_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = format!("unknown symbol `{}`", symbol), labels = ["here"], help = "remove it")]
/// pub struct UnknownSymbol {
///     symbol: char,
/// }
/// ```
///
/// `message` is the headline of the report, `labels` holds one text per span (in span order), and
/// `help` is an optional hint shown below the source. Every tag takes an arbitrary expression
/// whose value implements `ToString`; named fields of the struct are in scope while it is
/// evaluated. Without `labels`, the first span is highlighted with no text.
///
/// Enums and tuple structs are rejected.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let target = match ErrorKindTarget::try_from(input) {
        Ok(target) => target,
        Err(err) => return err.to_compile_error().into(),
    };
    let name = &target.name;
    quote! {
        impl ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            #target
        }
    }.into()
}

use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    Data,
    DeriveInput,
    Expr,
    Fields,
    Ident,
    Result,
    Token,
};

/// The tags accepted by the `error` attribute.
#[derive(Debug, Default)]
pub struct ErrorArgs {
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
}

impl ErrorArgs {
    /// Parses one `tag = expr` pair and stores it.
    fn parse_arg(&mut self, input: ParseStream) -> Result<()> {
        let ident: Ident = input.parse()?;
        input.parse::<Token![=]>()?;

        let slot = match ident.to_string().as_str() {
            "message" => &mut self.message,
            "labels" => &mut self.labels,
            "help" => &mut self.help,
            other => return Err(syn::Error::new_spanned(&ident, format!("unknown tag `{}`", other))),
        };
        *slot = Some(input.parse()?);
        Ok(())
    }
}

impl Parse for ErrorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ErrorArgs::default();

        while !input.is_empty() {
            args.parse_arg(input)?;
            if input.parse::<Token![,]>().is_err() {
                break;
            }
        }

        Ok(args)
    }
}

/// The struct to derive [`ErrorKind`] for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub fields: Fields,
    pub error_args: ErrorArgs,
}

impl TryFrom<DeriveInput> for ErrorKindTarget {
    type Error = syn::Error;

    fn try_from(input: DeriveInput) -> Result<Self> {
        let Data::Struct(data) = input.data else {
            return Err(syn::Error::new_spanned(input.ident, "`ErrorKind` can only be derived for structs"));
        };

        let error_args = match input.attrs.iter().find(|attr| attr.path().is_ident("error")) {
            Some(attr) => attr.parse_args::<ErrorArgs>()?,
            None => ErrorArgs::default(),
        };

        Ok(ErrorKindTarget {
            name: input.ident,
            fields: data.fields,
            error_args,
        })
    }
}

impl ErrorKindTarget {
    /// A `let` statement that brings the named fields of `self` into scope, so the tag
    /// expressions can refer to them.
    fn bind_fields(&self) -> TokenStream2 {
        let name = &self.name;
        match &self.fields {
            Fields::Named(fields) => {
                let names = fields.named.iter().map(|field| field.ident.as_ref());
                quote! {
                    #[allow(unused_variables)]
                    let #name { #(#names),* } = self;
                }
            },
            Fields::Unnamed(_) => quote_spanned! { name.span() =>
                compile_error!("`ErrorKind` cannot be derived for tuple structs");
            },
            Fields::Unit => TokenStream2::new(),
        }
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let bind_fields = self.bind_fields();
        let optional = |tag: &Option<Expr>| match tag {
            Some(expr) => quote! { Some((#expr).to_string()) },
            None => quote! { None },
        };
        let message = optional(&self.error_args.message);
        let help = optional(&self.error_args.help);
        let labels = match &self.error_args.labels {
            Some(expr) => quote! { #expr },
            None => quote! { [""] },
        };

        tokens.extend(quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<'a, (&'a str, std::ops::Range<usize>)> {
                #bind_fields

                equiv_error::assemble_report(
                    src_id,
                    spans,
                    #message,
                    (#labels).into_iter().map(|text| text.to_string()).collect(),
                    #help,
                )
            }
        });
    }
}

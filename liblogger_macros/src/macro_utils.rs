use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{ItemFn, ReturnType, Type};

/// Helper function to get function name as string
pub fn get_fn_name(func: &ItemFn) -> String {
    func.sig.ident.to_string()
}

/// Whether the function's declared return type is spelled `Result<..>`
pub fn returns_result(func: &ItemFn) -> bool {
    match &func.sig.output {
        ReturnType::Type(_, ty) => match ty.as_ref() {
            Type::Path(type_path) => type_path
                .path
                .segments
                .last()
                .map(|segment| segment.ident == "Result")
                .unwrap_or(false),
            _ => false,
        },
        ReturnType::Default => false,
    }
}

/// Expression turning a caught panic payload (`panic_err`) into a `String`
pub fn panic_message() -> TokenStream2 {
    quote! {
        if let Some(s) = panic_err.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_err.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        }
    }
}

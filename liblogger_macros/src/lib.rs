/*
 * Procedural macros for the loader's logging
 *
 * Attribute macros applied to loader functions for tracing, timing and for
 * keeping panics from unwinding across the host's C ABI. Expansions call the
 * `liblogger` macros, so the annotated crate must depend on `liblogger`.
 */

extern crate proc_macro;

mod macro_utils;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, parse_quote, ItemFn};

use crate::macro_utils::{get_fn_name, panic_message, returns_result};

/// Log entry and exit of a function
#[proc_macro_attribute]
pub fn log_entry_exit(_args: TokenStream, input: TokenStream) -> TokenStream {
    let mut input_fn = parse_macro_input!(input as ItemFn);
    let fn_name = get_fn_name(&input_fn);
    let orig_block = input_fn.block.clone();

    input_fn.block = Box::new(parse_quote!({
        liblogger::log_debug!(&format!("ENTRY: {}", #fn_name));

        let result = (|| #orig_block)();

        liblogger::log_debug!(&format!("EXIT: {}", #fn_name));
        result
    }));

    TokenStream::from(quote!(#input_fn))
}

/// Measure execution time of a function
#[proc_macro_attribute]
pub fn measure_time(_args: TokenStream, input: TokenStream) -> TokenStream {
    let mut input_fn = parse_macro_input!(input as ItemFn);
    let fn_name = get_fn_name(&input_fn);
    let orig_block = input_fn.block.clone();

    input_fn.block = Box::new(parse_quote!({
        use std::time::Instant;
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let start_time = Instant::now();

        let result = catch_unwind(AssertUnwindSafe(|| #orig_block));

        let duration_ms = start_time.elapsed().as_millis();

        match result {
            Ok(output) => {
                liblogger::log_info!(&format!("{} completed in {} ms", #fn_name, duration_ms), None);
                output
            },
            Err(panic_err) => {
                liblogger::log_error!(
                    &format!("{} panicked after {} ms", #fn_name, duration_ms),
                    None
                );
                std::panic::resume_unwind(panic_err);
            }
        }
    }));

    TokenStream::from(quote!(#input_fn))
}

/// Catch and log panics but don't crash. Functions that do not return a
/// `Result` fall back to `Default::default()`.
#[proc_macro_attribute]
pub fn catch_panic(_args: TokenStream, input: TokenStream) -> TokenStream {
    let mut input_fn = parse_macro_input!(input as ItemFn);
    let fn_name = get_fn_name(&input_fn);
    let orig_block = input_fn.block.clone();
    let message = panic_message();

    input_fn.block = if returns_result(&input_fn) {
        Box::new(parse_quote!({
            use std::panic::{catch_unwind, AssertUnwindSafe};

            match catch_unwind(AssertUnwindSafe(|| #orig_block)) {
                Ok(result) => result,
                Err(panic_err) => {
                    let panic_msg: String = #message;
                    liblogger::log_error!(&format!("{} caught panic: {}", #fn_name, panic_msg), None);
                    Err(format!("Panic in {}: {}", #fn_name, panic_msg).into())
                }
            }
        }))
    } else {
        Box::new(parse_quote!({
            use std::panic::{catch_unwind, AssertUnwindSafe};

            match catch_unwind(AssertUnwindSafe(|| #orig_block)) {
                Ok(result) => result,
                Err(panic_err) => {
                    let panic_msg: String = #message;
                    liblogger::log_error!(&format!("{} caught panic: {}", #fn_name, panic_msg), None);
                    // Return default value as fallback
                    Default::default()
                }
            }
        }))
    };

    TokenStream::from(quote!(#input_fn))
}

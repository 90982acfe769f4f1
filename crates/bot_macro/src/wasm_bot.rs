use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Error, ItemStruct};

pub fn implementation(input: TokenStream) -> TokenStream {
    let bot_struct = parse_macro_input!(input as ItemStruct);
    if !bot_struct.generics.params.is_empty() {
        return Error::new_spanned(
            &bot_struct.generics,
            "a wasm bot is a process-wide singleton and cannot be generic",
        )
        .to_compile_error()
        .into();
    }
    let bot_identifier = &bot_struct.ident;

    // Exports only take their host-facing names on wasm targets: a native test
    // harness brings its own `main`.
    let expanded = quote! {
        #bot_struct

        bot_lib::lazy_static::lazy_static! {
            /// The controller driving the bot is the state of the `wasm` module.
            static ref __CONTROLLER: std::sync::Mutex<bot_lib::Controller<#bot_identifier>> =
                std::sync::Mutex::new(bot_lib::Controller::new(
                    <#bot_identifier as bot_lib::Bot>::spawn()
                ));
        }

        fn __controller() -> std::sync::MutexGuard<'static, bot_lib::Controller<#bot_identifier>> {
            __CONTROLLER.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
        }

        #[cfg_attr(target_family = "wasm", export_name = "main")]
        pub extern "C" fn __bot_main(
            _argc: i32,
            _argv: *const *const ::std::os::raw::c_char,
        ) -> i32 {
            __controller().initialize();
            bot_lib::wasm_helpers::STATUS_OK
        }

        #[cfg_attr(target_family = "wasm", export_name = "run")]
        pub extern "C" fn __bot_run(position_x: i32, position_y: i32) -> i32 {
            __controller().decide(bot_lib::world::Position::new(position_x, position_y));
            bot_lib::wasm_helpers::STATUS_OK
        }

        #[cfg_attr(target_family = "wasm", export_name = "examine")]
        pub extern "C" fn __bot_examine() -> i32 {
            bot_lib::wasm_helpers::encode_examined(__controller().examine())
        }
    };

    TokenStream::from(expanded)
}

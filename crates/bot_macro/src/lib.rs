use proc_macro::TokenStream;

mod wasm_bot;

/// To build a `wasm bot`, implement the `Bot` trait for a struct and
/// mark that struct with this attribute. It exposes the `main`, `run` and
/// `examine` exports the host expects to drive the bot with.
#[proc_macro_attribute]
pub fn wasm_bot(_: TokenStream, input: TokenStream) -> TokenStream {
    wasm_bot::implementation(input)
}

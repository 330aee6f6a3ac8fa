#![allow(non_snake_case)]

fn main() {
    dioxus::launch(palm::client::App);
}

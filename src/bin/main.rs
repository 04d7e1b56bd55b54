fn main() {
    rust_trains::app().run();
}

fn main() {
    ask::cli::run::<ask::gemini::Client>();
}

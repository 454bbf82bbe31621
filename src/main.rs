fn main() {
    ask::cli::run::<ask::openrouter::Client>();
}

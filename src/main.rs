fn main() {
    teleprompter::app::cli::run();
}

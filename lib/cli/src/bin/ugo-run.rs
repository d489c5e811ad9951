use ugo_cli::cli::ugo_main;

fn main() {
    ugo_main();
}

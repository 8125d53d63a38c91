fn main() {
    if let Err(err) = zipsplit::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

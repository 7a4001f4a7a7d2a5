fn main() {
    if let Err(err) = repocost::run() {
        eprintln!("{}", repocost::format_error(&err));
        std::process::exit(1);
    }
}

fn main() {
    if let Err(err) = genomeview_layout::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

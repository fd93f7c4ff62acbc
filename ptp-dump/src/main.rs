fn main() -> ptp::Result<()> {
    let stdout = std::io::stdout();

    ptp::dump(&mut stdout.lock())
}

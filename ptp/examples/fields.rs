use std::io::Write;

use ptp::{ioc, Command};

fn main() -> ptp::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for cmd in &Command::ALL {
        let code = cmd.code();
        let dir = match ioc::Dir::of(code) {
            Ok(dir) => format!("{:?}", dir),
            Err(err) => err.to_string(),
        };

        writeln!(
            out,
            "{}: dir={} type={:#04x} nr={:#04x} size={}",
            cmd.name(),
            dir,
            ioc::ioc_type(code),
            ioc::ioc_nr(code),
            ioc::ioc_size(code),
        )?;
    }

    Ok(())
}

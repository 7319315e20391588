use log::{Level, Log, Metadata, Record};

pub struct Terminal(pub Level);

impl Log for Terminal {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.0
    }

    #[allow(unused_must_use)]
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut stderr = term::stderr();
            if record.metadata().level() < Level::Info {
                stderr.as_mut().map(|stderr| stderr.fg(term::color::RED));
            } else {
                stderr.as_mut().map(|stderr| stderr.fg(term::color::GREEN));
            }
            eprint!("{:>12}", record.target());
            stderr.as_mut().map(|stderr| stderr.reset());
            eprintln!(" {}", record.args());
        }
    }

    fn flush(&self) {
    }
}

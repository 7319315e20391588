use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use simulator::{Config, Summary};

use crate::Result;

pub trait Output {
    fn next(&mut self, config: &Config, summary: &Summary) -> Result<()>;
}

/// A plain-text report, optionally closed by a separator line.
pub struct Text<W: Write> {
    writer: W,
    separator: bool,
}

impl<W: Write> Text<W> {
    #[inline]
    pub fn new(writer: W, separator: bool) -> Text<W> {
        Text { writer: writer, separator: separator }
    }
}

impl<W: Write> Output for Text<W> {
    fn next(&mut self, config: &Config, summary: &Summary) -> Result<()> {
        let writer = &mut self.writer;
        writeln!(writer, "Arrival Rate: {}", config.arrival_rate)?;
        writeln!(writer, "Scheduling Policy: {} ({} workers)", config.policy, config.workers)?;
        writeln!(writer, "Average Turnaround Time: {}", summary.avg_turnaround_time)?;
        writeln!(writer, "Total Throughput: {} processes per second", summary.throughput)?;
        writeln!(writer, "Average Utilization: {}%", summary.utilization * 100.0)?;
        writeln!(writer, "Average Number of Processes in Ready Queue: {}",
                 summary.avg_queue_occupancy)?;
        if self.separator {
            writeln!(writer, "\n{}\n", "-".repeat(50))?;
        } else {
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }
}

pub fn new<T: AsRef<Path>>(path: T) -> Result<Vec<Box<dyn Output>>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(vec![Box::new(Text::new(io::stdout(), false)) as Box<dyn Output>,
            Box::new(Text::new(file, true))])
}

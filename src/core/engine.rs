use crate::core::{filter, repository, writer};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;
use crate::utils::validation::parse_price;
use std::io::{BufRead, Write};

const AFFIRMATIVE: &str = "yes";

pub struct SearchEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SearchEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Runs one interactive search session over the given console streams.
    /// Any unrecovered error propagates to the caller, which renders it once.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<()> {
        let flights = repository::load_flights(&self.storage, self.config.data_file())?;

        writeln!(output, "Welcome to the flight search service!")?;

        // 先讀完三個輸入，再解析價格（解析失敗即中止，不重問）
        let destination = prompt(input, output, "Enter destination: ")?;
        let min_input = prompt(input, output, "Enter minimum price: ")?;
        let max_input = prompt(input, output, "Enter maximum price: ")?;

        let min_price = parse_price(&min_input)?;
        let max_price = parse_price(&max_input)?;

        tracing::debug!(
            "Searching: destination={}, range=[{}, {}]",
            destination,
            min_price,
            max_price
        );

        let matched = filter::find_flights(&flights, &destination, min_price, max_price);

        if matched.is_empty() {
            writeln!(output, "No flights match the given criteria.")?;
        } else {
            writeln!(output, "Matched flights:")?;
            for flight in &matched {
                writeln!(output, "{}", flight)?;
            }
        }

        let answer = prompt(input, output, "Save results to file? (yes/no): ")?;
        if answer.eq_ignore_ascii_case(AFFIRMATIVE) {
            writer::save_results(&self.storage, self.config.output_file(), &matched)?;
            writeln!(output, "Results saved to {}.", self.config.output_file())?;
        }

        Ok(())
    }
}

// Strips the trailing newline only; interior whitespace is the user's problem.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }

    Ok(line)
}

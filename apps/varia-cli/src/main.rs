//! varia - one-way ANOVA with Tukey HSD over a tabular data file
//!
//! Usage: `varia [input] [group-column] [value-column] [output-prefix]`
//!
//! All arguments are optional and default to `data.xlsx`, `Group`, `Value`,
//! and `anova`. Deliberately no flag parsing; the configuration surface is
//! the four positional parameters.

use std::env;

use varia_core::{AnovaConfig, AnovaRunner};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut config = AnovaConfig::default();

    if let Some(input) = args.first() {
        config.input_path = input.into();
    }
    if let Some(group) = args.get(1) {
        config.group_column = group.clone();
    }
    if let Some(value) = args.get(2) {
        config.value_column = value.clone();
    }
    if let Some(prefix) = args.get(3) {
        config.output_prefix = prefix.clone();
    }

    AnovaRunner::new(config).run()?;
    Ok(())
}

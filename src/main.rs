use std::fs::File;
use std::io::{BufWriter, Write};
use std::process;
use std::time::Instant;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fpmine::command_line_args::{parse_args_or_exit, Arguments};
use fpmine::errors::Result;
use fpmine::itemizer::Itemizer;
use fpmine::output::{write_itemsets, write_rules};
use fpmine::transaction_reader::read_transactions;

fn run(args: &Arguments) -> Result<()> {
    let start = Instant::now();
    args.config.validate()?;

    info!("mining data set: {}", args.input_file_path);
    let mut itemizer = Itemizer::new();
    let transactions = read_transactions(&args.input_file_path, &mut itemizer)?;
    info!(
        "read {} transactions over {} distinct items",
        transactions.len(),
        itemizer.num_items()
    );

    let output = fpmine::mine(&transactions, &args.config)?;
    info!(
        "mined {} frequent itemsets, {} rules passed thresholds",
        output.itemsets.len(),
        output.rules.len()
    );

    let mut itemsets_out = BufWriter::new(File::create(&args.output_itemsets_path)?);
    write_itemsets(
        &mut itemsets_out,
        &output.itemsets,
        output.num_transactions,
        &itemizer,
    )?;
    let mut rules_out = BufWriter::new(File::create(&args.output_rules_path)?);
    write_rules(&mut rules_out, &output.rules, &itemizer)?;
    itemsets_out.flush()?;
    rules_out.flush()?;

    info!("total runtime: {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let arguments = parse_args_or_exit();
    if let Err(err) = run(&arguments) {
        error!("{}", err);
        process::exit(1);
    }
}

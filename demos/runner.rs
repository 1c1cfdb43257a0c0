use std::{env, fs};

use anyhow::Context;
use blin::interp::Interpreter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let path = env::args()
        .nth(1)
        .context("a Blin source file should be provided")?;
    let source = fs::read_to_string(&path).with_context(|| format!("cannot read '{path}'"))?;

    let outcome = Interpreter::load(&source).run()?;

    if !outcome.output.is_empty() {
        println!("Output: {}", outcome.output);
    }
    println!("Final stack: {:?}", outcome.stack);

    Ok(())
}

use colored::Colorize;
use std::env;
use std::io;
use std::path::Path;

// Import from organized modules
use faascost::Result;
use faascost::engine::CostEngine;
use faascost::formatting::{format_currency, format_number_with_commas};
use faascost::pricing::PricingCatalog;
use faascost::types::{Projection, UsageInput, VendorId};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() > 2 {
        eprintln!("Usage: faascost [vendor [projection]] < usage.json");
        eprintln!("  vendors: aws, azure, gCloud, ibm");
        eprintln!("  projections: requestCharge, computeCharge, total");
        std::process::exit(2);
    }

    // Read the usage document from stdin
    let usage: UsageInput = serde_json::from_reader(io::stdin())?;

    // Rates come from the compiled-in catalog unless a file overrides them
    let catalog = match env::var_os("FAASCOST_PRICING") {
        Some(path) => PricingCatalog::load(Path::new(&path))?,
        None => PricingCatalog::default(),
    };
    let engine = CostEngine::new(catalog);

    match args.as_slice() {
        [] => print_comparison_table(&engine, &usage)?,
        [vendor] => {
            let vendor: VendorId = vendor.parse()?;
            let breakdown = engine.estimate(&usage, vendor)?;
            println!(
                "{}: {} request, {} compute, {} total",
                vendor.display_name(),
                breakdown.request_charge,
                breakdown.compute_charge,
                breakdown.total
            );
        }
        [vendor, projection] => {
            let vendor: VendorId = vendor.parse()?;
            let projection: Projection = projection.parse()?;
            let cost = engine.estimate_cost(&usage, vendor, projection)?;
            println!("{}", format_currency(cost));
        }
        _ => unreachable!(),
    }

    Ok(())
}

fn print_comparison_table(engine: &CostEngine, usage: &UsageInput) -> Result<()> {
    println!(
        "Estimated cost of {} invocations at {}ms, {}MB:",
        format_number_with_commas(usage.invocation_count),
        usage.execution_time_ms,
        usage.memory_mb
    );
    println!(
        "{} {} {} {}",
        format!("{:<24}", "Vendor").bold(),
        format!("{:>12}", "Request").bold(),
        format!("{:>12}", "Compute").bold(),
        format!("{:>12}", "Total").bold()
    );

    for vendor in VendorId::ALL {
        let breakdown = engine.estimate(usage, vendor)?;
        println!(
            "{:<24} {:>12} {:>12} {}",
            vendor.display_name(),
            breakdown.request_charge.to_formatted_string(),
            breakdown.compute_charge.to_formatted_string(),
            format!("{:>12}", breakdown.total.to_formatted_string()).green()
        );
    }

    Ok(())
}

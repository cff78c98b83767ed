/// chart data - the 12-month series in the shape the line chart reads
use term_deposit_rs::chart::{chart_json, PROJECTION_LINES};
use term_deposit_rs::compute;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let result = compute(100_000.0, 110.0, 30, false);

    println!("lines: {}", serde_json::to_string(&PROJECTION_LINES)?);
    println!("rows: {}", chart_json(&result.series)?);

    Ok(())
}

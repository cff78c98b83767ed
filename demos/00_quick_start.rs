/// quick start - project a fixed-term deposit
use term_deposit_rs::compute;
use term_deposit_rs::display::{format_currency, Currency};

fn main() {
    // 100,000 at 110% TNA in 30-day terms, interest reinvested
    let result = compute(100_000.0, 110.0, 30, true);

    println!(
        "interest per term: {}",
        format_currency(result.period_interest, Currency::Ars)
    );
    for p in &result.projections {
        println!(
            "{}: total {} (gain {})",
            p.label,
            format_currency(p.total_amount, Currency::Ars),
            format_currency(p.gain, Currency::Ars)
        );
    }
}

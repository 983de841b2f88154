// ============================================================================
// Basic Usage
// Tour of parsing, policy division, derived math, and aggregates
// ============================================================================

use candec::prelude::*;
use candec::{bulk, stats};

fn main() -> DeciResult<()> {
    tracing_subscriber::fmt().with_env_filter("debug").init();

    // Literals accept '.' and ',' in either role; the rightmost separator is
    // the decimal point.
    let european: Deci = "1.234,56".parse()?;
    let american: Deci = "1,234.56".parse()?;
    println!("{} == {} -> {}", european, american, european == american);

    // The division operator follows the process-wide policy.
    let third = Deci::one().checked_div(&Deci::from(3))?;
    println!("1 / 3 under the default policy: {}", third);

    set_division_policy(DivisionPolicy::new(4, RoundingMode::HalfEven)?);
    let third = Deci::one().checked_div(&Deci::from(3))?;
    println!("1 / 3 with 4 half-even digits:  {}", third);
    reset_division_policy();

    // Derived algorithms.
    let two = Deci::from(2);
    println!("sqrt(2) = {}", two.sqrt(DEFAULT_SQRT_PRECISION)?);
    println!("2^10    = {}", two.pow(&Deci::from(10))?);
    println!("10 mod 3 = {}", Deci::from(10).modulo(&Deci::from(3))?);
    println!(
        "4.7 to the nearest 5 = {}",
        "4.7".parse::<Deci>()?.round_to_nearest(&Deci::from(5))?
    );

    // Aggregates and bulk transforms.
    let returns: Vec<Deci> = ["2", "4", "4", "4", "5", "5", "7", "9"]
        .iter()
        .map(|t| t.parse())
        .collect::<DeciResult<_>>()?;
    if let Some(mean) = stats::mean(&returns) {
        println!("mean return: {}", mean);
    }
    if let Some(deviation) = stats::std_deviation(&returns, VarianceKind::Sample) {
        println!("sample standard deviation: {}", deviation);
    }
    let rebased = bulk::scale_to_sum(&returns, &Deci::from(100))?;
    println!("rebased to 100: {:?}", rebased);

    // Formatting.
    let amount: Deci = "1234567.891".parse()?;
    println!("currency:   {}", amount.format_currency("$", 2)?);
    println!("scientific: {}", amount.to_scientific_notation(3)?);
    println!("words:      {}", Deci::from(1234567).to_words());

    Ok(())
}

// ============================================================================
// Basic Usage Example
// ============================================================================

use fixed_money::numeric;
use fixed_money::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    if let Err(e) = fixed_money::logging::init_logging() {
        eprintln!("logging disabled: {}", e);
    }

    println!("=== Fixed Money Example ===\n");

    // Mixed-precision arithmetic
    let a = FixedDecimal::new(123, 1); // 12.3
    let b = FixedDecimal::new(90, 2); // 0.90
    match numeric::subtract(a, b) {
        Ok(diff) => println!("{} - {} = {}", a, b, diff),
        Err(e) => println!("{} - {} failed: {}", a, b, e),
    }

    // Multiplication past the precision cap is rounded
    let x = FixedDecimal::new(1234, 6);
    let y = FixedDecimal::new(890, 6);
    if let Ok(product) = numeric::multiply(x, y) {
        println!("{} * {} = {} ({:?})", x, y, product, product);
    }

    // Addition past the precision cap is rejected
    let tiny = FixedDecimal::new(1, 12);
    if let Err(e) = numeric::add(FixedDecimal::ONE, tiny) {
        println!("1 + {} rejected: {}", tiny, e);
    }

    // Quotient
    let total = FixedDecimal::new(1000, 0);
    let size = FixedDecimal::new(10, 0);
    println!(
        "{} fits {} times into {}",
        size,
        numeric::divide_quotient(total, size).unwrap_or_default(),
        total
    );

    // Currency-tagged money
    println!("\n=== Money ===");
    let config = MoneyConfig::eurozone();
    let price = config.money(FixedDecimal::new(345, 1));
    let vat = Percent::new(21, 2);

    match price.apply_percent(vat) {
        Ok(tax) => println!("{} of {} is {}", vat, price, tax),
        Err(e) => println!("tax failed: {}", e),
    }

    let dollars = Money::us_dollar(10, 0);
    match price.checked_add(&dollars) {
        Ok(sum) => println!("unexpected sum: {}", sum),
        Err(e) => println!("{} + {} rejected: {}", price, dollars, e),
    }

    #[cfg(feature = "serde")]
    {
        let j = r#"{"currency":"EUR","unit":"euro","value":"529235.4859"}"#;
        match Money::from_json(j, &config) {
            Ok(m) => println!("decoded {} -> {}", j, m),
            Err(e) => println!("decode failed: {}", e),
        }
    }
}

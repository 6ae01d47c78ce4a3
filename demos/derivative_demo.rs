//! Example: central-difference derivatives
//!
//! Estimates a few derivatives with the typed API, then feeds untyped JSON
//! operands through the runtime-checked API.
//!
//! Run with `cargo run -p numcalc --example derivative_demo`.

use numcalc::{dynamic, prelude::*};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("Typed API");
    println!("  sum(1, 2)              = {}", sum(1.0, 2.0));
    println!("  d/dx x^2 at 3          = {:.6}", derivative(|x: f64| x * x, 3.0));
    println!("  d/dx sin at 0          = {:.6}", derivative(f64::sin, 0.0));

    let counted = CountingFunction::new(|x: f64| x.sin() * x.exp());
    let slope = derivative(|x: f64| counted.call(x), 1.0);
    println!(
        "  d/dx sin(x)e^x at 1    = {slope:.6} ({} evaluations)",
        counted.count()
    );

    println!("\nStep size");
    let exact = 1.0_f64.cos();
    for h in [1e-1, 1e-3, 1e-5, 1e-9, 1e-13] {
        let estimator = CentralDifference::new(h)?;
        let error = (estimator.estimate(f64::sin, 1.0) - exact).abs();
        println!("  h = {h:<8e} error = {error:.3e}");
    }

    println!("\nDynamic API");
    let f = Value::function(|x| x * x * x);
    println!(
        "  derivative(x^3, 1)     = {:.6}",
        dynamic::derivative(&f, &Value::from(1.0), None)?
    );

    for (a, b) in [(Value::from("1"), 2.0), (Value::Null, 1.0)] {
        match dynamic::sum(&a, &Value::from(b)) {
            Ok(total) => println!("  sum({a:?}, {b})         = {total}"),
            Err(err) => println!("  sum({a:?}, {b}) rejected: {err}"),
        }
    }

    let json: serde_json::Value = serde_json::from_str(r#"[1.5, "2.5", null]"#)?;
    if let Value::List(items) = Value::from(json) {
        match dynamic::sum(&items[0], &items[1]) {
            Ok(total) => println!("  JSON sum               = {total}"),
            Err(err) => println!("  JSON sum rejected: {err}"),
        }
    }

    Ok(())
}

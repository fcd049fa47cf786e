use gatecheck::{property, Reference, RuleSetBuilder};

fn main() {
    // Define rules
    let ruleset = RuleSetBuilder::new()
        .rule(property("user.age").gte(18_i64).required())
        .rule(property("user.status").eq("active"))
        .rule(property("user.roles[]").some("admin"))
        .log(|trace| println!("{trace}"))
        .build();

    println!("{ruleset}");

    // Evaluate against a reference
    let reference = Reference::new()
        .set("user.age", 25_i64)
        .set("user.status", "active");

    match ruleset.evaluate(&reference) {
        Ok(Some(true)) => println!("Result: pass"),
        Ok(Some(false)) => println!("Result: fail"),
        Ok(None) => println!("No rules configured."),
        Err(err) => eprintln!("Misconfigured rule set: {err}"),
    }
}

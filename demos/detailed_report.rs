use gatecheck::{Reference, RuleSetBuilder};

fn main() {
    let ruleset = RuleSetBuilder::from_file("demos/rules.json")
        .expect("failed to load demos/rules.json")
        .build();

    let reference = Reference::from_json(
        r#"{
            "user": {
                "age": 25,
                "status": "active",
                "roles": ["viewer"],
                "orders": [{"state": "shipped"}, {"state": "open"}]
            }
        }"#,
    )
    .expect("reference is valid JSON");

    let report = ruleset
        .evaluate_detailed(&reference)
        .expect("rule set is well formed");

    println!("{report}");
    println!();
    println!("Per-rule results: {:?}", report.rule_results());
    println!();
    println!("{}", report.trace());
}

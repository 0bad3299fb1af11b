use bowclass::{train_test_split_and_evaluate, Dataset, ModelConfig};

const CONFIGS: &[&str] = &[
    r#"{"model": "logistic_regression", "learning_rate": 0.1, "epochs": 500, "lam": 0.01}"#,
    r#"{"model": "perceptron", "epochs": 50, "class_weight": {"0": 1.0, "1": 2.0}}"#,
    r#"{"model": "linear_svm", "learning_rate": 0.001, "C": 0.05}"#,
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Classifiers From JSON Config ===\n");

    let dataset = Dataset::synthetic(40, 6, 1.0, 21);

    for json in CONFIGS {
        let config = ModelConfig::from_json(json)?;
        let mut model = config.build()?;
        let evaluation = train_test_split_and_evaluate(&dataset, &mut model, 0.25, 42)?;

        println!("{}", json);
        println!("  {}\n", serde_json::to_string(&evaluation)?);
    }

    Ok(())
}

use bowclass::{
    train_test_split_and_evaluate, AnyClassifier, Dataset, LinearSvm, LogisticRegression,
    Perceptron, StandardScaler,
};
use std::collections::BTreeMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Violin vs Viola Classifier Comparison ===\n");

    // Stand-ins for per-clip feature vectors (MFCC, chroma and spectral
    // contrast summaries) of two instrument classes.
    let blobs = Dataset::synthetic(60, 8, 0.8, 7);
    let mut categories = BTreeMap::new();
    categories.insert(
        "Violin".to_string(),
        blobs.features.rows().into_iter().take(60).map(|r| r.to_vec()).collect(),
    );
    categories.insert(
        "Viola".to_string(),
        blobs.features.rows().into_iter().skip(60).map(|r| r.to_vec()).collect(),
    );

    let (mut dataset, names) = Dataset::from_categories(&categories)?;
    println!("Classes: 0 = {}, 1 = {}", names[0], names[1]);
    println!("Samples: {}, features: {}\n", dataset.n_samples(), dataset.n_features());

    let mut scaler = StandardScaler::new();
    dataset.features = scaler.fit_transform(&dataset.features)?;

    let mut models: Vec<AnyClassifier> = vec![
        LogisticRegression::with_params(0.1, 500, 0.001).into(),
        Perceptron::with_params(0.01, 100).into(),
        LinearSvm::with_params(0.001, 1000, 0.01).into(),
    ];

    println!(
        "{:<22} {:>10} {:>10} {:>10} {:>10}",
        "Model", "Accuracy", "Precision", "Recall", "F1"
    );
    println!("{}", "-".repeat(66));

    for model in models.iter_mut() {
        let evaluation = train_test_split_and_evaluate(&dataset, model, 0.2, 42)?;
        println!(
            "{:<22} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            model.name(),
            evaluation.accuracy,
            evaluation.precision,
            evaluation.recall,
            evaluation.f1
        );
        println!("  confusion matrix: {:?}", evaluation.confusion_matrix);
    }

    Ok(())
}

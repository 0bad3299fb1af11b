use bowclass::{metrics, ClassWeights, Classifier, Dataset, LinearSvm};
use ndarray::{concatenate, s, Axis};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Class Weights on an Imbalanced Set ===\n");

    // Keep every negative clip but only a handful of positives.
    let full = Dataset::synthetic(50, 4, 0.4, 3);
    let features = concatenate![
        Axis(0),
        full.features.slice(s![..5, ..]),
        full.features.slice(s![50.., ..])
    ];
    let labels = concatenate![Axis(0), full.labels.slice(s![..5]), full.labels.slice(s![50..])];
    let dataset = Dataset::new(features, labels)?;

    let (negatives, positives) = dataset.class_counts();
    println!("negatives: {}, positives: {}\n", negatives, positives);

    for positive_weight in [1.0, 5.0, 10.0] {
        let weights = ClassWeights::new(1.0, positive_weight)?;
        let mut svm = LinearSvm::with_params(0.001, 1000, 0.01).class_weights(weights);
        let predictions = svm.fit(&dataset.features, &dataset.labels)?.predict(&dataset.features)?;

        println!(
            "weight {:>4.1}: recall {:.3}, precision {:.3}, bias {:+.4}",
            positive_weight,
            metrics::recall_score(&dataset.labels, &predictions)?,
            metrics::precision_score(&dataset.labels, &predictions)?,
            svm.intercept().unwrap_or_default()
        );
    }

    Ok(())
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ClassifierError, Result};

/// A validated binary class label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    Negative,
    Positive,
}

impl Label {
    /// Accepts exactly `0.0` and `1.0`.
    pub fn from_value(value: f64) -> Option<Self> {
        if value == 0.0 {
            Some(Label::Negative)
        } else if value == 1.0 {
            Some(Label::Positive)
        } else {
            None
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Label::Negative => 0.0,
            Label::Positive => 1.0,
        }
    }

    /// The `{-1, +1}` encoding used by the hinge loss.
    pub fn sign(self) -> f64 {
        match self {
            Label::Negative => -1.0,
            Label::Positive => 1.0,
        }
    }
}

/// Per-class multipliers applied to each sample's contribution to an update.
///
/// Only the two recognized labels can carry a weight. Anything else is
/// rejected when the weights are built, never looked up at training time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, f64>",
    into = "BTreeMap<String, f64>"
)]
pub struct ClassWeights {
    negative: f64,
    positive: f64,
}

impl ClassWeights {
    pub fn new(negative: f64, positive: f64) -> Result<Self> {
        check_weight(0, negative)?;
        check_weight(1, positive)?;
        Ok(Self { negative, positive })
    }

    /// Builds weights from `(label, weight)` pairs. Labels left out keep 1.0.
    pub fn from_map<I>(weights: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i64, f64)>,
    {
        let mut negative = 1.0;
        let mut positive = 1.0;

        for (label, weight) in weights {
            match label {
                0 => negative = weight,
                1 => positive = weight,
                other => return Err(ClassifierError::UnknownClass(other.to_string())),
            }
        }

        Self::new(negative, positive)
    }

    pub fn get(&self, label: Label) -> f64 {
        match label {
            Label::Negative => self.negative,
            Label::Positive => self.positive,
        }
    }
}

impl Default for ClassWeights {
    fn default() -> Self {
        Self {
            negative: 1.0,
            positive: 1.0,
        }
    }
}

impl TryFrom<BTreeMap<String, f64>> for ClassWeights {
    type Error = ClassifierError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self> {
        let pairs = map
            .into_iter()
            .map(|(key, weight)| {
                key.trim()
                    .parse::<i64>()
                    .map(|label| (label, weight))
                    .map_err(|_| ClassifierError::UnknownClass(key))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_map(pairs)
    }
}

impl From<ClassWeights> for BTreeMap<String, f64> {
    fn from(weights: ClassWeights) -> Self {
        BTreeMap::from([
            ("0".to_string(), weights.negative),
            ("1".to_string(), weights.positive),
        ])
    }
}

fn check_weight(label: i64, weight: f64) -> Result<()> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(ClassifierError::hyperparameter(
            &format!("class_weight[{}]", label),
            weight,
        ));
    }
    Ok(())
}

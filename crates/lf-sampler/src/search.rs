//! Design space definitions and sweep strategies.

use rand::{Rng, RngCore};
use std::collections::HashMap;

/// A concrete assignment of every parameter in a [`SearchSpace`].
pub type ParameterSet = HashMap<String, ParameterValue>;

/// A single parameter dimension in the design space.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDef {
    /// Record field name (e.g. "legHeight").
    pub name: String,
    /// The kind of search range.
    pub kind: ParameterKind,
}

/// Describes how a parameter is sampled.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterKind {
    /// Continuous uniform range [low, high].
    FloatRange { low: f64, high: f64 },
    /// Integer range [low, high] inclusive.
    IntRange { low: i64, high: i64 },
    /// Explicit choices.
    Choice { values: Vec<ParameterValue> },
}

/// A concrete parameter value produced by a search strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterValue {
    Float(f64),
    Int(i64),
}

impl ParameterValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Float(v) => *v,
            Self::Int(v) => *v as f64,
        }
    }

    /// Integer view; floats only qualify when they carry no fractional part.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Float(v) if v.fract() == 0.0 && v.is_finite() => Some(*v as i64),
            Self::Float(_) => None,
        }
    }
}

impl std::fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
        }
    }
}

/// The full design space: an ordered list of parameter definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSpace {
    pub parameters: Vec<ParameterDef>,
}

impl SearchSpace {
    pub fn new() -> Self {
        Self {
            parameters: Vec::new(),
        }
    }

    pub fn add_float(mut self, name: impl Into<String>, low: f64, high: f64) -> Self {
        self.parameters.push(ParameterDef {
            name: name.into(),
            kind: ParameterKind::FloatRange { low, high },
        });
        self
    }

    pub fn add_int(mut self, name: impl Into<String>, low: i64, high: i64) -> Self {
        self.parameters.push(ParameterDef {
            name: name.into(),
            kind: ParameterKind::IntRange { low, high },
        });
        self
    }

    pub fn add_choice(mut self, name: impl Into<String>, values: Vec<ParameterValue>) -> Self {
        self.parameters.push(ParameterDef {
            name: name.into(),
            kind: ParameterKind::Choice { values },
        });
        self
    }
}

impl Default for SearchSpace {
    fn default() -> Self {
        Self::new()
    }
}

// ---- Grid search ----

/// Exhaustive grid search; the first parameter is the outermost axis.
#[derive(Debug, Clone)]
pub struct GridSearch {
    combos: Vec<ParameterSet>,
}

impl GridSearch {
    /// `float_steps` is the number of evenly spaced points taken on each
    /// continuous dimension.
    pub fn new(space: &SearchSpace, float_steps: usize) -> Self {
        Self {
            combos: Self::build_grid(space, float_steps),
        }
    }

    /// Every grid point, in sweep order.
    pub fn points(&self) -> &[ParameterSet] {
        &self.combos
    }

    fn build_grid(space: &SearchSpace, float_steps: usize) -> Vec<ParameterSet> {
        let mut axes: Vec<Vec<(&str, ParameterValue)>> = Vec::new();

        for param in &space.parameters {
            let values: Vec<ParameterValue> = match &param.kind {
                ParameterKind::FloatRange { low, high } => {
                    let steps = float_steps.max(2);
                    (0..steps)
                        .map(|i| {
                            let t = i as f64 / (steps - 1) as f64;
                            ParameterValue::Float(low + t * (high - low))
                        })
                        .collect()
                }
                ParameterKind::IntRange { low, high } => {
                    (*low..=*high).map(ParameterValue::Int).collect()
                }
                ParameterKind::Choice { values } => values.clone(),
            };
            axes.push(
                values
                    .into_iter()
                    .map(|v| (param.name.as_str(), v))
                    .collect(),
            );
        }

        // Cartesian product
        let mut result: Vec<ParameterSet> = vec![HashMap::new()];
        for axis in &axes {
            let mut next = Vec::with_capacity(result.len() * axis.len());
            for existing in &result {
                for (name, value) in axis {
                    let mut combo = existing.clone();
                    combo.insert(name.to_string(), *value);
                    next.push(combo);
                }
            }
            result = next;
        }

        result
    }
}

// ---- Random search ----

/// Independent uniform sampling across the design space.
///
/// The random source is owned by the strategy, so a seeded generator makes
/// the whole draw sequence reproducible.
#[derive(Debug, Clone)]
pub struct RandomSearch<R> {
    space: SearchSpace,
    rng: R,
}

impl<R: RngCore> RandomSearch<R> {
    pub fn new(space: SearchSpace, rng: R) -> Self {
        Self { space, rng }
    }

    pub fn sample_one(&mut self) -> ParameterSet {
        let mut params = HashMap::new();

        for param in &self.space.parameters {
            let value = match &param.kind {
                ParameterKind::FloatRange { low, high } => {
                    ParameterValue::Float(self.rng.gen_range(*low..=*high))
                }
                ParameterKind::IntRange { low, high } => {
                    ParameterValue::Int(self.rng.gen_range(*low..=*high))
                }
                ParameterKind::Choice { values } => {
                    let idx = self.rng.gen_range(0..values.len());
                    values[idx]
                }
            };
            params.insert(param.name.clone(), value);
        }

        params
    }

    /// Draw `count` independent parameter sets.
    pub fn suggest(&mut self, count: usize) -> Vec<ParameterSet> {
        (0..count).map(|_| self.sample_one()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sample_space() -> SearchSpace {
        SearchSpace::new()
            .add_int("legNumber", 2, 5)
            .add_float("legHeight", 2.0, 8.0)
    }

    #[test]
    fn grid_search_produces_correct_count() {
        let space = SearchSpace::new()
            .add_int("a", 1, 3) // 3 values
            .add_int("b", 10, 11); // 2 values
        assert_eq!(GridSearch::new(&space, 5).points().len(), 6);
    }

    #[test]
    fn float_axes_use_requested_steps() {
        let space = SearchSpace::new().add_float("x", 0.0, 1.0);
        let values: Vec<f64> = GridSearch::new(&space, 3)
            .points()
            .iter()
            .map(|p| p["x"].as_f64())
            .collect();
        assert_eq!(values, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn grid_first_parameter_is_outermost() {
        let space = SearchSpace::new()
            .add_choice("a", vec![ParameterValue::Int(1), ParameterValue::Int(2)])
            .add_choice("b", vec![ParameterValue::Int(7), ParameterValue::Int(8)]);
        let gs = GridSearch::new(&space, 2);
        let order: Vec<(i64, i64)> = gs
            .points()
            .iter()
            .map(|p| (p["a"].as_i64().unwrap(), p["b"].as_i64().unwrap()))
            .collect();
        assert_eq!(order, vec![(1, 7), (1, 8), (2, 7), (2, 8)]);
    }

    #[test]
    fn random_search_respects_bounds() {
        let mut rs = RandomSearch::new(sample_space(), ChaCha8Rng::seed_from_u64(7));
        let suggestions = rs.suggest(200);
        assert_eq!(suggestions.len(), 200);

        for params in &suggestions {
            match params.get("legNumber") {
                Some(ParameterValue::Int(v)) => assert!((2..=5).contains(v)),
                other => panic!("unexpected legNumber value: {other:?}"),
            }
            match params.get("legHeight") {
                Some(ParameterValue::Float(v)) => assert!(*v >= 2.0 && *v <= 8.0),
                other => panic!("unexpected legHeight value: {other:?}"),
            }
        }
    }

    #[test]
    fn random_search_is_reproducible_with_seed() {
        let mut a = RandomSearch::new(sample_space(), ChaCha8Rng::seed_from_u64(42));
        let mut b = RandomSearch::new(sample_space(), ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a.suggest(10), b.suggest(10));
    }

    #[test]
    fn choice_parameter_works() {
        let values = vec![ParameterValue::Float(10.0), ParameterValue::Float(15.0)];
        let space = SearchSpace::new().add_choice("mainLength", values.clone());
        let mut rs = RandomSearch::new(space, ChaCha8Rng::seed_from_u64(1));
        for params in rs.suggest(30) {
            assert!(values.contains(&params["mainLength"]));
        }
    }

    #[test]
    fn integral_float_converts_to_int() {
        assert_eq!(ParameterValue::Float(3.0).as_i64(), Some(3));
        assert_eq!(ParameterValue::Float(3.5).as_i64(), None);
        assert_eq!(ParameterValue::Int(4).as_f64(), 4.0);
    }
}

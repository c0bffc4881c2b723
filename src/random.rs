pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    fn pick(&mut self, len: usize) -> usize {
        let index = (self.next_f64() * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    #[cfg(target_arch = "wasm32")]
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn next_f64(&mut self) -> f64 {
        fastrand::f64()
    }
}

#[cfg(test)]
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            cursor: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pick_covers_range_and_clamps() {
        let mut rng = ScriptedRandom::new(&[0.0, 0.34, 0.67, 0.999_999, 1.0]);
        let picks: Vec<usize> = (0..5).map(|_| rng.pick(3)).collect();
        assert_eq!(picks, vec![0, 1, 2, 2, 2]);
    }

    #[test]
    fn chance_is_strictly_below() {
        let mut rng = ScriptedRandom::new(&[0.019, 0.02]);
        assert!(rng.chance(0.02));
        assert!(!rng.chance(0.02));
    }

    #[test]
    fn system_random_stays_in_unit_interval() {
        let mut rng = SystemRandom;
        for _ in 0..1000 {
            let value = rng.next_f64();
            assert!((0.0..1.0).contains(&value));
        }
    }
}

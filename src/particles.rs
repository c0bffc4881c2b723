use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleTrail {
    particles: VecDeque<Particle>,
    next_id: u64,
}

impl ParticleTrail {
    pub fn spawn(&mut self, x: f64, y: f64, cap: usize) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        if cap == 0 {
            return id;
        }
        while self.particles.len() >= cap {
            self.particles.pop_front();
        }
        self.particles.push_back(Particle { id, x, y });
        id
    }

    pub fn remove(&mut self, id: u64) {
        self.particles.retain(|particle| particle.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

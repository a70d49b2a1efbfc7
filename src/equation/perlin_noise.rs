//! Reference-style coherent (Perlin) noise with seed-derived permutation and
//! gradient tables. `alpha` is the amplitude divisor between octaves
//! (persistence-like), `beta` the frequency multiplier, `n` the octave count.
//! Deterministic for a fixed seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const B: usize = 0x100;
const BM: usize = 0xff;
const N: f64 = 0x1000 as f64;
const TABLE: usize = B + B + 2;

pub struct Perlin {
    alpha: f64,
    beta: f64,
    n: i32,
    p: [usize; TABLE],
    g1: [f64; TABLE],
    g2: [[f64; 2]; TABLE],
    g3: [[f64; 3]; TABLE],
}

impl Perlin {
    pub fn new(alpha: f64, beta: f64, n: i32, seed: i64) -> Perlin {
        let mut rng = StdRng::seed_from_u64(seed as u64);

        let mut p = [0usize; TABLE];
        let mut g1 = [0.0f64; TABLE];
        let mut g2 = [[0.0f64; 2]; TABLE];
        let mut g3 = [[0.0f64; 3]; TABLE];

        let rand_gradient = |rng: &mut StdRng| -> f64 {
            (rng.random_range(0..(2 * B as i64)) - B as i64) as f64 / B as f64
        };

        for i in 0..B {
            p[i] = i;
            g1[i] = rand_gradient(&mut rng);
            for j in 0..2 {
                g2[i][j] = rand_gradient(&mut rng);
            }
            normalize2(&mut g2[i]);
            for j in 0..3 {
                g3[i][j] = rand_gradient(&mut rng);
            }
            normalize3(&mut g3[i]);
        }

        for i in (1..B).rev() {
            let j = rng.random_range(0..B);
            p.swap(i, j);
        }

        for i in 0..B + 2 {
            p[B + i] = p[i];
            g1[B + i] = g1[i];
            g2[B + i] = g2[i];
            g3[B + i] = g3[i];
        }

        Perlin {
            alpha,
            beta,
            n,
            p,
            g1,
            g2,
            g3,
        }
    }

    /// 1-D fractal sum: n octaves, amplitude divided by alpha and frequency
    /// multiplied by beta each octave
    pub fn noise1d(&self, x: f64) -> f64 {
        let mut sum = 0.0;
        let mut px = x;
        let mut scale = 1.0;
        for _ in 0..self.n {
            sum += self.noise1(px) / scale;
            scale *= self.alpha;
            px *= self.beta;
        }
        sum
    }

    pub fn noise2d(&self, x: f64, y: f64) -> f64 {
        let mut sum = 0.0;
        let (mut px, mut py) = (x, y);
        let mut scale = 1.0;
        for _ in 0..self.n {
            sum += self.noise2(px, py) / scale;
            scale *= self.alpha;
            px *= self.beta;
            py *= self.beta;
        }
        sum
    }

    pub fn noise3d(&self, x: f64, y: f64, z: f64) -> f64 {
        let mut sum = 0.0;
        let (mut px, mut py, mut pz) = (x, y, z);
        let mut scale = 1.0;
        for _ in 0..self.n {
            sum += self.noise3(px, py, pz) / scale;
            scale *= self.alpha;
            px *= self.beta;
            py *= self.beta;
            pz *= self.beta;
        }
        sum
    }

    fn noise1(&self, arg: f64) -> f64 {
        let (bx0, bx1, rx0, rx1) = setup(arg);
        let sx = s_curve(rx0);
        let u = rx0 * self.g1[self.p[bx0]];
        let v = rx1 * self.g1[self.p[bx1]];
        lerp(sx, u, v)
    }

    fn noise2(&self, x: f64, y: f64) -> f64 {
        let (bx0, bx1, rx0, rx1) = setup(x);
        let (by0, by1, ry0, ry1) = setup(y);

        let i = self.p[bx0];
        let j = self.p[bx1];

        let b00 = self.p[i + by0];
        let b10 = self.p[j + by0];
        let b01 = self.p[i + by1];
        let b11 = self.p[j + by1];

        let sx = s_curve(rx0);
        let sy = s_curve(ry0);

        let at2 = |rx: f64, ry: f64, q: &[f64; 2]| rx * q[0] + ry * q[1];

        let u = at2(rx0, ry0, &self.g2[b00]);
        let v = at2(rx1, ry0, &self.g2[b10]);
        let a = lerp(sx, u, v);

        let u = at2(rx0, ry1, &self.g2[b01]);
        let v = at2(rx1, ry1, &self.g2[b11]);
        let b = lerp(sx, u, v);

        lerp(sy, a, b)
    }

    fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        let (bx0, bx1, rx0, rx1) = setup(x);
        let (by0, by1, ry0, ry1) = setup(y);
        let (bz0, bz1, rz0, rz1) = setup(z);

        let i = self.p[bx0];
        let j = self.p[bx1];

        let b00 = self.p[i + by0];
        let b10 = self.p[j + by0];
        let b01 = self.p[i + by1];
        let b11 = self.p[j + by1];

        let sx = s_curve(rx0);
        let sy = s_curve(ry0);
        let sz = s_curve(rz0);

        let at3 = |rx: f64, ry: f64, rz: f64, q: &[f64; 3]| rx * q[0] + ry * q[1] + rz * q[2];

        let u = at3(rx0, ry0, rz0, &self.g3[b00 + bz0]);
        let v = at3(rx1, ry0, rz0, &self.g3[b10 + bz0]);
        let a = lerp(sx, u, v);

        let u = at3(rx0, ry1, rz0, &self.g3[b01 + bz0]);
        let v = at3(rx1, ry1, rz0, &self.g3[b11 + bz0]);
        let b = lerp(sx, u, v);

        let c = lerp(sy, a, b);

        let u = at3(rx0, ry0, rz1, &self.g3[b00 + bz1]);
        let v = at3(rx1, ry0, rz1, &self.g3[b10 + bz1]);
        let a = lerp(sx, u, v);

        let u = at3(rx0, ry1, rz1, &self.g3[b01 + bz1]);
        let v = at3(rx1, ry1, rz1, &self.g3[b11 + bz1]);
        let b = lerp(sx, u, v);

        let d = lerp(sy, a, b);

        lerp(sz, c, d)
    }
}

/// lattice cell of `arg`: wrapped left/right indices plus the fractional
/// offsets to each
fn setup(arg: f64) -> (usize, usize, f64, f64) {
    let t = arg + N;
    let it = t as i64;
    let b0 = (it & BM as i64) as usize;
    let b1 = (b0 + 1) & BM;
    let r0 = t - it as f64;
    let r1 = r0 - 1.0;
    (b0, b1, r0, r1)
}

fn s_curve(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

fn normalize2(v: &mut [f64; 2]) {
    let s = (v[0] * v[0] + v[1] * v[1]).sqrt();
    if s == 0.0 {
        v[0] = 1.0;
        return;
    }
    v[0] /= s;
    v[1] /= s;
}

fn normalize3(v: &mut [f64; 3]) {
    let s = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if s == 0.0 {
        v[0] = 1.0;
        return;
    }
    v[0] /= s;
    v[1] /= s;
    v[2] /= s;
}

//! Fixed table of named callables usable inside expressions, plus the
//! session-owned memo cache for the 1-D Perlin sampler.

use crate::equation::perlin_noise::Perlin;
use rand::Rng;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Every function name the expression grammar accepts. Arity is fixed per
/// function and checked at parse time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    // unary real functions
    Sqrt,
    Abs,
    Acos,
    Acosh,
    Asin,
    Asinh,
    Atan,
    Atanh,
    Cbrt,
    Ceil,
    Cos,
    Cosh,
    Floor,
    Sin,
    Sinh,
    Tan,
    Tanh,
    // binary real functions
    Min,
    Max,
    Atan2,
    Dim,
    Mod,
    Remainder,
    Copysign,
    Hypot,
    // uniform random in [0, 1), never memoized
    Rnd,
    // coherent noise: p1(alpha, beta, n, seed, x) is memoized by its 5-tuple,
    // p2/p3 are recomputed every call
    P1,
    P2,
    P3,
}

impl Function {
    pub fn from_name(name: &str) -> Option<Function> {
        let f = match name {
            "sqrt" => Function::Sqrt,
            "abs" => Function::Abs,
            "acos" => Function::Acos,
            "acosh" => Function::Acosh,
            "asin" => Function::Asin,
            "asinh" => Function::Asinh,
            "atan" => Function::Atan,
            "atanh" => Function::Atanh,
            "cbrt" => Function::Cbrt,
            "ceil" => Function::Ceil,
            "cos" => Function::Cos,
            "cosh" => Function::Cosh,
            "floor" => Function::Floor,
            "sin" => Function::Sin,
            "sinh" => Function::Sinh,
            "tan" => Function::Tan,
            "tanh" => Function::Tanh,
            "min" => Function::Min,
            "max" => Function::Max,
            "atan2" => Function::Atan2,
            "dim" => Function::Dim,
            "mod" => Function::Mod,
            "remainder" => Function::Remainder,
            "copysign" => Function::Copysign,
            "hypot" => Function::Hypot,
            "rnd" => Function::Rnd,
            "p1" => Function::P1,
            "p2" => Function::P2,
            "p3" => Function::P3,
            _ => return None,
        };
        Some(f)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Function::Sqrt => "sqrt",
            Function::Abs => "abs",
            Function::Acos => "acos",
            Function::Acosh => "acosh",
            Function::Asin => "asin",
            Function::Asinh => "asinh",
            Function::Atan => "atan",
            Function::Atanh => "atanh",
            Function::Cbrt => "cbrt",
            Function::Ceil => "ceil",
            Function::Cos => "cos",
            Function::Cosh => "cosh",
            Function::Floor => "floor",
            Function::Sin => "sin",
            Function::Sinh => "sinh",
            Function::Tan => "tan",
            Function::Tanh => "tanh",
            Function::Min => "min",
            Function::Max => "max",
            Function::Atan2 => "atan2",
            Function::Dim => "dim",
            Function::Mod => "mod",
            Function::Remainder => "remainder",
            Function::Copysign => "copysign",
            Function::Hypot => "hypot",
            Function::Rnd => "rnd",
            Function::P1 => "p1",
            Function::P2 => "p2",
            Function::P3 => "p3",
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Function::Sqrt
            | Function::Abs
            | Function::Acos
            | Function::Acosh
            | Function::Asin
            | Function::Asinh
            | Function::Atan
            | Function::Atanh
            | Function::Cbrt
            | Function::Ceil
            | Function::Cos
            | Function::Cosh
            | Function::Floor
            | Function::Sin
            | Function::Sinh
            | Function::Tan
            | Function::Tanh => 1,
            Function::Min
            | Function::Max
            | Function::Atan2
            | Function::Dim
            | Function::Mod
            | Function::Remainder
            | Function::Copysign
            | Function::Hypot => 2,
            Function::Rnd => 0,
            // alpha, beta, n, seed, then one/two/three coordinates
            Function::P1 => 5,
            Function::P2 => 6,
            Function::P3 => 7,
        }
    }
}

/// memo key for the 1-D sampler: f64 parameters keyed by bit pattern so the
/// tuple is hashable and a hit is bit-identical
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct PerlinKey {
    alpha: u64,
    beta: u64,
    x: u64,
    n: i32,
    seed: i64,
}

const DEFAULT_CACHE_CAP: usize = 65_536;

/// Session-owned function table state: the p1 memo cache and its
/// instrumentation counter. Evaluation holds `&FunctionLibrary`, so the cache
/// uses an insert-if-absent critical section rather than process globals.
pub struct FunctionLibrary {
    perlin_cache: Mutex<HashMap<PerlinKey, f64>>,
    cache_cap: usize,
    noise1d_evals: AtomicUsize,
}

impl Default for FunctionLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionLibrary {
    pub fn new() -> Self {
        Self::with_cache_cap(DEFAULT_CACHE_CAP)
    }

    /// cap on memo entries; once full, samples are computed but not inserted
    pub fn with_cache_cap(cache_cap: usize) -> Self {
        FunctionLibrary {
            perlin_cache: Mutex::new(HashMap::new()),
            cache_cap,
            noise1d_evals: AtomicUsize::new(0),
        }
    }

    /// how many times the 1-D noise sampler actually ran (memo hits excluded)
    pub fn noise1d_evals(&self) -> usize {
        self.noise1d_evals.load(Ordering::Relaxed)
    }

    pub fn cached_samples(&self) -> usize {
        self.perlin_cache.lock().unwrap().len()
    }

    /// Applies `func` to already-evaluated arguments. Arity is enforced when
    /// the expression is compiled; a mismatched slice here yields NaN instead
    /// of panicking mid-render.
    pub fn call(&self, func: Function, args: &[f64]) -> f64 {
        if args.len() != func.arity() {
            return f64::NAN;
        }
        match func {
            Function::Sqrt => args[0].sqrt(),
            Function::Abs => args[0].abs(),
            Function::Acos => args[0].acos(),
            Function::Acosh => args[0].acosh(),
            Function::Asin => args[0].asin(),
            Function::Asinh => args[0].asinh(),
            Function::Atan => args[0].atan(),
            Function::Atanh => args[0].atanh(),
            Function::Cbrt => args[0].cbrt(),
            Function::Ceil => args[0].ceil(),
            Function::Cos => args[0].cos(),
            Function::Cosh => args[0].cosh(),
            Function::Floor => args[0].floor(),
            Function::Sin => args[0].sin(),
            Function::Sinh => args[0].sinh(),
            Function::Tan => args[0].tan(),
            Function::Tanh => args[0].tanh(),
            Function::Min => args[0].min(args[1]),
            Function::Max => args[0].max(args[1]),
            Function::Atan2 => args[0].atan2(args[1]),
            Function::Dim => (args[0] - args[1]).max(0.0),
            Function::Mod => args[0] % args[1],
            Function::Remainder => ieee_remainder(args[0], args[1]),
            Function::Copysign => args[0].copysign(args[1]),
            Function::Hypot => args[0].hypot(args[1]),
            Function::Rnd => rand::rng().random::<f64>(),
            Function::P1 => self.noise1d_memoized(args),
            Function::P2 => {
                Perlin::new(args[0], args[1], args[2] as i32, args[3] as i64).noise2d(args[4], args[5])
            }
            Function::P3 => Perlin::new(args[0], args[1], args[2] as i32, args[3] as i64)
                .noise3d(args[4], args[5], args[6]),
        }
    }

    fn noise1d_memoized(&self, args: &[f64]) -> f64 {
        let (alpha, beta, x) = (args[0], args[1], args[4]);
        let n = args[2] as i32;
        let seed = args[3] as i64;
        let key = PerlinKey {
            alpha: alpha.to_bits(),
            beta: beta.to_bits(),
            x: x.to_bits(),
            n,
            seed,
        };

        // insert-if-absent under one lock so parallel evaluation never
        // races read-check-then-write
        let mut cache = self.perlin_cache.lock().unwrap();
        if let Some(v) = cache.get(&key) {
            return *v;
        }
        self.noise1d_evals.fetch_add(1, Ordering::Relaxed);
        let v = Perlin::new(alpha, beta, n, seed).noise1d(x);
        if cache.len() < self.cache_cap {
            cache.insert(key, v);
        }
        v
    }
}

/// IEEE 754 remainder: x - round(x/y)*y with ties to even
fn ieee_remainder(x: f64, y: f64) -> f64 {
    if y == 0.0 || !x.is_finite() || y.is_nan() {
        return f64::NAN;
    }
    let q = x / y;
    let mut r = q.round();
    // round() breaks ties away from zero; the IEEE operation wants even
    if (q - q.trunc()).abs() == 0.5 && r % 2.0 != 0.0 {
        r -= q.signum();
    }
    x - r * y
}

//___________________________________TESTS____________________________________
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_name_roundtrip() {
        for name in [
            "sqrt", "abs", "acos", "acosh", "asin", "asinh", "atan", "atanh", "cbrt", "ceil",
            "cos", "cosh", "floor", "sin", "sinh", "tan", "tanh", "min", "max", "atan2", "dim",
            "mod", "remainder", "copysign", "hypot", "rnd", "p1", "p2", "p3",
        ] {
            let f = Function::from_name(name).unwrap();
            assert_eq!(f.name(), name);
        }
        assert_eq!(Function::from_name("exp"), None);
    }

    #[test]
    fn test_unary_and_binary_calls() {
        let lib = FunctionLibrary::new();
        assert_relative_eq!(lib.call(Function::Sqrt, &[16.0]), 4.0);
        assert_relative_eq!(lib.call(Function::Hypot, &[3.0, 4.0]), 5.0);
        assert_relative_eq!(lib.call(Function::Dim, &[5.0, 3.0]), 2.0);
        assert_relative_eq!(lib.call(Function::Dim, &[3.0, 5.0]), 0.0);
        assert_relative_eq!(lib.call(Function::Mod, &[7.5, 2.0]), 1.5);
        assert_relative_eq!(lib.call(Function::Copysign, &[3.0, -1.0]), -3.0);
    }

    #[test]
    fn test_ieee_remainder() {
        assert_relative_eq!(ieee_remainder(5.0, 2.0), 1.0);
        assert_relative_eq!(ieee_remainder(7.0, 2.0), -1.0); // 7/2 rounds to 4 (ties to even)
        assert_relative_eq!(ieee_remainder(-5.0, 2.0), -1.0);
        assert!(ieee_remainder(1.0, 0.0).is_nan());
    }

    #[test]
    fn test_wrong_arity_yields_nan() {
        let lib = FunctionLibrary::new();
        assert!(lib.call(Function::Sqrt, &[1.0, 2.0]).is_nan());
        assert!(lib.call(Function::Rnd, &[1.0]).is_nan());
    }

    #[test]
    fn test_rnd_in_unit_interval() {
        let lib = FunctionLibrary::new();
        for _ in 0..100 {
            let v = lib.call(Function::Rnd, &[]);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_p1_memoization() {
        let lib = FunctionLibrary::new();
        let args = [2.0, 2.0, 3.0, 100.0, 0.5];
        let first = lib.call(Function::P1, &args);
        assert_eq!(lib.noise1d_evals(), 1);
        let second = lib.call(Function::P1, &args);
        // second call hits the memo: no new noise computation, bit-identical
        assert_eq!(lib.noise1d_evals(), 1);
        assert_eq!(first.to_bits(), second.to_bits());

        let third = lib.call(Function::P1, &[2.0, 2.0, 3.0, 100.0, 0.75]);
        assert_eq!(lib.noise1d_evals(), 2);
        let _ = third;
        assert_eq!(lib.cached_samples(), 2);
    }

    #[test]
    fn test_p1_cache_cap() {
        let lib = FunctionLibrary::with_cache_cap(1);
        lib.call(Function::P1, &[2.0, 2.0, 1.0, 7.0, 0.1]);
        lib.call(Function::P1, &[2.0, 2.0, 1.0, 7.0, 0.2]);
        assert_eq!(lib.cached_samples(), 1);
        // uncached keys still compute
        assert_eq!(lib.noise1d_evals(), 2);
    }

    #[test]
    fn test_p2_not_memoized() {
        let lib = FunctionLibrary::new();
        let a = lib.call(Function::P2, &[2.0, 2.0, 2.0, 42.0, 0.3, 0.7]);
        let b = lib.call(Function::P2, &[2.0, 2.0, 2.0, 42.0, 0.3, 0.7]);
        assert_eq!(a.to_bits(), b.to_bits()); // deterministic, just recomputed
        assert_eq!(lib.cached_samples(), 0);
    }
}

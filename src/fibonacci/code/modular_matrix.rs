//! Fibonacci modulo `m` by 2x2 matrix exponentiation.
//!
//! Raises `[[1, 1], [1, 0]]` to the n-th power by repeated squaring, so the
//! cost is O(log n) multiplications regardless of how large F(n) gets.

/// Default modulus, the prime 10^9 + 7
pub const DEFAULT_MODULUS: u64 = 1_000_000_007;

type Matrix = [[u64; 2]; 2];

const IDENTITY: Matrix = [[1, 0], [0, 1]];
const STEP: Matrix = [[1, 1], [1, 0]];

/// Compute F(n) mod `modulus`. `modulus` must be at least 1.
pub fn fibonacci_modular(n: u64, modulus: u64) -> u64 {
    let mut result = IDENTITY;
    let mut base = STEP;
    let mut exp = n;

    while exp > 0 {
        if exp & 1 == 1 {
            result = multiply(&result, &base, modulus);
        }
        base = multiply(&base, &base, modulus);
        exp >>= 1;
    }

    // [[F(n+1), F(n)], [F(n), F(n-1)]]
    result[0][1] % modulus
}

fn multiply(a: &Matrix, b: &Matrix, modulus: u64) -> Matrix {
    let m = modulus as u128;
    let cell = |i: usize, j: usize| {
        let sum = a[i][0] as u128 * b[0][j] as u128 + a[i][1] as u128 * b[1][j] as u128;
        (sum % m) as u64
    };
    [[cell(0, 0), cell(0, 1)], [cell(1, 0), cell(1, 1)]]
}

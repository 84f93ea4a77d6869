/// Computes the integer cube root of a `u128` using binary search (robust,
/// but slower)
///
/// The integer cube root of `n` is defined as the largest integer `x`
/// such that:
///
/// ```text
/// x * x * x <= n
/// ```
///
/// This function:
/// - Works for the entire `u128` domain
/// - Does not use floating-point arithmetic
/// - Avoids overflow by using division-based comparisons
/// - Runs in `O(log n)` time using binary search
pub fn cube_root_binary_search(n: u128) -> u128 {
    // Handle trivial cases explicitly.
    if n < 2 {
        return n;
    }

    // The root fits in ceil(bits/3) bits, so the search space
    // need not exceed that.
    let mut low: u128 = 1;
    let mut high: u128 = 1 << (128 - n.leading_zeros()).div_ceil(3);
    let mut result: u128 = 0;

    while low <= high {
        let mid = low + (high - low) / 2;

        // Compare mid * mid * mid <= n without overflow.
        if mid <= n / mid / mid {
            result = mid;
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }

    result
}

/// Computes the integer cube root of a `u128` using the
/// Newton–Raphson method (faster)
///
/// The integer cube root of `n` is defined as the largest integer `x`
/// such that:
///
/// ```text
/// x * x * x <= n
/// ```
///
/// This function:
/// - Uses the Newton–Raphson iteration:
///   x_{k+1} = (2*x_k + n / x_k^2) / 3
/// - Seeds at the smallest power of two at or above the true root
/// - Avoids overflow by computing `n / x_k^2`
/// - Converges very quickly in `O(log log n)` iterations
pub fn cube_root_newton(n: u128) -> u128 {
    if n < 2 {
        return n;
    }

    let mut x = 1u128 << (128 - n.leading_zeros()).div_ceil(3);

    loop {
        let next = (2 * x + n / (x * x)) / 3;
        if next >= x {
            // No further progress; x is within a step of floor(cbrt(n)).
            break;
        }
        x = next;
    }

    // Settle on the exact floor with division-based comparisons, so the
    // cube itself is never formed.
    while x > n / x / x {
        x -= 1;
    }
    while x + 1 <= n / (x + 1) / (x + 1) {
        x += 1;
    }
    x
}

use crate::prelude::ErrorsIcbrt;

// One ternary digit of the root per step, most significant first: double the
// partial root, form the trial subtrahend, keep it only when the remainder
// still covers it. The remainder can never go negative because every
// subtraction is guarded by the comparison. `steps` is ceil(width / 3) for
// the radicand's bit width; with `u128` registers the subtrahend cannot
// overflow for any width up to 64 bits.
fn restoring_cube_root(mut remainder: u128, steps: u32) -> u128 {
    let mut y: u128 = 0;
    for step in (0..steps).rev() {
        let s = 3 * step;
        y *= 2;
        let b = (3 * y * (y + 1) + 1) << s;
        if remainder >= b {
            remainder -= b;
            y += 1;
        }
    }
    y
}

/// Computes the integer cube root of a `u32` with a restoring digit
/// recurrence, the bit-serial method a hardware arithmetic unit would use.
///
/// The integer cube root of `x` is defined as the largest integer `y`
/// such that:
///
/// ```text
/// y * y * y <= x
/// ```
///
/// Each iteration resolves one bit of the root, most significant first. With
/// the partial root `y` doubled and the shift `s` stepping down by 3, the
/// trial subtrahend is:
///
/// ```text
/// b = (3*y*(y + 1) + 1) << s
/// ```
///
/// which is exactly the cube growth `(y+1)^3 - y^3` scaled into digit
/// position `s/3`, from the binomial expansion. The bit is committed when the
/// remainder still covers `b`.
///
/// This function:
/// - Works for the entire `u32` domain (11 iterations, shifts 30 down to 0)
/// - Uses only additions, comparisons and shifts per iteration
/// - Does not use floating-point arithmetic
/// - Avoids overflow by widening the working registers to `u128`
/// - Runs in a fixed number of iterations independent of the input
pub fn cube_root_digit_recurrence_u32(x: u32) -> u32 {
    restoring_cube_root(x as u128, u32::BITS.div_ceil(3)) as u32
}

/// Computes the integer cube root of a `u64` with the same restoring digit
/// recurrence, widened to the 64-bit radicand domain.
///
/// The recurrence runs `ceil(64/3) = 22` iterations with shifts 63 down to 0;
/// everything else matches [`cube_root_digit_recurrence_u32`]. The result is
/// exact over the whole `u64` domain, `floor(cbrt(u64::MAX)) = 2642245` at
/// the top.
pub fn cube_root_digit_recurrence_u64(x: u64) -> u64 {
    restoring_cube_root(x as u128, u64::BITS.div_ceil(3)) as u64
}

/// Computes the integer cube root of a radicand declared to fit in an
/// explicit bit width, rejecting inputs that do not.
///
/// The fixed-width entry points make the domain bound a property of the
/// parameter type. This variant instead takes the width as a value, runs
/// `ceil(radicand_bits / 3)` iterations, and fails rather than silently
/// producing a digit sequence for a radicand wider than the datapath it was
/// asked to model.
///
/// # Parameters
///
/// * `x` - The radicand.
/// * `radicand_bits` - The bit width of the modeled input domain, 1 to 64.
///
/// # Returns
///
/// `floor(cbrt(x))`, exact, computed in `ceil(radicand_bits / 3)` iterations.
///
/// # Errors
///
/// * `Misconfiguration` if `radicand_bits` is zero or exceeds 64.
/// * `InvalidInputRange` if `x >= 2^radicand_bits`.
pub fn cube_root_digit_recurrence_checked(x: u64, radicand_bits: u32) -> Result<u64, ErrorsIcbrt> {
    if radicand_bits == 0 || radicand_bits > u64::BITS {
        return Err(ErrorsIcbrt::Misconfiguration(
            "radicand width must be between 1 and 64 bits",
        ));
    }
    if radicand_bits < u64::BITS && x >> radicand_bits != 0 {
        return Err(ErrorsIcbrt::InvalidInputRange(
            "radicand does not fit in the configured bit width",
        ));
    }
    Ok(restoring_cube_root(x as u128, radicand_bits.div_ceil(3)) as u64)
}

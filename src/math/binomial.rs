/// Builds row `n` of Pascal's triangle as floats: `[C(n, 0), ..., C(n, n)]`.
///
/// The row is grown in place one level at a time, so the cost is quadratic in
/// `n` with a single `n + 1` buffer. Entries are exact while they fit the
/// 53-bit mantissa (through `n = 56`) and carry a relative error of a few ulps
/// beyond that. They overflow to infinity past `n = 1029`.
#[must_use]
pub fn pascal_row(n: usize) -> Vec<f64> {
    let mut row = Vec::with_capacity(n + 1);
    row.push(1.0);
    for level in 1..=n {
        row.push(1.0);
        // Right to left: row[i - 1] still holds the previous level's value.
        for i in (1..level).rev() {
            row[i] += row[i - 1];
        }
    }
    row
}

/// Exact binomial coefficient `C(n, i)`.
///
/// Returns `Some(0)` for `i > n`, and `None` when the value does not fit in a
/// `u64` (the middle of row 68 onward).
#[must_use]
pub fn binomial(n: usize, i: usize) -> Option<u64> {
    if i > n {
        return Some(0);
    }
    let k = u128::try_from(i.min(n - i)).ok()?;
    let n = u128::try_from(n).ok()?;
    let mut value: u128 = 1;
    for j in 1..=k {
        // value == C(n - k + j - 1, j - 1), so the product is j · C(n - k + j, j).
        value = value.checked_mul(n - k + j)? / j;
    }
    u64::try_from(value).ok()
}

//! 2-D integer matrix multiplication.

use kata_common::InvalidArgument;

/// Column count of a rectangular, non-empty matrix.
fn columns(matrix: &[Vec<i64>], argument: &'static str) -> Result<usize, InvalidArgument> {
    let width = matrix
        .first()
        .map(Vec::len)
        .filter(|&width| width > 0)
        .ok_or_else(|| InvalidArgument::new(argument, "matrix must have at least one cell"))?;
    if matrix.iter().any(|row| row.len() != width) {
        return Err(InvalidArgument::new(argument, "rows differ in length"));
    }
    Ok(width)
}

/// Product of the `p×q` matrix `m1` and the `q×r` matrix `m2`.
///
/// ```
/// let product = kata_loops::get_matrix_product(&[vec![1, 2, 3]], &[vec![4], vec![5], vec![6]])?;
/// assert_eq!(product, vec![vec![32]]);
/// # Ok::<(), kata_loops::InvalidArgument>(())
/// ```
///
/// # Errors
/// Either matrix is empty or ragged, the inner dimensions disagree, or a
/// cell overflows `i64`.
pub fn get_matrix_product(
    m1: &[Vec<i64>],
    m2: &[Vec<i64>],
) -> Result<Vec<Vec<i64>>, InvalidArgument> {
    let inner = columns(m1, "m1")?;
    let width = columns(m2, "m2")?;
    if m2.len() != inner {
        return Err(InvalidArgument::new(
            "m2",
            format!("expected {inner} rows to match m1's columns, found {}", m2.len()),
        ));
    }

    m1.iter()
        .map(|row| {
            (0..width)
                .map(|col| {
                    row.iter()
                        .zip(m2)
                        .try_fold(0i64, |acc, (&a, other)| {
                            a.checked_mul(other[col])
                                .and_then(|term| acc.checked_add(term))
                        })
                        .ok_or_else(|| InvalidArgument::new("m1", "product overflows i64"))
                })
                .collect()
        })
        .collect()
}

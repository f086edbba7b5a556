/// Default tolerance for floating-point comparisons
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Header row of the upstream feed
pub const FEED_HEADER: &str = "Tipo Titulo;Data Vencimento;Data Base;Taxa Compra Manha;Taxa Venda Manha;PU Compra Manha;PU Venda Manha;PU Base Manha";

/// Assert that two floating-point numbers are approximately equal
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64) {
  assert!(
    (actual - expected).abs() < tolerance,
    "Values not approximately equal:\n  actual:   {}\n  expected: {}\n  diff:     {}\n  tolerance: {}",
    actual,
    expected,
    (actual - expected).abs(),
    tolerance
  );
}

/// Build a feed body from the standard header and the given data lines
pub fn feed_with_rows(rows: &[&str]) -> String {
  let mut body = String::from(FEED_HEADER);
  for row in rows {
    body.push('\n');
    body.push_str(row);
  }
  body.push('\n');
  body
}
